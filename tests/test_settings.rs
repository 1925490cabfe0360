use restaurant_seating::api::config_dto::SimulationConfigDto;
use restaurant_seating::domain::settings::SimulationSettings;
use restaurant_seating::error::Error;
use restaurant_seating::loader::parser::parse_json_str;

#[test]
fn defaults_describe_the_built_in_room() {
    let settings = SimulationSettings::default();

    assert_eq!(settings.num_tables, 100);
    assert_eq!(settings.num_customers, 200);
    assert_eq!(settings.opening_minute, 720);
    assert_eq!(settings.closing_minute, 1320);
    assert_eq!(settings.slot_interval, 15);
    assert_eq!(settings.max_party_size, 15);
    assert_eq!(settings.call_cap, 100_000);

    assert_eq!(settings.layout.combined_capacity(1), 4);
    assert_eq!(settings.layout.combined_capacity(2), 6);
    assert_eq!(settings.layout.combined_capacity(3), 8);
}

#[test]
fn time_slots_cover_opening_hours_on_the_grid() {
    let settings = SimulationSettings::default();
    let slots = settings.time_slots();

    assert_eq!(slots.len(), 41);
    assert_eq!(slots.first(), Some(&720));
    assert_eq!(slots.last(), Some(&1320));

    for pair in slots.windows(2) {
        assert_eq!(pair[1] - pair[0], 15);
    }
}

#[test]
fn missing_config_fields_fall_back_to_defaults() {
    let dto: SimulationConfigDto = parse_json_str(r#"{ "numTables": 10, "slotInterval": 30 }"#).expect("Config must parse.");
    let settings = SimulationSettings::from_dto(dto).expect("Config must validate.");

    assert_eq!(settings.num_tables, 10);
    assert_eq!(settings.slot_interval, 30);
    assert_eq!(settings.num_customers, 200);
    assert_eq!(settings.layout.combined_capacity(1), 4);
}

#[test]
fn empty_config_equals_the_defaults() {
    let dto: SimulationConfigDto = parse_json_str("{}").expect("Config must parse.");
    let settings = SimulationSettings::from_dto(dto).expect("Config must validate.");

    assert_eq!(settings.num_tables, SimulationSettings::default().num_tables);
    assert_eq!(settings.simulation_runs, SimulationSettings::default().simulation_runs);
}

#[test]
fn zero_tables_are_rejected() {
    let dto: SimulationConfigDto = parse_json_str(r#"{ "numTables": 0 }"#).expect("Config must parse.");

    assert!(matches!(SimulationSettings::from_dto(dto), Err(Error::InvalidConfigError(_))));
}

#[test]
fn non_positive_slot_interval_is_rejected() {
    let dto: SimulationConfigDto = parse_json_str(r#"{ "slotInterval": 0 }"#).expect("Config must parse.");

    assert!(matches!(SimulationSettings::from_dto(dto), Err(Error::InvalidConfigError(_))));
}

#[test]
fn closing_before_opening_is_rejected() {
    let dto: SimulationConfigDto = parse_json_str(r#"{ "openingMinute": 900, "closingMinute": 800 }"#).expect("Config must parse.");

    assert!(matches!(SimulationSettings::from_dto(dto), Err(Error::InvalidConfigError(_))));
}

#[test]
fn seat_loss_must_stay_below_table_capacity() {
    let dto: SimulationConfigDto = parse_json_str(r#"{ "perTableCapacity": 4, "sharedSeatLoss": 4 }"#).expect("Config must parse.");

    assert!(matches!(SimulationSettings::from_dto(dto), Err(Error::InvalidConfigError(_))));
}

#[test]
fn malformed_json_reports_a_deserialization_error() {
    let outcome = parse_json_str::<SimulationConfigDto>(r#"{ "numTables": "#);

    assert!(matches!(outcome, Err(Error::DeserializationError(_))));
}
