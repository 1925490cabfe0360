use lazy_static::lazy_static;
use rand::rngs::OsRng;
use rand::{Rng, TryRngCore};
use std::collections::HashSet;
use std::sync::Mutex;

use crate::domain::utils::id::ReservationId;

/// Number of random bytes backing one reservation id (64 hex chars).
const ID_BYTES: usize = 32;

// Stores every reservation id handed out by this process.
lazy_static! {
    static ref MINTED_IDS: Mutex<HashSet<String>> = Mutex::new(HashSet::new());
}

/// Mints a fresh reservation id: 32 bytes of OS entropy, hex encoded.
///
/// If the OS entropy source fails, the bytes are drawn from `fallback`
/// instead, so minting an id never fails. Ids already handed out by this
/// process are rejected and redrawn.
pub fn mint_reservation_id<R: Rng + ?Sized>(fallback: &mut R) -> ReservationId {
    let mut id_set = match MINTED_IDS.lock() {
        Ok(guard) => guard,
        Err(poisoned) => {
            log::error!("Minted-id set mutex was poisoned. Recovering data.");
            poisoned.into_inner()
        }
    };

    loop {
        let encoded = hex::encode(random_id_bytes(fallback));

        if id_set.insert(encoded.clone()) {
            return ReservationId::new(encoded);
        }

        log::warn!("Generated reservation id '{}' is already in use. Generating a new one.", encoded);
    }
}

fn random_id_bytes<R: Rng + ?Sized>(fallback: &mut R) -> [u8; ID_BYTES] {
    let mut bytes = [0u8; ID_BYTES];

    if let Err(e) = OsRng.try_fill_bytes(&mut bytes) {
        log::warn!("OS entropy source failed ({}). Falling back to the simulation random source.", e);
        fallback.fill(&mut bytes[..]);
    }

    bytes
}
