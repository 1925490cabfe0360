use rand::Rng;
use rand::seq::IndexedRandom;

/// A guest identity attached to a reservation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub name: String,
    pub phone: String,
}

/// Pre-generated pool of guest identities the simulation draws from.
#[derive(Debug, Clone)]
pub struct CustomerPool {
    customers: Vec<Customer>,
}

impl CustomerPool {
    /// Generates `count` random customers from the supplied random source.
    pub fn generate<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Self {
        let customers = (0..count).map(|_| Customer { name: random_name(rng), phone: random_phone(rng) }).collect();

        CustomerPool { customers }
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// Draws one customer uniformly at random.
    ///
    /// # Panics
    /// Panics if the pool is empty.
    pub fn pick_random<R: Rng + ?Sized>(&self, rng: &mut R) -> &Customer {
        self.customers.choose(rng).expect("Customer pool must not be empty.")
    }
}

/// 5 random lowercase letters (a-z).
fn random_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..5).map(|_| (b'a' + rng.random_range(0..26u8)) as char).collect()
}

/// 9 random digits.
fn random_phone<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..9).map(|_| (b'0' + rng.random_range(0..10u8)) as char).collect()
}
