//! Shop customer generation with nested addresses.

use fake::{
    Fake,
    faker::address::en::{BuildingNumber, CityName, CountryName, StreetName, ZipCode},
    faker::name::en::Name,
};
use rand::Rng;
use time::{Duration, OffsetDateTime};
use uuid::Uuid;

/// Generated postal address owned by a customer.
#[derive(Debug, Clone)]
pub struct GeneratedAddress {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub street: String,
    pub city: String,
    pub zip: String,
    pub country: String,
}

/// Generated shop customer with its addresses.
#[derive(Debug, Clone)]
pub struct GeneratedCustomer {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub created_at: OffsetDateTime,
    pub addresses: Vec<GeneratedAddress>,
}

/// Configuration for customer generation.
#[derive(Debug, Clone)]
pub struct CustomerGenConfig {
    /// Number of addresses per customer (inclusive range).
    pub addresses_per_customer: (usize, usize),
    /// Probability that a phone number is filled in.
    pub phone_fill_rate: f64,
}

impl Default for CustomerGenConfig {
    fn default() -> Self {
        Self {
            addresses_per_customer: (1, 3),
            phone_fill_rate: 0.8,
        }
    }
}

/// Generates realistic shop customers.
pub struct CustomerGenerator {
    config: CustomerGenConfig,
}

impl CustomerGenerator {
    /// Creates a new customer generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: CustomerGenConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: CustomerGenConfig) -> Self {
        Self { config }
    }

    /// Generates a single customer with its nested addresses.
    pub fn generate(&self, rng: &mut impl Rng) -> GeneratedCustomer {
        let id = Uuid::new_v4();
        let name: String = Name().fake_with_rng(rng);
        let email = generate_email(&name, rng);

        let phone = if rng.gen_bool(self.config.phone_fill_rate) {
            Some(format!(
                "+1-{:03}-{:03}-{:04}",
                rng.gen_range(200..999),
                rng.gen_range(200..999),
                rng.gen_range(0..10_000)
            ))
        } else {
            None
        };

        let (min_addresses, max_addresses) = self.config.addresses_per_customer;
        let address_count = rng.gen_range(min_addresses..=max_addresses);
        let addresses = (0..address_count)
            .map(|_| self.generate_address(id, rng))
            .collect();

        GeneratedCustomer {
            id,
            name,
            email,
            phone,
            created_at: OffsetDateTime::now_utc() - Duration::days(rng.gen_range(0..365)),
            addresses,
        }
    }

    /// Generates multiple customers.
    pub fn generate_batch(&self, count: usize, rng: &mut impl Rng) -> Vec<GeneratedCustomer> {
        (0..count).map(|_| self.generate(rng)).collect()
    }

    fn generate_address(&self, customer_id: Uuid, rng: &mut impl Rng) -> GeneratedAddress {
        let number: String = BuildingNumber().fake_with_rng(rng);
        let street: String = StreetName().fake_with_rng(rng);

        GeneratedAddress {
            id: Uuid::new_v4(),
            customer_id,
            street: format!("{number} {street}"),
            city: CityName().fake_with_rng(rng),
            zip: ZipCode().fake_with_rng(rng),
            country: CountryName().fake_with_rng(rng),
        }
    }
}

impl Default for CustomerGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Generates an email from a name.
pub(crate) fn generate_email(name: &str, rng: &mut impl Rng) -> String {
    let normalized: String = name
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == ' ')
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(".");

    let suffix: u32 = rng.gen_range(1..9999);
    let domains = ["gmail.com", "outlook.com", "yahoo.com", "proton.me"];
    let domain = domains[rng.gen_range(0..domains.len())];

    format!("{normalized}{suffix}@{domain}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_customer() {
        let customer_gen = CustomerGenerator::new();
        let mut rng = rand::thread_rng();
        let customer = customer_gen.generate(&mut rng);

        assert!(!customer.name.is_empty());
        assert!(customer.email.contains('@'));
        assert!((1..=3).contains(&customer.addresses.len()));
        for address in &customer.addresses {
            assert_eq!(address.customer_id, customer.id);
            assert!(!address.street.is_empty());
        }
    }

    #[test]
    fn test_generate_batch() {
        let customer_gen = CustomerGenerator::new();
        let mut rng = rand::thread_rng();
        let customers = customer_gen.generate_batch(50, &mut rng);

        assert_eq!(customers.len(), 50);

        // All UUIDs should be unique
        let ids: std::collections::HashSet<_> = customers.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn test_address_count_respects_config() {
        let customer_gen = CustomerGenerator::with_config(CustomerGenConfig {
            addresses_per_customer: (2, 2),
            phone_fill_rate: 0.0,
        });
        let mut rng = rand::thread_rng();
        let customer = customer_gen.generate(&mut rng);

        assert_eq!(customer.addresses.len(), 2);
        assert!(customer.phone.is_none());
    }
}
