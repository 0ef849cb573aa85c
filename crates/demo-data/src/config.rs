//! Configuration types for demo data generation.

use serde::{Deserialize, Serialize};

/// Configuration for seeding operations.
///
/// Defaults describe the standard demo set: one admin user, fifty shop
/// customers with one to three addresses each, twenty blog categories, and
/// twenty authors with five posts apiece.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Fixed name of the admin user.
    pub admin_name: String,

    /// Fixed email of the admin user.
    pub admin_email: String,

    /// Demo password of the admin user.
    pub admin_password: String,

    /// Number of shop customers to generate.
    pub customer_count: usize,

    /// Number of addresses per customer (inclusive range).
    pub addresses_per_customer: (usize, usize),

    /// Number of blog categories to generate.
    pub category_count: usize,

    /// Number of blog authors to generate.
    pub author_count: usize,

    /// Number of posts per author.
    pub posts_per_author: usize,

    /// Number of random words in each English post title.
    pub title_word_count: usize,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            admin_name: "Demo User".to_string(),
            admin_email: "admin@backoffice.test".to_string(),
            admin_password: "password".to_string(),
            customer_count: 50,
            addresses_per_customer: (1, 3),
            category_count: 20,
            author_count: 20,
            posts_per_author: 5,
            title_word_count: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_counts_match_demo_set() {
        let config = SeedConfig::default();
        assert_eq!(config.customer_count, 50);
        assert_eq!(config.addresses_per_customer, (1, 3));
        assert_eq!(config.category_count, 20);
        assert_eq!(config.author_count, 20);
        assert_eq!(config.posts_per_author, 5);
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let config = SeedConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: SeedConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.customer_count, config.customer_count);
        assert_eq!(back.admin_email, config.admin_email);
    }
}
