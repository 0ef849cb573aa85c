//! Fluent builder for constructing the demo data set.

use rand::Rng;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use backoffice::storage::AssetStore;

use crate::config::SeedConfig;
use crate::db::{SeedError, Seeder};
use crate::generators::{
    AdminUserGenerator, AuthorGenerator, CategoryGenerator, CustomerGenConfig, CustomerGenerator,
    GeneratedAuthor, GeneratedCategory, GeneratedCustomer, GeneratedUser, PostGenConfig,
    PostGenerator,
};
use crate::progress::LogProgress;

/// Result of building and seeding the demo set.
#[derive(Debug)]
pub struct DemoDataResult {
    pub admin: GeneratedUser,
    pub customers: Vec<GeneratedCustomer>,
    pub categories: Vec<GeneratedCategory>,
    pub authors: Vec<GeneratedAuthor>,
}

impl DemoDataResult {
    /// Total addresses across all customers.
    pub fn address_count(&self) -> usize {
        self.customers.iter().map(|c| c.addresses.len()).sum()
    }

    /// Total posts across all authors.
    pub fn post_count(&self) -> usize {
        self.authors.iter().map(|a| a.posts.len()).sum()
    }
}

/// Builder for the demo data set.
///
/// # Example
///
/// ```rust,ignore
/// let result = DemoDataBuilder::new()
///     .with_customers(50)
///     .with_addresses_per_customer(1, 3)
///     .with_categories(20)
///     .with_authors(20)
///     .with_posts_per_author(5)
///     .with_asset_store_path("./storage/public")
///     .build(&pool, &mut rng)
///     .await?;
/// ```
pub struct DemoDataBuilder {
    config: SeedConfig,
    asset_store_path: Option<String>,
}

impl Default for DemoDataBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DemoDataBuilder {
    /// Creates a builder with the standard demo counts.
    pub fn new() -> Self {
        Self {
            config: SeedConfig::default(),
            asset_store_path: None,
        }
    }

    /// Creates a builder from an explicit configuration.
    pub fn from_config(config: SeedConfig) -> Self {
        Self {
            config,
            asset_store_path: None,
        }
    }

    /// Sets the number of shop customers.
    pub fn with_customers(mut self, count: usize) -> Self {
        self.config.customer_count = count;
        self
    }

    /// Sets the inclusive range of addresses per customer.
    pub fn with_addresses_per_customer(mut self, min: usize, max: usize) -> Self {
        self.config.addresses_per_customer = (min, max);
        self
    }

    /// Sets the number of blog categories.
    pub fn with_categories(mut self, count: usize) -> Self {
        self.config.category_count = count;
        self
    }

    /// Sets the number of blog authors.
    pub fn with_authors(mut self, count: usize) -> Self {
        self.config.author_count = count;
        self
    }

    /// Sets the number of posts per author.
    pub fn with_posts_per_author(mut self, count: usize) -> Self {
        self.config.posts_per_author = count;
        self
    }

    /// Sets the public asset directory wiped at the start of a seeding run.
    pub fn with_asset_store_path(mut self, path: impl Into<String>) -> Self {
        self.asset_store_path = Some(path.into());
        self
    }

    /// Builds the demo set (generates data but doesn't seed the database).
    pub fn build_data(&self, rng: &mut impl Rng) -> Result<DemoDataResult, SeedError> {
        let wants_posts = self.config.author_count > 0 && self.config.posts_per_author > 0;
        if wants_posts && self.config.category_count == 0 {
            return Err(SeedError::NoCategories);
        }

        let admin = AdminUserGenerator::new(
            self.config.admin_name.as_str(),
            self.config.admin_email.as_str(),
            self.config.admin_password.as_str(),
        )
        .generate();

        let customer_gen = CustomerGenerator::with_config(CustomerGenConfig {
            addresses_per_customer: self.config.addresses_per_customer,
            ..Default::default()
        });
        let customers = customer_gen.generate_batch(self.config.customer_count, rng);

        let categories = CategoryGenerator::new().generate_batch(self.config.category_count, rng);
        let category_ids: Vec<Uuid> = categories.iter().map(|c| c.id).collect();

        let post_gen = PostGenerator::with_config(PostGenConfig {
            title_word_count: self.config.title_word_count,
            ..Default::default()
        });
        let author_gen = AuthorGenerator::new(post_gen, self.config.posts_per_author);
        let authors = author_gen.generate_batch(self.config.author_count, &category_ids, rng);

        Ok(DemoDataResult {
            admin,
            customers,
            categories,
            authors,
        })
    }

    /// Builds the demo set and seeds it into the database.
    ///
    /// Runs the fixed sequence: wipe stored public files, create the admin
    /// user, then customers, then categories, then authors with their
    /// posts. There is no rollback; a failure leaves the store partially
    /// seeded.
    pub async fn build(
        &self,
        pool: &PgPool,
        rng: &mut impl Rng,
    ) -> Result<DemoDataResult, SeedError> {
        if let Some(path) = &self.asset_store_path {
            info!("Clearing stored public files at {path}...");
            AssetStore::wipe(path)?;
        }

        let data = self.build_data(rng)?;
        let seeder = Seeder::new(pool.clone());

        info!("Creating admin user...");
        seeder
            .seed_admin(&data.admin, &mut LogProgress::new("admin user", 1))
            .await?;
        info!("Admin user created.");

        info!("Creating shop customers...");
        seeder
            .seed_customers(
                &data.customers,
                &mut LogProgress::new("customers", data.customers.len()),
            )
            .await?;
        info!("Shop customers created.");

        info!("Creating blog categories...");
        seeder
            .seed_categories(
                &data.categories,
                &mut LogProgress::new("categories", data.categories.len()),
            )
            .await?;
        info!("Blog categories created.");

        info!("Creating blog authors and posts...");
        seeder
            .seed_authors(
                &data.authors,
                &mut LogProgress::new("authors", data.authors.len()),
            )
            .await?;
        info!("Blog authors and posts created.");

        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{ENGLISH_TITLE_PREFIX, SPANISH_TITLE_PLACEHOLDER};
    use backoffice::models::Locale;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_default_demo_set_counts() {
        let mut rng = StdRng::seed_from_u64(42);
        let data = DemoDataBuilder::new().build_data(&mut rng).unwrap();

        assert_eq!(data.customers.len(), 50);
        assert_eq!(data.categories.len(), 20);
        assert_eq!(data.authors.len(), 20);
        assert_eq!(data.post_count(), 100);

        for customer in &data.customers {
            assert!((1..=3).contains(&customer.addresses.len()));
        }
    }

    #[test]
    fn test_references_stay_within_the_run() {
        let mut rng = StdRng::seed_from_u64(42);
        let data = DemoDataBuilder::new().build_data(&mut rng).unwrap();

        let category_ids: HashSet<_> = data.categories.iter().map(|c| c.id).collect();
        let author_ids: HashSet<_> = data.authors.iter().map(|a| a.id).collect();

        for author in &data.authors {
            for post in &author.posts {
                assert!(category_ids.contains(&post.category_id));
                assert!(author_ids.contains(&post.author_id));
            }
        }

        for customer in &data.customers {
            for address in &customer.addresses {
                assert_eq!(address.customer_id, customer.id);
            }
        }
    }

    #[test]
    fn test_titles_have_both_required_variants() {
        let mut rng = StdRng::seed_from_u64(42);
        let data = DemoDataBuilder::new().build_data(&mut rng).unwrap();

        for author in &data.authors {
            for post in &author.posts {
                let english = post.title.variant(Locale::En);
                assert!(english.starts_with(ENGLISH_TITLE_PREFIX));
                assert!(english.len() > ENGLISH_TITLE_PREFIX.len());
                assert_eq!(post.title.variant(Locale::Es), SPANISH_TITLE_PLACEHOLDER);
            }
        }
    }

    #[test]
    fn test_posts_without_categories_is_an_error() {
        let mut rng = StdRng::seed_from_u64(42);
        let result = DemoDataBuilder::new()
            .with_categories(0)
            .build_data(&mut rng);
        assert!(matches!(result, Err(SeedError::NoCategories)));
    }

    #[test]
    fn test_seeded_rng_reproduces_generated_content() {
        let builder = DemoDataBuilder::new();

        let mut rng_a = StdRng::seed_from_u64(12345);
        let mut rng_b = StdRng::seed_from_u64(12345);

        let a = builder.build_data(&mut rng_a).unwrap();
        let b = builder.build_data(&mut rng_b).unwrap();

        let names_a: Vec<_> = a.customers.iter().map(|c| c.name.clone()).collect();
        let names_b: Vec<_> = b.customers.iter().map(|c| c.name.clone()).collect();
        assert_eq!(names_a, names_b);

        let titles_a: Vec<_> = a
            .authors
            .iter()
            .flat_map(|author| author.posts.iter().map(|p| p.title.en.clone()))
            .collect();
        let titles_b: Vec<_> = b
            .authors
            .iter()
            .flat_map(|author| author.posts.iter().map(|p| p.title.en.clone()))
            .collect();
        assert_eq!(titles_a, titles_b);
    }
}
