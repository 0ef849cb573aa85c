//! Demo data generation for the backoffice panel.
//!
//! This crate provides tools for generating and seeding the demo data set:
//! an admin user, shop customers with addresses, blog categories, and
//! authors with translated posts.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use demo_data::prelude::*;
//!
//! let result = DemoDataBuilder::new()
//!     .with_customers(50)
//!     .with_addresses_per_customer(1, 3)
//!     .with_categories(20)
//!     .with_authors(20)
//!     .with_posts_per_author(5)
//!     .build(&pool, &mut rng)
//!     .await?;
//! ```

pub mod builders;
pub mod config;
pub mod db;
pub mod generators;
pub mod progress;

// Re-export core types from the backoffice crate
pub use backoffice::models::{Locale, TranslatedText};

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::builders::{DemoDataBuilder, DemoDataResult};
    pub use crate::config::SeedConfig;
    pub use crate::db::{SeedError, Seeder};
    pub use crate::generators::{
        AdminUserGenerator, AuthorGenerator, CategoryGenerator, CustomerGenerator, PostGenerator,
    };
    pub use crate::progress::{LogProgress, ProgressSink};
    pub use crate::{Locale, TranslatedText};
}
