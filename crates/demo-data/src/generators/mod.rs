//! Entity generators for demo data.
//!
//! This module provides generators for creating the demo entities:
//! - [`AdminUserGenerator`]: the fixed admin account
//! - [`CustomerGenerator`]: shop customers with nested addresses
//! - [`CategoryGenerator`]: blog categories
//! - [`AuthorGenerator`]: blog authors with nested posts
//! - [`PostGenerator`]: posts with translated titles

pub mod author;
pub mod category;
pub mod customer;
pub mod post;
pub mod user;

pub use author::{AuthorGenerator, GeneratedAuthor};
pub use category::{CategoryGenerator, GeneratedCategory};
pub use customer::{CustomerGenConfig, CustomerGenerator, GeneratedAddress, GeneratedCustomer};
pub use post::{
    ENGLISH_TITLE_PREFIX, GeneratedPost, PostGenConfig, PostGenerator, SPANISH_TITLE_PLACEHOLDER,
};
pub use user::{AdminUserGenerator, GeneratedUser};
