//! HTTP request handlers for the admin panel API.
//!
//! This module re-exports handlers from focused submodules organized by domain.

pub mod customers;
pub mod posts;
pub mod stats;
pub mod taxonomy;

pub use customers::list_customers;
pub use posts::{
    CreatePostRequest, ListPostsQuery, PostListItem, PostListing, create_post, get_post,
    list_posts,
};
pub use stats::{get_stats, health_check};
pub use taxonomy::{list_authors, list_categories};
