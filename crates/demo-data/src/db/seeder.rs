//! Database seeding utilities.

use sqlx::PgPool;
use sqlx::types::Json;
use thiserror::Error;
use tracing::info;

use crate::generators::{
    GeneratedAuthor, GeneratedCategory, GeneratedCustomer, GeneratedUser,
};
use crate::progress::ProgressSink;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Asset storage error: {0}")]
    Assets(#[from] backoffice::errors::AppError),
    #[error("Posts require at least one category")]
    NoCategories,
}

/// Database seeder for inserting generated demo data.
///
/// Inserts are plain: a second run over the same store adds a second demo
/// set rather than being skipped.
pub struct Seeder {
    pool: PgPool,
}

impl Seeder {
    /// Creates a new seeder with the given database pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Seeds the admin user.
    pub async fn seed_admin(
        &self,
        user: &GeneratedUser,
        progress: &mut dyn ProgressSink,
    ) -> Result<(), SeedError> {
        sqlx::query(
            r#"
            INSERT INTO users (id, name, email, password_hash, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(user.id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.created_at)
        .execute(&self.pool)
        .await?;

        progress.advance();
        progress.finish();
        Ok(())
    }

    /// Seeds customers with their nested addresses.
    ///
    /// Each customer counts as one progress unit; its addresses are created
    /// inside that unit.
    pub async fn seed_customers(
        &self,
        customers: &[GeneratedCustomer],
        progress: &mut dyn ProgressSink,
    ) -> Result<(), SeedError> {
        for customer in customers {
            sqlx::query(
                r#"
                INSERT INTO customers (id, name, email, phone, created_at)
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(customer.id)
            .bind(&customer.name)
            .bind(&customer.email)
            .bind(&customer.phone)
            .bind(customer.created_at)
            .execute(&self.pool)
            .await?;

            for address in &customer.addresses {
                sqlx::query(
                    r#"
                    INSERT INTO addresses (id, customer_id, street, city, zip, country)
                    VALUES ($1, $2, $3, $4, $5, $6)
                    "#,
                )
                .bind(address.id)
                .bind(address.customer_id)
                .bind(&address.street)
                .bind(&address.city)
                .bind(&address.zip)
                .bind(&address.country)
                .execute(&self.pool)
                .await?;
            }

            progress.advance();
        }

        progress.finish();
        Ok(())
    }

    /// Seeds blog categories.
    pub async fn seed_categories(
        &self,
        categories: &[GeneratedCategory],
        progress: &mut dyn ProgressSink,
    ) -> Result<(), SeedError> {
        for category in categories {
            sqlx::query(
                r#"
                INSERT INTO blog_categories (id, name, slug, description, created_at)
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(category.id)
            .bind(&category.name)
            .bind(&category.slug)
            .bind(&category.description)
            .bind(category.created_at)
            .execute(&self.pool)
            .await?;

            progress.advance();
        }

        progress.finish();
        Ok(())
    }

    /// Seeds blog authors with their nested posts.
    ///
    /// Each author counts as one progress unit; its posts are created
    /// inside that unit.
    pub async fn seed_authors(
        &self,
        authors: &[GeneratedAuthor],
        progress: &mut dyn ProgressSink,
    ) -> Result<(), SeedError> {
        for author in authors {
            sqlx::query(
                r#"
                INSERT INTO blog_authors (id, name, email, bio, created_at)
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(author.id)
            .bind(&author.name)
            .bind(&author.email)
            .bind(&author.bio)
            .bind(author.created_at)
            .execute(&self.pool)
            .await?;

            for post in &author.posts {
                sqlx::query(
                    r#"
                    INSERT INTO blog_posts (id, author_id, category_id, title, slug, content,
                                            published_at, created_at)
                    VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                    "#,
                )
                .bind(post.id)
                .bind(post.author_id)
                .bind(post.category_id)
                .bind(Json(&post.title))
                .bind(&post.slug)
                .bind(&post.content)
                .bind(post.published_at)
                .bind(post.created_at)
                .execute(&self.pool)
                .await?;
            }

            progress.advance();
        }

        progress.finish();
        Ok(())
    }

    /// Clears all seeded demo data.
    ///
    /// **WARNING**: This deletes all data from the tables. Use with caution.
    pub async fn clear_all(&self) -> Result<(), SeedError> {
        info!("Clearing all seeded data...");

        // Order matters due to foreign key constraints
        sqlx::query("DELETE FROM blog_posts")
            .execute(&self.pool)
            .await?;
        sqlx::query("DELETE FROM blog_authors")
            .execute(&self.pool)
            .await?;
        sqlx::query("DELETE FROM blog_categories")
            .execute(&self.pool)
            .await?;
        sqlx::query("DELETE FROM addresses")
            .execute(&self.pool)
            .await?;
        sqlx::query("DELETE FROM customers")
            .execute(&self.pool)
            .await?;
        sqlx::query("DELETE FROM users")
            .execute(&self.pool)
            .await?;

        info!("All data cleared");
        Ok(())
    }

    /// Returns a reference to the pool for advanced usage.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
