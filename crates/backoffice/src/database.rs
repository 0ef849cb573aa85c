use sqlx::PgPool;
use sqlx::types::Json;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{Author, Category, Customer, Post, TranslatedText, User};

/// One row of the post listing, with referenced names joined in.
#[derive(Debug, sqlx::FromRow)]
pub struct PostListRecord {
    pub id: Uuid,
    pub author_id: Uuid,
    pub category_id: Uuid,
    pub title: Json<TranslatedText>,
    pub slug: String,
    pub published_at: Option<OffsetDateTime>,
    pub created_at: OffsetDateTime,
    pub category_name: String,
    pub author_name: String,
}

/// Optional filters for the post listing.
#[derive(Debug, Default, Clone, Copy)]
pub struct PostFilter {
    pub category_id: Option<Uuid>,
    pub author_id: Option<Uuid>,
}

/// Entity counts across the store.
#[derive(Debug, serde::Serialize, utoipa::ToSchema)]
pub struct StoreStats {
    pub users: i64,
    pub customers: i64,
    pub addresses: i64,
    pub categories: i64,
    pub authors: i64,
    pub posts: i64,
}

#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as(
            r#"
            SELECT id, name, email, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    pub async fn get_user_with_password(
        &self,
        email: &str,
    ) -> Result<Option<(User, String)>, AppError> {
        let row: Option<(Uuid, String, String, OffsetDateTime, String)> = sqlx::query_as(
            r#"
            SELECT id, name, email, created_at, password_hash
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|(id, name, email, created_at, hash)| {
            (
                User {
                    id,
                    name,
                    email,
                    created_at,
                },
                hash,
            )
        }))
    }

    pub async fn list_customers(
        &self,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Customer>, AppError> {
        let customers = sqlx::query_as(
            r#"
            SELECT id, name, email, phone, created_at
            FROM customers
            ORDER BY created_at DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(customers)
    }

    pub async fn list_categories(&self) -> Result<Vec<Category>, AppError> {
        let categories = sqlx::query_as(
            r#"
            SELECT id, name, slug, description, created_at
            FROM blog_categories
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(categories)
    }

    pub async fn list_authors(&self) -> Result<Vec<Author>, AppError> {
        let authors = sqlx::query_as(
            r#"
            SELECT id, name, email, bio, created_at
            FROM blog_authors
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(authors)
    }

    pub async fn create_post(&self, post: &Post) -> Result<(), AppError> {
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
        .bind(&post.title)
        .bind(&post.slug)
        .bind(&post.content)
        .bind(post.published_at)
        .bind(post.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn get_post(&self, id: Uuid) -> Result<Option<Post>, AppError> {
        let post = sqlx::query_as(
            r#"
            SELECT id, author_id, category_id, title, slug, content, published_at, created_at
            FROM blog_posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(post)
    }

    pub async fn list_posts(
        &self,
        filter: &PostFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<PostListRecord>, AppError> {
        let posts = sqlx::query_as(
            r#"
            SELECT p.id, p.author_id, p.category_id, p.title, p.slug,
                   p.published_at, p.created_at,
                   c.name AS category_name, a.name AS author_name
            FROM blog_posts p
            JOIN blog_categories c ON c.id = p.category_id
            JOIN blog_authors a ON a.id = p.author_id
            WHERE ($1::uuid IS NULL OR p.category_id = $1)
              AND ($2::uuid IS NULL OR p.author_id = $2)
            ORDER BY p.created_at DESC, p.id
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(filter.category_id)
        .bind(filter.author_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(posts)
    }

    pub async fn count_posts(&self, filter: &PostFilter) -> Result<i64, AppError> {
        let (count,): (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*)
            FROM blog_posts
            WHERE ($1::uuid IS NULL OR category_id = $1)
              AND ($2::uuid IS NULL OR author_id = $2)
            "#,
        )
        .bind(filter.category_id)
        .bind(filter.author_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    pub async fn stats(&self) -> Result<StoreStats, AppError> {
        let (users, customers, addresses, categories, authors, posts): (
            i64,
            i64,
            i64,
            i64,
            i64,
            i64,
        ) = sqlx::query_as(
            r#"
            SELECT
                (SELECT COUNT(*) FROM users),
                (SELECT COUNT(*) FROM customers),
                (SELECT COUNT(*) FROM addresses),
                (SELECT COUNT(*) FROM blog_categories),
                (SELECT COUNT(*) FROM blog_authors),
                (SELECT COUNT(*) FROM blog_posts)
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(StoreStats {
            users,
            customers,
            addresses,
            categories,
            authors,
            posts,
        })
    }
}
