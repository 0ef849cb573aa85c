//! Post listing and creation handlers.

use axum::{
    Extension,
    extract::{Path, Query},
    response::Json,
};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::{
    auth::AuthUser,
    database::{Database, PostFilter, PostListRecord},
    errors::AppError,
    listing::{ListPage, Listable, PageAction, PaginationQuery, default_limit},
    models::{Locale, Post, TranslatedText, slugify},
};

/// Query parameters for the post listing.
#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct ListPostsQuery {
    /// Which title variant to display. Switching locale never mutates data.
    #[serde(default)]
    pub locale: Locale,
    pub category_id: Option<Uuid>,
    pub author_id: Option<Uuid>,
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

impl Default for ListPostsQuery {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            category_id: None,
            author_id: None,
            limit: default_limit(),
            offset: 0,
        }
    }
}

/// One row of the post listing, localized for display.
#[derive(Debug, Serialize, ToSchema)]
pub struct PostListItem {
    pub id: Uuid,
    pub title: String,
    pub locale: Locale,
    pub slug: String,
    pub category_id: Uuid,
    pub category_name: String,
    pub author_id: Uuid,
    pub author_name: String,
    pub published_at: Option<OffsetDateTime>,
    pub created_at: OffsetDateTime,
}

/// The posts listing page.
pub struct PostListing;

impl PostListing {
    fn to_row(record: PostListRecord, locale: Locale) -> PostListItem {
        PostListItem {
            id: record.id,
            title: record.title.variant(locale).to_string(),
            locale,
            slug: record.slug,
            category_id: record.category_id,
            category_name: record.category_name,
            author_id: record.author_id,
            author_name: record.author_name,
            published_at: record.published_at,
            created_at: record.created_at,
        }
    }
}

#[async_trait::async_trait]
impl Listable for PostListing {
    type Query = ListPostsQuery;
    type Row = PostListItem;

    fn actions() -> Vec<PageAction> {
        vec![
            PageAction {
                name: "locale-switch",
                method: "GET",
                target: "/posts?locale={locale}",
                mutates_data: false,
            },
            PageAction {
                name: "create",
                method: "POST",
                target: "/posts",
                mutates_data: true,
            },
        ]
    }

    fn pagination(query: &Self::Query) -> PaginationQuery {
        PaginationQuery {
            limit: query.limit,
            offset: query.offset,
        }
    }

    async fn fetch(
        db: &Database,
        query: &Self::Query,
    ) -> Result<(Vec<Self::Row>, i64), AppError> {
        let filter = PostFilter {
            category_id: query.category_id,
            author_id: query.author_id,
        };

        let records = db.list_posts(&filter, query.limit, query.offset).await?;
        let total_count = db.count_posts(&filter).await?;

        let items = records
            .into_iter()
            .map(|r| Self::to_row(r, query.locale))
            .collect();

        Ok((items, total_count))
    }
}

/// List posts.
#[utoipa::path(
    get,
    path = "/posts",
    tag = "posts",
    params(ListPostsQuery),
    responses(
        (status = 200, description = "One page of posts with registered page actions", body = ListPage<PostListItem>)
    )
)]
pub async fn list_posts(
    Extension(db): Extension<Database>,
    Query(params): Query<ListPostsQuery>,
) -> Result<Json<ListPage<PostListItem>>, AppError> {
    let page = PostListing::page(&db, &params).await?;
    Ok(Json(page))
}

/// Get a single post with all title variants.
#[utoipa::path(
    get,
    path = "/posts/{id}",
    tag = "posts",
    params(
        ("id" = Uuid, Path, description = "Post ID")
    ),
    responses(
        (status = 200, description = "The post", body = Post),
        (status = 404, description = "Post not found")
    )
)]
pub async fn get_post(
    Extension(db): Extension<Database>,
    Path(id): Path<Uuid>,
) -> Result<Json<Post>, AppError> {
    let post = db.get_post(id).await?.ok_or(AppError::NotFound)?;
    Ok(Json(post))
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreatePostRequest {
    pub title: TranslatedText,
    pub category_id: Uuid,
    pub author_id: Uuid,
    /// Derived from the English title when omitted.
    #[validate(length(min = 1, max = 200, message = "Slug must be between 1 and 200 characters"))]
    pub slug: Option<String>,
    #[serde(default)]
    pub content: String,
}

/// Create a new post.
#[utoipa::path(
    post,
    path = "/posts",
    tag = "posts",
    request_body = CreatePostRequest,
    responses(
        (status = 200, description = "Post created successfully", body = Post),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_post(
    Extension(db): Extension<Database>,
    AuthUser(_claims): AuthUser,
    Json(req): Json<CreatePostRequest>,
) -> Result<Json<Post>, AppError> {
    req.validate().map_err(|e| {
        let messages: Vec<String> = e
            .field_errors()
            .into_iter()
            .flat_map(|(_, errors)| {
                errors
                    .iter()
                    .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
            })
            .collect();
        AppError::InvalidInput(messages.join(", "))
    })?;

    if req.title.en.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "English title must not be empty".to_string(),
        ));
    }

    let slug = req
        .slug
        .unwrap_or_else(|| slugify(&req.title.en));

    let post = Post::new(req.author_id, req.category_id, req.title, slug, req.content);
    db.create_post(&post).await?;

    Ok(Json(post))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::types::Json as SqlJson;

    fn record(title: TranslatedText) -> PostListRecord {
        PostListRecord {
            id: Uuid::new_v4(),
            author_id: Uuid::new_v4(),
            category_id: Uuid::new_v4(),
            title: SqlJson(title),
            slug: "a-post".to_string(),
            published_at: None,
            created_at: OffsetDateTime::now_utc(),
            category_name: "News".to_string(),
            author_name: "A. Writer".to_string(),
        }
    }

    #[test]
    fn test_row_uses_requested_locale() {
        let rec = record(TranslatedText::new("Hello", "Hola"));
        let row = PostListing::to_row(rec, Locale::Es);
        assert_eq!(row.title, "Hola");
        assert_eq!(row.locale, Locale::Es);
    }

    #[test]
    fn test_listing_registers_exactly_two_actions() {
        let actions = PostListing::actions();
        assert_eq!(actions.len(), 2);

        let switch = actions.iter().find(|a| a.name == "locale-switch").unwrap();
        assert!(!switch.mutates_data);

        let create = actions.iter().find(|a| a.name == "create").unwrap();
        assert!(create.mutates_data);
        assert_eq!(create.method, "POST");
    }
}
