//! Category and author lookup handlers, used by the post create form.

use axum::{Extension, response::Json};

use crate::{
    database::Database,
    errors::AppError,
    models::{Author, Category},
};

/// Get all blog categories.
#[utoipa::path(
    get,
    path = "/categories",
    tag = "blog",
    responses(
        (status = 200, description = "All blog categories", body = Vec<Category>)
    )
)]
pub async fn list_categories(
    Extension(db): Extension<Database>,
) -> Result<Json<Vec<Category>>, AppError> {
    let categories = db.list_categories().await?;
    Ok(Json(categories))
}

/// Get all blog authors.
#[utoipa::path(
    get,
    path = "/authors",
    tag = "blog",
    responses(
        (status = 200, description = "All blog authors", body = Vec<Author>)
    )
)]
pub async fn list_authors(
    Extension(db): Extension<Database>,
) -> Result<Json<Vec<Author>>, AppError> {
    let authors = db.list_authors().await?;
    Ok(Json(authors))
}
