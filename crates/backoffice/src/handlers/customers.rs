//! Shop customer handlers.

use axum::{Extension, extract::Query, response::Json};

use crate::{
    database::Database,
    errors::AppError,
    listing::PaginationQuery,
    models::Customer,
};

/// List shop customers.
#[utoipa::path(
    get,
    path = "/customers",
    tag = "shop",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Page of customers", body = Vec<Customer>)
    )
)]
pub async fn list_customers(
    Extension(db): Extension<Database>,
    Query(paging): Query<PaginationQuery>,
) -> Result<Json<Vec<Customer>>, AppError> {
    let customers = db.list_customers(paging.limit, paging.offset).await?;
    Ok(Json(customers))
}
