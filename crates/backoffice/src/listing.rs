//! Listing-page capability.
//!
//! A resource exposes a read-only listing by implementing [`Listable`]:
//! it declares its query type, the shape of one listed row, the
//! user-triggered actions the page offers, and how a page of rows is
//! fetched. Handlers stay thin and delegate here.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{database::Database, errors::AppError};

/// Default pagination limit.
pub const DEFAULT_LIMIT: i64 = 50;

/// Returns the default pagination limit.
pub fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

/// Standard pagination query parameters.
#[derive(Debug, Clone, Copy, Deserialize, ToSchema, IntoParams)]
pub struct PaginationQuery {
    /// Maximum number of results to return.
    #[serde(default = "default_limit")]
    pub limit: i64,
    /// Number of results to skip.
    #[serde(default)]
    pub offset: i64,
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

/// A user-triggered action offered by a listing page.
///
/// Actions are declarative: the page advertises them, the client invokes
/// them against `target`. Non-mutating actions (like a locale switch) only
/// change how the listing is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct PageAction {
    pub name: &'static str,
    pub method: &'static str,
    pub target: &'static str,
    pub mutates_data: bool,
}

/// One page of a listing, with the page's registered actions.
#[derive(Debug, Serialize, ToSchema)]
pub struct ListPage<T> {
    pub items: Vec<T>,
    pub total_count: i64,
    pub limit: i64,
    pub offset: i64,
    pub actions: Vec<PageAction>,
}

/// Capability for resources that expose a read-only listing page.
#[async_trait]
pub trait Listable {
    /// Query parameters accepted by the listing (filters, locale, paging).
    type Query: Send + Sync;
    /// Shape of one listed row.
    type Row: Serialize + Send;

    /// The actions this page registers.
    fn actions() -> Vec<PageAction>;

    /// Pagination requested by the query.
    fn pagination(query: &Self::Query) -> PaginationQuery;

    /// Fetches the rows for one page along with the unpaged total.
    async fn fetch(
        db: &Database,
        query: &Self::Query,
    ) -> Result<(Vec<Self::Row>, i64), AppError>;

    /// Assembles a full page: rows, totals, and registered actions.
    async fn page(db: &Database, query: &Self::Query) -> Result<ListPage<Self::Row>, AppError> {
        let (items, total_count) = Self::fetch(db, query).await?;
        let paging = Self::pagination(query);

        Ok(ListPage {
            items,
            total_count,
            limit: paging.limit,
            offset: paging.offset,
            actions: Self::actions(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_defaults() {
        let paging: PaginationQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(paging.limit, DEFAULT_LIMIT);
        assert_eq!(paging.offset, 0);
    }

    #[test]
    fn test_page_action_is_declarative() {
        let action = PageAction {
            name: "create",
            method: "POST",
            target: "/posts",
            mutates_data: true,
        };
        let value = serde_json::to_value(action).unwrap();
        assert_eq!(value["name"], "create");
        assert_eq!(value["mutates_data"], true);
    }
}
