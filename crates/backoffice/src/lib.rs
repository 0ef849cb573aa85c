pub mod auth;
pub mod database;
pub mod errors;
pub mod handlers;
pub mod listing;
pub mod models;
pub mod storage;

use axum::{
    Extension, Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use sqlx::PgPool;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
};

use crate::{
    auth::{login, me},
    database::Database,
    errors::AppError,
    handlers::{
        create_post, get_post, get_stats, health_check, list_authors, list_categories,
        list_customers, list_posts,
    },
    storage::AssetStore,
};

pub fn create_router(pool: PgPool, asset_store_path: String) -> Result<Router, AppError> {
    let db = Database::new(pool);
    let store = AssetStore::new_local(asset_store_path)?;

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any)
        .allow_origin(Any);

    let router = Router::new()
        .route("/health", get(health_check))
        .route("/stats", get(get_stats))
        // Auth routes
        .route("/auth/login", post(login))
        .route("/auth/me", get(me))
        // Blog routes
        .route("/posts", get(list_posts).post(create_post))
        .route("/posts/{id}", get(get_post))
        .route("/categories", get(list_categories))
        .route("/authors", get(list_authors))
        // Shop routes
        .route("/customers", get(list_customers))
        .layer(Extension(db))
        .layer(Extension(store))
        .layer(cors)
        .layer(CompressionLayer::new())
        // Security headers
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::REFERRER_POLICY,
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ));

    Ok(router)
}

pub async fn run_server(pool: PgPool, asset_store_path: String, port: u16) -> anyhow::Result<()> {
    let app = create_router(pool, asset_store_path)?;

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    println!("Server running on http://0.0.0.0:{}", port);

    axum::serve(listener, app).await?;

    Ok(())
}
