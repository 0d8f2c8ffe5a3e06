//! Members Backend
//!
//! A REST backend for club members with SQLite persistence.

mod api;
mod config;
mod db;
mod errors;
mod models;
mod serializers;
mod services;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use db::Repository;
use services::MemberService;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub members: MemberService,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    let (plain_layer, json_layer) = if config.log_json {
        (None, Some(tracing_subscriber::fmt::layer().json()))
    } else {
        (Some(tracing_subscriber::fmt::layer()), None)
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(plain_layer)
        .with(json_layer)
        .init();

    tracing::info!("Starting Members Backend");
    tracing::info!("Database path: {:?}", config.db_path);
    tracing::info!("Bind address: {}", config.bind_addr);

    // Initialize database
    let pool = db::init_database(&config.db_path, config.db_max_connections).await?;
    let state = AppState {
        members: MemberService::new(Repository::new(pool)),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Every member path is also served with a trailing slash
    let mut member_routes = Router::new();
    for slash in ["", "/"] {
        member_routes = member_routes
            .route(&format!("/members{slash}"), get(api::list_members))
            .route(&format!("/members{slash}"), post(api::create_member))
            .route(&format!("/members/{{id}}{slash}"), get(api::get_member))
            .route(&format!("/members/{{id}}{slash}"), put(api::update_member))
            .route(&format!("/members/{{id}}{slash}"), delete(api::delete_member))
            .route(
                &format!("/members/{{id}}/activate{slash}"),
                post(api::activate_member),
            );
    }

    // API root listing the resource collections
    let root_routes = Router::new().route("/", get(api::api_root));

    // Health check
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .merge(root_routes)
        .merge(member_routes)
        .merge(health_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
