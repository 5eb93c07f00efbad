//! # GroomBook API
//!
//! The API crate provides the web server for the GroomBook booking service.
//! It exposes business profiles, their services and posted hours, and the
//! bookable slots for a given date.
//!
//! ## Architecture
//!
//! - **Routes**: API endpoints and URL structure
//! - **Handlers**: request processing, calling the core slot generator
//! - **Middleware**: mapping domain errors to HTTP responses
//! - **Config**: environment configuration
//!
//! Handlers reach persistence only through [`BookingStore`] and read the
//! current time only through [`Clock`], both carried in [`ApiState`].

/// Configuration module for API settings
pub mod config;
/// Request handlers that implement business logic
pub mod handlers;
/// Error mapping for handlers
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::{sync::Arc, time::Duration};

use axum::{
    http::{header, Method},
    Router,
};
use eyre::Result;
use groombook_core::clock::{Clock, SystemClock};
use groombook_db::{
    store::{BookingStore, PgStore},
    DbPool,
};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
pub struct ApiState {
    /// Persistence for businesses and services
    pub store: Arc<dyn BookingStore>,
    /// Source of the reference instant for availability
    pub clock: Arc<dyn Clock>,
}

impl ApiState {
    pub fn new(store: Arc<dyn BookingStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }
}

/// Builds the router with every endpoint attached to `state`.
pub fn app(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Business profile, hours and services
        .merge(routes::business::routes())
        // Slot availability
        .merge(routes::availability::routes())
        .with_state(state)
}

/// Starts the API server with the provided configuration and database pool
pub async fn start_server(config: config::ApiConfig, db_pool: DbPool) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let state = Arc::new(ApiState::new(
        Arc::new(PgStore::new(db_pool)),
        Arc::new(SystemClock),
    ));

    let app = app(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        app.layer(cors_layer(origins)?)
    } else {
        app
    };

    let app = app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout))),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

fn cors_layer(origins: &[String]) -> Result<CorsLayer> {
    let origins = origins
        .iter()
        .map(|origin| config::parse_cors_origin(origin))
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_origin(origins)
        .allow_credentials(true))
}
