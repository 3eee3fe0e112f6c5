//! # Hackhub API
//!
//! The API crate provides the web server for the hackhub hackathon
//! backend. Its centerpiece is the mentorship surface: mentor and hacker
//! views over appointment slots, and the booking engine that reserves and
//! releases them under transactional guarantees.
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Implement request processing logic
//! - **Booking**: The booking engine and its invariants
//! - **Middleware**: Auth boundary and error-to-status mapping
//! - **Config**: Environment configuration
//!
//! The API uses Axum as the web framework and SQLx for database
//! interactions. External collaborators (identity provider, mail
//! delivery) are consumed behind narrow seams: the
//! [`middleware::auth::Caller`] extractor and the [`notify::Notifier`]
//! trait.

/// The booking engine: multi-slot reservation and cancellation
pub mod booking;
/// Configuration module for API settings
pub mod config;
/// Request handlers that implement business logic
pub mod handlers;
/// Middleware for authentication and error handling
pub mod middleware;
/// Outbound notification boundary
pub mod notify;
/// Route definitions and API endpoint structure
pub mod routes;

use std::sync::Arc;

use axum::Router;
use booking::BookingEngine;
use eyre::Result;
use hackhub_core::clock::{Clock, SystemClock};
use notify::TracingNotifier;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers.
pub struct ApiState {
    /// PostgreSQL connection pool for database operations
    pub db_pool: PgPool,
    /// Time source shared with the booking engine
    pub clock: Arc<dyn Clock>,
    /// The booking engine with its injected collaborators
    pub booking: BookingEngine,
}

impl ApiState {
    /// Wires the default production collaborators: the system clock and
    /// the tracing-backed notifier.
    pub fn new(db_pool: PgPool) -> Self {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let notifier = Arc::new(TracingNotifier);
        let booking = BookingEngine::new(db_pool.clone(), clock.clone(), notifier);

        Self {
            db_pool,
            clock,
            booking,
        }
    }
}

/// Starts the API server with the provided configuration and database
/// connection: sets up logging, builds the router, and serves until the
/// process exits.
pub async fn start_server(config: config::ApiConfig, db_pool: PgPool) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Create shared state with dependencies
    let state = Arc::new(ApiState::new(db_pool));

    // Build the application router with all routes
    let app = Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Mentorship endpoints
        .merge(routes::mentorship::routes())
        // Attach shared state to all routes
        .with_state(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let cors = tower_http::cors::CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::PUT,
                axum::http::Method::DELETE,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::AUTHORIZATION,
                axum::http::header::ACCEPT,
            ])
            .allow_origin(
                origins
                    .iter()
                    .map(|origin| origin.parse().unwrap())
                    .collect::<Vec<_>>(),
            )
            .allow_credentials(true);

        app.layer(cors)
    } else {
        app
    };

    // Add request timeout middleware
    let app = app.layer(tower_http::timeout::TimeoutLayer::new(
        std::time::Duration::from_secs(config.request_timeout),
    ));

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
