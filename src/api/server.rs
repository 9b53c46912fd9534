//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, timeout, request ID, auth, throttling)
//! - Bind server to listener
//! - Serve with graceful shutdown
//!
//! # Design Decisions
//! - Auth runs before the throttle so authenticated callers land in the
//!   higher tier; both are ordinary axum middleware over shared state
//! - Request ID added as early as possible for tracing

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    extract::State,
    http::{HeaderValue, Request},
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Json, Router,
};
use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use uuid::Uuid;

use crate::carriers::CarrierRegistry;
use crate::config::GatewayConfig;
use crate::gateway::CarrierGateway;
use crate::storage::PickupStore;

use super::middleware::{auth_middleware, rate_limit_middleware, AuthState, RateLimiterState};
use super::pickups;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<CarrierRegistry>,
    pub gateway: CarrierGateway,
    pub store: PickupStore,
}

/// HTTP server for the shipping gateway.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(
        config: &GatewayConfig,
        registry: Arc<CarrierRegistry>,
        gateway: CarrierGateway,
        store: PickupStore,
    ) -> Self {
        let state = AppState {
            registry,
            gateway,
            store,
        };
        let router = Self::build_router(config, state);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &GatewayConfig, state: AppState) -> Router {
        let auth = Arc::new(AuthState::new(&config.auth));
        let limiter = Arc::new(RateLimiterState::new(config.rate_limit.clone()));

        Router::new()
            .route("/health", get(health))
            .route("/v1/carriers", get(list_carriers))
            .route(
                "/v1/carriers/{carrier_id}/pickups",
                post(pickups::schedule_pickup),
            )
            .route("/v1/pickups", get(pickups::list_pickups))
            .route("/v1/pickups/{id}", get(pickups::get_pickup))
            .route("/v1/pickups/{id}/update", post(pickups::update_pickup))
            .route("/v1/pickups/{id}/cancel", post(pickups::cancel_pickup))
            .with_state(state)
            // Layers run outermost-last: auth before the throttle so the
            // limiter sees the authenticated context.
            .layer(middleware::from_fn_with_state(
                limiter,
                rate_limit_middleware,
            ))
            .layer(middleware::from_fn_with_state(auth, auth_middleware))
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.server.request_timeout_secs,
            )))
            .layer(middleware::from_fn(request_id_middleware))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        let app = self
            .router
            .into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

async fn health() -> &'static str {
    "OK"
}

async fn list_carriers(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.registry.carrier_ids())
}

/// Attach an `x-request-id` to every request and echo it on the response.
async fn request_id_middleware(mut request: Request<Body>, next: Next) -> Response {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|h| h.to_str().ok())
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        request.headers_mut().insert("x-request-id", value.clone());
        let mut response = next.run(request).await;
        response.headers_mut().insert("x-request-id", value);
        response
    } else {
        next.run(request).await
    }
}

/// Wait for Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!(error = %e, "Failed to install SIGTERM handler"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
