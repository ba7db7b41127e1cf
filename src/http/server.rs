//! HTTP server setup and dispatch.
//!
//! # Responsibilities
//! - Create the Axum router (single fallback route so every path reaches
//!   the resource resolver)
//! - Wire up middleware (CORS, request timeout, tracing)
//! - Bind to a listener and serve with graceful shutdown
//! - Dispatch by method: GET reads, POST generation, everything else 405

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::{Method, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::gateway::{CreatorFilters, DataGateway};
use crate::http::{handlers, middleware};
use crate::routing::{resolve_resource, Resource};

/// Application state injected into the entry handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub gateway: Arc<DataGateway>,
}

/// HTTP server for the proposal API.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration and gateway.
    ///
    /// The gateway is passed in rather than built here so tests can point
    /// it at mock upstreams.
    pub fn new(config: AppConfig, gateway: DataGateway) -> Self {
        let request_timeout = Duration::from_secs(config.timeouts.request_secs);
        let state = AppState {
            config: Arc::new(config),
            gateway: Arc::new(gateway),
        };

        // CORS is added last so it wraps everything, including timeout
        // responses, and answers OPTIONS before TraceLayer sees it.
        let router = Router::new()
            .fallback(entry)
            .with_state(state)
            .layer(TimeoutLayer::new(request_timeout))
            .layer(TraceLayer::new_for_http())
            .layer(axum::middleware::from_fn(middleware::cors));

        Self { router }
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Single entry point: resolve the resource, dispatch on method.
async fn entry(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    Query(params): Query<HashMap<String, String>>,
    body: Bytes,
) -> Response {
    let path = uri.path();

    match method {
        Method::GET => {
            let resource = resolve_resource(path, &params);
            tracing::debug!(method = %method, path = %path, resource = ?resource, "Dispatching");
            match resource {
                Resource::Health => handlers::health(&state).await,
                Resource::Clients => handlers::clients(&state).await,
                Resource::Creators => {
                    let filters = CreatorFilters::from_params(&params);
                    handlers::creators(&state, &filters).await
                }
                Resource::Templates => handlers::templates(&state).await,
                Resource::Proposals => handlers::proposals(&state).await,
                // Generate is POST-only; a GET lands on the index like any
                // other unmatched read.
                Resource::Generate | Resource::Index => handlers::index(&method, path),
            }
        }
        Method::POST => match resolve_resource(path, &params) {
            Resource::Generate => handlers::generate(&state, &body)
                .await
                .unwrap_or_else(|err| err.into_response()),
            _ => handlers::acknowledge(path),
        },
        _ => handlers::method_not_allowed(&method),
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
