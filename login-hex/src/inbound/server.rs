//! HTTP Server configuration and startup.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use login_types::CredentialStore;

use super::handlers::{self, AppState};
use crate::LoginService;

/// HTTP Server for the Login API.
pub struct HttpServer<S: CredentialStore> {
    state: Arc<AppState<S>>,
    permissive_cors: bool,
}

impl<S: CredentialStore> HttpServer<S> {
    /// Creates a new HTTP server with the given service.
    ///
    /// Cross-origin requests are allowed from any origin by default.
    pub fn new(service: LoginService<S>) -> Self {
        Self {
            state: Arc::new(AppState { service }),
            permissive_cors: true,
        }
    }

    /// Enables or disables the permissive CORS layer.
    pub fn with_cors(mut self, permissive: bool) -> Self {
        self.permissive_cors = permissive;
        self
    }

    /// Builds the Axum router with all routes.
    pub fn router(&self) -> Router {
        // Build HTTP metrics layer (uses globally set MeterProvider)
        let metrics = axum_otel_metrics::HttpMetricsLayerBuilder::new().build();

        let router = Router::new()
            .route("/health", get(handlers::health))
            .route("/login", post(handlers::login::<S>))
            .route("/api-docs/openapi.json", get(handlers::openapi_json))
            .layer(metrics)
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone());

        if self.permissive_cors {
            router.layer(CorsLayer::permissive())
        } else {
            router
        }
    }

    /// Runs the server on the given address with graceful shutdown.
    pub async fn run(self, addr: &str) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Server listening on {}", listener.local_addr()?);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
