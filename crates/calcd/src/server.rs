//! HTTP server for calcd

use crate::routes;
use anyhow::{Context, Result};
use axum::extract::DefaultBodyLimit;
use axum::http::{header, Method};
use axum::Router;
use calc_common::Config;
use chrono::NaiveDate;
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Maximum request body size: 64 KiB
pub const MAX_BODY_SIZE: usize = 64 * 1024;

/// Application state shared across handlers
pub struct AppState {
    pub config: Config,
    pub start_time: Instant,
    /// Pinned "today" for age calculations; `None` means the local date
    pub fixed_today: Option<NaiveDate>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            start_time: Instant::now(),
            fixed_today: None,
        }
    }

    /// App state whose age calculations use `today` instead of the clock
    pub fn with_fixed_date(config: Config, today: NaiveDate) -> Self {
        Self {
            fixed_today: Some(today),
            ..Self::new(config)
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.fixed_today
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

/// Build the full application router
pub fn router(state: AppState) -> Router {
    let cors = state.config.server.cors_allow_any_origin;
    let state = Arc::new(state);

    let mut app = Router::new()
        .merge(routes::calc_routes())
        .merge(routes::catalog_routes())
        .merge(routes::health_routes())
        .fallback(routes::not_found)
        .with_state(state)
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE));

    if cors {
        app = app.layer(cors_layer());
    }

    app.layer(TraceLayer::new_for_http())
}

/// Serve on an already bound listener until `shutdown` resolves
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = router(state);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .context("HTTP server failed")?;
    Ok(())
}

/// Run the HTTP server until Ctrl-C
pub async fn run(config: Config) -> Result<()> {
    let addr = config.server.bind.clone();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("  Listening on http://{}", listener.local_addr()?);
    info!("  Endpoints: /api/age, /api/cgpa, /api/gst, /api/emi");

    serve(listener, AppState::new(config), shutdown_signal()).await?;
    info!("Shutting down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}
