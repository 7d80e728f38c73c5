//! HTTP adapter: serves the dashboard page and the chart-update callback.

mod handlers;

use crate::charts::{ChartUpdater, Selection};
use crate::config::DashboardConfig;
use crate::data::Dataset;
use anyhow::{Context, Result};
use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

pub use handlers::{FigureQuery, OptionsResponse};

/// Shared, read-only state handed to every request.
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
    pub updater: ChartUpdater,
    pub title: Arc<str>,
    pub initial: Arc<Selection>,
}

impl AppState {
    pub fn new(dataset: Dataset, config: &DashboardConfig) -> Self {
        let initial = config.initial.resolve(dataset.options());
        match dataset.source() {
            Some(path) => info!(
                "serving {} observations from {}",
                dataset.row_count(),
                path.display()
            ),
            None => info!("serving {} in-memory observations", dataset.row_count()),
        }
        info!(
            "initial selection: item={} sex={} age={} years={:?}",
            initial.item, initial.sex, initial.age, initial.years
        );
        Self {
            dataset: Arc::new(dataset),
            updater: ChartUpdater::new(config.month_labels),
            title: Arc::from(config.title.as_str()),
            initial: Arc::new(initial),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/healthz", get(handlers::healthz))
        .route("/api/options", get(handlers::options))
        .route(
            "/api/figure",
            get(handlers::figure_query).post(handlers::figure_body),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve(state: AppState, addr: SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("dashboard listening on http://{}/", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server failed")?;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!("cannot listen for ctrl-c: {err}");
        std::future::pending::<()>().await;
    }
}
