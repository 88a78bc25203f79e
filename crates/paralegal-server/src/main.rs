mod logging;
mod pages;
mod routes;

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Instant;

use axum::{
    routing::{get, post},
    Router,
};
use paralegal_core::config::Config;
use paralegal_core::tables::LookupTables;
use paralegal_domains::Dispatcher;
use tokio::sync::broadcast;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::prelude::*;

// ── AppState ──────────────────────────────────────────────────────────────

pub struct AppState {
    pub dispatcher: Dispatcher,
    pub config: Config,
    pub start_time: Instant,
    pub log_tx: broadcast::Sender<String>,
    pub log_ring: Arc<Mutex<VecDeque<String>>>,
}

impl AppState {
    pub fn new(
        config: Config,
        log_tx: broadcast::Sender<String>,
        log_ring: Arc<Mutex<VecDeque<String>>>,
    ) -> Self {
        let dispatcher = Dispatcher::new(LookupTables::builtin(), config.court.clone());
        Self {
            dispatcher,
            config,
            start_time: Instant::now(),
            log_tx,
            log_ring,
        }
    }
}

pub(crate) fn app(state: Arc<AppState>) -> Router {
    let cors = if state.config.cors_permissive {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
    };

    Router::new()
        // Pages
        .route("/", get(routes::index))
        .route(
            "/modes/:mode",
            get(routes::mode_page).post(routes::submit_form),
        )
        // API
        .route("/api/health", get(routes::health))
        .route("/api/status", get(routes::status))
        .route("/api/modes", get(routes::list_modes))
        .route("/api/render/:mode", post(routes::render_json))
        .route("/api/logs", get(routes::sse_logs))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ── main ──────────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    let (log_tx, _) = broadcast::channel::<String>(256);
    let log_ring = Arc::new(Mutex::new(VecDeque::with_capacity(config.log_ring_size)));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "paralegal_server=info,paralegal_domains=info,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .with(logging::BroadcastLayer {
            tx: log_tx.clone(),
            ring: Arc::clone(&log_ring),
            capacity: config.log_ring_size,
        })
        .init();

    let addr = config.bind_addr();
    let state = Arc::new(AppState::new(config, log_tx, log_ring));
    let app = app(state);

    info!("{} listening on http://{addr}", env!("CARGO_PKG_NAME"));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
