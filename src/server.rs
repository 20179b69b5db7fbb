use crate::{config::ConnectionConfig, page, probe, tls::ensure_crypto_provider};
use anyhow::Context;
use axum::{Router, extract::State, routing::get};
use maud::Markup;
use std::{net::IpAddr, sync::Arc};
use tokio::net::TcpListener;
use tracing::{debug, info};

/// Probe targets shared by every request
#[derive(Debug)]
pub struct AppState {
    pub mysql: ConnectionConfig,
    pub postgres: ConnectionConfig,
}

/// Router with the single status route
#[must_use]
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(status_handler))
        .with_state(state)
}

/// Start the status page server
///
/// # Errors
///
/// Returns an error if the server fails to bind to the port or stops serving
pub async fn start(
    listen: Option<IpAddr>,
    port: u16,
    mysql: ConnectionConfig,
    postgres: ConnectionConfig,
) -> anyhow::Result<()> {
    ensure_crypto_provider();

    debug!(?mysql, ?postgres, "probe targets");

    let app = router(Arc::new(AppState { mysql, postgres }));

    // Bind to socket with smart fallback
    let (listener, bind_addr) = match listen {
        Some(addr) => {
            let socket_addr = format!("{addr}:{port}");
            let listener = TcpListener::bind(&socket_addr)
                .await
                .with_context(|| format!("Failed to bind {socket_addr}"))?;
            (listener, socket_addr)
        }
        None => {
            // Auto mode: try IPv6 first, fallback to IPv4
            if let Ok(l) = TcpListener::bind(format!("::0:{port}")).await {
                (l, format!("[::]:{port}"))
            } else {
                let socket_addr = format!("0.0.0.0:{port}");
                let listener = TcpListener::bind(&socket_addr)
                    .await
                    .with_context(|| format!("Failed to bind {socket_addr}"))?;
                (listener, socket_addr)
            }
        }
    };

    info!("Listening on {bind_addr}");

    axum::serve(listener, app.into_make_service())
        .await
        .context("Server stopped")?;

    Ok(())
}

/// `GET /`: probe `MySQL`, then `PostgreSQL`, and render the page
///
/// Always answers 200, failures only show up in the page content.
async fn status_handler(State(state): State<Arc<AppState>>) -> Markup {
    let mysql = probe::probe(&state.mysql).await;
    let postgres = probe::probe(&state.postgres).await;
    page::render(&mysql, &postgres)
}
