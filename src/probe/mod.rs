pub mod mysql;
pub mod postgres;

use crate::config::{ConnectionConfig, DatabaseKind};
use std::{fmt::Display, time::Instant};
use tracing::{info, instrument, warn};

/// Message reported for a probe that connected and read the server time
pub const SUCCESS_MESSAGE: &str = "connected successfully";
pub const CONNECTION_ERROR_PREFIX: &str = "connection error: ";
pub const QUERY_ERROR_PREFIX: &str = "query error: ";

/// Current server time, same alias for every dialect
pub const SERVER_TIME_QUERY: &str = "SELECT NOW() AS server_time";

/// Outcome of a single connect, query and disconnect cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeResult {
    /// Connected and read the server time
    Connected { timestamp: String },
    /// Connection or query failed, `message` carries the driver error
    Failed { message: String },
}

impl ProbeResult {
    #[must_use]
    pub fn success(timestamp: impl Into<String>) -> Self {
        Self::Connected {
            timestamp: timestamp.into(),
        }
    }

    #[must_use]
    pub fn connection_failed(err: &impl Display) -> Self {
        Self::Failed {
            message: format!("{CONNECTION_ERROR_PREFIX}{err}"),
        }
    }

    #[must_use]
    pub fn query_failed(err: &impl Display) -> Self {
        Self::Failed {
            message: format!("{QUERY_ERROR_PREFIX}{err}"),
        }
    }

    #[must_use]
    pub const fn is_connected(&self) -> bool {
        matches!(self, Self::Connected { .. })
    }

    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Connected { .. } => SUCCESS_MESSAGE,
            Self::Failed { message } => message,
        }
    }

    /// Server time, only present when connected
    #[must_use]
    pub fn observed_timestamp(&self) -> Option<&str> {
        match self {
            Self::Connected { timestamp } => Some(timestamp),
            Self::Failed { .. } => None,
        }
    }
}

/// Probe the target described by `config`
///
/// Never fails: every error is folded into [`ProbeResult::Failed`].
#[instrument(skip_all, fields(kind = %config.kind, addr = %config.target()))]
pub async fn probe(config: &ConnectionConfig) -> ProbeResult {
    if config.host.trim().is_empty() {
        warn!("no host configured");
        return ProbeResult::connection_failed(&"no host configured");
    }

    let timer = Instant::now();
    let result = match config.kind {
        DatabaseKind::MySql => mysql::probe(config).await,
        DatabaseKind::Postgres => postgres::probe(config).await,
    };
    let elapsed = timer.elapsed();

    match &result {
        ProbeResult::Connected { timestamp } => {
            info!(?elapsed, %timestamp, "probe succeeded");
        }
        ProbeResult::Failed { message } => {
            warn!(?elapsed, %message, "probe failed");
        }
    }

    result
}
