use chrono::{DateTime, Utc};
use sqlx::{
    ConnectOptions, Connection,
    postgres::{PgConnectOptions, PgSslMode},
};
use tracing::debug;

use super::{ProbeResult, SERVER_TIME_QUERY};
use crate::config::ConnectionConfig;

/// Build `PostgreSQL` connect options from the probe configuration
#[must_use]
pub fn connect_options(config: &ConnectionConfig) -> PgConnectOptions {
    let mut options = PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.user)
        .password(&config.password);

    if let Some(database) = &config.database {
        options = options.database(database);
    }

    options = if config.tls.require_valid_cert {
        options.ssl_mode(PgSslMode::VerifyFull)
    } else {
        options.ssl_mode(PgSslMode::Require)
    };

    if let Some(ca_path) = &config.tls.ca {
        options = options.ssl_root_cert(ca_path);
    }

    options
}

/// Connect, read `NOW()` and disconnect
pub async fn probe(config: &ConnectionConfig) -> ProbeResult {
    let mut conn = match connect_options(config).connect().await {
        Ok(conn) => conn,
        Err(err) => return ProbeResult::connection_failed(&err),
    };

    let result = match sqlx::query_scalar::<_, DateTime<Utc>>(SERVER_TIME_QUERY)
        .fetch_one(&mut conn)
        .await
    {
        Ok(now) => ProbeResult::success(now.to_string()),
        Err(err) => ProbeResult::query_failed(&err),
    };

    if let Err(err) = conn.close().await {
        debug!("failed to close postgres connection: {err}");
    }

    result
}
