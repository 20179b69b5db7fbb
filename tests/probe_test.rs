#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod common;

use common::*;
use dbstatus::config::{ConnectionConfig, DatabaseKind};
use dbstatus::probe::{CONNECTION_ERROR_PREFIX, SUCCESS_MESSAGE, probe};

#[tokio::test]
async fn test_mysql_closed_port() {
    let config = closed_port_config(DatabaseKind::MySql);
    let result = probe(&config).await;

    assert!(!result.is_connected());
    assert!(
        result.message().starts_with(CONNECTION_ERROR_PREFIX),
        "unexpected message: {}",
        result.message()
    );
    assert!(result.message().len() > CONNECTION_ERROR_PREFIX.len());
    assert_eq!(result.observed_timestamp(), None);
}

#[tokio::test]
async fn test_postgres_closed_port() {
    let config = closed_port_config(DatabaseKind::Postgres);
    let result = probe(&config).await;

    assert!(!result.is_connected());
    assert!(
        result.message().starts_with(CONNECTION_ERROR_PREFIX),
        "unexpected message: {}",
        result.message()
    );
    assert_eq!(result.observed_timestamp(), None);
}

#[tokio::test]
async fn test_failure_does_not_affect_other_probe() {
    let failing = ConnectionConfig::new(DatabaseKind::MySql);
    let closed = closed_port_config(DatabaseKind::Postgres);

    let first = probe(&failing).await;
    let second = probe(&closed).await;

    assert!(first.message().contains("no host configured"));
    assert!(!second.message().contains("no host configured"));
}

#[tokio::test]
#[ignore = "requires running MariaDB container with TLS enabled"]
async fn test_mariadb_probe_success() {
    if skip_if_no_mariadb() {
        return;
    }

    let result = probe(&mariadb_config()).await;
    assert!(result.is_connected(), "MariaDB probe failed: {result:?}");
    assert_eq!(result.message(), SUCCESS_MESSAGE);
    let timestamp = result.observed_timestamp().unwrap_or_default();
    assert!(!timestamp.is_empty());
    assert!(timestamp.chars().any(|c| c.is_ascii_digit()));
}

#[tokio::test]
#[ignore = "requires running MariaDB container with TLS enabled"]
async fn test_mariadb_bad_password() {
    if skip_if_no_mariadb() {
        return;
    }

    let result = probe(&mariadb_config().password("wrong")).await;
    assert!(!result.is_connected());
    assert!(result.message().starts_with(CONNECTION_ERROR_PREFIX));
}

#[tokio::test]
#[ignore = "requires running PostgreSQL container with TLS enabled"]
async fn test_postgres_probe_success() {
    if skip_if_no_postgres() {
        return;
    }

    let result = probe(&postgres_config()).await;
    assert!(result.is_connected(), "PostgreSQL probe failed: {result:?}");
    assert_eq!(result.message(), SUCCESS_MESSAGE);
    let timestamp = result.observed_timestamp().unwrap_or_default();
    assert!(timestamp.ends_with("UTC"), "unexpected timestamp: {timestamp}");
}

#[tokio::test]
#[ignore = "requires running PostgreSQL container with TLS enabled"]
async fn test_postgres_bad_password() {
    if skip_if_no_postgres() {
        return;
    }

    let result = probe(&postgres_config().password("wrong")).await;
    assert!(!result.is_connected());
    assert!(result.message().starts_with(CONNECTION_ERROR_PREFIX));
}

#[tokio::test]
#[ignore = "requires running PostgreSQL container with TLS enabled"]
async fn test_postgres_repeated_probes() {
    if skip_if_no_postgres() {
        return;
    }

    // No pooling: every probe opens and closes its own connection
    let config = postgres_config();
    for i in 0..5 {
        let result = probe(&config).await;
        assert!(result.is_connected(), "Iteration {i} failed: {result:?}");
    }
}
