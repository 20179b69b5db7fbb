#![allow(dead_code, clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use dbstatus::config::{ConnectionConfig, DatabaseKind};
use dbstatus::tls::{TlsConfig, ensure_crypto_provider};
use std::{env, path::PathBuf};
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::TcpStream,
};

pub fn skip_if_no_postgres() -> bool {
    env::var("SKIP_POSTGRES_TESTS").is_ok()
}

pub fn skip_if_no_mariadb() -> bool {
    env::var("SKIP_MARIADB_TESTS").is_ok()
}

/// Path to a CA certificate, from `var` or the default location
fn ca_cert_path(var: &str, default: &str) -> Option<PathBuf> {
    env::var(var).ok().map(PathBuf::from).or_else(|| {
        let path = PathBuf::from(default);
        if path.exists() { Some(path) } else { None }
    })
}

/// `MariaDB` target for live tests, `MARIADB_CA_CERT` overrides the CA
pub fn mariadb_config() -> ConnectionConfig {
    ensure_crypto_provider();
    ConnectionConfig::new(DatabaseKind::MySql)
        .host(env::var("TEST_MARIADB_HOST").unwrap_or_else(|_| "localhost".into()))
        .user("dbstatus")
        .password("secret")
        .tls(TlsConfig::with_ca(ca_cert_path(
            "MARIADB_CA_CERT",
            ".certs/mariadb/ca.crt",
        )))
}

/// `PostgreSQL` target for live tests, `POSTGRES_CA_CERT` overrides the CA
pub fn postgres_config() -> ConnectionConfig {
    ensure_crypto_provider();
    ConnectionConfig::new(DatabaseKind::Postgres)
        .host(env::var("TEST_POSTGRES_HOST").unwrap_or_else(|_| "localhost".into()))
        .user("postgres")
        .password("secret")
        .tls(TlsConfig::with_ca(ca_cert_path(
            "POSTGRES_CA_CERT",
            ".certs/postgres/ca.crt",
        )))
}

/// Target on a local port nothing listens on
pub fn closed_port_config(kind: DatabaseKind) -> ConnectionConfig {
    ensure_crypto_provider();
    ConnectionConfig::new(kind)
        .host("127.0.0.1")
        .user("nobody")
        .password("nothing")
        .port(pick_free_port())
}

pub fn pick_free_port() -> u16 {
    std::net::TcpListener::bind(("127.0.0.1", 0))
        .expect("failed to bind random local port")
        .local_addr()
        .expect("failed to read local addr")
        .port()
}

/// Plain HTTP/1.1 GET, returns the status line and the body
pub async fn fetch(port: u16, path: &str) -> Option<(String, String)> {
    let mut stream = TcpStream::connect(("127.0.0.1", port)).await.ok()?;
    let request =
        format!("GET {path} HTTP/1.1\r\nHost: 127.0.0.1:{port}\r\nConnection: close\r\n\r\n");
    stream.write_all(request.as_bytes()).await.ok()?;

    let mut response = Vec::new();
    stream.read_to_end(&mut response).await.ok()?;
    let response = String::from_utf8(response).ok()?;
    let (head, body) = response.split_once("\r\n\r\n")?;
    Some((head.to_string(), body.to_string()))
}
