use crate::{
    cli::actions::Action,
    config::{ConnectionConfig, DatabaseKind},
    tls::TlsConfig,
};
use anyhow::{Context, Result};
use clap::ArgMatches;
use std::{net::IpAddr, path::PathBuf};

fn string_arg(matches: &ArgMatches, id: &str) -> String {
    matches.get_one::<String>(id).cloned().unwrap_or_default()
}

/// Build the probe target for `kind` from its prefixed arguments
///
/// Missing host or user stay empty, the probe reports them as failures
/// instead of refusing to start.
fn connection_config(
    matches: &ArgMatches,
    kind: DatabaseKind,
    prefix: &str,
) -> ConnectionConfig {
    let port = matches
        .get_one::<u16>(&format!("{prefix}-port"))
        .copied()
        .unwrap_or_else(|| kind.default_port());

    let ca = matches
        .get_one::<String>(&format!("{prefix}-ssl-ca"))
        .filter(|path| !path.is_empty())
        .map(PathBuf::from);

    ConnectionConfig::new(kind)
        .host(string_arg(matches, &format!("{prefix}-host")))
        .user(string_arg(matches, &format!("{prefix}-user")))
        .password(string_arg(matches, &format!("{prefix}-password")))
        .port(port)
        .database(
            matches
                .get_one::<String>(&format!("{prefix}-database"))
                .cloned(),
        )
        .tls(TlsConfig::with_ca(ca))
}

/// Convert `ArgMatches` into typed Action enum with validation
///
/// # Errors
///
/// Returns an error if the listen address is not a valid IP address
pub fn dispatch(matches: &ArgMatches) -> Result<Action> {
    // Extract and validate listen address
    let listen = matches
        .get_one::<String>("listen")
        .filter(|addr| !addr.is_empty())
        .map(|addr| {
            addr.parse::<IpAddr>()
                .with_context(|| format!("Invalid IP address: {addr}"))
        })
        .transpose()?;

    // Extract port with default
    let port = matches.get_one::<u16>("port").copied().unwrap_or(3000);

    let mysql = connection_config(matches, DatabaseKind::MySql, "mysql");
    let postgres = connection_config(matches, DatabaseKind::Postgres, "pg");

    Ok(Action::Serve {
        listen,
        port,
        mysql,
        postgres,
    })
}
