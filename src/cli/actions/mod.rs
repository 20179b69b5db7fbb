mod run;

use crate::config::ConnectionConfig;
use std::net::IpAddr;

/// Action enum representing each possible command
#[derive(Debug)]
pub enum Action {
    Serve {
        listen: Option<IpAddr>,
        port: u16,
        mysql: ConnectionConfig,
        postgres: ConnectionConfig,
    },
}

impl Action {
    /// Execute the action
    ///
    /// # Errors
    ///
    /// Returns an error if the action fails to execute
    pub async fn execute(self) -> anyhow::Result<()> {
        run::execute(self).await
    }
}
