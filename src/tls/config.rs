use std::path::PathBuf;

/// TLS settings for database connections
///
/// Connections are always encrypted. With `require_valid_cert` the server
/// certificate must chain to a trusted root and match the host name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TlsConfig {
    pub require_valid_cert: bool,
    /// CA bundle to trust instead of the bundled web PKI roots
    pub ca: Option<PathBuf>,
}

impl Default for TlsConfig {
    fn default() -> Self {
        Self {
            require_valid_cert: true,
            ca: None,
        }
    }
}

impl TlsConfig {
    #[must_use]
    pub fn with_ca(ca: Option<PathBuf>) -> Self {
        Self {
            ca,
            ..Self::default()
        }
    }
}
