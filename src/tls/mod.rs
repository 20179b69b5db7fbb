//! TLS configuration for database connections
//!
//! - `config` - certificate verification settings shared by both kinds

pub mod config;

pub use config::TlsConfig;

use std::sync::OnceLock;

static CRYPTO_PROVIDER_INIT: OnceLock<()> = OnceLock::new();

/// Ensure the rustls crypto provider is initialized
///
/// Safe to call multiple times, installation only happens once. A provider
/// installed earlier by someone else is left in place.
pub fn ensure_crypto_provider() {
    CRYPTO_PROVIDER_INIT.get_or_init(|| {
        if rustls::crypto::ring::default_provider()
            .install_default()
            .is_err()
        {
            tracing::debug!("rustls crypto provider already installed");
        }
    });
}
