pub mod cli;
pub mod config;
pub mod page;
pub mod probe;
pub mod server;
pub mod tls;
