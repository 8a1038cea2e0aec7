//! Error handling for Lexitag.
//! One error type per subsystem, `thiserror` only, zero `anyhow`.

pub mod cluster_error;
pub mod config_error;
pub mod extract_error;
pub mod resolve_error;

pub use cluster_error::ClusterError;
pub use config_error::ConfigError;
pub use extract_error::ExtractError;
pub use resolve_error::CyclicAliasError;
