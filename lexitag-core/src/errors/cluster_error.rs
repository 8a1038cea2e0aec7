//! Top-level engine errors.

use super::{ConfigError, CyclicAliasError, ExtractError};

/// Errors surfaced by the clustering engine's public API.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum ClusterError {
    #[error("Extraction error: {0}")]
    Extract(#[from] ExtractError),

    #[error("Synonym resolution error: {0}")]
    CyclicAlias(#[from] CyclicAliasError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
