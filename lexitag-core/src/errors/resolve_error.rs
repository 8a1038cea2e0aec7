//! Synonym resolution errors.

/// Raised when following an alias chain takes more lookups than the synonym
/// map has entries. A finite acyclic chain cannot be longer than the map, so
/// exceeding the bound proves a cycle in the alias configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("alias chain for {token:?} exceeded {bound} lookups; cyclic synonym configuration")]
pub struct CyclicAliasError {
    /// The token whose resolution did not terminate.
    pub token: String,
    /// The iteration bound that was hit (the synonym map's entry count).
    pub bound: usize,
}

impl CyclicAliasError {
    pub fn new(token: impl Into<String>, bound: usize) -> Self {
        Self {
            token: token.into(),
            bound,
        }
    }
}
