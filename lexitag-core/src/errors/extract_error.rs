//! Keyword extraction errors.

/// Errors that can occur while preparing the keyword extractor.
///
/// Carries the pattern-compiler failure as a string so this crate stays
/// free of the matching-library dependency.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("failed to build keyword automaton: {message}")]
    AutomatonBuild { message: String },
}
