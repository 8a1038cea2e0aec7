//! Core types, errors, configuration, tracing, and the taxonomy model
//! for the Lexitag classification engine.
//!
//! This crate is the read-only foundation: the engine crate consumes the
//! [`taxonomy::Taxonomy`] it produces but never mutates it.

pub mod config;
pub mod errors;
pub mod taxonomy;
pub mod tracing;
pub mod types;

pub use taxonomy::{Taxonomy, TaxonomyBuilder, NOT_CLASSIFIED};
