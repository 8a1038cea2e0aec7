//! Shared type definitions.

pub mod collections;
