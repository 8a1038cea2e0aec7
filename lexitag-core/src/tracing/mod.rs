//! Tracing initialization and configuration.

pub mod setup;

pub use setup::init_tracing;
