//! Persisted tip preferences

pub mod config;

pub use config::{DEFAULT_PRESETS, TipSettings};
