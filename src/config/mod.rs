//! Configuration for the core: the injectable demo account and the
//! simulated gateway latency.
//!
//! Loaded from `<config dir>/venust/config.toml` when present, with
//! full defaults otherwise, so the crate works out of the box.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{AuthConfig, Config};
