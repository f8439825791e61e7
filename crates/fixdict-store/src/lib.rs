//! FixDict Store - loading dictionary repositories from disk
//!
//! Provides:
//! - Table Format v0 (YAML) parser with key validation
//! - Repository loader: one directory per protocol version
//! - Override directory loader
//! - Configuration file loading

pub mod config;
pub mod errors;
pub mod overrides;
pub mod repository;
pub mod table;

// Re-export key types
pub use config::load_config;
pub use errors::Result;
pub use overrides::load_overrides;
pub use repository::{load_repository, load_version};
