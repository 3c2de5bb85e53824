pub mod config;
pub mod domain;
pub mod error;
pub mod index;
pub mod manifest;
pub mod repo;
pub mod ui;
pub mod versioning;
pub mod warning;

pub use config::{ConfigSource, FileConfigSource, VersioningConfig};
pub use error::{Result, VersioningError};
pub use versioning::ModuleVersioning;
