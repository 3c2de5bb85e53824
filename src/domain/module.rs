use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

use super::version::is_stable;

/// Import path uniquely identifying a module in the repository
/// (e.g. "go.opentelemetry.io/otel/sdk/metric").
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleId(String);

impl ModuleId {
    /// Create a new module identifier
    pub fn new(id: impl Into<String>) -> Self {
        ModuleId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ModuleId {
    fn from(id: &str) -> Self {
        ModuleId(id.to_string())
    }
}

impl From<String> for ModuleId {
    fn from(id: String) -> Self {
        ModuleId(id)
    }
}

impl Borrow<str> for ModuleId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// A named group of modules released together under one version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleSet {
    pub version: String,

    #[serde(default)]
    pub modules: Vec<ModuleId>,
}

impl ModuleSet {
    /// Create a new module set
    pub fn new(version: impl Into<String>, modules: Vec<ModuleId>) -> Self {
        ModuleSet {
            version: version.into(),
            modules,
        }
    }

    /// Whether this set's version is v1 or later
    pub fn is_stable(&self) -> bool {
        is_stable(&self.version)
    }
}

/// Reverse view of set membership: which set a module belongs to and the
/// version it receives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleInfo {
    pub set_name: String,
    pub version: String,
}

impl ModuleInfo {
    pub fn new(set_name: impl Into<String>, version: impl Into<String>) -> Self {
        ModuleInfo {
            set_name: set_name.into(),
            version: version.into(),
        }
    }
}
