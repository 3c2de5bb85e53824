//! Module manifest parsing.
//!
//! A manifest is the per-module file declaring the module's identifier.
//! [`ManifestParser`] is the seam for manifest formats; [`GoModParser`]
//! reads the `module` directive of `go.mod` files.

use regex::Regex;
use thiserror::Error;

use crate::domain::ModuleId;
use crate::error::Result;

/// Canonical file name of Go module manifests
pub const GO_MOD: &str = "go.mod";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ManifestError {
    #[error("malformed manifest: {0}")]
    Malformed(String),
}

/// Extracts the declared module identifier from raw manifest bytes.
pub trait ManifestParser {
    /// File name every manifest of this format carries
    fn manifest_name(&self) -> &str;

    /// Returns the module identifier declared in `contents`
    fn module_id(&self, contents: &[u8]) -> std::result::Result<ModuleId, ManifestError>;
}

/// Parser for `go.mod` files.
#[derive(Debug, Clone)]
pub struct GoModParser {
    directive: Regex,
}

impl GoModParser {
    pub fn new() -> Result<Self> {
        Ok(GoModParser {
            directive: Regex::new(r"^module\s+(.+)$")?,
        })
    }
}

impl ManifestParser for GoModParser {
    fn manifest_name(&self) -> &str {
        GO_MOD
    }

    fn module_id(&self, contents: &[u8]) -> std::result::Result<ModuleId, ManifestError> {
        let text = std::str::from_utf8(contents)
            .map_err(|e| ManifestError::Malformed(format!("not valid UTF-8: {}", e)))?;

        for line in text.lines() {
            // Strip line comments
            let line = match line.find("//") {
                Some(i) => &line[..i],
                None => line,
            };

            let Some(captures) = self.directive.captures(line.trim()) else {
                continue;
            };
            let path = captures
                .get(1)
                .map(|m| m.as_str().trim())
                .unwrap_or_default();

            return unquote(path).map(ModuleId::from);
        }

        Err(ManifestError::Malformed(
            "missing module directive".to_string(),
        ))
    }
}

/// Removes the surrounding quotes of a quoted module path.
fn unquote(path: &str) -> std::result::Result<String, ManifestError> {
    let quote = match path.chars().next() {
        Some(q @ ('"' | '`')) => q,
        _ => return Ok(path.to_string()),
    };

    let inner = path
        .strip_prefix(quote)
        .and_then(|rest| rest.strip_suffix(quote))
        .filter(|inner| !inner.contains(quote))
        .ok_or_else(|| ManifestError::Malformed(format!("badly quoted module path {}", path)))?;

    if quote == '"' && inner.contains('\\') {
        return Err(ManifestError::Malformed(format!(
            "escape sequences are not supported in module path {}",
            path
        )));
    }
    if inner.is_empty() {
        return Err(ManifestError::Malformed("empty module path".to_string()));
    }

    Ok(inner.to_string())
}
