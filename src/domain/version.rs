//! Version stability rules for module sets.
//!
//! Module versions follow the Go module convention: a leading `v` is
//! mandatory and the shorthand forms `vMAJOR` and `vMAJOR.MINOR` are
//! accepted. Full SemVer validation is left to callers.

use semver::Version;

/// Parse a module version string into a [`Version`].
///
/// Returns `None` for anything that is not a `v`-prefixed semantic version
/// (including shorthand forms carrying pre-release or build suffixes).
pub fn parse_module_version(version: &str) -> Option<Version> {
    let bare = version.strip_prefix('v')?;

    if let Ok(parsed) = Version::parse(bare) {
        return Some(parsed);
    }

    // Shorthand: "v1" -> 1.0.0, "v1.2" -> 1.2.0
    let parts: Vec<&str> = bare.split('.').collect();
    let padded = match parts.len() {
        1 => format!("{}.0.0", parts[0]),
        2 => format!("{}.{}.0", parts[0], parts[1]),
        _ => return None,
    };
    if bare.contains(['-', '+']) {
        return None;
    }
    Version::parse(&padded).ok()
}

/// Returns true if the version's major component is v1 or later.
///
/// Pre-release and build metadata are ignored, so "v2.0.0-rc1" is stable.
/// A major component too large for `u64` still counts as v1 or later.
/// Malformed versions are never stable.
///
/// # Example
/// ```
/// use modver::domain::is_stable;
///
/// assert!(is_stable("v1.0.0"));
/// assert!(!is_stable("v0.9.0"));
/// assert!(!is_stable("1.0.0"));
/// ```
pub fn is_stable(version: &str) -> bool {
    parse_module_version(version)
        .map(|v| v.major >= 1)
        .unwrap_or_else(|| has_oversized_major(version))
}

/// A well-formed module version whose major component overflows `u64`.
fn has_oversized_major(version: &str) -> bool {
    let Some(bare) = version.strip_prefix('v') else {
        return false;
    };
    let digits = bare.bytes().take_while(u8::is_ascii_digit).count();
    let (major, rest) = bare.split_at(digits);
    if major.len() < 2 || major.starts_with('0') || major.parse::<u64>().is_ok() {
        return false;
    }
    // Same shape with a small major must still parse.
    parse_module_version(&format!("v1{}", rest)).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stable_release() {
        assert!(is_stable("v1.0.0"));
        assert!(is_stable("v1.18.3"));
    }

    #[test]
    fn test_unstable_release() {
        assert!(!is_stable("v0.9.0"));
        assert!(!is_stable("v0.0.1"));
    }

    #[test]
    fn test_prerelease_compares_on_major_only() {
        assert!(is_stable("v2.0.0-rc1"));
        assert!(is_stable("v1.0.0-alpha.1+build.5"));
        assert!(!is_stable("v0.1.0-beta"));
    }

    #[test]
    fn test_shorthand_versions() {
        assert!(is_stable("v1"));
        assert!(is_stable("v3.4"));
        assert!(!is_stable("v0.4"));
        assert!(!is_stable("v1-rc1"));
    }

    #[test]
    fn test_malformed_versions_are_unstable() {
        assert!(!is_stable(""));
        assert!(!is_stable("v"));
        assert!(!is_stable("1.0.0"));
        assert!(!is_stable("version-one"));
        assert!(!is_stable("v1.2.3.4"));
        assert!(!is_stable("v01.0.0"));
    }

    #[test]
    fn test_major_beyond_u64_is_stable() {
        assert!(is_stable("v18446744073709551616.0.0"));
        assert!(is_stable("v18446744073709551616"));
        assert!(is_stable("v99999999999999999999.1.0-rc.1"));
        assert!(!is_stable("v18446744073709551616.x"));
        assert!(!is_stable("v018446744073709551616.0.0"));
        assert!(!is_stable("18446744073709551616.0.0"));
    }

    #[test]
    fn test_parse_module_version() {
        let v = parse_module_version("v1.2.3").unwrap();
        assert_eq!((v.major, v.minor, v.patch), (1, 2, 3));

        let v = parse_module_version("v2").unwrap();
        assert_eq!((v.major, v.minor, v.patch), (2, 0, 0));

        assert!(parse_module_version("1.2.3").is_none());
    }
}
