//! Release and protocol version strings.

use std::sync::LazyLock;

/// Protocol generation reported by `--version`.
pub const PROTO: &str = "2";
pub const MAJOR: &str = "1";
pub const MINOR: &str = "0";
pub const PATCH: &str = "0";

/// [`full`], computed once for `--version`.
pub static FULL: LazyLock<String> = LazyLock::new(full);

/// `"MAJOR.MINOR"`
pub fn major_minor() -> String {
    format!("{MAJOR}.{MINOR}")
}

/// `"MAJOR.MINOR.PATCH"`
pub fn major_minor_patch() -> String {
    format!("{MAJOR}.{MINOR}.{PATCH}")
}

/// `"PROTO-MAJOR.MINOR.PATCH"`
pub fn full() -> String {
    format!("{PROTO}-{}", major_minor_patch())
}

/// Versions are compatible only when the full strings match exactly.
///
/// Backs `--expect-version`, which scripts use to pin the tool they call.
pub fn compat(client: &str, server: &str) -> bool {
    client == server
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats() {
        assert_eq!(major_minor(), "1.0");
        assert_eq!(major_minor_patch(), "1.0.0");
        assert_eq!(full(), "2-1.0.0");
        assert_eq!(FULL.as_str(), full());
    }

    #[test]
    fn compat_is_exact_match() {
        assert!(compat("2-1.0.0", "2-1.0.0"));
        assert!(!compat("2-1.0.0", "2-1.0.1"));
        assert!(!compat("1-1.0.0", "2-1.0.0"));
        assert!(!compat("", "2-1.0.0"));
    }
}
