//! Version detection for the external Aptos CLI.
//!
//! If the tool doesn't support `--version` or prints something unexpected,
//! detection returns `None`; a version check only ever produces warnings.

use std::fmt;
use std::process::Command;

/// A `major.minor.patch` tool version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parse the first `X.Y.Z` found in `s`.
    ///
    /// Accepts `"4.2.3"`, `"aptos 4.2.3"` and `"aptos-cli-v4.2.3"`. Trailing
    /// pre-release text after the patch number is ignored.
    pub fn parse(s: &str) -> Option<Self> {
        s.split(|c: char| !(c.is_ascii_digit() || c == '.'))
            .find_map(Self::parse_token)
    }

    fn parse_token(token: &str) -> Option<Self> {
        let mut parts = token.split('.');
        let major = parts.next()?.parse().ok()?;
        let minor = parts.next()?.parse().ok()?;
        let patch = parts.next()?.parse().ok()?;
        Some(Self::new(major, minor, patch))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Run `tool --version` and parse stdout, then stderr.
pub fn detect_version(tool: &str) -> Option<Version> {
    let output = Command::new(tool).arg("--version").output().ok()?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    if output.status.success() {
        if let Some(v) = Version::parse(&stdout) {
            return Some(v);
        }
    }

    Version::parse(&String::from_utf8_lossy(&output.stderr))
}
