//! Host platform detection and greetings.

use std::fmt;

/// The platform family a visitor arrives from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Platform {
    /// Linux.
    Linux,
    /// Windows, reported as `win32`.
    Windows,
    /// macOS, reported as `darwin`.
    MacOs,
    /// Anything else, carried verbatim.
    Other(String),
}

impl Platform {
    /// Detect the platform of the running host.
    pub fn detect() -> Self {
        Self::from_host_os(std::env::consts::OS)
    }

    /// Map a Rust target OS name (`std::env::consts::OS`) to a platform.
    pub fn from_host_os(os: &str) -> Self {
        match os {
            "linux" => Self::Linux,
            "windows" => Self::Windows,
            "macos" => Self::MacOs,
            other => Self::Other(other.to_string()),
        }
    }

    /// Parse a platform identifier as written in the chain (`linux`,
    /// `win32`, `darwin`, anything else).
    pub fn from_identifier(id: &str) -> Self {
        match id {
            "linux" => Self::Linux,
            "win32" => Self::Windows,
            "darwin" => Self::MacOs,
            other => Self::Other(other.to_string()),
        }
    }

    /// The identifier recorded in block 1.
    pub fn identifier(&self) -> &str {
        match self {
            Self::Linux => "linux",
            Self::Windows => "win32",
            Self::MacOs => "darwin",
            Self::Other(id) => id,
        }
    }

    /// Platform-specific welcome line.
    pub fn greeting(&self) -> &'static str {
        match self {
            Self::Linux => "Du har nøkkelen til shell. Tomrommet åpner seg med respekt.",
            Self::Windows => "Windows-vandrer, speilet flimrer... voiden tilpasser seg.",
            Self::MacOs => "Elegant Mac-vesen... du glir inn som en skyggestrek.",
            Self::Other(_) => "Ukjent operativsystem, voiden nøler men slipper deg inn.",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}
