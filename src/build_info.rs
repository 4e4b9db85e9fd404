//! Build information module
//!
//! Compile-time constants stamped by `build.rs`.

use serde::Serialize;

/// Local build counter from `build_number.txt`; 0 when not stamped
pub const BUILD_NUMBER: u64 = match option_env!("NUTRICOACH_BUILD_NUMBER") {
    Some(s) => parse_digits(s),
    None => 0,
};

/// Build timestamp in ISO 8601 format
pub const BUILD_TIMESTAMP: &str = match option_env!("NUTRICOACH_BUILD_TIMESTAMP") {
    Some(s) => s,
    None => "unknown",
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Const digit fold; anything that is not a plain decimal counter gives 0
const fn parse_digits(s: &str) -> u64 {
    let bytes = s.as_bytes();
    let mut n: u64 = 0;
    let mut i = 0;
    while i < bytes.len() {
        if !bytes[i].is_ascii_digit() {
            return 0;
        }
        n = n.saturating_mul(10).saturating_add((bytes[i] - b'0') as u64);
        i += 1;
    }
    n
}

/// Serializable snapshot of the build constants
#[derive(Debug, Clone, Serialize)]
pub struct BuildInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub description: &'static str,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            name: NAME,
            version: VERSION,
            build_number: BUILD_NUMBER,
            build_timestamp: BUILD_TIMESTAMP,
            description: DESCRIPTION,
        }
    }
}

/// One-line startup banner on stderr; stdout carries the MCP transport
pub fn print_startup_banner() {
    let info = BuildInfo::current();
    eprintln!(
        "NutriCoach nutrition calculator v{} (build {}, {})",
        info.version, info.build_number, info.build_timestamp
    );
}
