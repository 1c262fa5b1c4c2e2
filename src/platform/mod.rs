//! Platform detection and wheel tag resolution
//!
//! This module detects the current platform (OS, architecture and, on Linux,
//! the C runtime) and turns it into the ordered list of wheel platform tags
//! worth looking for in a release.

mod detection;
mod tags;

pub use detection::{
    DefaultPlatformDetector, Libc, Platform, PlatformDetector, detect_libc, normalize_arch,
};
pub use tags::{platform_tags, resolve_platform_tags};
