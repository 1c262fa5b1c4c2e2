use log::debug;

use crate::runtime::Runtime;

/// Raw host description, spelled the way wheel platform tags spell it.
#[derive(Debug, Clone, PartialEq)]
pub struct Platform {
    pub os: String,
    pub arch: String,
}

impl Platform {
    /// Detect the current platform
    pub fn detect() -> Self {
        Self {
            os: Self::detect_os(),
            arch: Self::detect_arch(),
        }
    }

    fn detect_os() -> String {
        #[cfg(target_os = "macos")]
        {
            "darwin".to_string()
        }
        #[cfg(target_os = "linux")]
        {
            "linux".to_string()
        }
        #[cfg(target_os = "windows")]
        {
            "windows".to_string()
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            std::env::consts::OS.to_string()
        }
    }

    fn detect_arch() -> String {
        #[cfg(target_arch = "x86_64")]
        {
            "x86_64".to_string()
        }
        #[cfg(all(target_arch = "aarch64", target_os = "macos"))]
        {
            "arm64".to_string()
        }
        #[cfg(all(target_arch = "aarch64", not(target_os = "macos")))]
        {
            "aarch64".to_string()
        }
        #[cfg(target_arch = "x86")]
        {
            "i686".to_string()
        }
        #[cfg(target_arch = "arm")]
        {
            "armv7l".to_string()
        }
        #[cfg(all(target_arch = "powerpc64", target_endian = "little"))]
        {
            "ppc64le".to_string()
        }
        #[cfg(target_arch = "s390x")]
        {
            "s390x".to_string()
        }
        #[cfg(not(any(
            target_arch = "x86_64",
            target_arch = "aarch64",
            target_arch = "x86",
            target_arch = "arm",
            all(target_arch = "powerpc64", target_endian = "little"),
            target_arch = "s390x"
        )))]
        {
            std::env::consts::ARCH.to_string()
        }
    }
}

/// Trait for platform detection (useful for testing)
pub trait PlatformDetector: Send + Sync {
    fn detect(&self) -> Platform;
}

/// Default platform detector using compile-time detection
pub struct DefaultPlatformDetector;

impl PlatformDetector for DefaultPlatformDetector {
    fn detect(&self) -> Platform {
        Platform::detect()
    }
}

/// Normalize a machine architecture name to the spelling used in tag lookups.
///
/// Names outside the alias table pass through lowercased.
pub fn normalize_arch(machine: &str) -> String {
    let machine = machine.to_lowercase();
    let normalized = match machine.as_str() {
        "x86_64" | "amd64" => "x86_64",
        "aarch64" => "aarch64",
        "arm64" => "arm64",
        "armv7l" => "armv7l",
        "i386" | "i686" => "i686",
        "ppc64le" => "ppc64le",
        "s390x" => "s390x",
        other => other,
    };
    normalized.to_string()
}

/// C runtime flavor of a Linux host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Libc {
    /// glibc, served by manylinux wheels
    Glibc,
    /// musl, served by musllinux wheels
    Musl,
}

/// Detect the C runtime by asking the dynamic linker for its version.
///
/// musl's `ldd` reports itself on stderr. Any failure to run `ldd` falls back
/// to [`Libc::Glibc`].
#[tracing::instrument(skip(runtime))]
pub fn detect_libc<R: Runtime>(runtime: &R) -> Libc {
    match runtime.command_stderr("ldd", &["--version".to_string()]) {
        Ok(stderr) if stderr.to_lowercase().contains("musl") => Libc::Musl,
        Ok(_) => Libc::Glibc,
        Err(e) => {
            debug!("libc detection failed, assuming glibc: {:#}", e);
            Libc::Glibc
        }
    }
}
