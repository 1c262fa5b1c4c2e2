use anyhow::Result;
use log::debug;

use super::detection::{Libc, Platform, PlatformDetector, detect_libc, normalize_arch};
use crate::error::WheelError;
use crate::runtime::Runtime;

/// Manylinux tag candidates per architecture, most preferred first.
///
/// Dual-tagged wheels carry both names in one filename segment, so each entry
/// is matched as a substring of the asset name.
fn manylinux_tags(arch: &str) -> &'static [&'static str] {
    match arch {
        "x86_64" => &[
            "manylinux_2_27_x86_64.manylinux_2_28_x86_64",
            "manylinux_2_17_x86_64.manylinux2014_x86_64",
        ],
        "aarch64" => &[
            "manylinux_2_26_aarch64.manylinux_2_28_aarch64",
            "manylinux_2_17_aarch64.manylinux2014_aarch64",
        ],
        "i686" => &[
            "manylinux_2_26_i686.manylinux_2_28_i686",
            "manylinux_2_17_i686.manylinux2014_i686",
        ],
        "ppc64le" => &["manylinux_2_26_ppc64le.manylinux_2_28_ppc64le"],
        "s390x" => &["manylinux_2_26_s390x.manylinux_2_28_s390x"],
        "armv7l" => &["manylinux_2_31_armv7l"],
        _ => &[],
    }
}

/// Candidate platform tags for an OS/architecture pair, most preferred first.
///
/// `libc` is only consulted for Linux. An empty result is reported as
/// [`WheelError::UnsupportedPlatform`] carrying the raw `os` and `machine`.
pub fn platform_tags(os: &str, machine: &str, libc: Libc) -> Result<Vec<String>, WheelError> {
    let system = os.to_lowercase();
    let arch = normalize_arch(machine);

    let tags: Vec<String> = match system.as_str() {
        "darwin" => {
            if arch == "arm64" || arch == "aarch64" {
                vec!["macosx_11_0_arm64".to_string()]
            } else {
                vec!["macosx_10_9_x86_64".to_string()]
            }
        }
        "linux" => match libc {
            Libc::Glibc => manylinux_tags(&arch)
                .iter()
                .map(|tag| tag.to_string())
                .collect(),
            Libc::Musl => vec![format!("musllinux_1_2_{}", arch)],
        },
        "windows" => match arch.as_str() {
            "x86_64" | "amd64" => vec!["win_amd64".to_string()],
            "arm64" | "aarch64" => vec!["win_arm64".to_string()],
            _ => vec!["win32".to_string()],
        },
        _ => Vec::new(),
    };

    if tags.is_empty() {
        return Err(WheelError::UnsupportedPlatform {
            os: system,
            arch: machine.to_lowercase(),
        });
    }

    Ok(tags)
}

/// Detect the host and resolve its candidate platform tags.
///
/// Runs `ldd` through `runtime` only when the host is Linux.
#[tracing::instrument(skip(runtime, detector))]
pub fn resolve_platform_tags<R: Runtime, P: PlatformDetector>(
    runtime: &R,
    detector: &P,
) -> Result<Vec<String>> {
    let Platform { os, arch } = detector.detect();

    let libc = if os == "linux" {
        detect_libc(runtime)
    } else {
        Libc::Glibc
    };

    debug!("Resolving tags for os={} arch={} libc={:?}", os, arch, libc);

    Ok(platform_tags(&os, &arch, libc)?)
}
