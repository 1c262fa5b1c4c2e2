//! Failure kinds surfaced to the user at the end of a run.

use std::fmt;
use std::path::PathBuf;

/// Errors that abort a download run.
///
/// These travel inside `anyhow::Error` and are recovered with
/// `downcast_ref` at the top level to print follow-up hints.
#[derive(Debug)]
pub enum WheelError {
    /// No platform tag could be derived for this OS/architecture pair
    UnsupportedPlatform { os: String, arch: String },
    /// Fetching or decoding release metadata failed
    ReleaseFetch {
        version: Option<String>,
        cause: anyhow::Error,
    },
    /// No asset name matched any candidate platform tag
    AssetNotFound {
        tool: String,
        platform: String,
        requested_version: Option<String>,
        release_tag: String,
    },
    /// The matched asset could not be written to disk
    DownloadFailed { file: PathBuf },
}

impl WheelError {
    /// Additional lines worth showing after the error itself.
    pub fn hints(&self) -> Vec<String> {
        match self {
            WheelError::UnsupportedPlatform { .. } => vec![
                "Use --platform to specify manually, or --list-platforms to see available options"
                    .to_string(),
            ],
            WheelError::AssetNotFound {
                requested_version,
                release_tag,
                ..
            } => {
                let mut hints = Vec::new();
                if let Some(version) = requested_version {
                    hints.push(format!("Requested version: {}", version));
                }
                hints.push(format!("Available release: {}", release_tag));
                hints.push("Use --list-platforms to see all available platforms".to_string());
                hints
            }
            WheelError::ReleaseFetch { .. } | WheelError::DownloadFailed { .. } => Vec::new(),
        }
    }
}

impl fmt::Display for WheelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WheelError::UnsupportedPlatform { os, arch } => {
                write!(f, "Unsupported platform: {} {}", os, arch)
            }
            WheelError::ReleaseFetch {
                version: Some(version),
                cause,
            } => {
                write!(
                    f,
                    "Failed to fetch release info for version {}: {:#}",
                    version, cause
                )
            }
            WheelError::ReleaseFetch {
                version: None,
                cause,
            } => {
                write!(f, "Failed to fetch latest release info: {:#}", cause)
            }
            WheelError::AssetNotFound { tool, platform, .. } => {
                write!(f, "No wheel found for {} on platform {}", tool, platform)
            }
            WheelError::DownloadFailed { file } => {
                write!(f, "Failed to download {}", file.display())
            }
        }
    }
}

impl std::error::Error for WheelError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_platform_display() {
        let err = WheelError::UnsupportedPlatform {
            os: "freebsd".into(),
            arch: "amd64".into(),
        };
        assert_eq!(err.to_string(), "Unsupported platform: freebsd amd64");
        assert!(err.hints()[0].contains("--platform"));
    }

    #[test]
    fn test_release_fetch_display_with_version() {
        let err = WheelError::ReleaseFetch {
            version: Some("99.0.0".into()),
            cause: anyhow::anyhow!("Not found"),
        };
        assert_eq!(
            err.to_string(),
            "Failed to fetch release info for version 99.0.0: Not found"
        );
        assert!(err.hints().is_empty());
    }

    #[test]
    fn test_release_fetch_display_latest() {
        let err = WheelError::ReleaseFetch {
            version: None,
            cause: anyhow::anyhow!("connection refused"),
        };
        assert_eq!(
            err.to_string(),
            "Failed to fetch latest release info: connection refused"
        );
    }

    #[test]
    fn test_asset_not_found_hints() {
        let err = WheelError::AssetNotFound {
            tool: "clang-tidy".into(),
            platform: "win32".into(),
            requested_version: Some("20.1.8".into()),
            release_tag: "v20.1.8".into(),
        };
        assert_eq!(
            err.to_string(),
            "No wheel found for clang-tidy on platform win32"
        );
        assert_eq!(
            err.hints(),
            vec![
                "Requested version: 20.1.8".to_string(),
                "Available release: v20.1.8".to_string(),
                "Use --list-platforms to see all available platforms".to_string(),
            ]
        );
    }

    #[test]
    fn test_asset_not_found_hints_without_version() {
        let err = WheelError::AssetNotFound {
            tool: "clang-tidy".into(),
            platform: "win32".into(),
            requested_version: None,
            release_tag: "v20.1.8".into(),
        };
        assert_eq!(err.hints().len(), 2);
    }

    #[test]
    fn test_downcast_from_anyhow() {
        let err = anyhow::Error::from(WheelError::DownloadFailed {
            file: PathBuf::from("out/a.whl"),
        });
        assert!(matches!(
            err.downcast_ref::<WheelError>(),
            Some(WheelError::DownloadFailed { .. })
        ));
    }
}
