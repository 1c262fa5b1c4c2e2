use clang_wheel::{
    commands::{FetchOptions, fetch},
    error::WheelError,
    github::{DEFAULT_REPO, GitHubRepo},
    runtime::RealRuntime,
    tool::Tool,
};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

/// clang-wheel - download clang-format or clang-tidy wheels
///
/// Detects the current platform and downloads the matching wheel from the
/// GitHub releases of cpp-linter/clang-tools-wheel.
///
/// Examples:
///   clang-wheel clang-format                     # Download latest clang-format
///   clang-wheel clang-tidy                       # Download latest clang-tidy
///   clang-wheel clang-format --version 20.1.8    # Download specific version
///   clang-wheel clang-format --output ./wheels   # Download to specific directory
#[derive(Parser, Debug)]
#[command(verbatim_doc_comment)]
struct Cli {
    /// Tool to download
    #[arg(value_enum)]
    tool: Tool,

    /// Specific version to download (default: latest)
    #[arg(long, short = 'v', value_name = "VERSION")]
    version: Option<String>,

    /// Output directory
    #[arg(long, short = 'o', value_name = "DIR", default_value = ".")]
    output: PathBuf,

    /// Override platform detection (advanced usage)
    #[arg(long, value_name = "TAG")]
    platform: Option<String>,

    /// List all available platforms for the release instead of downloading
    #[arg(long)]
    list_platforms: bool,

    /// Repository publishing the wheels
    #[arg(long, value_name = "OWNER/REPO", env = "CLANG_WHEEL_REPO", default_value = DEFAULT_REPO)]
    repo: GitHubRepo,

    /// GitHub API URL (defaults to https://api.github.com)
    #[arg(long = "api-url", value_name = "URL", env = "CLANG_WHEEL_API_URL")]
    api_url: Option<String>,
}

impl Cli {
    fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            tool: self.tool,
            version: self.version.clone(),
            output: self.output.clone(),
            platform: self.platform.clone(),
            list_platforms: self.list_platforms,
            repo: self.repo.clone(),
        }
    }
}

/// Lines printed to stderr for a failed run.
///
/// A failed download has already been reported by the downloader, and a
/// missing wheel is reported without the `Error:` prefix.
fn error_report(e: &anyhow::Error) -> Vec<String> {
    match e.downcast_ref::<WheelError>() {
        Some(WheelError::DownloadFailed { .. }) => Vec::new(),
        Some(wheel_error @ WheelError::AssetNotFound { .. }) => {
            let mut lines = vec![wheel_error.to_string()];
            lines.extend(wheel_error.hints());
            lines
        }
        Some(wheel_error) => {
            let mut lines = vec![format!("Error: {}", wheel_error)];
            lines.extend(wheel_error.hints());
            lines
        }
        None => vec![format!("Error: {:#}", e)],
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match fetch(RealRuntime, cli.fetch_options(), cli.api_url).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            for line in error_report(&e) {
                eprintln!("{}", line);
            }
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["clang-wheel", "clang-format"]).unwrap();
        assert_eq!(cli.tool, Tool::ClangFormat);
        assert_eq!(cli.version, None);
        assert_eq!(cli.output, PathBuf::from("."));
        assert_eq!(cli.platform, None);
        assert!(!cli.list_platforms);
        assert_eq!(cli.repo, GitHubRepo::default());
    }

    #[test]
    fn test_cli_all_options() {
        let cli = Cli::try_parse_from([
            "clang-wheel",
            "clang-tidy",
            "-v",
            "20.1.8",
            "-o",
            "/tmp/wheels",
            "--platform",
            "win_amd64",
            "--list-platforms",
            "--repo",
            "someone/fork",
            "--api-url",
            "http://localhost:8080",
        ])
        .unwrap();

        assert_eq!(cli.tool, Tool::ClangTidy);
        assert_eq!(cli.version.as_deref(), Some("20.1.8"));
        assert_eq!(cli.output, PathBuf::from("/tmp/wheels"));
        assert_eq!(cli.platform.as_deref(), Some("win_amd64"));
        assert!(cli.list_platforms);
        assert_eq!(cli.repo.to_string(), "someone/fork");
        assert_eq!(cli.api_url.as_deref(), Some("http://localhost:8080"));
    }

    #[test]
    fn test_cli_long_version_flag() {
        let cli = Cli::try_parse_from(["clang-wheel", "clang-format", "--version", "19.1.0"])
            .unwrap();
        assert_eq!(cli.version.as_deref(), Some("19.1.0"));
    }

    #[test]
    fn test_cli_rejects_unknown_tool() {
        assert!(Cli::try_parse_from(["clang-wheel", "clangd"]).is_err());
    }

    #[test]
    fn test_cli_rejects_invalid_repo() {
        assert!(Cli::try_parse_from(["clang-wheel", "clang-format", "--repo", "nope"]).is_err());
    }

    #[test]
    fn test_error_report_download_failure_is_silent() {
        let e = anyhow::Error::from(WheelError::DownloadFailed {
            file: PathBuf::from("out/a.whl"),
        });
        assert!(error_report(&e).is_empty());
    }

    #[test]
    fn test_error_report_asset_not_found_is_unprefixed() {
        let e = anyhow::Error::from(WheelError::AssetNotFound {
            tool: "clang-format".into(),
            platform: "win_arm64".into(),
            requested_version: None,
            release_tag: "v20.1.8".into(),
        });
        assert_eq!(
            error_report(&e),
            vec![
                "No wheel found for clang-format on platform win_arm64",
                "Available release: v20.1.8",
                "Use --list-platforms to see all available platforms",
            ]
        );
    }

    #[test]
    fn test_error_report_prefixes_other_failures() {
        let e = anyhow::Error::from(WheelError::UnsupportedPlatform {
            os: "plan9".into(),
            arch: "mips".into(),
        });
        let lines = error_report(&e);
        assert_eq!(lines[0], "Error: Unsupported platform: plan9 mips");
        assert!(lines[1].starts_with("Use --platform"));

        let e = anyhow::anyhow!("connection refused");
        assert_eq!(error_report(&e), vec!["Error: connection refused"]);
    }

    #[test]
    fn test_cli_requires_tool() {
        assert!(Cli::try_parse_from(["clang-wheel"]).is_err());
    }
}
