//! Child process execution.

use anyhow::{Context, Result};
use log::debug;
use std::process::Command;

use super::RealRuntime;

impl RealRuntime {
    #[tracing::instrument(skip(self))]
    pub(crate) fn command_stderr_impl(&self, program: &str, args: &[String]) -> Result<String> {
        let output = Command::new(program)
            .args(args)
            .output()
            .with_context(|| format!("Failed to run {}", program))?;

        debug!("{} exited with {}", program, output.status);

        Ok(String::from_utf8_lossy(&output.stderr).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use crate::runtime::{RealRuntime, Runtime};

    #[test]
    fn test_command_stderr_missing_program() {
        let runtime = RealRuntime;
        let result = runtime.command_stderr("clang-wheel-no-such-program", &[]);
        assert!(result.is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_command_stderr_ignores_stdout_and_exit_status() {
        let runtime = RealRuntime;
        let stderr = runtime
            .command_stderr(
                "sh",
                &["-c".to_string(), "echo out; echo err 1>&2; exit 3".to_string()],
            )
            .unwrap();

        assert_eq!(stderr.trim(), "err");
    }
}
