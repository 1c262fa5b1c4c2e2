//! Runtime abstraction for system operations.
//!
//! Filesystem writes and child processes go through the [`Runtime`] trait so
//! the download pipeline and libc detection can be exercised with mocks.
//!
//! # Structure
//!
//! - `fs` - File system operations (directories, file creation)
//! - `process` - Child process execution

mod fs;
mod process;

use anyhow::Result;
use std::path::Path;

#[cfg_attr(test, mockall::automock)]
pub trait Runtime: Send + Sync {
    // File System
    fn create_dir_all(&self, path: &Path) -> Result<()>;
    fn create_file(&self, path: &Path) -> Result<Box<dyn std::io::Write + Send>>;
    fn exists(&self, path: &Path) -> bool;

    // Processes
    /// Run `program` with `args` to completion and return its stderr.
    /// A non-zero exit status is not an error; failing to spawn is.
    fn command_stderr(&self, program: &str, args: &[String]) -> Result<String>;
}

pub struct RealRuntime;

impl Runtime for RealRuntime {
    fn create_dir_all(&self, path: &Path) -> Result<()> {
        self.create_dir_all_impl(path)
    }

    fn create_file(&self, path: &Path) -> Result<Box<dyn std::io::Write + Send>> {
        self.create_file_impl(path)
    }

    fn exists(&self, path: &Path) -> bool {
        self.exists_impl(path)
    }

    fn command_stderr(&self, program: &str, args: &[String]) -> Result<String> {
        self.command_stderr_impl(program, args)
    }
}
