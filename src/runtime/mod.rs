//! Runtime abstraction for system operations.
//!
//! This module provides a trait-based abstraction over system operations,
//! enabling dependency injection and testability.
//!
//! # Structure
//!
//! - `env` - Environment variables and host introspection
//! - `fs` - File system operations (read, write, directory)
//! - `process` - Child process invocation

mod env;
mod fs;
mod process;

use anyhow::Result;
use async_trait::async_trait;
use std::env as std_env;
use std::path::{Path, PathBuf};

pub use process::{CommandOutput, CommandStatus};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Runtime: Send + Sync {
    // Environment
    fn env_var(&self, key: &str) -> Result<String, std_env::VarError>;
    fn current_dir(&self) -> Result<PathBuf>;

    /// Operating system identifier of the host (e.g. `linux`, `macos`, `windows`).
    fn host_os(&self) -> String;

    /// Machine identifier of the host (e.g. `x86_64`, `aarch64`).
    fn host_machine(&self) -> String;

    // File System
    fn read(&self, path: &Path) -> Result<Vec<u8>>;
    fn read_to_string(&self, path: &Path) -> Result<String>;
    fn write(&self, path: &Path, contents: &[u8]) -> Result<()>;
    fn exists(&self, path: &Path) -> bool;
    fn is_dir(&self, path: &Path) -> bool;
    fn remove_dir_all(&self, path: &Path) -> Result<()>;

    // Processes
    /// Run a program with inherited stdio and wait for it to exit.
    async fn run_command(&self, program: &str, args: &[String], cwd: &Path)
    -> Result<CommandStatus>;

    /// Run a program and capture its output.
    async fn command_output(&self, program: &str, args: &[String]) -> Result<CommandOutput>;
}

pub struct RealRuntime;

#[async_trait]
impl Runtime for RealRuntime {
    fn env_var(&self, key: &str) -> Result<String, std_env::VarError> {
        self.env_var_impl(key)
    }

    fn current_dir(&self) -> Result<PathBuf> {
        self.current_dir_impl()
    }

    fn host_os(&self) -> String {
        self.host_os_impl()
    }

    fn host_machine(&self) -> String {
        self.host_machine_impl()
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        self.read_impl(path)
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        self.read_to_string_impl(path)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> Result<()> {
        self.write_impl(path, contents)
    }

    fn exists(&self, path: &Path) -> bool {
        self.exists_impl(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.is_dir_impl(path)
    }

    fn remove_dir_all(&self, path: &Path) -> Result<()> {
        self.remove_dir_all_impl(path)
    }

    async fn run_command(
        &self,
        program: &str,
        args: &[String],
        cwd: &Path,
    ) -> Result<CommandStatus> {
        self.run_command_impl(program, args, cwd).await
    }

    async fn command_output(&self, program: &str, args: &[String]) -> Result<CommandOutput> {
        self.command_output_impl(program, args).await
    }
}
