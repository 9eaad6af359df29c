//! Environment and host information.

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

use super::RealRuntime;

impl RealRuntime {
    #[tracing::instrument(skip(self))]
    pub(crate) fn env_var_impl(&self, key: &str) -> Result<String, env::VarError> {
        env::var(key)
    }

    #[tracing::instrument(skip(self))]
    pub(crate) fn current_dir_impl(&self) -> Result<PathBuf> {
        env::current_dir().context("Failed to get current directory")
    }

    pub(crate) fn host_os_impl(&self) -> String {
        env::consts::OS.to_string()
    }

    pub(crate) fn host_machine_impl(&self) -> String {
        env::consts::ARCH.to_string()
    }
}
