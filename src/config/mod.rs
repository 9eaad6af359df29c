//! Build configuration loaded from `build.json`.

mod options;

use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::path::Path;

use crate::platform::PlatformName;
use crate::runtime::Runtime;

pub use options::PackagingOptions;

/// File name of the build configuration inside the project root.
pub const BUILD_CONFIG_FILE: &str = "build.json";

pub const DEFAULT_APP_NAME: &str = "小智";
pub const DEFAULT_VERSION: &str = "1.0.0";
pub const DEFAULT_ICON: &str = "assets/icon.png";
pub const DEFAULT_ENTRY: &str = "main.py";

/// Contents of `build.json`. Every field is optional.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct BuildConfig {
    pub name: Option<String>,
    /// Usually a string, but `1.2` and other scalars are accepted as written.
    pub version: Option<Value>,
    pub icon: Option<String>,
    pub entry: Option<String>,
    pub pyinstaller: Option<PackagingOptions>,
    pub platforms: BTreeMap<String, PlatformOverride>,

    /// Keys this tool does not interpret (description, author, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Per-platform block under `platforms.<name>`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct PlatformOverride {
    pub pyinstaller: Option<PackagingOptions>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl BuildConfig {
    /// Load the configuration from `<root>/build.json`. A missing file yields
    /// the default (empty) configuration.
    #[tracing::instrument(skip(runtime))]
    pub fn load<R: Runtime + ?Sized>(runtime: &R, root: &Path) -> Result<Self> {
        let path = root.join(BUILD_CONFIG_FILE);
        if !runtime.exists(&path) {
            debug!("No {} at {:?}, using defaults", BUILD_CONFIG_FILE, path);
            return Ok(Self::default());
        }

        let content = runtime.read_to_string(&path)?;
        let config: BuildConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        debug!("Loaded build config from {:?}", path);
        Ok(config)
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_APP_NAME)
    }

    pub fn version(&self) -> Cow<'_, str> {
        match &self.version {
            None | Some(Value::Null) => Cow::Borrowed(DEFAULT_VERSION),
            Some(Value::String(version)) => Cow::Borrowed(version),
            Some(other) => Cow::Owned(other.to_string()),
        }
    }

    pub fn icon(&self) -> &str {
        self.icon.as_deref().unwrap_or(DEFAULT_ICON)
    }

    pub fn entry(&self) -> &str {
        self.entry.as_deref().unwrap_or(DEFAULT_ENTRY)
    }

    /// Packaging options for `platform`: the platform block laid over the
    /// base block. The loaded configuration is left untouched.
    pub fn packaging_options(&self, platform: PlatformName) -> PackagingOptions {
        let empty = PackagingOptions::default();
        let base = self.pyinstaller.as_ref().unwrap_or(&empty);
        let overlay = self
            .platforms
            .get(platform.as_str())
            .and_then(|p| p.pyinstaller.as_ref())
            .unwrap_or(&empty);
        base.merged_with(overlay)
    }
}
