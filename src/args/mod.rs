//! PyInstaller command line assembly.

pub mod catalog;

use log::{debug, warn};
use std::fmt;
use std::path::Path;

use crate::config::{BuildConfig, PackagingOptions};
use crate::icon::resolve_icon;
use crate::paths::{build_dir, dist_dir};
use crate::platform::Platform;
use crate::runtime::Runtime;

use catalog::{DEFAULT_DATA, EXCLUDED_MODULES, HIDDEN_IMPORTS, WINDOWS_HIDDEN_IMPORTS};

/// Executable name of the packaging tool.
pub const PACKAGING_TOOL: &str = "pyinstaller";

/// A full packaging command: the program followed by its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentList(Vec<String>);

impl ArgumentList {
    pub fn new(program: &str) -> Self {
        Self(vec![program.to_string()])
    }

    /// `pyinstaller <spec> --clean --noconfirm`
    pub fn for_spec_file(spec_file: &Path) -> Self {
        let mut list = Self::new(PACKAGING_TOOL);
        list.push(spec_file.to_string_lossy());
        list.push("--clean");
        list.push("--noconfirm");
        list
    }

    pub fn push(&mut self, arg: impl Into<String>) {
        self.0.push(arg.into());
    }

    pub fn push_flag(&mut self, flag: &str, value: impl Into<String>) {
        self.0.push(flag.to_string());
        self.0.push(value.into());
    }

    pub fn program(&self) -> &str {
        &self.0[0]
    }

    /// Arguments without the program name.
    pub fn args(&self) -> &[String] {
        &self.0[1..]
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Values following every occurrence of `flag`.
    pub fn values_of<'a>(&'a self, flag: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.0
            .windows(2)
            .filter(move |w| w[0] == flag)
            .map(|w| w[1].as_str())
    }

    pub fn contains(&self, arg: &str) -> bool {
        self.0.iter().any(|a| a == arg)
    }

    /// The first `n` elements joined by spaces, for progress output.
    pub fn preview(&self, n: usize) -> String {
        let shown = self.0.iter().take(n).cloned().collect::<Vec<_>>().join(" ");
        if self.0.len() > n {
            format!("{} ...", shown)
        } else {
            shown
        }
    }
}

impl fmt::Display for ArgumentList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}

/// Data entries to consider: configured ones first, then every default pair
/// not already listed verbatim.
pub fn data_entries(options: &PackagingOptions) -> Vec<String> {
    let mut entries = options.add_data().to_vec();
    for default in DEFAULT_DATA {
        if !entries.iter().any(|e| e == default) {
            entries.push(default.to_string());
        }
    }
    entries
}

/// Hidden imports for `platform` in emission order.
pub fn hidden_imports(platform: &Platform) -> impl Iterator<Item = &'static str> {
    let extra: &[&str] = if platform.is_windows() {
        WINDOWS_HIDDEN_IMPORTS
    } else {
        &[]
    };
    HIDDEN_IMPORTS.iter().chain(extra).copied()
}

/// Build the PyInstaller invocation for `config` on `platform`.
///
/// Never fails: missing icons, data directories and options only drop the
/// corresponding flags. The entry script is always the last element.
#[tracing::instrument(skip(runtime, config))]
pub fn assemble<R: Runtime + ?Sized>(
    runtime: &R,
    root: &Path,
    config: &BuildConfig,
    platform: &Platform,
    onefile: bool,
) -> ArgumentList {
    let options = config.packaging_options(platform.name);
    debug!("Packaging options for {}: {:?}", platform.name, options);

    let mut args = ArgumentList::new(PACKAGING_TOOL);

    args.push_flag("--name", config.name());

    if let Some(icon) = resolve_icon(runtime, root, config, platform) {
        args.push_flag("--icon", icon.to_string_lossy());
    }

    if onefile || options.onefile() {
        args.push("--onefile");
    } else {
        args.push("--onedir");
    }

    if options.windowed() {
        args.push("--windowed");
    }

    let separator = platform.name.data_separator();
    for entry in data_entries(&options) {
        let Some((source, destination)) = entry.split_once(':') else {
            warn!("Ignoring malformed add_data entry {:?} (expected source:destination)", entry);
            continue;
        };
        let source_path = root.join(source);
        if runtime.exists(&source_path) {
            args.push_flag(
                "--add-data",
                format!("{}{}{}", source_path.display(), separator, destination),
            );
        } else {
            debug!("Skipping missing data source {:?}", source_path);
        }
    }

    for module in hidden_imports(platform) {
        args.push_flag("--hidden-import", module);
    }

    for module in EXCLUDED_MODULES {
        args.push_flag("--exclude-module", *module);
    }

    if options.clean() {
        args.push("--clean");
    }
    if options.noconfirm() {
        args.push("--noconfirm");
    }

    args.push_flag("--paths", root.to_string_lossy());
    args.push_flag("--workpath", build_dir(root).to_string_lossy());
    args.push_flag("--distpath", dist_dir(root).to_string_lossy());
    args.push_flag("--specpath", root.to_string_lossy());

    args.push(root.join(config.entry()).to_string_lossy());

    args
}
