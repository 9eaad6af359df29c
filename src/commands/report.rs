use std::path::{Path, PathBuf};

use crate::config::BuildConfig;
use crate::paths::dist_dir;
use crate::platform::{Platform, PlatformName};
use crate::runtime::Runtime;

pub(crate) const RULE_WIDTH: usize = 50;

pub(crate) fn print_banner(title: &str) {
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("    {}", title);
    println!("{}", "=".repeat(RULE_WIDTH));
}

/// Where PyInstaller leaves the runnable artifact for `name`.
pub fn artifact_path(platform: &Platform, output_dir: &Path, name: &str) -> PathBuf {
    match platform.name {
        PlatformName::Windows => output_dir.join(format!("{}.exe", name)),
        PlatformName::MacOs => output_dir.join(format!("{}.app", name)),
        PlatformName::Linux => output_dir.join(name),
    }
}

/// Print the success banner plus the output directory and artifact, when
/// they exist.
pub fn report_success<R: Runtime + ?Sized>(
    runtime: &R,
    root: &Path,
    config: &BuildConfig,
    platform: &Platform,
) {
    println!();
    print_banner("packaging complete");

    let output_dir = dist_dir(root).join(config.name());
    if !runtime.is_dir(&output_dir) {
        return;
    }
    println!("\n      output {}", output_dir.display());

    let artifact = artifact_path(platform, &output_dir, config.name());
    if runtime.exists(&artifact) {
        println!("  executable {}", artifact.display());
    }
}
