use anyhow::Result;
use log::{debug, info};
use std::path::{Path, PathBuf};

use crate::{
    args::{ArgumentList, assemble},
    config::BuildConfig,
    error::BuildError,
    paths::{project_root, spec_file},
    platform::Platform,
    runtime::Runtime,
};

mod clean;
mod deps;
mod report;

pub use clean::clean_build;
pub use deps::{PYTHON_ENV, check_dependencies, python_interpreter};
pub use report::{artifact_path, report_success};

use report::{RULE_WIDTH, print_banner};

/// Options taken from the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildOptions {
    /// Remove `build/` and `dist/` first.
    pub clean: bool,
    /// Force single-file output.
    pub onefile: bool,
    /// Build from `xiaozhi.spec` instead of assembled flags.
    pub spec: bool,
}

/// Package the project: load `build.json`, check the toolchain, optionally
/// clean, run PyInstaller and report where the output landed.
#[tracing::instrument(skip(runtime))]
pub async fn build<R: Runtime>(runtime: R, options: BuildOptions) -> Result<()> {
    print_banner("Xiaozhi client packaging");

    let root = project_root(&runtime)?;
    let platform = Platform::detect(&runtime);
    println!("\n    platform {}", platform);

    let config = BuildConfig::load(&runtime, &root)?;
    println!("         app {} v{}", config.name(), config.version());

    // Checked before anything runs so a missing spec never touches the toolchain.
    let spec = if options.spec {
        Some(locate_spec_file(&runtime, &root)?)
    } else {
        None
    };

    check_dependencies(&runtime).await?;

    if options.clean {
        clean_build(&runtime, &root)?;
    }

    let args = match spec {
        Some(spec) => ArgumentList::for_spec_file(&spec),
        None => assemble(&runtime, &root, &config, &platform, options.onefile),
    };

    run_build(&runtime, &root, &args).await?;
    report_success(&runtime, &root, &config, &platform);
    Ok(())
}

/// Path of `xiaozhi.spec`, or [`BuildError::SpecFileMissing`].
#[tracing::instrument(skip(runtime))]
pub fn locate_spec_file<R: Runtime + ?Sized>(runtime: &R, root: &Path) -> Result<PathBuf> {
    let path = spec_file(root);
    if !runtime.exists(&path) {
        return Err(BuildError::SpecFileMissing(path).into());
    }
    debug!("Using spec file {:?}", path);
    Ok(path)
}

/// Run the packaging command in `root` and wait for it to finish.
#[tracing::instrument(skip(runtime, args))]
pub async fn run_build<R: Runtime + ?Sized>(
    runtime: &R,
    root: &Path,
    args: &ArgumentList,
) -> Result<()> {
    println!("\n     packing {}", args.preview(5));
    println!("{}", "-".repeat(RULE_WIDTH));
    info!("Running {}", args);

    let status = runtime.run_command(args.program(), args.args(), root).await?;
    if !status.success() {
        return Err(BuildError::BuildFailed { code: status.code }.into());
    }
    Ok(())
}
