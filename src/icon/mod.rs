//! Icon selection and conversion.
//!
//! PyInstaller wants an `.ico` on Windows and an `.icns` on macOS. The
//! configured icon (usually a PNG) is used as the fallback everywhere, and on
//! Windows it is converted to a multi-resolution ICO next to the source when
//! no ICO exists yet.

mod convert;

use log::{debug, warn};
use std::path::{Path, PathBuf};

use crate::config::BuildConfig;
use crate::platform::{Platform, PlatformName};
use crate::runtime::Runtime;

pub use convert::ICO_SIZES;

/// Pick the icon to hand to PyInstaller, converting it first on Windows when
/// needed. Conversion problems are logged and never abort the build.
#[tracing::instrument(skip(runtime, config))]
pub fn resolve_icon<R: Runtime + ?Sized>(
    runtime: &R,
    root: &Path,
    config: &BuildConfig,
    platform: &Platform,
) -> Option<PathBuf> {
    let icon_path = root.join(config.icon());
    let existing = |path: &Path| runtime.exists(path).then(|| path.to_path_buf());

    match platform.name {
        PlatformName::Windows => {
            let ico_path = icon_path.with_extension("ico");
            if !runtime.exists(&ico_path) && runtime.exists(&icon_path) {
                println!("  converting {} to ICO", icon_path.display());
                match convert::write_ico(runtime, &icon_path, &ico_path) {
                    Ok(()) => println!("       saved {}", ico_path.display()),
                    Err(e) => {
                        warn!("Icon conversion failed: {:#}", e);
                        return existing(&icon_path);
                    }
                }
            }
            existing(&ico_path).or_else(|| existing(&icon_path))
        }
        PlatformName::MacOs => {
            let icns_path = icon_path.with_extension("icns");
            existing(&icns_path).or_else(|| {
                debug!("No ICNS icon at {:?}", icns_path);
                existing(&icon_path)
            })
        }
        PlatformName::Linux => existing(&icon_path),
    }
}
