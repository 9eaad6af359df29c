use anyhow::Result;
use std::path::Path;

use crate::paths::{build_dir, dist_dir};
use crate::runtime::Runtime;

/// Delete `build/` and `dist/` under `root`. Not transactional: a failure
/// part way leaves whatever was already removed gone.
#[tracing::instrument(skip(runtime))]
pub fn clean_build<R: Runtime + ?Sized>(runtime: &R, root: &Path) -> Result<()> {
    println!("    cleaning build directories");
    for dir in [build_dir(root), dist_dir(root)] {
        if runtime.exists(&dir) {
            runtime.remove_dir_all(&dir)?;
            println!("     removed {}", dir.display());
        }
    }
    Ok(())
}
