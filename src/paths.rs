use anyhow::Result;
use log::debug;
use std::path::{Path, PathBuf};

use crate::runtime::Runtime;

/// Environment variable overriding the project root.
pub const ROOT_ENV: &str = "XZPACK_ROOT";

pub const BUILD_DIR: &str = "build";
pub const DIST_DIR: &str = "dist";
pub const SPEC_FILE: &str = "xiaozhi.spec";

/// Resolve the project root: `XZPACK_ROOT` if set, else the current
/// directory. Relative values are taken from the current directory.
#[tracing::instrument(skip(runtime))]
pub fn project_root<R: Runtime + ?Sized>(runtime: &R) -> Result<PathBuf> {
    let root = match runtime.env_var(ROOT_ENV) {
        Ok(value) if !value.is_empty() => {
            let path = PathBuf::from(value);
            if path.is_absolute() {
                path
            } else {
                runtime.current_dir()?.join(path)
            }
        }
        _ => runtime.current_dir()?,
    };
    debug!("Using project root {:?}", root);
    Ok(root)
}

pub fn build_dir(root: &Path) -> PathBuf {
    root.join(BUILD_DIR)
}

pub fn dist_dir(root: &Path) -> PathBuf {
    root.join(DIST_DIR)
}

pub fn spec_file(root: &Path) -> PathBuf {
    root.join(SPEC_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::MockRuntime;
    use crate::test_utils::{test_cwd, test_root};
    use mockall::predicate::eq;

    #[test]
    fn test_project_root_from_env() {
        let mut runtime = MockRuntime::new();
        let root = test_root();
        runtime
            .expect_env_var()
            .with(eq(ROOT_ENV))
            .returning(move |_| Ok(root.to_string_lossy().into_owned()));

        assert_eq!(project_root(&runtime).unwrap(), test_root());
    }

    #[test]
    fn test_project_root_relative_env_joins_current_dir() {
        let mut runtime = MockRuntime::new();
        runtime
            .expect_env_var()
            .with(eq(ROOT_ENV))
            .returning(|_| Ok("client".to_string()));
        runtime.expect_current_dir().returning(|| Ok(test_cwd()));

        assert_eq!(project_root(&runtime).unwrap(), test_cwd().join("client"));
    }

    #[test]
    fn test_project_root_defaults_to_current_dir() {
        let mut runtime = MockRuntime::new();
        runtime
            .expect_env_var()
            .with(eq(ROOT_ENV))
            .returning(|_| Err(std::env::VarError::NotPresent));
        runtime.expect_current_dir().returning(|| Ok(test_cwd()));

        assert_eq!(project_root(&runtime).unwrap(), test_cwd());
    }

    #[test]
    fn test_empty_env_is_ignored() {
        let mut runtime = MockRuntime::new();
        runtime
            .expect_env_var()
            .with(eq(ROOT_ENV))
            .returning(|_| Ok(String::new()));
        runtime.expect_current_dir().returning(|| Ok(test_cwd()));

        assert_eq!(project_root(&runtime).unwrap(), test_cwd());
    }

    #[test]
    fn test_layout() {
        let root = test_root();
        assert_eq!(build_dir(&root), root.join("build"));
        assert_eq!(dist_dir(&root), root.join("dist"));
        assert_eq!(spec_file(&root), root.join("xiaozhi.spec"));
    }
}
