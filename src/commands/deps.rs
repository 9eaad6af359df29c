use anyhow::Result;
use log::{debug, warn};

use crate::args::PACKAGING_TOOL;
use crate::error::BuildError;
use crate::runtime::Runtime;

/// Environment variable naming the Python interpreter used for probes.
pub const PYTHON_ENV: &str = "XZPACK_PYTHON";

const PYQT_PROBE: &str = "from PyQt5.QtCore import QT_VERSION_STR; print(QT_VERSION_STR)";

/// Python interpreter to probe: `XZPACK_PYTHON`, else the platform default.
pub fn python_interpreter<R: Runtime + ?Sized>(runtime: &R) -> String {
    match runtime.env_var(PYTHON_ENV) {
        Ok(python) if !python.is_empty() => python,
        _ if cfg!(windows) => "python".to_string(),
        _ => "python3".to_string(),
    }
}

/// Make sure PyInstaller can be run. PyQt5 is only reported on.
#[tracing::instrument(skip(runtime))]
pub async fn check_dependencies<R: Runtime + ?Sized>(runtime: &R) -> Result<()> {
    println!("    checking dependencies");

    let version_args = vec!["--version".to_string()];
    match runtime.command_output(PACKAGING_TOOL, &version_args).await {
        Ok(output) if output.status.success() => {
            println!(" pyinstaller {}", output.stdout.trim());
        }
        Ok(output) => {
            debug!(
                "{} --version exited with {:?}: {}",
                PACKAGING_TOOL,
                output.status.code,
                output.stderr.trim()
            );
            return Err(pyinstaller_missing().into());
        }
        Err(e) => {
            debug!("Failed to run {}: {:#}", PACKAGING_TOOL, e);
            return Err(pyinstaller_missing().into());
        }
    }

    let python = python_interpreter(runtime);
    let probe_args = vec!["-c".to_string(), PYQT_PROBE.to_string()];
    match runtime.command_output(&python, &probe_args).await {
        Ok(output) if output.status.success() => {
            println!("       PyQt5 {}", output.stdout.trim());
        }
        Ok(_) => warn!("PyQt5 is not installed for {}", python),
        Err(e) => warn!("Could not probe PyQt5 with {}: {:#}", python, e),
    }

    Ok(())
}

fn pyinstaller_missing() -> BuildError {
    BuildError::DependencyMissing {
        tool: "PyInstaller".to_string(),
        hint: "pip install pyinstaller".to_string(),
    }
}
