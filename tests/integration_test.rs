use assert_cmd::Command;
use assert_cmd::cargo;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::{TempDir, tempdir};

/// A project directory plus a directory holding fake tools.
struct Fixture {
    project: TempDir,
    bin: TempDir,
}

impl Fixture {
    fn new() -> Self {
        Self {
            project: tempdir().unwrap(),
            bin: tempdir().unwrap(),
        }
    }

    fn root(&self) -> &Path {
        self.project.path()
    }

    fn log_path(&self) -> PathBuf {
        self.bin.path().join("pyinstaller.log")
    }

    fn write(&self, rel: &str, contents: &str) {
        let path = self.root().join(rel);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, contents).unwrap();
    }

    /// Install a fake `pyinstaller` that answers `--version` and records any
    /// other invocation, one argument per line.
    #[cfg(unix)]
    fn install_fake_pyinstaller(&self, exit_code: i32) {
        let script = format!(
            "#!/bin/sh\n\
             if [ \"$1\" = \"--version\" ]; then echo 6.11.1; exit 0; fi\n\
             printf '%s\\n' \"$@\" > '{}'\n\
             exit {}\n",
            self.log_path().display(),
            exit_code
        );
        self.install_script("pyinstaller", &script);
        self.install_script("python3", "#!/bin/sh\nexit 1\n");
    }

    #[cfg(unix)]
    fn install_script(&self, name: &str, script: &str) {
        use std::os::unix::fs::PermissionsExt;
        let path = self.bin.path().join(name);
        std::fs::write(&path, script).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    }

    fn recorded_args(&self) -> Vec<String> {
        std::fs::read_to_string(self.log_path())
            .unwrap()
            .lines()
            .map(String::from)
            .collect()
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(cargo::cargo_bin!("xzpack"));
        cmd.env("XZPACK_ROOT", self.root())
            .env("PATH", self.bin.path())
            .env("XZPACK_PYTHON", self.bin.path().join("python3"))
            .env_remove("RUST_LOG");
        cmd
    }
}

#[test]
fn test_help_lists_flags() {
    let mut cmd = Command::new(cargo::cargo_bin!("xzpack"));
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--clean"))
        .stdout(predicate::str::contains("--onefile"))
        .stdout(predicate::str::contains("--spec"));
}

#[test]
fn test_unknown_flag_is_rejected() {
    let mut cmd = Command::new(cargo::cargo_bin!("xzpack"));
    cmd.arg("--windowed").assert().failure();
}

#[test]
fn test_missing_pyinstaller_fails() {
    let fixture = Fixture::new();

    fixture
        .command()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("PyInstaller is not installed"));
}

#[cfg(unix)]
#[test]
fn test_end_to_end_build() {
    let fixture = Fixture::new();
    fixture.install_fake_pyinstaller(0);
    fixture.write(
        "build.json",
        r#"{"name":"Demo","entry":"main.py","pyinstaller":{"onefile":false,"windowed":true,"clean":true,"noconfirm":true}}"#,
    );
    fixture.write("main.py", "print('hello')\n");
    fixture.write("src/app.py", "");

    fixture
        .command()
        .assert()
        .success()
        .stdout(predicate::str::contains("app Demo v1.0.0"))
        .stdout(predicate::str::contains("packaging complete"));

    let args = fixture.recorded_args();
    assert_eq!(&args[..4], &["--name", "Demo", "--onedir", "--windowed"]);
    assert!(!args.iter().any(|a| a == "--icon"));

    let data = format!("{}:src", fixture.root().join("src").display());
    assert!(args.iter().any(|a| *a == data));
    assert_eq!(args.iter().filter(|a| *a == "--add-data").count(), 1);

    assert_eq!(
        args.last().unwrap(),
        &fixture.root().join("main.py").display().to_string()
    );
}

#[cfg(unix)]
#[test]
fn test_onefile_flag() {
    let fixture = Fixture::new();
    fixture.install_fake_pyinstaller(0);

    fixture.command().arg("--onefile").assert().success();

    let args = fixture.recorded_args();
    assert!(args.iter().any(|a| a == "--onefile"));
    assert!(!args.iter().any(|a| a == "--onedir"));
    assert_eq!(&args[..2], &["--name", "小智"]);
}

#[cfg(unix)]
#[test]
fn test_spec_without_spec_file_never_runs_pyinstaller() {
    let fixture = Fixture::new();
    fixture.install_fake_pyinstaller(0);

    fixture
        .command()
        .arg("--spec")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Spec file not found"));

    assert!(!fixture.log_path().exists());
}

#[cfg(unix)]
#[test]
fn test_spec_with_spec_file() {
    let fixture = Fixture::new();
    fixture.install_fake_pyinstaller(0);
    fixture.write("xiaozhi.spec", "# spec\n");

    fixture.command().arg("--spec").assert().success();

    assert_eq!(
        fixture.recorded_args(),
        vec![
            fixture.root().join("xiaozhi.spec").display().to_string(),
            "--clean".to_string(),
            "--noconfirm".to_string(),
        ]
    );
}

#[cfg(unix)]
#[test]
fn test_tool_failure_exits_with_one() {
    let fixture = Fixture::new();
    fixture.install_fake_pyinstaller(3);

    fixture
        .command()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("exited with code 3"));
}

#[cfg(unix)]
#[test]
fn test_clean_removes_previous_output() {
    let fixture = Fixture::new();
    fixture.install_fake_pyinstaller(0);
    fixture.write("build/old/stale.txt", "stale");
    fixture.write("dist/old/stale.txt", "stale");

    fixture
        .command()
        .arg("--clean")
        .assert()
        .success()
        .stdout(predicate::str::contains("removed"));

    assert!(!fixture.root().join("build").exists());
    assert!(!fixture.root().join("dist").exists());
}

#[cfg(unix)]
#[test]
fn test_reports_linux_artifact() {
    let fixture = Fixture::new();
    fixture.install_fake_pyinstaller(0);
    fixture.write("build.json", r#"{"name":"Demo"}"#);
    fixture.write("dist/Demo/Demo", "binary");

    let assert = fixture.command().assert().success();

    if cfg!(target_os = "linux") {
        assert.stdout(predicate::str::contains(
            fixture.root().join("dist/Demo/Demo").display().to_string(),
        ));
    }
}
