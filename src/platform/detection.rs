use std::fmt;

use crate::runtime::Runtime;

/// Normalized operating system family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlatformName {
    Windows,
    MacOs,
    Linux,
}

impl PlatformName {
    /// Key used for this platform in the `platforms` block of `build.json`.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlatformName::Windows => "windows",
            PlatformName::MacOs => "macos",
            PlatformName::Linux => "linux",
        }
    }

    /// Separator between source and destination in `--add-data` values.
    pub fn data_separator(&self) -> char {
        match self {
            PlatformName::Windows => ';',
            _ => ':',
        }
    }
}

impl fmt::Display for PlatformName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Host platform as seen by the packager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Platform {
    pub name: PlatformName,
    /// `x64`, `arm64`, or the lower-cased machine identifier when unknown.
    pub arch: String,
}

impl Platform {
    /// Detect the platform of the host the runtime reports.
    #[tracing::instrument(skip(runtime))]
    pub fn detect<R: Runtime + ?Sized>(runtime: &R) -> Self {
        Self::from_host(&runtime.host_os(), &runtime.host_machine())
    }

    /// Map raw OS and machine identifiers to a platform. Never fails:
    /// unknown systems count as linux and unknown machines pass through.
    pub fn from_host(os: &str, machine: &str) -> Self {
        let name = match os.to_lowercase().as_str() {
            // "darwin" from uname, "macos" from std::env::consts::OS
            "darwin" | "macos" => PlatformName::MacOs,
            "windows" => PlatformName::Windows,
            _ => PlatformName::Linux,
        };

        let machine = machine.to_lowercase();
        let arch = match machine.as_str() {
            "x86_64" | "amd64" => "x64".to_string(),
            "arm64" | "aarch64" => "arm64".to_string(),
            _ => machine,
        };

        Self { name, arch }
    }

    pub fn is_windows(&self) -> bool {
        self.name == PlatformName::Windows
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.arch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::MockRuntime;

    #[test]
    fn test_from_host_os_mapping() {
        assert_eq!(Platform::from_host("darwin", "arm64").name, PlatformName::MacOs);
        assert_eq!(Platform::from_host("Darwin", "arm64").name, PlatformName::MacOs);
        assert_eq!(Platform::from_host("macos", "aarch64").name, PlatformName::MacOs);
        assert_eq!(Platform::from_host("Windows", "AMD64").name, PlatformName::Windows);
        assert_eq!(Platform::from_host("linux", "x86_64").name, PlatformName::Linux);
        assert_eq!(Platform::from_host("freebsd", "x86_64").name, PlatformName::Linux);
        assert_eq!(Platform::from_host("", "x86_64").name, PlatformName::Linux);
    }

    #[test]
    fn test_from_host_arch_mapping() {
        for machine in ["x86_64", "X86_64", "amd64", "AMD64"] {
            assert_eq!(Platform::from_host("linux", machine).arch, "x64");
        }
        for machine in ["arm64", "ARM64", "aarch64", "AArch64"] {
            assert_eq!(Platform::from_host("linux", machine).arch, "arm64");
        }
    }

    #[test]
    fn test_from_host_unknown_arch_passes_through_lowercased() {
        assert_eq!(Platform::from_host("linux", "riscv64").arch, "riscv64");
        assert_eq!(Platform::from_host("linux", "i686").arch, "i686");
        assert_eq!(Platform::from_host("Windows", "ARMv7L").arch, "armv7l");
    }

    #[test]
    fn test_detect_uses_runtime_host_identifiers() {
        let mut runtime = MockRuntime::new();
        runtime.expect_host_os().returning(|| "windows".to_string());
        runtime.expect_host_machine().returning(|| "x86_64".to_string());

        let platform = Platform::detect(&runtime);

        assert_eq!(
            platform,
            Platform {
                name: PlatformName::Windows,
                arch: "x64".into(),
            }
        );
        assert!(platform.is_windows());
    }

    #[test]
    fn test_data_separator_and_display() {
        assert_eq!(PlatformName::Windows.data_separator(), ';');
        assert_eq!(PlatformName::MacOs.data_separator(), ':');
        assert_eq!(PlatformName::Linux.data_separator(), ':');

        let platform = Platform::from_host("linux", "x86_64");
        assert_eq!(platform.to_string(), "linux (x64)");
    }
}
