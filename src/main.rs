use anyhow::Result;
use clap::Parser;
use xzpack::commands::{BuildOptions, build};

/// xzpack - package the Xiaozhi desktop client with PyInstaller
///
/// Reads build.json from the project root (the current directory, or
/// XZPACK_ROOT when set), prepares the application icon and runs PyInstaller
/// with flags suited to the host platform.
///
/// Examples:
///   xzpack              # Detect the platform and package
///   xzpack --clean      # Remove build/ and dist/ first
///   xzpack --onefile    # Single-file bundle
#[derive(Parser, Debug)]
#[command(author, version = env!("XZPACK_VERSION"), about)]
struct Cli {
    /// Remove build/ and dist/ before packaging
    #[arg(long)]
    clean: bool,

    /// Package into a single executable
    #[arg(long)]
    onefile: bool,

    /// Build from xiaozhi.spec instead of generated flags
    #[arg(long)]
    spec: bool,
}

impl From<Cli> for BuildOptions {
    fn from(cli: Cli) -> Self {
        BuildOptions {
            clean: cli.clean,
            onefile: cli.onefile,
            spec: cli.spec,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let runtime = xzpack::runtime::RealRuntime;

    build(runtime, cli.into()).await
}
