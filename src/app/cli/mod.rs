//! CLI Adapter.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{ArgAction, CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::app::InstallConfig;
use crate::app::api::{self, PortReport};
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "deveco-port")]
#[command(version)]
#[command(
    about = "Port the macOS DevEco Studio release onto an IntelliJ IDEA Community base for Linux",
    long_about = None
)]
struct Cli {
    /// Directory holding the DevEco image, the command-line tools and idea-IC-<build>
    #[arg(short = 'd', long = "dir", value_name = "DIR")]
    dir: Option<PathBuf>,
    /// Source directory (same as --dir)
    #[arg(value_name = "SOURCE", conflicts_with = "dir")]
    source: Option<PathBuf>,
    /// Install the converted IDE under this prefix
    #[arg(short = 'p', long, value_name = "PREFIX")]
    prefix: Option<PathBuf>,
    /// Do not write a desktop entry after a prefix install (also accepted as -dcd)
    #[arg(long, visible_alias = "dcd")]
    disable_create_desktop: bool,
    /// Java agent jar installed for releases before 5.0
    #[arg(long, value_name = "JAR")]
    java_agent: Option<PathBuf>,
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    verbose: u8,
}

/// Single-dash spelling of `--disable-create-desktop`. Without the rewrite
/// clap reads it as `-d cd`.
const SINGLE_DASH_DCD: &str = "-dcd";

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse_from(normalize_args(std::env::args_os()));
    init_logging(cli.verbose);

    let Some(source) = cli.dir.clone().or_else(|| cli.source.clone()) else {
        let _ = Cli::command().print_help();
        println!();
        std::process::exit(1);
    };

    if let Err(e) = run_port(source, &cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn normalize_args(args: impl IntoIterator<Item = OsString>) -> Vec<OsString> {
    let mut options_ended = false;
    args.into_iter()
        .map(|arg| {
            if arg == "--" {
                options_ended = true;
            }
            if !options_ended && arg == SINGLE_DASH_DCD {
                OsString::from("--disable-create-desktop")
            } else {
                arg
            }
        })
        .collect()
}

fn run_port(source: PathBuf, cli: &Cli) -> Result<(), AppError> {
    let mut config = InstallConfig::new(source)?
        .with_prefix(cli.prefix.clone())?
        .with_desktop_entry(!cli.disable_create_desktop)
        .with_environment()?;
    if let Some(jar) = &cli.java_agent {
        config = config.with_java_agent_jar(jar.clone());
    }
    tracing::debug!("Configuration: {:?}", config);

    let report = api::install(&config)?;
    print_report(&report);
    Ok(())
}

fn print_report(report: &PortReport) {
    if !report.merged {
        println!("✅ DevEco Studio bundle was already merged, launcher refreshed");
    }
    match &report.install_path {
        Some(install_path) => {
            println!(
                "✅ Installed DevEco Studio {} to {}",
                report.studio_version,
                install_path.display()
            );
            if let Some(entry) = &report.desktop_entry {
                println!("✅ Created desktop entry {}", entry.display());
            }
            println!("  Launch with {}/bin/idea.sh", install_path.display());
        }
        None => {
            println!(
                "✅ Converted {} into DevEco Studio {}",
                report.ide_dir.display(),
                report.studio_version
            );
            println!("  Launch with {}/bin/idea.sh", report.ide_dir.display());
        }
    }
}

/// `RUST_LOG` wins; otherwise warnings only, raised by each `-v`.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}
