//! hcalist CLI - List local InfiniBand host channel adapters
//!
//! Prints the name of every HCA the management subsystem knows about, one
//! per line. Run without arguments it reads `/sys` and prints plain names.

mod commands;
mod logging;

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use hcalist_core::{Backend, Config, ReportFormat, MAX_DEVICES};

#[derive(Parser)]
#[command(name = "hcalist")]
#[command(author, version, about = "List local InfiniBand host channel adapters")]
struct Cli {
    /// Management subsystem backend
    #[arg(long, value_enum, default_value_t = BackendArg::Sysfs)]
    backend: BackendArg,

    /// Where sysfs is mounted (sysfs backend only)
    #[arg(long, value_name = "PATH", default_value = "/sys")]
    sysfs_root: PathBuf,

    /// Maximum number of adapters to list
    #[arg(long, default_value_t = MAX_DEVICES)]
    max_devices: usize,

    /// Output in JSON format
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum BackendArg {
    /// Read the sysfs tree directly
    Sysfs,
    /// Use the native libibumad library
    Umad,
}

impl From<BackendArg> for Backend {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Sysfs => Backend::Sysfs,
            BackendArg::Umad => Backend::Umad,
        }
    }
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            backend: self.backend.into(),
            sysfs_root: self.sysfs_root.clone(),
            capacity: self.max_devices,
        }
    }

    fn format(&self) -> ReportFormat {
        if self.json {
            ReportFormat::Json
        } else {
            ReportFormat::Lines
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    commands::list::run(cli.config(), cli.format())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_arguments_gives_defaults() {
        let cli = Cli::parse_from(["hcalist"]);
        assert_eq!(cli.config(), Config::default());
        assert_eq!(cli.format(), ReportFormat::Lines);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_flags_map_to_config() {
        let cli = Cli::parse_from([
            "hcalist",
            "--backend",
            "umad",
            "--sysfs-root",
            "/tmp/ibsim",
            "--max-devices",
            "4",
            "--json",
            "-vv",
        ]);
        let config = cli.config();
        assert_eq!(config.backend, Backend::Umad);
        assert_eq!(config.sysfs_root, PathBuf::from("/tmp/ibsim"));
        assert_eq!(config.capacity, 4);
        assert_eq!(cli.format(), ReportFormat::Json);
        assert_eq!(cli.verbose, 2);
    }
}
