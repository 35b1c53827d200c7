use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::logging::LogArgs;

#[derive(Debug, Parser)]
#[command(
    name = "procread",
    about = "Inspect process and system pseudo-files of the proc filesystem"
)]
pub struct Cli {
    /// Root of the process-information filesystem (default: /proc)
    #[arg(long = "proc-root", global = true)]
    pub proc_root: Option<PathBuf>,

    /// Configuration file path (default: /etc/procread.toml)
    #[arg(long = "config", global = true)]
    pub config_file: Option<PathBuf>,

    #[command(flatten)]
    pub log: LogArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the numeric process directories
    List,
    /// Print the status and command line of one process
    Info(InfoArgs),
    /// Print the head of the CPU and memory information files
    System(SystemArgs),
    /// Read one file with system calls and then with buffered I/O
    Compare(CompareArgs),
    /// Print a file using unbuffered read system calls
    Raw(PathArgs),
    /// Print a file using buffered line reads
    Buffered(PathArgs),
}

#[derive(Debug, Args)]
pub struct InfoArgs {
    /// Process identifier (e.g. 1, or "self")
    pub pid: String,
}

#[derive(Debug, Args)]
pub struct SystemArgs {
    /// Lines to show from each file (default: 10)
    #[arg(short = 'n', long)]
    pub lines: Option<usize>,
}

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// File to read (default: <proc-root>/version)
    #[arg(short = 'p', long)]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct PathArgs {
    /// File to print
    pub path: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::LogLevel;

    #[test]
    fn test_parse_info() {
        let cli = Cli::try_parse_from(["procread", "info", "1234"]).unwrap();
        match cli.command {
            Command::Info(args) => assert_eq!(args.pid, "1234"),
            other => panic!("unexpected command: {:?}", other),
        }
        assert!(cli.proc_root.is_none());
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli = Cli::try_parse_from([
            "procread",
            "system",
            "--lines",
            "3",
            "--proc-root",
            "/host/proc",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(cli.proc_root, Some(PathBuf::from("/host/proc")));
        assert_eq!(cli.log.log_level, Some(LogLevel::Debug));
        match cli.command {
            Command::System(args) => assert_eq!(args.lines, Some(3)),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_compare_default_path() {
        let cli = Cli::try_parse_from(["procread", "compare"]).unwrap();
        match cli.command {
            Command::Compare(args) => assert!(args.path.is_none()),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["procread"]).is_err());
        assert!(Cli::try_parse_from(["procread", "info"]).is_err());
    }
}
