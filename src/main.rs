mod cli;
mod compare;
mod config;
mod error;
mod listing;
mod logging;
mod process;
mod reader;
mod system;

use std::io::{self, Write};

use clap::Parser;

use cli::{Cli, Command};
use config::Config;
use error::Error;
use reader::ReadMethod;

/// Build the Config by layering: defaults → TOML file → CLI overrides.
fn build_config(cli: &Cli) -> Config {
    let mut cfg = match config::load_config(cli.config_file.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            log::warn!("{}", e);
            Config::default()
        }
    };

    if let Some(root) = &cli.proc_root {
        cfg.proc_root = root.clone();
    }
    match &cli.command {
        Command::System(args) => {
            if let Some(n) = args.lines {
                cfg.system.lines = n;
            }
        }
        Command::Compare(args) => {
            if let Some(p) = &args.path {
                cfg.compare.path = Some(p.clone());
            }
        }
        _ => {}
    }

    cfg.validate();
    cfg
}

fn run(cli: &Cli, cfg: &Config) -> Result<(), Error> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = match &cli.command {
        Command::List => listing::list_process_directories(&cfg.proc_root, &mut out).map(|_| ()),
        Command::Info(args) => process::read_process_info(&cfg.proc_root, &args.pid, &mut out),
        Command::System(_) => system::show_system_info(&cfg.proc_root, cfg.system.lines, &mut out),
        Command::Compare(_) => compare::compare_file_methods(&cfg.compare_path(), &mut out),
        Command::Raw(args) => ReadMethod::Raw.read(&args.path, &mut out).map(|_| ()),
        Command::Buffered(args) => ReadMethod::Buffered.read(&args.path, &mut out).map(|_| ()),
    };

    // Partial output goes out ahead of the error report
    out.flush()?;
    result
}

fn main() {
    let cli = Cli::parse();
    logging::init(&cli.log);

    let cfg = build_config(&cli);
    if let Err(e) = run(&cli, &cfg) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
