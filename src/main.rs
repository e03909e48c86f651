mod cli;
mod config;
mod handlers;
mod shell;

use anyhow::{Context, Result};
use clap::Parser;
use clap::error::ErrorKind;
use cli::Cli;
use handlers::{batch, interactive};
use log::debug;
use shell::context::ShellContext;
use shell::executor::{ERROR_MESSAGE, FAILURE, SUCCESS};
use std::process;

fn main() {
    env_logger::init();

    let code = match run() {
        Ok(()) => SUCCESS,
        Err(e) => {
            debug!("startup failed: {:#}", e);
            eprintln!("{}", ERROR_MESSAGE);
            FAILURE
        }
    };
    process::exit(code);
}

fn run() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => return Err(e).context("Invalid command line"),
    };

    let start_dir = std::env::current_dir().context("Failed to read working directory")?;
    let config = config::load_config(&start_dir)?;
    let mut ctx = ShellContext::with_search_path(config.path.clone());

    match cli.script {
        Some(script) => batch::handle_batch(&script, &mut ctx),
        None => interactive::handle_interactive(&config, &mut ctx),
    }
}
