use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "wish", version, about = "wish: a small line-oriented command interpreter")]
pub struct Cli {
    /// Script to run in batch mode. Reads commands interactively when omitted.
    pub script: Option<PathBuf>,
}
