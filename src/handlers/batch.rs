use anyhow::{Context, Result};
use log::info;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use crate::handlers::run_session;
use crate::shell::context::ShellContext;

pub fn handle_batch(script: &Path, ctx: &mut ShellContext) -> Result<()> {
    let file = File::open(script)
        .with_context(|| format!("Failed to open script: {}", script.display()))?;
    info!("running script {}", script.display());

    // Bytes that are not UTF-8 are replaced rather than ending the script.
    let lines = BufReader::new(file)
        .split(b'\n')
        .map(|line| line.map(|bytes| String::from_utf8_lossy(&bytes).into_owned()));
    run_session(lines, ctx)
}
