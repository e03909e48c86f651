pub mod batch;
pub mod interactive;

use crate::shell::context::ShellContext;
use crate::shell::run_command_line;
use anyhow::{Context, Result};
use std::io;

/// Feeds lines to the interpreter until input ends or `exit` runs.
/// Running out of input is the same as an explicit `exit`.
pub fn run_session<I>(lines: I, ctx: &mut ShellContext) -> Result<()>
where
    I: IntoIterator<Item = io::Result<String>>,
{
    for line in lines {
        let line = line.context("Failed to read command line")?;
        run_command_line(&line, ctx);
        if ctx.should_exit {
            break;
        }
    }
    ctx.should_exit = true;
    Ok(())
}
