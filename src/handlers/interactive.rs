use anyhow::{Context, Result};
use colored::*;
use log::info;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use crate::config::WishConfig;
use crate::shell::context::ShellContext;
use crate::shell::run_command_line;

pub fn handle_interactive(config: &WishConfig, ctx: &mut ShellContext) -> Result<()> {
    let mut rl = DefaultEditor::new().context("Failed to start line editor")?;
    info!("interactive session started in {}", ctx.cwd.display());

    while !ctx.should_exit {
        match rl.readline(&prompt(config, ctx.exit_code)) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    rl.add_history_entry(line.as_str()).ok();
                }
                run_command_line(&line, ctx);
            }
            // Ctrl-C drops the current line only.
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err).context("Failed to read command line"),
        }
    }

    ctx.should_exit = true;
    Ok(())
}

// Green after success, red after a failure.
fn prompt(config: &WishConfig, last_status: i32) -> String {
    if !config.color {
        return config.prompt.clone();
    }
    match last_status {
        0 => config.prompt.green().bold().to_string(),
        _ => config.prompt.red().bold().to_string(),
    }
}
