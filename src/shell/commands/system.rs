// System command
use crate::shell::context::ShellContext;
use anyhow::{Context, Result};
use log::debug;
use std::fs::File;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

/// Spawns `program` with `args` (argv[1..]) and waits for it.
///
/// The child runs in the interpreter's working directory. When `stdout` is given
/// the child's standard output is bound to it; the interpreter's own stdout is
/// never touched. Returns the child's exit status.
pub fn run_program(
    program: &Path,
    args: &[String],
    ctx: &ShellContext,
    stdout: Option<File>,
) -> Result<i32> {
    let mut cmd = Command::new(program);
    cmd.args(args)
        .current_dir(&ctx.cwd)
        .stdin(Stdio::inherit())
        .stderr(Stdio::inherit());

    match stdout {
        Some(file) => cmd.stdout(Stdio::from(file)),
        None => cmd.stdout(Stdio::inherit()),
    };

    debug!("spawning {} {:?}", program.display(), args);
    let status = cmd
        .status()
        .with_context(|| format!("Failed to execute command: {}", program.display()))?;

    let code = exit_code(status);
    debug!("{} exited with {}", program.display(), code);
    Ok(code)
}

fn exit_code(status: ExitStatus) -> i32 {
    match status.code() {
        Some(code) => code,
        None => terminated_by_signal(status),
    }
}

#[cfg(unix)]
fn terminated_by_signal(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;
    match status.signal() {
        Some(signal) => 128 + signal,
        None => 1,
    }
}

#[cfg(not(unix))]
fn terminated_by_signal(_status: ExitStatus) -> i32 {
    1
}
