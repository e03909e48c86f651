use crate::shell::ast::CommandKind;
use crate::shell::classify::classify;
use crate::shell::commands::builtins::builtin_for;
use crate::shell::commands::system::run_program;
use crate::shell::conditional::{evaluate, parse_conditional};
use crate::shell::context::ShellContext;
use crate::shell::path::resolve_program;
use crate::shell::redirect::{open_target, parse_redirect};
use anyhow::{Result, bail};
use log::debug;
use std::io::Write;
use std::path::PathBuf;

pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;

/// The one diagnostic users ever see.
pub const ERROR_MESSAGE: &str = "An error has occurred";

/// Executes one token sequence and returns its status.
///
/// Never fails: any interpreter error is reported once on stderr and turned into
/// `FAILURE`. A non-zero exit from an external program is returned as-is.
pub fn execute(tokens: &[String], ctx: &mut ShellContext) -> i32 {
    if tokens.is_empty() {
        return SUCCESS;
    }

    let kind = classify(tokens);
    debug!("{:?} <- {:?}", kind, tokens);

    let status = match dispatch(kind, tokens, ctx) {
        Ok(code) => code,
        Err(e) => {
            debug!("{:?} failed: {:#}", kind, e);
            report_error();
            FAILURE
        }
    };
    ctx.exit_code = status;
    status
}

fn dispatch(kind: CommandKind, tokens: &[String], ctx: &mut ShellContext) -> Result<i32> {
    match kind {
        CommandKind::Exit | CommandKind::ChangeDirectory | CommandKind::SetPath => {
            let Some(builtin) = builtin_for(kind) else {
                bail!("no built-in registered for {:?}", kind);
            };
            builtin.execute(tokens, ctx)
        }
        CommandKind::Program => {
            let argv = tokens.to_vec();
            let program = locate(&argv, ctx)?;
            run_program(&program, &argv[1..], ctx, None)
        }
        CommandKind::Redirect => {
            let spec = parse_redirect(tokens)?;
            let program = locate(&spec.command, ctx)?;
            // Opened only once the program is known to exist.
            let file = open_target(&spec, ctx)?;
            run_program(&program, &spec.command[1..], ctx, Some(file))
        }
        CommandKind::Conditional => {
            let conditional = parse_conditional(tokens)?;
            Ok(evaluate(&conditional, ctx))
        }
        CommandKind::Malformed => bail!("malformed command: {:?}", tokens),
    }
}

fn locate(argv: &[String], ctx: &ShellContext) -> Result<PathBuf> {
    let Some(name) = argv.first() else {
        bail!("empty command");
    };
    match resolve_program(name, ctx) {
        Some(program) => Ok(program),
        None => bail!("command not found: {}", name),
    }
}

fn report_error() {
    let mut stderr = std::io::stderr().lock();
    writeln!(stderr, "{}", ERROR_MESSAGE).ok();
    stderr.flush().ok();
}
