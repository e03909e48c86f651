// Cd command

use crate::shell::commands::Executable;
use crate::shell::context::ShellContext;
use anyhow::{Context, Result, bail};

pub struct CdCommand;
impl Executable for CdCommand {
    fn execute(&self, args: &[String], ctx: &mut ShellContext) -> Result<i32> {
        // args[0] is "cd". args[1] is the only accepted operand.
        let [_, target] = args else {
            bail!("cd takes exactly one argument, got {}", args.len().saturating_sub(1));
        };

        let new_path = ctx.resolve(target);
        if !new_path.is_dir() {
            bail!("cd: no such directory: {}", target);
        }
        ctx.cwd = new_path
            .canonicalize()
            .with_context(|| format!("cd: cannot canonicalize {}", target))?;
        Ok(0)
    }
}
