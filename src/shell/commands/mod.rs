pub mod builtins;
pub mod system;

use crate::shell::context::ShellContext;
use anyhow::Result;

/// A command run inside the interpreter. `args[0]` is the command name.
pub trait Executable {
    fn execute(&self, args: &[String], ctx: &mut ShellContext) -> Result<i32>;
}
