// Exit command

use crate::shell::commands::Executable;
use crate::shell::context::ShellContext;
use anyhow::{Result, bail};

pub struct ExitCommand;
impl Executable for ExitCommand {
    fn execute(&self, args: &[String], ctx: &mut ShellContext) -> Result<i32> {
        if args.len() != 1 {
            bail!("exit takes no arguments, got {}", args.len().saturating_sub(1));
        }
        // The session loop terminates the process once it sees the request.
        ctx.should_exit = true;
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_sets_request() {
        let mut ctx = ShellContext::new();
        let code = ExitCommand.execute(&["exit".to_string()], &mut ctx).unwrap();
        assert_eq!(code, 0);
        assert!(ctx.should_exit);
    }

    #[test]
    fn test_exit_with_argument_is_rejected() {
        let mut ctx = ShellContext::new();
        let res = ExitCommand.execute(&["exit".to_string(), "1".to_string()], &mut ctx);
        assert!(res.is_err());
        assert!(!ctx.should_exit);
    }
}
