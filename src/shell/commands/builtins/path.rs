// Path command

use crate::shell::commands::Executable;
use crate::shell::context::ShellContext;
use anyhow::Result;
use log::info;

/// Replaces the search path with the given directories. Zero directories is
/// allowed and leaves nothing resolvable.
pub struct PathCommand;
impl Executable for PathCommand {
    fn execute(&self, args: &[String], ctx: &mut ShellContext) -> Result<i32> {
        ctx.search_path = args.iter().skip(1).cloned().collect();
        info!("search path set to {:?}", ctx.search_path);
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_replaces_list() {
        let mut ctx = ShellContext::new();
        let args = vec!["path".to_string(), "/a".to_string(), "/b".to_string()];
        PathCommand.execute(&args, &mut ctx).unwrap();
        assert_eq!(ctx.search_path, vec!["/a", "/b"]);

        let args = vec!["path".to_string(), "/c".to_string()];
        PathCommand.execute(&args, &mut ctx).unwrap();
        assert_eq!(ctx.search_path, vec!["/c"]);
    }

    #[test]
    fn test_path_without_arguments_clears() {
        let mut ctx = ShellContext::new();
        assert_eq!(PathCommand.execute(&["path".to_string()], &mut ctx).unwrap(), 0);
        assert!(ctx.search_path.is_empty());
    }
}
