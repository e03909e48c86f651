use crate::shell::ast::RedirectSpec;
use crate::shell::context::ShellContext;
use crate::shell::tokenizer::REDIRECT;
use anyhow::{Context, Result, bail};
use std::fs::{File, OpenOptions};

/// Splits `<command> > <target>` into its command tokens and its single target.
pub fn parse_redirect(tokens: &[String]) -> Result<RedirectSpec> {
    let Some(idx) = tokens.iter().position(|t| t == REDIRECT) else {
        bail!("redirect without '>'");
    };
    let (command, rest) = (&tokens[..idx], &tokens[idx + 1..]);

    if command.is_empty() {
        bail!("redirect without a command");
    }
    let [target] = rest else {
        bail!("redirect needs exactly one target, got {}", rest.len());
    };
    if target == REDIRECT {
        bail!("redirect target cannot be '>'");
    }

    Ok(RedirectSpec {
        command: command.to_vec(),
        target: target.clone(),
    })
}

/// Opens the redirect target for writing, creating or truncating it.
/// Relative targets are resolved against the interpreter's working directory.
pub fn open_target(spec: &RedirectSpec, ctx: &ShellContext) -> Result<File> {
    let path = ctx.resolve(&spec.target);
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&path)
        .with_context(|| format!("Failed to open file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::tokenizer::tokenize;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_parse_redirect() {
        let spec = parse_redirect(&tokenize("ls -la > out.txt")).unwrap();
        assert_eq!(spec.command, vec!["ls", "-la"]);
        assert_eq!(spec.target, "out.txt");
    }

    #[test]
    fn test_parse_fused_redirect() {
        let spec = parse_redirect(&tokenize("ls -la>out.txt")).unwrap();
        assert_eq!(spec.command, vec!["ls", "-la"]);
        assert_eq!(spec.target, "out.txt");
    }

    #[test]
    fn test_parse_redirect_rejects_bad_targets() {
        assert!(parse_redirect(&tokenize("ls >")).is_err());
        assert!(parse_redirect(&tokenize("ls > a b")).is_err());
        assert!(parse_redirect(&tokenize("> a")).is_err());
        assert!(parse_redirect(&tokenize("ls > >")).is_err());
        assert!(parse_redirect(&tokenize("ls")).is_err());
    }

    #[test]
    fn test_open_target_truncates() {
        let dir = TempDir::new().unwrap();
        let mut ctx = ShellContext::new();
        ctx.cwd = dir.path().to_path_buf();
        fs::write(dir.path().join("out.txt"), "stale contents").unwrap();

        let spec = parse_redirect(&tokenize("ls > out.txt")).unwrap();
        drop(open_target(&spec, &ctx).unwrap());

        assert_eq!(fs::read_to_string(dir.path().join("out.txt")).unwrap(), "");
    }
}
