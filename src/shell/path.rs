use crate::shell::context::ShellContext;
use log::debug;
use std::path::PathBuf;

/// Finds `program` in the context's search path.
///
/// Each directory is tried in order as `directory/program`; the first executable
/// candidate wins, so earlier directories shadow later ones. Relative directories
/// are taken relative to the interpreter's working directory. An empty search
/// path resolves nothing.
pub fn resolve_program(program: &str, ctx: &ShellContext) -> Option<PathBuf> {
    if program.is_empty() {
        return None;
    }

    for dir in &ctx.search_path {
        // Plain concatenation: an absolute `program` must not escape `dir`.
        let candidate = PathBuf::from(format!("{}/{}", dir, program));
        // `candidate` always carries a separator, so `which` checks it in place
        // against `cwd` instead of consulting any PATH list.
        match which::which_in(&candidate, None::<&str>, &ctx.cwd) {
            Ok(found) => {
                debug!("resolved '{}' to {}", program, found.display());
                return Some(found);
            }
            Err(e) => debug!("'{}' not usable: {}", candidate.display(), e),
        }
    }

    debug!("'{}' not found in {:?}", program, ctx.search_path);
    None
}
