use std::path::{Path, PathBuf};

pub const DEFAULT_SEARCH_PATH: &str = "/bin";

/// Interpreter state that outlives a single line.
#[derive(Debug)]
pub struct ShellContext {
    pub cwd: PathBuf,
    /// Ordered program search directories. Replaced wholesale by `path`.
    pub search_path: Vec<String>,
    pub exit_code: i32,
    /// Set by `exit`; the session loop stops once this is true.
    pub should_exit: bool,
}

impl ShellContext {
    pub fn new() -> Self {
        Self::with_search_path(vec![DEFAULT_SEARCH_PATH.to_string()])
    }

    pub fn with_search_path(search_path: Vec<String>) -> Self {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self {
            cwd,
            search_path,
            exit_code: 0,
            should_exit: false,
        }
    }

    /// Resolves `path` against the interpreter's working directory.
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        let p = path.as_ref();
        if p.is_absolute() {
            p.to_path_buf()
        } else {
            self.cwd.join(p)
        }
    }
}

impl Default for ShellContext {
    fn default() -> Self {
        Self::new()
    }
}
