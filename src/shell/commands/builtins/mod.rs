pub mod cd;
pub mod exit;
pub mod path;

use crate::shell::ast::CommandKind;
use crate::shell::commands::Executable;

/// The built-in handling a command kind, if that kind is a built-in.
pub fn builtin_for(kind: CommandKind) -> Option<&'static dyn Executable> {
    match kind {
        CommandKind::Exit => Some(&exit::ExitCommand),
        CommandKind::ChangeDirectory => Some(&cd::CdCommand),
        CommandKind::SetPath => Some(&path::PathCommand),
        _ => None,
    }
}
