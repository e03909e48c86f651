use crate::shell::ast::{CommandKind, Comparison};
use crate::shell::tokenizer::REDIRECT;

pub const EXIT: &str = "exit";
pub const CD: &str = "cd";
pub const PATH: &str = "path";
pub const IF: &str = "if";
pub const THEN: &str = "then";
pub const FI: &str = "fi";

/// Assigns a command kind to a token sequence. First match wins:
/// built-in names, then `if`, then `>`, then a plain program.
///
/// An empty sequence is reported as `Program`; the executor treats it as a no-op
/// before ever classifying.
pub fn classify(tokens: &[String]) -> CommandKind {
    let Some(first) = tokens.first() else {
        return CommandKind::Program;
    };

    match first.as_str() {
        EXIT => return CommandKind::Exit,
        CD => return CommandKind::ChangeDirectory,
        PATH => return CommandKind::SetPath,
        IF => return classify_conditional(tokens),
        _ => {}
    }

    if tokens.iter().any(|t| t == REDIRECT) {
        return classify_redirect(tokens);
    }

    CommandKind::Program
}

fn classify_conditional(tokens: &[String]) -> CommandKind {
    if tokens.len() < 2 || tokens[tokens.len() - 1] != FI {
        return CommandKind::Malformed;
    }
    let inner = &tokens[1..tokens.len() - 1];
    let Some(then_idx) = inner.iter().position(|t| t == THEN) else {
        return CommandKind::Malformed;
    };
    let has_operator = inner[..then_idx]
        .iter()
        .any(|t| Comparison::from_token(t).is_some());

    if has_operator {
        CommandKind::Conditional
    } else {
        CommandKind::Malformed
    }
}

// Exactly one `>`, not leading, followed by exactly one target.
fn classify_redirect(tokens: &[String]) -> CommandKind {
    let mut positions = tokens
        .iter()
        .enumerate()
        .filter(|(_, t)| *t == REDIRECT)
        .map(|(i, _)| i);

    match (positions.next(), positions.next()) {
        (Some(idx), None) if idx > 0 && idx + 2 == tokens.len() => CommandKind::Redirect,
        _ => CommandKind::Malformed,
    }
}
