use crate::shell::ast::{Comparison, Condition};
use crate::shell::classify::{FI, IF, THEN};
use crate::shell::context::ShellContext;
use crate::shell::executor::execute;
use anyhow::{Context, Result, bail};
use log::debug;

/// `if <condition> then <body> fi`, split into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conditional {
    pub condition: Condition,
    pub body: Vec<String>,
}

pub fn parse_conditional(tokens: &[String]) -> Result<Conditional> {
    let [first, inner @ .., last] = tokens else {
        bail!("conditional too short");
    };
    if first != IF || last != FI {
        bail!("conditional must start with '{}' and end with '{}'", IF, FI);
    }
    let then_idx = inner
        .iter()
        .position(|t| t == THEN)
        .with_context(|| format!("conditional without '{}'", THEN))?;
    let (condition, body) = (&inner[..then_idx], &inner[then_idx + 1..]);

    Ok(Conditional {
        condition: parse_condition(condition)?,
        body: body.to_vec(),
    })
}

fn parse_condition(tokens: &[String]) -> Result<Condition> {
    let (op_idx, op) = tokens
        .iter()
        .enumerate()
        .find_map(|(i, t)| Comparison::from_token(t).map(|op| (i, op)))
        .context("condition without a comparison operator")?;

    let command = &tokens[..op_idx];
    if command.is_empty() {
        bail!("condition without a command");
    }
    let [operand] = &tokens[op_idx + 1..] else {
        bail!("condition needs exactly one integer operand");
    };
    let operand = operand
        .parse::<i32>()
        .with_context(|| format!("condition operand is not an integer: {}", operand))?;

    Ok(Condition {
        command: command.to_vec(),
        op,
        operand,
    })
}

/// Runs the condition's command, compares its status, and runs the body only
/// when the comparison holds. A false condition yields 0.
pub fn evaluate(conditional: &Conditional, ctx: &mut ShellContext) -> i32 {
    let Condition { command, op, operand } = &conditional.condition;

    let status = execute(command, ctx);
    if ctx.should_exit {
        return status;
    }

    let holds = op.holds(status, *operand);
    debug!("condition {:?} {:?} {} -> {} ({})", command, op, operand, holds, status);

    if holds {
        execute(&conditional.body, ctx)
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::tokenizer::tokenize;

    #[test]
    fn test_parse_conditional() {
        let cond = parse_conditional(&tokenize("if grep -q x f != 1 then echo hi > out fi")).unwrap();
        assert_eq!(cond.condition.command, vec!["grep", "-q", "x", "f"]);
        assert_eq!(cond.condition.op, Comparison::NotEquals);
        assert_eq!(cond.condition.operand, 1);
        assert_eq!(cond.body, vec!["echo", "hi", ">", "out"]);
    }

    #[test]
    fn test_parse_conditional_negative_operand() {
        let cond = parse_conditional(&tokenize("if true == -1 then echo hi fi")).unwrap();
        assert_eq!(cond.condition.operand, -1);
    }

    #[test]
    fn test_evaluate_runs_body_only_when_condition_holds() {
        let mut ctx = ShellContext::new();
        let taken = parse_conditional(&tokenize("if path /x == 0 then path /y fi")).unwrap();
        assert_eq!(evaluate(&taken, &mut ctx), 0);
        assert_eq!(ctx.search_path, vec!["/y"]);

        let skipped = parse_conditional(&tokenize("if path /x == 1 then path /y fi")).unwrap();
        assert_eq!(evaluate(&skipped, &mut ctx), 0);
        assert_eq!(ctx.search_path, vec!["/x"]);
    }

    #[test]
    fn test_parse_conditional_rejects() {
        assert!(parse_conditional(&tokenize("if true == zero then echo fi")).is_err());
        assert!(parse_conditional(&tokenize("if true == 0 1 then echo fi")).is_err());
        assert!(parse_conditional(&tokenize("if true == then echo fi")).is_err());
        assert!(parse_conditional(&tokenize("if == 0 then echo fi")).is_err());
        assert!(parse_conditional(&tokenize("if true == 0 echo fi")).is_err());
        assert!(parse_conditional(&tokenize("if")).is_err());
    }
}
