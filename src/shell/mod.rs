pub mod ast;
pub mod classify;
pub mod commands;
pub mod conditional;
pub mod context;
pub mod executor;
pub mod path;
pub mod redirect;
pub mod tokenizer;

use context::ShellContext;
use executor::execute;


pub fn run_command_line(line: &str, ctx: &mut ShellContext) -> i32 {
    let tokens = tokenizer::tokenize(line);
    execute(&tokens, ctx)
}
