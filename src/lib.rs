pub mod ast;
pub mod command;
pub mod error;
pub mod keys;
pub mod session;

use ast::{evaluate, Parser};
use command::Command;
use error::{CalcError, EvaluationError};
use rayon::prelude::*;

/// Parses and evaluates one command queue.
pub fn evaluate_commands(commands: &[Command]) -> Result<f64, EvaluationError> {
    let ast = Parser::parse_commands(commands);
    evaluate(ast.as_ref())
}

/// Evaluates independent queues in parallel, results in input order.
pub fn evaluate_batch(queues: &[Vec<Command>]) -> Vec<Result<f64, EvaluationError>> {
    queues
        .par_iter()
        .map(|commands| evaluate_commands(commands))
        .collect()
}

/// Evaluates keystrokes written out as text, e.g. `"2+3×4"`.
pub fn evaluate_keys(input: &str) -> Result<f64, CalcError> {
    let commands = keys::parse_keys(input)?;
    Ok(evaluate_commands(&commands)?)
}
