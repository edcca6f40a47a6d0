//! Plain-text spelling of key presses, e.g. `"12 + 3.5% ="`.
//!
//! Each key maps to exactly one [`Command`]; this is a way to write down a
//! queue, not an infix expression language.

use crate::command::{Command, Operation};
use crate::error::KeysError;
use log::debug;
use pest::iterators::Pair;
use pest::Parser;
use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "keys/keys.pest"]
pub struct KeyParser;

pub fn parse_keys(input: &str) -> Result<Vec<Command>, KeysError> {
    debug!("Parsing keystrokes: {}", input);
    let keys = KeyParser::parse(Rule::keys, input)
        .map_err(|e| KeysError::Syntax(e.to_string()))?
        .next()
        .ok_or_else(|| KeysError::Syntax("no keys rule in parse result".to_string()))?;

    keys.into_inner()
        .filter(|pair| pair.as_rule() != Rule::EOI)
        .map(build_command)
        .collect()
}

fn build_command(pair: Pair<Rule>) -> Result<Command, KeysError> {
    let operation = match pair.as_rule() {
        Rule::digit => {
            return pair
                .as_str()
                .parse::<u8>()
                .ok()
                .and_then(Command::digit)
                .ok_or_else(|| KeysError::Syntax(format!("Invalid digit: {}", pair.as_str())));
        }
        Rule::decimal => Operation::Decimal,
        Rule::percent => Operation::Percent,
        Rule::divide => Operation::Divide,
        Rule::multiply => Operation::Multiply,
        Rule::subtract => Operation::Subtract,
        Rule::add => Operation::Add,
        Rule::equals => Operation::Equals,
        Rule::clear => Operation::Clear,
        Rule::invert => Operation::Invert,
        other => return Err(KeysError::Syntax(format!("Unexpected rule: {:?}", other))),
    };
    Ok(Command::Operation(operation))
}
