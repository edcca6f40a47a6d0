use crate::ast::Expr;
use crate::command::{BinaryOperator, Command, Operation, UnaryOperator};
use log::debug;

/// Single-pass precedence-climbing parser over a command queue.
///
/// The cursor only moves forward. A parser is meant to be built for one queue
/// and dropped afterwards; [`CommandParser::parse_commands`] does both.
pub struct CommandParser<'a> {
    commands: &'a [Command],
    pos: usize,
}

impl<'a> CommandParser<'a> {
    pub fn new(commands: &'a [Command]) -> Self {
        Self { commands, pos: 0 }
    }

    /// Parses a whole queue with a fresh parser.
    ///
    /// Returns `None` when the queue does not start with a number, which
    /// includes the empty queue.
    pub fn parse_commands(commands: &[Command]) -> Option<Expr> {
        debug!("Parsing {} commands", commands.len());
        let expr = CommandParser::new(commands).parse_expression();
        match &expr {
            Some(expr) => debug!("Parse result complete: {}", expr.is_complete()),
            None => debug!("Parse result: no leading operand"),
        }
        expr
    }

    pub fn parse_expression(&mut self) -> Option<Expr> {
        let operand = self.parse_operand()?;
        Some(self.parse_binary_chain(operand))
    }

    /// Number literal, optionally followed by a percent key.
    fn parse_operand(&mut self) -> Option<Expr> {
        let number = self.parse_number()?;
        match self.peek_operation().and_then(|op| UnaryOperator::try_from(op).ok()) {
            Some(UnaryOperator::Percent) => {
                self.pos += 1;
                Some(Expr::percent(number))
            }
            None => Some(number),
        }
    }

    fn parse_number(&mut self) -> Option<Expr> {
        let mut digits = String::new();
        while let Some(command) = self.commands.get(self.pos) {
            match command {
                Command::Number(value) => digits.push_str(&value.to_string()),
                Command::Operation(Operation::Decimal) => digits.push('.'),
                Command::Operation(_) => break,
            }
            self.pos += 1;
        }

        if digits.is_empty() {
            return None;
        }

        // A stray decimal point or a result glued to more digits ("1.2.3",
        // "NaN5") is not a float; the calculator shows that as NaN.
        let value = digits.parse::<f64>().unwrap_or_else(|_| {
            debug!("Literal {:?} is not a number, using NaN", digits);
            f64::NAN
        });
        Some(Expr::Number(value))
    }

    /// Folds binary operators into `current`.
    ///
    /// A strictly tighter operator parks the left side and operator on
    /// `pending` and continues from the operand it steals; that inner chain
    /// runs to its end before being folded back. Ties fold left to right.
    fn parse_binary_chain(&mut self, mut current: Expr) -> Expr {
        let mut pending: Vec<(Expr, BinaryOperator)> = Vec::new();
        loop {
            let finished = match self.peek_binary_operator() {
                None => current,
                Some(operator) => {
                    self.pos += 1;
                    match self.parse_operand() {
                        None => {
                            debug!("Operator {:?} has no right operand", operator);
                            Expr::dangling(current, operator)
                        }
                        Some(rhs) => match self.peek_binary_operator() {
                            None => Expr::binary(current, operator, rhs),
                            Some(peeked) if operator.precedence() < peeked.precedence() => {
                                pending.push((current, operator));
                                current = rhs;
                                continue;
                            }
                            Some(_) => {
                                current = Expr::binary(current, operator, rhs);
                                continue;
                            }
                        },
                    }
                }
            };

            match pending.pop() {
                Some((left, operator)) => current = Expr::binary(left, operator, finished),
                None => return finished,
            }
        }
    }

    fn peek_operation(&self) -> Option<Operation> {
        self.commands.get(self.pos).and_then(Command::as_operation)
    }

    /// Keys like `=` or `AC` are not operators here, they just end the chain.
    fn peek_binary_operator(&self) -> Option<BinaryOperator> {
        self.peek_operation()
            .and_then(|op| BinaryOperator::try_from(op).ok())
    }
}
