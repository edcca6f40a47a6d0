use std::fmt;
use std::mem;

use crate::command::{BinaryOperator, Operation, UnaryOperator};

mod evaluator;
mod parser;

pub use evaluator::evaluate;
pub use parser::CommandParser as Parser;

/// Expression tree built from a command queue.
///
/// A missing operand is an `Option` slot rather than a variant, so the only
/// place a tree can be incomplete is the right-hand side of a binary
/// operation whose operator was the last key pressed.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),
    BinaryOperation {
        left: Box<Expr>,
        operator: BinaryOperator,
        right: Option<Box<Expr>>,
    },
    UnaryOperation {
        operand: Box<Expr>,
        operator: UnaryOperator,
    },
}

impl Expr {
    pub fn binary(left: Expr, operator: BinaryOperator, right: Expr) -> Expr {
        Expr::BinaryOperation {
            left: Box::new(left),
            operator,
            right: Some(Box::new(right)),
        }
    }

    /// A binary operation whose right operand was never entered.
    pub fn dangling(left: Expr, operator: BinaryOperator) -> Expr {
        Expr::BinaryOperation {
            left: Box::new(left),
            operator,
            right: None,
        }
    }

    pub fn percent(operand: Expr) -> Expr {
        Expr::UnaryOperation {
            operand: Box::new(operand),
            operator: UnaryOperator::Percent,
        }
    }

    /// True when every binary operation has its right operand.
    pub fn is_complete(&self) -> bool {
        let mut stack = vec![self];
        while let Some(expr) = stack.pop() {
            match expr {
                Expr::Number(_) => {}
                Expr::BinaryOperation { left, right, .. } => match right {
                    Some(right) => stack.extend([&**left, &**right]),
                    None => return false,
                },
                Expr::UnaryOperation { operand, .. } => stack.push(&**operand),
            }
        }
        true
    }

    /// Moves this node's children into `out`, leaving leaves behind.
    fn take_children(&mut self, out: &mut Vec<Box<Expr>>) {
        match self {
            Expr::Number(_) => {}
            Expr::BinaryOperation { left, right, .. } => {
                out.push(mem::replace(left, Box::new(Expr::Number(0.0))));
                out.extend(right.take());
            }
            Expr::UnaryOperation { operand, .. } => {
                out.push(mem::replace(operand, Box::new(Expr::Number(0.0))));
            }
        }
    }
}

/// A queue of a few thousand operators nests that deep, so children are
/// released from a heap stack instead of by recursion.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut children = Vec::new();
        self.take_children(&mut children);
        while let Some(mut child) = children.pop() {
            child.take_children(&mut children);
        }
    }
}

/// Fully parenthesised form, handy for logging the shape of a parse.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(value) => write!(f, "{}", value),
            Expr::BinaryOperation {
                left,
                operator,
                right,
            } => {
                let symbol = Operation::from(*operator).display_symbol();
                match right {
                    Some(right) => write!(f, "({} {} {})", left, symbol, right),
                    None => write!(f, "({} {} _)", left, symbol),
                }
            }
            Expr::UnaryOperation { operand, .. } => {
                write!(f, "{}{}", operand, Operation::Percent.display_symbol())
            }
        }
    }
}
