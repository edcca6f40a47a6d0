use crate::ast::Expr;
use crate::command::{BinaryOperator, UnaryOperator};
use crate::error::EvaluationError;

/// Evaluates a parse result.
///
/// `None` is what the parser returns for a queue without a leading number;
/// it fails the same way a dangling operator does.
pub fn evaluate(expr: Option<&Expr>) -> Result<f64, EvaluationError> {
    expr.ok_or(EvaluationError::IncompleteExpression)?.evaluate()
}

enum Step<'a> {
    Visit(&'a Expr),
    Binary(BinaryOperator),
    Unary(UnaryOperator),
}

impl Expr {
    /// Post-order walk on explicit stacks; trees from long queues are too deep
    /// to recurse over.
    pub fn evaluate(&self) -> Result<f64, EvaluationError> {
        let mut steps = vec![Step::Visit(self)];
        let mut values: Vec<f64> = Vec::new();

        while let Some(step) = steps.pop() {
            match step {
                Step::Visit(Expr::Number(value)) => values.push(*value),
                Step::Visit(Expr::BinaryOperation {
                    left,
                    operator,
                    right,
                }) => {
                    let right = right
                        .as_deref()
                        .ok_or(EvaluationError::IncompleteExpression)?;
                    steps.push(Step::Binary(*operator));
                    steps.push(Step::Visit(right));
                    steps.push(Step::Visit(&**left));
                }
                Step::Visit(Expr::UnaryOperation { operand, operator }) => {
                    steps.push(Step::Unary(*operator));
                    steps.push(Step::Visit(&**operand));
                }
                Step::Binary(operator) => {
                    let right_value = pop_value(&mut values)?;
                    let left_value = pop_value(&mut values)?;
                    values.push(operator.apply(left_value, right_value));
                }
                Step::Unary(operator) => {
                    let operand = pop_value(&mut values)?;
                    values.push(operator.apply(operand));
                }
            }
        }

        pop_value(&mut values)
    }
}

// Every operator step is preceded by visits that push its operands, so an
// empty stack only means an operand never made it into the tree.
fn pop_value(values: &mut Vec<f64>) -> Result<f64, EvaluationError> {
    values.pop().ok_or(EvaluationError::IncompleteExpression)
}
