use crate::command::Operation;
use thiserror::Error;

/// Raised when a classification helper is handed an operation outside its domain.
///
/// Callers only classify kinds they already know to be arithmetic, so seeing
/// this error means the caller is inconsistent, not that the user did
/// something wrong.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum ClassificationError {
    #[error("not convertible to binary operator: {0:?}")]
    NotBinaryOperator(Operation),
    #[error("not convertible to postfix unary operator: {0:?}")]
    NotPostfixOperator(Operation),
    #[error("not convertible to precedence: {0:?}")]
    NoPrecedence(Operation),
}

/// The only failure of the evaluator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    /// A trailing operator was never given its right-hand operand, or the
    /// command sequence had no leading operand at all.
    #[error("expression incomplete: missing operand")]
    IncompleteExpression,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeysError {
    #[error("invalid keystrokes: {0}")]
    Syntax(String),
}

/// Umbrella error for the entry points that chain several stages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
    #[error(transparent)]
    Keys(#[from] KeysError),
}
