use crate::error::ClassificationError;

/// Every key on the calculator that is not a digit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operation {
    Clear,
    Invert,
    Percent,
    Divide,
    Multiply,
    Subtract,
    Add,
    Equals,
    Decimal,
}

impl Operation {
    /// Whether this operation combines two operands.
    ///
    /// Only the arithmetic kinds and `Percent` have an answer; anything else is
    /// a [`ClassificationError`].
    pub fn is_binary_operator(self) -> Result<bool, ClassificationError> {
        match self {
            Operation::Percent => Ok(false),
            other => BinaryOperator::try_from(other).map(|_| true),
        }
    }

    /// Whether this operation applies to the single operand before it.
    pub fn is_postfix_unary_operator(self) -> Result<bool, ClassificationError> {
        match self {
            Operation::Percent => Ok(true),
            Operation::Divide | Operation::Multiply | Operation::Subtract | Operation::Add => {
                Ok(false)
            }
            other => Err(ClassificationError::NotPostfixOperator(other)),
        }
    }

    /// Binding strength of an operator. Higher binds tighter.
    ///
    /// `Percent` ranks above everything but is never consulted while folding a
    /// binary chain, it always binds to the literal in front of it.
    pub fn precedence(self) -> Result<u8, ClassificationError> {
        match self {
            Operation::Percent => Ok(5),
            other => BinaryOperator::try_from(other)
                .map(BinaryOperator::precedence)
                .map_err(|_| ClassificationError::NoPrecedence(other)),
        }
    }

    /// Symbol shown on the key and in the display line.
    pub fn display_symbol(self) -> &'static str {
        match self {
            Operation::Clear => "AC",
            Operation::Invert => "±",
            Operation::Percent => "%",
            Operation::Divide => "÷",
            Operation::Multiply => "×",
            Operation::Subtract => "−",
            Operation::Add => "+",
            Operation::Equals => "=",
            Operation::Decimal => ".",
        }
    }

    /// ASCII spelling that reads back as a plain number or arithmetic
    /// expression. Only arithmetic kinds and `Decimal` have one.
    pub fn logical_symbol(self) -> Option<&'static str> {
        match self {
            Operation::Divide => Some("/"),
            Operation::Multiply => Some("*"),
            Operation::Subtract => Some("-"),
            Operation::Add => Some("+"),
            Operation::Decimal => Some("."),
            _ => None,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Divide,
    Multiply,
    Subtract,
    Add,
}

impl BinaryOperator {
    pub fn precedence(self) -> u8 {
        match self {
            BinaryOperator::Divide | BinaryOperator::Multiply => 4,
            BinaryOperator::Subtract | BinaryOperator::Add => 2,
        }
    }

    /// Plain IEEE-754 arithmetic: dividing by zero gives an infinity or NaN.
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            BinaryOperator::Divide => left / right,
            BinaryOperator::Multiply => left * right,
            BinaryOperator::Subtract => left - right,
            BinaryOperator::Add => left + right,
        }
    }
}

impl TryFrom<Operation> for BinaryOperator {
    type Error = ClassificationError;

    fn try_from(value: Operation) -> Result<Self, Self::Error> {
        match value {
            Operation::Divide => Ok(BinaryOperator::Divide),
            Operation::Multiply => Ok(BinaryOperator::Multiply),
            Operation::Subtract => Ok(BinaryOperator::Subtract),
            Operation::Add => Ok(BinaryOperator::Add),
            other => Err(ClassificationError::NotBinaryOperator(other)),
        }
    }
}

impl From<BinaryOperator> for Operation {
    fn from(value: BinaryOperator) -> Self {
        match value {
            BinaryOperator::Divide => Operation::Divide,
            BinaryOperator::Multiply => Operation::Multiply,
            BinaryOperator::Subtract => Operation::Subtract,
            BinaryOperator::Add => Operation::Add,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    Percent,
}

impl UnaryOperator {
    pub fn apply(self, operand: f64) -> f64 {
        match self {
            UnaryOperator::Percent => operand / 100.0,
        }
    }
}

impl TryFrom<Operation> for UnaryOperator {
    type Error = ClassificationError;

    fn try_from(value: Operation) -> Result<Self, Self::Error> {
        match value {
            Operation::Percent => Ok(UnaryOperator::Percent),
            other => Err(ClassificationError::NotPostfixOperator(other)),
        }
    }
}

/// One key press.
///
/// A press on the keypad yields a single digit, but the session also stores
/// whole results (after `=` or `±`) as a `Number`, so the payload is a full
/// `f64`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Command {
    Number(f64),
    Operation(Operation),
}

impl Command {
    /// A digit key, `None` for anything above 9.
    pub fn digit(digit: u8) -> Option<Self> {
        (digit <= 9).then(|| Command::Number(f64::from(digit)))
    }

    pub fn as_operation(&self) -> Option<Operation> {
        match self {
            Command::Operation(op) => Some(*op),
            Command::Number(_) => None,
        }
    }
}

impl From<Operation> for Command {
    fn from(value: Operation) -> Self {
        Command::Operation(value)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Notation {
    /// Key-cap symbols, for showing the queue to a person.
    Display,
    /// ASCII arithmetic, for reading the queue back as a number.
    Logical,
}

/// Renders a command queue as text.
///
/// `Decimal` and `Percent` stick to the number they belong to; every other
/// operation gets a space on each side when `padded` is set. Returns `None`
/// if some operation has no symbol in `notation`.
pub fn translate_commands(commands: &[Command], notation: Notation, padded: bool) -> Option<String> {
    let mut output = String::new();
    for command in commands {
        match command {
            Command::Number(value) => output.push_str(&format_number(*value, notation)),
            Command::Operation(op) => {
                let symbol = match notation {
                    Notation::Display => op.display_symbol(),
                    Notation::Logical => op.logical_symbol()?,
                };
                if padded && !matches!(op, Operation::Decimal | Operation::Percent) {
                    output.push(' ');
                    output.push_str(symbol);
                    output.push(' ');
                } else {
                    output.push_str(symbol);
                }
            }
        }
    }
    Some(output)
}

/// Text for a number in `notation`.
///
/// The display spells non-finite results out and never shows a negative
/// zero. The logical form stays in Rust's float syntax so it parses back.
fn format_number(value: f64, notation: Notation) -> String {
    match notation {
        Notation::Logical => value.to_string(),
        Notation::Display if value.is_nan() => "NaN".to_string(),
        Notation::Display if value == f64::INFINITY => "Infinity".to_string(),
        Notation::Display if value == f64::NEG_INFINITY => "-Infinity".to_string(),
        Notation::Display if value == 0.0 => "0".to_string(),
        Notation::Display => value.to_string(),
    }
}
