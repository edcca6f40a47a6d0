//! Headless calculator: what happens to the command queue when a key is
//! pressed, independent of any widget toolkit.

use crate::command::{translate_commands, Command, Notation, Operation};
use crate::error::{EvaluationError, KeysError};
use crate::evaluate_commands;
use crate::keys::parse_keys;
use log::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Past calculations kept, newest first.
    pub history_limit: usize,
    /// Characters of the queue rendering shown on the display line.
    pub display_width: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            history_limit: 3,
            display_width: 10,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Calculator {
    config: SessionConfig,
    commands: Vec<Command>,
    history: Vec<String>,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SessionConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Previous display lines, newest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// What the display shows for the queue being typed.
    pub fn display(&self) -> String {
        let line = self.display_line();
        if line.is_empty() {
            "0".to_string()
        } else {
            line
        }
    }

    pub fn press(&mut self, command: Command) {
        match command {
            Command::Number(_) => self.commands.push(command),
            Command::Operation(Operation::Clear) => self.clear(),
            Command::Operation(Operation::Invert) => self.invert(),
            Command::Operation(Operation::Equals) => self.equals(),
            Command::Operation(op) => self.push_operation(op),
        }
    }

    /// Presses every key spelled in `input`, in order.
    ///
    /// Nothing is pressed if the input does not parse.
    pub fn press_keys(&mut self, input: &str) -> Result<(), KeysError> {
        for command in parse_keys(input)? {
            self.press(command);
        }
        Ok(())
    }

    fn display_line(&self) -> String {
        translate_commands(&self.commands, Notation::Display, true)
            .unwrap_or_default()
            .chars()
            .take(self.config.display_width)
            .collect()
    }

    /// A second clear on an empty queue also wipes the history.
    fn clear(&mut self) {
        if self.commands.is_empty() {
            self.history.clear();
        }
        self.commands.clear();
    }

    fn invert(&mut self) {
        let value = translate_commands(&self.commands, Notation::Logical, false)
            .and_then(|text| text.parse::<f64>().ok());
        match value {
            Some(value) if !value.is_nan() => self.commands = vec![Command::Number(-value)],
            _ => debug!("Queue is not a single number, ignoring invert"),
        }
    }

    fn equals(&mut self) {
        let line = self.display_line();
        match evaluate_commands(&self.commands) {
            Ok(result) => {
                self.commands = vec![Command::Number(result)];
                self.history.insert(0, line);
                self.history.truncate(self.config.history_limit);
            }
            Err(EvaluationError::IncompleteExpression) => {
                debug!("Ignoring equals on incomplete expression: {}", line);
            }
        }
    }

    fn push_operation(&mut self, op: Operation) {
        let Some(last) = self.commands.last() else {
            debug!("Queue is empty, ignoring {:?}", op);
            return;
        };

        // An operator replaces the one before it, except that a percent may
        // be followed by another operator.
        if let Command::Operation(last_op) = *last {
            if !(last_op == Operation::Percent && op != Operation::Percent) {
                self.commands.pop();
            }
        }
        self.commands.push(Command::Operation(op));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calculator(keys: &str) -> Calculator {
        let mut calculator = Calculator::new();
        calculator.press_keys(keys).unwrap();
        calculator
    }

    #[test]
    fn test_empty_display() {
        assert_eq!(Calculator::new().display(), "0");
    }

    #[test]
    fn test_display_is_padded_and_truncated() {
        assert_eq!(calculator("12+3").display(), "12 + 3");
        assert_eq!(calculator("123456*789").display(), "123456 × 7");
    }

    #[test]
    fn test_equals_replaces_queue_and_records_history() {
        let calc = calculator("2+3*4=");
        assert_eq!(calc.commands(), &[Command::Number(14.0)]);
        assert_eq!(calc.history(), &["2 + 3 × 4".to_string()]);
        assert_eq!(calc.display(), "14");
    }

    #[test]
    fn test_history_is_bounded_newest_first() {
        let calc = calculator("1+1= C 2+2= C 3+3= C 4+4=");
        assert_eq!(
            calc.history(),
            &["4 + 4".to_string(), "3 + 3".to_string(), "2 + 2".to_string()]
        );
    }

    #[test]
    fn test_custom_history_limit() {
        let mut calc = Calculator::with_config(SessionConfig {
            history_limit: 1,
            ..SessionConfig::default()
        });
        calc.press_keys("1+1= 2+2=").unwrap();
        assert_eq!(calc.history().len(), 1);
    }

    #[test]
    fn test_equals_on_trailing_operator_is_ignored() {
        let calc = calculator("5+=");
        assert_eq!(
            calc.commands(),
            &[Command::Number(5.0), Command::Operation(Operation::Add)]
        );
        assert!(calc.history().is_empty());
    }

    #[test]
    fn test_equals_on_empty_queue_is_ignored() {
        let calc = calculator("=");
        assert!(calc.commands().is_empty());
        assert!(calc.history().is_empty());
    }

    #[test]
    fn test_leading_operator_is_ignored() {
        assert!(calculator("+*.%").commands().is_empty());
    }

    #[test]
    fn test_operator_replaces_previous_operator() {
        let calc = calculator("5+*");
        assert_eq!(
            calc.commands(),
            &[Command::Number(5.0), Command::Operation(Operation::Multiply)]
        );
    }

    #[test]
    fn test_operator_may_follow_percent() {
        let calc = calculator("50%+1=");
        assert_eq!(calc.commands(), &[Command::Number(1.5)]);
    }

    #[test]
    fn test_percent_replaces_percent() {
        let calc = calculator("5%%");
        assert_eq!(
            calc.commands(),
            &[Command::Number(5.0), Command::Operation(Operation::Percent)]
        );
    }

    #[test]
    fn test_invert_single_number() {
        let calc = calculator("1.5~");
        assert_eq!(calc.commands(), &[Command::Number(-1.5)]);
        assert_eq!(calc.display(), "-1.5");

        let calc = calculator("1.5~~");
        assert_eq!(calc.commands(), &[Command::Number(1.5)]);
    }

    #[test]
    fn test_invert_expression_is_ignored() {
        let calc = calculator("5+3~");
        assert_eq!(calc.commands().len(), 3);
        let calc = calculator("5%~");
        assert_eq!(calc.commands().len(), 2);
    }

    #[test]
    fn test_result_continues_with_operator() {
        let calc = calculator("6/4= *2=");
        assert_eq!(calc.commands(), &[Command::Number(3.0)]);
    }

    #[test]
    fn test_clear_twice_wipes_history() {
        let mut calc = calculator("1+1=");
        calc.press(Command::Operation(Operation::Clear));
        assert!(calc.commands().is_empty());
        assert_eq!(calc.history().len(), 1);
        calc.press(Command::Operation(Operation::Clear));
        assert!(calc.history().is_empty());
    }

    #[test]
    fn test_bad_keys_press_nothing() {
        let mut calc = Calculator::new();
        assert!(calc.press_keys("1+?").is_err());
        assert!(calc.commands().is_empty());
    }

    #[test]
    fn test_division_by_zero_result() {
        let calc = calculator("5/0=");
        assert_eq!(calc.commands(), &[Command::Number(f64::INFINITY)]);
        assert_eq!(calc.display(), "Infinity");

        let calc = calculator("5/0= C 0/0=");
        assert_eq!(calc.display(), "NaN");
        assert_eq!(calc.history()[0], "0 ÷ 0");
    }

    #[test]
    fn test_inverted_zero_displays_zero() {
        let calc = calculator("0~");
        assert_eq!(calc.commands(), &[Command::Number(-0.0)]);
        assert_eq!(calc.display(), "0");
    }

    #[test]
    fn test_custom_display_width() {
        let mut calc = Calculator::with_config(SessionConfig {
            display_width: 4,
            ..SessionConfig::default()
        });
        calc.press_keys("12345").unwrap();
        assert_eq!(calc.display(), "1234");

        calc.press_keys("+6=").unwrap();
        assert_eq!(calc.history(), &["1234".to_string()]);
        assert_eq!(calc.display(), "1235");
    }
}
