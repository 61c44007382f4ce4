//! Input token vocabulary.
//!
//! Every unit of user input - a pointer click or a key press - is classified
//! into exactly one `Token` before it reaches the engine. The engine never
//! sees raw input.

use super::operator::Operator;
use serde::{Deserialize, Serialize};

/// One classified unit of calculator input.
///
/// Tokens are immutable values; the engine consumes a stream of them and
/// mutates its state one token at a time.
///
/// # Example
///
/// ```rust
/// use tally::core::{Operator, Token};
///
/// let keystrokes = [
///     Token::Digit(4),
///     Token::Decimal,
///     Token::Digit(2),
///     Token::Operator(Operator::Multiply),
///     Token::Digit(2),
///     Token::Equals,
/// ];
///
/// assert_eq!(keystrokes[0].name(), "digit");
/// assert_eq!(keystrokes[3].name(), "operator");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Token {
    /// A digit key, value `0..=9`.
    Digit(u8),
    /// The decimal point key.
    Decimal,
    /// One of the four binary operator keys.
    Operator(Operator),
    /// The equals key: evaluate the pending operation.
    Equals,
    /// The all-clear key: reset to the initial state.
    Clear,
    /// The delete key: drop the last typed character.
    Delete,
}

impl Token {
    /// Get the token's name for display/logging.
    pub fn name(&self) -> &str {
        match self {
            Self::Digit(_) => "digit",
            Self::Decimal => "decimal",
            Self::Operator(_) => "operator",
            Self::Equals => "equals",
            Self::Clear => "clear",
            Self::Delete => "delete",
        }
    }
}
