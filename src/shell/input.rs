//! Raw input classification.
//!
//! Translates what input devices actually deliver - key names from a
//! keyboard, action/value data attributes from clickable buttons - into
//! the engine's token vocabulary. Unrecognized input classifies to `None`
//! and is dropped without error.

use crate::core::{Operator, Token};

/// One classified input: either a token for the engine, or the
/// clear-history command, which is routed straight to the tape and never
/// reaches the engine.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Input {
    /// A token for the engine.
    Token(Token),
    /// Clear the history tape; calculation state is untouched.
    ClearHistory,
}

/// Classify a key name as delivered by a keyboard event source.
///
/// `"0"`-`"9"`, `"."`/`","`, the ASCII operator keys, `"Enter"`/`"="`,
/// `"Backspace"`, and `"Escape"` are recognized; anything else returns
/// `None`.
///
/// # Example
///
/// ```rust
/// use tally::core::{Operator, Token};
/// use tally::shell::{classify_key, Input};
///
/// assert_eq!(classify_key("7"), Some(Input::Token(Token::Digit(7))));
/// assert_eq!(
///     classify_key("*"),
///     Some(Input::Token(Token::Operator(Operator::Multiply)))
/// );
/// assert_eq!(classify_key("F5"), None);
/// ```
pub fn classify_key(key: &str) -> Option<Input> {
    let mut chars = key.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if let Some(d) = c.to_digit(10) {
            return Some(Input::Token(Token::Digit(d as u8)));
        }
    }
    match key {
        "." | "," => Some(Input::Token(Token::Decimal)),
        "+" => Some(Input::Token(Token::Operator(Operator::Add))),
        "-" => Some(Input::Token(Token::Operator(Operator::Subtract))),
        "*" | "x" => Some(Input::Token(Token::Operator(Operator::Multiply))),
        "/" => Some(Input::Token(Token::Operator(Operator::Divide))),
        "=" | "Enter" => Some(Input::Token(Token::Equals)),
        "Backspace" => Some(Input::Token(Token::Delete)),
        "Escape" => Some(Input::Token(Token::Clear)),
        _ => None,
    }
}

/// Classify a button press by its data attributes.
///
/// Buttons carry an `action` attribute and, for digits and operators, a
/// `value`: `("digit", Some("7"))`, `("operator", Some("add"))`,
/// `("decimal", None)`, `("equals", None)`, `("clear", None)`,
/// `("delete", None)`, `("clear-history", None)`. Unknown actions or
/// values return `None`.
pub fn classify_button(action: &str, value: Option<&str>) -> Option<Input> {
    match action {
        "digit" => {
            let mut chars = value?.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => c
                    .to_digit(10)
                    .map(|d| Input::Token(Token::Digit(d as u8))),
                _ => None,
            }
        }
        "decimal" => Some(Input::Token(Token::Decimal)),
        "operator" => {
            let operator = match value? {
                "add" => Operator::Add,
                "subtract" => Operator::Subtract,
                "multiply" => Operator::Multiply,
                "divide" => Operator::Divide,
                _ => return None,
            };
            Some(Input::Token(Token::Operator(operator)))
        }
        "equals" => Some(Input::Token(Token::Equals)),
        "clear" => Some(Input::Token(Token::Clear)),
        "delete" => Some(Input::Token(Token::Delete)),
        "clear-history" => Some(Input::ClearHistory),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_keys_classify_to_their_value() {
        for d in 0..=9u8 {
            let key = d.to_string();
            assert_eq!(classify_key(&key), Some(Input::Token(Token::Digit(d))));
        }
    }

    #[test]
    fn operator_keys_classify_to_operators() {
        assert_eq!(
            classify_key("+"),
            Some(Input::Token(Token::Operator(Operator::Add)))
        );
        assert_eq!(
            classify_key("-"),
            Some(Input::Token(Token::Operator(Operator::Subtract)))
        );
        assert_eq!(
            classify_key("x"),
            Some(Input::Token(Token::Operator(Operator::Multiply)))
        );
        assert_eq!(
            classify_key("/"),
            Some(Input::Token(Token::Operator(Operator::Divide)))
        );
    }

    #[test]
    fn command_keys_classify_to_commands() {
        assert_eq!(classify_key("Enter"), Some(Input::Token(Token::Equals)));
        assert_eq!(classify_key("="), Some(Input::Token(Token::Equals)));
        assert_eq!(classify_key("Backspace"), Some(Input::Token(Token::Delete)));
        assert_eq!(classify_key("Escape"), Some(Input::Token(Token::Clear)));
        assert_eq!(classify_key(","), Some(Input::Token(Token::Decimal)));
    }

    #[test]
    fn unrecognized_keys_are_dropped() {
        assert_eq!(classify_key("F5"), None);
        assert_eq!(classify_key("Shift"), None);
        assert_eq!(classify_key("q"), None);
        assert_eq!(classify_key(""), None);
        assert_eq!(classify_key("10"), None);
    }

    #[test]
    fn buttons_classify_by_data_attributes() {
        assert_eq!(
            classify_button("digit", Some("4")),
            Some(Input::Token(Token::Digit(4)))
        );
        assert_eq!(
            classify_button("operator", Some("divide")),
            Some(Input::Token(Token::Operator(Operator::Divide)))
        );
        assert_eq!(
            classify_button("decimal", None),
            Some(Input::Token(Token::Decimal))
        );
        assert_eq!(
            classify_button("equals", None),
            Some(Input::Token(Token::Equals))
        );
        assert_eq!(
            classify_button("clear", None),
            Some(Input::Token(Token::Clear))
        );
        assert_eq!(
            classify_button("delete", None),
            Some(Input::Token(Token::Delete))
        );
    }

    #[test]
    fn clear_history_bypasses_the_token_vocabulary() {
        assert_eq!(
            classify_button("clear-history", None),
            Some(Input::ClearHistory)
        );
    }

    #[test]
    fn malformed_buttons_are_dropped() {
        assert_eq!(classify_button("digit", None), None);
        assert_eq!(classify_button("digit", Some("42")), None);
        assert_eq!(classify_button("digit", Some("a")), None);
        assert_eq!(classify_button("operator", Some("modulo")), None);
        assert_eq!(classify_button("operator", None), None);
        assert_eq!(classify_button("memory-store", Some("1")), None);
    }
}
