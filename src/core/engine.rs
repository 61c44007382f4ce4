//! The calculator engine: the input state machine.
//!
//! One operation per token kind, each mutating the owned [`CalcState`] and
//! returning a [`Snapshot`] for the shell to render. The machine has a
//! single persistent rest state encoded by `(pending, overwrite)`; an
//! error is a transient display event followed by a hard reset, never a
//! lingering error state.

use super::history::CalculationRecord;
use super::number::{format_number, parse_numeral};
use super::operator::Operator;
use super::snapshot::Snapshot;
use super::state::{CalcState, Pending};
use super::token::Token;

/// Display and history text substituted for any non-finite result.
pub const ERROR_MARKER: &str = "Error";

/// The calculator engine.
///
/// Owns all mutable state; every token is fully processed before the next
/// is accepted. Construct one per calculator instance.
///
/// # Example
///
/// ```rust
/// use tally::core::{Engine, Operator, Token};
///
/// let mut engine = Engine::new();
/// engine.handle(Token::Digit(3));
/// engine.handle(Token::Operator(Operator::Add));
/// engine.handle(Token::Digit(2));
/// let snapshot = engine.handle(Token::Equals);
///
/// assert_eq!(snapshot.display, "5");
/// assert_eq!(snapshot.record.unwrap().expression, "3 + 2");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Engine {
    state: CalcState,
}

impl Engine {
    /// Create an engine in the initial state.
    pub fn new() -> Self {
        Self {
            state: CalcState::new(),
        }
    }

    /// Create an engine from existing state, e.g. a restored checkpoint.
    pub fn from_state(state: CalcState) -> Self {
        Self { state }
    }

    /// Current state (pure).
    pub fn state(&self) -> &CalcState {
        &self.state
    }

    /// The operand text as it would appear on the display (pure).
    pub fn current_text(&self) -> &str {
        &self.state.current
    }

    /// Process one token, dispatching to the matching operation.
    pub fn handle(&mut self, token: Token) -> Snapshot {
        match token {
            Token::Digit(d) => self.digit(d),
            Token::Decimal => self.decimal_point(),
            Token::Operator(op) => self.choose_operator(op),
            Token::Equals => self.equals(),
            Token::Clear => self.clear(),
            Token::Delete => self.delete_last(),
        }
    }

    /// A digit key. Always succeeds: replaces the operand when the
    /// overwrite flag is set, replaces a bare `"0"`, otherwise appends.
    pub fn digit(&mut self, digit: u8) -> Snapshot {
        // Classification only produces 0..=9; clamping keeps the numeral
        // invariant even for hand-built tokens.
        let ch = char::from(b'0' + digit.min(9));
        if self.state.overwrite {
            self.state.current = ch.to_string();
            self.state.overwrite = false;
        } else if self.state.current == "0" {
            self.state.current = ch.to_string();
        } else {
            self.state.current.push(ch);
        }
        self.snapshot(None)
    }

    /// The decimal point key. A duplicate point is silently ignored -
    /// policy, not an error.
    pub fn decimal_point(&mut self) -> Snapshot {
        if self.state.overwrite {
            self.state.current = "0.".to_string();
            self.state.overwrite = false;
        } else if !self.state.current.contains('.') {
            self.state.current.push('.');
        }
        self.snapshot(None)
    }

    /// The delete key. The first delete after a fresh result or operator
    /// clears the slate rather than editing stale text.
    pub fn delete_last(&mut self) -> Snapshot {
        if self.state.overwrite {
            self.state.current = "0".to_string();
            self.state.overwrite = false;
        } else if self.state.current.len() <= 1
            || (self.state.current.len() == 2 && self.state.current.starts_with('-'))
        {
            self.state.current = "0".to_string();
        } else {
            self.state.current.pop();
        }
        self.snapshot(None)
    }

    /// An operator key.
    ///
    /// When an operation is already pending and a new operand has been
    /// typed since (overwrite flag cleared), the pending operation is
    /// evaluated first - left-to-right chaining, so `3 + 2 +` shows `5`
    /// before continuing. An operator pressed twice in a row replaces the
    /// previous operator without re-evaluating.
    pub fn choose_operator(&mut self, operator: Operator) -> Snapshot {
        let n = parse_numeral(&self.state.current);
        self.state.pending = match self.state.pending {
            Some(pending) if !self.state.overwrite => {
                let chained = pending.operator.apply(pending.operand, n);
                self.state.current = format_number(chained);
                Some(Pending {
                    operand: chained,
                    operator,
                })
            }
            _ => Some(Pending {
                operand: n,
                operator,
            }),
        };
        self.state.overwrite = true;
        self.snapshot(None)
    }

    /// The equals key.
    ///
    /// A no-op when nothing is pending: state and snapshot are unchanged.
    /// A non-finite result displays the error marker, records it on the
    /// tape, and resets exactly as [`clear`](Self::clear) does.
    pub fn equals(&mut self) -> Snapshot {
        let Some(pending) = self.state.pending else {
            return self.snapshot(None);
        };
        let a = pending.operand;
        let b = parse_numeral(&self.state.current);
        let result = pending.operator.apply(a, b);
        let expression = format!(
            "{} {} {}",
            format_number(a),
            pending.operator.glyph(),
            format_number(b)
        );

        if !result.is_finite() {
            let record = CalculationRecord::new(expression, ERROR_MARKER);
            self.state.reset();
            let mut snapshot = self.snapshot(Some(record));
            snapshot.display = ERROR_MARKER.to_string();
            return snapshot;
        }

        let formatted = format_number(result);
        self.state.current = formatted.clone();
        self.state.pending = None;
        self.state.overwrite = true;
        self.snapshot(Some(CalculationRecord::new(expression, formatted)))
    }

    /// The all-clear key: reset to the initial state. Idempotent.
    pub fn clear(&mut self) -> Snapshot {
        self.state.reset();
        self.snapshot(None)
    }

    fn snapshot(&self, record: Option<CalculationRecord>) -> Snapshot {
        Snapshot {
            display: self.state.current.clone(),
            expression: match self.state.pending {
                Some(pending) => {
                    format!("{} {}", format_number(pending.operand), pending.operator.glyph())
                }
                None => String::new(),
            },
            record,
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
