//! Calculator state.
//!
//! The complete mutable state of one calculator instance. There are no
//! process-wide globals: state is an explicitly constructed value owned by
//! an [`Engine`](super::engine::Engine), so multiple independent
//! calculators can coexist and tests need no shared fixtures.

use super::number::is_valid_numeral;
use super::operator::Operator;
use serde::{Deserialize, Serialize};

/// A pending binary operation: the left operand together with the operator
/// awaiting its right operand.
///
/// The two always travel together. Holding them as one optional unit makes
/// "operand without operator" (and vice versa) unrepresentable.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct Pending {
    /// The already-parsed left operand.
    pub operand: f64,
    /// The operator waiting for its right operand.
    pub operator: Operator,
}

/// The calculator's complete mutable state.
///
/// # Example
///
/// ```rust
/// use tally::core::CalcState;
///
/// let state = CalcState::new();
/// assert_eq!(state.current, "0");
/// assert!(state.pending.is_none());
/// assert!(state.overwrite);
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct CalcState {
    /// The operand currently being typed, kept as text so partial input
    /// like `"12."` round-trips exactly. Always a valid partial-or-complete
    /// decimal numeral; never empty.
    pub current: String,
    /// The pending binary operation, if any.
    pub pending: Option<Pending>,
    /// When true, the next digit replaces `current` instead of extending
    /// it. Set after an operator choice, after equals, after an error
    /// reset, and at construction.
    pub overwrite: bool,
}

impl CalcState {
    /// Create the initial state: `"0"` on the display, nothing pending.
    pub fn new() -> Self {
        Self {
            current: "0".to_string(),
            pending: None,
            overwrite: true,
        }
    }

    /// Reset to the initial state. This is the `clear` semantics; calling
    /// it on an already-initial state is a no-op.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Check the operand-text invariant. Engine mutations always preserve
    /// it; this exists for validating state that arrives from outside,
    /// such as a restored checkpoint.
    pub fn is_well_formed(&self) -> bool {
        is_valid_numeral(&self.current)
    }
}

impl Default for CalcState {
    fn default() -> Self {
        Self::new()
    }
}
