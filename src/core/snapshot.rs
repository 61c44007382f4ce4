//! Renderable snapshot of the calculator after a token.
//!
//! The engine never touches a rendering surface. Every operation returns a
//! `Snapshot` value describing what must be displayed and, when a
//! calculation completed, what must be recorded; a separate shell step
//! applies it. This keeps the engine testable with no surface present.

use super::history::CalculationRecord;
use serde::{Deserialize, Serialize};

/// What the shell must render after processing one token.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Snapshot {
    /// Primary display text: the operand being typed, the latest result,
    /// or the error marker.
    pub display: String,
    /// Secondary "expression so far" text: the pending left operand and
    /// operator glyph, or empty when nothing is pending.
    pub expression: String,
    /// A completed calculation to append to the history, if this token
    /// finished one.
    pub record: Option<CalculationRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_serializes_correctly() {
        let snapshot = Snapshot {
            display: "5".to_string(),
            expression: String::new(),
            record: Some(CalculationRecord::new("3 + 2", "5")),
        };

        let json = serde_json::to_string(&snapshot).unwrap();
        let deserialized: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, deserialized);
    }
}
