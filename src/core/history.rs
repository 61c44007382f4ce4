//! Calculation history tracking.
//!
//! Completed calculations are recorded on a tape: an append-only,
//! newest-first list. The tape is a value, not a shared sink - `record`
//! and `clear` return a new tape and the owning shell rebinds, keeping the
//! core free of mutation-at-a-distance.

use super::engine::ERROR_MARKER;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Record of one completed calculation.
///
/// Records are immutable values. `result` holds the formatted result text,
/// or the error marker when the calculation produced a non-finite value.
///
/// # Example
///
/// ```rust
/// use tally::core::CalculationRecord;
///
/// let record = CalculationRecord::new("3 + 2", "5");
/// assert_eq!(record.expression, "3 + 2");
/// assert_eq!(record.result, "5");
/// assert!(!record.is_error());
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct CalculationRecord {
    /// Stable identifier, usable as a history-list key.
    pub id: Uuid,
    /// The evaluated expression, e.g. `"3 + 2"`.
    pub expression: String,
    /// Formatted result text, or the error marker.
    pub result: String,
    /// When the calculation completed.
    pub computed_at: DateTime<Utc>,
}

impl CalculationRecord {
    /// Create a record, stamping it with a fresh id and the current time.
    pub fn new(expression: impl Into<String>, result: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            expression: expression.into(),
            result: result.into(),
            computed_at: Utc::now(),
        }
    }

    /// Whether this calculation ended in the error marker.
    pub fn is_error(&self) -> bool {
        self.result == ERROR_MARKER
    }
}

/// Newest-first list of completed calculations.
///
/// The tape is append-only and uncapped. `record` returns a new tape with
/// the entry prepended rather than mutating in place.
///
/// # Example
///
/// ```rust
/// use tally::core::{CalculationRecord, Tape};
///
/// let tape = Tape::new();
/// let tape = tape.record(CalculationRecord::new("3 + 2", "5"));
/// let tape = tape.record(CalculationRecord::new("5 + 4", "9"));
///
/// assert_eq!(tape.len(), 2);
/// assert_eq!(tape.latest().unwrap().expression, "5 + 4");
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Tape {
    records: Vec<CalculationRecord>,
}

impl Default for Tape {
    fn default() -> Self {
        Self::new()
    }
}

impl Tape {
    /// Create a new empty tape.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Prepend a record, returning a new tape. The original is unchanged.
    pub fn record(&self, record: CalculationRecord) -> Self {
        let mut records = Vec::with_capacity(self.records.len() + 1);
        records.push(record);
        records.extend(self.records.iter().cloned());
        Self { records }
    }

    /// The clear-all command: returns an empty tape.
    pub fn clear(&self) -> Self {
        Self::new()
    }

    /// All records, newest first.
    pub fn records(&self) -> &[CalculationRecord] {
        &self.records
    }

    /// The most recently recorded calculation.
    pub fn latest(&self) -> Option<&CalculationRecord> {
        self.records.first()
    }

    /// Number of recorded calculations.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the tape holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_tape_is_empty() {
        let tape = Tape::new();
        assert!(tape.is_empty());
        assert_eq!(tape.len(), 0);
        assert!(tape.latest().is_none());
    }

    #[test]
    fn record_prepends_newest_first() {
        let tape = Tape::new()
            .record(CalculationRecord::new("3 + 2", "5"))
            .record(CalculationRecord::new("5 + 4", "9"));

        assert_eq!(tape.records()[0].expression, "5 + 4");
        assert_eq!(tape.records()[1].expression, "3 + 2");
        assert_eq!(tape.latest().unwrap().result, "9");
    }

    #[test]
    fn record_is_immutable() {
        let tape = Tape::new();
        let recorded = tape.record(CalculationRecord::new("1 + 1", "2"));

        assert_eq!(tape.len(), 0);
        assert_eq!(recorded.len(), 1);
    }

    #[test]
    fn clear_returns_empty_tape() {
        let tape = Tape::new()
            .record(CalculationRecord::new("3 + 2", "5"))
            .record(CalculationRecord::new("8 ÷ 0", ERROR_MARKER));

        let cleared = tape.clear();
        assert!(cleared.is_empty());
        assert_eq!(tape.len(), 2);
    }

    #[test]
    fn error_records_are_identified() {
        let ok = CalculationRecord::new("3 + 2", "5");
        let err = CalculationRecord::new("8 ÷ 0", ERROR_MARKER);

        assert!(!ok.is_error());
        assert!(err.is_error());
    }

    #[test]
    fn records_carry_distinct_ids() {
        let a = CalculationRecord::new("1 + 1", "2");
        let b = CalculationRecord::new("1 + 1", "2");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn tape_serializes_correctly() {
        let tape = Tape::new().record(CalculationRecord::new("6 × 7", "42"));

        let json = serde_json::to_string(&tape).unwrap();
        let deserialized: Tape = serde_json::from_str(&json).unwrap();
        assert_eq!(tape, deserialized);
    }
}
