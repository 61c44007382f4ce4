//! Tally: an interactive arithmetic calculator engine
//!
//! Tally is built around a "pure core, imperative shell" split. The core
//! is an input state machine: it consumes a stream of classified tokens -
//! digits, decimal point, operators, equals, clear, delete - and after
//! each one returns a renderable snapshot, with no rendering surface or
//! input device anywhere in sight. The shell classifies raw input, applies
//! snapshots to a display, and keeps the history tape.
//!
//! # Core Concepts
//!
//! - **Token**: one classified unit of input, handled fully before the next
//! - **Engine**: the state machine; one operation per token kind
//! - **Snapshot**: what to display and record after a token
//! - **Tape**: newest-first history of completed calculations
//!
//! # Example
//!
//! ```rust
//! use tally::core::{Engine, Operator, Tape, Token};
//!
//! let mut engine = Engine::new();
//! let mut tape = Tape::new();
//!
//! // 3 + 2 + 4 =   (the second `+` evaluates 3 + 2 on the spot)
//! for token in [
//!     Token::Digit(3),
//!     Token::Operator(Operator::Add),
//!     Token::Digit(2),
//!     Token::Operator(Operator::Add),
//!     Token::Digit(4),
//!     Token::Equals,
//! ] {
//!     if let Some(record) = engine.handle(token).record {
//!         tape = tape.record(record);
//!     }
//! }
//!
//! assert_eq!(engine.current_text(), "9");
//! let record = tape.latest().unwrap();
//! assert_eq!(record.expression, "5 + 4");
//! assert_eq!(record.result, "9");
//! ```

pub mod checkpoint;
pub mod core;
pub mod shell;

// Re-export commonly used types
pub use checkpoint::{Checkpoint, CheckpointError};
pub use core::{
    CalcState, CalculationRecord, Engine, Operator, Snapshot, Tape, Token, ERROR_MARKER,
};
pub use shell::{classify_button, classify_key, DisplaySurface, Input, Session, TextSurface};
