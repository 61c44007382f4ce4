//! Core calculator engine types and logic.
//!
//! This module contains the pure core of the calculator:
//! - Input classification vocabulary via [`Token`]
//! - Arithmetic via [`Operator`]
//! - The single mutable state record, [`CalcState`]
//! - The input state machine itself, [`Engine`]
//! - History tracking via [`Tape`] and [`CalculationRecord`]
//!
//! Nothing here touches a rendering surface or an input device; every
//! operation returns a [`Snapshot`] value that the shell applies.

mod engine;
mod history;
mod number;
mod operator;
mod snapshot;
mod state;
mod token;

pub use engine::{Engine, ERROR_MARKER};
pub use history::{CalculationRecord, Tape};
pub use number::{format_number, DISPLAY_DECIMALS};
pub use operator::Operator;
pub use snapshot::Snapshot;
pub use state::{CalcState, Pending};
pub use token::Token;
