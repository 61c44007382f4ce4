//! Interactive calculator session.
//!
//! Wires an [`Engine`], a history [`Tape`], and a display surface into one
//! dispatch loop: classify, hand the token to the engine, apply the
//! snapshot. The session is the imperative shell around the pure core -
//! it owns the rebinding of the immutable tape and the surface writes, and
//! nothing else.

use super::input::Input;
use super::surface::DisplaySurface;
use crate::core::{Engine, Tape};

/// One interactive calculator wired to a display surface.
///
/// # Example
///
/// ```rust
/// use tally::shell::{Session, TextSurface};
///
/// let mut session = Session::new(TextSurface::new());
/// for key in ["3", "+", "2", "="] {
///     session.dispatch_key(key);
/// }
///
/// assert_eq!(session.surface().primary, "5");
/// assert_eq!(session.tape().latest().unwrap().expression, "3 + 2");
/// ```
pub struct Session<D: DisplaySurface> {
    engine: Engine,
    tape: Tape,
    surface: D,
}

impl<D: DisplaySurface> Session<D> {
    /// Create a fresh session on the given surface.
    pub fn new(surface: D) -> Self {
        Self::resume(Engine::new(), Tape::new(), surface)
    }

    /// Create a session from existing engine state and tape, e.g. after
    /// restoring a checkpoint.
    pub fn resume(engine: Engine, tape: Tape, surface: D) -> Self {
        Self {
            engine,
            tape,
            surface,
        }
    }

    /// Process one classified input: run the token through the engine and
    /// apply the snapshot, or clear the tape for the history command.
    pub fn dispatch(&mut self, input: Input) {
        match input {
            Input::Token(token) => {
                let snapshot = self.engine.handle(token);
                if let Some(record) = snapshot.record {
                    self.tape = self.tape.record(record);
                }
                self.surface.show(&snapshot.display, &snapshot.expression);
            }
            Input::ClearHistory => {
                self.tape = self.tape.clear();
            }
        }
    }

    /// Classify a key name and dispatch it. Unrecognized keys are a
    /// silent no-op.
    pub fn dispatch_key(&mut self, key: &str) {
        if let Some(input) = super::input::classify_key(key) {
            self.dispatch(input);
        }
    }

    /// Classify a button press and dispatch it. Unrecognized buttons are
    /// a silent no-op.
    pub fn dispatch_button(&mut self, action: &str, value: Option<&str>) {
        if let Some(input) = super::input::classify_button(action, value) {
            self.dispatch(input);
        }
    }

    /// The engine (pure).
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// The history tape (pure).
    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    /// The display surface.
    pub fn surface(&self) -> &D {
        &self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CalcState, ERROR_MARKER};
    use crate::shell::TextSurface;

    fn press_all(session: &mut Session<TextSurface>, keys: &[&str]) {
        for key in keys {
            session.dispatch_key(key);
        }
    }

    #[test]
    fn keys_drive_the_engine_and_surface() {
        let mut session = Session::new(TextSurface::new());
        press_all(&mut session, &["1", "2", ".", "3"]);

        assert_eq!(session.surface().primary, "12.3");
        assert_eq!(session.surface().expression, "");
    }

    #[test]
    fn completed_calculations_land_on_the_tape() {
        let mut session = Session::new(TextSurface::new());
        press_all(&mut session, &["3", "+", "2", "+", "4", "="]);

        assert_eq!(session.surface().primary, "9");
        assert_eq!(session.tape().len(), 1);

        let record = session.tape().latest().unwrap();
        assert_eq!(record.expression, "5 + 4");
        assert_eq!(record.result, "9");
    }

    #[test]
    fn division_by_zero_shows_error_and_records_it() {
        let mut session = Session::new(TextSurface::new());
        press_all(&mut session, &["8", "/", "0", "="]);

        assert_eq!(session.surface().primary, ERROR_MARKER);
        let record = session.tape().latest().unwrap();
        assert_eq!(record.expression, "8 ÷ 0");
        assert!(record.is_error());
        assert_eq!(session.engine().state(), &CalcState::new());
    }

    #[test]
    fn clear_history_leaves_calculation_state_untouched() {
        let mut session = Session::new(TextSurface::new());
        press_all(&mut session, &["3", "+", "2", "=", "+", "1"]);
        assert_eq!(session.tape().len(), 1);

        let state_before = session.engine().state().clone();
        session.dispatch_button("clear-history", None);

        assert!(session.tape().is_empty());
        assert_eq!(session.engine().state(), &state_before);
    }

    #[test]
    fn unrecognized_input_is_ignored() {
        let mut session = Session::new(TextSurface::new());
        press_all(&mut session, &["4", "Shift", "F5", "2"]);

        assert_eq!(session.surface().primary, "42");
    }

    #[test]
    fn buttons_and_keys_interleave() {
        let mut session = Session::new(TextSurface::new());
        session.dispatch_button("digit", Some("6"));
        session.dispatch_key("*");
        session.dispatch_button("digit", Some("7"));
        session.dispatch_button("equals", None);

        assert_eq!(session.surface().primary, "42");
        assert_eq!(session.tape().latest().unwrap().expression, "6 × 7");
    }

    #[test]
    fn escape_clears_the_calculation() {
        let mut session = Session::new(TextSurface::new());
        press_all(&mut session, &["9", "+", "1", "Escape"]);

        assert_eq!(session.surface().primary, "0");
        assert_eq!(session.surface().expression, "");
        assert_eq!(session.engine().state(), &CalcState::new());
    }
}
