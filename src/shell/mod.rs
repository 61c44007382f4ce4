//! Presentation adapter: the imperative shell around the pure core.
//!
//! This module owns everything the engine deliberately does not: turning
//! raw key names and button attributes into tokens, writing snapshot text
//! to a display surface, and appending completed calculations to the
//! history tape. It is stateless with respect to calculation semantics.

mod input;
mod session;
mod surface;

pub use input::{classify_button, classify_key, Input};
pub use session::Session;
pub use surface::{DisplaySurface, TextSurface};
