#![forbid(unsafe_code)]

//! Domain types for SmartCards study sessions.
//!
//! Everything in this crate is synchronous and free of I/O:
//! - flashcard and quiz question models, plus parsing of generator output
//! - the session error taxonomy
//! - the `TransitionGate` used to defer flashcard navigation commits
//! - a `Clock` so that time-dependent code stays deterministic in tests

pub mod error;
pub mod model;
pub mod time;
pub mod transition;

pub use error::{SessionError, TransitionRejection};
pub use time::Clock;
pub use transition::{Direction, TransitionGate, TransitionPhase, TransitionTicket};
