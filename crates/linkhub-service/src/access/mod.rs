//! Access control — validates presented tokens and records successful accesses.

pub mod recorder;
pub mod validator;

pub use recorder::AccessRecorder;
pub use validator::{AccessValidator, InvalidReason, ValidationOutcome};
