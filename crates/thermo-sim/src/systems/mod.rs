//! Systems that operate on the scenario world each step.
//!
//! Systems are pure functions that take `&mut World` (or `&World` for read-only).
//! They do not own state; all state lives in components.

pub mod casualties;
pub mod detonation;
pub mod flight;
pub mod snapshot;
