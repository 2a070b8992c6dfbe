//! The five-step wizard state machine.
//!
//! [`WizardController`] owns the cumulative form state, the step cursor, the
//! per-step validation gates, and the default-text seeding. The calendar and
//! time-slot rules the schedule step enforces live in [`calendar`] as pure
//! helpers so they are testable without a terminal.

pub mod calendar;
pub mod controller;
pub mod state;
pub mod steps;

pub use controller::{StepInput, Transition, WizardController};
pub use state::{EntryContext, EventKind, WizardState};
pub use steps::Step;
