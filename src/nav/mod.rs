//! Navigation transition controller.
//!
//! [`transition`] is the entire routing state machine: a decision
//! table from (screen, event) to the next [`Transition`], evaluated
//! synchronously once a gateway call settles or the user taps
//! something. [`NavHistory`] is the minimal `push`/`replace`/`back`
//! primitive the decisions are applied to.

mod history;
mod transition;

pub use history::NavHistory;
pub use transition::{transition, Route, Screen, ScreenEvent, Transition};
