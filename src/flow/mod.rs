//! Unidirectional data flow primitives for screen state machines.
//!
//! Every screen in the app (sign-in, sign-up, onboarding) owns exactly
//! one state value and mutates it only through a reducer:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: explicit value type owned by one controller per screen
//! - **Intent**: user actions (field edits, taps) or settled async results
//! - **Reducer**: pure function that transforms state based on intents
//!
//! Side effects (gateway calls, navigation) happen in controllers
//! around the reduce call, never inside it.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::FlowState;
