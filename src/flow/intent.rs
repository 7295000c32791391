//! Base trait for intents (user/system actions) in the unidirectional flow.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (field edits, button taps)
/// - Settled asynchronous results (gateway responses)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
