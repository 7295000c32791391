//! Base trait for screen state in the unidirectional flow.

/// Marker trait for screen state objects.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (all data needed to render the screen)
/// - Comparable (PartialEq for detecting changes)
pub trait FlowState: Clone + PartialEq + Default + Send + 'static {}
