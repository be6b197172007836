//! Base trait for intents in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - Lifecycle events (mount, input change)
/// - Network responses applied to a view
pub trait Intent: Send + 'static {}
