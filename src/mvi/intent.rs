//! Base trait for intents (caller/system events) in the unidirectional data-flow core.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - Caller actions (item became visible, pull-to-refresh, error dismissed)
/// - System events (fetch completions, failures)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
