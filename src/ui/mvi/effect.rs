//! Base trait for effects in MVI architecture.

/// Marker trait for effect objects.
///
/// Effects are produced by reducers alongside the new state. They are
/// consumed once by whoever drives the reducer and are never part of state.
pub trait Effect: Send + 'static {}

/// Reducers that never emit effects use `Infallible` as their effect type.
impl Effect for std::convert::Infallible {}
