//! Structured logging vocabulary shared by the bus and its tooling.
//!
//! Library code emits `tracing` events with an `event` field taken from [`events`] and
//! never installs a global subscriber; binaries and tests initialize one at their boundary.

pub mod events;
pub mod fields;
