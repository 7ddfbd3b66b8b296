//! Channel registry layer.
//!
//! Owns subscriber lists, unique-event records and (in strict mode) the kind each channel
//! was first triggered with. All state lives in one immutable [`channel_table`] snapshot
//! swapped atomically by the [`channel_registry`] owner.

pub(crate) mod channel_registry;
pub(crate) mod channel_table;
