//! Job bookkeeping and per-job permutation production.
//!
//! Each accepted set becomes a job: a registry entry pairing a freshly
//! allocated id with the receiving half of a single-slot channel, plus a
//! spawned producer task that owns the sending half. The producer is the sole
//! writer to its channel and parks on `send` whenever the slot is full, so a
//! job never buffers more than one permutation ahead of its consumer.
//!
//! ## Structure
//!
//! - [`registry`] - id allocation and the id-to-stream mapping.
//! - [`producer`] - the background task driving the permutation engine.

pub mod producer;
pub mod registry;
