//! Wire-facing domain model for the tree and task slices.
//!
//! # Responsibility
//! - Define the shapes exchanged with the remote services.
//! - Keep display projections (urgency, due-date formatting) next to the
//!   data they derive from.
//!
//! # Invariants
//! - Snapshots are replaced wholesale on refresh, never merged in place.
//! - Task write paths validate records before any request is issued.

pub mod task;
pub mod tree;
