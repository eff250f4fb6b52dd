//! Persistent value binding over one named slot.
//!
//! # Responsibility
//! - Read a slot once on open, falling back to a default on any failure.
//! - Write the full serialized value on every update.
//!
//! # Invariants
//! - A failed read never surfaces to the caller; the fallback is logged.
//! - A failed write leaves the in-memory value unchanged.

mod persistent;

pub use persistent::{PersistentStore, StoreError, StoreResult};
