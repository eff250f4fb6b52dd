//! Repository layer over durable storage.
//!
//! # Responsibility
//! - Define the key-value slot contract used by the persistent store.
//! - Keep SQL details out of store/service code.

pub mod slot_repo;
