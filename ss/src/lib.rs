//! SessionStore - injectable in-memory record registry
//!
//! A small, concurrency-safe registry for records keyed by unique id.
//! Callers own the store explicitly and hand clones of the handle to
//! whatever needs lookup access, so tests can instantiate independent
//! registries instead of sharing process-global state.
//!
//! # Core Guarantees
//!
//! - **Atomic insertion**: inserting an already-present id is an error,
//!   never a silent overwrite
//! - **Snapshot reads**: `get`/`list` return clones; no lock is held
//!   across caller code
//! - **Collision-free ids**: [`new_record_id`] mints UUID v7 identifiers,
//!   safe under concurrent callers

mod store;

pub use store::{Record, Store, StoreError, new_record_id};
