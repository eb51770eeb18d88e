//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the snapshot store contract used by auto-save and import.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`NotFound`, `InvalidData`) in
//!   addition to DB transport errors.

pub mod snapshot_repo;
