//! `pawhaven-store` — the reminder persistence boundary.
//!
//! The care core performs no I/O of its own; it operates on whatever
//! collection the caller hands it. [`ReminderStore`] is the contract the
//! persistence collaborator implements, and [`MemoryStore`] is the
//! in-memory reference implementation backing tests and the application's
//! cache layer. Callers load, run the scheduler over the collection, and
//! save the mutated result — sequencing those writes is their job, not the
//! core's.

pub mod error;
pub mod memory;
pub mod store;

pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use store::ReminderStore;
