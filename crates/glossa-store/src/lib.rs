//! # glossa-store
//!
//! Persistence of the selected language: a single scalar slot, SQLite-backed
//! or in memory.

pub mod memory;
pub mod sqlite;

pub use memory::MemorySelectionStore;
pub use sqlite::SqliteSelectionStore;
