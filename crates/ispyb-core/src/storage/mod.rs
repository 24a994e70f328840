//! Embedded storage layer.
//!
//! A sled-backed row store: one tree of rows keyed by entity and primary key,
//! per-entity auto-increment counters, and the schema bundles the store was
//! opened with.

mod config;
mod engine;
mod record;
mod transaction;

pub mod key;
pub mod value_codec;

pub use config::StorageConfig;
pub use engine::StorageEngine;
pub use key::RowKey;
pub use record::Record;
pub use transaction::{Savepoint, Transaction};
