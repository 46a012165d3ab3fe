//! Development-application records and the read-only provider abstraction the engine queries.

pub mod domain;
mod parser;
pub mod provider;
pub mod store;

pub use domain::{ApplicationRecord, DaId, DaOutcome, KNOWN_COUNCILS};
pub use provider::{RecordProvider, RecordStoreError};
pub use store::InMemoryRecordStore;
