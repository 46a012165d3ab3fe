//! Council development-application intelligence: record access, comparable ranking,
//! approval-likelihood scoring, and the insight and report views built on top of them.

pub mod insights;
pub mod records;
pub mod report;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use records::{
    ApplicationRecord, DaId, DaOutcome, InMemoryRecordStore, RecordProvider, RecordStoreError,
    KNOWN_COUNCILS,
};
pub use router::planning_router;
pub use scoring::{approval_score, rank_neighbors, similarity, SimilarityConfig, SimilarityResult};
pub use service::{DaDetail, DaFilter, DaListing, PlanningService, PlanningServiceError};
