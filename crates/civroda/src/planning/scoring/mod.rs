//! Comparable-application ranking and approval-likelihood scoring.
//!
//! The comparator in [`similarity`] scores two records against the weighted rubric in
//! [`SimilarityConfig`]; [`ranking`] picks a record's nearest neighbors within its council
//! and folds their determinations into a 0 to 100 likelihood. Everything here is a pure
//! function of its inputs, so callers can share a record pool across threads freely.

mod config;
pub mod ranking;
pub mod similarity;

pub use config::{FeatureRange, SimilarityConfig};
pub use ranking::{
    aggregate_outcomes, approval_score, outcome_value, rank_neighbors, SimilarityResult,
    DEFAULT_NEIGHBOR_LIMIT, NEUTRAL_SCORE,
};
pub use similarity::{
    numeric_similarity, parse_magnitude, similarity, similarity_with, zoning_similarity,
};
