use serde::{Deserialize, Serialize};
use tracing::debug;

use super::super::records::{ApplicationRecord, DaId, DaOutcome, RecordProvider};
use super::config::SimilarityConfig;
use super::similarity::similarity_with;

/// Number of comparables considered when none is requested explicitly.
pub const DEFAULT_NEIGHBOR_LIMIT: usize = 5;

/// Score reported when there is nothing to compare against.
pub const NEUTRAL_SCORE: u8 = 50;

/// Comparable application projected for presentation, with its rounded similarity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityResult {
    pub id: DaId,
    pub address: String,
    pub council: String,
    #[serde(rename = "DA_outcome")]
    pub outcome: DaOutcome,
    pub key_conditions: Vec<String>,
    pub similarity_score: f64,
}

impl SimilarityResult {
    fn from_candidate(candidate: &ApplicationRecord, similarity_score: f64) -> Self {
        Self {
            id: candidate.id.clone(),
            address: candidate.address.clone(),
            council: candidate.council.clone(),
            outcome: candidate.outcome.clone(),
            key_conditions: candidate.key_conditions.clone(),
            similarity_score,
        }
    }
}

/// Contribution of a neighbor's determination to the approval likelihood.
pub fn outcome_value(outcome: &DaOutcome) -> f64 {
    match outcome {
        DaOutcome::Approved => 1.0,
        DaOutcome::Deferred => 0.5,
        DaOutcome::UnderAssessment => 0.3,
        DaOutcome::Refused => 0.0,
        DaOutcome::Unrecognized(_) => 0.3,
    }
}

/// Round the stored binary value to two decimals, ties to even.
///
/// Decimal formatting rounds the exact value, so `0.49499..` stays `0.49` instead of
/// drifting up after a lossy `* 100.0`.
fn round_to_hundredths(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}

/// Most similar applications from the target's council, best first.
///
/// An unknown `target_id` yields an empty list. Equal scores keep the provider's pool order.
pub fn rank_neighbors<P>(
    provider: &P,
    target_id: &str,
    limit: usize,
    config: &SimilarityConfig,
) -> Vec<SimilarityResult>
where
    P: RecordProvider + ?Sized,
{
    let Some(target) = provider.get_by_id(target_id) else {
        debug!(target_id, "no record to rank neighbors for");
        return Vec::new();
    };

    let mut neighbors: Vec<SimilarityResult> = provider
        .list_by_council(&target.council)
        .into_iter()
        .filter(|candidate| candidate.id != target.id)
        .map(|candidate| {
            let score = round_to_hundredths(similarity_with(config, target, candidate));
            SimilarityResult::from_candidate(candidate, score)
        })
        .collect();

    // `sort_by` is stable, which keeps ties in pool order.
    neighbors.sort_by(|a, b| b.similarity_score.total_cmp(&a.similarity_score));
    neighbors.truncate(limit);

    debug!(
        target_id,
        council = %target.council,
        neighbors = neighbors.len(),
        "ranked comparable applications"
    );

    neighbors
}

/// Similarity-weighted mean of neighbor outcomes, scaled to 0..=100.
pub fn aggregate_outcomes(neighbors: &[SimilarityResult]) -> u8 {
    if neighbors.is_empty() {
        return NEUTRAL_SCORE;
    }

    let (weighted_sum, weight_total) =
        neighbors
            .iter()
            .fold((0.0_f64, 0.0_f64), |(sum, total), neighbor| {
                let weight = neighbor.similarity_score;
                (
                    sum + weight * outcome_value(&neighbor.outcome),
                    total + weight,
                )
            });

    if weight_total == 0.0 {
        return NEUTRAL_SCORE;
    }

    let raw = weighted_sum / weight_total;
    (raw * 100.0).round_ties_even().clamp(0.0, 100.0) as u8
}

/// Approval likelihood for `target_id` derived from its top comparables.
pub fn approval_score<P>(provider: &P, target_id: &str, config: &SimilarityConfig) -> u8
where
    P: RecordProvider + ?Sized,
{
    let neighbors = rank_neighbors(provider, target_id, DEFAULT_NEIGHBOR_LIMIT, config);
    let score = aggregate_outcomes(&neighbors);
    debug!(target_id, score, "computed approval likelihood");
    score
}
