use super::common::*;
use crate::planning::records::DaOutcome;
use crate::planning::scoring::{
    approval_score, rank_neighbors, SimilarityConfig, DEFAULT_NEIGHBOR_LIMIT, NEUTRAL_SCORE,
};

fn ids(results: &[crate::planning::SimilarityResult]) -> Vec<&str> {
    results.iter().map(|result| result.id.as_str()).collect()
}

#[test]
fn ranks_same_council_neighbors_best_first() {
    let pool = scoring_pool();
    let config = SimilarityConfig::default();

    let neighbors = rank_neighbors(pool.as_slice(), "T", DEFAULT_NEIGHBOR_LIMIT, &config);

    assert_eq!(ids(&neighbors), vec!["N-09", "N-06", "N-03"]);
    let scores: Vec<f64> = neighbors.iter().map(|n| n.similarity_score).collect();
    assert_eq!(scores, vec![0.9, 0.6, 0.3]);
    assert!(neighbors.iter().all(|n| n.council == "Blacktown"));
}

#[test]
fn approval_score_matches_weighted_outcomes() {
    let pool = scoring_pool();

    assert_eq!(approval_score(pool.as_slice(), "T", &SimilarityConfig::default()), 58);
}

#[test]
fn unknown_target_yields_no_neighbors_and_neutral_score() {
    let pool = scoring_pool();
    let config = SimilarityConfig::default();

    assert!(rank_neighbors(pool.as_slice(), "DA-MISSING", 5, &config).is_empty());
    assert_eq!(approval_score(pool.as_slice(), "DA-MISSING", &config), NEUTRAL_SCORE);
}

#[test]
fn lone_council_record_scores_neutral() {
    let pool = scoring_pool();

    assert_eq!(
        approval_score(pool.as_slice(), "OUT", &SimilarityConfig::default()),
        NEUTRAL_SCORE
    );
}

#[test]
fn limit_truncates_results() {
    let pool = scoring_pool();
    let config = SimilarityConfig::default();

    assert_eq!(ids(&rank_neighbors(pool.as_slice(), "T", 2, &config)), vec!["N-09", "N-06"]);
    assert!(rank_neighbors(pool.as_slice(), "T", 0, &config).is_empty());
}

#[test]
fn ties_keep_pool_order() {
    let pool = vec![
        record("T", "Hornsby", "R2", "500 sqm", "9m", "0.5:1", DaOutcome::Approved),
        record("C", "Hornsby", "R2", "700 sqm", "9m", "0.5:1", DaOutcome::Refused),
        record("A", "Hornsby", "R3", "500 sqm", "9m", "0.5:1", DaOutcome::Approved),
        record("B", "Hornsby", "R2", "500 sqm", "9m", "0.5:1", DaOutcome::Deferred),
        record("D", "Hornsby", "R3", "500 sqm", "9m", "0.5:1", DaOutcome::Refused),
        record("E", "Hornsby", "R2", "700 sqm", "9m", "0.5:1", DaOutcome::Approved),
    ];

    let neighbors = rank_neighbors(pool.as_slice(), "T", 10, &SimilarityConfig::default());

    assert_eq!(ids(&neighbors), vec!["B", "C", "E", "A", "D"]);
    assert_eq!(neighbors[1].similarity_score, neighbors[2].similarity_score);
    assert_eq!(neighbors[3].similarity_score, neighbors[4].similarity_score);
}

#[test]
fn ranking_is_idempotent() {
    let store = store(scoring_pool());
    let config = SimilarityConfig::default();

    let first = rank_neighbors(store.as_ref(), "T", 5, &config);
    let second = rank_neighbors(store.as_ref(), "T", 5, &config);

    assert_eq!(first, second);
    assert_eq!(
        approval_score(store.as_ref(), "T", &config),
        approval_score(store.as_ref(), "T", &config)
    );
}

#[test]
fn neighbors_project_candidate_fields() {
    let pool = scoring_pool();

    let neighbors = rank_neighbors(pool.as_slice(), "T", 1, &SimilarityConfig::default());
    let best = &neighbors[0];

    assert_eq!(best.address, "N-09 Test Parade");
    assert_eq!(best.outcome, DaOutcome::Approved);
    assert_eq!(best.key_conditions, vec!["N-09 condition".to_string()]);
}

#[test]
fn scores_just_below_a_half_hundredth_round_down() {
    let pool = vec![
        record("T", "Hornsby", "B4", "0 sqm", "0m", "0:1", DaOutcome::UnderAssessment),
        record("C", "Hornsby", "R2", "0 sqm", "18m", "0.5:1", DaOutcome::Approved),
    ];

    let neighbors = rank_neighbors(pool.as_slice(), "T", 5, &SimilarityConfig::default());

    assert_eq!(neighbors[0].similarity_score, 0.49);
}
