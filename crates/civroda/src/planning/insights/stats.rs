use serde::Serialize;

use super::super::records::{ApplicationRecord, DaOutcome, RecordProvider, KNOWN_COUNCILS};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CouncilStats {
    pub name: String,
    pub total_das: usize,
    pub approved: usize,
    pub refused: usize,
    pub deferred: usize,
    pub under_assessment: usize,
    pub approval_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioStats {
    pub total_das: usize,
    pub overall_approval_rate: f64,
    pub councils: Vec<CouncilStats>,
}

/// Percentage of `approved` in `total`, to one decimal place.
fn approval_rate(approved: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }

    let pct = approved as f64 / total as f64 * 100.0;
    (pct * 10.0).round() / 10.0
}

fn count(records: &[&ApplicationRecord], outcome: &DaOutcome) -> usize {
    records
        .iter()
        .filter(|record| &record.outcome == outcome)
        .count()
}

pub fn council_stats<P>(provider: &P, council: &str) -> CouncilStats
where
    P: RecordProvider + ?Sized,
{
    let records = provider.list_by_council(council);
    let total = records.len();
    let approved = count(&records, &DaOutcome::Approved);

    CouncilStats {
        name: council.to_string(),
        total_das: total,
        approved,
        refused: count(&records, &DaOutcome::Refused),
        deferred: count(&records, &DaOutcome::Deferred),
        under_assessment: count(&records, &DaOutcome::UnderAssessment),
        approval_rate: approval_rate(approved, total),
    }
}

pub fn portfolio_stats<P>(provider: &P) -> PortfolioStats
where
    P: RecordProvider + ?Sized,
{
    let records = provider.all();
    let total = records.len();
    let approved = count(&records, &DaOutcome::Approved);

    PortfolioStats {
        total_das: total,
        overall_approval_rate: approval_rate(approved, total),
        councils: KNOWN_COUNCILS
            .iter()
            .map(|council| council_stats(provider, council))
            .collect(),
    }
}
