use std::collections::HashSet;

use serde::Serialize;

use super::super::records::{DaOutcome, RecordProvider};

const MAX_THEMES: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CouncilThemes {
    pub council: String,
    pub refusal_themes: Vec<String>,
    pub consent_conditions: Vec<String>,
}

/// First distinct key conditions across a council's records with the given outcome.
fn condition_themes<P>(
    provider: &P,
    council: &str,
    outcome: &DaOutcome,
    fallback: &str,
) -> Vec<String>
where
    P: RecordProvider + ?Sized,
{
    let records: Vec<_> = provider
        .list_by_council(council)
        .into_iter()
        .filter(|record| &record.outcome == outcome)
        .collect();
    if records.is_empty() {
        return vec![fallback.to_string()];
    }

    let mut seen = HashSet::new();
    records
        .iter()
        .flat_map(|record| record.key_conditions.iter())
        .filter(|condition| seen.insert(condition.as_str()))
        .take(MAX_THEMES)
        .cloned()
        .collect()
}

pub fn refusal_themes<P>(provider: &P, council: &str) -> Vec<String>
where
    P: RecordProvider + ?Sized,
{
    condition_themes(
        provider,
        council,
        &DaOutcome::Refused,
        "No refusal data available for this council.",
    )
}

pub fn consent_condition_themes<P>(provider: &P, council: &str) -> Vec<String>
where
    P: RecordProvider + ?Sized,
{
    condition_themes(
        provider,
        council,
        &DaOutcome::Approved,
        "No approval data available for this council.",
    )
}

pub fn council_themes<P>(provider: &P, council: &str) -> CouncilThemes
where
    P: RecordProvider + ?Sized,
{
    CouncilThemes {
        council: council.to_string(),
        refusal_themes: refusal_themes(provider, council),
        consent_conditions: consent_condition_themes(provider, council),
    }
}
