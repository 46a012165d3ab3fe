use serde::Serialize;

use super::super::records::{ApplicationRecord, DaOutcome, RecordProvider};
use super::super::scoring::{parse_magnitude, SimilarityResult};

const MAX_DRIVERS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    pub const fn from_score(score: u8) -> Self {
        if score >= 70 {
            Self::Low
        } else if score >= 40 {
            Self::Moderate
        } else {
            Self::High
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskDriver {
    pub factor: &'static str,
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskProfile {
    pub score: u8,
    pub level: RiskLevel,
    pub drivers: Vec<RiskDriver>,
}

fn average(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

fn council_average(
    peers: &[&ApplicationRecord],
    field: fn(&ApplicationRecord) -> &str,
) -> Option<f64> {
    let values: Vec<f64> = peers
        .iter()
        .map(|record| parse_magnitude(field(record)))
        .collect();
    average(&values).filter(|avg| *avg > 0.0)
}

/// Up to three factors explaining where an application departs from council precedent.
pub fn risk_drivers<P>(
    provider: &P,
    record: &ApplicationRecord,
    similar: &[SimilarityResult],
) -> Vec<RiskDriver>
where
    P: RecordProvider + ?Sized,
{
    let peers: Vec<&ApplicationRecord> = provider
        .list_by_council(&record.council)
        .into_iter()
        .filter(|peer| peer.id != record.id)
        .collect();
    let mut drivers = Vec::new();

    let height = parse_magnitude(&record.height);
    if let Some(avg) = council_average(&peers, |peer| peer.height.as_str()) {
        if height > avg * 1.15 {
            drivers.push(RiskDriver {
                factor: "Height Variation",
                detail: format!(
                    "Proposed height ({}) exceeds council average by {}%.",
                    record.height,
                    ((height - avg) / avg * 100.0).round()
                ),
            });
        }
    }

    let fsr = parse_magnitude(&record.fsr);
    if let Some(avg) = council_average(&peers, |peer| peer.fsr.as_str()) {
        if fsr > avg * 1.1 {
            drivers.push(RiskDriver {
                factor: "FSR Sensitivity",
                detail: format!(
                    "FSR {} is above the council area average ({avg:.1}:1).",
                    record.fsr
                ),
            });
        }
    }

    let same_zone: Vec<&&ApplicationRecord> = peers
        .iter()
        .filter(|peer| peer.zoning == record.zoning)
        .collect();
    if same_zone.len() >= 2 {
        let refusals = same_zone
            .iter()
            .filter(|peer| peer.outcome == DaOutcome::Refused)
            .count();
        let refusal_rate = refusals as f64 / same_zone.len() as f64;
        if refusal_rate > 0.3 {
            drivers.push(RiskDriver {
                factor: "Zoning Refusal Rate",
                detail: format!(
                    "{}% of {} zone applications in {} have been refused.",
                    (refusal_rate * 100.0).round(),
                    record.zoning,
                    record.council
                ),
            });
        }
    }

    let land_size = parse_magnitude(&record.land_size);
    if let Some(avg) = council_average(&peers, |peer| peer.land_size.as_str()) {
        if land_size < avg * 0.6 {
            drivers.push(RiskDriver {
                factor: "Undersized Lot",
                detail: format!(
                    "Land size ({}) is significantly below the council area average.",
                    record.land_size
                ),
            });
        }
    }

    let refused = similar
        .iter()
        .filter(|project| project.outcome == DaOutcome::Refused)
        .count();
    if refused >= 2 {
        drivers.push(RiskDriver {
            factor: "Comparable Refusals",
            detail: format!(
                "{refused} of {} comparable precedents were refused.",
                similar.len()
            ),
        });
    }

    let deferred = similar
        .iter()
        .filter(|project| project.outcome == DaOutcome::Deferred)
        .count();
    if deferred >= 2 {
        drivers.push(RiskDriver {
            factor: "Deferral Pattern",
            detail: format!(
                "{deferred} comparable precedents were deferred, indicating council uncertainty in this area."
            ),
        });
    }

    if drivers.is_empty() {
        drivers.push(RiskDriver {
            factor: "Consistent Precedent",
            detail: "No significant deviation from approved precedents in this council area."
                .to_string(),
        });
    }

    drivers.truncate(MAX_DRIVERS);
    drivers
}
