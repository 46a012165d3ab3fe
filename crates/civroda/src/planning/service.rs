use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::insights::{
    council_themes, portfolio_stats, risk_drivers, CouncilThemes, PortfolioStats, RiskLevel,
    RiskProfile,
};
use super::records::{ApplicationRecord, DaId, RecordProvider, KNOWN_COUNCILS};
use super::report::render_determination_report;
use super::scoring::{
    self, aggregate_outcomes, rank_neighbors, SimilarityConfig, SimilarityResult,
    DEFAULT_NEIGHBOR_LIMIT,
};

/// Optional, case-insensitive listing filters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DaFilter {
    pub council: Option<String>,
    pub zoning: Option<String>,
    pub outcome: Option<String>,
}

impl DaFilter {
    pub fn matches(&self, record: &ApplicationRecord) -> bool {
        let council = self
            .council
            .as_deref()
            .map_or(true, |council| record.council.eq_ignore_ascii_case(council));
        let zoning = self
            .zoning
            .as_deref()
            .map_or(true, |zoning| record.zoning.eq_ignore_ascii_case(zoning));
        let outcome = self
            .outcome
            .as_deref()
            .map_or(true, |outcome| record.outcome.matches_label(outcome));

        council && zoning && outcome
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DaListing {
    pub total: usize,
    pub results: Vec<ApplicationRecord>,
}

/// A record enriched with its comparables and approval likelihood.
#[derive(Debug, Clone, Serialize)]
pub struct DaDetail {
    #[serde(flatten)]
    pub record: ApplicationRecord,
    pub similar_projects: Vec<SimilarityResult>,
    pub approval_score: u8,
}

/// Service composing the record provider with the comparable-scoring engine.
pub struct PlanningService<P: ?Sized> {
    config: SimilarityConfig,
    provider: Arc<P>,
}

impl<P> PlanningService<P>
where
    P: RecordProvider + ?Sized + 'static,
{
    pub fn new(provider: Arc<P>) -> Self {
        Self::with_config(provider, SimilarityConfig::default())
    }

    pub fn with_config(provider: Arc<P>, config: SimilarityConfig) -> Self {
        Self { config, provider }
    }

    pub fn councils(&self) -> Vec<&'static str> {
        KNOWN_COUNCILS.to_vec()
    }

    pub fn list(&self, filter: &DaFilter) -> DaListing {
        let results: Vec<ApplicationRecord> = self
            .provider
            .all()
            .into_iter()
            .filter(|record| filter.matches(record))
            .cloned()
            .collect();

        DaListing {
            total: results.len(),
            results,
        }
    }

    pub fn similar_projects(&self, id: &str, limit: usize) -> Vec<SimilarityResult> {
        rank_neighbors(self.provider.as_ref(), id, limit, &self.config)
    }

    pub fn approval_score(&self, id: &str) -> u8 {
        scoring::approval_score(self.provider.as_ref(), id, &self.config)
    }

    /// Fetch a record with its comparables for API responses.
    pub fn detail(&self, id: &str) -> Result<DaDetail, PlanningServiceError> {
        let record = self
            .provider
            .get_by_id(id)
            .ok_or_else(|| PlanningServiceError::NotFound(DaId::from(id)))?;

        let similar_projects = self.similar_projects(id, DEFAULT_NEIGHBOR_LIMIT);
        let approval_score = aggregate_outcomes(&similar_projects);
        debug!(id, approval_score, "assembled application detail");

        Ok(DaDetail {
            record: record.clone(),
            similar_projects,
            approval_score,
        })
    }

    pub fn risk_profile(&self, id: &str) -> Result<RiskProfile, PlanningServiceError> {
        let detail = self.detail(id)?;
        Ok(self.profile_for(&detail))
    }

    fn profile_for(&self, detail: &DaDetail) -> RiskProfile {
        RiskProfile {
            score: detail.approval_score,
            level: RiskLevel::from_score(detail.approval_score),
            drivers: risk_drivers(
                self.provider.as_ref(),
                &detail.record,
                &detail.similar_projects,
            ),
        }
    }

    pub fn stats(&self) -> PortfolioStats {
        portfolio_stats(self.provider.as_ref())
    }

    pub fn themes(&self, council: &str) -> Result<CouncilThemes, PlanningServiceError> {
        let council = KNOWN_COUNCILS
            .iter()
            .find(|known| known.eq_ignore_ascii_case(council.trim()))
            .ok_or_else(|| PlanningServiceError::UnknownCouncil(council.to_string()))?;

        Ok(council_themes(self.provider.as_ref(), council))
    }

    /// Plain-text determination report for a record.
    pub fn report(
        &self,
        id: &str,
        generated_on: NaiveDate,
    ) -> Result<String, PlanningServiceError> {
        let detail = self.detail(id)?;
        let profile = self.profile_for(&detail);
        Ok(render_determination_report(&detail, &profile, generated_on))
    }
}

/// Error raised by the planning service.
#[derive(Debug, thiserror::Error)]
pub enum PlanningServiceError {
    #[error("DA not found: {0}")]
    NotFound(DaId),
    #[error("unknown council: {0}")]
    UnknownCouncil(String),
}
