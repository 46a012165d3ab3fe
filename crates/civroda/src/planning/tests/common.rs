use std::sync::Arc;

use axum::body::to_bytes;
use axum::response::Response;
use serde_json::Value;

use crate::planning::records::{ApplicationRecord, DaId, DaOutcome, InMemoryRecordStore};
use crate::planning::{planning_router, PlanningService};

pub(super) fn record(
    id: &str,
    council: &str,
    zoning: &str,
    land_size: &str,
    height: &str,
    fsr: &str,
    outcome: DaOutcome,
) -> ApplicationRecord {
    ApplicationRecord {
        id: DaId::from(id),
        address: format!("{id} Test Parade"),
        council: council.to_string(),
        zoning: zoning.to_string(),
        land_size: land_size.to_string(),
        height: height.to_string(),
        fsr: fsr.to_string(),
        outcome,
        key_conditions: vec![format!("{id} condition")],
        pdf_links: Vec::new(),
    }
}

/// Target `T` plus Blacktown neighbors scoring 0.9, 0.6 and 0.3 and one Hornsby outsider.
pub(super) fn scoring_pool() -> Vec<ApplicationRecord> {
    vec![
        record("T", "Blacktown", "R2", "0 sqm", "0m", "0:1", DaOutcome::UnderAssessment),
        record("N-03", "Blacktown", "B4", "0 sqm", "22.5m", "4:1", DaOutcome::Deferred),
        record("OUT", "Hornsby", "R2", "0 sqm", "0m", "0:1", DaOutcome::Approved),
        record("N-09", "Blacktown", "R2", "0 sqm", "0m", "2:1", DaOutcome::Approved),
        record("N-06", "Blacktown", "R3", "0 sqm", "0m", "4:1", DaOutcome::Refused),
    ]
}

pub(super) fn store(records: Vec<ApplicationRecord>) -> Arc<InMemoryRecordStore> {
    Arc::new(InMemoryRecordStore::new(records).expect("unique ids"))
}

pub(super) fn scoring_service() -> Arc<PlanningService<InMemoryRecordStore>> {
    Arc::new(PlanningService::new(store(scoring_pool())))
}

pub(super) fn sample_service() -> Arc<PlanningService<InMemoryRecordStore>> {
    let store = InMemoryRecordStore::sample().expect("sample dataset parses");
    Arc::new(PlanningService::new(Arc::new(store)))
}

pub(super) fn sample_router() -> axum::Router {
    planning_router(sample_service())
}

pub(super) async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("body is json")
}
