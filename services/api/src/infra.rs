use chrono::NaiveDate;
use civroda::error::AppError;
use civroda::planning::InMemoryRecordStore;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Load the configured CSV export, falling back to the bundled sample dataset.
pub(crate) fn load_record_store(path: Option<&Path>) -> Result<InMemoryRecordStore, AppError> {
    let store = match path {
        Some(path) => InMemoryRecordStore::from_path(path)?,
        None => InMemoryRecordStore::sample()?,
    };
    Ok(store)
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
