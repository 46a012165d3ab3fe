use super::domain::ApplicationRecord;

/// Read-only access to the application pool so scoring can run against any backing store.
///
/// Implementations must return records in a stable pool order; ranking relies on it to
/// break ties between equally similar candidates.
pub trait RecordProvider: Send + Sync {
    fn get_by_id(&self, id: &str) -> Option<&ApplicationRecord>;
    fn list_by_council(&self, council: &str) -> Vec<&ApplicationRecord>;
    fn all(&self) -> Vec<&ApplicationRecord>;
}

impl RecordProvider for [ApplicationRecord] {
    fn get_by_id(&self, id: &str) -> Option<&ApplicationRecord> {
        self.iter().find(|record| record.id.as_str() == id)
    }

    fn list_by_council(&self, council: &str) -> Vec<&ApplicationRecord> {
        self.iter()
            .filter(|record| record.council == council)
            .collect()
    }

    fn all(&self) -> Vec<&ApplicationRecord> {
        self.iter().collect()
    }
}

/// Error enumeration for loading a record pool.
#[derive(Debug, thiserror::Error)]
pub enum RecordStoreError {
    #[error("failed to read record export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid record CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("duplicate application id {0}")]
    DuplicateId(String),
}
