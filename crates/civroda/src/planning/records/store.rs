use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use tracing::{info, warn};

use super::domain::ApplicationRecord;
use super::parser;
use super::provider::{RecordProvider, RecordStoreError};

const SAMPLE_DATASET: &str = include_str!("../../../data/sample_das.csv");

/// Immutable application pool loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecordStore {
    records: Vec<ApplicationRecord>,
    index: HashMap<String, usize>,
}

impl InMemoryRecordStore {
    pub fn new(records: Vec<ApplicationRecord>) -> Result<Self, RecordStoreError> {
        let mut index = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            if index.insert(record.id.0.clone(), position).is_some() {
                return Err(RecordStoreError::DuplicateId(record.id.0.clone()));
            }

            if !record.is_known_council() {
                warn!(id = %record.id, council = %record.council, "record belongs to an untracked council");
            }
            if !record.outcome.is_recognized() {
                warn!(id = %record.id, outcome = %record.outcome, "record carries an unrecognized outcome");
            }
        }

        Ok(Self { records, index })
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, RecordStoreError> {
        let records = parser::parse_records(reader)?;
        Self::new(records)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, RecordStoreError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let store = Self::from_reader(file)?;
        info!(path = %path.display(), records = store.len(), "loaded application records");
        Ok(store)
    }

    /// Bundled demonstration dataset covering the tracked councils.
    pub fn sample() -> Result<Self, RecordStoreError> {
        let store = Self::from_reader(SAMPLE_DATASET.as_bytes())?;
        info!(records = store.len(), "loaded bundled sample records");
        Ok(store)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[ApplicationRecord] {
        &self.records
    }
}

impl RecordProvider for InMemoryRecordStore {
    fn get_by_id(&self, id: &str) -> Option<&ApplicationRecord> {
        self.index
            .get(id)
            .and_then(|position| self.records.get(*position))
    }

    fn list_by_council(&self, council: &str) -> Vec<&ApplicationRecord> {
        self.records.list_by_council(council)
    }

    fn all(&self) -> Vec<&ApplicationRecord> {
        self.records.iter().collect()
    }
}
