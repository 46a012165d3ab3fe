use super::domain::{ApplicationRecord, DaId, DaOutcome};
use serde::{Deserialize, Deserializer};
use std::io::Read;

const LIST_SEPARATOR: char = '|';

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<ApplicationRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for row in csv_reader.deserialize::<RecordRow>() {
        records.push(row?.into_record());
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct RecordRow {
    id: String,
    #[serde(default)]
    address: String,
    council: String,
    #[serde(default)]
    zoning: String,
    #[serde(default)]
    land_size: String,
    #[serde(default)]
    height: String,
    #[serde(rename = "FSR", default)]
    fsr: String,
    #[serde(rename = "DA_outcome")]
    outcome: String,
    #[serde(default, deserialize_with = "split_list")]
    key_conditions: Vec<String>,
    #[serde(default, deserialize_with = "split_list")]
    pdf_links: Vec<String>,
}

impl RecordRow {
    fn into_record(self) -> ApplicationRecord {
        ApplicationRecord {
            id: DaId(self.id),
            address: self.address,
            council: self.council,
            zoning: self.zoning,
            land_size: self.land_size,
            height: self.height,
            fsr: self.fsr,
            outcome: DaOutcome::parse(&self.outcome),
            key_conditions: self.key_conditions,
            pdf_links: self.pdf_links,
        }
    }
}

fn split_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
    Ok(raw
        .split(LIST_SEPARATOR)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect())
}
