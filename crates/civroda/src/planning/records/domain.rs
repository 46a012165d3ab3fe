use serde::{Deserialize, Serialize};

/// Councils whose determinations are tracked by the service.
pub const KNOWN_COUNCILS: [&str; 3] = ["Parramatta", "Blacktown", "Hornsby"];

/// Identifier wrapper for development applications.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DaId(pub String);

impl DaId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DaId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DaId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Determination recorded against a development application.
///
/// Council exports occasionally carry statuses outside the four the service
/// understands; those are kept verbatim in [`DaOutcome::Unrecognized`] so the
/// record still loads and scores.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DaOutcome {
    Approved,
    Refused,
    Deferred,
    UnderAssessment,
    Unrecognized(String),
}

impl DaOutcome {
    /// Exact, case-sensitive match on the published labels; `"approved"` is unrecognized.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed {
            "Approved" => Self::Approved,
            "Refused" => Self::Refused,
            "Deferred" => Self::Deferred,
            "Under Assessment" => Self::UnderAssessment,
            _ => Self::Unrecognized(trimmed.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Approved => "Approved",
            Self::Refused => "Refused",
            Self::Deferred => "Deferred",
            Self::UnderAssessment => "Under Assessment",
            Self::Unrecognized(raw) => raw,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }

    /// Case-insensitive comparison against a user supplied label.
    pub fn matches_label(&self, label: &str) -> bool {
        self.label().eq_ignore_ascii_case(label.trim())
    }
}

impl From<String> for DaOutcome {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<DaOutcome> for String {
    fn from(value: DaOutcome) -> Self {
        match value {
            DaOutcome::Unrecognized(raw) => raw,
            other => other.label().to_string(),
        }
    }
}

impl std::fmt::Display for DaOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A council development application as published by the record provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationRecord {
    pub id: DaId,
    pub address: String,
    pub council: String,
    pub zoning: String,
    pub land_size: String,
    pub height: String,
    #[serde(rename = "FSR")]
    pub fsr: String,
    #[serde(rename = "DA_outcome")]
    pub outcome: DaOutcome,
    #[serde(default)]
    pub key_conditions: Vec<String>,
    #[serde(default)]
    pub pdf_links: Vec<String>,
}

impl ApplicationRecord {
    pub fn is_known_council(&self) -> bool {
        KNOWN_COUNCILS.contains(&self.council.as_str())
    }
}
