use serde::{Deserialize, Serialize};

/// The closed set of entity kinds the extractor can produce, plus an
/// escape for labels outside that set. Keeping the set closed makes
/// downstream argument selection exhaustive and checkable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Person,
    Organization,
    GeoPolitical,
    Location,
    Unknown(String),
}

impl EntityKind {
    /// Map a recognizer label onto a kind. Labels follow the common NER
    /// abbreviations ("org", "gpe", "loc"); anything else becomes
    /// `Unknown`.
    pub fn from_label(label: &str) -> Self {
        match label.to_ascii_lowercase().as_str() {
            "person" => Self::Person,
            "org" | "organization" => Self::Organization,
            "gpe" | "geo_political" => Self::GeoPolitical,
            "loc" | "location" => Self::Location,
            other => Self::Unknown(other.to_string()),
        }
    }
}

/// Entities extracted from one utterance.
///
/// Single-valued kinds follow an overwrite policy: when multiple spans
/// share a kind, the last one seen wins. Search terms keep
/// first-occurrence order, de-duplicated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Entities {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geo_political: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub search_terms: Vec<String>,
    /// (label, value) pairs for recognizer output outside the closed set.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unknown: Vec<(String, String)>,
}

impl Entities {
    /// Record one recognized span. Single-valued kinds overwrite any
    /// previous value of the same kind.
    pub fn insert(&mut self, kind: EntityKind, value: String) {
        match kind {
            EntityKind::Person => self.person = Some(value),
            EntityKind::Organization => self.organization = Some(value),
            EntityKind::GeoPolitical => self.geo_political = Some(value),
            EntityKind::Location => self.location = Some(value),
            EntityKind::Unknown(label) => self.unknown.push((label, value)),
        }
    }

    /// The best available location: geo-political entity preferred over
    /// a plain location span.
    pub fn best_location(&self) -> Option<&str> {
        self.geo_political
            .as_deref()
            .or(self.location.as_deref())
    }

    /// True when nothing at all was extracted.
    pub fn is_empty(&self) -> bool {
        self.person.is_none()
            && self.organization.is_none()
            && self.geo_political.is_none()
            && self.location.is_none()
            && self.search_terms.is_empty()
            && self.unknown.is_empty()
    }
}
