use serde::{Deserialize, Serialize};

/// The symptoms a user reports for one matching call
///
/// Only `symptoms` and `triggers` influence scoring. The remaining fields are
/// carried so callers can round-trip a complete intake through JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserSymptomSet {
    /// Free-text symptoms, e.g. "fatigue" or "swollen ankles"
    #[serde(default)]
    pub symptoms: Vec<String>,

    /// Free-text triggers, e.g. "stress"
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub triggers: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub onset: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sex: Option<String>,
}

impl UserSymptomSet {
    pub fn new<I, S>(symptoms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            symptoms: symptoms.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_triggers<I, S>(mut self, triggers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.triggers = triggers.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symptoms.is_empty()
    }
}
