use serde::{Deserialize, Serialize};

/// A single color as returned by the color provider.
///
/// The payload is kept as raw JSON; batching and caching never look inside.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorRecord(serde_json::Value);

impl ColorRecord {
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    pub fn as_json(&self) -> &serde_json::Value {
        &self.0
    }

    pub fn into_json(self) -> serde_json::Value {
        self.0
    }

    /// Hex value (e.g. `#0047AB`) in The Color API shape, if present
    pub fn hex(&self) -> Option<&str> {
        self.0.pointer("/hex/value").and_then(|v| v.as_str())
    }

    /// Human readable color name, if present
    pub fn name(&self) -> Option<&str> {
        self.0.pointer("/name/value").and_then(|v| v.as_str())
    }
}

impl From<serde_json::Value> for ColorRecord {
    fn from(value: serde_json::Value) -> Self {
        Self::new(value)
    }
}
