//! JSON output format for the dashboard summary

use crate::summary::Summary;
use serde::Serialize;

/// Versioned JSON envelope around a [`Summary`]
#[derive(Debug, Serialize)]
pub struct JsonOutput<'a> {
    /// Output format version
    pub version: &'static str,
    /// Output format identifier
    pub format: &'static str,
    #[serde(flatten)]
    pub summary: &'a Summary,
}

impl<'a> JsonOutput<'a> {
    pub fn new(summary: &'a Summary) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            format: "colortally-json-v1",
            summary,
        }
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
