//! Wire model for the query endpoint: incoming payload, normalized
//! request, and the response envelope.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ValidationError;

/// Options accepted on a query request.
///
/// These are part of the wire contract but the canned synthesizer does not
/// apply them: `max_sources` never truncates the returned citations and
/// `confidence_threshold` never filters them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QueryOptions {
    #[serde(default = "default_include_reasoning")]
    pub include_reasoning: bool,
    #[serde(default = "default_max_sources")]
    pub max_sources: usize,
    #[serde(default = "default_confidence_threshold")]
    pub confidence_threshold: f64,
}

fn default_include_reasoning() -> bool {
    true
}

fn default_max_sources() -> usize {
    5
}

fn default_confidence_threshold() -> f64 {
    0.7
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            include_reasoning: default_include_reasoning(),
            max_sources: default_max_sources(),
            confidence_threshold: default_confidence_threshold(),
        }
    }
}

/// A query request after validation and defaulting.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryRequest {
    pub query: String,
    /// Document identifiers forwarded by the client. Opaque and unused.
    pub documents: Vec<String>,
    pub options: QueryOptions,
}

impl QueryRequest {
    /// Validates a decoded JSON body and normalizes it.
    ///
    /// `query` must be a non-empty string. `documents` and `options` are
    /// optional; missing option sub-fields take their documented defaults.
    pub fn from_value(body: &Value) -> Result<Self, ValidationError> {
        let object = body.as_object().ok_or(ValidationError::InvalidBody)?;

        let query = object
            .get("query")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .ok_or(ValidationError::MissingQuery)?
            .to_string();

        let documents = match object.get("documents") {
            Some(Value::Null) | None => Vec::new(),
            Some(raw) => serde_json::from_value(raw.clone())
                .map_err(|_| ValidationError::InvalidBody)?,
        };

        let options = match object.get("options") {
            Some(Value::Null) | None => QueryOptions::default(),
            Some(raw) => serde_json::from_value(raw.clone())
                .map_err(|_| ValidationError::InvalidBody)?,
        };

        Ok(Self {
            query,
            documents,
            options,
        })
    }
}

/// A fabricated evidence reference attached to a response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceCitation {
    pub document: String,
    pub clause: String,
    pub relevance: f64,
    pub page: u32,
}

/// The full response envelope for `/api/v1/hackrx/run`.
#[derive(Debug, Clone, Serialize)]
pub struct QueryResponse {
    pub query: String,
    pub answer: String,
    pub confidence: f64,
    pub sources: Vec<SourceCitation>,
    pub reasoning: String,
    /// RFC 3339 UTC timestamp taken when the response is assembled.
    pub timestamp: String,
    #[serde(rename = "processingTime")]
    pub processing_time_ms: u64,
}
