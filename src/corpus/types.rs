//! Core data types and error definitions for corpus assembly.

use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while turning a scraped results file into a text corpus.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// The results file could not be opened or read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// File we attempted to read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The results file is not valid JSON.
    #[error("failed to parse {} as JSON: {source}", .path.display())]
    Json {
        /// File we attempted to parse.
        path: PathBuf,
        /// Parser diagnostic, including line and column.
        #[source]
        source: serde_json::Error,
    },
    /// The top-level JSON value is not an object keyed by record id.
    #[error("expected a JSON object of records, found {found}")]
    NotAnObject {
        /// JSON type encountered instead.
        found: &'static str,
    },
    /// A record lacks `job_summary` or holds something other than an array of strings.
    #[error("record '{key}' is malformed: {source}")]
    Record {
        /// Key of the offending record in the document store.
        key: String,
        /// Deserialization failure describing the shape mismatch.
        #[source]
        source: serde_json::Error,
    },
    /// The document store holds no records, so there is nothing to concatenate.
    #[error("document store contains no records")]
    NoRecords,
}

/// Scraped records keyed by job id (or scraped URL), in source insertion order.
#[derive(Debug, Clone, Default)]
pub struct DocumentStore {
    records: Map<String, Value>,
}

impl DocumentStore {
    /// Wrap an already-parsed JSON object.
    pub fn new(records: Map<String, Value>) -> Self {
        Self { records }
    }

    /// Number of records in the store.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Consume the store, yielding `(key, raw record)` pairs in insertion order.
    pub fn into_records(self) -> impl Iterator<Item = (String, Value)> {
        self.records.into_iter()
    }
}

/// A single scraped job posting.
///
/// Only the summary fragments matter to the analysis; any other fields are ignored. The
/// scraper stores findings under the CSS selector that produced them, hence the alias. A
/// record carrying both spellings is rejected as a duplicate field rather than merged.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct JobRecord {
    /// Text fragments scraped from the posting's summary block.
    #[serde(alias = "#job_summary")]
    pub job_summary: Vec<String>,
}

/// Ordered summary fragments gathered from every record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    /// Records that contributed to the corpus.
    pub record_count: usize,
    /// Every summary fragment, in record order then fragment order.
    pub fragments: Vec<String>,
}

impl Corpus {
    /// Number of fragments in the corpus.
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Whether the corpus holds no fragments.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}

/// Human-readable JSON type name used in shape errors.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
