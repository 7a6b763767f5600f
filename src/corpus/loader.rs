//! Reading the scraped results file into a [`DocumentStore`].

use std::{fs, path::Path};

use serde_json::Value;

use super::types::{CorpusError, DocumentStore, json_type_name};

/// Read and parse the results file at `path`.
pub fn load_documents(path: &Path) -> Result<DocumentStore, CorpusError> {
    let content = fs::read_to_string(path).map_err(|source| CorpusError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "Read results file");

    let value: Value = serde_json::from_str(&content).map_err(|source| CorpusError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    let store = parse_documents(value)?;
    tracing::info!(path = %path.display(), records = store.len(), "Loaded document store");
    Ok(store)
}

/// Interpret a parsed JSON value as a document store.
pub fn parse_documents(value: Value) -> Result<DocumentStore, CorpusError> {
    match value {
        Value::Object(records) => Ok(DocumentStore::new(records)),
        other => Err(CorpusError::NotAnObject {
            found: json_type_name(&other),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn load_documents_preserves_insertion_order() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"zeta": {{"job_summary": []}}, "alpha": {{"job_summary": []}}, "mid": {{"job_summary": []}}}}"#
        )
        .unwrap();

        let store = load_documents(file.path()).expect("valid store");
        let keys: Vec<String> = store.into_records().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn load_documents_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.json");
        let error = load_documents(&path).unwrap_err();
        assert!(matches!(error, CorpusError::Io { .. }));
        assert!(error.to_string().contains("results.json"));
    }

    #[test]
    fn load_documents_reports_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{\"a\": ").unwrap();
        let error = load_documents(file.path()).unwrap_err();
        assert!(matches!(error, CorpusError::Json { .. }));
    }

    #[test]
    fn parse_documents_rejects_non_objects() {
        let error = parse_documents(json!(["Senior Engineer"])).unwrap_err();
        assert!(matches!(error, CorpusError::NotAnObject { found: "an array" }));
    }
}
