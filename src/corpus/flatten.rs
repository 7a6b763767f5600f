//! Flattening records into an ordered corpus and joining it into a single blob.

use super::types::{Corpus, CorpusError, DocumentStore, JobRecord};

/// Separator placed between consecutive summary fragments in the blob.
pub const SUMMARY_DELIMITER: &str = ". ";

/// Concatenate every record's `job_summary` fragments, preserving record order.
///
/// An empty store is an error: there is no seed value to start the concatenation from.
/// Records whose arrays are empty simply contribute nothing.
pub fn flatten(store: DocumentStore) -> Result<Corpus, CorpusError> {
    if store.is_empty() {
        return Err(CorpusError::NoRecords);
    }

    let mut corpus = Corpus::default();
    for (key, raw) in store.into_records() {
        let record: JobRecord =
            serde_json::from_value(raw).map_err(|source| CorpusError::Record {
                key: key.clone(),
                source,
            })?;
        tracing::trace!(key = %key, fragments = record.job_summary.len(), "Flattened record");
        corpus.record_count += 1;
        corpus.fragments.extend(record.job_summary);
    }

    tracing::debug!(
        records = corpus.record_count,
        fragments = corpus.len(),
        "Flattened document store"
    );
    Ok(corpus)
}

/// Join the corpus into one blob using [`SUMMARY_DELIMITER`].
pub fn join(corpus: &Corpus) -> String {
    corpus.fragments.join(SUMMARY_DELIMITER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::parse_documents;
    use serde_json::json;

    fn store(value: serde_json::Value) -> DocumentStore {
        parse_documents(value).expect("object store")
    }

    #[test]
    fn flatten_concatenates_in_record_order() {
        let corpus = flatten(store(json!({
            "job-2": { "job_summary": ["b1", "b2"] },
            "job-1": { "job_summary": ["a1"] },
            "job-3": { "job_summary": ["c1", "c2", "c3"] }
        })))
        .unwrap();

        assert_eq!(corpus.record_count, 3);
        assert_eq!(corpus.len(), 6);
        assert_eq!(corpus.fragments, vec!["b1", "b2", "a1", "c1", "c2", "c3"]);
    }

    #[test]
    fn flatten_fails_without_records() {
        let error = flatten(store(json!({}))).unwrap_err();
        assert!(matches!(error, CorpusError::NoRecords));
    }

    #[test]
    fn flatten_allows_records_with_empty_summaries() {
        let corpus = flatten(store(json!({ "a": { "job_summary": [] } }))).unwrap();
        assert!(corpus.is_empty());
        assert_eq!(join(&corpus), "");
    }

    #[test]
    fn flatten_names_record_missing_summary() {
        let error = flatten(store(json!({
            "ok": { "job_summary": ["fine"] },
            "broken": { "title": "Engineer" }
        })))
        .unwrap_err();

        match error {
            CorpusError::Record { key, source } => {
                assert_eq!(key, "broken");
                assert!(source.to_string().contains("missing field `job_summary`"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn flatten_rejects_non_array_summary() {
        let error = flatten(store(json!({ "a": { "job_summary": "Engineer" } }))).unwrap_err();
        assert!(matches!(error, CorpusError::Record { ref key, .. } if key == "a"));
    }

    #[test]
    fn flatten_accepts_selector_keyed_summary() {
        let corpus = flatten(store(json!({
            "https://jobs.example/1": { "#job_summary": ["Graduate role"] }
        })))
        .unwrap();
        assert_eq!(corpus.fragments, vec!["Graduate role"]);
    }

    #[test]
    fn flatten_rejects_both_summary_spellings() {
        let error = flatten(store(json!({
            "dup": { "job_summary": ["a"], "#job_summary": ["b"] }
        })))
        .unwrap_err();

        match error {
            CorpusError::Record { key, source } => {
                assert_eq!(key, "dup");
                assert!(source.to_string().contains("duplicate field `job_summary`"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn join_single_fragment_has_no_delimiter() {
        let corpus = flatten(store(json!({ "a": { "job_summary": ["Senior Engineer"] } }))).unwrap();
        assert_eq!(join(&corpus), "Senior Engineer");
    }

    #[test]
    fn join_uses_period_space_delimiter() {
        let corpus = flatten(store(json!({
            "a": { "job_summary": ["Data Scientist"] },
            "b": { "job_summary": ["Data Analyst"] }
        })))
        .unwrap();
        assert_eq!(join(&corpus), "Data Scientist. Data Analyst");
    }
}
