use serde::Serialize;

use crate::corpus::Corpus;
use crate::report::PhraseCounts;

/// Counters describing a single analysis pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    /// Records read from the document store.
    pub records: usize,
    /// Summary fragments gathered across all records.
    pub fragments: usize,
    /// Length of the joined blob in characters.
    pub blob_chars: usize,
    /// Noun-phrase occurrences returned by the extractor.
    pub phrase_occurrences: usize,
    /// Distinct noun phrases.
    pub distinct_phrases: usize,
    /// Entries included in the report.
    pub reported: usize,
}

impl RunStats {
    /// Capture corpus-level counters before extraction runs.
    pub fn for_corpus(corpus: &Corpus, blob: &str) -> Self {
        Self {
            records: corpus.record_count,
            fragments: corpus.len(),
            blob_chars: blob.chars().count(),
            ..Self::default()
        }
    }

    /// Fold in the phrase table and the size of the final report.
    pub fn record_phrases(&mut self, counts: &PhraseCounts, reported: usize) {
        self.phrase_occurrences = counts.total();
        self.distinct_phrases = counts.distinct();
        self.reported = reported;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_corpus_and_phrase_counters() {
        let corpus = Corpus {
            record_count: 2,
            fragments: vec!["Data Scientist".into(), "Data Analyst".into()],
        };
        let mut stats = RunStats::for_corpus(&corpus, "Data Scientist. Data Analyst");
        assert_eq!(stats.records, 2);
        assert_eq!(stats.fragments, 2);
        assert_eq!(stats.blob_chars, 28);

        let counts: PhraseCounts = ["a", "b", "a"].into_iter().map(String::from).collect();
        stats.record_phrases(&counts, 2);
        assert_eq!(stats.phrase_occurrences, 3);
        assert_eq!(stats.distinct_phrases, 2);
        assert_eq!(stats.reported, 2);
    }

    #[test]
    fn default_is_all_zero() {
        let stats = RunStats::default();
        assert_eq!(stats.records, 0);
        assert_eq!(stats.reported, 0);
    }
}
