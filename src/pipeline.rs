//! Single-pass analysis: load, flatten, join, extract, count.

use crate::{
    config::Config,
    corpus::{self, CorpusError, DocumentStore},
    metrics::RunStats,
    phrases::{FastNpExtractor, NounPhraseExtractor},
    report::{PhraseCount, PhraseCounts},
};

/// Outcome of one analysis pass.
#[derive(Debug, Clone)]
pub struct Report {
    /// Most frequent phrases, by non-increasing count.
    pub ranked: Vec<PhraseCount>,
    /// Counters gathered along the way.
    pub stats: RunStats,
}

/// Run the pipeline over an already-loaded document store.
pub fn analyse(
    store: DocumentStore,
    extractor: &dyn NounPhraseExtractor,
    top: usize,
) -> Result<Report, CorpusError> {
    let corpus = corpus::flatten(store)?;
    let blob = corpus::join(&corpus);
    let mut stats = RunStats::for_corpus(&corpus, &blob);
    drop(corpus);

    let counts: PhraseCounts = extractor.extract(&blob).into_iter().collect();
    let ranked = counts.most_common(top);
    stats.record_phrases(&counts, ranked.len());

    tracing::info!(
        records = stats.records,
        fragments = stats.fragments,
        occurrences = stats.phrase_occurrences,
        distinct = stats.distinct_phrases,
        reported = stats.reported,
        "Counted noun phrases"
    );
    Ok(Report { ranked, stats })
}

/// Load the configured results file and analyse it with the built-in extractor.
pub fn run(config: &Config) -> Result<Report, CorpusError> {
    let store = corpus::load_documents(&config.input)?;
    let extractor = FastNpExtractor::new().preserving_case(config.preserve_case);
    analyse(store, &extractor, config.top)
}
