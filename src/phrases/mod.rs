//! Noun-phrase extraction: tokenization, part-of-speech tagging, and chunking.

pub mod chunker;
mod lexicon;
pub mod tagger;
pub mod tokenize;

use chunker::chunk;
use tagger::tag;
use tokenize::tokenize;

/// Interface implemented by noun-phrase extractors.
pub trait NounPhraseExtractor {
    /// Return one entry per noun-phrase occurrence in `text`, in document order.
    fn extract(&self, text: &str) -> Vec<String>;
}

/// Lexicon tagger plus pairwise-merge chunker.
///
/// Emits merged proper-noun runs and nominal groups; single common nouns and adjectives are
/// never reported. Phrases are lower-cased unless `preserve_case` is set, and one-character
/// phrases are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct FastNpExtractor {
    preserve_case: bool,
}

impl FastNpExtractor {
    /// Construct an extractor that lower-cases its output.
    pub const fn new() -> Self {
        Self {
            preserve_case: false,
        }
    }

    /// Keep phrases in their original casing.
    pub const fn preserving_case(mut self, preserve_case: bool) -> Self {
        self.preserve_case = preserve_case;
        self
    }
}

impl NounPhraseExtractor for FastNpExtractor {
    fn extract(&self, text: &str) -> Vec<String> {
        let tokens = tokenize(text);
        let tagged = tag(&tokens);
        let chunks = chunk(&tagged);
        tracing::debug!(
            tokens = tokens.len(),
            chunks = chunks.len(),
            "Chunked text for noun phrases"
        );

        chunks
            .into_iter()
            .filter(|chunk| chunk.tag.is_phrase())
            .map(|chunk| {
                let phrase = chunk.text.trim();
                if self.preserve_case {
                    phrase.to_string()
                } else {
                    phrase.to_lowercase()
                }
            })
            .filter(|phrase| phrase.chars().count() > 1)
            .collect()
    }
}
