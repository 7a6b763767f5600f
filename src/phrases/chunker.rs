//! Pairwise-merge noun-phrase chunking.
//!
//! Adjacent tagged spans are merged by a five-rule grammar until no rule applies:
//!
//! | left | right | merged |
//! | --- | --- | --- |
//! | `NNP` | `NNP` | `NNP` |
//! | `NN` | `NN` | `NNI` |
//! | `NNI` | `NN` | `NNI` |
//! | `JJ` | `JJ` | `JJ` |
//! | `JJ` | `NN` | `NNI` |
//!
//! Always merging the leftmost applicable pair gives the same result as a single left-to-right
//! pass that reduces the top of a stack after every push, which is what [`chunk`] does.

use super::tagger::{TaggedToken, normalize_tag};

/// Coarse span category after tag normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkTag {
    /// Proper noun (`NNP`).
    Proper,
    /// Common noun (`NN`).
    Noun,
    /// Merged nominal group (`NNI`).
    NounGroup,
    /// Adjective (`JJ`).
    Adjective,
    /// Anything that never merges.
    Other,
}

impl ChunkTag {
    fn from_tag(tag: &str) -> Self {
        match normalize_tag(tag) {
            "NNP" => Self::Proper,
            "NN" => Self::Noun,
            "JJ" => Self::Adjective,
            _ => Self::Other,
        }
    }

    fn merge(self, right: Self) -> Option<Self> {
        match (self, right) {
            (Self::Proper, Self::Proper) => Some(Self::Proper),
            (Self::Noun | Self::NounGroup | Self::Adjective, Self::Noun) => Some(Self::NounGroup),
            (Self::Adjective, Self::Adjective) => Some(Self::Adjective),
            _ => None,
        }
    }

    /// Whether spans of this category are reported as noun phrases.
    pub fn is_phrase(self) -> bool {
        matches!(self, Self::Proper | Self::NounGroup)
    }
}

/// A run of one or more tokens sharing a chunk category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// Space-joined token text.
    pub text: String,
    /// Category of the merged span.
    pub tag: ChunkTag,
}

/// Merge tagged tokens into chunks.
pub fn chunk(tokens: &[TaggedToken]) -> Vec<Chunk> {
    let mut stack: Vec<Chunk> = Vec::with_capacity(tokens.len());

    for token in tokens {
        stack.push(Chunk {
            text: token.text.clone(),
            tag: ChunkTag::from_tag(token.tag),
        });

        while stack.len() >= 2 {
            let right = &stack[stack.len() - 1];
            let left = &stack[stack.len() - 2];
            let Some(merged) = left.tag.merge(right.tag) else {
                break;
            };
            let right = stack.pop().map(|chunk| chunk.text).unwrap_or_default();
            if let Some(left) = stack.last_mut() {
                left.text.push(' ');
                left.text.push_str(&right);
                left.tag = merged;
            }
        }
    }

    stack
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tagged(pairs: &[(&str, &'static str)]) -> Vec<TaggedToken> {
        pairs
            .iter()
            .map(|(text, tag)| TaggedToken {
                text: (*text).to_string(),
                tag: *tag,
            })
            .collect()
    }

    fn phrases(chunks: &[Chunk]) -> Vec<&str> {
        chunks
            .iter()
            .filter(|chunk| chunk.tag.is_phrase())
            .map(|chunk| chunk.text.as_str())
            .collect()
    }

    #[test]
    fn proper_nouns_merge() {
        let chunks = chunk(&tagged(&[("Data", "NNP"), ("Scientist", "NNP")]));
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].tag, ChunkTag::Proper);
        assert_eq!(chunks[0].text, "Data Scientist");
    }

    #[test]
    fn adjective_chain_absorbs_following_nouns() {
        let chunks = chunk(&tagged(&[
            ("excellent", "JJ"),
            ("written", "JJ"),
            ("communication", "NN"),
            ("skills", "NNS"),
        ]));
        assert_eq!(phrases(&chunks), vec!["excellent written communication skills"]);
    }

    #[test]
    fn lone_common_noun_is_not_a_phrase() {
        let chunks = chunk(&tagged(&[("the", "AT"), ("team", "NN")]));
        assert!(phrases(&chunks).is_empty());
    }

    #[test]
    fn leftmost_pair_merges_first() {
        let chunks = chunk(&tagged(&[("agile", "JJ"), ("team", "NN"), ("work", "NN")]));
        assert_eq!(phrases(&chunks), vec!["agile team work"]);

        // no NN + NNI rule
        let chunks = chunk(&tagged(&[("job", "NN"), ("agile", "JJ"), ("team", "NN")]));
        assert_eq!(phrases(&chunks), vec!["agile team"]);
    }

    #[test]
    fn mixed_categories_do_not_merge() {
        let chunks = chunk(&tagged(&[
            ("London", "NNP"),
            ("office", "NN"),
            ("in", "IN"),
            ("Leeds", "NNP"),
        ]));
        assert_eq!(phrases(&chunks), vec!["London", "Leeds"]);
        assert_eq!(chunks.len(), 4);
    }
}
