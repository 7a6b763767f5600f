//! Phrase frequency tallies and report rendering.

use serde::Serialize;
use std::collections::HashMap;
use std::fmt::Write as _;

use crate::{config::OutputFormat, metrics::RunStats};

/// Occurrence count for a single phrase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhraseCount {
    /// Phrase text, exactly as produced by the extractor.
    pub phrase: String,
    /// Number of occurrences in the blob.
    pub count: usize,
}

/// Frequency table over phrase occurrences.
///
/// Counting is case- and form-sensitive. Entries remember the order in which phrases were
/// first seen, which is used to break ties in [`PhraseCounts::most_common`].
#[derive(Debug, Clone, Default)]
pub struct PhraseCounts {
    entries: Vec<PhraseCount>,
    index: HashMap<String, usize>,
    total: usize,
}

impl PhraseCounts {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `phrase`.
    pub fn add(&mut self, phrase: String) {
        self.total += 1;
        if let Some(&slot) = self.index.get(&phrase) {
            self.entries[slot].count += 1;
            return;
        }
        self.index.insert(phrase.clone(), self.entries.len());
        self.entries.push(PhraseCount { phrase, count: 1 });
    }

    /// Occurrences recorded for `phrase`, zero when unseen.
    pub fn get(&self, phrase: &str) -> usize {
        self.index
            .get(phrase)
            .map_or(0, |&slot| self.entries[slot].count)
    }

    /// Number of distinct phrases.
    pub fn distinct(&self) -> usize {
        self.entries.len()
    }

    /// Total occurrences across all phrases.
    pub fn total(&self) -> usize {
        self.total
    }

    /// The `limit` most frequent phrases by non-increasing count; ties keep first-seen order.
    pub fn most_common(&self, limit: usize) -> Vec<PhraseCount> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked.truncate(limit);
        ranked
    }
}

impl FromIterator<String> for PhraseCounts {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut counts = Self::new();
        for phrase in iter {
            counts.add(phrase);
        }
        counts
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    phrases: &'a [PhraseCount],
    stats: &'a RunStats,
}

/// Render the ranked phrases in the requested format, newline-terminated.
pub fn render(
    ranked: &[PhraseCount],
    stats: &RunStats,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    let mut out = String::new();
    match format {
        OutputFormat::Repr => {
            out.push('[');
            for (position, entry) in ranked.iter().enumerate() {
                if position > 0 {
                    out.push_str(", ");
                }
                let _ = write!(out, "({}, {})", python_str_repr(&entry.phrase), entry.count);
            }
            out.push_str("]\n");
        }
        OutputFormat::Lines => {
            for entry in ranked {
                let _ = writeln!(out, "{}\t{}", entry.count, entry.phrase);
            }
        }
        OutputFormat::Json => {
            out = serde_json::to_string_pretty(&JsonReport {
                phrases: ranked,
                stats,
            })?;
            out.push('\n');
        }
    }
    Ok(out)
}

/// Quote a string the way an interactive interpreter echoes it.
fn python_str_repr(value: &str) -> String {
    let quote = if value.contains('\'') && !value.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(value.len() + 2);
    out.push(quote);
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if (c as u32) < 0x20 || c as u32 == 0x7f => {
                let _ = write!(out, "\\x{:02x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(phrases: &[&str]) -> PhraseCounts {
        phrases.iter().map(|phrase| (*phrase).to_string()).collect()
    }

    #[test]
    fn counts_are_case_sensitive() {
        let table = counts(&["react", "React", "react"]);
        assert_eq!(table.get("react"), 2);
        assert_eq!(table.get("React"), 1);
        assert_eq!(table.get("vue"), 0);
        assert_eq!(table.distinct(), 2);
        assert_eq!(table.total(), 3);
    }

    #[test]
    fn most_common_orders_by_count_then_first_seen() {
        let table = counts(&["b", "a", "c", "a", "c", "d", "c"]);
        let ranked = table.most_common(10);
        let order: Vec<(&str, usize)> = ranked
            .iter()
            .map(|entry| (entry.phrase.as_str(), entry.count))
            .collect();
        assert_eq!(order, vec![("c", 3), ("a", 2), ("b", 1), ("d", 1)]);
    }

    #[test]
    fn most_common_respects_limit() {
        let phrases: Vec<String> = (0..80).map(|n| format!("phrase {n}")).collect();
        let table: PhraseCounts = phrases.into_iter().collect();
        let ranked = table.most_common(50);
        assert_eq!(ranked.len(), 50);
        assert!(ranked.windows(2).all(|pair| pair[0].count >= pair[1].count));
    }

    #[test]
    fn render_repr_matches_interpreter_echo() {
        let ranked = counts(&["senior engineer", "senior engineer", "o'reilly media"]).most_common(50);
        let text = render(&ranked, &RunStats::default(), OutputFormat::Repr).unwrap();
        assert_eq!(
            text,
            "[('senior engineer', 2), (\"o'reilly media\", 1)]\n"
        );
    }

    #[test]
    fn render_repr_of_nothing_is_empty_list() {
        let text = render(&[], &RunStats::default(), OutputFormat::Repr).unwrap();
        assert_eq!(text, "[]\n");
    }

    #[test]
    fn render_lines_is_tab_separated() {
        let ranked = counts(&["data analyst", "data scientist", "data analyst"]).most_common(50);
        let text = render(&ranked, &RunStats::default(), OutputFormat::Lines).unwrap();
        assert_eq!(text, "2\tdata analyst\n1\tdata scientist\n");
    }

    #[test]
    fn render_json_includes_stats() {
        let ranked = counts(&["data analyst"]).most_common(50);
        let stats = RunStats {
            records: 1,
            fragments: 1,
            ..RunStats::default()
        };
        let text = render(&ranked, &stats, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["phrases"][0]["phrase"], "data analyst");
        assert_eq!(value["phrases"][0]["count"], 1);
        assert_eq!(value["stats"]["records"], 1);
    }

    #[test]
    fn python_str_repr_escapes_specials() {
        assert_eq!(python_str_repr("plain"), "'plain'");
        assert_eq!(python_str_repr("it's"), "\"it's\"");
        assert_eq!(python_str_repr("both ' and \""), "'both \\' and \"'");
        assert_eq!(python_str_repr("a\\b\tc"), "'a\\\\b\\tc'");
        assert_eq!(python_str_repr("bell\u{7}"), "'bell\\x07'");
    }
}
