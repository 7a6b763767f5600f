//! Word tokenization in the Penn Treebank style.
//!
//! Splits on whitespace, then peels punctuation off both ends of each word and separates
//! English clitics (`don't` → `do` `n't`, `company's` → `company` `'s`).

use regex::Regex;
use std::sync::LazyLock;

const LEADING: &[char] = &['(', '[', '{', '"', '\'', '`', '“', '‘'];
const TRAILING: &[char] = &[
    ')', ']', '}', '"', '\'', ',', ';', ':', '!', '?', '”', '’',
];
const CLITICS: &[&str] = &["'s", "'re", "'ve", "'ll", "'d", "'m"];

static ABBREVIATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\p{L}\.)+$").expect("abbreviation pattern is valid")
});

/// Split `text` into word and punctuation tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    for word in text.split_whitespace() {
        split_word(word, &mut tokens);
    }
    tokens
}

fn split_word(word: &str, tokens: &mut Vec<String>) {
    let mut core = word;

    while let Some(c) = core.chars().next() {
        if !LEADING.contains(&c) {
            break;
        }
        tokens.push(c.to_string());
        core = &core[c.len_utf8()..];
    }

    let mut trailing = Vec::new();
    while let Some(c) = core.chars().next_back() {
        let peel = TRAILING.contains(&c) || c == '.' && !ABBREVIATION.is_match(core);
        if !peel {
            break;
        }
        trailing.push(c);
        core = &core[..core.len() - c.len_utf8()];
    }

    if !core.is_empty() {
        split_clitics(core, tokens);
    }
    tokens.extend(trailing.into_iter().rev().map(String::from));
}

fn split_clitics(core: &str, tokens: &mut Vec<String>) {
    let normalized = core.replace('’', "'");
    let lowered = normalized.to_lowercase();

    if lowered.len() > 3 && lowered.ends_with("n't") {
        let cut = core_boundary(core, 3);
        tokens.push(core[..cut].to_string());
        tokens.push(core[cut..].to_string());
        return;
    }

    for clitic in CLITICS {
        let clitic_chars = clitic.chars().count();
        if lowered.ends_with(clitic) && lowered.chars().count() > clitic_chars {
            let cut = core_boundary(core, clitic_chars);
            tokens.push(core[..cut].to_string());
            tokens.push(core[cut..].to_string());
            return;
        }
    }

    tokens.push(core.to_string());
}

/// Byte offset at which the last `chars_from_end` characters of `text` begin.
fn core_boundary(text: &str, chars_from_end: usize) -> usize {
    text.char_indices()
        .rev()
        .nth(chars_from_end - 1)
        .map_or(0, |(offset, _)| offset)
}
