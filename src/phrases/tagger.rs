//! Lexicon-first part-of-speech tagger with ordered suffix-rule backoff.

use regex::Regex;
use std::sync::LazyLock;

use super::lexicon::{closed_class_tag, open_class_tag};

/// A token paired with its Brown-style part-of-speech tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedToken {
    /// Token text exactly as it appeared in the input.
    pub text: String,
    /// Assigned tag, e.g. `NN`, `NNP`, `JJ`, `AT`.
    pub tag: &'static str,
}

/// Ordered backoff rules; the first matching pattern wins.
const BACKOFF_RULES: &[(&str, &str)] = &[
    (r"^-?[0-9]+(.[0-9]+)?$", "CD"),
    (r"^.*(-|:|;)$", ":"),
    (r"^(The|the|A|a|An|an)$", "AT"),
    (r"^.*able$", "JJ"),
    (r"^[A-Z].*$", "NNP"),
    (r"^.*ness$", "NN"),
    (r"^.*ly$", "RB"),
    (r"^.*s$", "NNS"),
    (r"^.*ing$", "VBG"),
    (r"^.*ed$", "VBD"),
];

static RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    BACKOFF_RULES
        .iter()
        .map(|(pattern, tag)| {
            let regex = Regex::new(pattern).expect("backoff rule pattern is valid");
            (regex, *tag)
        })
        .collect()
});

/// Assign a tag to every token.
///
/// Lookup order: punctuation, closed-class lexicon, open-class lexicon, then suffix rules,
/// defaulting to `NN`. Open-class entries apply to lower-case tokens and to the first word of a
/// sentence ("Excellent communication skills"), except that a sentence-initial adjective
/// opening a title-case run ("Senior Engineer") stays a proper noun. Acronyms such as `IT`
/// skip the function-word lexicon.
pub fn tag(tokens: &[String]) -> Vec<TaggedToken> {
    let mut tagged = Vec::with_capacity(tokens.len());
    let mut sentence_start = true;

    for (index, token) in tokens.iter().enumerate() {
        let opens_title = sentence_start
            && tokens
                .get(index + 1)
                .is_some_and(|next| next.starts_with(|c: char| c.is_uppercase()));
        let position = match (sentence_start, opens_title) {
            (false, _) => Position::Inside,
            (true, false) => Position::SentenceStart,
            (true, true) => Position::TitleStart,
        };
        let tag = tag_token(token, position);
        sentence_start = tag == ".";
        tagged.push(TaggedToken {
            text: token.clone(),
            tag,
        });
    }

    tagged
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    Inside,
    SentenceStart,
    /// First word of a sentence followed by another capitalised word.
    TitleStart,
}

fn tag_token(token: &str, position: Position) -> &'static str {
    if let Some(tag) = punctuation_tag(token) {
        return tag;
    }

    let lowered = token.replace('’', "'").to_lowercase();
    if !is_acronym(token)
        && let Some(tag) = closed_class_tag(&lowered)
    {
        return tag;
    }
    if let Some(tag) = open_class_tag(&lowered) {
        let applies = lowered == token
            || match position {
                Position::Inside => false,
                Position::SentenceStart => true,
                Position::TitleStart => tag.starts_with("VB"),
            };
        if applies {
            return tag;
        }
    }

    RULES
        .iter()
        .find(|(regex, _)| regex.is_match(token))
        .map_or("NN", |(_, tag)| *tag)
}

fn punctuation_tag(token: &str) -> Option<&'static str> {
    if token.chars().any(char::is_alphanumeric) {
        return None;
    }
    let tag = match token {
        "." | "!" | "?" => ".",
        "," => ",",
        "(" | "[" | "{" => "(",
        ")" | "]" | "}" => ")",
        "\"" | "'" | "''" | "`" | "``" | "“" | "”" | "‘" | "’" => "''",
        "&" => "CC",
        "-" | "--" | ":" | ";" | "–" | "—" => ":",
        _ => "SYM",
    };
    Some(tag)
}

/// Two or more letters, all upper-case (`IT`, `US`, `AWS`).
fn is_acronym(token: &str) -> bool {
    let letters: Vec<char> = token.chars().filter(|c| c.is_alphabetic()).collect();
    letters.len() > 1 && letters.iter().all(|c| c.is_uppercase())
}

/// Collapse a Brown tag onto the coarse set used by the chunker.
///
/// `NP`/`NP-TL` become `NNP`, a `-TL` (title) suffix is dropped, and a trailing plural or
/// superlative `S` is removed (`NNS` → `NN`, `NNPS` → `NNP`).
pub fn normalize_tag(tag: &str) -> &str {
    if tag == "NP" || tag == "NP-TL" {
        return "NNP";
    }
    if let Some(stripped) = tag.strip_suffix("-TL") {
        return stripped;
    }
    tag.strip_suffix('S').unwrap_or(tag)
}
