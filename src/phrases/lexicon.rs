//! Built-in word lists backing the part-of-speech tagger.
//!
//! Tags follow the Brown corpus conventions. Closed-class entries are looked up
//! case-insensitively except for acronyms; open-class entries only apply to lower-case or
//! sentence-initial tokens so that capitalised names keep falling through to the proper-noun
//! rule.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Function words, auxiliaries, and clitics.
const CLOSED_CLASS: &[(&str, &str)] = &[
    // articles and determiners
    ("the", "AT"),
    ("a", "AT"),
    ("an", "AT"),
    ("no", "AT"),
    ("every", "AT"),
    ("this", "DT"),
    ("that", "DT"),
    ("these", "DTS"),
    ("those", "DTS"),
    ("another", "DT"),
    ("each", "DT"),
    ("either", "DTX"),
    ("neither", "DTX"),
    ("some", "DTI"),
    ("any", "DTI"),
    ("all", "ABN"),
    ("half", "ABN"),
    ("both", "ABX"),
    // prepositions
    ("of", "IN"),
    ("in", "IN"),
    ("on", "IN"),
    ("at", "IN"),
    ("by", "IN"),
    ("for", "IN"),
    ("with", "IN"),
    ("from", "IN"),
    ("into", "IN"),
    ("onto", "IN"),
    ("about", "IN"),
    ("above", "IN"),
    ("across", "IN"),
    ("after", "IN"),
    ("against", "IN"),
    ("along", "IN"),
    ("alongside", "IN"),
    ("amid", "IN"),
    ("among", "IN"),
    ("around", "IN"),
    ("before", "IN"),
    ("behind", "IN"),
    ("below", "IN"),
    ("beneath", "IN"),
    ("beside", "IN"),
    ("besides", "IN"),
    ("between", "IN"),
    ("beyond", "IN"),
    ("despite", "IN"),
    ("during", "IN"),
    ("except", "IN"),
    ("inside", "IN"),
    ("like", "IN"),
    ("near", "IN"),
    ("off", "IN"),
    ("outside", "IN"),
    ("over", "IN"),
    ("per", "IN"),
    ("plus", "IN"),
    ("through", "IN"),
    ("throughout", "IN"),
    ("toward", "IN"),
    ("towards", "IN"),
    ("under", "IN"),
    ("underneath", "IN"),
    ("unlike", "IN"),
    ("until", "IN"),
    ("upon", "IN"),
    ("via", "IN"),
    ("within", "IN"),
    ("without", "IN"),
    ("to", "TO"),
    // conjunctions
    ("and", "CC"),
    ("or", "CC"),
    ("but", "CC"),
    ("nor", "CC"),
    ("yet", "CC"),
    ("&", "CC"),
    ("if", "CS"),
    ("because", "CS"),
    ("although", "CS"),
    ("though", "CS"),
    ("while", "CS"),
    ("whereas", "CS"),
    ("unless", "CS"),
    ("whether", "CS"),
    ("as", "CS"),
    ("than", "CS"),
    ("so", "CS"),
    // pronouns
    ("i", "PPSS"),
    ("we", "PPSS"),
    ("you", "PPSS"),
    ("they", "PPSS"),
    ("he", "PPS"),
    ("she", "PPS"),
    ("it", "PPS"),
    ("me", "PPO"),
    ("him", "PPO"),
    ("us", "PPO"),
    ("them", "PPO"),
    ("my", "PP$"),
    ("your", "PP$"),
    ("his", "PP$"),
    ("her", "PP$"),
    ("its", "PP$"),
    ("our", "PP$"),
    ("their", "PP$"),
    ("mine", "PP$$"),
    ("yours", "PP$$"),
    ("hers", "PP$$"),
    ("ours", "PP$$"),
    ("theirs", "PP$$"),
    ("myself", "PPL"),
    ("yourself", "PPL"),
    ("himself", "PPL"),
    ("herself", "PPL"),
    ("itself", "PPL"),
    ("ourselves", "PPLS"),
    ("yourselves", "PPLS"),
    ("themselves", "PPLS"),
    ("there", "EX"),
    // wh-words
    ("which", "WDT"),
    ("what", "WDT"),
    ("whatever", "WDT"),
    ("whichever", "WDT"),
    ("who", "WPS"),
    ("whoever", "WPS"),
    ("whom", "WPO"),
    ("whose", "WP$"),
    ("when", "WRB"),
    ("where", "WRB"),
    ("why", "WRB"),
    ("how", "WRB"),
    ("whenever", "WRB"),
    ("wherever", "WRB"),
    // modals and auxiliaries
    ("can", "MD"),
    ("could", "MD"),
    ("will", "MD"),
    ("would", "MD"),
    ("shall", "MD"),
    ("should", "MD"),
    ("may", "MD"),
    ("might", "MD"),
    ("must", "MD"),
    ("'ll", "MD"),
    ("'d", "MD"),
    ("be", "BE"),
    ("is", "BEZ"),
    ("are", "BER"),
    ("'re", "BER"),
    ("am", "BEM"),
    ("'m", "BEM"),
    ("was", "BEDZ"),
    ("were", "BED"),
    ("been", "BEN"),
    ("being", "BEG"),
    ("have", "HV"),
    ("'ve", "HV"),
    ("has", "HVZ"),
    ("had", "HVD"),
    ("having", "HVG"),
    ("do", "DO"),
    ("does", "DOZ"),
    ("did", "DOD"),
    ("not", "*"),
    ("n't", "*"),
    ("'s", "POS"),
    // quantifiers and ordinals
    ("many", "AP"),
    ("much", "AP"),
    ("more", "AP"),
    ("most", "AP"),
    ("few", "AP"),
    ("fewer", "AP"),
    ("several", "AP"),
    ("other", "AP"),
    ("less", "AP"),
    ("least", "AP"),
    ("first", "OD"),
    ("second", "OD"),
    ("third", "OD"),
    ("one", "CD"),
    ("two", "CD"),
    ("three", "CD"),
    ("four", "CD"),
    ("five", "CD"),
    ("six", "CD"),
    ("seven", "CD"),
    ("eight", "CD"),
    ("nine", "CD"),
    ("ten", "CD"),
    ("hundred", "CD"),
    ("thousand", "CD"),
    ("million", "CD"),
    // adverbs the suffix rules would miss
    ("also", "RB"),
    ("very", "QL"),
    ("too", "QL"),
    ("quite", "QL"),
    ("rather", "QL"),
    ("just", "RB"),
    ("only", "RB"),
    ("even", "RB"),
    ("still", "RB"),
    ("already", "RB"),
    ("always", "RB"),
    ("often", "RB"),
    ("again", "RB"),
    ("now", "RB"),
    ("then", "RB"),
    ("here", "RB"),
    ("soon", "RB"),
    ("ever", "RB"),
    ("never", "RB"),
    ("almost", "RB"),
    ("perhaps", "RB"),
    ("however", "RB"),
    ("therefore", "RB"),
    ("else", "RB"),
    ("up", "RP"),
    ("out", "RP"),
    ("down", "RP"),
];

/// Common verbs and adjectives seen in job postings.
const OPEN_CLASS: &[(&str, &str)] = &[
    ("apply", "VB"),
    ("join", "VB"),
    ("work", "VB"),
    ("help", "VB"),
    ("build", "VB"),
    ("develop", "VB"),
    ("design", "VB"),
    ("create", "VB"),
    ("support", "VB"),
    ("manage", "VB"),
    ("lead", "VB"),
    ("deliver", "VB"),
    ("ensure", "VB"),
    ("provide", "VB"),
    ("maintain", "VB"),
    ("write", "VB"),
    ("learn", "VB"),
    ("grow", "VB"),
    ("use", "VB"),
    ("make", "VB"),
    ("take", "VB"),
    ("get", "VB"),
    ("give", "VB"),
    ("offer", "VB"),
    ("include", "VB"),
    ("require", "VB"),
    ("need", "VB"),
    ("want", "VB"),
    ("look", "VB"),
    ("seek", "VB"),
    ("keep", "VB"),
    ("bring", "VB"),
    ("drive", "VB"),
    ("collaborate", "VB"),
    ("contribute", "VB"),
    ("communicate", "VB"),
    ("deploy", "VB"),
    ("implement", "VB"),
    ("improve", "VB"),
    ("understand", "VB"),
    ("know", "VB"),
    ("love", "VB"),
    ("enjoy", "VB"),
    ("share", "VB"),
    ("send", "VB"),
    ("find", "VB"),
    ("start", "VB"),
    ("become", "VB"),
    ("solve", "VB"),
    ("review", "VB"),
    ("offers", "VBZ"),
    ("provides", "VBZ"),
    ("includes", "VBZ"),
    ("requires", "VBZ"),
    ("seeks", "VBZ"),
    ("looks", "VBZ"),
    ("wants", "VBZ"),
    ("needs", "VBZ"),
    ("new", "JJ"),
    ("good", "JJ"),
    ("great", "JJ"),
    ("strong", "JJ"),
    ("excellent", "JJ"),
    ("senior", "JJ"),
    ("junior", "JJ"),
    ("large", "JJ"),
    ("small", "JJ"),
    ("big", "JJ"),
    ("high", "JJ"),
    ("low", "JJ"),
    ("full", "JJ"),
    ("key", "JJ"),
    ("exciting", "JJ"),
    ("competitive", "JJ"),
    ("successful", "JJ"),
    ("relevant", "JJ"),
    ("technical", "JJ"),
    ("modern", "JJ"),
    ("flexible", "JJ"),
    ("passionate", "JJ"),
    ("friendly", "JJ"),
    ("dynamic", "JJ"),
    ("innovative", "JJ"),
    ("talented", "JJ"),
    ("motivated", "JJ"),
    ("young", "JJ"),
    ("fast", "JJ"),
    ("global", "JJ"),
    ("international", "JJ"),
    ("local", "JJ"),
    ("remote", "JJ"),
    ("open", "JJ"),
    ("best", "JJT"),
    ("better", "JJR"),
    ("own", "JJ"),
    ("various", "JJ"),
    ("different", "JJ"),
    ("similar", "JJ"),
    ("current", "JJ"),
    ("previous", "JJ"),
    ("professional", "JJ"),
    ("commercial", "JJ"),
    ("digital", "JJ"),
    ("responsive", "JJ"),
    ("creative", "JJ"),
    ("clean", "JJ"),
    ("solid", "JJ"),
    ("proven", "JJ"),
    ("essential", "JJ"),
    ("ideal", "JJ"),
    ("hybrid", "JJ"),
    ("permanent", "JJ"),
    ("temporary", "JJ"),
    ("annual", "JJ"),
    ("agile", "JJ"),
    ("such", "JJ"),
];

static CLOSED: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| CLOSED_CLASS.iter().copied().collect());

static OPEN: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| OPEN_CLASS.iter().copied().collect());

/// Tag for a function word, matched case-insensitively.
pub(crate) fn closed_class_tag(lowered: &str) -> Option<&'static str> {
    CLOSED.get(lowered).copied()
}

/// Tag for a known content word; callers decide whether casing allows the lookup.
pub(crate) fn open_class_tag(lowered: &str) -> Option<&'static str> {
    OPEN.get(lowered).copied()
}
