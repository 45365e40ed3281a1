use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;

use crate::models::{EntityLabel, EntitySpan, EntityTree, Node, TaggedToken};

use super::{AnnotationError, Annotator};

/// Honorifics are tokenized with their trailing period and tagged as names
const HONORIFICS: &[&str] = &["mr", "mrs", "ms", "dr", "prof"];

/// A period after one of these does not end a sentence
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "e.g", "i.e", "approx", "rs",
];

/// Words marking a name run as an organization
const ORGANIZATION_KEYWORDS: &[&str] = &[
    "corp",
    "corporation",
    "inc",
    "ltd",
    "limited",
    "llc",
    "llp",
    "plc",
    "co",
    "company",
    "bank",
    "capital",
    "securities",
    "partners",
    "group",
    "holdings",
    "investments",
    "investment",
    "advisors",
    "advisory",
    "asset",
    "assets",
    "management",
    "fund",
    "funds",
    "financial",
    "finance",
    "ventures",
    "associates",
    "equity",
    "equities",
    "broking",
    "brokers",
    "research",
    "insurance",
    "technologies",
    "industries",
    "enterprises",
    "mutual",
    "amc",
];

static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:[Mm]rs|[Mm]r|[Mm]s|[Dd]r|[Pp]rof)\.|\w+(?:['’&.-]\w+)*|\S").unwrap()
});

/// Closed-class and frequent transcript words with a fixed tag
static LEXICON: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let groups: &[(&str, &[&str])] = &[
        ("DT", &["the", "a", "an", "this", "that", "these", "those", "each", "every", "some", "any", "all", "no"]),
        (
            "IN",
            &[
                "from", "of", "in", "on", "at", "by", "for", "with", "about", "into", "over",
                "after", "before", "under", "between", "through", "during", "as", "than",
                "since", "until", "per", "via", "if", "because", "while", "across", "within",
            ],
        ),
        ("CC", &["and", "or", "but", "nor", "yet", "so"]),
        ("TO", &["to"]),
        ("PRP", &["i", "you", "he", "she", "it", "we", "they", "me", "him", "us", "them"]),
        ("PRP$", &["my", "your", "his", "her", "its", "our", "their"]),
        ("MD", &["will", "would", "can", "could", "shall", "should", "may", "might", "must"]),
        ("WP", &["what", "who", "whom", "which"]),
        ("WRB", &["when", "where", "why", "how"]),
        ("UH", &["yes", "yeah", "hello", "hi", "okay", "ok", "sure", "oh"]),
        (
            "RB",
            &[
                "not", "also", "very", "just", "now", "then", "there", "here", "again", "well",
                "ahead", "only", "really", "actually",
            ],
        ),
        ("JJ", &["good", "great", "next", "first", "last", "new", "other", "same", "many", "much"]),
        (
            "VB",
            &["be", "go", "take", "welcome", "begin", "let", "please", "hand", "ask", "proceed"],
        ),
        ("VBP", &["are", "am", "have", "do", "thank", "see", "think", "believe"]),
        ("VBZ", &["is", "has", "does"]),
        ("VBD", &["was", "were", "had", "did", "welcomed", "said"]),
        ("VBN", &["been", "joined"]),
        ("VBG", &["joining", "being", "having", "speaking"]),
        (
            "NN",
            &[
                "morning", "afternoon", "evening", "everyone", "question", "line", "call",
                "quarter", "year", "time", "conference",
            ],
        ),
        ("NNS", &["thanks", "ladies", "gentlemen", "questions", "participants", "results"]),
    ];

    groups
        .iter()
        .flat_map(|(tag, words)| words.iter().map(move |w| (*w, *tag)))
        .collect()
});

static ORGANIZATION_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ORGANIZATION_KEYWORDS.iter().copied().collect());

/// Deterministic annotator needing no trained model
///
/// Capitalized words outside a small lexicon are treated as proper nouns and
/// grouped into PERSON or ORGANIZATION spans. It is tuned for the
/// "Name from Firm: remarks" shape of call transcripts, not general text.
#[derive(Debug, Clone, Default)]
pub struct RuleBasedAnnotator;

impl RuleBasedAnnotator {
    pub fn new() -> Self {
        Self
    }
}

impl Annotator for RuleBasedAnnotator {
    fn backend_id(&self) -> &str {
        "rule-based"
    }

    fn word_tokenize(&self, text: &str) -> Result<Vec<String>, AnnotationError> {
        Ok(TOKEN
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect())
    }

    fn pos_tag(&self, tokens: &[String]) -> Result<Vec<TaggedToken>, AnnotationError> {
        Ok(tokens
            .iter()
            .map(|word| TaggedToken::new(word.clone(), tag_word(word)))
            .collect())
    }

    fn ne_chunk(&self, tagged: Vec<TaggedToken>) -> Result<EntityTree, AnnotationError> {
        let mut nodes = Vec::new();
        let mut run: Vec<TaggedToken> = Vec::new();

        for token in tagged {
            if token.tag == "NNP" {
                run.push(token);
                continue;
            }
            if !run.is_empty() {
                nodes.push(Node::Entity(span_for_run(std::mem::take(&mut run))));
            }
            nodes.push(Node::Token(token));
        }

        if !run.is_empty() {
            nodes.push(Node::Entity(span_for_run(run)));
        }

        Ok(EntityTree::new(nodes))
    }

    fn sent_tokenize(&self, text: &str) -> Result<Vec<String>, AnnotationError> {
        Ok(split_sentences(text))
    }
}

fn tag_word(word: &str) -> String {
    let lower = word.to_lowercase();

    if HONORIFICS.contains(&lower.trim_end_matches('.')) {
        return "NNP".to_string();
    }
    if !word.chars().any(char::is_alphanumeric) {
        return match word {
            "." | "!" | "?" => ".".to_string(),
            ":" | ";" | "-" | "–" | "—" => ":".to_string(),
            other => other.to_string(),
        };
    }
    if word.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        return "CD".to_string();
    }
    if let Some(tag) = LEXICON.get(lower.as_str()) {
        return tag.to_string();
    }
    if word.chars().next().is_some_and(char::is_uppercase) {
        "NNP".to_string()
    } else {
        "NN".to_string()
    }
}

fn span_for_run(run: Vec<TaggedToken>) -> EntitySpan {
    let label = if is_organization(&run) {
        EntityLabel::Organization
    } else {
        EntityLabel::Person
    };
    EntitySpan::new(label, run)
}

fn is_organization(run: &[TaggedToken]) -> bool {
    let has_keyword = run.iter().any(|t| {
        let lower = t.word.to_lowercase();
        ORGANIZATION_SET.contains(lower.trim_end_matches('.'))
    });
    if has_keyword {
        return true;
    }

    // A lone acronym such as "HDFC" or "IBM"
    match run {
        [single] => {
            let len = single.word.chars().count();
            (2..=5).contains(&len) && single.word.chars().all(|c| c.is_ascii_uppercase())
        }
        _ => false,
    }
}

/// Split text after `.`, `!` or `?` followed by whitespace
///
/// Periods after known abbreviations and capital initials do not end a
/// sentence. Each sentence starts at its first non-whitespace character.
pub fn split_sentences(text: &str) -> Vec<String> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut sentences = Vec::new();
    let mut start: Option<usize> = None;
    let mut i = 0;

    while i < chars.len() {
        let (pos, c) = chars[i];

        let sentence_start = match start {
            Some(s) => s,
            None if c.is_whitespace() => {
                i += 1;
                continue;
            }
            None => {
                start = Some(pos);
                pos
            }
        };

        if !matches!(c, '.' | '!' | '?') {
            i += 1;
            continue;
        }

        // Swallow the rest of the terminator and any closing quotes
        let mut j = i;
        while j + 1 < chars.len() && matches!(chars[j + 1].1, '.' | '!' | '?') {
            j += 1;
        }
        while j + 1 < chars.len() && matches!(chars[j + 1].1, '"' | '\'' | ')' | ']' | '”' | '’') {
            j += 1;
        }

        let at_boundary = j + 1 == chars.len() || chars[j + 1].1.is_whitespace();
        let abbreviated = c == '.' && ends_with_abbreviation(&text[sentence_start..pos]);

        if at_boundary && !abbreviated {
            let end = chars[j].0 + chars[j].1.len_utf8();
            sentences.push(text[sentence_start..end].to_string());
            start = None;
        }

        i = j + 1;
    }

    if let Some(s) = start {
        let rest = text[s..].trim_end();
        if !rest.is_empty() {
            sentences.push(rest.to_string());
        }
    }

    sentences
}

fn ends_with_abbreviation(preceding: &str) -> bool {
    let last = preceding
        .split_whitespace()
        .last()
        .unwrap_or("")
        .trim_start_matches(|c: char| !c.is_alphanumeric());

    let mut chars = last.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        // capital initial, as in "J. Smith"; "I." still ends a sentence
        return c.is_uppercase() && c != 'I';
    }

    ABBREVIATIONS.contains(&last.to_lowercase().as_str())
}
