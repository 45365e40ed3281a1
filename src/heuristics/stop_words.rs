use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};

/// Capitalized words the entity chunker commonly mistakes for people
pub const DEFAULT_STOP_WORDS: &[&str] = &[
    // courtesies and sentence openers
    "thank you",
    "thanks",
    "thank",
    "good",
    "good morning",
    "good afternoon",
    "good evening",
    "hello",
    "hi",
    "yes",
    "yeah",
    "no",
    "okay",
    "ok",
    "sure",
    "right",
    "so",
    "well",
    "now",
    "also",
    "sir",
    "madam",
    "ladies",
    "gentlemen",
    "everyone",
    "all",
    "participants",
    "participant",
    "moderator",
    "operator",
    "analyst",
    "management",
    "company",
    "question",
    "questions",
    "answer",
    // reporting vocabulary
    "revenue",
    "revenues",
    "ebitda",
    "pat",
    "capex",
    "margin",
    "margins",
    "guidance",
    "outlook",
    "quarter",
    "yoy",
    "qoq",
    "q1",
    "q2",
    "q3",
    "q4",
    "fy",
    "h1",
    "h2",
    "covid",
    // calendar
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// Immutable set of lower-case names never treated as speakers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// An empty set - nothing is filtered
    pub fn empty() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    /// Build from arbitrary words, lower-casing each
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// Load a JSON array of strings
    ///
    /// Expected format:
    /// ```json
    /// ["thank you", "operator", "revenue"]
    /// ```
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read stop words: {:?}", path))?;
        let words: Vec<String> =
            serde_json::from_str(&content).context("Failed to parse stop words JSON")?;
        Ok(Self::from_words(words))
    }

    /// Return a new set with additional words
    pub fn with_words<I, S>(&self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = self.words.clone();
        words.extend(Self::from_words(extra).words);
        Self { words }
    }

    /// Whether a candidate name is stop-listed (compared lower-cased)
    pub fn contains(&self, candidate: &str) -> bool {
        self.words.contains(&candidate.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopWords {
    fn default() -> Self {
        Self::from_words(DEFAULT_STOP_WORDS)
    }
}
