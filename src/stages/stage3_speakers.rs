use anyhow::Result;
use tracing::{debug, enabled, info, Level};

use crate::heuristics::{fingerprint, StopWords};
use crate::models::{EntityLabel, EntityTree, RelationMap, Speaker};
use crate::nlp::Annotator;

/// Configuration for speaker detection
#[derive(Debug, Clone, Default)]
pub struct SpeakerConfig {
    /// Names never treated as speakers
    pub stop_words: StopWords,
}

/// Result of Stage 3 speaker detection
#[derive(Debug, Clone)]
pub struct SpeakerDetection {
    /// Confirmed speakers in first-mention order
    pub speakers: Vec<Speaker>,
    /// Distinct PERSON mentions considered, after stop-word filtering
    pub candidates: Vec<String>,
}

/// Distinct PERSON mentions in document order, minus stop-listed names
///
/// Deduplication is by exact surface text, so "Mr. Praveen Arora" and
/// "Praveen Arora" are separate candidates.
pub fn collect_candidates(tree: &EntityTree, stop_words: &StopWords) -> Vec<String> {
    let mut people: Vec<String> = Vec::new();

    for span in tree.entities() {
        if span.label != EntityLabel::Person {
            continue;
        }
        let person = span.text();
        if stop_words.contains(&person) {
            debug!("Stop-listed candidate {:?}", person);
            continue;
        }
        if !people.contains(&person) {
            people.push(person);
        }
    }

    people
}

/// Perform Stage 3: keep the candidates that open a line of dialogue
///
/// A candidate is a speaker when some sentence starts with its exact text,
/// following the "NAME: remarks" transcript convention. Each speaker's firm is
/// looked up by fingerprint; a missing relation leaves the firm unset.
pub fn detect_speakers(
    annotator: &dyn Annotator,
    tree: &EntityTree,
    text: &str,
    relations: &RelationMap,
    config: &SpeakerConfig,
) -> Result<SpeakerDetection> {
    let candidates = collect_candidates(tree, &config.stop_words);
    let sentences = annotator.sent_tokenize(text)?;

    let mut speakers = Vec::new();
    for person in &candidates {
        let Some(opening) = sentences.iter().find(|s| s.starts_with(person.as_str())) else {
            debug!("Mention {:?} never opens a sentence", person);
            continue;
        };

        debug!("PERSON: {}", person);
        if enabled!(Level::DEBUG) {
            log_portion(annotator, tree, opening);
        }

        let firm = relations.get(&fingerprint(person)).map(str::to_string);
        speakers.push(Speaker {
            name: person.clone(),
            firm,
        });
    }

    info!(
        "Detected {} speakers from {} candidates across {} sentences",
        speakers.len(),
        candidates.len(),
        sentences.len()
    );

    Ok(SpeakerDetection {
        speakers,
        candidates,
    })
}

/// Log the tree tokens covering the first occurrence of `sentence`
fn log_portion(annotator: &dyn Annotator, tree: &EntityTree, sentence: &str) {
    let look = match annotator.word_tokenize(sentence) {
        Ok(look) => look,
        Err(e) => {
            debug!("No token window for {:?}: {}", sentence, e);
            return;
        }
    };

    if let Some(portion) = find_portion(&tree.conll_tags(), &look) {
        debug!("PORTION: {:?}", portion);
    }
}

fn find_portion<'a>(
    conll: &'a [(String, String, String)],
    look: &[String],
) -> Option<&'a [(String, String, String)]> {
    if look.is_empty() || look.len() > conll.len() {
        return None;
    }

    conll.windows(look.len()).find(|window| {
        window
            .iter()
            .zip(look)
            .all(|((word, _, _), wanted)| word == wanted)
    })
}
