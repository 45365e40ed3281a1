//! Annotation provider capability and its built-in implementations.

pub mod error;
pub mod relations;
pub mod rule_based;

pub use error::*;
pub use relations::*;
pub use rule_based::*;

use regex::Regex;

use crate::models::{EntityLabel, EntityTree, RelationMatch, TaggedToken};

/// Pluggable NLP provider
///
/// The speaker pipeline only depends on this trait, so a statistical model,
/// a remote service or a scripted fake can be swapped in.
pub trait Annotator: Send + Sync {
    /// Human-readable backend identifier (e.g. "rule-based")
    fn backend_id(&self) -> &str;

    /// Split text into word tokens
    fn word_tokenize(&self, text: &str) -> Result<Vec<String>, AnnotationError>;

    /// Assign a part-of-speech tag to every token, preserving order
    fn pos_tag(&self, tokens: &[String]) -> Result<Vec<TaggedToken>, AnnotationError>;

    /// Group tagged tokens into labeled entity spans
    fn ne_chunk(&self, tagged: Vec<TaggedToken>) -> Result<EntityTree, AnnotationError>;

    /// Split text into sentences
    fn sent_tokenize(&self, text: &str) -> Result<Vec<String>, AnnotationError>;

    /// Find "<subject> <filler> <object>" matches between adjacent entities
    fn extract_relations(
        &self,
        tree: &EntityTree,
        subject: EntityLabel,
        object: EntityLabel,
        connective: &Regex,
        max_filler_tokens: usize,
    ) -> Result<Vec<RelationMatch>, AnnotationError> {
        Ok(extract_rels(tree, subject, object, connective, max_filler_tokens))
    }
}
