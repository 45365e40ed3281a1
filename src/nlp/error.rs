use thiserror::Error;

/// Failure raised by an annotation provider
#[derive(Debug, Error)]
pub enum AnnotationError {
    #[error("tokenization failed: {0}")]
    Tokenize(String),

    #[error("part-of-speech tagging failed: {0}")]
    Tag(String),

    #[error("tagger returned {tags} tags for {tokens} tokens")]
    TagCountMismatch { tokens: usize, tags: usize },

    #[error("entity chunking failed: {0}")]
    Chunk(String),

    #[error("sentence splitting failed: {0}")]
    SentenceSplit(String),

    #[error("relation extraction failed: {0}")]
    Relation(String),
}
