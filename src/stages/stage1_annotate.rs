use anyhow::Result;
use tracing::{debug, info};

use crate::models::EntityTree;
use crate::nlp::{AnnotationError, Annotator};

/// Perform Stage 1: tokenize, tag and chunk the document into an entity tree
///
/// Provider failures propagate unchanged; no fallback annotation is tried.
pub fn annotate(annotator: &dyn Annotator, text: &str) -> Result<EntityTree> {
    let tokens = annotator.word_tokenize(text)?;
    debug!("Tokenized {} tokens with {}", tokens.len(), annotator.backend_id());

    let tagged = annotator.pos_tag(&tokens)?;
    if tagged.len() != tokens.len() {
        return Err(AnnotationError::TagCountMismatch {
            tokens: tokens.len(),
            tags: tagged.len(),
        }
        .into());
    }

    let tree = annotator.ne_chunk(tagged)?;
    info!(
        "Annotated {} tokens into {} entity spans",
        tree.token_count(),
        tree.entities().len()
    );

    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaggedToken;
    use crate::nlp::RuleBasedAnnotator;

    /// Tagger that drops the last token
    struct ShortTagger;

    impl Annotator for ShortTagger {
        fn backend_id(&self) -> &str {
            "short-tagger"
        }

        fn word_tokenize(&self, text: &str) -> Result<Vec<String>, AnnotationError> {
            Ok(text.split_whitespace().map(str::to_string).collect())
        }

        fn pos_tag(&self, tokens: &[String]) -> Result<Vec<TaggedToken>, AnnotationError> {
            Ok(tokens
                .iter()
                .skip(1)
                .map(|t| TaggedToken::new(t.clone(), "NN"))
                .collect())
        }

        fn ne_chunk(&self, _tagged: Vec<TaggedToken>) -> Result<EntityTree, AnnotationError> {
            Ok(EntityTree::default())
        }

        fn sent_tokenize(&self, text: &str) -> Result<Vec<String>, AnnotationError> {
            Ok(vec![text.to_string()])
        }
    }

    #[test]
    fn test_annotate_builds_tree() {
        let tree = annotate(&RuleBasedAnnotator::new(), "Mary Jones: Good morning.").unwrap();

        assert_eq!(tree.token_count(), 6);
        assert_eq!(tree.entities().len(), 1);
    }

    #[test]
    fn test_tag_count_mismatch_is_an_error() {
        let err = annotate(&ShortTagger, "one two three").unwrap_err();

        let annotation = err.downcast_ref::<AnnotationError>().unwrap();
        assert!(matches!(
            annotation,
            AnnotationError::TagCountMismatch { tokens: 3, tags: 2 }
        ));
    }
}
