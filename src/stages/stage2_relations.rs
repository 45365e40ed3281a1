use anyhow::{Context, Result};
use regex::Regex;
use tracing::{debug, info};

use crate::heuristics::fingerprint;
use crate::models::{EntityLabel, EntityTree, RelationMap};
use crate::nlp::{connective_pattern, decode_tagged, Annotator};

/// Configuration for speaker-to-firm relation extraction
#[derive(Debug, Clone)]
pub struct RelationConfig {
    /// Word linking a speaker to their firm ("John Smith from Acme Corp")
    pub connective: String,
    /// Maximum tokens allowed between the two entities
    pub max_filler_tokens: usize,
}

impl Default for RelationConfig {
    fn default() -> Self {
        Self {
            connective: "from".to_string(),
            max_filler_tokens: 10,
        }
    }
}

/// Perform Stage 2: build the fingerprint -> firm lookup
///
/// Runs PERSON-from-ORGANIZATION first. A PERSON-from-PERSON pass then fills
/// fingerprints still missing, recovering firms the chunker tagged as people.
pub fn extract_relations(
    annotator: &dyn Annotator,
    tree: &EntityTree,
    config: &RelationConfig,
) -> Result<RelationMap> {
    let connective = connective_pattern(&config.connective)
        .with_context(|| format!("Invalid connective: {:?}", config.connective))?;

    let mut relations = relations_between(
        annotator,
        tree,
        EntityLabel::Person,
        EntityLabel::Organization,
        &connective,
        config,
    )?;
    let primary = relations.len();

    let fallback = relations_between(
        annotator,
        tree,
        EntityLabel::Person,
        EntityLabel::Person,
        &connective,
        config,
    )?;
    let recovered = relations.merge_missing(fallback);

    for (speaker, firm) in relations.iter() {
        debug!("Relation {} -> {}", speaker, firm);
    }

    info!(
        "Relations: {} from organizations, {} recovered from person-tagged firms",
        primary, recovered
    );

    Ok(relations)
}

/// One relation pass; the first firm seen for a fingerprint wins
fn relations_between(
    annotator: &dyn Annotator,
    tree: &EntityTree,
    subject: EntityLabel,
    object: EntityLabel,
    connective: &Regex,
    config: &RelationConfig,
) -> Result<RelationMap> {
    let matches =
        annotator.extract_relations(tree, subject, object, connective, config.max_filler_tokens)?;

    let mut relations = RelationMap::new();
    for relation in matches {
        let speaker = fingerprint(&decode_tagged(&relation.subject_text));
        let firm = decode_tagged(&relation.object_text);
        if relations.insert_if_absent(speaker.clone(), firm.clone()) {
            debug!("{} {} -> {}", subject, speaker, firm);
        } else {
            debug!("Ignoring later firm {:?} for {}", firm, speaker);
        }
    }

    Ok(relations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntitySpan, Node, TaggedToken};
    use crate::nlp::RuleBasedAnnotator;

    fn tok(word: &str, tag: &str) -> Node {
        Node::Token(TaggedToken::new(word, tag))
    }

    fn ent(label: EntityLabel, words: &[&str]) -> Node {
        Node::Entity(EntitySpan::new(
            label,
            words.iter().map(|w| TaggedToken::new(*w, "NNP")).collect(),
        ))
    }

    fn person_from(person: &[&str], label: EntityLabel, firm: &[&str]) -> Vec<Node> {
        vec![
            ent(EntityLabel::Person, person),
            tok("from", "IN"),
            ent(label, firm),
            tok(".", "."),
        ]
    }

    fn extract(nodes: Vec<Node>) -> RelationMap {
        let tree = EntityTree::new(nodes);
        extract_relations(&RuleBasedAnnotator::new(), &tree, &RelationConfig::default()).unwrap()
    }

    #[test]
    fn test_person_from_organization() {
        let relations = extract(vec![
            ent(EntityLabel::Person, &["John", "Smith"]),
            tok("from", "IN"),
            ent(EntityLabel::Organization, &["Acme", "Corp"]),
            tok("welcomed", "VBD"),
            tok("everyone", "NN"),
        ]);

        assert_eq!(relations.get(&fingerprint("John Smith")), Some("Acme Corp"));
        assert_eq!(relations.len(), 1);
    }

    #[test]
    fn test_first_firm_wins_within_a_pass() {
        let mut nodes = person_from(&["John", "Smith"], EntityLabel::Organization, &["Acme", "Corp"]);
        nodes.extend(person_from(
            &["Mr.", "John", "Smith"],
            EntityLabel::Organization,
            &["Other", "Inc"],
        ));

        let relations = extract(nodes);

        assert_eq!(relations.get("johnsmith"), Some("Acme Corp"));
    }

    #[test]
    fn test_fallback_never_overwrites_organization_match() {
        // The person-tagged firm appears first, but the organization pass wins
        let mut nodes = person_from(&["John", "Smith"], EntityLabel::Person, &["Jane", "Doe"]);
        nodes.extend(person_from(
            &["John", "Smith"],
            EntityLabel::Organization,
            &["Acme", "Corp"],
        ));

        let relations = extract(nodes);

        assert_eq!(relations.get("johnsmith"), Some("Acme Corp"));
    }

    #[test]
    fn test_fallback_fills_missing_fingerprints() {
        let relations = extract(person_from(
            &["Anita", "Rao"],
            EntityLabel::Person,
            &["Nomura"],
        ));

        assert_eq!(relations.get("anitarao"), Some("Nomura"));
    }

    #[test]
    fn test_no_relations() {
        let relations = extract(vec![
            ent(EntityLabel::Person, &["Mary", "Jones"]),
            tok(":", ":"),
            tok("Hi", "UH"),
        ]);

        assert!(relations.is_empty());
    }
}
