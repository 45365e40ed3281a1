use std::fmt;

use serde::{Deserialize, Serialize};

/// A word paired with its part-of-speech tag, as produced by the annotator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedToken {
    /// Surface text of the word - never changed after tagging
    pub word: String,
    /// Part-of-speech tag (Penn Treebank style, e.g. "NNP", "IN")
    pub tag: String,
}

impl TaggedToken {
    pub fn new(word: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            tag: tag.into(),
        }
    }

    /// Render as `word/TAG`, the encoding used by relation matches
    pub fn encode(&self) -> String {
        format!("{}/{}", self.word, self.tag)
    }
}

/// Named-entity class assigned to a span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityLabel {
    Person,
    Organization,
    Gpe,
    Location,
    Facility,
    Misc,
}

impl EntityLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityLabel::Person => "PERSON",
            EntityLabel::Organization => "ORGANIZATION",
            EntityLabel::Gpe => "GPE",
            EntityLabel::Location => "LOCATION",
            EntityLabel::Facility => "FACILITY",
            EntityLabel::Misc => "MISC",
        }
    }
}

impl fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A labeled group of consecutive tokens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySpan {
    pub label: EntityLabel,
    pub children: Vec<Node>,
}

impl EntitySpan {
    /// Build a flat span directly from tagged tokens
    pub fn new(label: EntityLabel, tokens: Vec<TaggedToken>) -> Self {
        Self {
            label,
            children: tokens.into_iter().map(Node::Token).collect(),
        }
    }

    /// All tokens under this span, in document order
    pub fn leaves(&self) -> Vec<&TaggedToken> {
        let mut leaves = Vec::new();
        collect_leaves(&self.children, &mut leaves);
        leaves
    }

    /// Leaf words joined with single spaces
    pub fn text(&self) -> String {
        self.leaves()
            .iter()
            .map(|t| t.word.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Leaf tokens rendered as `word/TAG` and joined with single spaces
    pub fn tagged_text(&self) -> String {
        self.leaves()
            .iter()
            .map(|t| t.encode())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A node of the entity tree: either a bare token or an entity span
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Node {
    Token(TaggedToken),
    Entity(EntitySpan),
}

fn collect_leaves<'a>(nodes: &'a [Node], out: &mut Vec<&'a TaggedToken>) {
    for node in nodes {
        match node {
            Node::Token(token) => out.push(token),
            Node::Entity(span) => collect_leaves(&span.children, out),
        }
    }
}

/// Output of the named-entity chunker: top-level tokens and entity spans
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityTree {
    pub nodes: Vec<Node>,
}

impl EntityTree {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    /// Every entity span in document order, nested spans after their parent
    pub fn entities(&self) -> Vec<&EntitySpan> {
        let mut spans = Vec::new();
        collect_entities(&self.nodes, &mut spans);
        spans
    }

    /// Total number of tokens in the tree
    pub fn token_count(&self) -> usize {
        let mut leaves = Vec::new();
        collect_leaves(&self.nodes, &mut leaves);
        leaves.len()
    }

    /// Flatten into (word, tag, IOB) triples, e.g. ("John", "NNP", "B-PERSON")
    pub fn conll_tags(&self) -> Vec<(String, String, String)> {
        let mut triples = Vec::new();
        for node in &self.nodes {
            match node {
                Node::Token(token) => {
                    triples.push((token.word.clone(), token.tag.clone(), "O".to_string()));
                }
                Node::Entity(span) => {
                    for (i, token) in span.leaves().into_iter().enumerate() {
                        let prefix = if i == 0 { "B" } else { "I" };
                        triples.push((
                            token.word.clone(),
                            token.tag.clone(),
                            format!("{}-{}", prefix, span.label),
                        ));
                    }
                }
            }
        }
        triples
    }
}

fn collect_entities<'a>(nodes: &'a [Node], out: &mut Vec<&'a EntitySpan>) {
    for node in nodes {
        if let Node::Entity(span) = node {
            out.push(span);
            collect_entities(&span.children, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tok(word: &str, tag: &str) -> TaggedToken {
        TaggedToken::new(word, tag)
    }

    #[test]
    fn test_span_text_joins_leaves() {
        let span = EntitySpan::new(
            EntityLabel::Person,
            vec![tok("John", "NNP"), tok("Smith", "NNP")],
        );

        assert_eq!(span.text(), "John Smith");
        assert_eq!(span.tagged_text(), "John/NNP Smith/NNP");
    }

    #[test]
    fn test_entities_include_nested_spans() {
        let inner = EntitySpan::new(EntityLabel::Person, vec![tok("Jane", "NNP")]);
        let outer = EntitySpan {
            label: EntityLabel::Organization,
            children: vec![Node::Entity(inner), Node::Token(tok("Capital", "NNP"))],
        };
        let tree = EntityTree::new(vec![Node::Token(tok("At", "IN")), Node::Entity(outer)]);

        let entities = tree.entities();
        assert_eq!(entities.len(), 2);
        assert_eq!(entities[0].label, EntityLabel::Organization);
        assert_eq!(entities[0].text(), "Jane Capital");
        assert_eq!(entities[1].label, EntityLabel::Person);
        assert_eq!(tree.token_count(), 3);
    }

    #[test]
    fn test_conll_tags() {
        let tree = EntityTree::new(vec![
            Node::Entity(EntitySpan::new(
                EntityLabel::Person,
                vec![tok("Mary", "NNP"), tok("Jones", "NNP")],
            )),
            Node::Token(tok(":", ":")),
        ]);

        let triples = tree.conll_tags();
        assert_eq!(triples[0].2, "B-PERSON");
        assert_eq!(triples[1].2, "I-PERSON");
        assert_eq!(triples[2], (":".to_string(), ":".to_string(), "O".to_string()));
    }
}
