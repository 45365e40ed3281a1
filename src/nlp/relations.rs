use regex::Regex;

use crate::models::{EntityLabel, EntitySpan, EntityTree, Node, RelationMatch, TaggedToken};

/// Build a case-insensitive whole-word pattern for a connective such as "from"
pub fn connective_pattern(connective: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(r"(?i)\b{}\b", regex::escape(connective.trim())))
}

/// Decode `word/TAG word/TAG` text back to plain words joined by spaces
///
/// Each item is split on its last `/`; items without one are kept whole.
pub fn decode_tagged(text: &str) -> String {
    text.split(' ')
        .map(|item| match item.rfind('/') {
            Some(idx) => &item[..idx],
            None => item,
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Tokens preceding an entity, paired with that entity
struct Segment<'a> {
    filler: Vec<&'a TaggedToken>,
    entity: &'a EntitySpan,
}

/// Cut the top level of the tree at every entity span.
/// Tokens after the last entity belong to no segment.
fn segments(tree: &EntityTree) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut filler = Vec::new();

    for node in &tree.nodes {
        match node {
            Node::Token(token) => filler.push(token),
            Node::Entity(span) => segments.push(Segment {
                filler: std::mem::take(&mut filler),
                entity: span,
            }),
        }
    }

    segments
}

/// Relation matches between consecutive top-level entities
///
/// A pair matches when the labels are `subject` then `object`, the tokens
/// between them number at most `max_filler_tokens`, and `connective` matches
/// the filler words. Tags are not searched.
pub fn extract_rels(
    tree: &EntityTree,
    subject: EntityLabel,
    object: EntityLabel,
    connective: &Regex,
    max_filler_tokens: usize,
) -> Vec<RelationMatch> {
    segments(tree)
        .windows(2)
        .filter_map(|pair| {
            let (subj, obj) = (&pair[0], &pair[1]);
            if subj.entity.label != subject || obj.entity.label != object {
                return None;
            }
            if obj.filler.len() > max_filler_tokens {
                return None;
            }

            let words = obj
                .filler
                .iter()
                .map(|t| t.word.as_str())
                .collect::<Vec<_>>()
                .join(" ");
            if !connective.is_match(&words) {
                return None;
            }

            let filler = obj
                .filler
                .iter()
                .map(|t| t.encode())
                .collect::<Vec<_>>()
                .join(" ");

            Some(RelationMatch {
                subject_label: subj.entity.label,
                subject_text: subj.entity.tagged_text(),
                filler,
                object_label: obj.entity.label,
                object_text: obj.entity.tagged_text(),
            })
        })
        .collect()
}
