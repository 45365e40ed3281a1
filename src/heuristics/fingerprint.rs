use std::sync::LazyLock;

use regex::Regex;

static NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\W+").unwrap());

/// Removals applied in order. Patterns starting with `^` only strip a prefix;
/// the rest strip every non-overlapping occurrence.
static REMOVALS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [r"^the ", r" and ", r"^mr ", r"^mrs ", r"^ms "]
        .iter()
        .map(|p| Regex::new(p).unwrap())
        .collect()
});

/// Normalize a name into a compact matching key
///
/// Collapses honorific, punctuation, spacing and case variants of the same
/// name, so "Mr. Praveen Arora" and "Praveen Arora" both become
/// `praveenarora`.
pub fn fingerprint(name: &str) -> String {
    let name = name.replace('\n', " ");
    let name = name.trim();
    let mut key = NON_WORD.replace_all(name, " ").to_lowercase();

    for removal in REMOVALS.iter() {
        key = removal.replace_all(&key, "").into_owned();
    }

    key.replace(' ', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_honorific_variants_share_fingerprint() {
        assert_eq!(fingerprint("Mr. Praveen Arora"), "praveenarora");
        assert_eq!(fingerprint("Praveen Arora"), "praveenarora");
        assert_eq!(fingerprint("Mrs. Anita Rao"), fingerprint("Anita Rao"));
        assert_eq!(fingerprint("Ms Anita Rao"), fingerprint("Anita Rao"));
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(fingerprint("JOHN SMITH"), fingerprint("john smith"));
    }

    #[test]
    fn test_line_breaks_and_punctuation_collapse() {
        assert_eq!(fingerprint("  John\nSmith  "), "johnsmith");
        assert_eq!(fingerprint("John -- Smith, Jr."), "johnsmithjr");
    }

    #[test]
    fn test_anchored_removals_only_strip_prefix() {
        // "the" and "mr" in the middle of a name are kept
        assert_eq!(fingerprint("Anita the Great"), "anitathegreat");
        assert_eq!(fingerprint("Tom Mr Jones"), "tommrjones");
    }

    #[test]
    fn test_anchored_removals_apply_once_in_sequence() {
        // "the " goes first, which exposes "mr " as the new prefix
        assert_eq!(fingerprint("The Mr. Smith"), "smith");
        // "mrs " is checked after "mr ", so "mr mrs x" loses both
        assert_eq!(fingerprint("Mr Mrs Smith"), "smith");
        // but "mrs mr x" only loses the first honorific
        assert_eq!(fingerprint("Mrs Mr Smith"), "mrsmith");
    }

    #[test]
    fn test_and_removed_everywhere() {
        assert_eq!(fingerprint("Smith and Jones and Partners"), "smithjonespartners");
        // overlapping occurrences share a space, so only the first is removed
        assert_eq!(fingerprint("Tom and and Jerry"), "tomandjerry");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(fingerprint(""), "");
        assert_eq!(fingerprint("..."), "");
    }
}
