//! Penn Treebank tags to coarse categories.
use std::collections::HashMap;

use lazy_static::lazy_static;

lazy_static! {
    pub static ref POS_LABELS: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("CC", "conjunction");
        m.insert("CD", "cardinal digit");
        m.insert("DT", "determiner");
        m.insert("EX", "existential there");
        m.insert("FW", "foreign");
        m.insert("IN", "conjunction");
        m.insert("JJ", "adjective");
        m.insert("JJR", "adjective");
        m.insert("JJS", "adjective");
        m.insert("LS", "list");
        m.insert("MD", "modal");
        m.insert("NN", "noun");
        m.insert("NNS", "noun");
        m.insert("NNP", "noun");
        m.insert("NNPS", "noun");
        m.insert("PDT", "predeterminer");
        m.insert("POS", "possessive");
        m.insert("PRP", "pronoun");
        m.insert("PRP$", "pronoun");
        m.insert("RB", "adverb");
        m.insert("RBR", "adverb");
        m.insert("RBS", "adverb");
        m.insert("RP", "particle");
        m.insert("TO", "to");
        m.insert("UH", "interjection");
        m.insert("VB", "verb");
        m.insert("VBD", "verb");
        m.insert("VBG", "verb");
        m.insert("VBN", "verb");
        m.insert("VBP", "verb");
        m.insert("VBZ", "verb");
        m.insert("WDT", "wh-determiner");
        m.insert("WP", "wh-pronoun");
        m.insert("WP$", "wh-pronoun");
        m.insert("WRB", "wh-adverb");
        m
    };
}

/// Coarse category of a tag. Unknown tags are passed through.
pub fn label(tag: &str) -> String {
    POS_LABELS
        .get(tag)
        .map(|label| label.to_string())
        .unwrap_or_else(|| tag.to_string())
}

#[cfg(test)]
mod tests {
    use super::label;

    #[test]
    fn known() {
        assert_eq!(label("NNS"), "noun");
        assert_eq!(label("PRP$"), "pronoun");
        assert_eq!(label("WRB"), "wh-adverb");
    }

    #[test]
    fn passthrough() {
        assert_eq!(label("SYM"), "SYM");
    }
}
