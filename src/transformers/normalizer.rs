/*! Character normalization

Patterns are replaced by a single space (never by nothing), so that removing
a character never joins two words together.
!*/
use lazy_static::lazy_static;
use regex::Regex;

use super::Transform;

lazy_static! {
    static ref NON_ASCII: Regex = Regex::new(r"[^\x00-\x7F]+").unwrap();
    static ref PUNCTUATION: Regex = Regex::new(r"[^\w\s]").unwrap();
    static ref DIGITS: Regex = Regex::new(r"[0-9]").unwrap();
    static ref SINGLE_CHAR: Regex = Regex::new(r"(?:^| )\w(?:$| )").unwrap();
}

/// Removes, in order: non-ASCII runs, punctuation, digits and isolated single characters.
pub struct CharNormalizer {
    patterns: Vec<&'static Regex>,
}

impl Default for CharNormalizer {
    fn default() -> Self {
        Self {
            patterns: vec![&NON_ASCII, &PUNCTUATION, &DIGITS],
        }
    }
}

impl CharNormalizer {
    /// Isolated single characters share their surrounding spaces,
    /// so `a b c` needs more than one pass.
    fn remove_single_chars(text: String) -> String {
        let mut text = text;
        while SINGLE_CHAR.is_match(&text) {
            text = SINGLE_CHAR.replace_all(&text, " ").into_owned();
        }
        text
    }
}

impl Transform for CharNormalizer {
    fn transform_own(&self, text: String) -> String {
        let text = self
            .patterns
            .iter()
            .fold(text, |text, pattern| pattern.replace_all(&text, " ").into_owned());
        Self::remove_single_chars(text)
    }
}

/// Removes literal strings.
pub struct LiteralRemover {
    literals: Vec<&'static str>,
}

impl LiteralRemover {
    pub fn new(literals: Vec<&'static str>) -> Self {
        Self { literals }
    }
}

impl Default for LiteralRemover {
    /// Boilerplate titles (typo included) and underscores.
    fn default() -> Self {
        Self::new(vec![
            " THE PROJECT GUTENBERG EBOOK ",
            " THIS PROJECT GUTENBURG EBOOK ",
            " THIS PROJECT GUTENBERG EBOOK ",
            "_",
        ])
    }
}

impl Transform for LiteralRemover {
    fn transform_own(&self, text: String) -> String {
        self.literals
            .iter()
            .fold(text, |text, literal| text.replace(literal, ""))
    }
}
