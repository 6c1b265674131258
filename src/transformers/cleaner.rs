//! Cleaning chain and title extraction.
use std::fmt;

use super::{Boilerplate, CharNormalizer, LiteralRemover, Transform};

/// Document structure could not be turned into usable text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// nothing linguistic is left after cleaning.
    NoContent,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::NoContent => write!(f, "no textual content left after cleaning"),
        }
    }
}

/// Cleaned document body and its title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cleaned {
    pub text: String,
    pub title: String,
}

/// Chains [Transform]s, then extracts a title.
pub struct TextCleaner(Vec<Box<dyn Transform + Sync>>);

impl TextCleaner {
    pub fn add(&mut self, transform: Box<dyn Transform + Sync>) -> &mut TextCleaner {
        self.0.push(transform);
        self
    }

    pub fn clean(&self, raw: &str) -> Result<Cleaned, ParseError> {
        let text = self
            .0
            .iter()
            .fold(raw.to_string(), |text, transform| transform.transform_own(text));

        if !text.chars().any(char::is_alphanumeric) {
            return Err(ParseError::NoContent);
        }

        let title = Self::title(&text);
        Ok(Cleaned { text, title })
    }

    /// first non-blank line, right-trimmed.
    fn title(text: &str) -> String {
        text.lines()
            .map(str::trim_end)
            .find(|line| !line.is_empty())
            .unwrap_or_default()
            .to_string()
    }
}

impl Default for TextCleaner {
    fn default() -> Self {
        let mut cleaner = Self(vec![]);
        cleaner
            .add(Box::new(Boilerplate::default()))
            .add(Box::new(CharNormalizer::default()))
            .add(Box::new(LiteralRemover::default()));
        cleaner
    }
}
