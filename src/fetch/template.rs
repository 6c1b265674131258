//! Url templates.
use std::{fmt, str::FromStr};

use crate::error::Error;

/// Substituted by the document index.
pub const PLACEHOLDER: &str = "INDEX";

/// An archive url, holding one or more [PLACEHOLDER]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlTemplate(String);

impl UrlTemplate {
    /// Url of the document at `index`.
    pub fn url(&self, index: u64) -> String {
        self.0.replace(PLACEHOLDER, &index.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for UrlTemplate {
    type Err = Error;

    /// Checks that the template holds a placeholder and yields valid urls.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.contains(PLACEHOLDER) {
            return Err(Error::Custom(format!(
                "url template {} has no {} placeholder",
                s, PLACEHOLDER
            )));
        }
        let template = Self(s.to_string());
        url::Url::parse(&template.url(1))?;
        Ok(template)
    }
}

impl fmt::Display for UrlTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_every_placeholder() {
        let t: UrlTemplate = "https://www.gutenberg.org/cache/epub/INDEX/pgINDEX.txt"
            .parse()
            .unwrap();
        assert_eq!(t.url(42), "https://www.gutenberg.org/cache/epub/42/pg42.txt");
    }

    #[test]
    fn rejects_missing_placeholder() {
        assert!("https://www.gutenberg.org/files/1/1-0.txt"
            .parse::<UrlTemplate>()
            .is_err());
    }

    #[test]
    fn rejects_invalid_url() {
        assert!("not a url INDEX".parse::<UrlTemplate>().is_err());
    }
}
