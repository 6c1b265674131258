//! Per-document extraction result.
use crate::lang::StopwordLang;
use crate::tokenize::Tokens;
use crate::transformers::Cleaned;

/// Everything extracted from a single document.
///
/// Only lives for one iteration of the crawl.
#[derive(Debug, Clone)]
pub struct DocumentResult {
    pub index: u64,
    pub url: String,
    pub title: String,
    pub lang: StopwordLang,
    pub body: String,
    pub tokens: Tokens,
}

impl DocumentResult {
    pub fn new(index: u64, url: String, cleaned: Cleaned, lang: StopwordLang, tokens: Tokens) -> Self {
        Self {
            index,
            url,
            title: cleaned.title,
            lang,
            body: cleaned.text,
            tokens,
        }
    }

    /// A document that contributes nothing.
    pub fn empty(index: u64, url: String, lang: StopwordLang) -> Self {
        Self {
            index,
            url,
            title: String::new(),
            lang,
            body: String::new(),
            tokens: Tokens::default(),
        }
    }
}
