//! Document language detection with a fixed fallback.
use log::debug;

use super::{Identifier, WhatLang};
use crate::lang::StopwordLang;

/// Maps classifier output onto a [StopwordLang].
///
/// Any failure (no identification, unsupported language) falls back to [StopwordLang::default].
pub struct LanguageDetector {
    identifier: Box<dyn Identifier>,
}

impl LanguageDetector {
    pub fn new(identifier: Box<dyn Identifier>) -> Self {
        Self { identifier }
    }

    pub fn detect(&self, text: &str) -> StopwordLang {
        match self.identifier.identify(text) {
            Some(id) => {
                debug!("identified {} ({:.2})", id.label(), id.prob());
                StopwordLang::from_code(id.label()).unwrap_or_else(|| {
                    debug!("unsupported language {}, falling back", id.label());
                    StopwordLang::default()
                })
            }
            None => {
                debug!("no identification, falling back");
                StopwordLang::default()
            }
        }
    }
}

impl Default for LanguageDetector {
    fn default() -> Self {
        Self::new(Box::new(WhatLang))
    }
}
