//! whatlang identifier
use log::debug;

use super::{Identification, Identifier};

/// Trigram based classifier.
///
/// Labels are ISO 639-3 codes (`eng`, `fra`...).
#[derive(Debug, Default, Clone, Copy)]
pub struct WhatLang;

impl Identifier for WhatLang {
    fn identify(&self, text: &str) -> Option<Identification> {
        let info = ::whatlang::detect(text)?;
        debug!("whatlang: {:?}", info);
        Some(Identification::new(info.lang().code(), info.confidence()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identify_english() {
        let text = "It was the best of times, it was the worst of times, it was the age of wisdom, \
                    it was the age of foolishness, it was the epoch of belief.";
        let id = WhatLang.identify(text).unwrap();
        assert_eq!(id.label(), "eng");
    }

    #[test]
    fn identify_nothing() {
        assert!(WhatLang.identify("").is_none());
    }
}
