//! Language-aware tokenizer.
use std::collections::BTreeSet;

use log::debug;
use unicode_segmentation::UnicodeSegmentation;

use super::{CollocationFinder, Lemmatize, NounLemmatizer};
use crate::lang::StopwordLang;

/// Token streams extracted from a single document.
#[derive(Debug, Default, Clone)]
pub struct Tokens {
    /// union of filtered and lemmatized tokens.
    pub all: BTreeSet<String>,
    /// lowercase tokens without stopwords, in order.
    pub filtered: Vec<String>,
    /// lemmas of [Tokens::filtered], in order.
    pub lemmas: Vec<String>,
    /// notable adjacent lemma pairs.
    pub collocations: Vec<(String, String)>,
}

pub struct Tokenizer {
    lemmatizer: Box<dyn Lemmatize + Sync>,
    finder: CollocationFinder,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(Box::new(NounLemmatizer), CollocationFinder::default())
    }
}

impl Tokenizer {
    pub fn new(lemmatizer: Box<dyn Lemmatize + Sync>, finder: CollocationFinder) -> Self {
        Self { lemmatizer, finder }
    }

    pub fn tokenize(&self, text: &str, lang: StopwordLang) -> Tokens {
        let stopwords = lang.stopwords();

        let filtered: Vec<String> = text
            .unicode_words()
            .map(str::to_lowercase)
            .filter(|word| !stopwords.contains(word.as_str()))
            .collect();

        // lemmatization rules are English only
        let lemmas: Vec<String> = if lang == StopwordLang::English {
            filtered
                .iter()
                .map(|word| self.lemmatizer.lemmatize(word))
                .collect()
        } else {
            filtered.clone()
        };

        let collocations = self.finder.find(&lemmas);

        let all: BTreeSet<String> = filtered.iter().chain(lemmas.iter()).cloned().collect();

        debug!(
            "{} tokens ({} unique), {} collocations",
            filtered.len(),
            all.len(),
            collocations.len()
        );

        Tokens {
            all,
            filtered,
            lemmas,
            collocations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_stopwords_and_lowercases() {
        let tokens = Tokenizer::default().tokenize("The Whale and the Sea", StopwordLang::English);
        assert_eq!(tokens.filtered, vec!["whale", "sea"]);
    }

    #[test]
    fn all_is_union_of_forms() {
        let tokens = Tokenizer::default().tokenize("whales whale ships", StopwordLang::English);
        let all: Vec<&str> = tokens.all.iter().map(String::as_str).collect();
        assert_eq!(all, vec!["ship", "ships", "whale", "whales"]);
        assert_eq!(tokens.lemmas, vec!["whale", "whale", "ship"]);
    }

    #[test]
    fn collocations_from_lemmas() {
        let text = "white whales swam white whale dove white whales again";
        let tokens = Tokenizer::default().tokenize(text, StopwordLang::English);
        assert_eq!(
            tokens.collocations[0],
            ("white".to_string(), "whale".to_string())
        );
    }

    #[test]
    fn adverbs_in_s_keep_their_form() {
        let tokens = Tokenizer::default().tokenize("always perhaps", StopwordLang::English);
        let all: Vec<&str> = tokens.all.iter().map(String::as_str).collect();
        assert_eq!(all, vec!["always", "perhaps"]);
    }

    #[test]
    fn latin_script_stopwords() {
        let tokens = Tokenizer::default().tokenize(
            "och det var en gammal bok som jag har",
            StopwordLang::Swedish,
        );
        assert_eq!(tokens.filtered, vec!["gammal", "bok"]);

        let tokens =
            Tokenizer::default().tokenize("az egy nem hogy volt kutya", StopwordLang::Hungarian);
        assert_eq!(tokens.filtered, vec!["kutya"]);
    }

    #[test]
    fn other_languages_are_not_lemmatized() {
        let tokens = Tokenizer::default().tokenize("les baleines blanches", StopwordLang::French);
        assert_eq!(tokens.filtered, vec!["baleines", "blanches"]);
        assert_eq!(tokens.lemmas, tokens.filtered);
    }
}
