//! Tagging of new words into vocabulary rows.
use log::debug;

use super::{labels, LexiconTagger};
use crate::lang::StopwordLang;
use crate::tables::{is_degenerate, VocabularyRow};

/// All taggers should implement [PosTagger] to be useable by the [Tagger].
pub trait PosTagger {
    /// Penn Treebank tag of a lowercase word.
    fn tag(&self, word: &str) -> &'static str;
}

pub struct Tagger {
    tagger: Box<dyn PosTagger + Sync>,
}

impl Default for Tagger {
    fn default() -> Self {
        Self::new(Box::new(LexiconTagger))
    }
}

impl Tagger {
    pub fn new(tagger: Box<dyn PosTagger + Sync>) -> Self {
        Self { tagger }
    }

    /// Build vocabulary rows for new words, labelled with the document language.
    ///
    /// Degenerate words are dropped. Frequencies are left unset.
    pub fn tag<'a>(
        &self,
        words: impl IntoIterator<Item = &'a str>,
        lang: StopwordLang,
    ) -> Vec<VocabularyRow> {
        let mut nb_dropped = 0;
        let rows: Vec<VocabularyRow> = words
            .into_iter()
            .filter(|word| {
                let degenerate = is_degenerate(word);
                if degenerate {
                    nb_dropped += 1;
                }
                !degenerate
            })
            .map(|word| {
                let pos = labels::label(self.tagger.tag(word));
                VocabularyRow::new(word.to_string(), pos, lang.to_string())
            })
            .collect();

        if nb_dropped > 0 {
            debug!("dropped {} degenerate words", nb_dropped);
        }
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_and_labels() {
        let rows = Tagger::default().tag(["whale", "quickly"], StopwordLang::English);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].word, "whale");
        assert_eq!(rows[0].pos, "noun");
        assert_eq!(rows[0].lang, "english");
        assert_eq!(rows[0].unique_frequency, None);
        assert_eq!(rows[1].pos, "adverb");
    }

    #[test]
    fn drops_long_words() {
        let long = "x".repeat(37);
        let rows = Tagger::default().tag([long.as_str(), "sea"], StopwordLang::English);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].word, "sea");
    }

    #[test]
    fn unmapped_tags_pass_through() {
        struct Sym;
        impl PosTagger for Sym {
            fn tag(&self, _: &str) -> &'static str {
                "SYM"
            }
        }
        let rows = Tagger::new(Box::new(Sym)).tag(["whale"], StopwordLang::French);
        assert_eq!(rows[0].pos, "SYM");
        assert_eq!(rows[0].lang, "french");
    }
}
