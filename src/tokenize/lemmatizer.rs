//! Rule-based lemmatization.
use std::collections::{HashMap, HashSet};

use lazy_static::lazy_static;

pub trait Lemmatize {
    fn lemmatize(&self, word: &str) -> String;
}

lazy_static! {
    static ref IRREGULAR: HashMap<&'static str, &'static str> = [
        ("children", "child"),
        ("men", "man"),
        ("women", "woman"),
        ("gentlemen", "gentleman"),
        ("feet", "foot"),
        ("teeth", "tooth"),
        ("geese", "goose"),
        ("mice", "mouse"),
        ("oxen", "ox"),
        ("wolves", "wolf"),
        ("wives", "wife"),
        ("knives", "knife"),
        ("lives", "life"),
        ("leaves", "leaf"),
        ("halves", "half"),
        ("selves", "self"),
        ("shelves", "shelf"),
        ("thieves", "thief"),
        ("loaves", "loaf"),
    ]
    .into_iter()
    .collect();

    /// Words ending in `s` that are their own lemma.
    static ref INVARIANT: HashSet<&'static str> = [
        // adverbs, conjunctions, prepositions
        "always", "perhaps", "sometimes", "besides", "afterwards", "towards", "upwards",
        "downwards", "forwards", "backwards", "onwards", "outwards", "inwards", "homewards",
        "nowadays", "whereas", "unless", "thus", "alas", "yes", "hers", "ours", "yours", "theirs",
        "its", "his", "this", "was", "has", "does", "less", "across",
        // same form in singular and plural
        "series", "species", "means", "news", "headquarters", "barracks", "crossroads",
        "gallows", "whereabouts", "innings", "kudos", "mathematics", "physics", "politics",
        "economics", "ethics", "athletics", "measles", "billiards", "lens", "gas", "bias",
        "atlas", "canvas", "chaos", "pathos", "ethos", "cosmos",
    ]
    .into_iter()
    .collect();
}

/// Plural noun suffixes and their singular replacement, most specific first.
const SUFFIXES: &[(&str, &str)] = &[
    ("sses", "ss"),
    ("zzes", "zz"),
    ("xes", "x"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("ies", "y"),
    ("s", ""),
];

/// Endings in `s` that are not plurals.
const SINGULAR_S: &[&str] = &["ss", "us", "is"];

/// Shortest lemma a rule may produce.
const MIN_LEMMA_LEN: usize = 3;

/// Reduces plural nouns to their singular form.
/// Words that are not recognized plurals are returned unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct NounLemmatizer;

impl Lemmatize for NounLemmatizer {
    fn lemmatize(&self, word: &str) -> String {
        if let Some(lemma) = IRREGULAR.get(word) {
            return lemma.to_string();
        }

        if INVARIANT.contains(word) || SINGULAR_S.iter().any(|ending| word.ends_with(ending)) {
            return word.to_string();
        }

        SUFFIXES
            .iter()
            .filter_map(|(suffix, replacement)| {
                word.strip_suffix(suffix)
                    .map(|stem| format!("{}{}", stem, replacement))
            })
            .find(|lemma| lemma.chars().count() >= MIN_LEMMA_LEN)
            .unwrap_or_else(|| word.to_string())
    }
}
