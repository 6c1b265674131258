/*! Lexicon and suffix based tagger

Closed-class words (determiners, pronouns, prepositions...) and frequent irregular verbs
are looked up in a lexicon. Other words are tagged from their suffix, defaulting to `NN`.
!*/
use std::collections::HashMap;

use lazy_static::lazy_static;

use super::PosTagger;

lazy_static! {
    static ref LEXICON: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        let classes: &[(&str, &[&str])] = &[
            ("DT", &["the", "a", "an", "this", "that", "these", "those", "every", "each", "another", "any", "some", "no", "either", "neither"]),
            ("PDT", &["all", "both", "half"]),
            ("CC", &["and", "or", "but", "nor", "yet", "plus"]),
            ("IN", &["of", "in", "on", "at", "by", "for", "with", "from", "into", "onto", "upon", "about", "above", "below", "under", "over", "through", "during", "before", "after", "since", "until", "against", "among", "between", "without", "within", "because", "although", "though", "while", "if", "whether", "than", "unless", "like", "near", "toward", "towards", "across", "along", "around", "behind", "beyond", "despite", "except", "inside", "outside", "per", "via"]),
            ("PRP", &["i", "me", "you", "he", "him", "she", "her", "it", "we", "us", "they", "them", "myself", "yourself", "himself", "herself", "itself", "ourselves", "themselves", "yourselves", "thee", "thou", "ye", "mine", "yours", "hers", "ours", "theirs"]),
            ("PRP$", &["my", "your", "his", "its", "our", "their", "thy"]),
            ("MD", &["can", "could", "may", "might", "must", "shall", "should", "will", "would", "ought"]),
            ("WDT", &["which", "whatever", "whichever"]),
            ("WP", &["who", "whom", "what", "whoever"]),
            ("WP$", &["whose"]),
            ("WRB", &["when", "where", "why", "how", "whenever", "wherever"]),
            ("TO", &["to"]),
            ("EX", &["there"]),
            ("UH", &["oh", "ah", "alas", "hello", "yes", "hey", "hurrah"]),
            ("RP", &["up", "out", "off"]),
            ("RB", &["not", "never", "very", "also", "often", "always", "too", "quite", "again", "here", "now", "then", "soon", "still", "already", "just", "even", "only", "perhaps", "rather", "almost", "once", "so"]),
            ("JJ", &["good", "great", "little", "old", "new", "long", "young", "small", "large", "many", "much", "few", "other", "own", "same", "whole", "full"]),
            ("JJR", &["better", "worse", "more", "less"]),
            ("JJS", &["best", "worst", "most", "least"]),
            ("CD", &["one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "hundred", "thousand", "million"]),
            ("VB", &["be"]),
            ("VBP", &["am", "are", "have", "do"]),
            ("VBZ", &["is", "has", "does"]),
            ("VBD", &["was", "were", "had", "did", "said", "went", "came", "saw", "took", "made", "knew", "thought", "told", "found", "gave", "began", "felt", "left", "stood", "heard"]),
            ("VBN", &["been", "done", "gone", "seen", "taken", "known", "given", "become"]),
            ("VBG", &["being", "having", "doing"]),
        ];
        for (tag, words) in classes {
            for word in words.iter() {
                m.insert(*word, *tag);
            }
        }
        m
    };
}

/// (suffix, minimum word length, tag), checked in order.
const SUFFIX_RULES: &[(&str, usize, &str)] = &[
    ("ly", 5, "RB"),
    ("ing", 6, "VBG"),
    ("ed", 5, "VBD"),
    ("est", 7, "JJS"),
    ("ous", 5, "JJ"),
    ("ful", 5, "JJ"),
    ("ive", 5, "JJ"),
    ("able", 6, "JJ"),
    ("ible", 6, "JJ"),
    ("less", 6, "JJ"),
    ("ish", 5, "JJ"),
    ("ness", 6, "NN"),
    ("ment", 6, "NN"),
    ("tion", 6, "NN"),
    ("sion", 6, "NN"),
    ("ity", 5, "NN"),
    ("ship", 6, "NN"),
    ("hood", 6, "NN"),
    ("ism", 5, "NN"),
];

/// Endings in `s` that do not mark a plural.
const SINGULAR_S: &[&str] = &["ss", "us", "is"];

#[derive(Debug, Default, Clone, Copy)]
pub struct LexiconTagger;

impl PosTagger for LexiconTagger {
    fn tag(&self, word: &str) -> &'static str {
        if let Some(tag) = LEXICON.get(word) {
            return *tag;
        }

        if word.chars().all(|c| c.is_ascii_digit()) {
            return "CD";
        }

        let len = word.chars().count();
        if let Some((_, _, tag)) = SUFFIX_RULES
            .iter()
            .find(|(suffix, min_len, _)| len >= *min_len && word.ends_with(suffix))
        {
            return *tag;
        }

        if len > 3 && word.ends_with('s') && !SINGULAR_S.iter().any(|end| word.ends_with(end)) {
            return "NNS";
        }

        "NN"
    }
}
