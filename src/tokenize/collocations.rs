/*! Bigram collocations

Adjacent word pairs are scored with Dunning's log-likelihood ratio over a 2x2 contingency table:

|           | w2        | not w2    |
|-----------|-----------|-----------|
| w1        | n_ii      | n_io      |
| not w1    | n_oi      | n_oo      |

Only pairs seen at least [CollocationFinder::min_freq] times, and made of words that are neither
too short nor stopwords, are ranked.
!*/
use std::collections::{HashMap, HashSet};

use itertools::Itertools;

use crate::lang::StopwordLang;

const SMALL: f64 = 1e-20;

pub struct CollocationFinder {
    min_freq: u64,
    min_word_len: usize,
    top: usize,
    ignored: &'static HashSet<&'static str>,
}

impl Default for CollocationFinder {
    /// - pairs seen at least twice,
    /// - words of 3 characters or more that are not English stopwords,
    /// - 20 best pairs.
    fn default() -> Self {
        Self {
            min_freq: 2,
            min_word_len: 3,
            top: 20,
            ignored: StopwordLang::English.stopwords(),
        }
    }
}

impl CollocationFinder {
    pub fn new(min_freq: u64, min_word_len: usize, top: usize) -> Self {
        Self {
            min_freq,
            min_word_len,
            top,
            ..Default::default()
        }
    }

    fn is_ignored(&self, word: &str) -> bool {
        word.chars().count() < self.min_word_len || self.ignored.contains(word)
    }

    /// Returns the best collocations, best first.
    /// Ties are broken by lexicographic order on the pair.
    pub fn find(&self, words: &[String]) -> Vec<(String, String)> {
        let mut word_fd: HashMap<&str, u64> = HashMap::new();
        for word in words {
            *word_fd.entry(word.as_str()).or_insert(0) += 1;
        }

        let mut bigram_fd: HashMap<(&str, &str), u64> = HashMap::new();
        for (w1, w2) in words.iter().tuple_windows() {
            *bigram_fd.entry((w1.as_str(), w2.as_str())).or_insert(0) += 1;
        }

        let n_xx = words.len() as f64;

        bigram_fd
            .into_iter()
            .filter(|(_, count)| *count >= self.min_freq)
            .filter(|((w1, w2), _)| !self.is_ignored(w1) && !self.is_ignored(w2))
            .map(|((w1, w2), n_ii)| {
                let score = likelihood_ratio(n_ii, word_fd[w1], word_fd[w2], n_xx);
                ((w1, w2), score)
            })
            .sorted_by(|(pair_a, score_a), (pair_b, score_b)| {
                score_b.total_cmp(score_a).then_with(|| pair_a.cmp(pair_b))
            })
            .take(self.top)
            .map(|((w1, w2), _)| (w1.to_string(), w2.to_string()))
            .collect()
    }
}

/// Dunning's log-likelihood ratio of a bigram.
///
/// * `n_ii` bigram count
/// * `n_ix` count of the first word
/// * `n_xi` count of the second word
/// * `n_xx` total word count
fn likelihood_ratio(n_ii: u64, n_ix: u64, n_xi: u64, n_xx: f64) -> f64 {
    let n_ii = n_ii as f64;
    let n_io = n_ix as f64 - n_ii;
    let n_oi = n_xi as f64 - n_ii;
    let n_oo = n_xx - n_ii - n_oi - n_io;

    let cont = [n_ii, n_oi, n_io, n_oo];
    let total: f64 = cont.iter().sum();

    // expected[i] = row marginal * column marginal / total
    (0..4)
        .map(|i| {
            let expected = (cont[i] + cont[i ^ 1]) * (cont[i] + cont[i ^ 2]) / total;
            cont[i] * (cont[i] / (expected + SMALL) + SMALL).ln()
        })
        .sum::<f64>()
        * 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<String> {
        text.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn finds_repeated_pair() {
        let text = words(
            "white whale swam past ship white whale dove deep under ship \
             captain hunted white whale across ocean",
        );
        let found = CollocationFinder::default().find(&text);
        assert_eq!(found[0], ("white".to_string(), "whale".to_string()));
    }

    #[test]
    fn single_occurrence_is_not_a_collocation() {
        let text = words("white whale swam past ship");
        assert!(CollocationFinder::default().find(&text).is_empty());
    }

    #[test]
    fn stopwords_and_short_words_ignored() {
        let text = words("the whale the whale ox cart ox cart");
        assert!(CollocationFinder::default().find(&text).is_empty());
    }

    #[test]
    fn top_is_honored() {
        let text = words("red fox red fox blue jay blue jay green frog green frog");
        let found = CollocationFinder::new(2, 3, 2).find(&text);
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn independent_words_score_near_zero() {
        // observed counts equal expected counts
        let independent = likelihood_ratio(1, 10, 10, 100.0);
        assert!(independent.abs() < 1e-9);

        let associated = likelihood_ratio(5, 5, 5, 100.0);
        assert!(associated > 10.0);
    }

    #[test]
    fn empty() {
        assert!(CollocationFinder::default().find(&[]).is_empty());
    }
}
