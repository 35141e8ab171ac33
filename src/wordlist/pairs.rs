use derive_new::new;
use serde::{Deserialize, Serialize};

/// Two dictionary words whose letters together make up a search input.
pub type Pair = (String, String);

/// A left word and every right word that completes it for one search input.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct WordPair {
    pub left_word: String,
    pub right_words: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct TitlePairs {
    pub title: String,
    pub word_pairs: Vec<Pair>,
}

impl TitlePairs {
    /// Applies [`classify_pairs`], dropping the title when nothing survives.
    pub fn classify<F>(self, predicate: F) -> Option<TitlePairs>
        where F: Fn(&str) -> bool {
        let word_pairs = classify_pairs(self.word_pairs, predicate);
        if word_pairs.is_empty() {
            None
        } else {
            Some(TitlePairs::new(self.title, word_pairs))
        }
    }
}

/// Smaller word first.
pub fn canonical((first, second): Pair) -> Pair {
    if second < first {
        (second, first)
    } else {
        (first, second)
    }
}

/// One canonical pair per right word, sorted. Pairs found from both sides of a
/// split are kept as they are.
pub fn flatten(word_pairs: Vec<WordPair>) -> Vec<Pair> {
    let mut pairs: Vec<Pair> = word_pairs.into_iter()
        .flat_map(|WordPair { left_word, right_words }| {
            right_words.into_iter()
                .map(move |right_word| canonical((left_word.clone(), right_word)))
        })
        .collect();
    pairs.sort();
    pairs
}

/// Keeps the pairs with at least one word satisfying `predicate`, moves that
/// word to the front and re-sorts. When both words satisfy it the pair keeps
/// its order.
pub fn classify_pairs<F>(pairs: Vec<Pair>, predicate: F) -> Vec<Pair>
    where F: Fn(&str) -> bool {
    let mut classified: Vec<Pair> = pairs.into_iter()
        .filter_map(|(first, second)| {
            if predicate(&first) {
                Some((first, second))
            } else if predicate(&second) {
                Some((second, first))
            } else {
                None
            }
        })
        .collect();
    classified.sort();
    classified
}
