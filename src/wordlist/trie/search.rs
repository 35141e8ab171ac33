use log::{trace, warn};

use crate::alphabet::letters;
use crate::wordlist::pairs::{flatten, Pair, WordPair};
use crate::wordlist::trie::node::TrieNode;
use crate::wordlist::trie::searchconfig::SearchConfig;
use crate::wordlist::trie::trie::Trie;

/// Depth-first walks over one sorted letter buffer. Letters are removed before
/// descending and put back at the same index afterwards, so the buffer stays
/// sorted and siblings see the same remainder.
struct PairSearch<'t> {
    trie: &'t Trie,
    min_word_len: usize,
    remaining: Vec<char>,
    found: Vec<WordPair>,
}

impl<'t> PairSearch<'t> {
    fn new(trie: &'t Trie, config: &SearchConfig, remaining: Vec<char>) -> PairSearch<'t> {
        PairSearch { trie, min_word_len: config.min_word_len.max(1), remaining, found: vec![] }
    }

    fn long_enough(&self, word: &str) -> bool {
        word.chars().count() >= self.min_word_len
    }

    /// Every word below `node` spelled by exactly the remaining letters.
    fn full_anagrams(&mut self, node: &'t TrieNode, word: &mut String, words: &mut Vec<String>) {
        if self.remaining.is_empty() {
            if node.is_word() {
                words.push(word.clone());
            }
            return;
        }

        let trie = self.trie;
        let mut previous = None;
        for i in 0..self.remaining.len() {
            let letter = self.remaining[i];
            if previous == Some(letter) {
                continue;
            }
            previous = Some(letter);
            if let Some(child) = trie.child(node, letter) {
                self.remaining.remove(i);
                word.push(letter);
                self.full_anagrams(child, word, words);
                word.pop();
                self.remaining.insert(i, letter);
            }
        }
    }

    /// Extends `prefix` down the trie; each word it spells is tried as a left
    /// word against the letters it leaves behind.
    fn splits(&mut self, node: &'t TrieNode, prefix: &mut String) {
        if node.is_word() && !prefix.is_empty() && self.long_enough(prefix) {
            let trie = self.trie;
            let mut right_words = vec![];
            self.full_anagrams(trie.root(), &mut String::new(), &mut right_words);
            right_words.retain(|w| !w.is_empty() && self.long_enough(w));
            if !right_words.is_empty() {
                trace!("{} + {:?}", prefix, right_words);
                self.found.push(WordPair::new(prefix.clone(), right_words));
            }
        }

        if self.remaining.len() <= 1 {
            return;
        }

        let trie = self.trie;
        let mut previous = None;
        for i in 0..self.remaining.len() {
            let letter = self.remaining[i];
            if previous == Some(letter) {
                continue;
            }
            previous = Some(letter);
            if let Some(child) = trie.child(node, letter) {
                self.remaining.remove(i);
                prefix.push(letter);
                self.splits(child, prefix);
                prefix.pop();
                self.remaining.insert(i, letter);
            }
        }
    }
}

impl Trie {
    fn search_letters(&self, input: &str, config: &SearchConfig) -> Option<Vec<char>> {
        let letters = letters(input);
        if letters.len() > config.max_letters {
            warn!("Refusing to search {:?}: {} letters exceeds the limit of {}",
                  input, letters.len(), config.max_letters);
            return None;
        }
        Some(letters)
    }

    /// All dictionary words using exactly the letters of `input`, sorted.
    pub fn anagrams(&self, input: &str) -> Vec<String> {
        self.anagrams_with(input, &SearchConfig::new())
    }

    pub fn anagrams_with(&self, input: &str, config: &SearchConfig) -> Vec<String> {
        let letters = match self.search_letters(input, config) {
            Some(letters) => letters,
            None => return vec![],
        };
        let mut search = PairSearch::new(self, config, letters);
        let mut words = vec![];
        search.full_anagrams(self.root(), &mut String::new(), &mut words);
        words.retain(|w| !w.is_empty() && search.long_enough(w));
        words.sort();
        words
    }

    /// Left words of `input` with the right words that complete them, in discovery order.
    pub fn word_pairs(&self, input: &str, config: &SearchConfig) -> Vec<WordPair> {
        let letters = match self.search_letters(input, config) {
            Some(letters) => letters,
            None => return vec![],
        };
        if letters.len() < 2 {
            return vec![];
        }
        let mut search = PairSearch::new(self, config, letters);
        search.splits(self.root(), &mut String::new());
        search.found
    }

    /// Every split of `input`'s letters into two dictionary words, canonically ordered.
    pub fn find_word_pairs(&self, input: &str) -> Vec<Pair> {
        self.find_word_pairs_with(input, &SearchConfig::new())
    }

    pub fn find_word_pairs_with(&self, input: &str, config: &SearchConfig) -> Vec<Pair> {
        flatten(self.word_pairs(input, config))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeSet, HashMap};

    use crate::alphabet::letters;
    use crate::wordlist::pairs::Pair;
    use crate::wordlist::trie::searchconfig::SearchConfig;
    use crate::wordlist::trie::trie::Trie;

    const WORDS: [&str; 6] = ["eat", "tea", "ate", "sin", "sit", "its"];

    fn pair(a: &str, b: &str) -> Pair {
        (a.to_string(), b.to_string())
    }

    fn letter_counts(s: &str) -> HashMap<char, usize> {
        let mut counts = HashMap::new();
        letters(s).into_iter().for_each(|c| *counts.entry(c).or_insert(0) += 1);
        counts
    }

    #[test]
    fn test_anagram() {
        let trie = Trie::build(["HELLO", "HELP", "GOODBYE", "GOOD"]);

        assert_eq!(trie.anagrams("OLEHL"), vec!["hello"]);
        assert!(trie.anagrams("LEHL").is_empty());
        assert!(trie.anagrams("LELO").is_empty());
        assert!(trie.anagrams("DOG").is_empty());
        assert_eq!(trie.anagrams("OOGD"), vec!["good"]);
    }

    #[test]
    fn repeated_letters_yield_one_anagram() {
        let trie = Trie::build(["eel"]);
        assert_eq!(trie.anagrams("eel"), vec!["eel"]);
        assert_eq!(trie.anagrams("lee"), vec!["eel"]);
    }

    #[test]
    fn anagrams_include_every_spelling() {
        let trie = Trie::build(WORDS);
        assert_eq!(trie.anagrams("tae"), vec!["ate", "eat", "tea"]);
    }

    #[test]
    fn splits_teasin() {
        let trie = Trie::build(WORDS);
        let pairs = trie.find_word_pairs("teasin");

        let distinct: BTreeSet<Pair> = pairs.iter().cloned().collect();
        assert_eq!(distinct, [pair("ate", "sin"), pair("eat", "sin"), pair("sin", "tea")]
            .into_iter().collect());
        assert!(pairs.iter().all(|(a, b)| !["sit", "its"].contains(&a.as_str())
            && !["sit", "its"].contains(&b.as_str())));
    }

    #[test]
    fn pairs_are_found_from_both_sides() {
        let trie = Trie::build(WORDS);
        assert_eq!(trie.find_word_pairs("teasin"), vec![
            pair("ate", "sin"), pair("ate", "sin"),
            pair("eat", "sin"), pair("eat", "sin"),
            pair("sin", "tea"), pair("sin", "tea"),
        ]);
    }

    #[test]
    fn word_pairs_group_right_words() {
        let trie = Trie::build(WORDS);
        let word_pairs = trie.word_pairs("teasin", &SearchConfig::new());
        let sin = word_pairs.iter().find(|p| p.left_word == "sin").unwrap();
        let mut right_words = sin.right_words.clone();
        right_words.sort();
        assert_eq!(right_words, vec!["ate", "eat", "tea"]);
    }

    #[test]
    fn input_is_normalized() {
        let trie = Trie::build(WORDS);
        assert_eq!(trie.find_word_pairs("Tea, Sin!"), trie.find_word_pairs("teasin"));
    }

    #[test]
    fn short_inputs_have_no_pairs() {
        let trie = Trie::build(["a", "i", "ai", ""]);
        assert!(trie.find_word_pairs("").is_empty());
        assert!(trie.find_word_pairs("a").is_empty());
        assert!(trie.find_word_pairs("!!").is_empty());
        assert_eq!(trie.find_word_pairs("ai"), vec![pair("a", "i"), pair("a", "i")]);
    }

    #[test]
    fn empty_dictionary_word_never_pairs() {
        let with_empty = Trie::build(["", "eat", "sin", "teasin"]);
        let without = Trie::build(["eat", "sin", "teasin"]);
        assert_eq!(with_empty.find_word_pairs("teasin"), without.find_word_pairs("teasin"));
        assert!(with_empty.find_word_pairs("teasin").iter().all(|(a, b)| !a.is_empty() && !b.is_empty()));
        assert!(with_empty.anagrams("").is_empty());
    }

    #[test]
    fn same_word_on_both_sides() {
        let trie = Trie::build(["ab"]);
        assert_eq!(trie.find_word_pairs("abab"), vec![pair("ab", "ab")]);
    }

    #[test]
    fn repeated_letters_do_not_multiply_results() {
        let trie = Trie::build(["eel", "see", "lees", "e", "els"]);
        let pairs = trie.find_word_pairs("eels");
        // e + els and els + e; see/lees use all four letters or miss the l
        assert_eq!(pairs, vec![pair("e", "els"), pair("e", "els")]);
    }

    #[test]
    fn pairs_are_sound_and_sorted() {
        let words = ["listen", "silent", "enlist", "tinsel", "a", "an", "ant", "tan", "nat",
            "lie", "lien", "line", "tens", "nets", "sent", "stale", "least", "tales", "in",
            "is", "it", "its", "sit", "tin", "nit", "lint", "sail", "tail", "nail", "snail", "saint", "tine"];
        let trie = Trie::build(words);
        let input = "Saint Nile";
        let pairs = trie.find_word_pairs(input);
        assert!(!pairs.is_empty());

        let expected = letter_counts(input);
        for (a, b) in &pairs {
            assert!(a <= b);
            assert!(trie.contains(a) && trie.contains(b));
            assert_eq!(letter_counts(&format!("{}{}", a, b)), expected);
        }
        assert!(pairs.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn pairs_are_complete() {
        let words = ["listen", "silent", "enlist", "tinsel", "a", "an", "ant", "tan", "nat",
            "lie", "lien", "line", "tens", "nets", "sent", "stale", "least", "tales", "in",
            "is", "it", "its", "sit", "tin", "nit", "lint", "sail", "tail", "nail", "snail", "saint", "tine"];
        let trie = Trie::build(words);
        let input = "saintnile";
        let expected = letter_counts(input);
        let pairs: BTreeSet<Pair> = trie.find_word_pairs(input).into_iter().collect();

        for a in words {
            for b in words {
                if a <= b && letter_counts(&format!("{}{}", a, b)) == expected {
                    assert!(pairs.contains(&pair(a, b)), "missing {} {}", a, b);
                }
            }
        }
    }

    #[test]
    fn long_inputs_are_refused() {
        let trie = Trie::build(WORDS);
        let config = SearchConfig { max_letters: 5, ..SearchConfig::new() };
        assert!(trie.find_word_pairs_with("teasin", &config).is_empty());
        assert!(trie.anagrams_with("teasin", &config).is_empty());
        assert!(!trie.find_word_pairs("teasin").is_empty());
    }

    #[test]
    fn min_word_len_filters_both_sides() {
        let trie = Trie::build(["a", "i", "ai", "tea", "sin", "teas", "in"]);
        let config = SearchConfig { min_word_len: 3, ..SearchConfig::new() };
        assert_eq!(trie.find_word_pairs_with("teasin", &config),
                   vec![pair("sin", "tea"), pair("sin", "tea")]);
    }
}
