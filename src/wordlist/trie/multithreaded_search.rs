use std::sync::atomic::{AtomicUsize, Ordering};

use log::{debug, info};
use rayon::prelude::*;

use crate::wordlist::pairs::TitlePairs;
use crate::wordlist::trie::searchconfig::SearchConfig;
use crate::wordlist::trie::trie::Trie;

impl Trie {
    /// Searches every title on the rayon pool, sharing this trie read-only.
    /// Titles without a pair are dropped; the rest keep their input order.
    pub fn find_word_pairs_many<S>(&self, titles: &[S], config: &SearchConfig) -> Vec<TitlePairs>
        where S: AsRef<str> + Sync {
        let done = AtomicUsize::new(0);
        let results: Vec<TitlePairs> = titles.par_iter()
            .map(|title| {
                let title = title.as_ref();
                let word_pairs = self.find_word_pairs_with(title, config);
                let n = done.fetch_add(1, Ordering::Relaxed) + 1;
                debug!("{} of {}: {} ({} pairs)", n, titles.len(), title, word_pairs.len());
                TitlePairs::new(title.to_string(), word_pairs)
            })
            .filter(|result| !result.word_pairs.is_empty())
            .collect();
        info!("{} of {} titles split into word pairs", results.len(), titles.len());
        results
    }
}

#[cfg(test)]
mod tests {
    use crate::wordlist::trie::searchconfig::SearchConfig;
    use crate::wordlist::trie::trie::Trie;

    #[test]
    fn matches_single_threaded_search() {
        let trie = Trie::build(["eat", "tea", "ate", "sin", "sit", "its", "on", "no", "dog", "god"]);
        let titles = vec!["Tea Sin", "Nothing Here", "Dog On", "its tea"];
        let results = trie.find_word_pairs_many(&titles, &SearchConfig::new());

        let found: Vec<&str> = results.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(found, vec!["Tea Sin", "Dog On", "its tea"]);
        for result in &results {
            assert_eq!(result.word_pairs, trie.find_word_pairs(&result.title));
        }
    }

    #[test]
    fn empty_batch() {
        let trie = Trie::build(["a"]);
        assert!(trie.find_word_pairs_many::<String>(&[], &SearchConfig::new()).is_empty());
    }
}
