//! Splits the letters of a title into pairs of dictionary words.
//!
//! ```
//! use word_pairs::Trie;
//!
//! let trie = Trie::build(["eat", "tea", "ate", "sin", "sit", "its"]);
//! let pairs = trie.find_word_pairs("Tea Sin");
//! assert!(pairs.contains(&("sin".to_string(), "tea".to_string())));
//! ```

pub mod alphabet;
pub mod cache;
pub mod dictionary;
pub mod error;
pub mod titles;
pub mod wordlist;

pub use error::{Error, Result};
pub use wordlist::pairs::{classify_pairs, Pair, TitlePairs, WordPair};
pub use wordlist::trie::{SearchConfig, Trie, TrieBuilder};
pub use wordlist::{FileFormat, Wordlist};
