pub mod pairs;
pub mod plural;
pub mod trie;
pub mod wordlist;

pub use pairs::{classify_pairs, Pair, TitlePairs, WordPair};
pub use wordlist::{FileFormat, Wordlist};
