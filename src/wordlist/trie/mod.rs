pub mod trie;
pub mod search;
pub mod multithreaded_search;
pub mod searchconfig;
pub mod node;
pub mod trie_builder;

pub use node::{NodeId, TrieNode};
pub use searchconfig::SearchConfig;
pub use trie::Trie;
pub use trie_builder::TrieBuilder;
