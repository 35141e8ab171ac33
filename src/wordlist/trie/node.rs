use std::collections::HashMap;
use std::fmt::{Debug, Formatter};

use serde::{Deserialize, Serialize};

/// Index of a node in its trie's arena.
#[derive(Ord, PartialOrd, Eq, PartialEq, Hash, Clone, Copy, Debug, Serialize, Deserialize)]
pub struct NodeId(pub(crate) usize);

#[derive(Eq, PartialEq, Serialize, Deserialize, Default, Clone)]
pub struct TrieNode {
    pub(crate) children: HashMap<char, NodeId>,
    pub(crate) is_word: bool,
}

impl TrieNode {
    pub fn is_word(&self) -> bool {
        self.is_word
    }

    pub(crate) fn child_id(&self, c: char) -> Option<NodeId> {
        self.children.get(&c).copied()
    }

    /// Letters with a child below this node, in no particular order.
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.children.keys().copied()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

impl Debug for TrieNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut letters = self.letters().collect::<Vec<_>>();
        letters.sort_unstable();
        f.debug_struct("TrieNode")
            .field("is_word", &self.is_word)
            .field("children", &letters)
            .finish()
    }
}
