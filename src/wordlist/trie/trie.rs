use std::fmt::{Debug, Formatter};

use serde::{Deserialize, Serialize};

use crate::alphabet::fold;
use crate::wordlist::trie::node::{NodeId, TrieNode};
use crate::wordlist::trie::trie_builder::TrieBuilder;

/// A prefix tree over dictionary words. Nodes live in an arena owned by the
/// trie; node 0 is the root. Read-only once built.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(try_from = "TrieNodes")]
pub struct Trie {
    nodes: Vec<TrieNode>,
}

/// Serialized form of a [`Trie`], checked before it becomes one.
#[derive(Deserialize)]
struct TrieNodes {
    nodes: Vec<TrieNode>,
}

impl TryFrom<TrieNodes> for Trie {
    type Error = String;

    fn try_from(TrieNodes { nodes }: TrieNodes) -> Result<Self, Self::Error> {
        if nodes.is_empty() {
            return Err("trie has no root node".to_string());
        }
        for (n, node) in nodes.iter().enumerate() {
            if let Some((c, id)) = node.children.iter().find(|(_, id)| id.0 >= nodes.len()) {
                return Err(format!("node {} child {:?} points to node {} of {}", n, c, id.0, nodes.len()));
            }
        }
        Ok(Trie { nodes })
    }
}

impl Trie {
    pub(crate) const ROOT: NodeId = NodeId(0);

    pub fn builder() -> TrieBuilder {
        TrieBuilder::new()
    }

    pub fn build<I>(words: I) -> Trie
        where I: IntoIterator, I::Item: AsRef<str> {
        TrieBuilder::new().add_all(words).build()
    }

    pub(crate) fn from_nodes(nodes: Vec<TrieNode>) -> Trie {
        Trie { nodes }
    }

    pub fn root(&self) -> &TrieNode {
        &self.nodes[Self::ROOT.0]
    }

    pub fn child(&self, node: &TrieNode, c: char) -> Option<&TrieNode> {
        node.child_id(c).map(|id| &self.nodes[id.0])
    }

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root().is_leaf() && !self.root().is_word()
    }

    /// Case-insensitive membership. The empty string is never a word.
    pub fn contains(&self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }
        self.get_node(word).map(|x| x.is_word()).unwrap_or(false)
    }

    fn get_node(&self, word: &str) -> Option<&TrieNode> {
        word.chars()
            .map(fold)
            .try_fold(self.root(), |node, c| self.child(node, c))
    }
}

impl Debug for Trie {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Trie")
            .field("nodes", &self.nodes.len())
            .field("root", self.root())
            .finish()
    }
}
