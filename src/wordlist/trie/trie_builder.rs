use log::debug;

use crate::alphabet::fold;
use crate::wordlist::trie::node::{NodeId, TrieNode};
use crate::wordlist::trie::trie::Trie;

/// Accumulates words into a node arena. The arena only grows while building;
/// `build` hands it over to an immutable [`Trie`].
pub struct TrieBuilder {
    nodes: Vec<TrieNode>,
    words: usize,
}

impl TrieBuilder {
    pub fn new() -> TrieBuilder {
        TrieBuilder {
            nodes: vec![TrieNode::default()],
            words: 0,
        }
    }

    /// Inserts `word` lower-cased. An empty word only marks the root.
    pub fn add(&mut self, word: &str) -> &mut TrieBuilder {
        let mut current = Trie::ROOT;
        for c in word.chars().map(fold) {
            current = self.get_or_create_child(current, c);
        }
        self.nodes[current.0].is_word = true;
        self.words += 1;
        self
    }

    pub fn add_all<I>(&mut self, items: I) -> &mut TrieBuilder
        where I: IntoIterator, I::Item: AsRef<str> {
        items.into_iter().for_each(|x| { self.add(x.as_ref()); });
        self
    }

    /// Takes the accumulated words, leaving the builder empty.
    pub fn build(&mut self) -> Trie {
        let nodes = std::mem::replace(&mut self.nodes, vec![TrieNode::default()]);
        debug!("Built trie from {} words ({} nodes)", self.words, nodes.len());
        self.words = 0;
        Trie::from_nodes(nodes)
    }

    fn get_or_create_child(&mut self, parent: NodeId, c: char) -> NodeId {
        if let Some(child) = self.nodes[parent.0].child_id(c) {
            return child;
        }
        let child = NodeId(self.nodes.len());
        self.nodes.push(TrieNode::default());
        self.nodes[parent.0].children.insert(c, child);
        child
    }
}

impl Default for TrieBuilder {
    fn default() -> Self {
        TrieBuilder::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::wordlist::trie::trie_builder::TrieBuilder;

    #[test]
    fn shares_prefixes() {
        let trie = TrieBuilder::new().add_all(["HELLO", "HELP"]).build();
        // root, h, e, l, l, o, p
        assert_eq!(trie.len(), 7);
    }

    #[test]
    fn build_resets_the_builder() {
        let mut builder = TrieBuilder::new();
        let first = builder.add("apple").build();
        let second = builder.add("pear").build();
        assert!(first.contains("apple"));
        assert!(!second.contains("apple"));
        assert!(second.contains("pear"));
    }

    #[test]
    fn duplicate_insertion_is_idempotent() {
        let once = TrieBuilder::new().add("eel").build();
        let twice = TrieBuilder::new().add("eel").add("EEL").build();
        assert_eq!(once.len(), twice.len());
        assert!(twice.contains("eel"));
    }

    #[test]
    fn empty_word_marks_only_the_root() {
        let trie = TrieBuilder::new().add("").build();
        assert_eq!(trie.len(), 1);
        assert!(trie.root().is_word());
    }
}
