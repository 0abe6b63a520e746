use crate::letterset::LetterSet;
use crate::tiles::{Letter, ALPHABET};

/// Index of a node in the trie arena, so a node can be reached in `O(1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(u32);

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct Node {
    children: [Option<NodeId>; ALPHABET],
    mask: LetterSet,
    terminal: bool,
}

impl Default for Node {
    fn default() -> Self {
        Node {
            children: [None; ALPHABET],
            mask: LetterSet::new(),
            terminal: false,
        }
    }
}

/// A prefix trie over the alphabet, stored as a flat arena of nodes.
///
/// A path from the root to a node flagged as terminal spells a legal
/// word. Besides the per-letter child table, every node carries a
/// [`LetterSet`] of its child labels so a search can intersect it with
/// the letters a rack can produce in a single mask operation.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trie {
    nodes: Vec<Node>,
}

impl Default for Trie {
    fn default() -> Self {
        Trie::new()
    }
}

impl Trie {
    /// An empty trie: just the root.
    pub fn new() -> Trie {
        Trie {
            nodes: vec![Node::default()],
        }
    }

    /// The root node.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Insert a word. Prefixes shared with earlier words are reused.
    pub fn insert(&mut self, word: &[Letter]) {
        let mut node = 0usize;
        for &letter in word {
            node = match self.nodes[node].children[letter.index()] {
                Some(child) => child.0 as usize,
                None => {
                    let child = NodeId(self.nodes.len() as u32);
                    self.nodes.push(Node::default());
                    self.nodes[node].children[letter.index()] = Some(child);
                    self.nodes[node].mask.insert(letter);
                    child.0 as usize
                }
            };
        }
        self.nodes[node].terminal = true;
    }

    /// The child of `node` labelled `letter`, if present.
    pub fn child(&self, node: NodeId, letter: Letter) -> Option<NodeId> {
        self.nodes[node.0 as usize].children[letter.index()]
    }

    /// The labels of all children of `node`.
    pub fn children_mask(&self, node: NodeId) -> LetterSet {
        self.nodes[node.0 as usize].mask
    }

    /// Whether the path from the root to `node` spells a complete word.
    pub fn is_terminal(&self, node: NodeId) -> bool {
        self.nodes[node.0 as usize].terminal
    }

    /// Walk the trie from the root; true if `word` ends on a terminal
    /// node.
    pub fn contains(&self, word: &[Letter]) -> bool {
        let mut node = self.root();
        for &letter in word {
            match self.child(node, letter) {
                Some(child) => node = child,
                None => return false,
            }
        }
        self.is_terminal(node)
    }

    /// The number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Vec<Letter> {
        s.chars().filter_map(Letter::from_char).collect()
    }

    #[test]
    fn test_insert_contains() {
        let mut trie = Trie::new();
        let keys = &["to", "tea", "ten", "in", "inn", "we"];
        let keys_not = &["te", "inno", "web", "i", ""];
        for key in keys {
            trie.insert(&word(key));
        }
        for key in keys {
            assert!(trie.contains(&word(key)), "should contain '{}'", key);
        }
        for key in keys_not {
            assert!(!trie.contains(&word(key)), "should not contain '{}'", key);
        }
    }

    #[test]
    fn test_shared_prefixes() {
        let mut trie = Trie::new();
        trie.insert(&word("tea"));
        trie.insert(&word("ten"));
        // root, t, e, a, n
        assert_eq!(trie.node_count(), 5);
    }

    #[test]
    fn test_children_mask() {
        let mut trie = Trie::new();
        trie.insert(&word("tea"));
        trie.insert(&word("ten"));
        let t = trie.child(trie.root(), word("t")[0]).unwrap();
        let e = trie.child(t, word("e")[0]).unwrap();
        let mask: String = trie.children_mask(e).iter().map(Letter::as_char).collect();
        assert_eq!(mask, "AN");
        assert!(!trie.is_terminal(e));
        let a = trie.child(e, word("a")[0]).unwrap();
        assert!(trie.is_terminal(a));
    }
}
