//! compression/trie.rs
//! Encoder dictionary: symbol sequence → code.
//!
//! Nodes live in a single arena addressed by `NodeId`. The root (the empty sequence,
//! `EMPTY_CODE`) is always slot 0. A reset truncates the arena back to the root, which
//! drops every learned sequence in one step.

use crate::compression::constants::{ALPHABET, EMPTY_CODE};

/// Index of a node in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);

    fn index(self) -> usize {
        self.0 as usize
    }
}

// Child slots hold arena indices; 0 means "no child" since the root is never a child.
type Children = [u32; ALPHABET];

#[derive(Debug)]
struct TrieNode {
    code: u16,
    // Allocated on first insertion; most nodes stay leaves.
    children: Option<Box<Children>>,
}

impl TrieNode {
    fn new(code: u16) -> Self {
        Self { code, children: None }
    }
}

#[derive(Debug)]
pub struct Trie {
    nodes: Vec<TrieNode>,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    pub fn new() -> Self {
        Self { nodes: vec![TrieNode::new(EMPTY_CODE)] }
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Follow the edge labelled `sym`; `None` is a dictionary miss.
    #[inline]
    pub fn step(&self, node: NodeId, sym: u8) -> Option<NodeId> {
        let children = self.nodes[node.index()].children.as_ref()?;
        match children[sym as usize] {
            0 => None,
            child => Some(NodeId(child)),
        }
    }

    #[inline]
    pub fn code(&self, node: NodeId) -> u16 {
        self.nodes[node.index()].code
    }

    /// Add a child of `parent` on edge `sym` carrying `code`.
    pub fn insert(&mut self, parent: NodeId, sym: u8, code: u16) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(TrieNode::new(code));

        let children = self.nodes[parent.index()]
            .children
            .get_or_insert_with(|| Box::new([0; ALPHABET]));
        children[sym as usize] = id.0;
        id
    }

    /// Forget every learned sequence; only the root survives.
    pub fn reset(&mut self) {
        self.nodes.truncate(1);
        self.nodes[0].children = None;
    }

    /// Number of learned sequences (root excluded).
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
