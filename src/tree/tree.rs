use std::fmt::Display;

use thiserror::Error;

use crate::lexer::tokens::Token;

/// Label of the placeholder leaf emitted for an elided grammar alternative.
pub const EPSILON_LABEL: &str = "EPSILON";
/// Epsilon marker historically tested by the stripping pass. It never matches
/// the emitted placeholders, so stripping with it leaves the tree unchanged.
pub const LEGACY_EPSILON_LABEL: &str = "Epsilon";
/// Label of unary-minus wrapper nodes collapsed by `remove_bad_minus`.
pub const UNARY_MINUS_LABEL: &str = "-e";
pub const SKIP_LINES_LABEL: &str = "SkipLines";

/// Index of a node inside its tree's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    label: String,
    token: Option<Token>,
    pub(super) children: Vec<NodeId>,
    pub(super) parent: Option<NodeId>,
}

impl Node {
    fn new(label: &str, token: Option<Token>) -> Self {
        Node {
            label: label.to_string(),
            token,
            children: vec![],
            parent: None,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// The consumed token, for terminal leaves.
    pub fn token(&self) -> Option<&Token> {
        self.token.as_ref()
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("node {node} already has a parent")]
    AlreadyAttached { node: NodeId },
    #[error("attaching node {node} would create a cycle")]
    WouldCycle { node: NodeId },
    #[error("node {node} does not belong to this tree")]
    UnknownNode { node: NodeId },
}

/// Arena used while a tree is built bottom-up.
///
/// Every node is created after its children and adopts them immediately,
/// so no node can end up with two parents.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    nodes: Vec<Node>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        TreeBuilder { nodes: vec![] }
    }

    /// Creates a childless node, optionally keeping the token it stands for.
    pub fn leaf(&mut self, label: &str, token: Option<Token>) -> NodeId {
        self.nodes.push(Node::new(label, token));
        NodeId(self.nodes.len() - 1)
    }

    /// Creates a node adopting `children`, which must all be fresh roots.
    pub fn node(&mut self, label: &str, children: Vec<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        for child in &children {
            debug_assert!(self.nodes[child.0].parent.is_none());
            self.nodes[child.0].parent = Some(id);
        }

        let mut node = Node::new(label, None);
        node.children = children;
        self.nodes.push(node);
        id
    }

    pub fn finish(self, root: NodeId) -> SyntaxTree {
        SyntaxTree {
            nodes: self.nodes,
            root,
        }
    }
}

enum Visit {
    Open(NodeId),
    Close,
}

/// Labeled n-ary tree stored as an arena of nodes.
///
/// Nodes removed by a rewrite stay in the arena but are no longer reachable
/// from the root; every accessor that walks the tree starts from the root.
///
/// Accessors taking a `NodeId` panic when the id was not issued by this
/// tree. [`SyntaxTree::get`] is the checked variant.
#[derive(Debug, Clone)]
pub struct SyntaxTree {
    pub(super) nodes: Vec<Node>,
    root: NodeId,
}

impl SyntaxTree {
    pub fn new(label: &str) -> Self {
        SyntaxTree {
            nodes: vec![Node::new(label, None)],
            root: NodeId(0),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The node behind `id`, or `None` if `id` belongs to another tree.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// # Panics
    ///
    /// Panics if `id` does not belong to this tree.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub(super) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    pub fn label(&self, id: NodeId) -> &str {
        &self.nodes[id.0].label
    }

    pub fn set_label(&mut self, id: NodeId, label: &str) {
        self.nodes[id.0].label = label.to_string();
    }

    pub fn token(&self, id: NodeId) -> Option<&Token> {
        self.nodes[id.0].token.as_ref()
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    pub fn child(&self, id: NodeId, n: usize) -> Option<NodeId> {
        self.nodes[id.0].children.get(n).copied()
    }

    /// Labels of the direct children of `id`, in order.
    pub fn child_labels(&self, id: NodeId) -> Vec<&str> {
        self.children(id)
            .iter()
            .map(|child| self.label(*child))
            .collect()
    }

    /// Creates a detached node; attach it with [`SyntaxTree::add_child`].
    pub fn create_node(&mut self, label: &str, token: Option<Token>) -> NodeId {
        self.nodes.push(Node::new(label, token));
        NodeId(self.nodes.len() - 1)
    }

    /// Appends `child` to the children of `parent`.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), TreeError> {
        for node in [parent, child] {
            if self.get(node).is_none() {
                return Err(TreeError::UnknownNode { node });
            }
        }

        if child == self.root || self.nodes[child.0].parent.is_some() {
            return Err(TreeError::AlreadyAttached { node: child });
        }

        let mut ancestor = Some(parent);
        while let Some(current) = ancestor {
            if current == child {
                return Err(TreeError::WouldCycle { node: child });
            }
            ancestor = self.nodes[current.0].parent;
        }

        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
        Ok(())
    }

    /// Reachable nodes in pre-order.
    pub fn preorder(&self) -> Vec<NodeId> {
        let mut order = vec![];
        let mut stack = vec![self.root];

        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend(self.children(id).iter().rev());
        }

        order
    }

    /// Number of nodes reachable from the root.
    pub fn node_count(&self) -> usize {
        self.preorder().len()
    }

    /// Reachable leaves, left to right.
    pub fn leaves(&self) -> Vec<NodeId> {
        self.preorder()
            .into_iter()
            .filter(|id| self.node(*id).is_leaf())
            .collect()
    }

    /// Reachable nodes carrying `label`, in pre-order.
    pub fn find(&self, label: &str) -> Vec<NodeId> {
        self.preorder()
            .into_iter()
            .filter(|id| self.label(*id) == label)
            .collect()
    }

    /// Bracketed rendering, one `[label ...]` group per node.
    pub fn print_tree(&self) -> String {
        let mut tree = String::new();
        let mut stack = vec![Visit::Open(self.root)];

        while let Some(visit) = stack.pop() {
            match visit {
                Visit::Open(id) => {
                    let node = self.node(id);

                    tree.push_str("\n[");
                    tree.push_str(&node.label);
                    if let Some(value) = node.token.as_ref().and_then(|token| token.value.as_ref()) {
                        tree.push(' ');
                        tree.push_str(value);
                    }

                    stack.push(Visit::Close);
                    stack.extend(node.children.iter().rev().map(|child| Visit::Open(*child)));
                }
                Visit::Close => tree.push_str("]\n"),
            }
        }

        tree
    }
}
