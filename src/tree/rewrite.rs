//! Post-parse normalization of syntax trees.
//!
//! Every pass is a set of [`RewriteRule`]s run by [`SyntaxTree::rewrite`],
//! a post-order traversal that asks the rules about each `(parent, child)`
//! pair and removes or splices the child accordingly.

use std::collections::{HashMap, VecDeque};

use lazy_static::lazy_static;
use tracing::debug;

use super::tree::{Node, NodeId, SyntaxTree, EPSILON_LABEL, LEGACY_EPSILON_LABEL, UNARY_MINUS_LABEL};

lazy_static! {
    static ref NEGATED_COMPARATORS: HashMap<&'static str, &'static str> = {
        let mut map = HashMap::new();
        for (comparator, negated) in [
            ("=", "<>"),
            (">=", "<"),
            (">", "<="),
            ("EQ", "NEQ"),
            ("GEQ", "LT"),
            ("GT", "LEQ"),
        ] {
            map.insert(comparator, negated);
            map.insert(negated, comparator);
        }
        map
    };
}

/// Returns the logical negation of a comparison operator label.
pub fn negate_comparator(label: &str) -> Option<&'static str> {
    NEGATED_COMPARATORS.get(label).copied()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rewrite {
    Keep,
    /// Drop the child together with its subtree.
    Remove,
    /// Replace the child by its own children, in place.
    Splice,
}

pub trait RewriteRule {
    fn name(&self) -> &str;
    fn apply(&self, parent: &Node, child: &Node) -> Rewrite;
}

/// Removes every child labeled `label`.
pub struct StripLabel {
    pub label: String,
}

impl RewriteRule for StripLabel {
    fn name(&self) -> &str {
        "strip-label"
    }

    fn apply(&self, _parent: &Node, child: &Node) -> Rewrite {
        if child.label() == self.label {
            Rewrite::Remove
        } else {
            Rewrite::Keep
        }
    }
}

/// Splices a single-child node into a parent carrying the same label.
pub struct CollapseSameLabel;

impl RewriteRule for CollapseSameLabel {
    fn name(&self) -> &str {
        "collapse-same-label"
    }

    fn apply(&self, parent: &Node, child: &Node) -> Rewrite {
        if parent.label() == child.label() && child.children().len() == 1 {
            Rewrite::Splice
        } else {
            Rewrite::Keep
        }
    }
}

/// Splices a marker node nested directly under another marker node.
pub struct CollapseNestedMarker {
    pub label: String,
}

impl RewriteRule for CollapseNestedMarker {
    fn name(&self) -> &str {
        "collapse-nested-marker"
    }

    fn apply(&self, parent: &Node, child: &Node) -> Rewrite {
        if parent.label() == self.label && child.label() == self.label {
            Rewrite::Splice
        } else {
            Rewrite::Keep
        }
    }
}

/// Markers used by [`SyntaxTree::normalize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizeConfig {
    pub epsilon_marker: String,
    pub minus_marker: String,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        NormalizeConfig {
            epsilon_marker: EPSILON_LABEL.to_string(),
            minus_marker: UNARY_MINUS_LABEL.to_string(),
        }
    }
}

impl NormalizeConfig {
    /// Reproduces the historical epsilon pass, which never strips anything.
    pub fn legacy() -> Self {
        NormalizeConfig {
            epsilon_marker: LEGACY_EPSILON_LABEL.to_string(),
            ..NormalizeConfig::default()
        }
    }
}

impl SyntaxTree {
    /// Runs `rules` over the whole tree, children before parents.
    ///
    /// At each node the first rule that does not answer `Keep` decides the
    /// fate of a child. Spliced grandchildren are offered to the rules again
    /// against their new parent, so the result is a fixed point of `rules`.
    /// Returns the number of rewrites performed.
    pub fn rewrite(&mut self, rules: &[&dyn RewriteRule]) -> usize {
        // Reversed pre-order visits every node after all of its descendants.
        let order = self.preorder();
        order
            .into_iter()
            .rev()
            .map(|id| self.rewrite_children(id, rules))
            .sum()
    }

    fn rewrite_children(&mut self, id: NodeId, rules: &[&dyn RewriteRule]) -> usize {
        let mut count = 0;

        let children = self.children(id).to_vec();
        let mut queue: VecDeque<NodeId> = children.into();
        let mut kept = Vec::with_capacity(queue.len());

        while let Some(child) = queue.pop_front() {
            let decision = rules
                .iter()
                .map(|rule| (rule.name(), rule.apply(self.node(id), self.node(child))))
                .find(|(_, decision)| *decision != Rewrite::Keep);

            match decision {
                Some((_, Rewrite::Remove)) => {
                    self.node_mut(child).parent = None;
                    count += 1;
                }
                Some((rule, Rewrite::Splice)) => {
                    debug!(rule, parent = self.label(id), "Splicing node");
                    let grandchildren = std::mem::take(&mut self.node_mut(child).children);
                    self.node_mut(child).parent = None;
                    for grandchild in grandchildren.iter().rev() {
                        self.node_mut(*grandchild).parent = Some(id);
                        queue.push_front(*grandchild);
                    }
                    count += 1;
                }
                _ => kept.push(child),
            }
        }

        self.node_mut(id).children = kept;
        count
    }

    /// Deletes every node labeled `marker`. Returns the number of removals.
    pub fn remove_epsilons(&mut self, marker: &str) -> usize {
        let strip = StripLabel {
            label: marker.to_string(),
        };
        let rules: [&dyn RewriteRule; 1] = [&strip];
        self.rewrite(&rules)
    }

    /// Flattens redundant wrappers: a single-child node under a parent with
    /// the same label, and a `marker` node directly under another one.
    pub fn remove_bad_minus(&mut self, marker: &str) -> usize {
        let nested = CollapseNestedMarker {
            label: marker.to_string(),
        };
        let rules: [&dyn RewriteRule; 2] = [&CollapseSameLabel, &nested];
        self.rewrite(&rules)
    }

    /// Replaces a comparison label by its negation and returns the same node.
    /// Labels that are not comparisons are left untouched.
    pub fn reverse_cond(&mut self, cond: NodeId) -> NodeId {
        if let Some(negated) = negate_comparator(self.label(cond)) {
            self.set_label(cond, negated);
        }
        cond
    }

    pub fn normalize(&mut self, config: &NormalizeConfig) {
        let removed = self.remove_epsilons(&config.epsilon_marker);
        let collapsed = self.remove_bad_minus(&config.minus_marker);
        debug!(removed, collapsed, "Normalized syntax tree");
    }
}
