//! Group hierarchy and visibility.
//!
//! Named objects form a forest. Building it and computing visibility are two
//! separate phases: [`GroupHierarchy::add_group`] and
//! [`GroupHierarchy::add_members`] only mutate the tree, while
//! [`GroupHierarchy::compute_visibility`] is a read-only top-down pass.

use std::collections::{BTreeSet, HashMap};

use crate::session::ObjectKind;
use crate::util::BitSet;

/// One named node.
#[derive(Debug, Clone)]
pub struct GroupNode {
    pub name: String,
    pub kind: ObjectKind,
    /// The object's own enabled flag
    pub enabled: bool,
    parent: Option<usize>,
    children: Vec<usize>,
    members: BitSet,
}

impl GroupNode {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: ObjectKind::Group,
            enabled: true,
            parent: None,
            children: Vec::new(),
            members: BitSet::new(),
        }
    }

    /// Atoms of this node and all its descendants.
    pub fn members(&self) -> &BitSet {
        &self.members
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Result of the visibility pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Visibility {
    /// Atoms of hidden molecules
    pub hidden: BitSet,
    /// Names of hidden objects that are not molecules
    pub occluded: BTreeSet<String>,
    /// Names of every hidden node
    pub hidden_names: BTreeSet<String>,
    /// Union of all memberships
    pub all: BitSet,
}

impl Visibility {
    pub fn is_hidden(&self, name: &str) -> bool {
        self.hidden_names.contains(name)
    }
}

/// Forest of named groups.
#[derive(Debug, Clone, Default)]
pub struct GroupHierarchy {
    nodes: Vec<GroupNode>,
    by_name: HashMap<String, usize>,
}

impl GroupHierarchy {
    pub fn new() -> Self {
        Self::default()
    }

    fn fetch(&mut self, name: &str) -> usize {
        if let Some(&i) = self.by_name.get(name) {
            return i;
        }
        let i = self.nodes.len();
        self.nodes.push(GroupNode::new(name));
        self.by_name.insert(name.to_string(), i);
        i
    }

    /// Create or update node `name` and link it under `parent`.
    ///
    /// Linking is idempotent. A node moved to a different parent is unlinked
    /// from the old one first and its members leave the old ancestors.
    pub fn add_group(&mut self, name: &str, parent: Option<&str>, kind: ObjectKind, enabled: bool) -> usize {
        let i = self.fetch(name);
        self.nodes[i].kind = kind;
        self.nodes[i].enabled = enabled;
        let Some(parent) = parent.filter(|p| !p.is_empty() && *p != name) else {
            return i;
        };
        let p = self.fetch(parent);
        if self.nodes[i].parent == Some(p) || self.is_ancestor(i, p) {
            return i;
        }
        let members = self.nodes[i].members.clone();
        if let Some(old) = self.nodes[i].parent {
            self.nodes[old].children.retain(|&c| c != i);
            let mut cur = Some(old);
            while let Some(c) = cur {
                self.nodes[c].members.and_not(&members);
                cur = self.nodes[c].parent;
            }
        }
        self.nodes[i].parent = Some(p);
        self.nodes[p].children.push(i);
        self.propagate(p, &members);
        i
    }

    /// True when `a` is `b` or one of its ancestors.
    fn is_ancestor(&self, a: usize, b: usize) -> bool {
        let mut cur = Some(b);
        while let Some(c) = cur {
            if c == a {
                return true;
            }
            cur = self.nodes[c].parent;
        }
        false
    }

    fn propagate(&mut self, from: usize, members: &BitSet) {
        let mut cur = Some(from);
        while let Some(c) = cur {
            self.nodes[c].members.or(members);
            cur = self.nodes[c].parent;
        }
    }

    /// Add atoms to `name` and every ancestor.
    pub fn add_members(&mut self, name: &str, members: &BitSet) {
        let i = self.fetch(name);
        self.propagate(i, members);
    }

    pub fn get(&self, name: &str) -> Option<&GroupNode> {
        self.by_name.get(name).map(|&i| &self.nodes[i])
    }

    pub fn parent_of(&self, name: &str) -> Option<&str> {
        let node = self.get(name)?;
        node.parent.map(|p| self.nodes[p].name.as_str())
    }

    /// Child names in insertion order.
    pub fn children_of(&self, name: &str) -> Vec<&str> {
        self.get(name)
            .map(|n| n.children.iter().map(|&c| self.nodes[c].name.as_str()).collect())
            .unwrap_or_default()
    }

    pub fn roots(&self) -> impl Iterator<Item = &GroupNode> {
        self.nodes.iter().filter(|n| n.is_root())
    }

    pub fn iter(&self) -> impl Iterator<Item = &GroupNode> {
        self.nodes.iter()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Effective visibility of one node: its own flag and every ancestor's.
    pub fn is_visible(&self, name: &str) -> bool {
        let Some(&i) = self.by_name.get(name) else {
            return true;
        };
        let mut cur = Some(i);
        while let Some(c) = cur {
            if !self.nodes[c].enabled {
                return false;
            }
            cur = self.nodes[c].parent;
        }
        true
    }

    /// Top-down visibility pass from every root.
    pub fn compute_visibility(&self) -> Visibility {
        self.compute_with(|_| None)
    }

    /// Visibility pass with per-name overrides of the enabled flag, used
    /// when regenerating a saved scene.
    pub fn compute_with(&self, enabled: impl Fn(&str) -> Option<bool>) -> Visibility {
        let mut vis = Visibility::default();
        for node in &self.nodes {
            vis.all.or(&node.members);
        }
        let mut stack: Vec<(usize, bool)> = self
            .nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.is_root())
            .map(|(i, _)| (i, true))
            .collect();
        while let Some((i, parent_visible)) = stack.pop() {
            let node = &self.nodes[i];
            let own = enabled(&node.name).unwrap_or(node.enabled);
            let visible = parent_visible && own;
            if !visible {
                tracing::trace!("group {} hidden", node.name);
                vis.hidden_names.insert(node.name.clone());
                if node.kind == ObjectKind::Molecule {
                    vis.hidden.or(&node.members);
                } else {
                    vis.occluded.insert(node.name.clone());
                }
            }
            stack.extend(node.children.iter().map(|&c| (c, visible)));
        }
        vis
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(v: &[usize]) -> BitSet {
        v.iter().copied().collect()
    }

    #[test]
    fn test_membership_propagates_to_ancestors() {
        let mut g = GroupHierarchy::new();
        g.add_group("top", None, ObjectKind::Group, true);
        g.add_group("mid", Some("top"), ObjectKind::Group, true);
        g.add_group("mol", Some("mid"), ObjectKind::Molecule, true);
        g.add_members("mol", &bits(&[0, 1, 2]));
        assert_eq!(g.get("top").map(|n| n.members().cardinality()), Some(3));
        assert_eq!(g.get("mid").map(|n| n.members().cardinality()), Some(3));
        assert_eq!(g.parent_of("mol"), Some("mid"));
    }

    #[test]
    fn test_readding_child_is_noop() {
        let mut g = GroupHierarchy::new();
        g.add_group("grp", None, ObjectKind::Group, true);
        g.add_group("a", Some("grp"), ObjectKind::Molecule, true);
        g.add_members("a", &bits(&[4, 5]));
        g.add_group("a", Some("grp"), ObjectKind::Molecule, true);
        assert_eq!(g.children_of("grp"), vec!["a"]);
        assert_eq!(g.get("grp").map(|n| n.members().cardinality()), Some(2));
    }

    #[test]
    fn test_moved_child_leaves_old_ancestors() {
        let mut g = GroupHierarchy::new();
        g.add_group("top", None, ObjectKind::Group, true);
        g.add_group("old", Some("top"), ObjectKind::Group, true);
        g.add_group("new", Some("top"), ObjectKind::Group, true);
        g.add_group("a", Some("old"), ObjectKind::Molecule, true);
        g.add_members("a", &bits(&[0, 1]));

        g.add_group("a", Some("new"), ObjectKind::Molecule, true);
        assert_eq!(g.parent_of("a"), Some("new"));
        assert!(g.children_of("old").is_empty());
        assert_eq!(g.get("old").map(|n| n.members().cardinality()), Some(0));
        assert_eq!(g.get("new").map(|n| n.members().cardinality()), Some(2));
        assert_eq!(g.get("top").map(|n| n.members().cardinality()), Some(2));
    }

    #[test]
    fn test_hidden_root_hides_descendants() {
        let mut g = GroupHierarchy::new();
        g.add_group("grp", None, ObjectKind::Group, false);
        g.add_group("a", Some("grp"), ObjectKind::Molecule, true);
        g.add_group("b", Some("grp"), ObjectKind::Molecule, true);
        g.add_group("d", Some("grp"), ObjectKind::Measurement, true);
        g.add_members("a", &bits(&[0, 1]));
        g.add_members("b", &bits(&[2]));
        g.add_group("c", None, ObjectKind::Molecule, true);
        g.add_members("c", &bits(&[3]));

        let vis = g.compute_visibility();
        assert_eq!(vis.hidden, bits(&[0, 1, 2]));
        assert!(vis.occluded.contains("grp"));
        assert!(vis.occluded.contains("d"));
        assert!(!vis.is_hidden("c"));
        assert_eq!(vis.all, bits(&[0, 1, 2, 3]));
        assert!(!g.is_visible("a"));
    }

    #[test]
    fn test_hidden_leaf_under_visible_parent() {
        let mut g = GroupHierarchy::new();
        g.add_group("grp", None, ObjectKind::Group, true);
        g.add_group("a", Some("grp"), ObjectKind::Molecule, false);
        g.add_members("a", &bits(&[7]));
        let vis = g.compute_visibility();
        assert_eq!(vis.hidden, bits(&[7]));
        assert!(!vis.is_hidden("grp"));
    }

    #[test]
    fn test_override_visibility() {
        let mut g = GroupHierarchy::new();
        g.add_group("a", None, ObjectKind::Molecule, true);
        g.add_members("a", &bits(&[0]));
        let vis = g.compute_with(|n| (n == "a").then_some(false));
        assert_eq!(vis.hidden, bits(&[0]));
    }

    #[test]
    fn test_cycle_is_ignored() {
        let mut g = GroupHierarchy::new();
        g.add_group("a", None, ObjectKind::Group, true);
        g.add_group("b", Some("a"), ObjectKind::Group, true);
        g.add_group("a", Some("b"), ObjectKind::Group, true);
        assert_eq!(g.parent_of("a"), None);
        assert_eq!(g.roots().count(), 1);
    }
}
