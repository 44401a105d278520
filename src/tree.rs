//! Finished parse trees.

use std::{ops::Index, slice};

use crate::Node;


/// The index of a node in a [`Tree`].
pub type NodeId = usize;


/// A finished parse tree: the completed nodes of a successful match, in
/// pre-order, i.e. in the order they were opened.
///
/// A node's parent always precedes it, and a node's descendants immediately
/// follow it.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Tree<L> {
    nodes: Vec<Node<L>>,
}

impl<L> Tree<L> {
    /// Make a tree from nodes that are in pre-order with each `parent` index
    /// referring to an earlier node.
    pub fn from_nodes(nodes: Vec<Node<L>>) -> Self {
        debug_assert!(nodes.iter().enumerate().all(|(i, n)| n.parent.map_or(true, |p| p < i)),
                      "nodes are not in pre-order");
        Self { nodes }
    }

    /// How many nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether there are no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The node with the given id.
    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&Node<L>> {
        self.nodes.get(id)
    }

    /// All the nodes, in pre-order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Node<L>> {
        self.nodes.iter()
    }

    /// The ids of the nodes which have no parent, in input order.
    pub fn roots(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.children_of(None)
    }

    /// The ids of the direct children of the given node, in input order.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.children_of(Some(id))
    }

    fn children_of(&self, parent: Option<NodeId>) -> impl Iterator<Item = NodeId> + '_ {
        // Descendants of a node are contiguous after it, and their parents are
        // at or after it.  `None` orders before every `Some`.
        let first = parent.map_or(0, |p| p + 1);
        self.nodes.iter().enumerate().skip(first)
            .take_while(move |(_, n)| n.parent >= parent)
            .filter(move |(_, n)| n.parent == parent)
            .map(|(i, _)| i)
    }

    /// The part of `input` spanned by the given node.  `input` must be the
    /// string that was parsed.
    pub fn text<'s>(&self, id: NodeId, input: &'s str) -> Option<&'s str> {
        self.get(id).and_then(|n| input.get(n.span()))
    }

    /// Give back the nodes.
    pub fn into_nodes(self) -> Vec<Node<L>> {
        self.nodes
    }
}

impl<L> Index<NodeId> for Tree<L> {
    type Output = Node<L>;

    #[inline]
    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id]
    }
}

impl<'t, L> IntoIterator for &'t Tree<L> {
    type Item = &'t Node<L>;
    type IntoIter = slice::Iter<'t, Node<L>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn node(label: char, start: usize, end: usize, parent: Option<usize>) -> Node<char> {
        Node { label, start, end, parent }
    }

    #[test]
    fn structure() {
        // a(b(c) d) e
        let tree = Tree::from_nodes(vec![
            node('a', 0, 4, None),
            node('b', 0, 2, Some(0)),
            node('c', 1, 2, Some(1)),
            node('d', 2, 4, Some(0)),
            node('e', 4, 5, None),
        ]);
        assert_eq!(tree.roots().collect::<Vec<_>>(), [0, 4]);
        assert_eq!(tree.children(0).collect::<Vec<_>>(), [1, 3]);
        assert_eq!(tree.children(1).collect::<Vec<_>>(), [2]);
        assert_eq!(tree.children(4).count(), 0);
        assert_eq!(tree.text(3, "wxyz!"), Some("yz"));
        assert_eq!(tree[4].label, 'e');
        assert_eq!(tree.get(5), None);
        assert_eq!((&tree).into_iter().count(), 5);
    }
}
