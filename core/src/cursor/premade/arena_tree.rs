use core::fmt::Debug;

use crate::{
    cursor::{NodeTree, Node},
    AllocError,
};


/// The storage underlying an [`ArenaTree`]: a growable sequence of [`Node`]s
/// that might be limited in capacity.
pub trait Slots {
    /// The type of labels of the stored nodes.
    type Label: Copy + Eq + Debug;

    /// How many nodes are stored.
    fn len(&self) -> usize;

    /// Whether no nodes are stored.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append a node, or fail if there is no more room.
    fn push(&mut self, node: Node<Self::Label>) -> Result<(), AllocError>;

    /// Drop all nodes at index `len` and after.
    fn truncate(&mut self, len: usize);

    /// The node at `index`.
    fn get(&self, index: usize) -> Option<&Node<Self::Label>>;

    /// The node at `index`, mutably.
    fn get_mut(&mut self, index: usize) -> Option<&mut Node<Self::Label>>;
}


/// The [`NodeTree::Mark`] of an [`ArenaTree`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct ArenaMark {
    len: usize,
    open: Option<usize>,
}


/// A [`NodeTree`] that stores nodes contiguously, in the order they are opened,
/// in some [`Slots`].  Each node refers to its parent by index, and the
/// innermost open node is tracked, so the chain of open nodes is the path from
/// it through its parents.
///
/// Because descendants are always stored after their ancestor, abandoning a
/// node, and all its descendants, is simply truncating the storage at the
/// node's index; and a [`ArenaMark`] is simply the storage length together with
/// the innermost open node.
#[derive(Clone, Debug)]
pub struct ArenaTree<S> {
    slots: S,
    open: Option<usize>,
}

impl<S> ArenaTree<S>
    where S: Slots,
{
    /// Make a tree that stores its nodes in `slots`, which should be empty.
    pub fn new(slots: S) -> Self {
        Self { slots, open: None }
    }

    /// How many nodes are stored, including open ones.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no nodes are stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The node at `index`, in opening order.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Node<S::Label>> {
        self.slots.get(index)
    }

    /// Iterate the stored nodes in opening order, which is a pre-order
    /// traversal of the tree.
    pub fn iter(&self) -> impl Iterator<Item = &Node<S::Label>> + '_ {
        (0 .. self.slots.len()).filter_map(move |i| self.slots.get(i))
    }

    /// How many nodes are currently open.  This is zero whenever no match is
    /// in progress.
    pub fn open_depth(&self) -> usize {
        let mut depth = 0;
        let mut cur = self.open;
        while let Some(i) = cur {
            depth += 1;
            cur = self.slots.get(i).and_then(|n| n.parent);
        }
        depth
    }

    /// Give back the storage.
    pub fn into_slots(self) -> S {
        self.slots
    }
}

impl<S> NodeTree for ArenaTree<S>
    where S: Slots,
{
    type Label = S::Label;
    type Mark = ArenaMark;

    #[inline]
    fn mark(&self) -> Self::Mark {
        ArenaMark { len: self.slots.len(), open: self.open }
    }

    #[inline]
    fn rewind(&mut self, mark: Self::Mark) {
        self.slots.truncate(mark.len);
        self.open = mark.open;
    }

    fn open(&mut self, label: Self::Label, start: usize) -> Result<(), AllocError> {
        let index = self.slots.len();
        self.slots.push(Node { label, start, end: start, parent: self.open })?;
        self.open = Some(index);
        Ok(())
    }

    fn complete(&mut self, label: Self::Label, end: usize) {
        let node = self.open.and_then(|i| self.slots.get_mut(i));
        debug_assert!(node.is_some(), "no open node to complete");
        if let Some(node) = node {
            debug_assert_eq!(node.label, label, "completed node label mismatch");
            node.end = end;
            self.open = node.parent;
        }
    }

    fn abandon(&mut self, label: Self::Label) {
        debug_assert!(self.open.is_some(), "no open node to abandon");
        if let Some(index) = self.open {
            let parent = self.slots.get(index).and_then(|node| {
                debug_assert_eq!(node.label, label, "abandoned node label mismatch");
                node.parent
            });
            self.slots.truncate(index);
            self.open = parent;
        }
    }
}


#[cfg(feature = "alloc")]
impl<L> Slots for alloc::vec::Vec<Node<L>>
    where L: Copy + Eq + Debug,
{
    type Label = L;

    #[inline]
    fn len(&self) -> usize {
        alloc::vec::Vec::len(self)
    }

    #[inline]
    fn push(&mut self, node: Node<L>) -> Result<(), AllocError> {
        alloc::vec::Vec::push(self, node);
        Ok(())
    }

    #[inline]
    fn truncate(&mut self, len: usize) {
        alloc::vec::Vec::truncate(self, len);
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&Node<L>> {
        <[Node<L>]>::get(self, index)
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut Node<L>> {
        <[Node<L>]>::get_mut(self, index)
    }
}


// Note: Tested by the shared suites run by the slice_tree and vec_tree
// integration tests.
