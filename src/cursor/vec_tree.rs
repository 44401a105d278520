use std::fmt::Debug;

use crate::{
    cursor::{NodeTree, Node, premade::{ArenaTree, ArenaMark}},
    tree::Tree,
    AllocError,
};


/// A [`NodeTree`] which stores its nodes in a heap-allocated `Vec` without
/// limit, so opening a node never fails.
///
/// It also records the trail of labels of the [`Store`](crate::Store) rules
/// that a hard failure unwound through, innermost first, so that the failure
/// can be reported with its context.  The trail is cleared when the position is
/// restored, which only happens after a failure is recovered from.
#[derive(Clone, Debug)]
pub struct VecTree<L> {
    arena: ArenaTree<Vec<Node<L>>>,
    trail: Vec<L>,
}

impl<L> VecTree<L>
    where L: Copy + Eq + Debug,
{
    /// Make an empty tree.
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Make an empty tree that can hold `capacity` nodes before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self { arena: ArenaTree::new(Vec::with_capacity(capacity)), trail: Vec::new() }
    }

    /// The nodes stored so far.
    #[inline]
    pub fn arena(&self) -> &ArenaTree<Vec<Node<L>>> {
        &self.arena
    }

    /// The labels a hard failure unwound through, innermost first.
    #[inline]
    pub fn trail(&self) -> &[L] {
        &self.trail
    }

    /// Give back the trail.
    pub fn into_trail(self) -> Vec<L> {
        self.trail
    }

    /// Finish, giving the tree of the completed nodes.  Should only be called
    /// when no node is open, i.e. after a match returned `Ok(true)`.
    pub fn into_tree(self) -> Tree<L> {
        debug_assert_eq!(self.arena.open_depth(), 0, "finished tree has open nodes");
        Tree::from_nodes(self.arena.into_slots())
    }
}

/// Must implement this manually because deriving would place unwanted bounds on
/// the type parameter.
impl<L> Default for VecTree<L>
    where L: Copy + Eq + Debug,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<L> NodeTree for VecTree<L>
    where L: Copy + Eq + Debug,
{
    type Label = L;
    type Mark = ArenaMark;

    #[inline]
    fn mark(&self) -> Self::Mark {
        self.arena.mark()
    }

    #[inline]
    fn rewind(&mut self, mark: Self::Mark) {
        self.arena.rewind(mark);
        self.trail.clear();
    }

    #[inline]
    fn open(&mut self, label: L, start: usize) -> Result<(), AllocError> {
        self.arena.open(label, start)
    }

    #[inline]
    fn complete(&mut self, label: L, end: usize) {
        self.arena.complete(label, end);
    }

    #[inline]
    fn abandon(&mut self, label: L) {
        self.arena.abandon(label);
    }

    fn unwinding(&mut self, label: L) {
        self.trail.push(label);
    }
}


// Note: Also tested by the shared suites run by the vec_tree integration test.
