use core::fmt::Debug;

use crate::{
    cursor::{Node, premade::{ArenaTree, Slots}},
    AllocError,
};


/// [`Slots`] that store nodes in a contiguous mutable slice of them, which
/// limits how many nodes can be stored.
///
/// This is useful for either or both of:
///
/// - Storing parse trees in stack arrays in constrained environments without
/// heap allocation.
///
/// - Limiting the memory consumed by parsing, e.g. to prevent D.o.S. attacks.
/// Heap-allocated arrays/slices could be used for this.
///
/// Slots freed by abandoning or rewinding are reused.
#[derive(Debug)]
pub struct SliceSlots<'a, L> {
    slice: &'a mut [Option<Node<L>>],
    len: usize,
}

impl<'a, L> SliceSlots<'a, L> {
    /// Given a mutable slice of node slots, make storage from it.  Whatever the
    /// slots held before is ignored and overwritten.
    pub fn new(slice: &'a mut [Option<Node<L>>]) -> Self {
        slice.iter_mut().for_each(|slot| *slot = None);
        Self { slice, len: 0 }
    }

    /// The total number of nodes that can be stored.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slice.len()
    }

    /// Can be used to regain control of the borrow of the slice, so that the
    /// stored nodes can be used after the tree is done with.
    pub fn into_slice(self) -> &'a mut [Option<Node<L>>] {
        self.slice
    }
}

impl<'a, L> Slots for SliceSlots<'a, L>
    where L: Copy + Eq + Debug,
{
    type Label = L;

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    fn push(&mut self, node: Node<L>) -> Result<(), AllocError> {
        match self.slice.get_mut(self.len) {
            Some(slot) => {
                *slot = Some(node);
                self.len += 1;
                Ok(())
            }
            None => Err(AllocError::AllocExhausted)
        }
    }

    fn truncate(&mut self, len: usize) {
        if len < self.len {
            self.slice[len .. self.len].iter_mut().for_each(|slot| *slot = None);
            self.len = len;
        }
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&Node<L>> {
        self.slice.get(index).and_then(Option::as_ref)
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut Node<L>> {
        self.slice.get_mut(index).and_then(Option::as_mut)
    }
}


/// A [`NodeTree`](crate::NodeTree) which stores its nodes in a
/// caller-provided slice, e.g. a stack array.  Opening a node when the slice
/// is full fails with [`AllocError::AllocExhausted`], which is a hard failure
/// of the match.
pub type SliceTree<'a, L> = ArenaTree<SliceSlots<'a, L>>;

impl<'a, L> ArenaTree<SliceSlots<'a, L>>
    where L: Copy + Eq + Debug,
{
    /// Make a tree that stores its nodes in `slice`.
    pub fn in_slice(slice: &'a mut [Option<Node<L>>]) -> Self {
        Self::new(SliceSlots::new(slice))
    }
}
