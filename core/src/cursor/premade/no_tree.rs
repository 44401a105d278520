use core::{fmt::Debug, marker::PhantomData};

use crate::{cursor::NodeTree, AllocError};


/// A [`NodeTree`] that stores no nodes, for when only recognizing whether
/// input matches is wanted.  It only tracks how many nodes are open, so that
/// debug builds can check the open/close discipline.
#[derive(Debug)]
pub struct NoTree<L> {
    depth: usize,
    label: PhantomData<fn(L)>,
}

// Note: Must implement these manually instead of using `derive` because
// `derive` would place additional bounds on the `L` type parameter.

impl<L> Default for NoTree<L> {
    #[inline]
    fn default() -> Self {
        Self { depth: 0, label: PhantomData }
    }
}

impl<L> Clone for NoTree<L> {
    #[inline]
    fn clone(&self) -> Self { *self }
}

impl<L> Copy for NoTree<L> {}

impl<L> NoTree<L> {
    /// How many nodes are currently open.
    #[inline]
    pub fn open_depth(&self) -> usize {
        self.depth
    }
}

impl<L> NodeTree for NoTree<L>
    where L: Copy + Eq + Debug,
{
    type Label = L;
    type Mark = usize;

    #[inline]
    fn mark(&self) -> usize {
        self.depth
    }

    #[inline]
    fn rewind(&mut self, mark: usize) {
        self.depth = mark;
    }

    #[inline]
    fn open(&mut self, _label: L, _start: usize) -> Result<(), AllocError> {
        self.depth += 1;
        Ok(())
    }

    #[inline]
    fn complete(&mut self, _label: L, _end: usize) {
        debug_assert!(self.depth > 0, "no open node to complete");
        self.depth = self.depth.saturating_sub(1);
    }

    #[inline]
    fn abandon(&mut self, _label: L) {
        debug_assert!(self.depth > 0, "no open node to abandon");
        self.depth = self.depth.saturating_sub(1);
    }
}
