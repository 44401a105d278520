//! Traits and types that provide the mutable context that rules match against:
//! position state over an input and the construction of a parse tree.

use core::fmt::{self, Debug, Display, Formatter};
use core::ops::Range;

use crate::AllocError;


/// Implementations provided for ready use.
pub mod premade
{
    mod input;

    mod arena_tree;
    pub use arena_tree::{ArenaTree, ArenaMark, Slots};

    mod slice_tree;
    pub use slice_tree::{SliceTree, SliceSlots};

    mod no_tree;
    pub use no_tree::NoTree;
}


/// The mutable context that all rules match against.  It owns the position
/// state over some input and the stack of parse-tree nodes under construction,
/// for the duration of one top-level match.
///
/// Rules only ever invoke these operations; they never hold any of this state
/// themselves.
pub trait Cursor {
    /// A cheap snapshot of "where in the input we are".  Restoring a snapshot,
    /// with [`set_position`](Self::set_position), must also undo every node
    /// mutation made since the snapshot was taken.
    type Pos: Copy + Eq + Debug;
    /// The type of a single unit of input, e.g. a `char` or a token.
    type Unit: Copy;
    /// The type of the labels attached to parse-tree nodes.
    type Label: Copy + Eq + Debug;

    /// Snapshot the current position.
    fn position(&self) -> Self::Pos;

    /// Restore a snapshot previously returned by [`position`](Self::position).
    fn set_position(&mut self, pos: Self::Pos);

    /// Whether any input has been consumed since `pos` was taken.  The default
    /// compares whole positions, which also counts node changes as progress;
    /// implementations should override it when they can compare only the
    /// input position.
    #[inline]
    fn advanced_since(&self, pos: Self::Pos) -> bool {
        self.position() != pos
    }

    /// Whether there is no remaining input.
    fn at_end(&self) -> bool;

    /// The unit of input at the current position, or `None` if at the end.
    fn peek(&self) -> Option<Self::Unit>;

    /// Move to the next unit of input.  Does nothing if already at the end.
    fn advance(&mut self);

    /// Start a new node, with the given label, at the current position.  It
    /// becomes the parent of any nodes opened until it is completed or
    /// abandoned.
    fn open_node(&mut self, label: Self::Label) -> Result<(), AllocError>;

    /// Close the most recently opened still-open node, recording the span up
    /// to the current position.  The label must be the one it was opened with.
    fn complete_node(&mut self, label: Self::Label);

    /// Discard the most recently opened still-open node and all of its
    /// descendants, as if it had never been opened.  The label must be the one
    /// it was opened with.
    fn abandon_node(&mut self, label: Self::Label);

    /// Called by [`Store`](crate::Store) when a hard failure is propagating
    /// through it, right after it abandoned its node, so that implementations
    /// may record the labels of the rules the failure escaped.  The default
    /// does nothing.
    #[inline]
    fn unwinding(&mut self, _label: Self::Label) {}
}

/// A sequence of input units that can be randomly accessed by offset.
///
/// Offsets are in whatever measure the implementation chooses (e.g. bytes for
/// `str`), as long as advancing past a unit adds its width.
pub trait Input {
    /// The type of a single unit.
    type Unit: Copy;

    /// The offset just past the last unit.
    fn len(&self) -> usize;

    /// Whether there are no units at all.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The unit starting at `offset`, together with its width, or `None` if
    /// `offset` is at or past the end.
    fn unit_at(&self, offset: usize) -> Option<(Self::Unit, usize)>;
}


/// The storage of a parse tree under construction.  This is the half of a
/// [`TextCursor`] that is concerned with nodes.
pub trait NodeTree {
    /// The type of labels attached to nodes.
    type Label: Copy + Eq + Debug;
    /// A snapshot of the storage state, that can be rewound to.
    type Mark: Copy + Eq + Debug;

    /// Snapshot the current state.
    fn mark(&self) -> Self::Mark;

    /// Discard every change made since `mark` was taken.
    fn rewind(&mut self, mark: Self::Mark);

    /// Open a node starting at input offset `start`.
    fn open(&mut self, label: Self::Label, start: usize) -> Result<(), AllocError>;

    /// Complete the innermost open node, ending at input offset `end`.
    fn complete(&mut self, label: Self::Label, end: usize);

    /// Discard the innermost open node and all its descendants.
    fn abandon(&mut self, label: Self::Label);

    /// See [`Cursor::unwinding`].  The default does nothing.
    #[inline]
    fn unwinding(&mut self, _label: Self::Label) {}
}

impl<T> NodeTree for &mut T
    where T: NodeTree + ?Sized,
{
    type Label = T::Label;
    type Mark = T::Mark;

    #[inline]
    fn mark(&self) -> Self::Mark {
        (**self).mark()
    }

    #[inline]
    fn rewind(&mut self, mark: Self::Mark) {
        (**self).rewind(mark);
    }

    #[inline]
    fn open(&mut self, label: Self::Label, start: usize) -> Result<(), AllocError> {
        (**self).open(label, start)
    }

    #[inline]
    fn complete(&mut self, label: Self::Label, end: usize) {
        (**self).complete(label, end);
    }

    #[inline]
    fn abandon(&mut self, label: Self::Label) {
        (**self).abandon(label);
    }

    #[inline]
    fn unwinding(&mut self, label: Self::Label) {
        (**self).unwinding(label);
    }
}


/// A labeled region of the input, as recorded in a parse tree.
///
/// `parent` is the index, in the same storage, of the node that was open
/// when this one was opened.  Storage holds nodes in the order they were
/// opened, so a parent always precedes its children.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Node<L> {
    /// What kind of node this is.
    pub label: L,
    /// Input offset of the first unit covered.
    pub start: usize,
    /// Input offset just past the last unit covered.  Equals `start` while the
    /// node is still open.
    pub end: usize,
    /// Index of the enclosing node, if any.
    pub parent: Option<usize>,
}

impl<L> Node<L> {
    /// The range of input offsets covered.
    #[inline]
    pub fn span(&self) -> Range<usize> {
        self.start .. self.end
    }
}


/// The [`Cursor::Pos`] of a [`TextCursor`]: the input offset together with the
/// mark of its node tree.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Position<M> {
    /// Offset into the input.
    pub offset: usize,
    /// Node-tree state.
    pub mark: M,
}

/// Shows only the offset.
impl<M> Display for Position<M> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "offset {}", self.offset)
    }
}


/// A [`Cursor`] over any random-access [`Input`] that stores its parse tree in
/// any [`NodeTree`].
///
/// This is the cursor to use unless an application needs to manage position
/// state in some special way.
#[derive(Clone, Debug)]
pub struct TextCursor<I, T> {
    input: I,
    offset: usize,
    tree: T,
}

impl<I, T> TextCursor<I, T>
    where I: Input,
          T: NodeTree,
{
    /// Make a cursor at the start of `input` that builds into `tree`.
    pub fn new(input: I, tree: T) -> Self {
        Self { input, offset: 0, tree }
    }

    /// The current offset into the input.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The input being matched.
    #[inline]
    pub fn input(&self) -> &I {
        &self.input
    }

    /// The node tree being built.
    #[inline]
    pub fn tree(&self) -> &T {
        &self.tree
    }

    /// Give back the input and the built tree.
    pub fn into_parts(self) -> (I, T) {
        (self.input, self.tree)
    }
}

impl<I, T> Cursor for TextCursor<I, T>
    where I: Input,
          T: NodeTree,
{
    type Pos = Position<T::Mark>;
    type Unit = I::Unit;
    type Label = T::Label;

    #[inline]
    fn position(&self) -> Self::Pos {
        Position { offset: self.offset, mark: self.tree.mark() }
    }

    #[inline]
    fn set_position(&mut self, pos: Self::Pos) {
        self.offset = pos.offset;
        self.tree.rewind(pos.mark);
    }

    #[inline]
    fn advanced_since(&self, pos: Self::Pos) -> bool {
        self.offset != pos.offset
    }

    #[inline]
    fn at_end(&self) -> bool {
        self.offset >= self.input.len()
    }

    #[inline]
    fn peek(&self) -> Option<Self::Unit> {
        self.input.unit_at(self.offset).map(|(unit, _)| unit)
    }

    #[inline]
    fn advance(&mut self) {
        if let Some((_, width)) = self.input.unit_at(self.offset) {
            self.offset += width;
        }
    }

    #[inline]
    fn open_node(&mut self, label: Self::Label) -> Result<(), AllocError> {
        self.tree.open(label, self.offset)
    }

    #[inline]
    fn complete_node(&mut self, label: Self::Label) {
        self.tree.complete(label, self.offset);
    }

    #[inline]
    fn abandon_node(&mut self, label: Self::Label) {
        self.tree.abandon(label);
    }

    #[inline]
    fn unwinding(&mut self, label: Self::Label) {
        self.tree.unwinding(label);
    }
}
