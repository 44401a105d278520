//! Used by the integration tests of both the [core](../trellis_core/index.html)
//! and the [full](../trellis/index.html) crates.  It provides test suites that
//! can be run against any type of [`NodeTree`] that can be inspected, so that
//! every tree implementation is held to the same matching semantics.

use trellis_core::{
    cursor::premade::{ArenaTree, SliceTree},
    AlwaysSucceed, Error, Node, NodeTree, Rule, TextCursor,
};
use trellis::VecTree;


pub mod suites;
pub mod utils;


/// The labels of the nodes the suites' grammars record.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[allow(missing_docs)]
pub enum Label {
    Number,
    Word,
    Sign,
    List,
    Item,
    Entry,
    Key,
    Value,
}


/// A [`NodeTree`] whose nodes the suites can look at.
pub trait Inspect: NodeTree<Label = Label> {
    /// All the stored nodes, in opening order.
    fn nodes(&self) -> Vec<Node<Label>>;

    /// How many nodes are open.
    fn open_depth(&self) -> usize;
}

impl Inspect for SliceTree<'_, Label> {
    fn nodes(&self) -> Vec<Node<Label>> {
        self.iter().copied().collect()
    }

    fn open_depth(&self) -> usize {
        ArenaTree::open_depth(self)
    }
}

impl Inspect for VecTree<Label> {
    fn nodes(&self) -> Vec<Node<Label>> {
        self.arena().iter().copied().collect()
    }

    fn open_depth(&self) -> usize {
        self.arena().open_depth()
    }
}


/// The cursor the suites match with.  It borrows the tree so the same tree can
/// be reused for every case.
pub type Cur<'t, T> = TextCursor<&'static str, &'t mut T>;


/// What happened when a rule was matched by [`run`] or [`run_after`].
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Run {
    /// The outcome, with positions reduced to input offsets.
    pub outcome: Result<bool, Error<usize>>,
    /// Offset before the rule was matched.
    pub before_offset: usize,
    /// Nodes before the rule was matched.
    pub before_nodes: Vec<Node<Label>>,
    /// Offset after.
    pub offset: usize,
    /// Nodes after.
    pub nodes: Vec<Node<Label>>,
}

impl Run {
    /// Whether the cursor is exactly as it was before, which must be the case
    /// when the rule did not match.
    pub fn unchanged(&self) -> bool {
        self.offset == self.before_offset && self.nodes == self.before_nodes
    }

    /// The labels and spans of the nodes after.
    pub fn spans(&self) -> Vec<(Label, std::ops::Range<usize>)> {
        self.nodes.iter().map(|n| (n.label, n.span())).collect()
    }
}


/// Match `rule` from the start of `input`, with the initially-empty `tree`,
/// and then empty the tree again.
pub fn run<'t, T, R>(tree: &'t mut T, input: &'static str, rule: &R) -> Run
    where T: Inspect,
          R: Rule<Cur<'t, T>> + ?Sized,
{
    run_after(tree, input, &AlwaysSucceed, rule)
}

/// Like [`run`], but first match `prefix`, which must match, so that `rule` is
/// matched from some later position with some nodes already present.
///
/// Also checks that no node is left open, whatever the outcome.
pub fn run_after<'t, T, P, R>(tree: &'t mut T, input: &'static str, prefix: &P, rule: &R)
                              -> Run
    where T: Inspect,
          P: Rule<Cur<'t, T>> + ?Sized,
          R: Rule<Cur<'t, T>> + ?Sized,
{
    let empty = tree.mark();
    let mut cursor = TextCursor::new(input, tree);
    assert_eq!(prefix.matches(&mut cursor), Ok(true), "prefix must match");
    let before_offset = cursor.offset();
    let before_nodes = cursor.tree().nodes();

    let outcome = rule.matches(&mut cursor).map_err(|e| match e {
        Error::Mandatory(pos) => Error::Mandatory(pos.offset),
        Error::FailedAlloc(ae) => Error::FailedAlloc(ae),
    });
    let offset = cursor.offset();
    let (_, tree) = cursor.into_parts();
    assert_eq!(tree.open_depth(), 0, "a node was left open");
    let nodes = tree.nodes();
    tree.rewind(empty);

    Run { outcome, before_offset, before_nodes, offset, nodes }
}
