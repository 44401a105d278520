//! The rules that deal with hard failures and with parse-tree nodes.

use crate::{Cursor, Rule, Outcome, Error, Seq};


/// "Failure Is Not An Option".  Matches where its rule matches, but where the
/// rule does not match this raises the hard failure [`Error::Mandatory`], with
/// the position, instead of not matching.
///
/// This marks the point after which failure is a syntax error rather than a
/// reason to try another alternative: the backtracking combinators do not catch
/// the hard failure, so it aborts the whole match unless caught by a
/// [`Recover`].
#[derive(Copy, Clone, Default, Debug)]
pub struct Finao<R>(pub R);

impl<C, R> Rule<C> for Finao<R>
    where C: Cursor + ?Sized,
          R: Rule<C>,
{
    fn matches(&self, cursor: &mut C) -> Outcome<C> {
        if self.0.matches(cursor)? {
            Ok(true)
        } else {
            let pos = cursor.position();
            log::trace!("mandatory rule failed at {:?}", pos);
            Err(Error::Mandatory(pos))
        }
    }
}


/// Records a node, with the given label, that spans what its rule matched, and
/// that is the parent of the nodes recorded while matching the rule.
///
/// The node is opened before the rule is tried.  If the rule matches, the node
/// is completed; otherwise, including when the rule raises a hard failure, the
/// node and everything recorded under it is abandoned, so the tree never holds
/// a half-open node.
#[derive(Copy, Clone, Default, Debug)]
pub struct Store<L, R>(pub L, pub R);

impl<C, L, R> Rule<C> for Store<L, R>
    where C: Cursor<Label = L> + ?Sized,
          L: Copy + core::fmt::Debug,
          R: Rule<C>,
{
    fn matches(&self, cursor: &mut C) -> Outcome<C> {
        let Self(label, rule) = self;
        cursor.open_node(*label)?;
        match rule.matches(cursor) {
            Ok(true) => {
                cursor.complete_node(*label);
                Ok(true)
            }
            Ok(false) => {
                cursor.abandon_node(*label);
                Ok(false)
            }
            Err(error) => {
                cursor.abandon_node(*label);
                cursor.unwinding(*label);
                log::debug!("while parsing {:?}", label);
                Err(error)
            }
        }
    }
}


/// Catches the [`Error::Mandatory`] hard failure of its rule: when it is
/// raised, the position is restored to where it was before the rule, and this
/// does not match.  Other outcomes pass through.
///
/// This is the only rule that catches hard failures, so it is how a grammar
/// opts in to recovering from them, e.g. to skip a malformed item and go on.
#[derive(Copy, Clone, Default, Debug)]
pub struct Recover<R>(pub R);

impl<C, R> Rule<C> for Recover<R>
    where C: Cursor + ?Sized,
          R: Rule<C>,
{
    fn matches(&self, cursor: &mut C) -> Outcome<C> {
        let start = cursor.position();
        match self.0.matches(cursor) {
            Err(Error::Mandatory(pos)) => {
                log::debug!("recovered from mandatory failure at {:?}", pos);
                cursor.set_position(start);
                Ok(false)
            }
            other => other
        }
    }
}


/// Having matched `guard`, `rule` is required: `Seq((guard, Finao(rule)))`.
#[derive(Copy, Clone, Default, Debug)]
pub struct FinaoIf<G, R>(pub G, pub R);

impl<C, G, R> Rule<C> for FinaoIf<G, R>
    where C: Cursor + ?Sized,
          G: Rule<C>,
          R: Rule<C>,
{
    #[inline]
    fn matches(&self, cursor: &mut C) -> Outcome<C> {
        let Self(guard, rule) = self;
        Seq((guard, Finao(rule))).matches(cursor)
    }
}


/// A node for a required rule: `Store(label, Finao(rule))`.
#[derive(Copy, Clone, Default, Debug)]
pub struct StoreFinao<L, R>(pub L, pub R);

impl<C, L, R> Rule<C> for StoreFinao<L, R>
    where C: Cursor<Label = L> + ?Sized,
          L: Copy + core::fmt::Debug,
          R: Rule<C>,
{
    #[inline]
    fn matches(&self, cursor: &mut C) -> Outcome<C> {
        let Self(label, rule) = self;
        Store(*label, Finao(rule)).matches(cursor)
    }
}


/// Having matched `guard`, a node for `rule` is required: `Seq((guard,
/// StoreFinao(label, rule)))`.  The guard is not part of the node.
#[derive(Copy, Clone, Default, Debug)]
pub struct StoreIf<L, G, R>(pub L, pub G, pub R);

impl<C, L, G, R> Rule<C> for StoreIf<L, G, R>
    where C: Cursor<Label = L> + ?Sized,
          L: Copy + core::fmt::Debug,
          G: Rule<C>,
          R: Rule<C>,
{
    #[inline]
    fn matches(&self, cursor: &mut C) -> Outcome<C> {
        let Self(label, guard, rule) = self;
        Seq((guard, StoreFinao(*label, rule))).matches(cursor)
    }
}
