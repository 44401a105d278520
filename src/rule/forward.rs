use std::{
    cell::OnceCell,
    fmt::{self, Debug, Formatter},
    rc::{Rc, Weak},
};

use crate::{Cursor, Rule, Outcome, rule::BoxRule};


type Slot<'r, C> = OnceCell<BoxRule<'r, C>>;


/// A rule that is defined after it is first used, for building recursive
/// grammars out of [`BoxRule`]s at run time.  (Grammars written in source can
/// instead recurse through `fn` items with [`from_fn`](crate::from_fn).)
///
/// The `Forward` owns the definition.  Uses of it inside the grammar, including
/// inside its own definition, are the [`ForwardRef`]s returned by
/// [`handle`](Self::handle), which do not keep the definition alive, so that a
/// recursive definition does not leak.
///
/// Matching before a definition is given does not match.
pub struct Forward<'r, C>
    where C: Cursor + ?Sized,
{
    slot: Rc<Slot<'r, C>>,
}

impl<'r, C> Forward<'r, C>
    where C: Cursor + ?Sized,
{
    /// Make an undefined rule.
    pub fn new() -> Self {
        Self { slot: Rc::new(OnceCell::new()) }
    }

    /// Give the definition.  It can only be given once; if it already was, the
    /// new one is given back.
    pub fn define<R>(&self, rule: R) -> Result<(), BoxRule<'r, C>>
        where R: Rule<C> + 'r,
    {
        self.slot.set(Box::new(rule))
    }

    /// Whether the definition has been given.
    pub fn is_defined(&self) -> bool {
        self.slot.get().is_some()
    }

    /// A reference to this rule, for use in grammars.
    pub fn handle(&self) -> ForwardRef<'r, C> {
        ForwardRef { slot: Rc::downgrade(&self.slot) }
    }
}

/// Must implement this manually because deriving would place unwanted bounds on
/// the type parameter.
impl<C> Default for Forward<'_, C>
    where C: Cursor + ?Sized,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Debug for Forward<'_, C>
    where C: Cursor + ?Sized,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Forward").field("defined", &self.is_defined()).finish()
    }
}

impl<C> Rule<C> for Forward<'_, C>
    where C: Cursor + ?Sized,
{
    #[inline]
    fn matches(&self, cursor: &mut C) -> Outcome<C> {
        match_slot(&self.slot, cursor)
    }
}


/// A non-owning reference to a [`Forward`] rule.  Matching it after the
/// `Forward` was dropped does not match.
pub struct ForwardRef<'r, C>
    where C: Cursor + ?Sized,
{
    slot: Weak<Slot<'r, C>>,
}

/// Must implement this manually because deriving would place unwanted bounds on
/// the type parameter.
impl<C> Clone for ForwardRef<'_, C>
    where C: Cursor + ?Sized,
{
    #[inline]
    fn clone(&self) -> Self {
        Self { slot: Weak::clone(&self.slot) }
    }
}

impl<C> Debug for ForwardRef<'_, C>
    where C: Cursor + ?Sized,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("ForwardRef(..)")
    }
}

impl<C> Rule<C> for ForwardRef<'_, C>
    where C: Cursor + ?Sized,
{
    fn matches(&self, cursor: &mut C) -> Outcome<C> {
        match self.slot.upgrade() {
            Some(slot) => match_slot(&slot, cursor),
            None => {
                log::warn!("forward rule matched after being dropped");
                Ok(false)
            }
        }
    }
}


fn match_slot<C>(slot: &Slot<'_, C>, cursor: &mut C) -> Outcome<C>
    where C: Cursor + ?Sized,
{
    match slot.get() {
        Some(rule) => rule.matches(cursor),
        None => {
            log::warn!("forward rule matched before being defined");
            Ok(false)
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{cursor::StrCursor, VecTree, TextCursor, Seq, Or, Is, Digit, Store, EndOfInput};

    type C<'s> = StrCursor<'s, char>;

    #[test]
    fn recursive() {
        let nested: Forward<'_, C<'static>> = Forward::new();
        assert_eq!(nested.matches(&mut TextCursor::new("1", VecTree::new())), Ok(false));

        let inner = nested.handle();
        assert!(nested.define(Or((
            Store('n', Seq((Is('('), inner, Is(')')))),
            Digit,
        ))).is_ok());
        assert!(nested.define(Digit).is_err());

        let mut c = TextCursor::new("((7))", VecTree::new());
        assert_eq!(Seq((&nested, EndOfInput)).matches(&mut c), Ok(true));
        let (_, tree) = c.into_parts();
        let tree = tree.into_tree();
        assert_eq!(tree.iter().map(|n| n.span()).collect::<Vec<_>>(), [0 .. 5, 1 .. 4]);

        let dangling = nested.handle();
        drop(nested);
        assert_eq!(dangling.matches(&mut TextCursor::new("7", VecTree::new())), Ok(false));
    }
}
