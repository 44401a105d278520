//! The uniform contract that every grammar rule satisfies, and the ordered
//! sequences of rules that the [`Or`](crate::Or) and [`Seq`](crate::Seq)
//! combinators are composed over.

use core::fmt::{self, Debug, Formatter};

use crate::{Cursor, Error};


/// The result of attempting to match a rule.
///
/// - `Ok(true)`: the rule recognized input at the cursor's position, and the
/// cursor has advanced by exactly what was consumed (zero for assertions).
/// Nodes completed during the attempt remain.
///
/// - `Ok(false)`: the rule did not match, and the cursor is exactly as it was
/// before the attempt, including its nodes.
///
/// - `Err(_)`: a hard failure that must not be treated as an alternative not
/// matching.  Callers propagate it, usually with `?`, unless they explicitly
/// intend to catch it.
pub type Outcome<C> = Result<bool, Error<<C as Cursor>::Pos>>;


/// A reusable matching behavior, identified by its composition.
///
/// Rules hold no mutable state, so the same rule value may be used in many
/// places of a grammar, and may be matched against many cursors, and each use
/// behaves independently.
///
/// Implementations must uphold the failure contract of [`Outcome`]: returning
/// `Ok(false)` must leave the cursor exactly as it was found.  Every rule in
/// this crate does, and so do all compositions of them.
pub trait Rule<C>
    where C: Cursor + ?Sized,
{
    /// Attempt to match at the cursor's current position.
    fn matches(&self, cursor: &mut C) -> Outcome<C>;
}

impl<C, R> Rule<C> for &R
    where C: Cursor + ?Sized,
          R: Rule<C> + ?Sized,
{
    #[inline]
    fn matches(&self, cursor: &mut C) -> Outcome<C> {
        (**self).matches(cursor)
    }
}

#[cfg(feature = "alloc")]
mod alloc_impls {
    use alloc::{boxed::Box, rc::Rc, sync::Arc, vec::Vec};

    use super::*;

    macro_rules! deref_rule {
        ($($ptr:ident),*) => {$(
            impl<C, R> Rule<C> for $ptr<R>
                where C: Cursor + ?Sized,
                      R: Rule<C> + ?Sized,
            {
                #[inline]
                fn matches(&self, cursor: &mut C) -> Outcome<C> {
                    (**self).matches(cursor)
                }
            }
        )*}
    }

    deref_rule!(Box, Rc, Arc);

    impl<C, T> Rules<C> for Box<T>
        where C: Cursor + ?Sized,
              T: Rules<C> + ?Sized,
    {
        #[inline]
        fn match_each(&self, cursor: &mut C) -> Outcome<C> {
            (**self).match_each(cursor)
        }

        #[inline]
        fn match_first(&self, cursor: &mut C) -> Outcome<C> {
            (**self).match_first(cursor)
        }
    }

    impl<C, R> Rules<C> for Vec<R>
        where C: Cursor + ?Sized,
              R: Rule<C>,
    {
        #[inline]
        fn match_each(&self, cursor: &mut C) -> Outcome<C> {
            self.as_slice().match_each(cursor)
        }

        #[inline]
        fn match_first(&self, cursor: &mut C) -> Outcome<C> {
            self.as_slice().match_first(cursor)
        }
    }
}


/// A [`Rule`] made from a function or closure, so that grammars can be written
/// as `fn` items, which is how recursive grammars are expressed:
///
/// ```
/// use trellis_core::{Cursor, Outcome, Rule, Seq, Opt, Is, from_fn};
///
/// /// Balanced parentheses, e.g. `(()())`.
/// fn parens<C: Cursor<Unit = char>>(cursor: &mut C) -> Outcome<C> {
///     Seq((Is('('), Opt(from_fn(parens::<C>)), Is(')'), Opt(from_fn(parens::<C>))))
///         .matches(cursor)
/// }
/// ```
#[derive(Copy, Clone)]
pub struct FromFn<F>(pub F);

/// Make a [`FromFn`] rule.
#[inline]
pub fn from_fn<C, F>(f: F) -> FromFn<F>
    where C: Cursor + ?Sized,
          F: Fn(&mut C) -> Outcome<C>,
{
    FromFn(f)
}

impl<C, F> Rule<C> for FromFn<F>
    where C: Cursor + ?Sized,
          F: Fn(&mut C) -> Outcome<C>,
{
    #[inline]
    fn matches(&self, cursor: &mut C) -> Outcome<C> {
        (self.0)(cursor)
    }
}

impl<F> Debug for FromFn<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("FromFn(..)")
    }
}


/// An ordered sequence of rules, of any length.
///
/// This is implemented for tuples (of up to 16 rules, of possibly different
/// types), arrays, and slices, of rules; and for references to, and, with the
/// `alloc` feature, `Vec`s and `Box`es of, those.
pub trait Rules<C>
    where C: Cursor + ?Sized,
{
    /// Match each rule in order, stopping at the first that does not match.
    /// Returns whether all matched.  Does not restore the cursor after some
    /// matched and a later one did not; that is the caller's responsibility.
    fn match_each(&self, cursor: &mut C) -> Outcome<C>;

    /// Match each rule in order until one matches.  Returns whether one did.
    fn match_first(&self, cursor: &mut C) -> Outcome<C>;
}

impl<C, T> Rules<C> for &T
    where C: Cursor + ?Sized,
          T: Rules<C> + ?Sized,
{
    #[inline]
    fn match_each(&self, cursor: &mut C) -> Outcome<C> {
        (**self).match_each(cursor)
    }

    #[inline]
    fn match_first(&self, cursor: &mut C) -> Outcome<C> {
        (**self).match_first(cursor)
    }
}

impl<C, R> Rules<C> for [R]
    where C: Cursor + ?Sized,
          R: Rule<C>,
{
    fn match_each(&self, cursor: &mut C) -> Outcome<C> {
        for rule in self {
            if !rule.matches(cursor)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn match_first(&self, cursor: &mut C) -> Outcome<C> {
        for rule in self {
            if rule.matches(cursor)? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

impl<C, R, const N: usize> Rules<C> for [R; N]
    where C: Cursor + ?Sized,
          R: Rule<C>,
{
    #[inline]
    fn match_each(&self, cursor: &mut C) -> Outcome<C> {
        self.as_slice().match_each(cursor)
    }

    #[inline]
    fn match_first(&self, cursor: &mut C) -> Outcome<C> {
        self.as_slice().match_first(cursor)
    }
}

macro_rules! tuple_rules {
    ($($name:ident)+) => {
        #[allow(non_snake_case)]
        impl<C, $($name),+> Rules<C> for ($($name,)+)
            where C: Cursor + ?Sized,
                  $($name: Rule<C>),+
        {
            fn match_each(&self, cursor: &mut C) -> Outcome<C> {
                let ($($name,)+) = self;
                $(if !$name.matches(cursor)? {
                    return Ok(false);
                })+
                Ok(true)
            }

            fn match_first(&self, cursor: &mut C) -> Outcome<C> {
                let ($($name,)+) = self;
                $(if $name.matches(cursor)? {
                    return Ok(true);
                })+
                Ok(false)
            }
        }
    }
}

tuple_rules!(A);
tuple_rules!(A B);
tuple_rules!(A B D);
tuple_rules!(A B D E);
tuple_rules!(A B D E F);
tuple_rules!(A B D E F G);
tuple_rules!(A B D E F G H);
tuple_rules!(A B D E F G H I);
tuple_rules!(A B D E F G H I J);
tuple_rules!(A B D E F G H I J K);
tuple_rules!(A B D E F G H I J K L);
tuple_rules!(A B D E F G H I J K L M);
tuple_rules!(A B D E F G H I J K L M N);
tuple_rules!(A B D E F G H I J K L M N O);
tuple_rules!(A B D E F G H I J K L M N O P);
tuple_rules!(A B D E F G H I J K L M N O P Q);


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        cursor::{TextCursor, premade::NoTree},
        AlwaysFail, AlwaysSucceed, Is,
    };

    type C<'s> = TextCursor<&'s str, NoTree<()>>;

    fn cursor(input: &str) -> C<'_> {
        TextCursor::new(input, NoTree::default())
    }

    #[test]
    fn slices() {
        let mut c = cursor("ab");
        let empty: [Is<char>; 0] = [];
        assert_eq!(Rules::<C<'_>>::match_each(&empty[..], &mut c), Ok(true));
        assert_eq!(Rules::<C<'_>>::match_first(&empty[..], &mut c), Ok(false));
        assert_eq!([Is('a'), Is('b')].match_each(&mut c), Ok(true));
        assert_eq!(c.offset(), 2);
    }

    #[test]
    fn tuples_short_circuit() {
        let mut c = cursor("ab");
        assert_eq!((AlwaysFail, Is('a')).match_first(&mut c), Ok(true));
        assert_eq!(c.offset(), 1);
        assert_eq!((Is('b'), Is('a')).match_first(&mut c), Ok(true));
        assert_eq!(c.offset(), 2);
        assert_eq!((AlwaysSucceed, AlwaysFail, Is('x')).match_each(&mut c), Ok(false));
    }

    #[test]
    fn functions() {
        fn a<Cu: Cursor<Unit = char>>(cursor: &mut Cu) -> Outcome<Cu> {
            Is('a').matches(cursor)
        }

        let mut c = cursor("aa");
        assert_eq!(from_fn(a::<C<'static>>).matches(&mut c), Ok(true));
        assert_eq!(from_fn(|c: &mut C<'static>| a(c)).matches(&mut c), Ok(true));
        assert_eq!(from_fn(a::<C<'static>>).matches(&mut c), Ok(false));
    }
}
