//! Rules that recognize units of input.  These are the leaves of grammars.
//!
//! Each reads the input only through [`Cursor::peek`] and
//! [`Cursor::advance`], and does not match, without consuming anything, at the
//! end of input.

use core::fmt::{self, Debug, Formatter};

use crate::{Cursor, Rule, Outcome};


/// Consume the current unit if it satisfies `pred`.
#[inline]
fn unit_if<C, P>(cursor: &mut C, pred: P) -> Outcome<C>
    where C: Cursor + ?Sized,
          P: FnOnce(C::Unit) -> bool,
{
    match cursor.peek() {
        Some(unit) if pred(unit) => {
            cursor.advance();
            Ok(true)
        }
        _ => Ok(false)
    }
}


/// Matches any single unit.
#[derive(Copy, Clone, Default, Debug)]
pub struct Any;

impl<C> Rule<C> for Any
    where C: Cursor + ?Sized,
{
    #[inline]
    fn matches(&self, cursor: &mut C) -> Outcome<C> {
        unit_if(cursor, |_| true)
    }
}


/// Matches a single unit equal to the given one.
#[derive(Copy, Clone, Default, Debug)]
pub struct Is<U>(pub U);

impl<C, U> Rule<C> for Is<U>
    where C: Cursor + ?Sized,
          C::Unit: PartialEq<U>,
{
    #[inline]
    fn matches(&self, cursor: &mut C) -> Outcome<C> {
        unit_if(cursor, |unit| unit == self.0)
    }
}


/// Matches a single unit equal to any of the given ones.
#[derive(Copy, Clone, Debug)]
pub struct OneOf<'a, U>(pub &'a [U]);

impl<C, U> Rule<C> for OneOf<'_, U>
    where C: Cursor + ?Sized,
          C::Unit: PartialEq<U>,
{
    fn matches(&self, cursor: &mut C) -> Outcome<C> {
        unit_if(cursor, |unit| self.0.iter().any(|u| unit == *u))
    }
}


/// Matches a single unit equal to none of the given ones.
#[derive(Copy, Clone, Debug)]
pub struct NoneOf<'a, U>(pub &'a [U]);

impl<C, U> Rule<C> for NoneOf<'_, U>
    where C: Cursor + ?Sized,
          C::Unit: PartialEq<U>,
{
    fn matches(&self, cursor: &mut C) -> Outcome<C> {
        unit_if(cursor, |unit| !self.0.iter().any(|u| unit == *u))
    }
}


/// Matches a single unit in the inclusive range from `.0` to `.1`.
#[derive(Copy, Clone, Default, Debug)]
pub struct Between<U>(pub U, pub U);

impl<C, U> Rule<C> for Between<U>
    where C: Cursor + ?Sized,
          C::Unit: PartialOrd<U>,
{
    #[inline]
    fn matches(&self, cursor: &mut C) -> Outcome<C> {
        let Self(lo, hi) = self;
        unit_if(cursor, |unit| unit >= *lo && unit <= *hi)
    }
}


/// Matches a single unit for which the predicate returns `true`.
#[derive(Copy, Clone)]
pub struct Satisfy<F>(pub F);

impl<C, F> Rule<C> for Satisfy<F>
    where C: Cursor + ?Sized,
          F: Fn(C::Unit) -> bool,
{
    #[inline]
    fn matches(&self, cursor: &mut C) -> Outcome<C> {
        unit_if(cursor, &self.0)
    }
}

impl<F> Debug for Satisfy<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("Satisfy(..)")
    }
}


/// Matches the given units in order.  The empty sequence always matches.
#[derive(Copy, Clone, Debug)]
pub struct Units<'a, U>(pub &'a [U]);

impl<C, U> Rule<C> for Units<'_, U>
    where C: Cursor + ?Sized,
          C::Unit: PartialEq<U>,
{
    fn matches(&self, cursor: &mut C) -> Outcome<C> {
        let start = cursor.position();
        for u in self.0 {
            if !unit_if(cursor, |unit| unit == *u)? {
                cursor.set_position(start);
                return Ok(false);
            }
        }
        Ok(true)
    }
}


/// Matches the given string, for cursors over `char`s.  The empty string always
/// matches.
#[derive(Copy, Clone, Default, Debug)]
pub struct Literal<'a>(pub &'a str);

impl<C> Rule<C> for Literal<'_>
    where C: Cursor<Unit = char> + ?Sized,
{
    fn matches(&self, cursor: &mut C) -> Outcome<C> {
        let start = cursor.position();
        for c in self.0.chars() {
            if !unit_if(cursor, |unit| unit == c)? {
                cursor.set_position(start);
                return Ok(false);
            }
        }
        Ok(true)
    }
}


macro_rules! char_class {
    ($(#[$attr:meta])* $name:ident, |$c:ident| $pred:expr) => {
        $(#[$attr])*
        #[derive(Copy, Clone, Default, Debug)]
        pub struct $name;

        impl<C> Rule<C> for $name
            where C: Cursor<Unit = char> + ?Sized,
        {
            #[inline]
            fn matches(&self, cursor: &mut C) -> Outcome<C> {
                unit_if(cursor, |$c: char| $pred)
            }
        }
    }
}

char_class!(
    /// Matches an ASCII decimal digit.
    Digit, |c| c.is_ascii_digit());
char_class!(
    /// Matches an alphabetic character.
    Letter, |c| c.is_alphabetic());
char_class!(
    /// Matches an alphabetic or numeric character.
    AlphaNum, |c| c.is_alphanumeric());
char_class!(
    /// Matches a whitespace character.
    Whitespace, |c| c.is_whitespace());


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{TextCursor, cursor::premade::NoTree};

    type C<'s> = TextCursor<&'s str, NoTree<()>>;

    fn cursor(input: &str) -> C<'_> {
        TextCursor::new(input, NoTree::default())
    }

    #[test]
    fn single_units() {
        let mut c = cursor("aZ5 é");
        assert_eq!(Is('b').matches(&mut c), Ok(false));
        assert_eq!(OneOf(&['b', 'a']).matches(&mut c), Ok(true));
        assert_eq!(NoneOf(&['Z']).matches(&mut c), Ok(false));
        assert_eq!(Between('A', 'Z').matches(&mut c), Ok(true));
        assert_eq!(Letter.matches(&mut c), Ok(false));
        assert_eq!(AlphaNum.matches(&mut c), Ok(true));
        assert_eq!(Satisfy(|ch: char| ch == ' ').matches(&mut c), Ok(true));
        assert_eq!(Digit.matches(&mut c), Ok(false));
        assert_eq!(Letter.matches(&mut c), Ok(true));
        assert!(c.at_end());
        assert_eq!(Any.matches(&mut c), Ok(false));
        assert_eq!(Whitespace.matches(&mut c), Ok(false));
    }

    #[test]
    fn literal_partial() {
        let mut c = cursor("abd");
        assert_eq!(Literal("abc").matches(&mut c), Ok(false));
        assert_eq!(c.offset(), 0);
        assert_eq!(Literal("").matches(&mut c), Ok(true));
        assert_eq!(Literal("ab").matches(&mut c), Ok(true));
        assert_eq!(c.offset(), 2);
        assert_eq!(Literal("dd").matches(&mut c), Ok(false));
        assert_eq!(c.offset(), 2);
    }

    #[test]
    fn token_units() {
        let toks = [1_u8, 2, 3, 2];
        let mut c = TextCursor::new(&toks[..], NoTree::<()>::default());
        assert_eq!(Units(&[1_u8, 3]).matches(&mut c), Ok(false));
        assert_eq!(c.offset(), 0);
        assert_eq!(Units(&[1_u8, 2]).matches(&mut c), Ok(true));
        assert_eq!(Between(3_u8, 9).matches(&mut c), Ok(true));
        assert_eq!(Is(2_u8).matches(&mut c), Ok(true));
        assert!(c.at_end());
    }
}
