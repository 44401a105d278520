//! Repetition never backtracks into the loop: once a greedy repetition has
//! matched as many times as it can, a later failure of an enclosing sequence is
//! never retried with fewer repetitions.  This is the usual PEG semantics, and
//! grammars are written with it in mind.

use crate::{Cursor, Rule, Outcome, Error};


/// Match `rule` as many times as possible.  Stops at the end of input, when the
/// rule does not match, or when it matched without consuming anything (which
/// would otherwise repeat forever).
fn greedy<C, R>(rule: &R, cursor: &mut C) -> Result<(), Error<C::Pos>>
    where C: Cursor + ?Sized,
          R: Rule<C> + ?Sized,
{
    while !cursor.at_end() {
        let before = cursor.position();
        if !rule.matches(cursor)? || !cursor.advanced_since(before) {
            break;
        }
    }
    Ok(())
}


/// Matches its rule zero or more times, as many times as possible.  Always
/// matches.
#[derive(Copy, Clone, Default, Debug)]
pub struct Star<R>(pub R);

impl<C, R> Rule<C> for Star<R>
    where C: Cursor + ?Sized,
          R: Rule<C>,
{
    #[inline]
    fn matches(&self, cursor: &mut C) -> Outcome<C> {
        greedy(&self.0, cursor)?;
        Ok(true)
    }
}


/// Matches its rule one or more times, as many times as possible.
#[derive(Copy, Clone, Default, Debug)]
pub struct Plus<R>(pub R);

impl<C, R> Rule<C> for Plus<R>
    where C: Cursor + ?Sized,
          R: Rule<C>,
{
    fn matches(&self, cursor: &mut C) -> Outcome<C> {
        if !self.0.matches(cursor)? {
            return Ok(false);
        }
        greedy(&self.0, cursor)?;
        Ok(true)
    }
}


/// Matches its rule once if it can.  Always matches.  At the end of input the
/// rule is not even tried.
#[derive(Copy, Clone, Default, Debug)]
pub struct Opt<R>(pub R);

impl<C, R> Rule<C> for Opt<R>
    where C: Cursor + ?Sized,
          R: Rule<C>,
{
    fn matches(&self, cursor: &mut C) -> Outcome<C> {
        if !cursor.at_end() {
            let _ = self.0.matches(cursor)?;
        }
        Ok(true)
    }
}


/// Matches its rule exactly `n` times in a row.  If it runs out before then,
/// everything the earlier repetitions consumed is undone.
#[derive(Copy, Clone, Default, Debug)]
pub struct RepeatExact<R>(pub R, pub usize);

impl<C, R> Rule<C> for RepeatExact<R>
    where C: Cursor + ?Sized,
          R: Rule<C>,
{
    fn matches(&self, cursor: &mut C) -> Outcome<C> {
        let Self(rule, n) = self;
        let start = cursor.position();
        for _ in 0 .. *n {
            if !rule.matches(cursor)? {
                cursor.set_position(start);
                return Ok(false);
            }
        }
        Ok(true)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Seq, Store, Is, Digit, EndOfInput, TextCursor, Node,
                cursor::premade::SliceTree};
    use crate::combinator::testing::{Cur, Label::*};

    #[test]
    fn no_backtracking() {
        let mut array: [Option<Node<_>>; 4] = [None; 4];
        let mut c: Cur<'_, '_> = TextCursor::new("aaa", SliceTree::in_slice(&mut array));

        // A regex would give back one `a` so the final one can match.
        assert_eq!(Seq((Star(Is('a')), Is('a'))).matches(&mut c), Ok(false));
        assert_eq!(c.offset(), 0);
        assert_eq!(Seq((Plus(Is('a')), EndOfInput)).matches(&mut c), Ok(true));
        assert_eq!(c.offset(), 3);
    }

    #[test]
    fn zero_width_stops() {
        let mut array: [Option<Node<_>>; 4] = [None; 4];
        let mut c: Cur<'_, '_> = TextCursor::new("ab", SliceTree::in_slice(&mut array));

        assert_eq!(Star(Opt(Is('x'))).matches(&mut c), Ok(true));
        assert_eq!(c.offset(), 0);
        assert_eq!(Star(Store(A, Opt(Is('x')))).matches(&mut c), Ok(true));
        assert_eq!(c.tree().len(), 1);
    }

    #[test]
    fn exact_count() {
        let mut array: [Option<Node<_>>; 8] = [None; 8];
        let mut c: Cur<'_, '_> = TextCursor::new("1234", SliceTree::in_slice(&mut array));

        assert_eq!(RepeatExact(Store(A, Digit), 5).matches(&mut c), Ok(false));
        assert_eq!(c.offset(), 0);
        assert!(c.tree().is_empty());
        assert_eq!(RepeatExact(Store(B, Digit), 3).matches(&mut c), Ok(true));
        assert_eq!(c.offset(), 3);
        assert_eq!(c.tree().len(), 3);
        assert_eq!(RepeatExact(Digit, 0).matches(&mut c), Ok(true));
        assert_eq!(c.offset(), 3);
    }

    #[test]
    fn optional_at_end() {
        let mut array: [Option<Node<_>>; 2] = [None; 2];
        let mut c: Cur<'_, '_> = TextCursor::new("", SliceTree::in_slice(&mut array));

        assert_eq!(Opt(Store(A, EndOfInput)).matches(&mut c), Ok(true));
        assert!(c.tree().is_empty());
    }
}
