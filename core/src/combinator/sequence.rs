use crate::{Cursor, Rule, Rules, Outcome};


/// Ordered choice.  Tries each rule from first to last and matches with the
/// first one that matches, without trying the rest.  Does not match if none
/// do.
///
/// Each rule that does not match leaves the cursor as it was, so every
/// alternative starts from the same position.
///
/// The rules can be given as a tuple, array, or slice, of any length: `Or((a,
/// b, c))`.
#[derive(Copy, Clone, Default, Debug)]
pub struct Or<L>(pub L);

impl<C, L> Rule<C> for Or<L>
    where C: Cursor + ?Sized,
          L: Rules<C>,
{
    #[inline]
    fn matches(&self, cursor: &mut C) -> Outcome<C> {
        self.0.match_first(cursor)
    }
}


/// Sequence.  Matches each rule in order, each starting where the previous one
/// ended.  If any does not match, the cursor is restored to where it was
/// before the first, undoing everything the earlier ones consumed.
///
/// The rules can be given as a tuple, array, or slice, of any length: `Seq((a,
/// b, c))`.
#[derive(Copy, Clone, Default, Debug)]
pub struct Seq<L>(pub L);

impl<C, L> Rule<C> for Seq<L>
    where C: Cursor + ?Sized,
          L: Rules<C>,
{
    fn matches(&self, cursor: &mut C) -> Outcome<C> {
        let start = cursor.position();
        if self.0.match_each(cursor)? {
            Ok(true)
        } else {
            cursor.set_position(start);
            Ok(false)
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Store, Is, Digit, Plus, TextCursor, Node, cursor::premade::SliceTree};
    use crate::combinator::testing::{Cur, Label::*};

    #[test]
    fn atomic() {
        let mut array: [Option<Node<_>>; 4] = [None; 4];
        let mut c: Cur<'_, '_> = TextCursor::new("12a", SliceTree::in_slice(&mut array));

        let rule = Seq((Store(A, Plus(Digit)), Is('b')));
        assert_eq!(rule.matches(&mut c), Ok(false));
        assert_eq!(c.offset(), 0);
        assert!(c.tree().is_empty());

        let rule = Seq((Store(A, Plus(Digit)), Store(B, Is('a'))));
        assert_eq!(rule.matches(&mut c), Ok(true));
        assert_eq!(c.offset(), 3);
        assert_eq!(c.tree().iter().map(|n| (n.label, n.span())).collect::<Vec<_>>(),
                   [(A, 0 .. 2), (B, 2 .. 3)]);
    }

    #[test]
    fn first_wins() {
        let mut array: [Option<Node<_>>; 4] = [None; 4];
        let mut c: Cur<'_, '_> = TextCursor::new("ab", SliceTree::in_slice(&mut array));

        let rule = Or((Store(A, Is('a')), Store(B, Is('a'))));
        assert_eq!(rule.matches(&mut c), Ok(true));
        assert_eq!(c.tree().iter().map(|n| n.label).collect::<Vec<_>>(), [A]);

        let rule = Or([Is('x'), Is('y')]);
        assert_eq!(rule.matches(&mut c), Ok(false));
        assert_eq!(c.offset(), 1);
    }
}
