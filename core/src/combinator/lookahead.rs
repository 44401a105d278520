use crate::{Cursor, Rule, Outcome};


/// Matches where its rule matches, but never consumes input: the position is
/// restored even when the rule matched, which also discards any nodes the rule
/// completed.
#[derive(Copy, Clone, Default, Debug)]
pub struct At<R>(pub R);

impl<C, R> Rule<C> for At<R>
    where C: Cursor + ?Sized,
          R: Rule<C>,
{
    fn matches(&self, cursor: &mut C) -> Outcome<C> {
        let start = cursor.position();
        let matched = self.0.matches(cursor)?;
        cursor.set_position(start);
        Ok(matched)
    }
}


/// Matches where its rule does not match, and never consumes input.
#[derive(Copy, Clone, Default, Debug)]
pub struct NotAt<R>(pub R);

impl<C, R> Rule<C> for NotAt<R>
    where C: Cursor + ?Sized,
          R: Rule<C>,
{
    fn matches(&self, cursor: &mut C) -> Outcome<C> {
        let start = cursor.position();
        let matched = self.0.matches(cursor)?;
        cursor.set_position(start);
        Ok(!matched)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Store, Literal, TextCursor, Node, cursor::premade::SliceTree};
    use crate::combinator::testing::{Cur, Label::*};

    #[test]
    fn never_consumes() {
        let mut array: [Option<Node<_>>; 4] = [None; 4];
        let mut c: Cur<'_, '_> = TextCursor::new("abc", SliceTree::in_slice(&mut array));

        assert_eq!(At(Literal("ab")).matches(&mut c), Ok(true));
        assert_eq!(c.offset(), 0);
        assert_eq!(At(Literal("b")).matches(&mut c), Ok(false));
        assert_eq!(NotAt(Literal("ab")).matches(&mut c), Ok(false));
        assert_eq!(c.offset(), 0);
        assert_eq!(NotAt(Literal("b")).matches(&mut c), Ok(true));
        assert_eq!(c.offset(), 0);

        assert_eq!(At(Store(A, Literal("a"))).matches(&mut c), Ok(true));
        assert_eq!(c.tree().len(), 0);
        assert!(!c.at_end());
    }
}
