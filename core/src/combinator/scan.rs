use crate::{Cursor, Rule, Outcome, At};


/// Skips input, one unit at a time, until its rule matches, and consumes
/// everything up to and including what the rule matched.  Does not match, and
/// restores the position, if the input runs out first.  The rule is never
/// tried at the end of input after skipping, so `UntilPast(EndOfInput)` only
/// matches empty remaining input.
///
/// The scan is linear in the distance skipped.
#[derive(Copy, Clone, Default, Debug)]
pub struct UntilPast<R>(pub R);

impl<C, R> Rule<C> for UntilPast<R>
    where C: Cursor + ?Sized,
          R: Rule<C>,
{
    fn matches(&self, cursor: &mut C) -> Outcome<C> {
        let start = cursor.position();
        loop {
            if self.0.matches(cursor)? {
                return Ok(true);
            }
            cursor.advance();
            if cursor.at_end() {
                cursor.set_position(start);
                return Ok(false);
            }
        }
    }
}


/// Like [`UntilPast`], but stops just before what the rule matched, without
/// consuming it.
#[derive(Copy, Clone, Default, Debug)]
pub struct UntilAt<R>(pub R);

impl<C, R> Rule<C> for UntilAt<R>
    where C: Cursor + ?Sized,
          R: Rule<C>,
{
    #[inline]
    fn matches(&self, cursor: &mut C) -> Outcome<C> {
        UntilPast(At(&self.0)).matches(cursor)
    }
}
