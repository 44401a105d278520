use crate::{Cursor, Rule, Outcome};


/// Always matches, and consumes nothing.  The neutral element of sequencing.
#[derive(Copy, Clone, Default, Debug)]
pub struct AlwaysSucceed;

impl<C> Rule<C> for AlwaysSucceed
    where C: Cursor + ?Sized,
{
    #[inline]
    fn matches(&self, _cursor: &mut C) -> Outcome<C> {
        Ok(true)
    }
}


/// Never matches.  The neutral element of choice.
#[derive(Copy, Clone, Default, Debug)]
pub struct AlwaysFail;

impl<C> Rule<C> for AlwaysFail
    where C: Cursor + ?Sized,
{
    #[inline]
    fn matches(&self, _cursor: &mut C) -> Outcome<C> {
        Ok(false)
    }
}


/// Matches only when there is no remaining input.  Consumes nothing, so it can
/// be tested again with the same result.
#[derive(Copy, Clone, Default, Debug)]
pub struct EndOfInput;

impl<C> Rule<C> for EndOfInput
    where C: Cursor + ?Sized,
{
    #[inline]
    fn matches(&self, cursor: &mut C) -> Outcome<C> {
        Ok(cursor.at_end())
    }
}


// Note: Tested by the shared suites.
