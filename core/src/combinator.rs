//! The closed set of composable rule primitives.
//!
//! Each is a plain value that wraps the sub-rules it is composed of, and each
//! upholds the failure contract of [`Outcome`](crate::Outcome).  A grammar is
//! an arbitrary nesting of these, together with the [terminal
//! rules](crate::terminal) that recognize units of input.

mod sentinel;
pub use sentinel::{AlwaysSucceed, AlwaysFail, EndOfInput};

mod lookahead;
pub use lookahead::{At, NotAt};

mod sequence;
pub use sequence::{Or, Seq};

mod repetition;
pub use repetition::{Star, Plus, Opt, RepeatExact};

mod scan;
pub use scan::{UntilPast, UntilAt};

mod commit;
pub use commit::{Finao, Store, Recover, FinaoIf, StoreFinao, StoreIf};


#[cfg(test)]
mod testing {
    use crate::cursor::{TextCursor, premade::SliceTree};

    /// Node labels used by the unit tests.
    #[derive(Copy, Clone, PartialEq, Eq, Debug)]
    pub(crate) enum Label { A, B }

    pub(crate) type Cur<'s, 'a> = TextCursor<&'s str, SliceTree<'a, Label>>;
}
