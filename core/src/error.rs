//! Hard failures that might be raised by matching.

/// The hard failures that might be raised by matching, as the `Err` variant of
/// an [`Outcome`](crate::Outcome).
///
/// Unlike the soft `Ok(false)` outcome, these are never caught by the
/// backtracking combinators ([`Or`](crate::Or), [`Star`](crate::Star),
/// [`Opt`](crate::Opt), [`At`](crate::At), etc.); they propagate until
/// caught by [`Recover`](crate::Recover) or until they end the whole match.
///
/// It is generic over the `Pos` type parameter so that it carries whatever
/// [`Cursor::Pos`](crate::Cursor::Pos) the matching used.  It is displayable
/// when `Pos` is, e.g. as a [`Position`](crate::Position), which displays only
/// its input offset.
#[derive(Copy, Clone, Eq, Debug, thiserror::Error)]
pub enum Error<Pos> {
    /// A mandatory rule, wrapped by [`Finao`](crate::Finao), failed to match at
    /// this position
    #[error("mandatory rule failed to match at {0}")]
    Mandatory(Pos),
    /// Node storage error
    #[error(transparent)]
    FailedAlloc(AllocError),
}

impl<Pos> Error<Pos> {
    /// The position of a failed mandatory match, if this is one.
    pub fn position(&self) -> Option<&Pos> {
        match self {
            Error::Mandatory(pos) => Some(pos),
            Error::FailedAlloc(_) => None,
        }
    }
}


/// The possible errors that might be returned by a [`NodeTree`]'s storage.
///
/// [`NodeTree`]: crate::NodeTree
#[derive(Copy, Clone, PartialEq, Eq, Debug, thiserror::Error)]
pub enum AllocError {
    /// No more free
    #[error("node storage exhausted")]
    AllocExhausted,
}

impl<Pos> From<AllocError> for Error<Pos> {
    fn from(ae: AllocError) -> Self {
        Error::FailedAlloc(ae)
    }
}


/// This allows different concrete [`Error`] types to be compared with each
/// other for equality if their position types can be.
#[allow(clippy::match_same_arms)]
impl<P1, P2> PartialEq<Error<P2>> for Error<P1>
    where P1: PartialEq<P2>,
{
    fn eq(&self, other: &Error<P2>) -> bool {
        use Error::*;

        match (self, other) {
            (Mandatory(pos1), Mandatory(pos2))
                => *pos1 == *pos2,
            (FailedAlloc(ae1), FailedAlloc(ae2))
                => *ae1 == *ae2,
            _
                => false
        }
    }
}
