use crate::cursor::Input;


/// Units are `char`s and offsets are byte offsets, so a node's span can slice
/// the input `str` directly.
impl<'s> Input for &'s str {
    type Unit = char;

    #[inline]
    fn len(&self) -> usize {
        str::len(self)
    }

    #[inline]
    fn unit_at(&self, offset: usize) -> Option<(char, usize)> {
        self.get(offset ..)
            .and_then(|rest| rest.chars().next())
            .map(|c| (c, c.len_utf8()))
    }
}

/// Units are the elements, e.g. tokens produced by a separate lexer, and each
/// has width 1.
impl<'s, T> Input for &'s [T]
    where T: Copy,
{
    type Unit = T;

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn unit_at(&self, offset: usize) -> Option<(T, usize)> {
        self.get(offset).map(|&unit| (unit, 1))
    }
}


// Note: Tested by the unit tests of the cursor module.
