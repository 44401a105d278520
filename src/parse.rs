//! Running a rule over a whole input and reporting the outcome.

use std::fmt::{self, Debug, Display, Formatter};

use crate::{
    cursor::{StrCursor, TokenCursor},
    tree::Tree,
    AllocError, Error, Input, Rule, TextCursor, VecTree,
};


/// A successful parse.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Parsed<L> {
    /// The completed nodes.
    pub tree: Tree<L>,
    /// How much of the input the rule consumed, in the input's offset measure
    /// (bytes for `str`).
    pub len: usize,
}


/// Why a parse failed.
#[derive(Clone, PartialEq, Eq, Debug, thiserror::Error)]
pub enum ParseError<L>
    where L: Debug,
{
    /// The rule did not match.
    #[error("input did not match")]
    NoMatch,
    /// A mandatory rule did not match.
    #[error(transparent)]
    Syntax(#[from] SyntaxError<L>),
    /// Node storage could not grow.
    #[error(transparent)]
    Alloc(#[from] AllocError),
}


/// The diagnostic of a hard failure: where the failing mandatory rule was tried
/// and which nodes were being parsed there.
#[derive(Clone, PartialEq, Eq, Debug, thiserror::Error)]
#[error("syntax error at {}{}", At(.offset, .location), Trail(.trail))]
pub struct SyntaxError<L>
    where L: Debug,
{
    /// The input offset where the mandatory rule was tried.
    pub offset: usize,
    /// The line and column of `offset`, when the input is text.
    pub location: Option<Location>,
    /// The labels of the nodes that were open, innermost first.
    pub trail: Vec<L>,
}


/// A 1-based line and column in text, counting columns in `char`s.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Location {
    /// Line number, where lines are ended by `'\n'`.
    pub line: usize,
    /// Column number.
    pub column: usize,
}

impl Location {
    /// The location of byte `offset` in `text`.  An offset past the end is
    /// taken to be the end.
    pub fn of(text: &str, offset: usize) -> Self {
        let before = text.get(.. offset).unwrap_or(text);
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        Self {
            line: before.matches('\n').count() + 1,
            column: before[line_start ..].chars().count() + 1,
        }
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}


struct At<'a>(&'a usize, &'a Option<Location>);

impl Display for At<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            At(_, Some(location)) => Display::fmt(location, f),
            At(offset, None) => write!(f, "offset {offset}"),
        }
    }
}

struct Trail<'a, L>(&'a [L]);

impl<L> Display for Trail<'_, L>
    where L: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut labels = self.0.iter();
        if let Some(first) = labels.next() {
            write!(f, " while parsing {first:?}")?;
            for label in labels {
                write!(f, " in {label:?}")?;
            }
        }
        Ok(())
    }
}


/// Match `rule` once, from the start of `input`, building a fresh tree.
///
/// The rule does not have to consume all the input; end it with
/// [`EndOfInput`](crate::EndOfInput) to require that.  Syntax errors are
/// located by line and column.
pub fn parse<'s, L, R>(rule: &R, input: &'s str) -> Result<Parsed<L>, ParseError<L>>
    where L: Copy + Eq + Debug,
          R: Rule<StrCursor<'s, L>> + ?Sized,
{
    run(rule, input, |offset| Some(Location::of(input, offset)))
}

/// Like [`parse`] but for a sequence of any units, e.g. tokens.  Syntax errors
/// are located only by offset.
pub fn parse_units<'t, T, L, R>(rule: &R, input: &'t [T])
                                -> Result<Parsed<L>, ParseError<L>>
    where T: Copy,
          L: Copy + Eq + Debug,
          R: Rule<TokenCursor<'t, T, L>> + ?Sized,
{
    run(rule, input, |_| None)
}

fn run<I, L, R, F>(rule: &R, input: I, locate: F) -> Result<Parsed<L>, ParseError<L>>
    where I: Input,
          L: Copy + Eq + Debug,
          R: Rule<TextCursor<I, VecTree<L>>> + ?Sized,
          F: FnOnce(usize) -> Option<Location>,
{
    let total = input.len();
    let mut cursor = TextCursor::new(input, VecTree::new());
    let outcome = rule.matches(&mut cursor);
    let len = cursor.offset();
    let (_, tree) = cursor.into_parts();

    match outcome {
        Ok(true) => {
            log::debug!("matched {} of {} units", len, total);
            Ok(Parsed { tree: tree.into_tree(), len })
        }
        Ok(false) => {
            log::debug!("no match");
            Err(ParseError::NoMatch)
        }
        Err(Error::Mandatory(pos)) => {
            let error = SyntaxError {
                offset: pos.offset,
                location: locate(pos.offset),
                trail: tree.into_trail(),
            };
            log::debug!("{}", error);
            Err(error.into())
        }
        Err(Error::FailedAlloc(error)) => Err(error.into()),
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location() {
        let text = "ab\ncdé\n\nf";
        assert_eq!(Location::of(text, 0), Location { line: 1, column: 1 });
        assert_eq!(Location::of(text, 2), Location { line: 1, column: 3 });
        assert_eq!(Location::of(text, 3), Location { line: 2, column: 1 });
        assert_eq!(Location::of(text, 7), Location { line: 2, column: 4 });
        assert_eq!(Location::of(text, 8), Location { line: 3, column: 1 });
        assert_eq!(Location::of(text, 99), Location { line: 4, column: 2 });
    }

    #[test]
    fn display() {
        let error = SyntaxError { offset: 4, location: None, trail: vec!['v', 'e'] };
        assert_eq!(error.to_string(), "syntax error at offset 4 while parsing 'v' in 'e'");
        let error: ParseError<char> = SyntaxError {
            offset: 4,
            location: Some(Location { line: 2, column: 1 }),
            trail: vec![],
        }.into();
        assert_eq!(error.to_string(), "syntax error at line 2, column 1");
        assert_eq!(ParseError::<char>::NoMatch.to_string(), "input did not match");
    }
}
