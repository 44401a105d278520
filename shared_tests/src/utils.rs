//! A sample grammar, utilities for constructing inputs of various shapes for
//! it, and other rules that help testing.

use std::{cell::Cell, env};

use trellis_core::*;

use super::Label;


/// This allows passing a `depth=$DEPTH` command-line argument to the tests
pub fn get_arg_depth() -> usize {
    // Deep enough to exercise recursion without risking the stack of a test
    // thread.
    const DEFAULT: usize = 100;
    env::args().find_map(
        |arg|
        match arg.split_once('=') {
            Some(("depth", depth)) => depth.parse().ok(),
            _ => None
        }
    ).unwrap_or(DEFAULT)
}

/// `depth` nested lists around a number: `((((1))))`
pub fn make_nest(depth: usize) -> &'static str {
    let mut s = "(".repeat(depth);
    s.push('1');
    s.push_str(&")".repeat(depth));
    s.leak()
}

/// A flat list of `len` numbers: `(1, 2, 3)`
pub fn make_list(len: usize) -> &'static str {
    let items = (1 ..= len).map(|n| n.to_string()).collect::<Vec<_>>();
    format!("({})", items.join(", ")).leak()
}


/// Counts how many times its rule is tried.
#[derive(Copy, Clone, Debug)]
pub struct Counted<'c, R>(pub &'c Cell<usize>, pub R);

impl<C, R> Rule<C> for Counted<'_, R>
    where C: Cursor + ?Sized,
          R: Rule<C>,
{
    fn matches(&self, cursor: &mut C) -> Outcome<C> {
        let Self(count, rule) = self;
        count.set(count.get() + 1);
        rule.matches(cursor)
    }
}


macro_rules! grammar_rule {
    ($(#[$attr:meta])* $name:ident, |$cursor:ident| $body:expr) => {
        $(#[$attr])*
        #[derive(Copy, Clone, Default, Debug)]
        pub struct $name;

        impl<C> Rule<C> for $name
            where C: Cursor<Unit = char, Label = Label> + ?Sized,
        {
            fn matches(&self, $cursor: &mut C) -> Outcome<C> {
                $body
            }
        }
    }
}

grammar_rule!(
    /// An optionally negative integer: `-12`
    NumberRule, |cursor| {
        Store(Label::Number, Seq((Opt(Store(Label::Sign, Is('-'))), Plus(Digit))))
            .matches(cursor)
    });

grammar_rule!(
    /// An identifier: `a1`
    WordRule, |cursor| {
        Store(Label::Word, Seq((Letter, Star(AlphaNum)))).matches(cursor)
    });

grammar_rule!(
    /// A parenthesized, comma-separated, possibly empty list of items, each of
    /// which is a number, word, or list: `(1, a, (b, -2), ())`.  Once the
    /// opening parenthesis matched, the rest must be well-formed, as must an
    /// item after a comma.
    ListRule, |cursor| {
        let ws = Star(Whitespace);
        let item = Store(Label::Item, Or((NumberRule, WordRule, ListRule)));
        let items = Seq((item, Star(FinaoIf(Seq((ws, Is(','), ws)), item))));
        Store(Label::List, FinaoIf(Is('('), Seq((ws, Opt(Seq((items, ws))), Is(')')))))
            .matches(cursor)
    });

grammar_rule!(
    /// `key = value` entries, one per line, where a value is a number, word, or
    /// list, to the end of input.  Lines can also be blank or `#` comments.
    EntriesRule, |cursor| {
        let blank = OneOf(&[' ', '\t']);
        let comment = Seq((Is('#'), Or((UntilAt(Is('\n')), Star(Any)))));
        let value = Store(Label::Value, Or((NumberRule, WordRule, ListRule)));
        let entry = Store(Label::Entry, Seq((
            Store(Label::Key, Seq((Letter, Star(AlphaNum)))),
            Star(blank),
            FinaoIf(Is('='), Seq((Star(blank), value))),
        )));
        let line = Seq((Star(blank), Opt(Or((entry, comment))), Star(blank)));
        Seq((line, Star(Seq((Is('\n'), line))), EndOfInput)).matches(cursor)
    });


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shapes() {
        assert_eq!(make_nest(3), "(((1)))");
        assert_eq!(make_list(3), "(1, 2, 3)");
        assert_eq!(make_list(0), "()");
    }
}
