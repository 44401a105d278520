//! Parsing with only the `trellis_core` crate, with the parse tree stored in an
//! array allocated on the stack.  Nothing here needs a heap, and the same code
//! works with `#![no_std]` apart from the printing.

use trellis_core::{
    cursor::premade::SliceTree,
    Cursor, Rule, Outcome, Error, TextCursor, Node,
    Seq, Or, Star, Plus, Opt, Store, StoreIf, Is, Letter, AlphaNum, Digit,
    Literal, Whitespace, Any, EndOfInput, UntilPast, from_fn,
};

type Cur<'s, 'a> = TextCursor<&'s str, SliceTree<'a, Label>>;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum Label {
    Entry,
    Key,
    Value,
}

/// Skip spaces and `#` comments that run to the end of the line.
fn ws<C: Cursor<Unit = char>>(cursor: &mut C) -> Outcome<C> {
    Star(Or((Whitespace, Seq((Is('#'), Or((UntilPast(Is('\n')), Star(Any))))))))
        .matches(cursor)
}

/// `key = 123`, where having seen the `=` a number is required.
fn entry<C: Cursor<Unit = char, Label = Label>>(cursor: &mut C) -> Outcome<C> {
    let skip = from_fn(ws::<C>);
    Store(Label::Entry, Seq((
        Store(Label::Key, Seq((Letter, Star(AlphaNum)))),
        &skip,
        StoreIf(Label::Value, Seq((Literal("="), &skip)), Seq((Opt(Is('-')), Plus(Digit)))),
        &skip,
    ))).matches(cursor)
}

fn parse(input: &str) {
    // Real programs usually need larger arrays than this one.
    let mut nodes: [Option<Node<Label>>; 16] = [None; 16];
    let mut cursor: Cur<'_, '_> = TextCursor::new(input, SliceTree::in_slice(&mut nodes));

    let file = Seq((from_fn(ws::<Cur<'_, '_>>), Star(from_fn(entry::<Cur<'_, '_>>)), EndOfInput));
    match file.matches(&mut cursor) {
        Ok(true) => {
            for node in cursor.tree().iter() {
                println!("{:?} {:?}", node.label, &input[node.span()]);
            }
        }
        Ok(false) => println!("no match at offset {}", cursor.offset()),
        Err(Error::Mandatory(pos)) => println!("syntax error at offset {}", pos.offset),
        Err(Error::FailedAlloc(e)) => println!("{e}"),
    }
}

fn main() {
    parse("width = 80 # columns\nheight=-24\n");
    parse("depth = deep");
    parse("a=1 b=2 c=3 d=4 e=5 f=6");
}
