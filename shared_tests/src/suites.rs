//! Suites of tests applied across multiple crates


use std::cell::Cell;

use trellis_core::*;

use super::{Label::*, Inspect, run, run_after, utils::*};


/// Checks that a rule does not match, from after `prefix`, and that it leaves
/// the cursor exactly as it found it.
macro_rules! fails_cleanly {
    ($tree:expr, $input:expr, $prefix:expr, $rule:expr) => {{
        let r = run_after(&mut *$tree, $input, &$prefix, &$rule);
        assert_eq!(r.outcome, Ok(false), "{} on {:?}", stringify!($rule), $input);
        assert!(r.unchanged(), "{} on {:?} left {:?}", stringify!($rule), $input, r);
    }};
}


/// The worked examples of the basic behaviors.
pub fn test_scenarios<T: Inspect>(tree: &mut T) {
    let grammar = Seq((Store(Number, Plus(Digit)), EndOfInput));

    let r = run(tree, "123", &grammar);
    assert_eq!(r.outcome, Ok(true));
    assert_eq!(r.spans(), [(Number, 0 .. 3)]);
    assert_eq!(r.offset, 3);

    let r = run(tree, "12a", &grammar);
    assert_eq!(r.outcome, Ok(false));
    assert_eq!(r.offset, 0);
    assert!(r.nodes.is_empty());

    let r = run(tree, "#xy", &FinaoIf(Literal("#"), Plus(Digit)));
    assert_eq!(r.outcome, Err(Error::Mandatory(1)));

    let r = run(tree, "ab;cd", &UntilPast(Literal(";")));
    assert_eq!((r.outcome, r.offset), (Ok(true), 3));

    let r = run(tree, "abcd", &UntilPast(Literal(";")));
    assert_eq!((r.outcome, r.offset), (Ok(false), 0));
}


/// Every kind of rule, when it does not match, leaves the position and the
/// nodes as they were, including nodes that were already there.
pub fn test_failure_transparency<T: Inspect>(tree: &mut T) {
    let input = "a12x;";
    let prefix = Store(Word, Is('a'));

    fails_cleanly!(tree, input, prefix, Is('x'));
    fails_cleanly!(tree, input, prefix, Seq((Store(Number, Digit), Store(Number, Is('x')))));
    fails_cleanly!(tree, input, prefix, Or((Store(Item, Is('x')), Seq((Digit, Is('x'))))));
    fails_cleanly!(tree, input, prefix, Plus(Store(Sign, Is('-'))));
    fails_cleanly!(tree, input, prefix, RepeatExact(Store(Number, Digit), 3));
    fails_cleanly!(tree, input, prefix, UntilPast(Store(Key, Is('z'))));
    fails_cleanly!(tree, input, prefix, UntilAt(Is('z')));
    fails_cleanly!(tree, input, prefix, At(Store(Key, Is('x'))));
    fails_cleanly!(tree, input, prefix, NotAt(Store(Key, Digit)));
    fails_cleanly!(tree, input, prefix,
                   Store(Entry, Seq((Store(Key, Plus(Digit)), Is(';')))));
    fails_cleanly!(tree, input, prefix, Literal("12y"));
    fails_cleanly!(tree, input, prefix, Units(&['1', '2', 'y']));
    fails_cleanly!(tree, input, prefix, AlwaysFail);
    fails_cleanly!(tree, input, prefix, EndOfInput);
    fails_cleanly!(tree, input, prefix, Recover(Is('x')));
    fails_cleanly!(tree, input, prefix, Recover(Store(Value, FinaoIf(Digit, Is('y')))));
    fails_cleanly!(tree, input, prefix, ListRule);
    fails_cleanly!(tree, input, prefix, WordRule);
    fails_cleanly!(tree, input, prefix, Seq((NumberRule, Is(';'))));
}


/// Lookahead never consumes input nor leaves nodes, whether or not it matches.
pub fn test_lookahead<T: Inspect>(tree: &mut T) {
    let input = "abc";

    let r = run(tree, input, &At(Store(Word, Literal("ab"))));
    assert_eq!((r.outcome, r.offset), (Ok(true), 0));
    assert!(r.nodes.is_empty());

    let r = run(tree, input, &At(Is('x')));
    assert_eq!((r.outcome, r.offset), (Ok(false), 0));

    let r = run(tree, input, &NotAt(Store(Word, Is('x'))));
    assert_eq!((r.outcome, r.offset), (Ok(true), 0));
    assert!(r.nodes.is_empty());

    let r = run(tree, input, &NotAt(Literal("ab")));
    assert_eq!((r.outcome, r.offset), (Ok(false), 0));

    let r = run(tree, input, &At(Seq((Any, Any, Any, EndOfInput))));
    assert_eq!((r.outcome, r.offset), (Ok(true), 0));

    let r = run(tree, input, &Seq((At(Is('a')), Store(Word, Literal("abc")))));
    assert_eq!(r.outcome, Ok(true));
    assert_eq!(r.spans(), [(Word, 0 .. 3)]);

    // Hard failures are not caught.
    let r = run(tree, input, &NotAt(Store(Word, FinaoIf(Is('a'), Is('x')))));
    assert_eq!(r.outcome, Err(Error::Mandatory(1)));
    assert!(r.nodes.is_empty());
}


/// A sequence consumes all of what its rules do, or nothing.
pub fn test_sequence<T: Inspect>(tree: &mut T) {
    let input = "12ab";

    let r = run(tree, input, &Seq((Store(Number, Plus(Digit)), Store(Word, Plus(Letter)))));
    assert_eq!((r.outcome, r.offset), (Ok(true), 4));
    assert_eq!(r.spans(), [(Number, 0 .. 2), (Word, 2 .. 4)]);

    let r = run(tree, input,
                &Seq((Store(Number, Plus(Digit)), Store(Word, Plus(Letter)), Is('!'))));
    assert_eq!(r.outcome, Ok(false));
    assert!(r.unchanged());

    let r = run(tree, input, &Seq((Seq((Digit, Digit)), Seq((Letter, Digit)))));
    assert_eq!(r.outcome, Ok(false));
    assert!(r.unchanged());

    let r = run(tree, input, &Seq::<[Is<char>; 0]>([]));
    assert_eq!((r.outcome, r.offset), (Ok(true), 0));

    let r = run(tree, input, &Seq(vec![Is('1'), Is('2')]));
    assert_eq!((r.outcome, r.offset), (Ok(true), 2));

    let rules: &[&dyn Rule<_>] = &[&Digit, &Store(Number, Digit), &Letter];
    let r = run(tree, input, &Seq(rules));
    assert_eq!((r.outcome, r.offset), (Ok(true), 3));
    assert_eq!(r.spans(), [(Number, 1 .. 2)]);
}


/// Choice takes the first alternative that matches, without trying the rest.
pub fn test_choice<T: Inspect>(tree: &mut T) {
    let first = Cell::new(0);
    let second = Cell::new(0);

    let r = run(tree, "a", &Or((Counted(&first, Store(Item, Is('a'))),
                                Counted(&second, Store(Value, Is('a'))))));
    assert_eq!(r.outcome, Ok(true));
    assert_eq!(r.spans(), [(Item, 0 .. 1)]);
    assert_eq!((first.get(), second.get()), (1, 0));

    let r = run(tree, "a", &Or((Counted(&first, Store(Item, Literal("ab"))),
                                Counted(&second, Store(Value, Is('a'))))));
    assert_eq!(r.outcome, Ok(true));
    assert_eq!(r.spans(), [(Value, 0 .. 1)]);
    assert_eq!((first.get(), second.get()), (2, 1));

    let r = run(tree, "a", &Or((Store(Item, Is('b')), Store(Value, Is('c')))));
    assert_eq!(r.outcome, Ok(false));
    assert!(r.unchanged());

    let r = run(tree, "a", &Or::<[Is<char>; 0]>([]));
    assert_eq!(r.outcome, Ok(false));

    // Alternatives all start from the same position.
    let r = run(tree, "ab", &Or((Seq((Is('a'), Is('x'))), Seq((Is('a'), Is('b'))))));
    assert_eq!((r.outcome, r.offset), (Ok(true), 2));
}


/// Repetition is greedy and never gives back what it consumed.
pub fn test_repetition<T: Inspect>(tree: &mut T) {
    let input = "aaab";

    let r = run(tree, input, &Star(Store(Word, Is('a'))));
    assert_eq!((r.outcome, r.offset), (Ok(true), 3));
    assert_eq!(r.spans(), [(Word, 0 .. 1), (Word, 1 .. 2), (Word, 2 .. 3)]);

    let r = run(tree, input, &Star(Is('x')));
    assert_eq!((r.outcome, r.offset), (Ok(true), 0));

    let r = run(tree, input, &Seq((Star(Is('a')), Is('a'))));
    assert_eq!(r.outcome, Ok(false));
    assert!(r.unchanged());

    let r = run(tree, input, &Plus(Is('b')));
    assert_eq!(r.outcome, Ok(false));
    assert!(r.unchanged());

    let r = run(tree, input, &Plus(Is('a')));
    assert_eq!((r.outcome, r.offset), (Ok(true), 3));

    let r = run(tree, input, &Opt(Is('x')));
    assert_eq!((r.outcome, r.offset), (Ok(true), 0));

    let r = run(tree, input, &Opt(Is('a')));
    assert_eq!((r.outcome, r.offset), (Ok(true), 1));

    let r = run(tree, input, &RepeatExact(Store(Word, Is('a')), 3));
    assert_eq!((r.outcome, r.offset), (Ok(true), 3));
    assert_eq!(r.nodes.len(), 3);

    let r = run(tree, input, &RepeatExact(Store(Word, Is('a')), 4));
    assert_eq!(r.outcome, Ok(false));
    assert!(r.unchanged());

    // Matching without consuming ends a repetition.
    let r = run(tree, input, &Star(Opt(Is('x'))));
    assert_eq!((r.outcome, r.offset), (Ok(true), 0));
    let r = run(tree, input, &Plus(NotAt(Is('x'))));
    assert_eq!((r.outcome, r.offset), (Ok(true), 0));

    // At the end, `Opt` and `Star` do not try their rule.
    let r = run_after(tree, input, &Literal("aaab"), &Opt(Store(Word, AlwaysSucceed)));
    assert_eq!(r.outcome, Ok(true));
    assert!(r.unchanged());
    let r = run_after(tree, input, &Literal("aaab"), &Star(Store(Word, AlwaysSucceed)));
    assert_eq!(r.outcome, Ok(true));
    assert!(r.unchanged());
}


/// Hard failures propagate through everything but `Recover`, and every node
/// they propagate through is abandoned.
pub fn test_escalation<T: Inspect>(tree: &mut T) {
    let input = "(1, )";
    let list = Store(List, FinaoIf(Is('('), Seq((
        Store(Item, Digit),
        Star(FinaoIf(Literal(", "), Store(Item, Digit))),
        Is(')'),
    ))));

    let r = run(tree, input, &list);
    assert_eq!(r.outcome, Err(Error::Mandatory(4)));
    assert!(r.nodes.is_empty());

    for r in [
        run(tree, input, &Or((list, Literal(input)))),
        run(tree, input, &Star(list)),
        run(tree, input, &Opt(list)),
        run(tree, input, &At(list)),
        run(tree, input, &Seq((AlwaysSucceed, list))),
        run(tree, input, &UntilAt(list)),
        run(tree, input, &Store(Entry, list)),
    ] {
        assert_eq!(r.outcome, Err(Error::Mandatory(4)));
        assert!(r.nodes.is_empty());
    }

    let r = run(tree, input, &Recover(list));
    assert_eq!(r.outcome, Ok(false));
    assert!(r.unchanged());

    let r = run(tree, input, &Or((Recover(list), Store(Value, Literal(input)))));
    assert_eq!(r.outcome, Ok(true));
    assert_eq!(r.spans(), [(Value, 0 .. 5)]);

    // Completed inner nodes are abandoned with their parent.
    let r = run(tree, input, &Store(List, Seq((Store(Item, Is('(')), Finao(Is('x'))))));
    assert_eq!(r.outcome, Err(Error::Mandatory(1)));
    assert!(r.nodes.is_empty());

    // Nodes completed before the failing rule, outside it, are not abandoned.
    let r = run_after(tree, input, &Store(Item, Is('(')), &StoreFinao(Value, Is('x')));
    assert_eq!(r.outcome, Err(Error::Mandatory(1)));
    assert_eq!(r.spans(), [(Item, 0 .. 1)]);

    let r = run(tree, "x", &StoreFinao(Item, Digit));
    assert_eq!(r.outcome, Err(Error::Mandatory(0)));
    assert!(r.nodes.is_empty());

    let r = run(tree, input, &StoreIf(Key, Is('('), Digit));
    assert_eq!(r.outcome, Ok(true));
    assert_eq!(r.spans(), [(Key, 1 .. 2)]);

    // A guard that does not match is an ordinary failure.
    let r = run(tree, input, &FinaoIf(Is('x'), Digit));
    assert_eq!(r.outcome, Ok(false));
    let r = run(tree, input, &StoreIf(Key, Is('x'), Digit));
    assert_eq!(r.outcome, Ok(false));
    assert!(r.unchanged());

    let r = run(tree, input, &Finao(AlwaysSucceed));
    assert_eq!((r.outcome, r.offset), (Ok(true), 0));
}


/// Scanning ahead.
pub fn test_scan<T: Inspect>(tree: &mut T) {
    let input = "ab;cd";

    let r = run(tree, input, &UntilAt(Literal(";")));
    assert_eq!((r.outcome, r.offset), (Ok(true), 2));

    let r = run(tree, input, &UntilPast(Store(Sign, Is(';'))));
    assert_eq!((r.outcome, r.offset), (Ok(true), 3));
    assert_eq!(r.spans(), [(Sign, 2 .. 3)]);

    let r = run(tree, input, &UntilAt(Store(Sign, Is(';'))));
    assert_eq!((r.outcome, r.offset), (Ok(true), 2));
    assert!(r.nodes.is_empty());

    // Only the attempt that matched leaves a node.
    let r = run(tree, input, &UntilPast(Store(Word, Seq((Letter, Is(';'))))));
    assert_eq!((r.outcome, r.offset), (Ok(true), 3));
    assert_eq!(r.spans(), [(Word, 1 .. 3)]);

    let r = run(tree, input, &UntilAt(Is('a')));
    assert_eq!((r.outcome, r.offset), (Ok(true), 0));

    // Input running out ends the scan before the rule is tried at the end.
    let r = run(tree, input, &UntilPast(EndOfInput));
    assert_eq!(r.outcome, Ok(false));
    assert!(r.unchanged());
    let r = run_after(tree, input, &Literal("ab;cd"), &UntilPast(EndOfInput));
    assert_eq!((r.outcome, r.offset), (Ok(true), 5));
    let r = run(tree, input, &UntilPast(Is('d')));
    assert_eq!((r.outcome, r.offset), (Ok(true), 5));

    let r = run(tree, input, &UntilPast(Store(Key, Is('z'))));
    assert_eq!(r.outcome, Ok(false));
    assert!(r.unchanged());

    let r = run(tree, input, &UntilPast(FinaoIf(Is('b'), Is('x'))));
    assert_eq!(r.outcome, Err(Error::Mandatory(2)));
}


/// A recursive grammar of nested lists, and one of entries on lines.
pub fn test_grammar<T: Inspect>(tree: &mut T) {
    let r = run(tree, make_list(3), &ListRule);
    assert_eq!(r.outcome, Ok(true));
    assert_eq!(r.spans(), [(List, 0 .. 9),
                           (Item, 1 .. 2), (Number, 1 .. 2),
                           (Item, 4 .. 5), (Number, 4 .. 5),
                           (Item, 7 .. 8), (Number, 7 .. 8)]);

    let r = run(tree, "(a, (b, -2), ())", &ListRule);
    assert_eq!((r.outcome, r.offset), (Ok(true), 16));
    assert_eq!(r.spans(), [(List, 0 .. 16),
                           (Item, 1 .. 2), (Word, 1 .. 2),
                           (Item, 4 .. 11), (List, 4 .. 11),
                           (Item, 5 .. 6), (Word, 5 .. 6),
                           (Item, 8 .. 10), (Number, 8 .. 10), (Sign, 8 .. 9),
                           (Item, 13 .. 15), (List, 13 .. 15)]);
    assert_eq!(r.nodes[3].parent, Some(0));
    assert_eq!(r.nodes[4].parent, Some(3));
    assert_eq!(r.nodes[9].parent, Some(8));

    let r = run(tree, "(1, )", &ListRule);
    assert_eq!(r.outcome, Err(Error::Mandatory(4)));
    assert!(r.nodes.is_empty());

    let r = run(tree, "(1 2)", &ListRule);
    assert_eq!(r.outcome, Err(Error::Mandatory(1)));

    let r = run(tree, "x", &ListRule);
    assert_eq!(r.outcome, Ok(false));

    let depth = get_arg_depth();
    let r = run(tree, make_nest(depth), &ListRule);
    assert_eq!(r.outcome, Ok(true));
    assert_eq!(r.nodes.len(), 2 * depth + 1);

    let r = run(tree, "a = 1\n# note\n  b=(x, 2)  \n\n", &EntriesRule);
    assert_eq!(r.outcome, Ok(true));
    assert_eq!(r.nodes.iter().map(|n| n.label).collect::<Vec<_>>(),
               [Entry, Key, Value, Number,
                Entry, Key, Value, List, Item, Word, Item, Number]);

    // A comment can end the input.
    let r = run(tree, "a = 1\n# last", &EntriesRule);
    assert_eq!(r.outcome, Ok(true));
    let r = run(tree, "a = 1\n#", &EntriesRule);
    assert_eq!(r.outcome, Ok(true));

    let r = run(tree, "a = \n", &EntriesRule);
    assert_eq!(r.outcome, Err(Error::Mandatory(3)));

    let r = run(tree, "a 1", &EntriesRule);
    assert_eq!(r.outcome, Ok(false));
}
