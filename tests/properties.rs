//! Property-based tests of the matching contract, over generated rule trees and
//! inputs:
//!
//! 1. **Failure transparency**: a rule that does not match leaves the position
//!    and the nodes as they were.
//! 2. **Lookahead purity**: `At` and `NotAt` never change the position.
//! 3. **Sequence atomicity**: a sequence consumes what its rules consume in
//!    turn, or nothing.
//! 4. **Choice determinism**: when the first alternative matches, the choice
//!    is exactly that alternative.
//! 5. **Repetition always matches** unless a hard failure escapes.
//! 6. **Store/abandon symmetry**: after any outcome no node is left open, and
//!    a node exists only for a match.

use proptest::prelude::*;

use trellis::{
    Any, At, AlwaysFail, AlwaysSucceed, Cursor, EndOfInput, Finao, Is, Node, NotAt, Opt, Or,
    Outcome, Plus, Recover, RepeatExact, Rule, Seq, Star, Store, StrCursor, TextCursor,
    UntilAt, UntilPast, VecTree,
};

use trellis_shared_tests::Label;


/// A generated rule tree.
#[derive(Clone, Debug)]
enum Expr {
    Unit(char),
    Any,
    End,
    Succeed,
    Fail,
    Seq(Vec<Expr>),
    Or(Vec<Expr>),
    Star(Box<Expr>),
    Plus(Box<Expr>),
    Opt(Box<Expr>),
    Repeat(Box<Expr>, usize),
    At(Box<Expr>),
    NotAt(Box<Expr>),
    UntilPast(Box<Expr>),
    UntilAt(Box<Expr>),
    Store(Label, Box<Expr>),
    Finao(Box<Expr>),
    Recover(Box<Expr>),
}

impl<C> Rule<C> for Expr
    where C: Cursor<Unit = char, Label = Label> + ?Sized,
{
    fn matches(&self, cursor: &mut C) -> Outcome<C> {
        match self {
            Expr::Unit(u) => Is(*u).matches(cursor),
            Expr::Any => Any.matches(cursor),
            Expr::End => EndOfInput.matches(cursor),
            Expr::Succeed => AlwaysSucceed.matches(cursor),
            Expr::Fail => AlwaysFail.matches(cursor),
            Expr::Seq(rules) => Seq(rules.as_slice()).matches(cursor),
            Expr::Or(rules) => Or(rules.as_slice()).matches(cursor),
            Expr::Star(rule) => Star(&**rule).matches(cursor),
            Expr::Plus(rule) => Plus(&**rule).matches(cursor),
            Expr::Opt(rule) => Opt(&**rule).matches(cursor),
            Expr::Repeat(rule, n) => RepeatExact(&**rule, *n).matches(cursor),
            Expr::At(rule) => At(&**rule).matches(cursor),
            Expr::NotAt(rule) => NotAt(&**rule).matches(cursor),
            Expr::UntilPast(rule) => UntilPast(&**rule).matches(cursor),
            Expr::UntilAt(rule) => UntilAt(&**rule).matches(cursor),
            Expr::Store(label, rule) => Store(*label, &**rule).matches(cursor),
            Expr::Finao(rule) => Finao(&**rule).matches(cursor),
            Expr::Recover(rule) => Recover(&**rule).matches(cursor),
        }
    }
}

fn label() -> impl Strategy<Value = Label> {
    prop::sample::select(vec![Label::Word, Label::Number, Label::Item])
}

fn expr() -> impl Strategy<Value = Expr> {
    let leaf = prop_oneof![
        4 => prop::sample::select(vec!['a', 'b', ';']).prop_map(Expr::Unit),
        1 => Just(Expr::Any),
        1 => Just(Expr::End),
        1 => Just(Expr::Succeed),
        1 => Just(Expr::Fail),
    ];
    leaf.prop_recursive(4, 48, 4, |inner| {
        let boxed = inner.clone().prop_map(Box::new);
        prop_oneof![
            3 => prop::collection::vec(inner.clone(), 0 .. 4).prop_map(Expr::Seq),
            3 => prop::collection::vec(inner.clone(), 0 .. 4).prop_map(Expr::Or),
            1 => boxed.clone().prop_map(Expr::Star),
            1 => boxed.clone().prop_map(Expr::Plus),
            1 => boxed.clone().prop_map(Expr::Opt),
            1 => (boxed.clone(), 0 .. 3_usize).prop_map(|(r, n)| Expr::Repeat(r, n)),
            1 => boxed.clone().prop_map(Expr::At),
            1 => boxed.clone().prop_map(Expr::NotAt),
            1 => boxed.clone().prop_map(Expr::UntilPast),
            1 => boxed.clone().prop_map(Expr::UntilAt),
            2 => (label(), boxed.clone()).prop_map(|(l, r)| Expr::Store(l, r)),
            1 => boxed.clone().prop_map(Expr::Finao),
            1 => boxed.prop_map(Expr::Recover),
        ]
    })
}

/// Input, and how many of its units to consume, into a node, before the rule
/// under test.
fn input_and_skip() -> impl Strategy<Value = (String, usize)> {
    "[ab;]{0,8}".prop_flat_map(|s| {
        let len = s.chars().count();
        (Just(s), 0 ..= len)
    })
}


type Cur<'s> = StrCursor<'s, Label>;

fn cursor(input: &str, skip: usize) -> Cur<'_> {
    let mut c = TextCursor::new(input, VecTree::new());
    assert_eq!(Store(Label::Entry, RepeatExact(Any, skip)).matches(&mut c), Ok(true));
    c
}

fn nodes(c: &Cur<'_>) -> Vec<Node<Label>> {
    c.tree().arena().iter().copied().collect()
}

fn open_depth(c: &Cur<'_>) -> usize {
    c.tree().arena().open_depth()
}


fn proptest_config() -> ProptestConfig {
    let default = ProptestConfig::default();
    ProptestConfig {
        cases: default.cases.max(512),
        ..default
    }
}

proptest! {
    #![proptest_config(proptest_config())]

    #[test]
    fn failure_transparency(rule in expr(), (input, skip) in input_and_skip()) {
        let mut c = cursor(&input, skip);
        let before = (c.offset(), nodes(&c));
        let outcome = rule.matches(&mut c);
        prop_assert_eq!(open_depth(&c), 0);
        if outcome == Ok(false) {
            prop_assert_eq!((c.offset(), nodes(&c)), before);
        }
    }

    #[test]
    fn lookahead_purity(rule in expr(), (input, skip) in input_and_skip()) {
        for negate in [false, true] {
            let mut c = cursor(&input, skip);
            let before = (c.offset(), nodes(&c));
            let outcome = if negate {
                NotAt(&rule).matches(&mut c)
            } else {
                At(&rule).matches(&mut c)
            };
            if outcome.is_ok() {
                prop_assert_eq!((c.offset(), nodes(&c)), before.clone());
            }
        }
    }

    #[test]
    fn sequence_atomicity(first in expr(), second in expr(), (input, skip) in input_and_skip()) {
        let mut separately = cursor(&input, skip);
        let separate = first.matches(&mut separately)
            .and_then(|m| if m { second.matches(&mut separately) } else { Ok(false) });

        let mut c = cursor(&input, skip);
        let before = (c.offset(), nodes(&c));
        let outcome = Seq((&first, &second)).matches(&mut c);
        prop_assert_eq!(outcome.is_ok(), separate.is_ok());
        match outcome {
            Ok(true) => {
                prop_assert_eq!(separate, Ok(true));
                prop_assert_eq!((c.offset(), nodes(&c)),
                                (separately.offset(), nodes(&separately)));
            }
            Ok(false) => prop_assert_eq!((c.offset(), nodes(&c)), before),
            Err(_) => {}
        }
    }

    #[test]
    fn choice_determinism(first in expr(), second in expr(), (input, skip) in input_and_skip()) {
        let mut alone = cursor(&input, skip);
        if first.matches(&mut alone) == Ok(true) {
            let mut c = cursor(&input, skip);
            let second = Store(Label::Value, &second);
            prop_assert_eq!(Or((&first, &second)).matches(&mut c), Ok(true));
            prop_assert_eq!((c.offset(), nodes(&c)), (alone.offset(), nodes(&alone)));
            prop_assert!(nodes(&c).iter().all(|n| n.label != Label::Value));
        }
    }

    #[test]
    fn repetition_matches(rule in expr(), (input, skip) in input_and_skip()) {
        let mut c = cursor(&input, skip);
        prop_assert_ne!(Star(&rule).matches(&mut c), Ok(false));
        let mut c = cursor(&input, skip);
        prop_assert_ne!(Opt(&rule).matches(&mut c), Ok(false));
    }

    #[test]
    fn store_symmetry(rule in expr(), (input, skip) in input_and_skip()) {
        let mut c = cursor(&input, skip);
        let (offset, before) = (c.offset(), nodes(&c));
        let outcome = Store(Label::Key, &rule).matches(&mut c);
        prop_assert_eq!(open_depth(&c), 0);
        let after = nodes(&c);
        match outcome {
            Ok(true) => {
                let node = after[before.len()];
                prop_assert_eq!(node.label, Label::Key);
                prop_assert_eq!(node.span(), offset .. c.offset());
                prop_assert_eq!(node.parent, None);
                prop_assert_eq!(&after[.. before.len()], &before[..]);
            }
            Ok(false) | Err(_) => prop_assert_eq!(after, before),
        }
    }
}
