use trellis_core::{
    cursor::premade::SliceTree,
    AllocError, Digit, Error, Is, Node, Or, Recover, Star, Store,
};

use trellis_shared_tests::{suites::*, run, Label};


fn with_tree<F>(capacity: usize, f: F)
    where F: FnOnce(&mut SliceTree<'_, Label>),
{
    let mut array: [Option<Node<Label>>; 256] = [None; 256];
    let mut tree = SliceTree::in_slice(&mut array[.. capacity]);
    f(&mut tree);
}

#[test]
fn scenarios() {
    with_tree(256, |t| test_scenarios(t));
}

#[test]
fn failure_transparency() {
    with_tree(256, |t| test_failure_transparency(t));
}

#[test]
fn lookahead() {
    with_tree(256, |t| test_lookahead(t));
}

#[test]
fn sequence() {
    with_tree(256, |t| test_sequence(t));
}

#[test]
fn choice() {
    with_tree(256, |t| test_choice(t));
}

#[test]
fn repetition() {
    with_tree(256, |t| test_repetition(t));
}

#[test]
fn escalation() {
    with_tree(256, |t| test_escalation(t));
}

#[test]
fn scan() {
    with_tree(256, |t| test_scan(t));
}

#[test]
fn grammar() {
    with_tree(256, |t| test_grammar(t));
}

#[test]
fn exhaustion() {
    let digits = Star(Store(Label::Number, Digit));

    with_tree(2, |t| {
        let r = run(&mut *t, "123", &digits);
        assert_eq!(r.outcome, Err(Error::FailedAlloc(AllocError::AllocExhausted)));
        assert_eq!(r.nodes.len(), 2);

        // Not a mandatory failure, so not recovered from.
        let r = run(&mut *t, "123", &Recover(digits));
        assert_eq!(r.outcome, Err(Error::FailedAlloc(AllocError::AllocExhausted)));

        let r = run(&mut *t, "12", &digits);
        assert_eq!(r.outcome, Ok(true));
        assert_eq!(r.nodes.len(), 2);
    });

    // Abandoned slots are reused.
    with_tree(1, |t| {
        let r = run(t, "1", &Or((Store(Label::Word, Is('x')), Store(Label::Number, Digit))));
        assert_eq!(r.outcome, Ok(true));
        assert_eq!(r.nodes.len(), 1);
    });

    with_tree(0, |t| {
        let r = run(t, "1", &Or((Digit, Store(Label::Number, Digit))));
        assert_eq!(r.outcome, Ok(true));
    });
}
