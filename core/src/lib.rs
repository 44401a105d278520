//! The core of an engine for Parsing Expression Grammars (PEG) built from
//! composable rule primitives.  A grammar is an arbitrarily nested expression
//! of combinators (sequencing, ordered choice, repetition, lookahead, and
//! error-escalation) which all match against a shared mutable [`Cursor`] and
//! which incrementally build a labeled parse tree.  Matching a grammar is
//! invoking the outermost rule's [`matches`](Rule::matches) once.
//!
//! Every rule satisfies one uniform contract: attempt to match at the cursor's
//! current position and return whether it did; and on failure leave the cursor
//! exactly as it was found, including any parse-tree nodes opened during the
//! attempt.  Failure is always transparent, which is what makes backtracking
//! through ordered choice correct without any memoization.
//!
//! There are two tiers of failure.  The ordinary `Ok(false)` outcome is soft
//! and may be recovered from by any enclosing choice or repetition.  The
//! `Err` outcome, raised by [`Finao`] ("failure is not an option") when a
//! mandatory sub-rule fails, is hard: it propagates through every combinator
//! that does not explicitly opt in to catching it, which differentiates "try
//! the next alternative" from "this is the syntax error".  [`Store`] abandons
//! its node on the way up, so the parse tree never holds a half-open node.
//!
//! Rules hold no mutable state.  They are composed by value, generically, so
//! that the composition of a grammar is resolved statically, but they can also
//! be used as `dyn Rule` trait objects.  The same grammar value can be matched
//! by independent cursors on independent threads.
//!
//! The engine is a direct-recursion, unmemoized, backtracking interpreter.
//! There is no left-recursion support, and recursion depth is bounded only by
//! the call stack.
//!
//! This core crate is `no_std` and so can be used in constrained environments
//! without heap allocation.  The parse tree is stored by whatever implements
//! [`NodeTree`], and [`SliceTree`] stores it in a caller-provided slice which
//! can be a stack array.  Enabling the `alloc` feature adds implementations of
//! [`Rule`] and [`Rules`] for the standard heap types.
//!
//! [`SliceTree`]: cursor::premade::SliceTree

#![cfg_attr(not(test), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;


pub mod cursor;
pub use cursor::{Cursor, Input, NodeTree, TextCursor, Position, Node};

pub mod error;
pub use error::{Error, AllocError};

pub mod rule;
pub use rule::{Rule, Rules, Outcome, FromFn, from_fn};

pub mod combinator;
pub use combinator::*;

pub mod terminal;
pub use terminal::*;
