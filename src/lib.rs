//! Additional, more convenient, functionality, which leverages the Rust
//! standard library, layered on top of [`trellis_core`].
//!
//! This crate:
//!
//! * Re-exports all of [`trellis_core`], with its `alloc` feature enabled, so
//! that rules can be boxed and shared as `Box<dyn Rule<C>>`, `Rc`, and `Arc`.
//!
//! * Provides [`VecTree`], a heap-allocated node tree that never runs out of
//! room and that records the labels a syntax error unwound through, and the
//! finished [`Tree`] it gives.
//!
//! * Provides [`Forward`] rules, for recursive grammars built at run time.
//!
//! * Provides the [`parse`] and [`parse_units`] functions, which run a rule
//! over a whole input and report syntax errors with their line, column, and
//! context.
//!
//! ```
//! use trellis::{parse, ParseError, Seq, Store, StoreIf, Plus, Digit, Is, EndOfInput};
//!
//! #[derive(Copy, Clone, PartialEq, Eq, Debug)]
//! enum Label { Number, Negated }
//!
//! let number = Store(Label::Number, Plus(Digit));
//! let grammar = Seq((StoreIf(Label::Negated, Is('-'), &number), EndOfInput));
//!
//! let parsed = parse(&grammar, "-42").unwrap();
//! assert_eq!(parsed.tree.len(), 2);
//!
//! match parse(&grammar, "-x") {
//!     Err(ParseError::Syntax(e)) => assert_eq!(e.trail, [Label::Negated]),
//!     _ => unreachable!(),
//! }
//! ```
//!
//! Unlike [`trellis_core`], this crate's purpose mostly is to provide premade
//! implementations intended for ready use.  So, instead of placing such items
//! in sub-modules named `premade`, they are placed at the top of their
//! respective modules, including for the premade items re-exported from
//! `trellis_core`.
//!
//! [`trellis_core`]: ../trellis_core/index.html


// Re-export everything from the core crate. (Except items shadowed by ours,
// which are re-exported elsewhere.)
#[doc(no_inline)]
pub use trellis_core::*;

// The below modules shadow those of `trellis_core` but re-export everything
// from those in addition to providing some of their own items.

/// Cursors and node trees that use the `std` library, including heap
/// allocation.  Also re-exports the core crate's module and premades.
pub mod cursor {
    #[doc(no_inline)]
    pub use trellis_core::cursor::{*, premade::*};

    mod vec_tree;
    pub use vec_tree::VecTree;

    /// A cursor over text that builds a [`VecTree`].
    pub type StrCursor<'s, L> = TextCursor<&'s str, VecTree<L>>;

    /// A cursor over a slice of tokens, or any other units, that builds a
    /// [`VecTree`].
    pub type TokenCursor<'t, T, L> = TextCursor<&'t [T], VecTree<L>>;
}
pub use cursor::{VecTree, StrCursor, TokenCursor};

/// Rules that use the `std` library, including heap allocation.  Also
/// re-exports the core crate's module.
pub mod rule {
    #[doc(no_inline)]
    pub use trellis_core::rule::*;

    mod forward;
    pub use forward::{Forward, ForwardRef};

    /// A rule as a boxed trait object, for grammars composed at run time.
    pub type BoxRule<'r, C> = Box<dyn Rule<C> + 'r>;
}
pub use rule::{BoxRule, Forward, ForwardRef};

pub mod tree;
pub use tree::{Tree, NodeId};

pub mod parse;
pub use parse::{parse, parse_units, Parsed, ParseError, SyntaxError, Location};
