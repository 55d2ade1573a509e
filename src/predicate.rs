// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Ready-made predicates for filtering candidates during lookups.
//!
//! Kinship lookups take predicates over `Tree`s, the movement combinators
//! take predicates over `Context`s. `always` fits both.

use crate::context::Context;
use crate::tree::Tree;

/// Accepts anything
pub fn always<X: ?Sized>(_: &X) -> bool {
    true
}

/// Accepts nothing
pub fn never<X: ?Sized>(_: &X) -> bool {
    false
}

/// Accepts trees whose term equals `term`
pub fn term_eq<T>(term: T) -> impl Fn(&Tree<T>) -> bool
where
    T: PartialEq,
{
    move |tree| *tree.term() == term
}

/// Accepts trees whose term satisfies `f`
pub fn term_is<T, F>(f: F) -> impl Fn(&Tree<T>) -> bool
where
    F: Fn(&T) -> bool,
{
    move |tree| f(tree.term())
}

/// Accepts trees without children
pub fn is_leaf<T>(tree: &Tree<T>) -> bool {
    tree.is_leaf()
}

/// Accepts trees with children
pub fn is_parent<T>(tree: &Tree<T>) -> bool {
    tree.is_parent()
}

/// Negates a predicate
pub fn not<X, P>(predicate: P) -> impl Fn(&X) -> bool
where
    X: ?Sized,
    P: Fn(&X) -> bool,
{
    move |x| !predicate(x)
}

/// Lifts a predicate over trees to one over contexts, testing the focus
pub fn focus<T, P>(predicate: P) -> impl Fn(&Context<T>) -> bool
where
    P: Fn(&Tree<T>) -> bool,
{
    move |ctx| predicate(ctx.focus())
}
