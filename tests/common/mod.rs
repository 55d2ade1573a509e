// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rosezip::predicate::{focus, term_eq};
use rosezip::{Context, Tree};

/// Builds the tree used throughout the kinship tests.
///
/// Terms are numbered in level order:
///
/// ```text
/// 0
/// ├─ 1
/// │  ├─ 4 ── 13, 14
/// │  ├─ 5
/// │  └─ 6 ── 15
/// ├─ 2
/// │  ├─ 7
/// │  ├─ 8 ── 16, 17
/// │  └─ 9
/// └─ 3
///    ├─ 10 ── 18
///    ├─ 11
///    └─ 12 ── 19, 20
/// ```
pub fn family() -> Tree<u32> {
    let n = |term, children: Vec<Tree<u32>>| Tree::new(term, children);
    let l = Tree::leaf;

    n(
        0,
        vec![
            n(1, vec![n(4, vec![l(13), l(14)]), l(5), n(6, vec![l(15)])]),
            n(2, vec![l(7), n(8, vec![l(16), l(17)]), l(9)]),
            n(3, vec![n(10, vec![l(18)]), l(11), n(12, vec![l(19), l(20)])]),
        ],
    )
}

/// A cursor on the node of `tree` carrying `term`
pub fn at(tree: &Tree<u32>, term: u32) -> Context<u32> {
    tree.clone()
        .enter()
        .find(focus(term_eq(term)), Context::descend)
        .unwrap_or_else(|| panic!("{} is not in the tree", term))
}

/// The term under the cursor, if there is a cursor
pub fn term(ctx: Option<Context<u32>>) -> Option<u32> {
    ctx.map(|c| *c.term())
}

/// A random tree whose terms are numbered in pre-order
pub fn random_tree(seed: u64, max_nodes: usize) -> Tree<u32> {
    fn grow(
        rng: &mut StdRng,
        next: &mut u32,
        budget: &mut usize,
        depth: usize,
    ) -> Tree<u32> {
        let term = *next;
        *next += 1;
        *budget = budget.saturating_sub(1);

        let mut children = Vec::new();
        let fanout = if depth > 6 { 0 } else { rng.gen_range(0..5) };
        for _ in 0..fanout {
            if *budget == 0 {
                break;
            }
            children.push(grow(rng, next, budget, depth + 1));
        }
        Tree::new(term, children)
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut next = 0;
    let mut budget = max_nodes;
    grow(&mut rng, &mut next, &mut budget, 0)
}

/// Terms of `tree` in pre-order, by plain recursion
pub fn pre_order(tree: &Tree<u32>) -> Vec<u32> {
    fn inner(tree: &Tree<u32>, out: &mut Vec<u32>) {
        out.push(*tree.term());
        for child in tree.children() {
            inner(child, out);
        }
    }
    let mut out = Vec::new();
    inner(tree, &mut out);
    out
}

/// Terms of `tree` in level order, by plain recursion over the levels
pub fn level_order(tree: &Tree<u32>) -> Vec<u32> {
    let mut out = Vec::new();
    let mut level = vec![tree];
    while !level.is_empty() {
        out.extend(level.iter().map(|t| *t.term()));
        level = level.into_iter().flat_map(|t| t.children()).collect();
    }
    out
}
