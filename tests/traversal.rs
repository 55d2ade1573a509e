// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

mod common;

use common::{at, family, level_order, pre_order, random_tree, term};
use rosezip::predicate::{always, focus, term_eq};
use rosezip::{Context, Tree};
use rstest::rstest;

fn terms<I>(walk: I) -> Vec<u32>
where
    I: Iterator<Item = Context<u32>>,
{
    walk.map(|c| *c.term()).collect()
}

#[test]
fn family_orders() {
    let tree = family();

    assert_eq!(
        terms(tree.pre_order()),
        [0, 1, 4, 13, 14, 5, 6, 15, 2, 7, 8, 16, 17, 9, 3, 10, 18, 11, 12, 19, 20]
    );
    assert_eq!(terms(tree.level_order()), (0..=20).collect::<Vec<_>>());
}

#[rstest]
#[case(5, Context::descend, Some(6))]
#[case(5, Context::ascend, Some(14))]
#[case(6, Context::ascend, Some(5))]
#[case(2, Context::ascend, Some(15))]
#[case(15, Context::descend, Some(2))]
#[case(20, Context::descend, None)]
#[case(0, Context::ascend, None)]
#[case(15, Context::forward, Some(16))]
#[case(12, Context::forward, Some(13))]
#[case(3, Context::forward, Some(4))]
#[case(16, Context::backward, Some(15))]
#[case(13, Context::backward, Some(12))]
#[case(4, Context::backward, Some(3))]
#[case(20, Context::forward, None)]
#[case(0, Context::backward, None)]
fn single_steps(
    #[case] from: u32,
    #[case] step: fn(&Context<u32>) -> Option<Context<u32>>,
    #[case] expected: Option<u32>,
) {
    let tree = family();
    assert_eq!(term(step(&at(&tree, from))), expected);
}

#[rstest]
fn pre_order_matches_recursion(#[values(1, 2, 3, 5, 8, 13, 21)] seed: u64) {
    let tree = random_tree(seed, 60);
    assert_eq!(terms(tree.pre_order()), pre_order(&tree));
}

#[rstest]
fn level_order_matches_recursion(#[values(1, 2, 3, 5, 8, 13, 21)] seed: u64) {
    let tree = random_tree(seed, 60);
    assert_eq!(terms(tree.level_order()), level_order(&tree));
}

#[rstest]
fn descend_reaches_every_node(#[values(4, 7, 11, 42)] seed: u64) {
    let tree = random_tree(seed, 80);
    let root = tree.clone().enter();
    let count = tree.count();

    // the root is already visited, every other node is one step away
    let last = root.descend_for(count - 1);
    if count > 1 {
        assert!(last.is_some());
    }
    assert!(root.descend_for(count).is_none());
    assert_eq!(
        Some(*root.descend_to_last().term()),
        pre_order(&tree).last().copied()
    );
}

#[rstest]
fn ascend_inverts_descend(#[values(4, 7, 11, 42)] seed: u64) {
    let tree = random_tree(seed, 80);

    let down: Vec<_> = tree.pre_order().collect();
    let last = down.last().unwrap().clone();
    let mut up: Vec<_> = last.walk(Context::ascend).collect();
    up.reverse();

    assert_eq!(up, down);
    assert!(last.ascend_to_root().is_root());
}

#[rstest]
fn backward_inverts_forward(#[values(4, 7, 11, 42)] seed: u64) {
    let tree = random_tree(seed, 80);

    let across: Vec<_> = tree.level_order().collect();
    let last = tree.clone().enter().forward_to_last();
    let mut back: Vec<_> = last.walk(Context::backward).collect();
    back.reverse();

    assert_eq!(back, across);
    assert_eq!(last.backward_to_root(), tree.clone().enter());
}

#[test]
fn counted_and_conditional_walks() {
    let tree = family();
    let root = tree.clone().enter();

    assert_eq!(term(root.descend_for(5)), Some(5));
    assert_eq!(term(root.forward_for(5)), Some(5));
    assert!(root.descend_for(0).is_none());
    assert!(root.forward_for(21).is_none());

    let eight = at(&tree, 8);
    assert_eq!(term(eight.ascend_for(3)), Some(15));
    assert_eq!(term(eight.backward_for(8)), Some(0));

    assert_eq!(term(root.descend_until(focus(term_eq(17)))), Some(17));
    assert_eq!(term(root.forward_until(|c| c.depth() == 3)), Some(13));
    assert_eq!(term(eight.ascend_until(|c| c.is_root())), Some(0));
    assert_eq!(term(eight.backward_until(|c| c.depth() == 1)), Some(3));
    assert!(eight.ascend_until(focus(term_eq(20))).is_none());
}

#[test]
fn every_context_round_trips_through_its_children() {
    let tree = random_tree(99, 100);

    for ctx in tree.pre_order() {
        for i in 0..ctx.focus().children().len() {
            let child = ctx.child_at(i).unwrap();
            assert_eq!(child.index(), i);
            assert_eq!(child.depth(), ctx.depth() + 1);
            assert_eq!(child.parent().unwrap(), ctx);
        }
        assert!(ctx.child_at(ctx.focus().children().len()).is_none());
        assert!(ctx.sibling_at(ctx.index()).is_none());
        assert_eq!(ctx.to_root().focus(), &tree);
        assert_eq!(ctx.exit(), tree);
    }
}

#[test]
fn to_root_is_idempotent_everywhere() {
    let tree = family();

    for ctx in tree.level_order() {
        let root = ctx.to_root();
        assert!(root.is_root());
        assert_eq!(root.to_root(), root);
        assert_eq!(root, tree.clone().enter());
    }
}

#[test]
fn unfolded_countdown() {
    let tree = Tree::unfold(3u32, |n| (n, (0..n).collect()));

    assert_eq!(tree.count(), 8);
    assert_eq!(tree.height(), 4);
    assert_eq!(terms(tree.pre_order()), [3, 0, 1, 0, 2, 0, 1, 0]);
    assert_eq!(terms(tree.level_order()), [3, 0, 1, 2, 0, 0, 1, 0]);

    let leaves = tree.pre_order().filter(|c| c.is_leaf()).count();
    assert_eq!(leaves, 4);
    assert!(tree
        .pre_order()
        .filter(|c| c.is_leaf())
        .all(|c| *c.term() == 0));
}

#[test]
fn edits_leave_the_original_untouched() {
    let original = family();

    let mut ctx = at(&original, 8);
    ctx.map_term(|t| t * 100);
    ctx.map_focus(|tree| {
        let mut tree = tree.clone();
        tree.push_child(Tree::leaf(21));
        tree
    });
    let edited = ctx.exit();

    assert_eq!(edited.count(), original.count() + 1);
    assert_eq!(term(at(&edited, 800).last_child(always)), Some(21));

    assert_eq!(*at(&original, 8).term(), 8);
    assert_eq!(original, family());
}

#[test]
fn contexts_share_unchanged_subtrees() {
    let tree = family();
    let eight = &tree.children()[1].children()[1];
    let ctx = at(&tree, 17);

    assert!(ctx.focus().ptr_eq(&eight.children()[1]));
    assert!(ctx.prev().next().unwrap().ptr_eq(&eight.children()[0]));

    let moved = ctx.previous_sibling(always).unwrap();
    assert!(moved.focus().ptr_eq(&eight.children()[0]));
    assert!(moved.next().next().unwrap().ptr_eq(&eight.children()[1]));
}

#[test]
fn deep_chains_walk_in_linear_time() {
    let depth = 10_000u32;
    let chain = (1..depth).fold(Tree::leaf(0), |tree, d| Tree::new(d, [tree]));

    assert_eq!(chain.pre_order().count(), depth as usize);

    let bottom = chain.clone().enter().descend_to_last();
    assert_eq!(bottom.depth(), depth as usize - 1);
    assert_eq!(*bottom.term(), 0);

    let top = bottom.ascend_to_root();
    assert_eq!(*top.term(), depth - 1);
    assert_eq!(bottom.exit(), chain);
}
