// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use crate::tree::Tree;

/// Indices `0..len`, either ascending or descending.
pub(crate) fn ordered(
    len: usize,
    ascending: bool,
) -> impl Iterator<Item = usize> {
    (0..len).map(move |i| if ascending { i } else { len - 1 - i })
}

/// Child indices leading from `tree` to the first node exactly `depth`
/// levels below it that matches `predicate`.
///
/// Children are visited left to right when `ascending`, right to left
/// otherwise. A depth of zero tests `tree` itself.
pub(crate) fn descendant_path<T, P>(
    tree: &Tree<T>,
    depth: usize,
    ascending: bool,
    predicate: &P,
) -> Option<Vec<usize>>
where
    P: Fn(&Tree<T>) -> bool,
{
    fn inner<T, P>(
        tree: &Tree<T>,
        depth: usize,
        ascending: bool,
        predicate: &P,
        path: &mut Vec<usize>,
    ) -> bool
    where
        P: Fn(&Tree<T>) -> bool,
    {
        if depth == 0 {
            return predicate(tree);
        }
        let children = tree.children();
        for i in ordered(children.len(), ascending) {
            path.push(i);
            if inner(&children[i], depth - 1, ascending, predicate, path) {
                return true;
            }
            path.pop();
        }
        false
    }

    let mut path = Vec::with_capacity(depth);
    if inner(tree, depth, ascending, predicate, &mut path) {
        Some(path)
    } else {
        None
    }
}

/// Child indices from `tree` down the chain of first (`leftmost`) or last
/// children until a leaf is reached.
pub(crate) fn extreme_path<T>(tree: &Tree<T>, leftmost: bool) -> Vec<usize> {
    let mut path = Vec::new();
    let mut node = tree;
    while let Some(last) = node.children().len().checked_sub(1) {
        let i = if leftmost { 0 } else { last };
        path.push(i);
        node = &node.children()[i];
    }
    path
}
