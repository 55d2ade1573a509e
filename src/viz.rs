// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use core::fmt;

use crate::context::Context;
use crate::tree::Tree;

// `focus` is the remaining index path to the marked node, if it lies in this
// subtree.
fn treeify<T>(
    tree: &Tree<T>,
    s: &mut fmt::Formatter,
    ident: usize,
    focus: Option<&[usize]>,
) -> fmt::Result
where
    T: fmt::Display,
{
    for _ in 0..ident {
        write!(s, "  ")?;
    }
    match focus {
        Some([]) => writeln!(s, "[{}]", tree.term())?,
        _ => writeln!(s, "{}", tree.term())?,
    }
    for (i, child) in tree.children().iter().enumerate() {
        let below = focus
            .and_then(<[usize]>::split_first)
            .filter(|(head, _)| **head == i)
            .map(|(_, rest)| rest);
        treeify(child, s, ident + 1, below)?;
    }
    Ok(())
}

/// Renders the tree as an outline, one node per line, children indented by
/// two spaces.
impl<T> fmt::Display for Tree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        treeify(self, f, 0, None)
    }
}

/// Renders the whole tree the context belongs to, with the focus in
/// brackets.
impl<T> fmt::Display for Context<T>
where
    T: fmt::Display + Clone,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // positions from the root level down to the focus
        let mut positions: Vec<_> = core::iter::once(self.index())
            .chain(self.path.iter().map(|location| location.index()))
            .collect();
        positions.reverse();

        let root = self.to_root();
        for (i, tree) in root.siblings().enumerate() {
            let focus = positions
                .split_first()
                .filter(|(top, _)| **top == i)
                .map(|(_, rest)| rest);
            treeify(tree, f, 0, focus)?;
        }
        Ok(())
    }
}
