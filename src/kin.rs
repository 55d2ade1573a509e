// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Relative lookups around the focus of a `Context`.
//!
//! Every relation is one member of a family parametrized by how many
//! generations up the sibling group lives (`generation`) and how many levels
//! below those siblings the relative sits (`depth`):
//!
//! | relation       | generation | depth |
//! |----------------|------------|-------|
//! | sibling        | 0          | 0     |
//! | nibling        | 0          | 1     |
//! | grandnibling   | 0          | 2     |
//! | pibling        | 1          | 0     |
//! | first cousin   | 1          | 1     |
//! | grandpibling   | 2          | 0     |
//! | second cousin  | 2          | 2     |
//!
//! The ancestral relations (ancestral piblings, extended cousins, extended
//! niblings and extended piblings) range over every generation up to the
//! root.
//!
//! Each relation comes in the four `Scan` flavours. A lookup never leaves
//! the sibling group that defines its relation: if no candidate matches the
//! predicate, the result is `None`.

use core::iter;

use crate::context::Context;
use crate::search;
use crate::tree::Tree;

/// Which candidates a lookup considers, and in which order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Scan {
    /// Candidates before the focus, starting from the far end
    First,
    /// Candidates before the focus, starting next to it
    Previous,
    /// Candidates after the focus, starting next to it
    Next,
    /// Candidates after the focus, starting from the far end
    Last,
}

impl Scan {
    /// Are candidates visited left to right?
    ///
    /// This also decides the order of the descendants below each candidate.
    pub fn rightward(self) -> bool {
        matches!(self, Scan::First | Scan::Next)
    }

    /// Sibling indices to visit, for a focus at `position` among `width`
    /// nodes.
    pub(crate) fn indices(
        self,
        position: usize,
        width: usize,
    ) -> impl Iterator<Item = usize> {
        let (start, end) = match self {
            Scan::First | Scan::Previous => (0, position),
            Scan::Next | Scan::Last => (position + 1, width),
        };
        search::ordered(end - start, self.rightward()).map(move |i| start + i)
    }

    // Generation order used by the ancestral relations
    fn outermost_first(self) -> bool {
        matches!(self, Scan::First | Scan::Last)
    }
}

/// In which order the ancestral relations visit the generations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// Starting from the parent, going up
    Nearest,
    /// Starting from the root level, going down
    Outermost,
}

impl<T> Context<T>
where
    T: Clone,
{
    /// Ancestors of the focus, nearest first, paired with their generation
    pub fn lineage(&self) -> impl Iterator<Item = (usize, Context<T>)> {
        (1..).zip(iter::successors(self.parent(), Context::parent))
    }

    /// Move `generation` levels up. Zero generations is not a move.
    pub fn ancestor_at(&self, generation: usize) -> Option<Self> {
        let n = generation.checked_sub(1)?;
        self.lineage().nth(n).map(|(_, ctx)| ctx)
    }

    /// Move to the grandparent
    pub fn grandparent(&self) -> Option<Self> {
        self.ancestor_at(2)
    }

    /// Move to the great-grandparent
    pub fn great_grandparent(&self) -> Option<Self> {
        self.ancestor_at(3)
    }

    /// Move to the nearest ancestor matching `predicate`
    pub fn first_ancestor<P>(&self, predicate: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.lineage()
            .map(|(_, ctx)| ctx)
            .find(|ctx| predicate(ctx.focus()))
    }

    /// Move to a node exactly `depth` levels below the focus.
    ///
    /// `First` and `Next` pick the leftmost match, `Previous` and `Last` the
    /// rightmost. A depth of zero is not a move.
    pub fn descendant<P>(
        &self,
        scan: Scan,
        depth: usize,
        predicate: P,
    ) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        if depth == 0 {
            return None;
        }
        let path = search::descendant_path(
            &self.focus,
            depth,
            scan.rightward(),
            &predicate,
        )?;
        self.clone().follow(&path)
    }

    /// Move to the relative `depth` levels below a sibling of the ancestor
    /// `generation` levels up.
    pub fn kin<P>(
        &self,
        scan: Scan,
        generation: usize,
        depth: usize,
        predicate: P,
    ) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        match generation {
            0 => self.scan_level(scan, depth, &predicate),
            g => self.ancestor_at(g)?.scan_level(scan, depth, &predicate),
        }
    }

    /// `kin` over every generation from `from` up to the root, in `order`.
    ///
    /// `depth_of` gives the depth to look at for each generation. The first
    /// generation producing a match wins. Generation 0 is the sibling group
    /// of the focus itself, and is only scanned when `from` is 0.
    pub fn ancestral_kin<D, P>(
        &self,
        scan: Scan,
        order: Order,
        from: usize,
        depth_of: D,
        predicate: P,
    ) -> Option<Self>
    where
        D: Fn(usize) -> usize,
        P: Fn(&Tree<T>) -> bool,
    {
        let own = (from == 0).then(|| (0, self.clone()));
        let mut lineage = own
            .into_iter()
            .chain(self.lineage().skip_while(|(g, _)| *g < from));
        let look = |(g, ctx): (usize, Context<T>)| {
            ctx.scan_level(scan, depth_of(g), &predicate)
        };

        match order {
            Order::Nearest => lineage.find_map(look),
            Order::Outermost => {
                let levels: Vec<_> = lineage.collect();
                levels.into_iter().rev().find_map(look)
            }
        }
    }

    // The matching node `depth` levels below the siblings of the focus
    fn scan_level<P>(&self, scan: Scan, depth: usize, predicate: &P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        let rightward = scan.rightward();
        scan.indices(self.index(), self.width()).find_map(|i| {
            let sibling = self.sibling_tree(i)?;
            let path =
                search::descendant_path(sibling, depth, rightward, predicate)?;
            self.refocus(i)?.follow(&path)
        })
    }

    fn ancestral<P>(
        &self,
        scan: Scan,
        from: usize,
        depth_of: fn(usize) -> usize,
        predicate: P,
    ) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        let order = if scan.outermost_first() {
            Order::Outermost
        } else {
            Order::Nearest
        };
        self.ancestral_kin(scan, order, from, depth_of, predicate)
    }

    // The deepest descendant along the outer edge of the sibling picked by
    // `scan`.
    fn descendant_nibling<P>(&self, scan: Scan, predicate: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        let i = scan.indices(self.index(), self.width()).next()?;
        let path = search::extreme_path(self.sibling_tree(i)?, scan.rightward());
        if path.is_empty() {
            return None;
        }
        self.refocus(i)?
            .follow(&path)
            .filter(|ctx| predicate(ctx.focus()))
    }

    // A node `depth` levels below one particular sibling
    fn kin_at_sibling<P>(
        &self,
        index: usize,
        depth: usize,
        rightward: bool,
        predicate: P,
    ) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        let sibling = self.sibling_tree(index)?;
        let path =
            search::descendant_path(sibling, depth, rightward, &predicate)?;
        self.refocus(index)?.follow(&path)
    }

    // Descendants

    /// Move to the first grandchild matching `predicate`
    pub fn first_grandchild<P>(&self, predicate: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.descendant(Scan::First, 2, predicate)
    }

    /// Move to the last grandchild matching `predicate`
    pub fn last_grandchild<P>(&self, predicate: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.descendant(Scan::Last, 2, predicate)
    }

    /// Move to the first great-grandchild matching `predicate`
    pub fn first_great_grandchild<P>(&self, predicate: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.descendant(Scan::First, 3, predicate)
    }

    /// Move to the last great-grandchild matching `predicate`
    pub fn last_great_grandchild<P>(&self, predicate: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.descendant(Scan::Last, 3, predicate)
    }

    /// Follow first children down to a leaf. `None` if the focus is a leaf.
    pub fn first_descendant(&self) -> Option<Self> {
        let path = search::extreme_path(&self.focus, true);
        if path.is_empty() {
            return None;
        }
        self.clone().follow(&path)
    }

    /// Follow last children down to a leaf. `None` if the focus is a leaf.
    ///
    /// This is the last node of the subtree in pre-order.
    pub fn last_descendant(&self) -> Option<Self> {
        let path = search::extreme_path(&self.focus, false);
        if path.is_empty() {
            return None;
        }
        self.clone().follow(&path)
    }

    // Siblings

    /// Move to the sibling matching `predicate`, as selected by `scan`
    pub fn sibling<P>(&self, scan: Scan, predicate: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.scan_level(scan, 0, &predicate)
    }

    /// Move to the first sibling before the focus matching `predicate`,
    /// counting from the start of the level.
    ///
    /// Siblings after the focus are never considered.
    pub fn first_sibling<P>(&self, predicate: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.sibling(Scan::First, predicate)
    }

    /// Move to the nearest previous sibling matching `predicate`
    pub fn previous_sibling<P>(&self, predicate: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.sibling(Scan::Previous, predicate)
    }

    /// Move to the nearest next sibling matching `predicate`
    pub fn next_sibling<P>(&self, predicate: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.sibling(Scan::Next, predicate)
    }

    /// Move to the last sibling after the focus matching `predicate`,
    /// counting from the end of the level.
    ///
    /// Siblings before the focus are never considered.
    pub fn last_sibling<P>(&self, predicate: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.sibling(Scan::Last, predicate)
    }

    // Niblings

    /// Move to the first child of the previous siblings, counting from the
    /// start of the level.
    pub fn first_nibling<P>(&self, predicate: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.scan_level(Scan::First, 1, &predicate)
    }

    /// Move to the nearest child of the previous siblings, scanning right to
    /// left.
    pub fn previous_nibling<P>(&self, predicate: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.scan_level(Scan::Previous, 1, &predicate)
    }

    /// Move to the nearest child of the next siblings, scanning left to
    /// right.
    pub fn next_nibling<P>(&self, predicate: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.scan_level(Scan::Next, 1, &predicate)
    }

    /// Move to the last child of the next siblings, counting from the end of
    /// the level.
    pub fn last_nibling<P>(&self, predicate: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.scan_level(Scan::Last, 1, &predicate)
    }

    /// Move to the first child of the sibling at `index` matching
    /// `predicate`
    pub fn first_nibling_at_sibling<P>(
        &self,
        index: usize,
        predicate: P,
    ) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.kin_at_sibling(index, 1, true, predicate)
    }

    /// Move to the last child of the sibling at `index` matching `predicate`
    pub fn last_nibling_at_sibling<P>(
        &self,
        index: usize,
        predicate: P,
    ) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.kin_at_sibling(index, 1, false, predicate)
    }

    // Grandniblings

    /// Move to the first grandchild of the previous siblings
    pub fn first_grandnibling<P>(&self, predicate: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.scan_level(Scan::First, 2, &predicate)
    }

    /// Move to the nearest grandchild of the previous siblings
    pub fn previous_grandnibling<P>(&self, predicate: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.scan_level(Scan::Previous, 2, &predicate)
    }

    /// Move to the nearest grandchild of the next siblings
    pub fn next_grandnibling<P>(&self, predicate: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.scan_level(Scan::Next, 2, &predicate)
    }

    /// Move to the last grandchild of the next siblings
    pub fn last_grandnibling<P>(&self, predicate: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.scan_level(Scan::Last, 2, &predicate)
    }

    /// Move to the first grandchild of the sibling at `index`
    pub fn first_grandnibling_at_sibling<P>(
        &self,
        index: usize,
        predicate: P,
    ) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.kin_at_sibling(index, 2, true, predicate)
    }

    /// Move to the last grandchild of the sibling at `index`
    pub fn last_grandnibling_at_sibling<P>(
        &self,
        index: usize,
        predicate: P,
    ) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.kin_at_sibling(index, 2, false, predicate)
    }

    // Descendant niblings

    /// Move to the end of the chain of first children of the first sibling
    pub fn first_descendant_nibling<P>(&self, predicate: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.descendant_nibling(Scan::First, predicate)
    }

    /// Move to the last node, in pre-order, of the subtree of the previous
    /// sibling.
    ///
    /// This steps back over the whole subtree of the previous sibling, and is
    /// what makes `ascend` the inverse of `descend`. Gives `None` if the
    /// previous sibling is a leaf or the reached node fails `predicate`.
    pub fn previous_descendant_nibling<P>(&self, predicate: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.descendant_nibling(Scan::Previous, predicate)
    }

    /// Move to the end of the chain of first children of the next sibling
    pub fn next_descendant_nibling<P>(&self, predicate: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.descendant_nibling(Scan::Next, predicate)
    }

    /// Move to the end of the chain of last children of the last sibling
    pub fn last_descendant_nibling<P>(&self, predicate: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.descendant_nibling(Scan::Last, predicate)
    }

    // Piblings

    /// Move to the sibling of the parent at `index`. The parent itself gives
    /// `None`.
    pub fn pibling_at(&self, index: usize) -> Option<Self> {
        self.parent()?.sibling_at(index)
    }

    /// Move to the first sibling before the parent matching `predicate`
    pub fn first_pibling<P>(&self, predicate: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.kin(Scan::First, 1, 0, predicate)
    }

    /// Move to the nearest sibling before the parent matching `predicate`
    pub fn previous_pibling<P>(&self, predicate: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.kin(Scan::Previous, 1, 0, predicate)
    }

    /// Move to the nearest sibling after the parent matching `predicate`
    pub fn next_pibling<P>(&self, predicate: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.kin(Scan::Next, 1, 0, predicate)
    }

    /// Move to the last sibling after the parent matching `predicate`
    pub fn last_pibling<P>(&self, predicate: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.kin(Scan::Last, 1, 0, predicate)
    }

    // Grandpiblings

    /// Move to the sibling of the grandparent at `index`
    pub fn grandpibling_at(&self, index: usize) -> Option<Self> {
        self.grandparent()?.sibling_at(index)
    }

    /// Move to the first sibling before the grandparent
    pub fn first_grandpibling<P>(&self, predicate: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.kin(Scan::First, 2, 0, predicate)
    }

    /// Move to the nearest sibling before the grandparent
    pub fn previous_grandpibling<P>(&self, predicate: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.kin(Scan::Previous, 2, 0, predicate)
    }

    /// Move to the nearest sibling after the grandparent
    pub fn next_grandpibling<P>(&self, predicate: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.kin(Scan::Next, 2, 0, predicate)
    }

    /// Move to the last sibling after the grandparent
    pub fn last_grandpibling<P>(&self, predicate: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.kin(Scan::Last, 2, 0, predicate)
    }

    // Ancestral piblings

    /// Move to the first sibling before an ancestor, trying the parent first
    /// and moving up one level at a time.
    pub fn first_ancestral_pibling<P>(&self, predicate: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.ancestral_kin(Scan::First, Order::Nearest, 1, |_| 0, predicate)
    }

    /// Move to the nearest sibling before the nearest ancestor that has one
    pub fn previous_ancestral_pibling<P>(&self, predicate: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.ancestral_kin(Scan::Previous, Order::Nearest, 1, |_| 0, predicate)
    }

    /// Move to the nearest sibling after the nearest ancestor that has one.
    ///
    /// From the last node of a subtree in pre-order, this is the next node
    /// in pre-order.
    pub fn next_ancestral_pibling<P>(&self, predicate: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.ancestral_kin(Scan::Next, Order::Nearest, 1, |_| 0, predicate)
    }

    /// Move to the last sibling after an ancestor, trying the parent first
    pub fn last_ancestral_pibling<P>(&self, predicate: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.ancestral_kin(Scan::Last, Order::Nearest, 1, |_| 0, predicate)
    }

    // First cousins

    /// Move to the first child of the siblings before the parent
    pub fn first_first_cousin<P>(&self, predicate: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.kin(Scan::First, 1, 1, predicate)
    }

    /// Move to the nearest child of the siblings before the parent
    pub fn previous_first_cousin<P>(&self, predicate: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.kin(Scan::Previous, 1, 1, predicate)
    }

    /// Move to the nearest child of the siblings after the parent
    pub fn next_first_cousin<P>(&self, predicate: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.kin(Scan::Next, 1, 1, predicate)
    }

    /// Move to the last child of the siblings after the parent
    pub fn last_first_cousin<P>(&self, predicate: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.kin(Scan::Last, 1, 1, predicate)
    }

    // Second cousins

    /// Move to the first grandchild of the siblings before the grandparent
    pub fn first_second_cousin<P>(&self, predicate: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.kin(Scan::First, 2, 2, predicate)
    }

    /// Move to the nearest grandchild of the siblings before the grandparent
    pub fn previous_second_cousin<P>(&self, predicate: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.kin(Scan::Previous, 2, 2, predicate)
    }

    /// Move to the nearest grandchild of the siblings after the grandparent
    pub fn next_second_cousin<P>(&self, predicate: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.kin(Scan::Next, 2, 2, predicate)
    }

    /// Move to the last grandchild of the siblings after the grandparent
    pub fn last_second_cousin<P>(&self, predicate: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.kin(Scan::Last, 2, 2, predicate)
    }

    // Extended cousins

    /// Move to the leftmost node on the level of the focus that is neither
    /// the focus nor one of its siblings, and lies before it.
    pub fn first_extended_cousin<P>(&self, predicate: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.ancestral(Scan::First, 1, |g| g, predicate)
    }

    /// Move to the nearest cousin of any degree before the focus.
    ///
    /// Scans the ancestral piblings nearest generation first, and within each
    /// right to left.
    pub fn previous_extended_cousin<P>(&self, predicate: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.ancestral(Scan::Previous, 1, |g| g, predicate)
    }

    /// Move to the nearest cousin of any degree after the focus.
    ///
    /// Together with `next_sibling` this reaches every node on the level of
    /// the focus to its right.
    pub fn next_extended_cousin<P>(&self, predicate: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.ancestral(Scan::Next, 1, |g| g, predicate)
    }

    /// Move to the rightmost cousin of any degree after the focus
    pub fn last_extended_cousin<P>(&self, predicate: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.ancestral(Scan::Last, 1, |g| g, predicate)
    }

    // Extended niblings

    /// Move to the leftmost node one level below the focus hanging off an
    /// ancestral pibling before it.
    ///
    /// The children of the siblings of the focus are niblings, not extended
    /// niblings, and are not considered.
    pub fn first_extended_nibling<P>(&self, predicate: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.ancestral(Scan::First, 1, |g| g + 1, predicate)
    }

    /// Move to the nearest extended nibling before the focus
    pub fn previous_extended_nibling<P>(&self, predicate: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.ancestral(Scan::Previous, 1, |g| g + 1, predicate)
    }

    /// Move to the nearest extended nibling after the focus
    pub fn next_extended_nibling<P>(&self, predicate: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.ancestral(Scan::Next, 1, |g| g + 1, predicate)
    }

    /// Move to the rightmost extended nibling after the focus
    pub fn last_extended_nibling<P>(&self, predicate: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.ancestral(Scan::Last, 1, |g| g + 1, predicate)
    }

    // Extended piblings

    /// Move to the leftmost node on the level of the parent hanging off an
    /// ancestral pibling of the grandparent or above.
    ///
    /// Siblings of the parent are piblings, not extended piblings, and are
    /// not considered.
    pub fn first_extended_pibling<P>(&self, predicate: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.ancestral(Scan::First, 2, |g| g - 1, predicate)
    }

    /// Move to the nearest extended pibling before the parent
    pub fn previous_extended_pibling<P>(&self, predicate: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.ancestral(Scan::Previous, 2, |g| g - 1, predicate)
    }

    /// Move to the nearest extended pibling after the parent
    pub fn next_extended_pibling<P>(&self, predicate: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.ancestral(Scan::Next, 2, |g| g - 1, predicate)
    }

    /// Move to the rightmost node on the level of the parent after it,
    /// excluding the siblings of the parent.
    pub fn last_extended_pibling<P>(&self, predicate: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.ancestral(Scan::Last, 2, |g| g - 1, predicate)
    }
}
