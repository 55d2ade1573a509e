// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use core::iter;

use crate::error::Error;
use crate::location::{Location, Path};
use crate::tree::Tree;

/// A cursor into a `Tree`, also known as a zipper.
///
/// The context keeps the tree under the cursor (the focus), the siblings
/// surrounding it, and the path of `Location`s back up to the root. Moving
/// the cursor never mutates a context, every move returns a new one, so any
/// number of contexts derived from the same tree can be held and navigated
/// independently.
///
/// At every level, the previous siblings in tree order, followed by the
/// focus, followed by the next siblings, are the children of the ancestor on
/// top of the path.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Context<T> {
    pub(crate) focus: Tree<T>,
    // previous siblings in tree order, the nearest is last
    pub(crate) before: Vec<Tree<T>>,
    // next siblings in tree order, the nearest is first
    pub(crate) after: Vec<Tree<T>>,
    // ancestors, shared with every context derived from this one
    pub(crate) path: Path<T>,
}

impl<T> Context<T> {
    /// Places the cursor at the root of `tree`
    pub fn new(tree: Tree<T>) -> Self {
        Context {
            focus: tree,
            before: Vec::new(),
            after: Vec::new(),
            path: Path::empty(),
        }
    }

    /// Assemble a context from its parts.
    ///
    /// `prev`, `next` and `path` are all given nearest first.
    pub fn from_parts<P, N, L>(focus: Tree<T>, prev: P, next: N, path: L) -> Self
    where
        P: IntoIterator<Item = Tree<T>>,
        N: IntoIterator<Item = Tree<T>>,
        L: IntoIterator<Item = Location<T>>,
    {
        let mut before: Vec<_> = prev.into_iter().collect();
        before.reverse();
        let mut path: Vec<_> = path.into_iter().collect();
        path.reverse();
        Context {
            focus,
            before,
            after: next.into_iter().collect(),
            path: Path::from_root(path),
        }
    }

    /// Rebuild a context from a list of nested locations, nearest first.
    ///
    /// The first location becomes the focus, as a leaf carrying its term and
    /// placed among its recorded siblings; the rest form the path.
    pub fn from_locations<L>(locations: L) -> Result<Self, Error>
    where
        L: IntoIterator<Item = Location<T>>,
    {
        let mut locations = locations.into_iter();
        let Location {
            term,
            before,
            after,
        } = locations.next().ok_or(Error::EmptyLocations)?;

        let mut path: Vec<_> = locations.collect();
        path.reverse();

        Ok(Context {
            focus: Tree::leaf(term),
            before,
            after,
            path: Path::from_root(path),
        })
    }

    /// The tree under the cursor
    pub fn focus(&self) -> &Tree<T> {
        &self.focus
    }

    /// The term of the node under the cursor
    pub fn term(&self) -> &T {
        self.focus.term()
    }

    /// Previous siblings, nearest first
    pub fn prev(&self) -> impl ExactSizeIterator<Item = &Tree<T>> {
        self.before.iter().rev()
    }

    /// Next siblings, nearest first
    pub fn next(&self) -> impl ExactSizeIterator<Item = &Tree<T>> {
        self.after.iter()
    }

    /// The ancestor locations, nearest first
    pub fn path(&self) -> impl ExactSizeIterator<Item = &Location<T>> {
        self.path.iter()
    }

    /// The focus together with all its siblings, in tree order
    pub fn siblings(&self) -> impl Iterator<Item = &Tree<T>> {
        self.before
            .iter()
            .chain(iter::once(&self.focus))
            .chain(self.after.iter())
    }

    /// The number of ancestors above the focus
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    /// The position of the focus among its siblings
    pub fn index(&self) -> usize {
        self.before.len()
    }

    /// The number of nodes on the level of the focus, the focus included
    pub fn width(&self) -> usize {
        self.before.len() + 1 + self.after.len()
    }

    /// Is the focus at the root level?
    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }

    /// Is the focus a leaf?
    pub fn is_leaf(&self) -> bool {
        self.focus.is_leaf()
    }

    /// Are there siblings before the focus?
    pub fn has_prev(&self) -> bool {
        !self.before.is_empty()
    }

    /// Are there siblings after the focus?
    pub fn has_next(&self) -> bool {
        !self.after.is_empty()
    }

    /// Take the tree under the cursor, dropping the rest of the context
    pub fn into_tree(self) -> Tree<T> {
        self.focus
    }

    // Sibling at `index` of the current level, never the focus itself
    pub(crate) fn sibling_tree(&self, index: usize) -> Option<&Tree<T>> {
        let position = self.index();
        if index < position {
            self.before.get(index)
        } else if index == position {
            None
        } else {
            self.after.get(index - position - 1)
        }
    }
}

impl<T> Context<T>
where
    T: Clone,
{
    /// Move to the parent of the focus.
    ///
    /// Rebuilds the parent from the focus and its siblings, so the cost is
    /// linear in the number of siblings on the two levels involved, whatever
    /// the depth. Returns `None` at the root.
    pub fn parent(&self) -> Option<Self> {
        let (location, path) = self.path.pop()?;
        let focus = location.rebuild(&self.before, self.focus.clone(), &self.after);
        Some(Context {
            focus,
            before: location.before.clone(),
            after: location.after.clone(),
            path: path.clone(),
        })
    }

    /// Move to the child at `index`
    pub fn child_at(&self, index: usize) -> Option<Self> {
        let children = self.focus.children();
        let focus = children.get(index)?.clone();

        let path = self.path.push(Location {
            term: self.term().clone(),
            before: self.before.clone(),
            after: self.after.clone(),
        });

        Some(Context {
            focus,
            before: children[..index].to_vec(),
            after: children[index + 1..].to_vec(),
            path,
        })
    }

    /// Move to the sibling at `index`.
    ///
    /// The index counts from the first sibling, with the focus at
    /// `self.index()`. The focus is never its own sibling, so that index, as
    /// well as anything out of range, gives `None`.
    pub fn sibling_at(&self, index: usize) -> Option<Self> {
        self.sibling_tree(index)?;
        self.refocus(index)
    }

    /// Move to the first child matching `predicate`
    pub fn first_child<P>(&self, predicate: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        let index = self.focus.children().iter().position(predicate)?;
        self.child_at(index)
    }

    /// Move to the last child matching `predicate`
    pub fn last_child<P>(&self, predicate: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        let index = self.focus.children().iter().rposition(predicate)?;
        self.child_at(index)
    }

    /// Replace the tree under the cursor
    pub fn set_focus(&mut self, tree: Tree<T>) {
        self.focus = tree;
    }

    /// Replace the tree under the cursor with the result of `f`
    pub fn map_focus<F>(&mut self, f: F)
    where
        F: FnOnce(&Tree<T>) -> Tree<T>,
    {
        self.focus = f(&self.focus);
    }

    /// Replace the term under the cursor, keeping its children
    pub fn set_term(&mut self, term: T) {
        self.focus.set_term(term);
    }

    /// Replace the term under the cursor with the result of `f`
    pub fn map_term<F>(&mut self, f: F)
    where
        F: FnOnce(&T) -> T,
    {
        self.focus.map_term(f);
    }

    /// Zip the context all the way up and return the root tree, with any
    /// edits made through the cursor applied.
    pub fn exit(&self) -> Tree<T> {
        self.to_root().into_tree()
    }

    // Position the cursor on `index` of the current level, which may be the
    // focus itself.
    pub(crate) fn refocus(&self, index: usize) -> Option<Self> {
        if index >= self.width() {
            return None;
        }
        let mut row: Vec<_> = self.siblings().cloned().collect();
        let after = row.split_off(index + 1);
        let focus = row.pop()?;

        Some(Context {
            focus,
            before: row,
            after,
            path: self.path.clone(),
        })
    }

    // Follow a path of child indices down from the focus
    pub(crate) fn follow(self, indices: &[usize]) -> Option<Self> {
        indices
            .iter()
            .try_fold(self, |ctx, &index| ctx.child_at(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Tree<u32> {
        Tree::new(
            0,
            [
                Tree::new(1, [Tree::leaf(4), Tree::leaf(5), Tree::leaf(6)]),
                Tree::new(2, [Tree::leaf(7), Tree::leaf(8), Tree::leaf(9)]),
                Tree::new(3, [Tree::leaf(10), Tree::leaf(11), Tree::leaf(12)]),
            ],
        )
    }

    fn terms<'a>(trees: impl Iterator<Item = &'a Tree<u32>>) -> Vec<u32> {
        trees.map(|t| *t.term()).collect()
    }

    #[test]
    fn child_split() {
        let ctx = sample().enter().child_at(1).unwrap().child_at(2).unwrap();

        assert_eq!(*ctx.term(), 9);
        assert_eq!(ctx.depth(), 2);
        assert_eq!(ctx.index(), 2);
        assert_eq!(terms(ctx.prev()), [8, 7]);
        assert_eq!(terms(ctx.next()), Vec::<u32>::new());

        let ancestors: Vec<_> = ctx.path().map(|l| *l.term()).collect();
        assert_eq!(ancestors, [2, 0]);

        let parent_level = ctx.path().next().unwrap();
        assert_eq!(terms(parent_level.prev()), [1]);
        assert_eq!(terms(parent_level.next()), [3]);
    }

    #[test]
    fn parent_of_child_is_identity() {
        let root = sample().enter();
        for i in 0..3 {
            let child = root.child_at(i).unwrap();
            assert_eq!(child.parent().unwrap(), root);
            for j in 0..3 {
                let grandchild = child.child_at(j).unwrap();
                assert_eq!(grandchild.parent().unwrap().focus(), child.focus());
            }
        }
    }

    // 50 leaves on every level, the cursor walks down the middle
    fn wide_and_deep(depth: usize) -> Context<u32> {
        let mut tree = Tree::leaf(0);
        for d in 1..=depth as u32 {
            let mut children: Vec<_> = (0..50).map(Tree::leaf).collect();
            children[25] = tree;
            tree = Tree::new(d, children);
        }
        let mut ctx = tree.enter();
        while let Some(child) = ctx.child_at(25) {
            ctx = child;
        }
        ctx
    }

    #[test]
    fn moves_share_the_path() {
        let bottom = wide_and_deep(2000);
        assert_eq!(bottom.depth(), 2000);

        let (_, above) = bottom.path.pop().unwrap();

        // going up reuses the path above the parent as is
        let up = bottom.parent().unwrap();
        assert!(up.path.ptr_eq(above));
        assert_eq!(up.depth(), 1999);

        // moving sideways or down never copies it either
        let side = bottom.sibling_at(0).unwrap();
        assert!(side.path.ptr_eq(&bottom.path));
        let down = up.child_at(3).unwrap();
        let (_, below_up) = down.path.pop().unwrap();
        assert!(below_up.ptr_eq(&up.path));

        assert_eq!(up.child_at(25).unwrap(), bottom);
        assert_eq!(bottom.exit().count(), 1 + 2000 * 50);
    }

    #[test]
    fn child_out_of_range() {
        let root = sample().enter();
        assert!(root.child_at(3).is_none());
        assert!(Tree::leaf(1).enter().child_at(0).is_none());
        assert!(root.parent().is_none());
    }

    #[test]
    fn sibling_at_skips_self() {
        let ctx = sample().enter().child_at(1).unwrap();

        assert!(ctx.sibling_at(1).is_none());
        assert!(ctx.sibling_at(3).is_none());

        let first = ctx.sibling_at(0).unwrap();
        assert_eq!(*first.term(), 1);
        assert_eq!(terms(first.next()), [2, 3]);
        assert_eq!(first.prev().len(), 0);

        let last = first.sibling_at(2).unwrap();
        assert_eq!(*last.term(), 3);
        assert_eq!(terms(last.prev()), [2, 1]);
    }

    #[test]
    fn first_and_last_child() {
        let root = sample().enter();

        let odd = |t: &Tree<u32>| t.term() % 2 == 1;
        assert_eq!(*root.first_child(odd).unwrap().term(), 1);
        assert_eq!(*root.last_child(odd).unwrap().term(), 3);
        assert!(root.first_child(|t| *t.term() > 3).is_none());
    }

    #[test]
    fn edit_and_exit() {
        let mut ctx = sample().enter().child_at(2).unwrap().child_at(0).unwrap();
        ctx.set_term(100);
        ctx.map_focus(|t| Tree::new(*t.term(), [Tree::leaf(101)]));

        let tree = ctx.exit();
        assert_eq!(tree.count(), 14);
        assert_eq!(*tree.children()[2].children()[0].term(), 100);
        assert_eq!(*tree.children()[2].children()[0].children()[0].term(), 101);

        // the context itself is untouched by exiting
        assert_eq!(*ctx.term(), 100);
        assert_eq!(ctx.depth(), 2);
    }

    #[test]
    fn from_locations() -> Result<(), Error> {
        assert_eq!(
            Context::<u32>::from_locations(Vec::new()),
            Err(Error::EmptyLocations)
        );

        let ctx = Context::from_locations([
            Location::new(5, [Tree::leaf(4)], [Tree::leaf(6)]),
            Location::new(1, [], [Tree::leaf(2)]),
            Location::new(0, [], []),
        ])?;

        assert_eq!(*ctx.term(), 5);
        assert_eq!(ctx.depth(), 2);

        let root = ctx.parent().and_then(|c| c.parent()).unwrap();
        assert_eq!(
            root.into_tree(),
            Tree::new(
                0,
                [
                    Tree::new(1, [Tree::leaf(4), Tree::leaf(5), Tree::leaf(6)]),
                    Tree::leaf(2),
                ]
            )
        );
        Ok(())
    }

    #[test]
    fn from_parts_matches_navigation() {
        let navigated = sample().enter().child_at(0).unwrap().child_at(1).unwrap();
        let tree = sample();
        let one = &tree.children()[0];

        let assembled = Context::from_parts(
            Tree::leaf(5),
            [Tree::leaf(4)],
            [Tree::leaf(6)],
            [
                Location::new(
                    1,
                    [],
                    [tree.children()[1].clone(), tree.children()[2].clone()],
                ),
                Location::new(0, [], []),
            ],
        );

        assert_eq!(assembled, navigated);
        assert_eq!(assembled.parent().unwrap().focus(), one);
    }
}
