// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use core::fmt;
use core::hash::{Hash, Hasher};
use core::mem;
use std::sync::Arc;

use tracing::debug;

use crate::context::Context;
use crate::error::Error;

#[derive(Clone)]
struct Node<T> {
    term: T,
    children: Vec<Tree<T>>,
}

/// An immutable, ordered, n-ary tree.
///
/// Every node carries a `term` and an ordered list of child trees. The node
/// itself is reference counted, so cloning a `Tree` is cheap and unchanged
/// subtrees are shared between trees, contexts and locations. The mutating
/// methods copy the node on write and never affect other handles.
///
/// Comparing, hashing, measuring and dropping trees never recurse, so
/// arbitrarily deep trees are fine.
pub struct Tree<T>(Arc<Node<T>>);

impl<T> Clone for Tree<T> {
    fn clone(&self) -> Self {
        Tree(Arc::clone(&self.0))
    }
}

impl<T> Tree<T> {
    /// Create a new tree from a term and its children
    pub fn new<I>(term: T, children: I) -> Self
    where
        I: IntoIterator<Item = Tree<T>>,
    {
        Tree(Arc::new(Node {
            term,
            children: children.into_iter().collect(),
        }))
    }

    /// Create a tree without children
    pub fn leaf(term: T) -> Self {
        Tree::new(term, Vec::new())
    }

    /// Build a tree by expanding a seed.
    ///
    /// `expand` maps a seed to the term of the node and the seeds of its
    /// children. Children are unfolded recursively, in order.
    ///
    /// The expansion is not checked for termination: it is up to the caller
    /// to make sure every branch eventually yields no further seeds.
    pub fn unfold<S, F>(seed: S, expand: F) -> Self
    where
        F: Fn(S) -> (T, Vec<S>),
    {
        struct Pending<T, S> {
            term: T,
            seeds: std::vec::IntoIter<S>,
            children: Vec<Tree<T>>,
        }

        let open = |seed| {
            let (term, seeds) = expand(seed);
            Pending {
                term,
                seeds: seeds.into_iter(),
                children: Vec::new(),
            }
        };

        let mut stack = Vec::new();
        let mut current = open(seed);
        let tree = loop {
            match current.seeds.next() {
                Some(seed) => {
                    let child = open(seed);
                    stack.push(mem::replace(&mut current, child));
                }
                None => {
                    let tree = Tree::new(current.term, current.children);
                    match stack.pop() {
                        Some(mut parent) => {
                            parent.children.push(tree);
                            current = parent;
                        }
                        None => break tree,
                    }
                }
            }
        };
        debug!(nodes = tree.count(), "unfolded tree");
        tree
    }

    /// Returns a reference to the term of the root node
    pub fn term(&self) -> &T {
        &self.0.term
    }

    /// Returns the children of the root node
    pub fn children(&self) -> &[Tree<T>] {
        &self.0.children
    }

    /// Returns the child at `index`, if any
    pub fn child(&self, index: usize) -> Option<&Tree<T>> {
        self.0.children.get(index)
    }

    /// Is this node without children?
    pub fn is_leaf(&self) -> bool {
        self.0.children.is_empty()
    }

    /// Does this node have children?
    pub fn is_parent(&self) -> bool {
        !self.is_leaf()
    }

    /// The number of nodes in the tree, including the root
    pub fn count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(tree) = pending.pop() {
            count += 1;
            pending.extend(tree.children());
        }
        count
    }

    /// The number of levels in the tree; a leaf has height 1
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut pending = vec![(self, 1)];
        while let Some((tree, level)) = pending.pop() {
            height = height.max(level);
            pending.extend(tree.children().iter().map(|c| (c, level + 1)));
        }
        height
    }

    /// Returns true if both trees share the same root node in memory
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Places a cursor on the root of the tree
    pub fn enter(self) -> Context<T> {
        Context::new(self)
    }
}

impl<T> Tree<T>
where
    T: Clone,
{
    fn node_mut(&mut self) -> &mut Node<T> {
        Arc::make_mut(&mut self.0)
    }

    /// Split the tree into its term and children.
    ///
    /// The children are only copied if the node is shared.
    pub fn into_parts(mut self) -> (T, Vec<Tree<T>>) {
        match Arc::get_mut(&mut self.0) {
            Some(node) => (node.term.clone(), mem::take(&mut node.children)),
            None => (self.term().clone(), self.children().to_vec()),
        }
    }

    /// Replace the term of the root node
    pub fn set_term(&mut self, term: T) {
        self.node_mut().term = term;
    }

    /// Replace the term of the root node with the result of `f`
    pub fn map_term<F>(&mut self, f: F)
    where
        F: FnOnce(&T) -> T,
    {
        let term = f(self.term());
        self.set_term(term);
    }

    /// Replace all children of the root node
    pub fn set_children<I>(&mut self, children: I)
    where
        I: IntoIterator<Item = Tree<T>>,
    {
        self.node_mut().children = children.into_iter().collect();
    }

    /// Append a child after the last one
    pub fn push_child(&mut self, child: Tree<T>) {
        self.node_mut().children.push(child);
    }

    /// Remove and return the last child
    pub fn pop_child(&mut self) -> Option<Tree<T>> {
        if self.is_leaf() {
            return None;
        }
        self.node_mut().children.pop()
    }

    /// Insert a child at `index`, shifting later children to the right.
    ///
    /// `index` may equal the number of children, which appends.
    pub fn insert_child(
        &mut self,
        index: usize,
        child: Tree<T>,
    ) -> Result<(), Error> {
        let len = self.children().len();
        if index > len {
            return Err(Error::OutOfBounds { index, len });
        }
        self.node_mut().children.insert(index, child);
        Ok(())
    }

    /// Remove and return the child at `index`
    pub fn remove_child(&mut self, index: usize) -> Result<Tree<T>, Error> {
        let len = self.children().len();
        if index >= len {
            return Err(Error::OutOfBounds { index, len });
        }
        Ok(self.node_mut().children.remove(index))
    }

    /// Replace the child at `index`, returning the old one
    pub fn set_child(
        &mut self,
        index: usize,
        child: Tree<T>,
    ) -> Result<Tree<T>, Error> {
        let len = self.children().len();
        match self.node_mut().children.get_mut(index) {
            Some(slot) => Ok(core::mem::replace(slot, child)),
            None => Err(Error::OutOfBounds { index, len }),
        }
    }
}

impl<T> From<T> for Tree<T> {
    fn from(term: T) -> Self {
        Tree::leaf(term)
    }
}

// Children of uniquely owned nodes are moved onto a work list before the
// node goes away, a deep tree would otherwise be dropped recursively.
impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        let mut pending = match Arc::get_mut(&mut self.0) {
            Some(node) => mem::take(&mut node.children),
            None => return,
        };
        while let Some(mut tree) = pending.pop() {
            if let Some(node) = Arc::get_mut(&mut tree.0) {
                pending.append(&mut node.children);
            }
        }
    }
}

impl<T> PartialEq for Tree<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some((a, b)) = pending.pop() {
            if a.ptr_eq(b) {
                continue;
            }
            if a.term() != b.term() || a.children().len() != b.children().len()
            {
                return false;
            }
            pending.extend(a.children().iter().zip(b.children()));
        }
        true
    }
}

impl<T> Eq for Tree<T> where T: Eq {}

/// Hashes the terms in pre-order, each followed by its number of children
impl<T> Hash for Tree<T>
where
    T: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut pending = vec![self];
        while let Some(tree) = pending.pop() {
            tree.term().hash(state);
            tree.children().len().hash(state);
            pending.extend(tree.children().iter().rev());
        }
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_leaf() {
            f.debug_tuple("Tree").field(self.term()).finish()
        } else {
            f.debug_tuple("Tree")
                .field(self.term())
                .field(&self.children())
                .finish()
        }
    }
}
