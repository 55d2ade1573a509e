// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use core::fmt;
use core::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::tree::Tree;

/// Represents an ancestor level of a `Context`.
///
/// Holds the term of the ancestor together with the siblings surrounding it,
/// which is exactly what is needed to rebuild the ancestor and put it back
/// among its siblings when the cursor moves up past it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Location<T> {
    pub(crate) term: T,
    // siblings before the ancestor, in tree order
    pub(crate) before: Vec<Tree<T>>,
    // siblings after the ancestor, in tree order
    pub(crate) after: Vec<Tree<T>>,
}

impl<T> Location<T> {
    /// Create a new location.
    ///
    /// Both `prev` and `next` are given nearest sibling first.
    pub fn new<P, N>(term: T, prev: P, next: N) -> Self
    where
        P: IntoIterator<Item = Tree<T>>,
        N: IntoIterator<Item = Tree<T>>,
    {
        let mut before: Vec<_> = prev.into_iter().collect();
        before.reverse();
        Location {
            term,
            before,
            after: next.into_iter().collect(),
        }
    }

    /// The term of the ancestor
    pub fn term(&self) -> &T {
        &self.term
    }

    /// Previous siblings of the ancestor, nearest first
    pub fn prev(&self) -> impl ExactSizeIterator<Item = &Tree<T>> {
        self.before.iter().rev()
    }

    /// Next siblings of the ancestor, nearest first
    pub fn next(&self) -> impl ExactSizeIterator<Item = &Tree<T>> {
        self.after.iter()
    }

    /// The position of the ancestor among its siblings
    pub fn index(&self) -> usize {
        self.before.len()
    }

    /// Rebuild the ancestor with `child` between the given children.
    pub(crate) fn rebuild(
        &self,
        before: &[Tree<T>],
        child: Tree<T>,
        after: &[Tree<T>],
    ) -> Tree<T>
    where
        T: Clone,
    {
        let children = before
            .iter()
            .cloned()
            .chain(core::iter::once(child))
            .chain(after.iter().cloned());
        Tree::new(self.term.clone(), children)
    }
}

/// The ancestors of a `Context`, as a persistent stack.
///
/// Pushing and popping are O(1), and every context derived from another one
/// shares the part of the path above their common ancestor.
pub(crate) struct Path<T>(Option<Arc<Step<T>>>);

struct Step<T> {
    location: Location<T>,
    up: Path<T>,
    len: usize,
}

impl<T> Path<T> {
    pub(crate) fn empty() -> Self {
        Path(None)
    }

    /// Build a path from locations given root first
    pub(crate) fn from_root<I>(locations: I) -> Self
    where
        I: IntoIterator<Item = Location<T>>,
    {
        locations
            .into_iter()
            .fold(Path::empty(), |path, location| path.push(location))
    }

    pub(crate) fn len(&self) -> usize {
        self.0.as_ref().map_or(0, |step| step.len)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    pub(crate) fn push(&self, location: Location<T>) -> Self {
        Path(Some(Arc::new(Step {
            location,
            up: self.clone(),
            len: self.len() + 1,
        })))
    }

    /// The nearest location and the path above it
    pub(crate) fn pop(&self) -> Option<(&Location<T>, &Path<T>)> {
        self.0.as_ref().map(|step| (&step.location, &step.up))
    }

    /// Locations, nearest first
    pub(crate) fn iter(&self) -> PathIter<'_, T> {
        PathIter {
            path: self,
            remaining: self.len(),
        }
    }

    pub(crate) fn ptr_eq(&self, other: &Self) -> bool {
        match (&self.0, &other.0) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T> Clone for Path<T> {
    fn clone(&self) -> Self {
        Path(self.0.clone())
    }
}

// Unlink the steps one at a time, a long path would otherwise be dropped
// recursively.
impl<T> Drop for Path<T> {
    fn drop(&mut self) {
        let mut next = self.0.take();
        while let Some(step) = next {
            next = match Arc::try_unwrap(step) {
                Ok(mut step) => step.up.0.take(),
                Err(_) => None,
            };
        }
    }
}

impl<T> PartialEq for Path<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        let (mut a, mut b) = (self, other);
        if a.len() != b.len() {
            return false;
        }
        loop {
            if a.ptr_eq(b) {
                return true;
            }
            match (a.pop(), b.pop()) {
                (Some((la, ua)), Some((lb, ub))) => {
                    if la != lb {
                        return false;
                    }
                    a = ua;
                    b = ub;
                }
                _ => return false,
            }
        }
    }
}

impl<T> Eq for Path<T> where T: Eq {}

impl<T> Hash for Path<T>
where
    T: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for location in self.iter() {
            location.hash(state);
        }
    }
}

impl<T> fmt::Debug for Path<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Iterator over the locations of a path, nearest first
pub(crate) struct PathIter<'a, T> {
    path: &'a Path<T>,
    remaining: usize,
}

impl<'a, T> Iterator for PathIter<'a, T> {
    type Item = &'a Location<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let (location, up) = self.path.pop()?;
        self.path = up;
        self.remaining -= 1;
        Some(location)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for PathIter<'a, T> {}
