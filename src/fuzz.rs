// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use arbitrary::{Arbitrary, Result, Unstructured};

use crate::context::Context;
use crate::tree::Tree;

// Manual implementation, a derived one would recurse forever computing its
// size hint
impl<'a, T> Arbitrary<'a> for Tree<T>
where
    T: Arbitrary<'a>,
{
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        let term = T::arbitrary(u)?;
        let children = u
            .arbitrary_iter::<Tree<T>>()?
            .collect::<Result<Vec<_>>>()?;
        Ok(Tree::new(term, children))
    }
}

/// An arbitrary tree with the cursor on an arbitrary node of it
impl<'a, T> Arbitrary<'a> for Context<T>
where
    T: Arbitrary<'a> + Clone,
{
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        let tree = Tree::<T>::arbitrary(u)?;
        let steps = u.choose_index(tree.count())?;
        let root = tree.enter();
        Ok(root.descend_for(steps).unwrap_or(root))
    }
}
