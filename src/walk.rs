// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use tracing::{instrument, trace};

use crate::context::Context;
use crate::predicate::always;
use crate::tree::Tree;

/// A single move of the cursor, failing with `None`
pub type Move<T> = fn(&Context<T>) -> Option<Context<T>>;

// The first candidate move to succeed wins. Candidates after it are never
// evaluated.
fn first_success<T>(
    ctx: &Context<T>,
    walk: &'static str,
    candidates: &[Move<T>],
) -> Option<Context<T>> {
    candidates.iter().enumerate().find_map(|(candidate, step)| {
        let moved = step(ctx)?;
        trace!(walk, candidate, depth = moved.depth(), "step");
        Some(moved)
    })
}

impl<T> Context<T>
where
    T: Clone,
{
    /// Candidate moves of `descend`, in order of preference
    pub fn descend_candidates() -> [Move<T>; 3] {
        [
            |ctx| ctx.first_child(always),
            |ctx| ctx.next_sibling(always),
            |ctx| ctx.next_ancestral_pibling(always),
        ]
    }

    /// Candidate moves of `ascend`, in order of preference
    pub fn ascend_candidates() -> [Move<T>; 3] {
        [
            |ctx| ctx.previous_descendant_nibling(always),
            |ctx| ctx.previous_sibling(always),
            Context::parent,
        ]
    }

    /// Candidate moves of `forward`, in order of preference
    pub fn forward_candidates() -> [Move<T>; 5] {
        [
            |ctx| ctx.next_sibling(always),
            |ctx| ctx.next_extended_cousin(always),
            |ctx| ctx.first_extended_nibling(always),
            |ctx| ctx.first_nibling(always),
            |ctx| ctx.first_child(always),
        ]
    }

    /// Candidate moves of `backward`, in order of preference
    pub fn backward_candidates() -> [Move<T>; 5] {
        [
            |ctx| ctx.previous_sibling(always),
            |ctx| ctx.previous_extended_cousin(always),
            |ctx| ctx.last_extended_pibling(always),
            |ctx| ctx.last_pibling(always),
            Context::parent,
        ]
    }

    /// Apply `step` exactly `times` times.
    ///
    /// All or nothing: if any of the moves fails, so does the whole. Zero
    /// moves is not a move and gives `None`.
    pub fn move_for<M>(&self, step: M, times: usize) -> Option<Self>
    where
        M: Fn(&Self) -> Option<Self>,
    {
        if times == 0 {
            return None;
        }
        let mut ctx = step(self)?;
        for _ in 1..times {
            ctx = step(&ctx)?;
        }
        Some(ctx)
    }

    /// Apply `step` once, keeping the result only if it satisfies
    /// `predicate`
    pub fn move_if<M, P>(&self, step: M, predicate: P) -> Option<Self>
    where
        M: Fn(&Self) -> Option<Self>,
        P: Fn(&Self) -> bool,
    {
        step(self).filter(|ctx| predicate(ctx))
    }

    /// Apply `step` until the result satisfies `predicate`
    pub fn move_until<M, P>(&self, step: M, predicate: P) -> Option<Self>
    where
        M: Fn(&Self) -> Option<Self>,
        P: Fn(&Self) -> bool,
    {
        let mut ctx = step(self)?;
        while !predicate(&ctx) {
            ctx = step(&ctx)?;
        }
        Some(ctx)
    }

    /// Apply `step` for as long as it succeeds and the results satisfy
    /// `predicate`, returning the last context that did.
    ///
    /// If the very first move fails, the result is a copy of `self`.
    pub fn move_while<M, P>(&self, step: M, predicate: P) -> Self
    where
        M: Fn(&Self) -> Option<Self>,
        P: Fn(&Self) -> bool,
    {
        let mut ctx = self.clone();
        while let Some(next) = step(&ctx).filter(|c| predicate(c)) {
            ctx = next;
        }
        ctx
    }

    /// Like `move_until`, but tests `self` before moving at all
    pub fn find<P, M>(&self, predicate: P, step: M) -> Option<Self>
    where
        P: Fn(&Self) -> bool,
        M: Fn(&Self) -> Option<Self>,
    {
        if predicate(self) {
            return Some(self.clone());
        }
        self.move_until(step, predicate)
    }

    /// Move to the root by repeatedly moving to the parent
    pub fn to_root(&self) -> Self {
        self.move_while(Context::parent, always)
    }

    /// One step forward in pre-order.
    ///
    /// Only fails on the last node of the tree in pre-order.
    #[instrument(level = "trace", skip_all)]
    pub fn descend(&self) -> Option<Self> {
        first_success(self, "descend", &Self::descend_candidates())
    }

    /// One step backward in pre-order, the inverse of `descend`.
    ///
    /// Only fails on the root.
    #[instrument(level = "trace", skip_all)]
    pub fn ascend(&self) -> Option<Self> {
        first_success(self, "ascend", &Self::ascend_candidates())
    }

    /// One step forward in level order.
    ///
    /// Visits the rest of the level of the focus, left to right, before
    /// moving on to the leftmost node of the next level.
    #[instrument(level = "trace", skip_all)]
    pub fn forward(&self) -> Option<Self> {
        first_success(self, "forward", &Self::forward_candidates())
    }

    /// One step backward in level order, the inverse of `forward`
    #[instrument(level = "trace", skip_all)]
    pub fn backward(&self) -> Option<Self> {
        first_success(self, "backward", &Self::backward_candidates())
    }

    /// Descend to the last node in pre-order
    pub fn descend_to_last(&self) -> Self {
        self.move_while(Context::descend, always)
    }

    /// Ascend to the root
    pub fn ascend_to_root(&self) -> Self {
        self.move_while(Context::ascend, always)
    }

    /// Move forward to the last node in level order
    pub fn forward_to_last(&self) -> Self {
        self.move_while(Context::forward, always)
    }

    /// Move backward to the root
    pub fn backward_to_root(&self) -> Self {
        self.move_while(Context::backward, always)
    }

    /// `descend` exactly `times` times
    pub fn descend_for(&self, times: usize) -> Option<Self> {
        self.move_for(Context::descend, times)
    }

    /// `ascend` exactly `times` times
    pub fn ascend_for(&self, times: usize) -> Option<Self> {
        self.move_for(Context::ascend, times)
    }

    /// `forward` exactly `times` times
    pub fn forward_for(&self, times: usize) -> Option<Self> {
        self.move_for(Context::forward, times)
    }

    /// `backward` exactly `times` times
    pub fn backward_for(&self, times: usize) -> Option<Self> {
        self.move_for(Context::backward, times)
    }

    /// `descend` until the focus satisfies `predicate`
    pub fn descend_until<P>(&self, predicate: P) -> Option<Self>
    where
        P: Fn(&Self) -> bool,
    {
        self.move_until(Context::descend, predicate)
    }

    /// `ascend` until the focus satisfies `predicate`
    pub fn ascend_until<P>(&self, predicate: P) -> Option<Self>
    where
        P: Fn(&Self) -> bool,
    {
        self.move_until(Context::ascend, predicate)
    }

    /// `forward` until the focus satisfies `predicate`
    pub fn forward_until<P>(&self, predicate: P) -> Option<Self>
    where
        P: Fn(&Self) -> bool,
    {
        self.move_until(Context::forward, predicate)
    }

    /// `backward` until the focus satisfies `predicate`
    pub fn backward_until<P>(&self, predicate: P) -> Option<Self>
    where
        P: Fn(&Self) -> bool,
    {
        self.move_until(Context::backward, predicate)
    }

    /// Iterate over this context and every context reached by repeatedly
    /// applying `step`
    pub fn walk<M>(&self, step: M) -> Walk<T, M>
    where
        M: Fn(&Self) -> Option<Self>,
    {
        Walk {
            next: Some(self.clone()),
            step,
        }
    }
}

impl<T> Tree<T>
where
    T: Clone,
{
    /// Iterate over every node of the tree in pre-order
    pub fn pre_order(&self) -> Walk<T, Move<T>> {
        self.clone().enter().walk(Context::descend as Move<T>)
    }

    /// Iterate over every node of the tree in level order
    pub fn level_order(&self) -> Walk<T, Move<T>> {
        self.clone().enter().walk(Context::forward as Move<T>)
    }
}

/// Iterator over the contexts produced by a move, starting with the context
/// it was created from.
#[derive(Debug)]
pub struct Walk<T, M> {
    next: Option<Context<T>>,
    step: M,
}

impl<T, M> Iterator for Walk<T, M>
where
    M: Fn(&Context<T>) -> Option<Context<T>>,
{
    type Item = Context<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = (self.step)(&current);
        Some(current)
    }
}
