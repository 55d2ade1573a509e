// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Rosezip
//!
//! An immutable rose tree and a zipper to move around in it. It has three
//! parts:
//!
//! - `Tree`, an ordered n-ary tree whose nodes are shared between copies.
//! - `Context`, a cursor into a tree that can move to any relative of the
//!   node it points at, without walking from the root.
//! - The traversals, `descend`/`ascend` in pre-order and `forward`/`backward`
//!   in level order, composed from those relative moves.
//!
//! Moves never mutate a context, they return a new one, or `None` if there is
//! nowhere to go.

#![deny(missing_docs)]

mod context;
mod error;
mod kin;
mod location;
pub mod predicate;
mod search;
mod tree;
mod viz;
mod walk;

#[cfg(feature = "arbitrary")]
mod fuzz;

pub use context::Context;
pub use error::Error;
pub use kin::{Order, Scan};
pub use location::Location;
pub use tree::Tree;
pub use walk::{Move, Walk};
