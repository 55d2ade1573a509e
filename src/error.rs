// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use thiserror::Error;

/// A violated contract at a public entry point.
///
/// Failing to find a relative is not an error, lookups return `None` for
/// that. These are raised for malformed input only.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An index past the end of a list of children
    #[error("index {index} is out of bounds for {len} children")]
    OutOfBounds {
        /// The offending index
        index: usize,
        /// The number of children at the time
        len: usize,
    },
    /// A context was rebuilt from an empty list of locations
    #[error("a context needs at least one location to focus on")]
    EmptyLocations,
}
