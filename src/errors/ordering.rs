// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Error raised when the slice dependency graph cannot be ordered.

use std::error::Error;
use std::fmt;

/// The slice dependency graph is not a DAG, or contains dependencies on slice
/// ids that are not present in the set being ordered.
///
/// `remaining` holds the ids of every slice that could not be assigned an
/// execution order, in declaration order. The ordered output never silently
/// omits slices; a short result is always reported through this error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleError {
    /// Ids of the slices left unordered when the queue drained
    pub remaining: Vec<String>,
}

impl fmt::Display for CycleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Cycle or unresolved dependency detected among {} slice(s): {}",
            self.remaining.len(),
            self.remaining.join(", ")
        )
    }
}

impl Error for CycleError {}
