// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for slice generation and ordering events.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Slices were generated from a parsed document.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use flowslice::observability::messages::slices::SlicesGenerated;
///
/// let msg = SlicesGenerated {
///     slice_count: 9,
///     task_count: 4,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct SlicesGenerated {
    pub slice_count: usize,
    pub task_count: usize,
}

impl Display for SlicesGenerated {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Generated {} slices from {} tasks",
            self.slice_count, self.task_count
        )
    }
}

impl StructuredLog for SlicesGenerated {
    fn log(&self) {
        tracing::info!(
            slice_count = self.slice_count,
            task_count = self.task_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::INFO,
            "span_name",
            name = name,
            slice_count = self.slice_count,
            task_count = self.task_count,
        )
    }
}

/// Slices were ordered into an executable sequence.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use flowslice::observability::messages::slices::SlicesOrdered;
///
/// let msg = SlicesOrdered { slice_count: 9 };
///
/// tracing::info!("{}", msg);
/// ```
pub struct SlicesOrdered {
    pub slice_count: usize,
}

impl Display for SlicesOrdered {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Ordered {} slices", self.slice_count)
    }
}

impl StructuredLog for SlicesOrdered {
    fn log(&self) {
        tracing::info!(
            slice_count = self.slice_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::INFO,
            "span_name",
            name = name,
            slice_count = self.slice_count,
        )
    }
}

/// Dependency resolution stalled before every slice was placed.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use flowslice::observability::messages::slices::SliceOrderingStalled;
///
/// let remaining = vec!["slice_3".to_string(), "slice_4".to_string()];
/// let msg = SliceOrderingStalled {
///     remaining: &remaining,
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct SliceOrderingStalled<'a> {
    pub remaining: &'a [String],
}

impl Display for SliceOrderingStalled<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Slice ordering stalled with {} slice(s) unplaced: {}",
            self.remaining.len(),
            self.remaining.join(", ")
        )
    }
}

impl StructuredLog for SliceOrderingStalled<'_> {
    fn log(&self) {
        tracing::error!(
            remaining = self.remaining.join(", "),
            remaining_count = self.remaining.len(),
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::ERROR,
            "span_name",
            name = name,
            remaining = self.remaining.join(", "),
            remaining_count = self.remaining.len(),
        )
    }
}
