// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for reference validation failures.

use crate::errors::ReferenceError;
use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A cross-reference in the document failed to resolve.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use flowslice::errors::ReferenceError;
/// use flowslice::observability::messages::validation::ReferenceViolation;
///
/// let error = ReferenceError::UnknownJumpTarget {
///     task: "triage".to_string(),
///     target: "nowhere".to_string(),
/// };
/// let msg = ReferenceViolation { error: &error };
///
/// tracing::error!("{}", msg);
/// ```
pub struct ReferenceViolation<'a> {
    pub error: &'a ReferenceError,
}

impl Display for ReferenceViolation<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl StructuredLog for ReferenceViolation<'_> {
    fn log(&self) {
        tracing::error!(
            task = self.error.task(),
            target = self.error.target(),
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::ERROR,
            "span_name",
            name = name,
            task = self.error.task(),
            target = self.error.target(),
        )
    }
}
