// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for DSL parsing events.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A workflow document was parsed and validated.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use flowslice::observability::messages::parser::DocumentParsed;
///
/// let msg = DocumentParsed {
///     task_count: 4,
///     variable_count: 2,
///     tool_count: 3,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct DocumentParsed {
    pub task_count: usize,
    pub variable_count: usize,
    pub tool_count: usize,
}

impl Display for DocumentParsed {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Parsed workflow document: {} tasks, {} variables, {} tools",
            self.task_count, self.variable_count, self.tool_count
        )
    }
}

impl StructuredLog for DocumentParsed {
    fn log(&self) {
        tracing::info!(
            task_count = self.task_count,
            variable_count = self.variable_count,
            tool_count = self.tool_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::INFO,
            "span_name",
            name = name,
            task_count = self.task_count,
            variable_count = self.variable_count,
            tool_count = self.tool_count,
        )
    }
}
