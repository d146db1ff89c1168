// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Workflow DSL parsing.
//!
//! The DSL is a line-oriented format: `@var` declarations, `@task` blocks
//! with free-text descriptions, `@tool` invocations, `@if`/`@else`
//! conditionals and `@next` jumps, plus `#` comment lines that may carry
//! document metadata. [`parse_document`] is the front door; it scans the text
//! and validates every cross-reference before handing the document back.

pub mod consts;
mod cursor;
pub mod document;
pub mod loader;
pub mod parser;
pub mod validation;

#[cfg(test)]
mod integration_tests;

pub use document::{
    Condition, DocumentSummary, Task, ToolCall, ValueType, Variable, WorkflowDocument,
};
pub use loader::load_document;
pub use parser::parse;
pub use validation::validate_references;

use crate::errors::ParseError;
use crate::observability::messages::parser::DocumentParsed;
use crate::observability::messages::StructuredLog;

/// Parse DSL text and validate it, returning a document whose jump targets
/// and variable references all resolve.
pub fn parse_document(text: &str) -> Result<WorkflowDocument, ParseError> {
    let document = parse(text)?;
    validate_references(&document)?;

    DocumentParsed {
        task_count: document.tasks.len(),
        variable_count: document.variables.len(),
        tool_count: document.tool_names().len(),
    }
    .log();

    Ok(document)
}
