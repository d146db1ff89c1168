// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Filesystem entry point for workflow documents.

use std::fs;
use std::path::Path;

use crate::dsl::document::WorkflowDocument;
use crate::dsl::parse_document;
use crate::errors::PipelineError;

/// Read a DSL file and parse it into a validated [`WorkflowDocument`].
pub fn load_document(path: impl AsRef<Path>) -> Result<WorkflowDocument, PipelineError> {
    let text = fs::read_to_string(path)?;
    Ok(parse_document(&text)?)
}
