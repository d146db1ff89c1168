// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Composite error for the end-to-end pipeline entry points.
//!
//! All variants implement `std::error::Error` via the `thiserror` crate for
//! consistent error handling. Callers translate `Parse` into a client input
//! diagnostic (it carries a 1-based line number) and `Cycle` into a
//! server-side processing error, since a cycle indicates a structural defect
//! rather than a user typo.

use thiserror::Error;

use super::{CycleError, ParseError};

/// Errors surfaced by [`load_document`](crate::dsl::load_document) and
/// [`compile`](crate::compile).
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The document file could not be read
    #[error("failed to read workflow document: {0}")]
    Io(#[from] std::io::Error),

    /// The document text was rejected by the parser or the reference validator
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The generated slice graph could not be ordered
    #[error(transparent)]
    Cycle(#[from] CycleError),
}
