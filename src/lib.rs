// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod dsl;        // workflow DSL parsing + validation
pub mod errors;     // error handling
pub mod observability;
pub mod slices;     // slice generation + ordering

use errors::PipelineError;
use slices::Slice;

/// Compile DSL text end to end: parse, validate, generate and order.
///
/// The returned slices carry contiguous 1-based `order_index` values and are
/// ready for the persistence collaborator. Any failure discards all partial
/// state; there is no partially compiled output.
pub fn compile(text: &str) -> Result<Vec<Slice>, PipelineError> {
    let document = dsl::parse_document(text)?;
    let generated = slices::generate_slices(&document);
    Ok(slices::order_slices(generated)?)
}
