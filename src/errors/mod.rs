// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod ordering;
mod parse;
mod pipeline;

pub use ordering::CycleError;
pub use parse::{ParseError, ReferenceError, SyntaxError};
pub use pipeline::PipelineError;
