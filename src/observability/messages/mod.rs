// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Structured log message types.
//!
//! Every operational event worth logging gets a dedicated message type with a
//! human-readable [`Display`] rendering and a [`StructuredLog`] impl that
//! emits the same event with structured fields attached. Call sites construct
//! the message and either format it or call [`StructuredLog::log`]; the
//! message type owns the level.

use std::fmt::Display;

use tracing::Span;

pub mod parser;
pub mod slices;
pub mod validation;

/// A log event with a fixed level and structured fields.
pub trait StructuredLog: Display {
    /// Emit the event at the level the message type owns.
    fn log(&self);

    /// A span carrying the event's fields, for wrapping related work.
    fn span(&self, name: &str) -> Span;
}
