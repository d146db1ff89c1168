// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Slice generation and ordering.
//!
//! A validated [`WorkflowDocument`](crate::dsl::WorkflowDocument) is expanded
//! into a flat list of atomic slices, then topologically ordered so every
//! slice follows its dependencies. Downstream collaborators persist the
//! ordered list; this crate never executes a slice.

pub mod generator;
pub mod ordering;
pub mod slice;


pub use generator::generate_slices;
pub use ordering::order_slices;
pub use slice::{statistics, ParameterValue, Slice, SliceKind, SliceStatistics, SliceStatus};
