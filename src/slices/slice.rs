// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The slice record: one atomic, independently trackable unit of work
//! derived from a parsed task.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::dsl::consts::VARIABLE_SIGIL;

/// What a slice does when executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SliceKind {
    VariableInit,
    ToolCall,
    ConditionCheck,
}

/// Execution lifecycle state. Slices leave this crate as `Pending`; the
/// execution collaborator owns the remaining transitions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SliceStatus {
    #[default]
    Pending,
    Running,
    Completed,
    Failed,
}

/// A parameter value after sigil resolution: either a literal or a reference
/// to a declared variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ParameterValue {
    Literal {
        value: String,
    },
    VariableReference {
        variable_name: String,
        original_value: String,
    },
}

impl ParameterValue {
    /// Resolve a raw parameter value. Values prefixed with the variable sigil
    /// become references; everything else is a literal.
    pub fn resolve(raw: &str) -> Self {
        match raw.strip_prefix(VARIABLE_SIGIL) {
            Some(variable_name) => ParameterValue::VariableReference {
                variable_name: variable_name.to_string(),
                original_value: raw.to_string(),
            },
            None => ParameterValue::Literal {
                value: raw.to_string(),
            },
        }
    }
}

/// One execution unit in the compiled workflow.
///
/// Produced once by [`generate_slices`](crate::slices::generate_slices),
/// ordered once by [`order_slices`](crate::slices::order_slices), never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slice {
    /// Unique within one generation pass; counter-based, so re-compiling the
    /// same document yields the same ids
    pub id: String,
    pub name: String,
    pub description: String,
    pub kind: SliceKind,
    /// Ids of slices that must execute before this one
    pub dependencies: Vec<String>,
    pub parameters: serde_json::Value,
    pub expected_output: Option<String>,
    pub status: SliceStatus,
    /// 1-based position in the ordered sequence, assigned by the resolver
    pub order_index: usize,
}

/// Aggregate counts over a slice list, for reporting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliceStatistics {
    pub total_slices: usize,
    pub kind_counts: BTreeMap<SliceKind, usize>,
    pub max_dependencies: usize,
    pub avg_dependencies: f64,
}

/// Summarize a slice list.
pub fn statistics(slices: &[Slice]) -> SliceStatistics {
    let mut kind_counts = BTreeMap::new();
    let mut total_deps = 0;
    let mut max_dependencies = 0;

    for slice in slices {
        *kind_counts.entry(slice.kind).or_insert(0) += 1;
        total_deps += slice.dependencies.len();
        max_dependencies = max_dependencies.max(slice.dependencies.len());
    }

    SliceStatistics {
        total_slices: slices.len(),
        kind_counts,
        max_dependencies,
        avg_dependencies: if slices.is_empty() {
            0.0
        } else {
            total_deps as f64 / slices.len() as f64
        },
    }
}
