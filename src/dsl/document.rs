// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Parsed representation of a workflow document.
//!
//! A [`WorkflowDocument`] is built once per parse call from immutable input
//! text and handed to slice generation; the core never mutates it afterwards.
//! Variables and tasks keep their declaration order and are unique by name
//! (the parser rejects duplicates), so the `Vec`s double as insertion-ordered
//! maps through the by-name accessors.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

/// Type of a declared variable's value. The grammar currently only admits
/// double-quoted string literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueType {
    String,
}

/// A `@var` declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variable {
    pub name: String,
    pub default_value: String,
    pub value_type: ValueType,
}

/// A `@tool` invocation inside a task body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolCall {
    pub name: String,
    pub description: String,
    /// Index of the description line the call appeared after, within its task
    pub position: usize,
}

/// An `@if` block with its branch targets.
///
/// Branch targets are task names or the terminal sentinel
/// [`END_TARGET`](crate::dsl::consts::END_TARGET).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    pub expression: String,
    pub true_next: Option<String>,
    pub false_next: Option<String>,
}

/// A named `@task` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub name: String,
    pub title: String,
    /// Free-text description lines, in order of appearance
    pub description: Vec<String>,
    pub tools: Vec<ToolCall>,
    pub conditions: Vec<Condition>,
    /// Variables interpolated in the description, deduplicated and sorted
    pub variables_used: BTreeSet<String>,
    /// Jump target of a task-level `@next`, if any
    pub default_next: Option<String>,
}

/// The structured result of parsing one DSL document: variables, tasks and
/// document metadata, all in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkflowDocument {
    pub variables: Vec<Variable>,
    pub tasks: Vec<Task>,
    pub metadata: HashMap<String, String>,
}

impl WorkflowDocument {
    /// Look up a declared variable by name.
    pub fn variable(&self, name: &str) -> Option<&Variable> {
        self.variables.iter().find(|variable| variable.name == name)
    }

    /// Look up a task by name.
    pub fn task(&self, name: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.name == name)
    }

    /// Names of all declared variables, in declaration order.
    pub fn variable_names(&self) -> Vec<&str> {
        self.variables
            .iter()
            .map(|variable| variable.name.as_str())
            .collect()
    }

    /// Names of all tools invoked anywhere in the document, deduplicated,
    /// in first-appearance order.
    pub fn tool_names(&self) -> Vec<&str> {
        let mut seen = BTreeSet::new();
        let mut names = Vec::new();
        for task in &self.tasks {
            for tool in &task.tools {
                if seen.insert(tool.name.as_str()) {
                    names.push(tool.name.as_str());
                }
            }
        }
        names
    }

    /// Summary counts the API collaborator exposes alongside a stored task.
    pub fn summary(&self) -> DocumentSummary {
        DocumentSummary {
            variables: self
                .variable_names()
                .into_iter()
                .map(str::to_owned)
                .collect(),
            tools_required: self.tool_names().into_iter().map(str::to_owned).collect(),
            task_count: self.tasks.len(),
        }
    }
}

/// Lightweight summary of a parsed document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSummary {
    pub variables: Vec<String>,
    pub tools_required: Vec<String>,
    pub task_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_document() -> WorkflowDocument {
        WorkflowDocument {
            variables: vec![Variable {
                name: "severity".to_string(),
                default_value: String::new(),
                value_type: ValueType::String,
            }],
            tasks: vec![
                Task {
                    name: "triage".to_string(),
                    title: "Triage".to_string(),
                    description: vec![],
                    tools: vec![
                        ToolCall {
                            name: "crm_lookup".to_string(),
                            description: String::new(),
                            position: 0,
                        },
                        ToolCall {
                            name: "crm_update".to_string(),
                            description: String::new(),
                            position: 0,
                        },
                    ],
                    conditions: vec![],
                    variables_used: BTreeSet::new(),
                    default_next: None,
                },
                Task {
                    name: "escalate".to_string(),
                    title: String::new(),
                    description: vec![],
                    tools: vec![ToolCall {
                        name: "crm_lookup".to_string(),
                        description: String::new(),
                        position: 0,
                    }],
                    conditions: vec![],
                    variables_used: BTreeSet::new(),
                    default_next: None,
                },
            ],
            metadata: HashMap::new(),
        }
    }

    #[test]
    fn lookup_by_name() {
        let doc = sample_document();
        assert!(doc.variable("severity").is_some());
        assert!(doc.variable("missing").is_none());
        assert_eq!(doc.task("escalate").unwrap().name, "escalate");
        assert!(doc.task("missing").is_none());
    }

    #[test]
    fn tool_names_are_deduplicated_in_first_appearance_order() {
        let doc = sample_document();
        assert_eq!(doc.tool_names(), vec!["crm_lookup", "crm_update"]);
    }

    #[test]
    fn summary_counts() {
        let summary = sample_document().summary();
        assert_eq!(summary.variables, vec!["severity"]);
        assert_eq!(summary.tools_required, vec!["crm_lookup", "crm_update"]);
        assert_eq!(summary.task_count, 2);
    }
}
