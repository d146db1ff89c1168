// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Slice generation: expand a validated document into a flat slice list.
//!
//! Generation order is fixed: one `variable_init` slice per declared variable,
//! then per task in declaration order one `tool_call` slice per tool and,
//! nested under each tool, one `condition_check` slice per condition of the
//! owning task. The nesting makes condition slices a tool-by-condition
//! cross-product; a task with T tools and C conditions yields T*C condition
//! slices, each depending on the tool slice it sits under.
//!
//! Ids are counter-based, so generating twice from the same document produces
//! identical slices. The `order_index` set here mirrors creation order and is
//! overwritten by [`order_slices`](crate::slices::order_slices).

use std::collections::BTreeMap;

use serde_json::json;

use crate::dsl::consts::VARIABLE_SIGIL;
use crate::dsl::document::{Condition, Task, ToolCall, Variable, WorkflowDocument};
use crate::observability::messages::slices::SlicesGenerated;
use crate::observability::messages::StructuredLog;
use crate::slices::slice::{ParameterValue, Slice, SliceKind, SliceStatus};

/// Expand `document` into its flat, unordered slice list.
pub fn generate_slices(document: &WorkflowDocument) -> Vec<Slice> {
    let mut counter = 0;
    let mut slices = Vec::new();

    for variable in &document.variables {
        slices.push(variable_slice(&mut counter, variable));
    }

    for task in &document.tasks {
        for tool in &task.tools {
            let tool_slice = tool_slice(&mut counter, task, tool);
            let tool_id = tool_slice.id.clone();
            slices.push(tool_slice);

            for condition in &task.conditions {
                slices.push(condition_slice(&mut counter, task, condition, &tool_id));
            }
        }
    }

    SlicesGenerated {
        slice_count: slices.len(),
        task_count: document.tasks.len(),
    }
    .log();

    slices
}

fn variable_slice(counter: &mut usize, variable: &Variable) -> Slice {
    *counter += 1;
    Slice {
        id: format!("var_{}_{}", counter, variable.name),
        name: format!("Initialize variable: {}", variable.name),
        description: format!("Set the initial value of variable {}", variable.name),
        kind: SliceKind::VariableInit,
        dependencies: Vec::new(),
        parameters: json!({
            "variable_name": variable.name,
            "variable_value": variable.default_value,
            "operation": "initialize",
        }),
        expected_output: Some(variable.name.clone()),
        status: SliceStatus::Pending,
        order_index: *counter,
    }
}

fn tool_slice(counter: &mut usize, task: &Task, tool: &ToolCall) -> Slice {
    *counter += 1;
    Slice {
        id: format!("tool_{}_{}", counter, tool.name),
        name: format!("Call tool: {}", tool.name),
        description: format!("Invoke the {} tool in task {}", tool.name, task.name),
        kind: SliceKind::ToolCall,
        dependencies: Vec::new(),
        parameters: json!({
            "tool_name": tool.name,
            "tool_parameters": tool_parameters(task, tool),
            "task_context": task.name,
        }),
        expected_output: Some(format!("{}_result", tool.name)),
        status: SliceStatus::Pending,
        order_index: *counter,
    }
}

fn condition_slice(
    counter: &mut usize,
    task: &Task,
    condition: &Condition,
    tool_slice_id: &str,
) -> Slice {
    *counter += 1;
    let id = format!("cond_{}_{}", counter, task.name);
    let expected_output = format!("{}_result", id);
    Slice {
        id,
        name: format!("Condition check: {}", task.name),
        description: format!("Evaluate a branch condition in task {}", task.name),
        kind: SliceKind::ConditionCheck,
        dependencies: vec![tool_slice_id.to_string()],
        parameters: json!({
            "condition_expression": condition.expression,
            "true_next": condition.true_next,
            "false_next": condition.false_next,
            "task_context": task.name,
        }),
        expected_output: Some(expected_output),
        status: SliceStatus::Pending,
        order_index: *counter,
    }
}

/// The raw parameter map of a tool call, passed through sigil resolution:
/// the tool's description as a literal, plus one variable reference per
/// variable the owning task interpolates.
fn tool_parameters(task: &Task, tool: &ToolCall) -> BTreeMap<String, ParameterValue> {
    let mut parameters = BTreeMap::new();
    parameters.insert(
        "description".to_string(),
        ParameterValue::resolve(&tool.description),
    );
    for variable in &task.variables_used {
        parameters.insert(
            variable.clone(),
            ParameterValue::resolve(&format!("{}{}", VARIABLE_SIGIL, variable)),
        );
    }
    parameters
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsl::parser::parse;

    #[test]
    fn variable_slices_come_first_with_no_dependencies() {
        let doc = parse("@var a = \"1\"\n@var b = \"2\"\n@task t1\n@tool work").unwrap();
        let slices = generate_slices(&doc);

        assert_eq!(slices.len(), 3);
        assert_eq!(slices[0].id, "var_1_a");
        assert_eq!(slices[0].kind, SliceKind::VariableInit);
        assert!(slices[0].dependencies.is_empty());
        assert_eq!(slices[0].parameters["variable_value"], "1");
        assert_eq!(slices[0].parameters["operation"], "initialize");
        assert_eq!(slices[0].expected_output.as_deref(), Some("a"));
        assert_eq!(slices[1].id, "var_2_b");
    }

    #[test]
    fn tool_slices_carry_resolved_parameters() {
        let doc = parse(
            "@var sev = \"\"\n\
             @task triage\n\
             Severity is {{sev}}\n\
             @tool crm_lookup fetch the account",
        )
        .unwrap();
        let slices = generate_slices(&doc);

        let tool = &slices[1];
        assert_eq!(tool.id, "tool_2_crm_lookup");
        assert_eq!(tool.kind, SliceKind::ToolCall);
        assert_eq!(tool.parameters["tool_name"], "crm_lookup");
        assert_eq!(tool.parameters["task_context"], "triage");
        assert_eq!(tool.expected_output.as_deref(), Some("crm_lookup_result"));

        let params = &tool.parameters["tool_parameters"];
        assert_eq!(params["description"]["type"], "literal");
        assert_eq!(params["description"]["value"], "fetch the account");
        assert_eq!(params["sev"]["type"], "variable_reference");
        assert_eq!(params["sev"]["variable_name"], "sev");
        assert_eq!(params["sev"]["original_value"], "$sev");
    }

    #[test]
    fn condition_slices_depend_on_their_tool_slice() {
        let doc = parse(
            "@task t1\n\
             @tool check\n\
             @if ready\n\
             @next END",
        )
        .unwrap();
        let slices = generate_slices(&doc);

        assert_eq!(slices.len(), 2);
        let condition = &slices[1];
        assert_eq!(condition.id, "cond_2_t1");
        assert_eq!(condition.kind, SliceKind::ConditionCheck);
        assert_eq!(condition.dependencies, vec!["tool_1_check"]);
        assert_eq!(condition.parameters["condition_expression"], "ready");
        assert_eq!(condition.parameters["true_next"], "END");
        assert_eq!(condition.parameters["false_next"], serde_json::Value::Null);
        assert_eq!(condition.expected_output.as_deref(), Some("cond_2_t1_result"));
    }

    #[test]
    fn conditions_fan_out_per_tool() {
        // 2 tools x 2 conditions: each tool slice is followed by a condition
        // slice per condition, depending on that tool
        let doc = parse(
            "@task t1\n\
             @tool first\n\
             @tool second\n\
             @if a\n\
             @next END\n\
             @if b\n\
             @next END",
        )
        .unwrap();
        let slices = generate_slices(&doc);

        assert_eq!(slices.len(), 6);
        assert_eq!(slices[0].kind, SliceKind::ToolCall);
        assert_eq!(slices[1].dependencies, vec![slices[0].id.clone()]);
        assert_eq!(slices[2].dependencies, vec![slices[0].id.clone()]);
        assert_eq!(slices[3].kind, SliceKind::ToolCall);
        assert_eq!(slices[4].dependencies, vec![slices[3].id.clone()]);
        assert_eq!(slices[5].dependencies, vec![slices[3].id.clone()]);
    }

    #[test]
    fn generation_is_deterministic() {
        let doc = parse("@var a = \"\"\n@task t1\n@tool work\n@if done\n@next END").unwrap();
        assert_eq!(generate_slices(&doc), generate_slices(&doc));
    }

    #[test]
    fn a_task_without_tools_yields_no_slices() {
        let doc = parse("@task empty Just words\nNothing to execute here").unwrap();
        assert!(generate_slices(&doc).is_empty());
    }
}
