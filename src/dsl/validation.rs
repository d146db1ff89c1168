// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Whole-document reference validation.
//!
//! Runs after parsing, over the finished [`WorkflowDocument`]: every jump
//! target must name a declared task or the terminal sentinel, and every
//! interpolated variable must be declared. Validation is fail-fast; the first
//! violation is returned and logged.

use std::collections::HashSet;

use crate::dsl::consts::END_TARGET;
use crate::dsl::document::WorkflowDocument;
use crate::errors::ReferenceError;
use crate::observability::messages::validation::ReferenceViolation;
use crate::observability::messages::StructuredLog;

/// Check every cross-reference in `document`.
///
/// Tasks are visited in declaration order; within a task, the default jump is
/// checked first, then conditional branches in order, then interpolated
/// variables in name order.
pub fn validate_references(document: &WorkflowDocument) -> Result<(), ReferenceError> {
    let known_targets: HashSet<&str> = document
        .tasks
        .iter()
        .map(|task| task.name.as_str())
        .chain(std::iter::once(END_TARGET))
        .collect();
    let declared_variables: HashSet<&str> = document.variable_names().into_iter().collect();

    for task in &document.tasks {
        if let Some(target) = &task.default_next {
            if !known_targets.contains(target.as_str()) {
                return Err(reject(ReferenceError::UnknownJumpTarget {
                    task: task.name.clone(),
                    target: target.clone(),
                }));
            }
        }

        for condition in &task.conditions {
            for target in [&condition.true_next, &condition.false_next]
                .into_iter()
                .flatten()
            {
                if !known_targets.contains(target.as_str()) {
                    return Err(reject(ReferenceError::UnknownBranchTarget {
                        task: task.name.clone(),
                        target: target.clone(),
                    }));
                }
            }
        }

        for variable in &task.variables_used {
            if !declared_variables.contains(variable.as_str()) {
                return Err(reject(ReferenceError::UndefinedVariable {
                    task: task.name.clone(),
                    variable: variable.clone(),
                }));
            }
        }
    }

    Ok(())
}

fn reject(error: ReferenceError) -> ReferenceError {
    ReferenceViolation { error: &error }.log();
    error
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsl::parser::parse;

    #[test]
    fn valid_document_passes() {
        let doc = parse(
            "@var severity = \"\"\n\
             @task triage\n\
             Severity is {{severity}}\n\
             @if severity == \"high\"\n\
             @next escalate\n\
             @else\n\
             @next END\n\
             @task escalate\n\
             @next END",
        )
        .unwrap();
        assert!(validate_references(&doc).is_ok());
    }

    #[test]
    fn end_is_always_a_valid_target() {
        let doc = parse("@task only\n@next END").unwrap();
        assert!(validate_references(&doc).is_ok());
    }

    #[test]
    fn unknown_default_next_is_rejected() {
        let doc = parse("@task t1\n@next nowhere").unwrap();
        let err = validate_references(&doc).unwrap_err();
        assert_eq!(
            err,
            ReferenceError::UnknownJumpTarget {
                task: "t1".to_string(),
                target: "nowhere".to_string(),
            }
        );
        assert_eq!(
            err.to_string(),
            "Task 't1' references unknown next task: 'nowhere'"
        );
    }

    #[test]
    fn unknown_branch_target_is_rejected() {
        let doc = parse("@task t1\n@if ready\n@next nowhere").unwrap();
        let err = validate_references(&doc).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Task 't1' condition references unknown task: 'nowhere'"
        );
    }

    #[test]
    fn undefined_variable_is_rejected() {
        let doc = parse("@task t1\nHello {{who}}").unwrap();
        let err = validate_references(&doc).unwrap_err();
        assert_eq!(err.to_string(), "Task 't1' uses undefined variable: 'who'");
        assert_eq!(err.task(), "t1");
        assert_eq!(err.target(), "who");
        assert_eq!(err.line(), 0);
    }

    #[test]
    fn first_violation_wins() {
        // Both a dangling jump and an undefined variable exist; the jump on
        // the earlier task is reported
        let doc = parse("@task t1\n@next nowhere\n@task t2\n{{ghost}}").unwrap();
        let err = validate_references(&doc).unwrap_err();
        assert!(matches!(err, ReferenceError::UnknownJumpTarget { .. }));
    }
}
