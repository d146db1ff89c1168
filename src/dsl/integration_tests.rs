// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Integration tests for the DSL subsystem: scanner, task parser and
//! reference validation working together over realistic documents.

use crate::dsl::parse_document;
use crate::errors::{ParseError, ReferenceError};

const COMPLAINT_WORKFLOW: &str = r#"
# Source: cases/customer_complaint.txt
# Generated at: 2025-07-15T10:08:09
# Provider: openai
# Model: deepseek-chat

@var severity = ""
@var customer_type = ""

@task intake Record the complaint
Capture the complaint text and classify its severity.
@tool crm_lookup fetch the customer record
Customer tier: {{customer_type}}
@next triage

@task triage Decide the route
Current severity: {{severity}}
@tool severity_classifier score the complaint
@if severity == "high" OR customer_type == "VIP"
@next escalate
@else
@next archive

@task escalate Hand off to a human agent
@tool ticket_update mark the ticket escalated
@next END

@task archive Close quietly
@tool ticket_update mark the ticket resolved
@next END
"#;

#[test]
fn full_document_parses_with_every_construct() {
    let doc = parse_document(COMPLAINT_WORKFLOW).unwrap();

    assert_eq!(doc.metadata.get("source").unwrap(), "cases/customer_complaint.txt");
    assert_eq!(doc.metadata.get("provider").unwrap(), "openai");

    assert_eq!(doc.variable_names(), vec!["severity", "customer_type"]);
    assert_eq!(doc.tasks.len(), 4);

    let intake = doc.task("intake").unwrap();
    assert_eq!(intake.title, "Record the complaint");
    assert_eq!(intake.default_next.as_deref(), Some("triage"));
    assert_eq!(intake.tools[0].name, "crm_lookup");
    // The tool appeared after the first description line
    assert_eq!(intake.tools[0].position, 1);
    assert!(intake.variables_used.contains("customer_type"));

    let triage = doc.task("triage").unwrap();
    let condition = &triage.conditions[0];
    assert_eq!(condition.true_next.as_deref(), Some("escalate"));
    assert_eq!(condition.false_next.as_deref(), Some("archive"));
    assert_eq!(triage.default_next, None);

    assert_eq!(
        doc.tool_names(),
        vec!["crm_lookup", "severity_classifier", "ticket_update"]
    );

    let summary = doc.summary();
    assert_eq!(summary.task_count, 4);
    assert_eq!(summary.tools_required.len(), 3);
}

#[test]
fn unknown_jump_target_is_a_reference_error() {
    let err = parse_document("@task t1 Title\n@next t_missing").unwrap_err();
    match err {
        ParseError::Reference(ReferenceError::UnknownJumpTarget { task, target }) => {
            assert_eq!(task, "t1");
            assert_eq!(target, "t_missing");
        }
        other => panic!("expected unknown jump target, got {other}"),
    }
}

#[test]
fn undeclared_interpolation_is_a_reference_error() {
    let err = parse_document("@var sev = \"\"\n@task t1\nSeverity: {{sev2}}").unwrap_err();
    match &err {
        ParseError::Reference(ReferenceError::UndefinedVariable { task, variable }) => {
            assert_eq!(task, "t1");
            assert_eq!(variable, "sev2");
        }
        other => panic!("expected undefined variable, got {other}"),
    }
    assert_eq!(err.line(), 0);
}

#[test]
fn syntax_error_carries_its_line_through_parse_error() {
    let err = parse_document("@var good = \"\"\n@var broken\n").unwrap_err();
    assert_eq!(err.line(), 2);
    assert!(err.to_string().starts_with("Line 2: Invalid variable syntax"));
}

#[test]
fn reference_errors_render_with_line_zero() {
    let err = parse_document("@task t1\n@next nowhere").unwrap_err();
    assert!(err.to_string().starts_with("Line 0: "));
}

#[test]
fn failure_yields_no_partial_document() {
    // The error is the only output; the signature makes a partial result
    // unrepresentable. The same input must keep failing identically.
    let first = parse_document("@task t1\n@next nowhere").unwrap_err();
    let second = parse_document("@task t1\n@next nowhere").unwrap_err();
    assert_eq!(first, second);
}
