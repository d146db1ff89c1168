// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Directive scanner and task block parser.
//!
//! The document is consumed line by line through an explicit [`Cursor`];
//! each sub-parser leaves the cursor at the first line it did not consume.
//! Directive lines are matched with small line-shape matchers (prefix check
//! plus split) rather than regular expressions, and the parser keeps no state
//! between invocations: every call owns a fresh accumulator that becomes the
//! returned [`WorkflowDocument`].
//!
//! The scanner alone never resolves cross-references; pair it with
//! [`validate_references`](super::validate_references) or use
//! [`parse_document`](super::parse_document) for the combined contract.

use std::collections::BTreeSet;

use crate::dsl::consts::{
    COMMENT_MARKER, ELSE_MARKER, IF_MARKER, INTERPOLATION_CLOSE, INTERPOLATION_OPEN, NEXT_MARKER,
    TASK_MARKER, TOOL_MARKER, VAR_MARKER,
};
use crate::dsl::cursor::Cursor;
use crate::dsl::document::{Condition, Task, ToolCall, ValueType, Variable, WorkflowDocument};
use crate::errors::SyntaxError;

/// Recognized metadata comment prefixes and the keys they populate.
const METADATA_KEYS: [(&str, &str); 4] = [
    ("# Source:", "source"),
    ("# Generated at:", "generated_at"),
    ("# Provider:", "provider"),
    ("# Model:", "model"),
];

/// Parse DSL text into a [`WorkflowDocument`] without reference validation.
///
/// Fails with a [`SyntaxError`] carrying the 1-based line number of the first
/// malformed directive. Duplicate variable or task names are rejected at the
/// re-declaring line.
pub fn parse(text: &str) -> Result<WorkflowDocument, SyntaxError> {
    let mut cursor = Cursor::new(text);
    let mut document = WorkflowDocument::default();

    while !cursor.at_end() {
        let line = cursor.peek().unwrap_or_default();
        if line.is_empty() {
            cursor.advance();
        } else if line.starts_with(COMMENT_MARKER) {
            scan_metadata(line, &mut document);
            cursor.advance();
        } else if line.starts_with(VAR_MARKER) {
            let variable = parse_variable(line, cursor.line_number())?;
            if document.variable(&variable.name).is_some() {
                return Err(SyntaxError::new(
                    cursor.line_number(),
                    format!("Duplicate variable name: '{}'", variable.name),
                ));
            }
            document.variables.push(variable);
            cursor.advance();
        } else if line.starts_with(TASK_MARKER) {
            let task = parse_task(&mut cursor)?;
            if document.task(&task.name).is_some() {
                return Err(SyntaxError::new(
                    cursor.line_number(),
                    format!("Duplicate task name: '{}'", task.name),
                ));
            }
            document.tasks.push(task);
        } else {
            // Stray text outside any task carries no meaning
            cursor.advance();
        }
    }

    Ok(document)
}

/// Populate document metadata from a recognized comment line; all other
/// comments are ignored.
fn scan_metadata(line: &str, document: &mut WorkflowDocument) {
    for (prefix, key) in METADATA_KEYS {
        if let Some(rest) = line.strip_prefix(prefix) {
            document
                .metadata
                .insert(key.to_string(), rest.trim().to_string());
            return;
        }
    }
}

/// Parse a `@var name = "value"` declaration.
fn parse_variable(line: &str, line_number: usize) -> Result<Variable, SyntaxError> {
    let invalid = || SyntaxError::new(line_number, format!("Invalid variable syntax: {}", line));

    let rest = directive_rest(line, VAR_MARKER).ok_or_else(invalid)?;
    let (name, rest) = leading_identifier(rest);
    if name.is_empty() {
        return Err(invalid());
    }
    let rest = rest.trim_start().strip_prefix('=').ok_or_else(invalid)?;
    let rest = rest.trim_start().strip_prefix('"').ok_or_else(invalid)?;
    let end = rest.find('"').ok_or_else(invalid)?;

    Ok(Variable {
        name: name.to_string(),
        default_value: rest[..end].to_string(),
        value_type: ValueType::String,
    })
}

/// Parse a `@task` header and its body. On return the cursor sits on the next
/// `@task` line or at end of input.
fn parse_task(cursor: &mut Cursor<'_>) -> Result<Task, SyntaxError> {
    let header = cursor.peek().unwrap_or_default();
    let (name, title) = parse_task_header(header, cursor.line_number())?;
    cursor.advance();

    let mut description: Vec<String> = Vec::new();
    let mut tools = Vec::new();
    let mut conditions = Vec::new();
    let mut variables_used = BTreeSet::new();
    let mut default_next = None;

    while let Some(line) = cursor.peek() {
        if line.is_empty() {
            cursor.advance();
        } else if line.starts_with(TASK_MARKER) {
            // Next task begins; leave the boundary for the outer loop
            break;
        } else if line.starts_with(TOOL_MARKER) {
            tools.push(parse_tool(line, cursor.line_number(), description.len())?);
            cursor.advance();
        } else if line.starts_with(IF_MARKER) {
            conditions.push(parse_condition(cursor)?);
        } else if line.starts_with(NEXT_MARKER) {
            default_next = Some(parse_next(line, cursor.line_number())?);
            cursor.advance();
        } else {
            for name in extract_variables(line) {
                variables_used.insert(name);
            }
            description.push(line.to_string());
            cursor.advance();
        }
    }

    Ok(Task {
        name,
        title,
        description,
        tools,
        conditions,
        variables_used,
        default_next,
    })
}

/// Parse `@task name optional title` into its parts.
fn parse_task_header(line: &str, line_number: usize) -> Result<(String, String), SyntaxError> {
    let rest = directive_rest(line, TASK_MARKER).ok_or_else(|| {
        SyntaxError::new(line_number, format!("Invalid task syntax: {}", line))
    })?;
    let (name, title) = leading_identifier(rest);
    if name.is_empty() {
        return Err(SyntaxError::new(
            line_number,
            format!("Invalid task syntax: {}", line),
        ));
    }
    Ok((name.to_string(), title.trim().to_string()))
}

/// Parse `@tool name optional description`; `position` is the count of
/// description lines collected so far in the owning task.
fn parse_tool(line: &str, line_number: usize, position: usize) -> Result<ToolCall, SyntaxError> {
    let rest = directive_rest(line, TOOL_MARKER).ok_or_else(|| {
        SyntaxError::new(line_number, format!("Invalid tool syntax: {}", line))
    })?;
    let (name, description) = leading_identifier(rest);
    if name.is_empty() {
        return Err(SyntaxError::new(
            line_number,
            format!("Invalid tool syntax: {}", line),
        ));
    }
    Ok(ToolCall {
        name: name.to_string(),
        description: description.trim().to_string(),
        position,
    })
}

/// Parse an `@if` block. The cursor enters on the `@if` line and leaves on
/// the first line that does not belong to the conditional:
///
/// * the first `@next` becomes the true branch and is consumed;
/// * `@else` immediately followed by `@next` yields the false branch and ends
///   the block;
/// * a second `@next` before any `@else` ends the block without being
///   consumed, so the outer task loop sees it as the task's default jump;
/// * any other directive ends the block without being consumed;
/// * plain text inside the block is skipped.
fn parse_condition(cursor: &mut Cursor<'_>) -> Result<Condition, SyntaxError> {
    let if_line = cursor.peek().unwrap_or_default();
    let expression = directive_rest(if_line, IF_MARKER)
        .map(str::trim)
        .filter(|expression| !expression.is_empty())
        .ok_or_else(|| {
            SyntaxError::new(
                cursor.line_number(),
                format!("Invalid if syntax: {}", if_line),
            )
        })?
        .to_string();
    cursor.advance();

    let mut true_next = None;
    let mut false_next = None;

    while let Some(line) = cursor.peek() {
        if line.starts_with(NEXT_MARKER) {
            if true_next.is_none() {
                true_next = Some(parse_next(line, cursor.line_number())?);
                cursor.advance();
            } else {
                break;
            }
        } else if line.starts_with(ELSE_MARKER) {
            cursor.advance();
            if let Some(else_line) = cursor.peek() {
                if else_line.starts_with(NEXT_MARKER) {
                    false_next = Some(parse_next(else_line, cursor.line_number())?);
                    cursor.advance();
                    break;
                }
            }
            // No jump followed the else marker; skip the examined line
            cursor.advance();
        } else if line.starts_with('@') {
            break;
        } else {
            cursor.advance();
        }
    }

    Ok(Condition {
        expression,
        true_next,
        false_next,
    })
}

/// Parse `@next target`, returning the jump target.
fn parse_next(line: &str, line_number: usize) -> Result<String, SyntaxError> {
    let rest = directive_rest(line, NEXT_MARKER).ok_or_else(|| {
        SyntaxError::new(line_number, format!("Invalid next syntax: {}", line))
    })?;
    let (target, _) = leading_identifier(rest);
    if target.is_empty() {
        return Err(SyntaxError::new(
            line_number,
            format!("Invalid next syntax: {}", line),
        ));
    }
    Ok(target.to_string())
}

/// Collect `{{name}}` interpolation tokens from a description line, in order
/// of appearance. Braces around anything other than an identifier are not a
/// reference.
pub(crate) fn extract_variables(text: &str) -> Vec<String> {
    let mut found = Vec::new();
    let mut rest = text;
    while let Some(start) = rest.find(INTERPOLATION_OPEN) {
        let after = &rest[start + INTERPOLATION_OPEN.len()..];
        let ident_end = after
            .char_indices()
            .find(|(_, c)| !is_word_char(*c))
            .map(|(i, _)| i)
            .unwrap_or(after.len());
        if ident_end > 0 && after[ident_end..].starts_with(INTERPOLATION_CLOSE) {
            found.push(after[..ident_end].to_string());
            rest = &after[ident_end + INTERPOLATION_CLOSE.len()..];
        } else {
            rest = after;
        }
    }
    found
}

/// The portion of a directive line after its marker, provided the marker is
/// separated from what follows by whitespace. `@task` with nothing after it,
/// or glued to its argument, has no valid rest.
fn directive_rest<'a>(line: &'a str, marker: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(marker)?;
    if rest.starts_with(char::is_whitespace) {
        Some(rest.trim_start())
    } else {
        None
    }
}

/// Split off the leading run of word characters (letters, digits, underscore).
fn leading_identifier(s: &str) -> (&str, &str) {
    let end = s
        .char_indices()
        .find(|(_, c)| !is_word_char(*c))
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    (&s[..end], &s[end..])
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
