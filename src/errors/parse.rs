// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised while turning DSL text into a validated workflow document.

use std::error::Error;
use std::fmt;

/// A malformed directive line. Aborts parsing immediately.
///
/// `line` is 1-based, relative to the trimmed input text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    /// 1-based line number of the offending line
    pub line: usize,
    /// Human-readable description of the violation
    pub message: String,
}

impl SyntaxError {
    pub fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line {}: {}", self.line, self.message)
    }
}

impl Error for SyntaxError {}

/// A dangling cross-reference found after the whole document was parsed.
///
/// Reference validation is a whole-document pass, not line-local, so these
/// errors carry the owning task and the offending target instead of a line
/// number; [`ReferenceError::line`] reports `0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceError {
    /// A task's `@next` names a task that does not exist
    UnknownJumpTarget {
        /// The task whose default continuation is dangling
        task: String,
        /// The jump target that could not be resolved
        target: String,
    },
    /// A conditional branch names a task that does not exist
    UnknownBranchTarget {
        /// The task owning the conditional
        task: String,
        /// The branch target that could not be resolved
        target: String,
    },
    /// A `{{name}}` interpolation names an undeclared variable
    UndefinedVariable {
        /// The task whose description uses the variable
        task: String,
        /// The undeclared variable name
        variable: String,
    },
}

impl ReferenceError {
    /// The task the violation was found in.
    pub fn task(&self) -> &str {
        match self {
            ReferenceError::UnknownJumpTarget { task, .. }
            | ReferenceError::UnknownBranchTarget { task, .. }
            | ReferenceError::UndefinedVariable { task, .. } => task,
        }
    }

    /// The unresolvable name (task name or variable name).
    pub fn target(&self) -> &str {
        match self {
            ReferenceError::UnknownJumpTarget { target, .. }
            | ReferenceError::UnknownBranchTarget { target, .. } => target,
            ReferenceError::UndefinedVariable { variable, .. } => variable,
        }
    }

    /// Always `0`: validation runs over the whole document, not a line.
    pub fn line(&self) -> usize {
        0
    }
}

impl fmt::Display for ReferenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReferenceError::UnknownJumpTarget { task, target } => {
                write!(
                    f,
                    "Task '{}' references unknown next task: '{}'",
                    task, target
                )
            }
            ReferenceError::UnknownBranchTarget { task, target } => {
                write!(
                    f,
                    "Task '{}' condition references unknown task: '{}'",
                    task, target
                )
            }
            ReferenceError::UndefinedVariable { task, variable } => {
                write!(f, "Task '{}' uses undefined variable: '{}'", task, variable)
            }
        }
    }
}

impl Error for ReferenceError {}

/// The line-tagged error surface of [`parse_document`](crate::dsl::parse_document):
/// either the scanner rejected a directive line or validation found a dangling
/// reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    Syntax(SyntaxError),
    Reference(ReferenceError),
}

impl ParseError {
    /// 1-based line number for syntax errors, `0` for reference errors.
    pub fn line(&self) -> usize {
        match self {
            ParseError::Syntax(err) => err.line,
            ParseError::Reference(err) => err.line(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Syntax(err) => write!(f, "{}", err),
            ParseError::Reference(err) => write!(f, "Line 0: {}", err),
        }
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ParseError::Syntax(err) => Some(err),
            ParseError::Reference(err) => Some(err),
        }
    }
}

impl From<SyntaxError> for ParseError {
    fn from(err: SyntaxError) -> Self {
        ParseError::Syntax(err)
    }
}

impl From<ReferenceError> for ParseError {
    fn from(err: ReferenceError) -> Self {
        ParseError::Reference(err)
    }
}
