// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// Comment / metadata line marker
pub const COMMENT_MARKER: &str = "#";
/// Variable declaration directive
pub const VAR_MARKER: &str = "@var";
/// Task start directive
pub const TASK_MARKER: &str = "@task";
/// Tool invocation directive
pub const TOOL_MARKER: &str = "@tool";
/// Conditional start directive
pub const IF_MARKER: &str = "@if";
/// Conditional else-branch directive
pub const ELSE_MARKER: &str = "@else";
/// Jump directive
pub const NEXT_MARKER: &str = "@next";

/// Terminal jump target: control leaves the workflow
pub const END_TARGET: &str = "END";

/// Opening token of a `{{name}}` variable interpolation
pub const INTERPOLATION_OPEN: &str = "{{";
/// Closing token of a `{{name}}` variable interpolation
pub const INTERPOLATION_CLOSE: &str = "}}";

/// Prefix marking a slice parameter value as a variable reference
pub const VARIABLE_SIGIL: char = '$';
