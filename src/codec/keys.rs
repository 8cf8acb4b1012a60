//! Query-string key table.
//!
//! These abbreviations are part of every shared link. Renaming one breaks
//! links already in circulation.

pub const TASK: &str = "t";
pub const LANGUAGE: &str = "l";
pub const FRONTEND_FRAMEWORKS: &str = "ff";
pub const FRAMEWORK: &str = "f";
pub const CONTEXT_DETAILS: &str = "cd";
pub const CONTEXT_SNIPPET: &str = "cs";
pub const CONSTRAINT_SELECTIONS: &str = "cn";
pub const CONSTRAINT_CUSTOM: &str = "cc";
pub const STYLE_DETAIL: &str = "sd";
pub const STYLE_DELIVERY: &str = "so";
pub const STYLE_TESTS: &str = "st";
pub const STYLE_COMPLEXITY: &str = "sc";
pub const TOOL_SELECTIONS: &str = "tn";
pub const TOOL_CUSTOM: &str = "tc";
pub const TARGET: &str = "tg";

/// Joins members of a set-valued field
pub const LIST_SEPARATOR: char = '.';

/// Every key in encoding order
pub const ALL: &[&str] = &[
    TASK,
    LANGUAGE,
    FRONTEND_FRAMEWORKS,
    FRAMEWORK,
    CONTEXT_DETAILS,
    CONTEXT_SNIPPET,
    CONSTRAINT_SELECTIONS,
    CONSTRAINT_CUSTOM,
    STYLE_DETAIL,
    STYLE_DELIVERY,
    STYLE_TESTS,
    STYLE_COMPLEXITY,
    TOOL_SELECTIONS,
    TOOL_CUSTOM,
    TARGET,
];
