use super::answers::{
    normalize_selection, AnswerSet, MAX_CONSTRAINT_CUSTOM, MAX_CONTEXT_DETAILS,
    MAX_CONTEXT_SNIPPET, MAX_SELECTIONS, MAX_TOOL_CUSTOM,
};
use super::compat::{clamp_framework, clamp_frontend_frameworks};
use super::partial::PartialAnswerSet;
use super::values::UnknownValue;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    TooLong { max: usize, actual: usize },
    NotInEnumeration { value: String },
    TooManyMembers { max: usize, actual: usize },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::TooLong { max, actual } => {
                write!(f, "too long ({} characters, max {})", actual, max)
            }
            Violation::NotInEnumeration { value } => write!(f, "'{}' is not a valid value", value),
            Violation::TooManyMembers { max, actual } => {
                write!(f, "too many members ({}, max {})", actual, max)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub violation: Violation,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.violation)
    }
}

/// Every constraint an answer set broke
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid answers: {}", summarize(.violations))]
pub struct ValidationError {
    pub violations: Vec<FieldViolation>,
}

impl ValidationError {
    pub fn fields(&self) -> Vec<&'static str> {
        self.violations.iter().map(|v| v.field).collect()
    }
}

fn summarize(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Collects violations while answers are checked or parsed
#[derive(Debug, Default)]
pub struct Validator {
    violations: Vec<FieldViolation>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&mut self, field: &'static str, value: &str, max: usize) {
        let actual = value.chars().count();
        if actual > max {
            self.push(field, Violation::TooLong { max, actual });
        }
    }

    pub fn members(&mut self, field: &'static str, actual: usize, max: usize) {
        if actual > max {
            self.push(field, Violation::TooManyMembers { max, actual });
        }
    }

    /// Parse one enumeration member, recording a violation on failure
    pub fn parse<T>(&mut self, field: &'static str, raw: &str) -> Option<T>
    where
        T: FromStr<Err = UnknownValue>,
    {
        match raw.parse() {
            Ok(value) => Some(value),
            Err(err) => {
                self.push(field, Violation::NotInEnumeration { value: err.value });
                None
            }
        }
    }

    /// Parse a list of members; `None` if any member was rejected
    pub fn parse_list<T>(&mut self, field: &'static str, raw: &[String]) -> Option<Vec<T>>
    where
        T: FromStr<Err = UnknownValue>,
    {
        let before = self.violations.len();
        let parsed: Vec<T> = raw.iter().filter_map(|r| self.parse(field, r)).collect();
        (self.violations.len() == before).then_some(parsed)
    }

    pub fn finish(self) -> Result<(), ValidationError> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError {
                violations: self.violations,
            })
        }
    }

    fn push(&mut self, field: &'static str, violation: Violation) {
        self.violations.push(FieldViolation { field, violation });
    }
}

impl AnswerSet {
    /// Check every limit, then normalize.
    pub fn validate(self) -> Result<AnswerSet, ValidationError> {
        let mut v = Validator::new();
        v.text("context.details", &self.context.details, MAX_CONTEXT_DETAILS);
        v.text("context.snippet", &self.context.snippet, MAX_CONTEXT_SNIPPET);
        v.members(
            "constraints.selections",
            self.constraints.selections.len(),
            MAX_SELECTIONS,
        );
        v.text("constraints.custom", &self.constraints.custom, MAX_CONSTRAINT_CUSTOM);
        v.members("tools.selections", self.tools.selections.len(), MAX_SELECTIONS);
        v.text("tools.custom", &self.tools.custom, MAX_TOOL_CUSTOM);
        v.finish()?;

        Ok(self.normalized())
    }

    /// Resolve sets through toggle-with-unknown and clamp frameworks to the language
    pub fn normalized(self) -> AnswerSet {
        let language = self.language;
        let frontends = normalize_selection(&self.frontend_frameworks);
        let mut answers = self;
        answers.frontend_frameworks = clamp_frontend_frameworks(language, &frontends);
        answers.framework = clamp_framework(language, answers.framework);
        answers.constraints.selections = normalize_selection(&answers.constraints.selections);
        answers.tools.selections = normalize_selection(&answers.tools.selections);
        answers
    }
}

impl PartialAnswerSet {
    /// Check the limits of the fields this patch carries
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Validator::new();
        if let Some(context) = &self.context {
            if let Some(details) = &context.details {
                v.text("context.details", details, MAX_CONTEXT_DETAILS);
            }
            if let Some(snippet) = &context.snippet {
                v.text("context.snippet", snippet, MAX_CONTEXT_SNIPPET);
            }
        }
        if let Some(constraints) = &self.constraints {
            if let Some(selections) = &constraints.selections {
                v.members("constraints.selections", selections.len(), MAX_SELECTIONS);
            }
            if let Some(custom) = &constraints.custom {
                v.text("constraints.custom", custom, MAX_CONSTRAINT_CUSTOM);
            }
        }
        if let Some(tools) = &self.tools {
            if let Some(selections) = &tools.selections {
                v.members("tools.selections", selections.len(), MAX_SELECTIONS);
            }
            if let Some(custom) = &tools.custom {
                v.text("tools.custom", custom, MAX_TOOL_CUSTOM);
            }
        }
        v.finish()
    }
}
