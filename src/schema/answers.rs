use super::values::{
    Constraint, DeliveryOrder, DetailLevel, Framework, FrontendFramework, Inclusion, Language,
    Target, Task, Tool, Unspecified,
};
use serde::{Deserialize, Serialize};

pub const MAX_CONTEXT_DETAILS: usize = 2000;
pub const MAX_CONTEXT_SNIPPET: usize = 4000;
pub const MAX_CONSTRAINT_CUSTOM: usize = 500;
pub const MAX_TOOL_CUSTOM: usize = 300;
pub const MAX_SELECTIONS: usize = 5;

/// Every answer collected by the wizard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerSet {
    pub task: Task,
    pub language: Language,
    #[serde(default)]
    pub frontend_frameworks: Vec<FrontendFramework>,
    pub framework: Framework,
    #[serde(default)]
    pub context: ContextAnswers,
    #[serde(default)]
    pub constraints: ConstraintAnswers,
    pub style: StyleAnswers,
    #[serde(default)]
    pub tools: ToolAnswers,
    pub target: Target,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextAnswers {
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    pub snippet: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstraintAnswers {
    #[serde(default)]
    pub selections: Vec<Constraint>,
    #[serde(default)]
    pub custom: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleAnswers {
    pub detail_level: DetailLevel,
    pub delivery_order: DeliveryOrder,
    pub example_tests: Inclusion,
    pub complexity_analysis: Inclusion,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolAnswers {
    #[serde(default)]
    pub selections: Vec<Tool>,
    #[serde(default)]
    pub custom: String,
}

impl Default for StyleAnswers {
    fn default() -> Self {
        Self {
            detail_level: DetailLevel::Detailed,
            delivery_order: DeliveryOrder::Balanced,
            example_tests: Inclusion::Include,
            complexity_analysis: Inclusion::Omit,
        }
    }
}

impl Default for AnswerSet {
    fn default() -> Self {
        Self {
            task: Task::WriteCode,
            language: Language::JavascriptTypescript,
            frontend_frameworks: vec![FrontendFramework::React],
            framework: Framework::Node,
            context: ContextAnswers::default(),
            constraints: ConstraintAnswers::default(),
            style: StyleAnswers::default(),
            tools: ToolAnswers {
                selections: vec![Tool::UnitTests],
                custom: String::new(),
            },
            target: Target::General,
        }
    }
}

impl StyleAnswers {
    pub fn any_unknown(&self) -> bool {
        self.detail_level.is_unknown()
            || self.delivery_order.is_unknown()
            || self.example_tests.is_unknown()
            || self.complexity_analysis.is_unknown()
    }
}

/// Toggle `value` in a set where `unknown` excludes every concrete member.
///
/// Present values are removed. Adding `unknown` clears the set first; adding a
/// concrete value drops `unknown`. Insertion order is preserved.
pub fn toggle_with_unknown<T: Unspecified>(current: &[T], value: T) -> Vec<T> {
    if current.contains(&value) {
        return current.iter().copied().filter(|v| *v != value).collect();
    }

    let mut next: Vec<T> = if value.is_unknown() {
        Vec::new()
    } else {
        current.iter().copied().filter(|v| !v.is_unknown()).collect()
    };
    next.push(value);
    next
}

/// Rebuild a set as if its members had been selected one by one.
///
/// Repeated members are skipped rather than toggled off, so the result is the
/// toggle-with-unknown reading of an arbitrary list.
pub fn normalize_selection<T: Unspecified>(members: &[T]) -> Vec<T> {
    members.iter().fold(Vec::new(), |acc, value| {
        if acc.contains(value) {
            acc
        } else {
            toggle_with_unknown(&acc, *value)
        }
    })
}

/// Truncate free text to `max` characters
pub fn clip_text(value: &str, max: usize) -> String {
    match value.char_indices().nth(max) {
        Some((end, _)) => value[..end].to_string(),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_answers() {
        let answers = AnswerSet::default();
        assert_eq!(answers.task, Task::WriteCode);
        assert_eq!(answers.language, Language::JavascriptTypescript);
        assert_eq!(answers.frontend_frameworks, vec![FrontendFramework::React]);
        assert_eq!(answers.framework, Framework::Node);
        assert_eq!(answers.tools.selections, vec![Tool::UnitTests]);
        assert_eq!(answers.target, Target::General);
        assert!(answers.context.details.is_empty());
    }

    #[test]
    fn test_toggle_unknown_clears_set() {
        let next = toggle_with_unknown(&[Tool::UnitTests, Tool::Linters], Tool::Unknown);
        assert_eq!(next, vec![Tool::Unknown]);
    }

    #[test]
    fn test_toggle_concrete_removes_unknown() {
        let next = toggle_with_unknown(&[Constraint::Unknown], Constraint::ExplainReasoning);
        assert_eq!(next, vec![Constraint::ExplainReasoning]);
    }

    #[test]
    fn test_toggle_present_value_removes_it() {
        let next = toggle_with_unknown(
            &[FrontendFramework::React, FrontendFramework::Vue],
            FrontendFramework::React,
        );
        assert_eq!(next, vec![FrontendFramework::Vue]);

        let next = toggle_with_unknown(&[Tool::Unknown], Tool::Unknown);
        assert!(next.is_empty());
    }

    #[test]
    fn test_toggle_appends_in_order() {
        let next = toggle_with_unknown(&[Tool::Linters], Tool::UnitTests);
        assert_eq!(next, vec![Tool::Linters, Tool::UnitTests]);
    }

    #[test]
    fn test_normalize_selection_replays_inserts() {
        let normalized = normalize_selection(&[
            Tool::Linters,
            Tool::Linters,
            Tool::Unknown,
            Tool::UnitTests,
        ]);
        assert_eq!(normalized, vec![Tool::UnitTests]);

        let normalized = normalize_selection(&[Tool::UnitTests, Tool::Unknown]);
        assert_eq!(normalized, vec![Tool::Unknown]);
    }

    #[test]
    fn test_clip_text_counts_characters() {
        assert_eq!(clip_text("héllo", 2), "hé");
        assert_eq!(clip_text("short", 10), "short");
        assert_eq!(clip_text("", 3), "");
    }

    #[test]
    fn test_json_field_names() {
        let json = serde_json::to_value(AnswerSet::default()).unwrap();
        assert_eq!(json["frontendFrameworks"][0], "react");
        assert_eq!(json["style"]["detailLevel"], "detailed");
        assert_eq!(json["style"]["complexityAnalysis"], "omit");
        assert_eq!(json["tools"]["selections"][0], "unit-tests");
    }
}
