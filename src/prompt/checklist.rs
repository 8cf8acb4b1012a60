use crate::schema::{AnswerSet, Constraint, DetailLevel, Inclusion, Tool, Unspecified};
use serde::Serialize;

/// Highest value a score is shown with
pub const MAX_DISPLAY_SCORE: i32 = 5;

/// Raw checklist points per category.
///
/// Values are unbounded and may be negative; clamp with [`display_score`]
/// before showing them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistScores {
    pub specificity: i32,
    pub constraints: i32,
    pub examples: i32,
    pub acceptance_criteria: i32,
    pub verification: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ChecklistKey {
    Specificity,
    Constraints,
    Examples,
    AcceptanceCriteria,
    Verification,
}

impl ChecklistKey {
    pub const ALL: &'static [ChecklistKey] = &[
        ChecklistKey::Specificity,
        ChecklistKey::Constraints,
        ChecklistKey::Examples,
        ChecklistKey::AcceptanceCriteria,
        ChecklistKey::Verification,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ChecklistKey::Specificity => "Specificity",
            ChecklistKey::Constraints => "Constraints",
            ChecklistKey::Examples => "Examples",
            ChecklistKey::AcceptanceCriteria => "Acceptance Criteria",
            ChecklistKey::Verification => "Verification",
        }
    }
}

/// How a clamped score reads at a glance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreLevel {
    Good,
    Fair,
    Missing,
}

impl ChecklistScores {
    pub fn get(&self, key: ChecklistKey) -> i32 {
        match key {
            ChecklistKey::Specificity => self.specificity,
            ChecklistKey::Constraints => self.constraints,
            ChecklistKey::Examples => self.examples,
            ChecklistKey::AcceptanceCriteria => self.acceptance_criteria,
            ChecklistKey::Verification => self.verification,
        }
    }

    /// `(key, raw score)` pairs in display order
    pub fn entries(&self) -> Vec<(ChecklistKey, i32)> {
        ChecklistKey::ALL.iter().map(|k| (*k, self.get(*k))).collect()
    }
}

/// Score how complete the answers are.
///
/// Each category is a fixed sum of points; nothing here looks at the prompt
/// text itself.
pub fn compute_checklist(answers: &AnswerSet) -> ChecklistScores {
    let mut scores = ChecklistScores::default();

    let task_known = !answers.task.is_unknown();
    let language_known = !answers.language.is_unknown();
    if task_known && language_known {
        scores.specificity += 2;
    } else if task_known || language_known {
        scores.specificity += 1;
    }
    if !answers.framework.is_unknown() || !answers.context.details.trim().is_empty() {
        scores.specificity += 1;
    }

    let constraints = &answers.constraints.selections;
    if !constraints.is_empty() {
        scores.constraints += 2;
        if constraints.contains(&Constraint::Unknown) {
            scores.constraints -= 1;
        }
    }
    if !answers.constraints.custom.trim().is_empty() {
        scores.constraints += 1;
    }

    match answers.style.example_tests {
        Inclusion::Include => scores.examples += 2,
        Inclusion::Unknown => scores.examples += 1,
        Inclusion::Omit => {}
    }
    if !answers.context.snippet.trim().is_empty() {
        scores.examples += 1;
    }

    match answers.style.detail_level {
        DetailLevel::StepByStep => scores.acceptance_criteria += 2,
        DetailLevel::Unknown => {}
        DetailLevel::Concise | DetailLevel::Detailed => scores.acceptance_criteria += 1,
    }
    if constraints.contains(&Constraint::TimeSpaceLimits) {
        scores.acceptance_criteria += 1;
    }

    let tools = &answers.tools.selections;
    if tools.contains(&Tool::UnitTests) {
        scores.verification += 1;
    }
    if answers.style.example_tests == Inclusion::Include {
        scores.verification += 1;
    }
    if answers.style.complexity_analysis == Inclusion::Include {
        scores.verification += 1;
    }
    if tools.contains(&Tool::Unknown) {
        scores.verification -= 1;
    }

    scores
}

/// Clamp a raw score into `0..=5` for display
pub fn display_score(raw: i32) -> i32 {
    raw.clamp(0, MAX_DISPLAY_SCORE)
}

pub fn score_level(raw: i32) -> ScoreLevel {
    match display_score(raw) {
        3.. => ScoreLevel::Good,
        1..=2 => ScoreLevel::Fair,
        _ => ScoreLevel::Missing,
    }
}

/// `Label: n/5` badge text
pub fn badge_text(key: ChecklistKey, raw: i32) -> String {
    format!("{}: {}/{}", key.label(), display_score(raw), MAX_DISPLAY_SCORE)
}
