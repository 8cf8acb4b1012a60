use super::answers::StyleAnswers;
use super::values::{
    Constraint, DeliveryOrder, DetailLevel, Framework, FrontendFramework, Inclusion, Language,
    Target, Task, Tool,
};
use serde::{Deserialize, Serialize};

/// A patch over an [`AnswerSet`](super::AnswerSet).
///
/// `None` always means "leave the target alone", never "clear it".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PartialAnswerSet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task: Option<Task>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frontend_frameworks: Option<Vec<FrontendFramework>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub framework: Option<Framework>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<ContextPatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraints: Option<ConstraintsPatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<StylePatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<ToolsPatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<Target>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConstraintsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selections: Option<Vec<Constraint>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StylePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail_level: Option<DetailLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_order: Option<DeliveryOrder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example_tests: Option<Inclusion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complexity_analysis: Option<Inclusion>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selections: Option<Vec<Tool>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom: Option<String>,
}

impl PartialAnswerSet {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

impl ContextPatch {
    pub fn is_empty(&self) -> bool {
        self.details.is_none() && self.snippet.is_none()
    }
}

impl ConstraintsPatch {
    pub fn is_empty(&self) -> bool {
        self.selections.is_none() && self.custom.is_none()
    }
}

impl StylePatch {
    pub fn is_empty(&self) -> bool {
        self.detail_level.is_none()
            && self.delivery_order.is_none()
            && self.example_tests.is_none()
            && self.complexity_analysis.is_none()
    }
}

impl ToolsPatch {
    pub fn is_empty(&self) -> bool {
        self.selections.is_none() && self.custom.is_none()
    }
}

impl From<StyleAnswers> for StylePatch {
    fn from(style: StyleAnswers) -> Self {
        Self {
            detail_level: Some(style.detail_level),
            delivery_order: Some(style.delivery_order),
            example_tests: Some(style.example_tests),
            complexity_analysis: Some(style.complexity_analysis),
        }
    }
}
