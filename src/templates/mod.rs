//! Bundled presets that pre-fill the wizard.

use crate::schema::{
    Constraint, ConstraintsPatch, ContextPatch, DeliveryOrder, DetailLevel, Framework,
    FrontendFramework, Inclusion, Language, PartialAnswerSet, StylePatch, Task, Tool, ToolsPatch,
};
use once_cell::sync::Lazy;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateId {
    BugFix,
    AlgorithmDesign,
    DocsGenerator,
    CodeReview,
}

impl TemplateId {
    pub const ALL: &'static [TemplateId] = &[
        TemplateId::BugFix,
        TemplateId::AlgorithmDesign,
        TemplateId::DocsGenerator,
        TemplateId::CodeReview,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TemplateId::BugFix => "bug-fix",
            TemplateId::AlgorithmDesign => "algorithm-design",
            TemplateId::DocsGenerator => "docs-generator",
            TemplateId::CodeReview => "code-review",
        }
    }

    /// Comma-separated ids, for error messages
    pub fn id_list() -> String {
        TemplateId::ALL
            .iter()
            .map(|id| id.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for TemplateId {
    type Err = crate::RefineryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TemplateId::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| crate::RefineryError::UnknownTemplate(s.to_string()))
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Template {
    pub id: TemplateId,
    pub name: &'static str,
    pub description: &'static str,
    pub preset: PartialAnswerSet,
}

static CATALOG: Lazy<Vec<Template>> = Lazy::new(|| {
    vec![
        Template {
            id: TemplateId::BugFix,
            name: "Bug Fix",
            description: "Locate, understand, and patch a failing scenario in production.",
            preset: PartialAnswerSet {
                task: Some(Task::Debugging),
                language: Some(Language::JavascriptTypescript),
                frontend_frameworks: Some(vec![FrontendFramework::React]),
                framework: Some(Framework::Node),
                constraints: Some(ConstraintsPatch {
                    selections: Some(vec![
                        Constraint::ProjectConventions,
                        Constraint::TimeSpaceLimits,
                    ]),
                    custom: Some("Document the root cause before proposing the fix.".into()),
                }),
                style: Some(StylePatch {
                    detail_level: Some(DetailLevel::StepByStep),
                    delivery_order: Some(DeliveryOrder::ExplanationFirst),
                    example_tests: Some(Inclusion::Include),
                    complexity_analysis: Some(Inclusion::Unknown),
                }),
                tools: Some(ToolsPatch {
                    selections: Some(vec![Tool::UnitTests, Tool::Linters]),
                    custom: Some("Use vitest for rapid regression checks.".into()),
                }),
                context: Some(ContextPatch {
                    details: Some(
                        "Investigate intermittent crashes on the user dashboard when switching filters."
                            .into(),
                    ),
                    snippet: Some(String::new()),
                }),
                ..Default::default()
            },
        },
        Template {
            id: TemplateId::AlgorithmDesign,
            name: "Algorithm Design",
            description: "Craft an optimal solution with performance guarantees and tests.",
            preset: PartialAnswerSet {
                task: Some(Task::WriteCode),
                language: Some(Language::Python),
                frontend_frameworks: Some(vec![]),
                framework: Some(Framework::Unknown),
                constraints: Some(ConstraintsPatch {
                    selections: Some(vec![Constraint::ExplainReasoning]),
                    custom: Some(
                        "Compare time and space complexity against at least one baseline approach."
                            .into(),
                    ),
                }),
                style: Some(StylePatch {
                    detail_level: Some(DetailLevel::Detailed),
                    delivery_order: Some(DeliveryOrder::CodeFirst),
                    example_tests: Some(Inclusion::Include),
                    complexity_analysis: Some(Inclusion::Include),
                }),
                tools: Some(ToolsPatch {
                    selections: Some(vec![Tool::UnitTests, Tool::PackageManagers]),
                    custom: Some("Prefer Python standard library utilities.".into()),
                }),
                ..Default::default()
            },
        },
        Template {
            id: TemplateId::DocsGenerator,
            name: "Docs Generator",
            description: "Summarize architecture and produce usage documentation.",
            preset: PartialAnswerSet {
                task: Some(Task::ExplainCode),
                language: Some(Language::Unknown),
                frontend_frameworks: Some(vec![FrontendFramework::Unknown]),
                framework: Some(Framework::Unknown),
                constraints: Some(ConstraintsPatch {
                    selections: Some(vec![Constraint::ProjectConventions]),
                    custom: Some("Include a quick-start section and API reference table.".into()),
                }),
                style: Some(StylePatch {
                    detail_level: Some(DetailLevel::Detailed),
                    delivery_order: Some(DeliveryOrder::ExplanationFirst),
                    example_tests: Some(Inclusion::Omit),
                    complexity_analysis: Some(Inclusion::Omit),
                }),
                tools: Some(ToolsPatch {
                    selections: Some(vec![Tool::SpecificLibraries]),
                    custom: Some(
                        "You may leverage documentation tooling like JSDoc or Sphinx.".into(),
                    ),
                }),
                ..Default::default()
            },
        },
        Template {
            id: TemplateId::CodeReview,
            name: "Code Review",
            description: "Provide a constructive code review with risk assessment.",
            preset: PartialAnswerSet {
                task: Some(Task::CodeReview),
                language: Some(Language::JavascriptTypescript),
                frontend_frameworks: Some(vec![FrontendFramework::Unknown]),
                framework: Some(Framework::Unknown),
                constraints: Some(ConstraintsPatch {
                    selections: Some(vec![
                        Constraint::ProjectConventions,
                        Constraint::ExplainReasoning,
                    ]),
                    custom: Some("Highlight security implications or regressions explicitly.".into()),
                }),
                style: Some(StylePatch {
                    detail_level: Some(DetailLevel::Detailed),
                    delivery_order: Some(DeliveryOrder::ExplanationFirst),
                    example_tests: Some(Inclusion::Include),
                    complexity_analysis: Some(Inclusion::Omit),
                }),
                tools: Some(ToolsPatch {
                    selections: Some(vec![Tool::Linters]),
                    custom: Some("Reference ESLint and unit test outputs if relevant.".into()),
                }),
                ..Default::default()
            },
        },
    ]
});

/// Every bundled template, in display order
pub fn catalog() -> &'static [Template] {
    &CATALOG
}

pub fn find_template(id: TemplateId) -> Option<&'static Template> {
    CATALOG.iter().find(|template| template.id == id)
}
