use super::answers::{AnswerSet, ConstraintAnswers, ContextAnswers, StyleAnswers, ToolAnswers};
use super::partial::{ConstraintsPatch, ContextPatch, PartialAnswerSet, StylePatch, ToolsPatch};

/// Merge `patch` over `base`, producing a fresh value.
///
/// Scalars in the patch replace the base. Nested groups merge one level deep.
/// Lists are replaced wholesale, never concatenated. Without a patch the result
/// is a copy of `base`.
pub fn merge_answers(base: &AnswerSet, patch: Option<&PartialAnswerSet>) -> AnswerSet {
    let Some(patch) = patch else {
        return base.clone();
    };

    AnswerSet {
        task: patch.task.unwrap_or(base.task),
        language: patch.language.unwrap_or(base.language),
        frontend_frameworks: patch
            .frontend_frameworks
            .clone()
            .unwrap_or_else(|| base.frontend_frameworks.clone()),
        framework: patch.framework.unwrap_or(base.framework),
        context: merge_context(&base.context, patch.context.as_ref()),
        constraints: merge_constraints(&base.constraints, patch.constraints.as_ref()),
        style: merge_style(&base.style, patch.style.as_ref()),
        tools: merge_tools(&base.tools, patch.tools.as_ref()),
        target: patch.target.unwrap_or(base.target),
    }
}

pub fn merge_context(base: &ContextAnswers, patch: Option<&ContextPatch>) -> ContextAnswers {
    let Some(patch) = patch else {
        return base.clone();
    };
    ContextAnswers {
        details: patch.details.clone().unwrap_or_else(|| base.details.clone()),
        snippet: patch.snippet.clone().unwrap_or_else(|| base.snippet.clone()),
    }
}

pub fn merge_constraints(
    base: &ConstraintAnswers,
    patch: Option<&ConstraintsPatch>,
) -> ConstraintAnswers {
    let Some(patch) = patch else {
        return base.clone();
    };
    ConstraintAnswers {
        selections: patch
            .selections
            .clone()
            .unwrap_or_else(|| base.selections.clone()),
        custom: patch.custom.clone().unwrap_or_else(|| base.custom.clone()),
    }
}

pub fn merge_style(base: &StyleAnswers, patch: Option<&StylePatch>) -> StyleAnswers {
    let Some(patch) = patch else {
        return base.clone();
    };
    StyleAnswers {
        detail_level: patch.detail_level.unwrap_or(base.detail_level),
        delivery_order: patch.delivery_order.unwrap_or(base.delivery_order),
        example_tests: patch.example_tests.unwrap_or(base.example_tests),
        complexity_analysis: patch.complexity_analysis.unwrap_or(base.complexity_analysis),
    }
}

pub fn merge_tools(base: &ToolAnswers, patch: Option<&ToolsPatch>) -> ToolAnswers {
    let Some(patch) = patch else {
        return base.clone();
    };
    ToolAnswers {
        selections: patch
            .selections
            .clone()
            .unwrap_or_else(|| base.selections.clone()),
        custom: patch.custom.clone().unwrap_or_else(|| base.custom.clone()),
    }
}
