use crate::schema::{
    merge_answers, AnswerSet, ConstraintsPatch, ContextAnswers, ContextPatch, PartialAnswerSet,
    StylePatch, ToolsPatch, ValidationError, Validator,
};
use crate::Result;
use serde::Deserialize;

// Enumerated fields are read as plain strings so a bad identifier is reported
// as a validation failure rather than a JSON syntax error.

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAnswers {
    task: String,
    language: String,
    #[serde(default)]
    frontend_frameworks: Vec<String>,
    framework: String,
    #[serde(default)]
    context: ContextAnswers,
    #[serde(default)]
    constraints: RawSelections,
    style: RawStyle,
    #[serde(default)]
    tools: RawSelections,
    target: String,
}

#[derive(Debug, Default, Deserialize)]
struct RawSelections {
    #[serde(default)]
    selections: Vec<String>,
    #[serde(default)]
    custom: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawStyle {
    detail_level: String,
    delivery_order: String,
    example_tests: String,
    complexity_analysis: String,
}

/// Read answers from an exported `{prompt, data}` document or a bare answer set.
///
/// The result is validated and normalized before it is returned.
pub fn import_json(input: &str) -> Result<AnswerSet> {
    let value = match serde_json::from_str(input)? {
        serde_json::Value::Object(mut map)
            if map.contains_key("data") && !map.contains_key("task") =>
        {
            map.remove("data").unwrap_or_default()
        }
        other => other,
    };
    let raw: RawAnswers = serde_json::from_value(value)?;
    let patch = raw.into_patch()?;
    Ok(merge_answers(&AnswerSet::default(), Some(&patch)).validate()?)
}

impl RawAnswers {
    /// Every field is carried, so merging the patch over any base yields these answers
    fn into_patch(self) -> std::result::Result<PartialAnswerSet, ValidationError> {
        let mut v = Validator::new();
        let patch = PartialAnswerSet {
            task: v.parse("task", &self.task),
            language: v.parse("language", &self.language),
            frontend_frameworks: v.parse_list("frontendFrameworks", &self.frontend_frameworks),
            framework: v.parse("framework", &self.framework),
            context: Some(ContextPatch {
                details: Some(self.context.details),
                snippet: Some(self.context.snippet),
            }),
            constraints: Some(ConstraintsPatch {
                selections: v.parse_list("constraints.selections", &self.constraints.selections),
                custom: Some(self.constraints.custom),
            }),
            style: Some(StylePatch {
                detail_level: v.parse("style.detailLevel", &self.style.detail_level),
                delivery_order: v.parse("style.deliveryOrder", &self.style.delivery_order),
                example_tests: v.parse("style.exampleTests", &self.style.example_tests),
                complexity_analysis: v
                    .parse("style.complexityAnalysis", &self.style.complexity_analysis),
            }),
            tools: Some(ToolsPatch {
                selections: v.parse_list("tools.selections", &self.tools.selections),
                custom: Some(self.tools.custom),
            }),
            target: v.parse("target", &self.target),
        };
        v.finish()?;
        Ok(patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::export_json;
    use crate::schema::{Framework, Language, Tool};
    use crate::RefineryError;

    #[test]
    fn test_import_exported_document() {
        let mut answers = AnswerSet::default();
        answers.tools.custom = "cargo nextest".to_string();
        let json = export_json(&answers, true).unwrap();
        assert_eq!(import_json(&json).unwrap(), answers);
    }

    #[test]
    fn test_import_bare_answer_set() {
        let json = serde_json::to_string(&AnswerSet::default()).unwrap();
        assert_eq!(import_json(&json).unwrap(), AnswerSet::default());
    }

    #[test]
    fn test_import_normalizes() {
        let mut value = serde_json::to_value(AnswerSet::default()).unwrap();
        value["language"] = "python".into();
        value["tools"]["selections"] = serde_json::json!(["unknown", "linters", "linters"]);

        let answers = import_json(&value.to_string()).unwrap();
        assert_eq!(answers.language, Language::Python);
        assert_eq!(answers.framework, Framework::Django);
        assert!(answers.frontend_frameworks.is_empty());
        assert_eq!(answers.tools.selections, vec![Tool::Linters]);
    }

    #[test]
    fn test_unknown_identifier_is_validation_error() {
        let mut value = serde_json::to_value(AnswerSet::default()).unwrap();
        value["target"] = "gpt-9".into();
        value["constraints"]["selections"] = serde_json::json!(["go-fast"]);

        match import_json(&value.to_string()) {
            Err(RefineryError::Validation(err)) => {
                assert_eq!(err.fields(), vec!["constraints.selections", "target"]);
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_limits_are_enforced() {
        let mut value = serde_json::to_value(AnswerSet::default()).unwrap();
        value["tools"]["custom"] = "x".repeat(301).into();
        assert!(matches!(
            import_json(&value.to_string()),
            Err(RefineryError::Validation(_))
        ));
    }

    #[test]
    fn test_malformed_json_is_json_error() {
        assert!(matches!(import_json("{not json"), Err(RefineryError::Json(_))));
        assert!(matches!(import_json("{}"), Err(RefineryError::Json(_))));
    }
}
