use super::keys;
use crate::schema::{
    AnswerSet, ConstraintsPatch, ContextPatch, PartialAnswerSet, StylePatch, ToolsPatch,
    ValidationError, Validator,
};
use url::form_urlencoded;
use url::Url;

/// Serialize answers into a compact query string.
///
/// Enumerated scalars are always written. Free text and sets are left out
/// when blank so that default links stay short.
pub fn encode_state(answers: &AnswerSet) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());

    query.append_pair(keys::TASK, answers.task.as_str());
    query.append_pair(keys::LANGUAGE, answers.language.as_str());
    if !answers.frontend_frameworks.is_empty() {
        query.append_pair(
            keys::FRONTEND_FRAMEWORKS,
            &join_members(answers.frontend_frameworks.iter().map(|f| f.as_str())),
        );
    }
    query.append_pair(keys::FRAMEWORK, answers.framework.as_str());
    if !answers.context.details.trim().is_empty() {
        query.append_pair(keys::CONTEXT_DETAILS, &answers.context.details);
    }
    if !answers.context.snippet.trim().is_empty() {
        query.append_pair(keys::CONTEXT_SNIPPET, &answers.context.snippet);
    }
    if !answers.constraints.selections.is_empty() {
        query.append_pair(
            keys::CONSTRAINT_SELECTIONS,
            &join_members(answers.constraints.selections.iter().map(|c| c.as_str())),
        );
    }
    if !answers.constraints.custom.trim().is_empty() {
        query.append_pair(keys::CONSTRAINT_CUSTOM, &answers.constraints.custom);
    }
    query.append_pair(keys::STYLE_DETAIL, answers.style.detail_level.as_str());
    query.append_pair(keys::STYLE_DELIVERY, answers.style.delivery_order.as_str());
    query.append_pair(keys::STYLE_TESTS, answers.style.example_tests.as_str());
    query.append_pair(keys::STYLE_COMPLEXITY, answers.style.complexity_analysis.as_str());
    if !answers.tools.selections.is_empty() {
        query.append_pair(
            keys::TOOL_SELECTIONS,
            &join_members(answers.tools.selections.iter().map(|t| t.as_str())),
        );
    }
    if !answers.tools.custom.trim().is_empty() {
        query.append_pair(keys::TOOL_CUSTOM, &answers.tools.custom);
    }
    query.append_pair(keys::TARGET, answers.target.as_str());

    query.finish()
}

/// Decode a query string into a patch, or `None` if there is nothing usable.
///
/// Unknown keys are ignored. A value that breaks the schema discards the whole
/// snapshot so a damaged link falls back to the current answers.
pub fn decode_state(query: &str) -> Option<PartialAnswerSet> {
    match try_decode_state(query) {
        Ok(snapshot) => snapshot,
        Err(err) => {
            tracing::debug!("Discarding query snapshot: {}", err);
            None
        }
    }
}

/// Like [`decode_state`], but reports why a snapshot was rejected
pub fn try_decode_state(query: &str) -> Result<Option<PartialAnswerSet>, ValidationError> {
    let trimmed = query.strip_prefix('?').unwrap_or(query);
    if trimmed.is_empty() {
        return Ok(None);
    }

    let raw = RawSnapshot::parse(trimmed);
    let mut v = Validator::new();

    let mut partial = PartialAnswerSet {
        task: raw.scalar(keys::TASK).and_then(|s| v.parse("task", s)),
        language: raw.scalar(keys::LANGUAGE).and_then(|s| v.parse("language", s)),
        frontend_frameworks: raw
            .list(keys::FRONTEND_FRAMEWORKS)
            .and_then(|l| v.parse_list("frontendFrameworks", &l)),
        framework: raw.scalar(keys::FRAMEWORK).and_then(|s| v.parse("framework", s)),
        target: raw.scalar(keys::TARGET).and_then(|s| v.parse("target", s)),
        ..Default::default()
    };

    let context = ContextPatch {
        details: raw.text(keys::CONTEXT_DETAILS),
        snippet: raw.text(keys::CONTEXT_SNIPPET),
    };
    let constraints = ConstraintsPatch {
        selections: raw
            .list(keys::CONSTRAINT_SELECTIONS)
            .and_then(|l| v.parse_list("constraints.selections", &l)),
        custom: raw.text(keys::CONSTRAINT_CUSTOM),
    };
    let style = StylePatch {
        detail_level: raw
            .scalar(keys::STYLE_DETAIL)
            .and_then(|s| v.parse("style.detailLevel", s)),
        delivery_order: raw
            .scalar(keys::STYLE_DELIVERY)
            .and_then(|s| v.parse("style.deliveryOrder", s)),
        example_tests: raw
            .scalar(keys::STYLE_TESTS)
            .and_then(|s| v.parse("style.exampleTests", s)),
        complexity_analysis: raw
            .scalar(keys::STYLE_COMPLEXITY)
            .and_then(|s| v.parse("style.complexityAnalysis", s)),
    };
    let tools = ToolsPatch {
        selections: raw
            .list(keys::TOOL_SELECTIONS)
            .and_then(|l| v.parse_list("tools.selections", &l)),
        custom: raw.text(keys::TOOL_CUSTOM),
    };
    v.finish()?;

    partial.context = (!context.is_empty()).then_some(context);
    partial.constraints = (!constraints.is_empty()).then_some(constraints);
    partial.style = (!style.is_empty()).then_some(style);
    partial.tools = (!tools.is_empty()).then_some(tools);

    partial.validate()?;
    Ok(Some(partial))
}

/// Build a shareable link by replacing the query of `base_url`
pub fn share_link(base_url: &str, answers: &AnswerSet) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(base_url)?;
    url.set_query(Some(&encode_state(answers)));
    Ok(url)
}

/// Accept either a full link or a bare query string and return the query part
pub fn query_from_link(input: &str) -> String {
    match Url::parse(input) {
        Ok(url) => url.query().unwrap_or_default().to_string(),
        Err(_) => input.trim().to_string(),
    }
}

fn join_members<'a>(members: impl Iterator<Item = &'a str>) -> String {
    members
        .collect::<Vec<_>>()
        .join(&keys::LIST_SEPARATOR.to_string())
}

/// Query pairs keyed by abbreviation, first occurrence wins
struct RawSnapshot {
    pairs: Vec<(String, String)>,
}

impl RawSnapshot {
    fn parse(query: &str) -> Self {
        let mut pairs: Vec<(String, String)> = Vec::new();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            if !keys::ALL.contains(&key.as_ref()) {
                tracing::trace!("Ignoring unknown query key: {}", key);
                continue;
            }
            if pairs.iter().any(|(k, _)| k == key.as_ref()) {
                continue;
            }
            pairs.push((key.into_owned(), value.into_owned()));
        }
        Self { pairs }
    }

    fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Enumerated value; an empty value counts as absent
    fn scalar(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.is_empty())
    }

    /// Free text; present-but-empty is kept
    fn text(&self, key: &str) -> Option<String> {
        self.get(key).map(str::to_string)
    }

    /// Set members with empty segments dropped
    fn list(&self, key: &str) -> Option<Vec<String>> {
        self.scalar(key).map(|v| {
            v.split(keys::LIST_SEPARATOR)
                .filter(|segment| !segment.is_empty())
                .map(str::to_string)
                .collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{
        allowed_frameworks, allowed_frontend_frameworks, merge_answers, Constraint, DetailLevel,
        Framework, FrontendFramework, Language, Target, Task, Tool, Unspecified,
    };
    use crate::store::WizardStore;

    #[test]
    fn test_encode_default_state() {
        let query = encode_state(&AnswerSet::default());
        assert_eq!(
            query,
            "t=write-code&l=javascript-typescript&ff=react&f=node&sd=detailed&so=balanced&st=include&sc=omit&tn=unit-tests&tg=general"
        );
    }

    #[test]
    fn test_encode_joins_sets_and_escapes_text() {
        let mut answers = AnswerSet::default();
        answers.frontend_frameworks = vec![FrontendFramework::React, FrontendFramework::Next];
        answers.context.details = "crash on save & reload".to_string();
        answers.constraints.selections =
            vec![Constraint::ProjectConventions, Constraint::TimeSpaceLimits];

        let query = encode_state(&answers);
        assert!(query.contains("ff=react.next"));
        assert!(query.contains("cd=crash+on+save+%26+reload"));
        assert!(query.contains("cn=project-conventions.time-space-limits"));
    }

    #[test]
    fn test_encode_omits_blank_text() {
        let mut answers = AnswerSet::default();
        answers.tools.custom = "   ".to_string();
        answers.tools.selections.clear();
        let query = encode_state(&answers);
        assert!(!query.contains("tc="));
        assert!(!query.contains("tn="));
    }

    #[test]
    fn test_decode_empty_query() {
        assert!(decode_state("").is_none());
        assert!(decode_state("?").is_none());
    }

    #[test]
    fn test_round_trip_default_state() {
        let encoded = encode_state(&AnswerSet::default());
        let snapshot = decode_state(&encoded).unwrap();

        let mut base = AnswerSet::default();
        base.task = Task::Refactor;
        base.language = Language::Go;
        base.framework = Framework::Gin;
        base.target = Target::Openai;

        let merged = merge_answers(&base, Some(&snapshot));
        assert_eq!(merged.task, Task::WriteCode);
        assert_eq!(merged.language, Language::JavascriptTypescript);
        assert_eq!(merged.framework, Framework::Node);
        assert_eq!(merged.target, Target::General);
    }

    #[test]
    fn test_round_trip_keeps_every_written_field() {
        let mut answers = AnswerSet::default();
        answers.task = Task::Debugging;
        answers.context.details = "Dashboard crashes".to_string();
        answers.context.snippet = "throw new Error('boom')".to_string();
        answers.constraints.custom = "No new deps.".to_string();
        answers.constraints.selections = vec![Constraint::AvoidExternalDeps];
        answers.style.detail_level = DetailLevel::StepByStep;
        answers.tools.selections = vec![Tool::Linters, Tool::UnitTests];
        answers.tools.custom = "Use vitest".to_string();

        let snapshot = decode_state(&encode_state(&answers)).unwrap();
        assert_eq!(merge_answers(&AnswerSet::default(), Some(&snapshot)), answers);
    }

    #[test]
    fn test_omitted_fields_keep_base_values() {
        let mut base = AnswerSet::default();
        base.context.details = "from base".to_string();
        let snapshot = decode_state("t=refactor").unwrap();
        let merged = merge_answers(&base, Some(&snapshot));
        assert_eq!(merged.task, Task::Refactor);
        assert_eq!(merged.context.details, "from base");
        assert!(snapshot.context.is_none());
    }

    #[test]
    fn test_decode_ignores_unknown_keys_and_empty_segments() {
        let snapshot = decode_state("?zz=1&tn=linters..unit-tests.&l=rust").unwrap();
        assert_eq!(snapshot.language, Some(Language::Rust));
        assert_eq!(
            snapshot.tools.unwrap().selections,
            Some(vec![Tool::Linters, Tool::UnitTests])
        );
    }

    #[test]
    fn test_decode_rejects_invalid_enum() {
        assert!(decode_state("t=write-code&l=cobol").is_none());
        let err = try_decode_state("l=cobol").unwrap_err();
        assert_eq!(err.fields(), vec!["language"]);
    }

    #[test]
    fn test_decode_rejects_oversized_text() {
        let query = format!("tc={}", "a".repeat(301));
        assert!(decode_state(&query).is_none());
    }

    #[test]
    fn test_decode_rejects_too_many_members() {
        let query = "cn=project-conventions.avoid-external-deps.explain-reasoning.time-space-limits.unknown.project-conventions";
        assert!(decode_state(query).is_none());
    }

    #[test]
    fn test_decode_first_occurrence_wins() {
        let snapshot = decode_state("t=refactor&t=debugging").unwrap();
        assert_eq!(snapshot.task, Some(Task::Refactor));
    }

    #[test]
    fn test_share_link_replaces_query() {
        let url = share_link("https://example.com/wizard?old=1", &AnswerSet::default()).unwrap();
        assert_eq!(url.path(), "/wizard");
        assert!(url.query().unwrap().starts_with("t=write-code&"));
        assert!(share_link("not a url", &AnswerSet::default()).is_err());
    }

    #[test]
    fn test_hydrate_restores_every_language_and_framework() {
        for language in Language::ALL {
            for framework in allowed_frameworks(*language) {
                let mut answers = AnswerSet {
                    language: *language,
                    framework: *framework,
                    frontend_frameworks: allowed_frontend_frameworks(*language)
                        .iter()
                        .copied()
                        .filter(|f| !f.is_unknown())
                        .take(1)
                        .collect(),
                    task: Task::Refactor,
                    target: Target::Openai,
                    ..AnswerSet::default()
                };
                answers.context.details = "Bump v1.2.3 to v2.0 & keep a.b.c".to_string();
                answers.constraints.selections = vec![Constraint::AvoidExternalDeps];
                answers.tools.selections = vec![Tool::Linters, Tool::UnitTests];
                answers.tools.custom = "cargo-nextest 0.9.x".to_string();

                let mut store = WizardStore::new();
                store.hydrate(decode_state(&encode_state(&answers)).as_ref());
                assert_eq!(*store.data(), answers, "{} / {}", language, framework);
            }
        }
    }

    #[test]
    fn test_query_from_link() {
        assert_eq!(query_from_link("https://example.com/?t=refactor"), "t=refactor");
        assert_eq!(query_from_link("t=refactor&l=go"), "t=refactor&l=go");
    }
}
