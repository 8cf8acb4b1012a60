use super::copy;
use crate::schema::AnswerSet;

/// One `## heading` block of the generated prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub heading: &'static str,
    pub body: String,
}

impl Section {
    fn new(heading: &'static str, body: impl Into<String>) -> Self {
        Self {
            heading,
            body: body.into(),
        }
    }
}

/// Render the answers as a Markdown prompt
pub fn build_prompt(answers: &AnswerSet) -> String {
    build_sections(answers)
        .iter()
        .map(|section| format!("## {}\n\n{}", section.heading, section.body))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Assemble the prompt sections in their fixed order.
///
/// No section is ever empty: missing answers are replaced with an instruction
/// telling the assistant to ask for them.
pub fn build_sections(answers: &AnswerSet) -> Vec<Section> {
    let mut sections = vec![
        Section::new("Role", copy::ROLE),
        Section::new("Task", copy::task(answers.task)),
        Section::new("Language", copy::language(answers.language)),
        Section::new("Front-end Frameworks", format_list(&frontend_lines(answers))),
        Section::new("Back-end Runtime", copy::framework(answers.framework)),
        Section::new("Context", context_body(answers)),
        Section::new("Constraints", format_list(&constraint_lines(answers))),
        Section::new("Expectations", format_list(&expectation_lines(answers))),
        Section::new("Output Format", format_list(&output_lines(answers))),
    ];

    if let Some(notes) = copy::test_cases(answers.style.example_tests) {
        sections.push(Section::new("Test Cases", notes));
    }

    sections.push(Section::new("Additional Notes", format_list(&note_lines(answers))));
    sections
}

fn format_list<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(|item| format!("- {}", item.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn frontend_lines(answers: &AnswerSet) -> Vec<&'static str> {
    if answers.frontend_frameworks.is_empty() {
        return vec![copy::NO_FRONTEND];
    }
    answers
        .frontend_frameworks
        .iter()
        .map(|f| copy::frontend_framework(*f))
        .collect()
}

fn context_body(answers: &AnswerSet) -> String {
    let mut lines: Vec<String> = Vec::new();

    let details = answers.context.details.trim();
    if details.is_empty() {
        lines.push(copy::NO_CONTEXT.to_string());
    } else {
        lines.push(details.to_string());
    }

    let snippet = answers.context.snippet.trim();
    if snippet.is_empty() {
        lines.push(format!("\n{}", copy::NO_SNIPPET));
    } else {
        lines.push("\n```text".to_string());
        lines.push(snippet.to_string());
        lines.push("```".to_string());
    }

    lines.join("\n")
}

fn constraint_lines(answers: &AnswerSet) -> Vec<String> {
    let mut items: Vec<String> = answers
        .constraints
        .selections
        .iter()
        .map(|c| copy::constraint(*c).to_string())
        .collect();

    let custom = answers.constraints.custom.trim();
    if !custom.is_empty() {
        items.push(custom.to_string());
    }
    if items.is_empty() {
        items.push(copy::NO_CONSTRAINTS.to_string());
    }
    items
}

fn expectation_lines(answers: &AnswerSet) -> Vec<&'static str> {
    let style = &answers.style;
    vec![
        copy::detail_level(style.detail_level),
        copy::delivery_order(style.delivery_order),
        copy::example_tests(style.example_tests),
        copy::complexity_analysis(style.complexity_analysis),
        copy::SURFACE_UNCERTAINTY,
    ]
}

fn output_lines(answers: &AnswerSet) -> Vec<&'static str> {
    vec![
        copy::STRUCTURED_RESPONSE,
        copy::output_order(answers.style.delivery_order),
        copy::TRADE_OFFS,
    ]
}

fn note_lines(answers: &AnswerSet) -> Vec<String> {
    let mut items: Vec<String> = answers
        .tools
        .selections
        .iter()
        .map(|t| copy::tool(*t).to_string())
        .collect();

    let custom = answers.tools.custom.trim();
    if !custom.is_empty() {
        items.push(custom.to_string());
    }
    if items.is_empty() {
        items.push(copy::NO_TOOLS.to_string());
    }

    items.push(format!("Target model: {}", copy::target(answers.target)));
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{
        Constraint, ContextAnswers, DeliveryOrder, Framework, FrontendFramework, Inclusion,
        Language, Target, Task, Tool,
    };

    fn headings(answers: &AnswerSet) -> Vec<&'static str> {
        build_sections(answers).iter().map(|s| s.heading).collect()
    }

    #[test]
    fn test_default_prompt_has_core_sections() {
        let prompt = build_prompt(&AnswerSet::default());
        assert!(prompt.contains("## Role"));
        assert!(prompt.contains("## Task"));
        assert!(prompt.contains("## Front-end Frameworks"));
        assert!(prompt.contains("## Back-end Runtime"));
        assert!(prompt.contains("## Context"));
        assert!(prompt.contains("## Additional Notes"));
        assert!(prompt.starts_with("## Role\n\nYou are an expert AI coding assistant.\n\n## Task"));
    }

    #[test]
    fn test_section_order() {
        assert_eq!(
            headings(&AnswerSet::default()),
            vec![
                "Role",
                "Task",
                "Language",
                "Front-end Frameworks",
                "Back-end Runtime",
                "Context",
                "Constraints",
                "Expectations",
                "Output Format",
                "Test Cases",
                "Additional Notes",
            ]
        );
    }

    #[test]
    fn test_unknown_answers_fall_back_to_questions() {
        let answers = AnswerSet {
            task: Task::Unknown,
            language: Language::Unknown,
            framework: Framework::Unknown,
            frontend_frameworks: vec![FrontendFramework::Unknown],
            context: ContextAnswers::default(),
            ..AnswerSet::default()
        };
        let prompt = build_prompt(&answers);
        assert!(prompt.contains("Clarify the user's goal"));
        assert!(prompt.contains("Language is unspecified"));
        assert!(prompt.contains("Context not provided yet"));
        assert!(prompt.contains("Front-end stack is unclear"));
        assert!(prompt.contains("Framework/runtime not specified"));
    }

    #[test]
    fn test_empty_frontends_fallback() {
        let answers = AnswerSet {
            frontend_frameworks: vec![],
            ..AnswerSet::default()
        };
        assert!(build_prompt(&answers).contains("- Front-end stack not specified."));
    }

    #[test]
    fn test_context_snippet_is_fenced() {
        let mut answers = AnswerSet::default();
        answers.context.details = "  Login fails after refresh.  ".to_string();
        answers.context.snippet = "\nconst token = null;\n".to_string();
        let context = build_sections(&answers)
            .into_iter()
            .find(|s| s.heading == "Context")
            .unwrap();
        assert_eq!(
            context.body,
            "Login fails after refresh.\n\n```text\nconst token = null;\n```"
        );
    }

    #[test]
    fn test_missing_snippet_hint() {
        let context = build_sections(&AnswerSet::default())
            .into_iter()
            .find(|s| s.heading == "Context")
            .unwrap();
        assert!(context.body.ends_with(
            "\n\n_(Add relevant code snippets or stack traces when available.)_"
        ));
    }

    #[test]
    fn test_constraints_fallback_and_custom() {
        let prompt = build_prompt(&AnswerSet::default());
        assert!(prompt.contains("- No constraints were supplied."));

        let mut answers = AnswerSet::default();
        answers.constraints.custom = "Keep the public API stable.".to_string();
        let prompt = build_prompt(&answers);
        assert!(prompt.contains("## Constraints\n\n- Keep the public API stable."));
        assert!(!prompt.contains("No constraints were supplied"));

        answers.constraints.selections = vec![Constraint::AvoidExternalDeps];
        let prompt = build_prompt(&answers);
        assert!(prompt.contains(
            "- Avoid adding new external dependencies unless absolutely required.\n- Keep the public API stable."
        ));
    }

    #[test]
    fn test_expectations_end_with_uncertainty_instruction() {
        let expectations = build_sections(&AnswerSet::default())
            .into_iter()
            .find(|s| s.heading == "Expectations")
            .unwrap();
        assert_eq!(expectations.body.lines().count(), 5);
        assert!(expectations.body.ends_with(
            "- Surface uncertainties and ask clarifying questions before assuming details."
        ));
    }

    #[test]
    fn test_output_format_follows_delivery_order() {
        let mut answers = AnswerSet::default();
        answers.style.delivery_order = DeliveryOrder::CodeFirst;
        assert!(build_prompt(&answers).contains("- Present the final solution code first"));
        answers.style.delivery_order = DeliveryOrder::ExplanationFirst;
        assert!(build_prompt(&answers).contains("- Explain the approach before listing final code."));
        answers.style.delivery_order = DeliveryOrder::Unknown;
        assert!(build_prompt(&answers).contains("- Interleave explanations with code snippets"));
    }

    #[test]
    fn test_test_cases_section_variants() {
        let mut answers = AnswerSet::default();
        answers.style.example_tests = Inclusion::Omit;
        assert!(!headings(&answers).contains(&"Test Cases"));

        answers.style.example_tests = Inclusion::Unknown;
        let prompt = build_prompt(&answers);
        assert!(prompt.contains("## Test Cases\n\nClarify with the user whether example tests"));
    }

    #[test]
    fn test_additional_notes_with_target() {
        let mut answers = AnswerSet::default();
        answers.tools.selections = vec![];
        answers.target = Target::Anthropic;
        let prompt = build_prompt(&answers);
        assert!(prompt.ends_with(
            "## Additional Notes\n\n- Tools are unspecified. Confirm whether tests, linters, or package managers are available.\n- Target model: Optimized for Anthropic Claude models."
        ));

        answers.tools.selections = vec![Tool::Linters];
        answers.tools.custom = "Run clippy.".to_string();
        answers.target = Target::Unknown;
        let prompt = build_prompt(&answers);
        assert!(prompt.ends_with(
            "- Linters or static analysis tools are allowed to verify conventions.\n- Run clippy.\n- Target model: Confirm model/agent expectations with the user."
        ));
    }

    #[test]
    fn test_build_is_deterministic() {
        let answers = AnswerSet::default();
        assert_eq!(build_prompt(&answers), build_prompt(&answers.clone()));
    }
}
