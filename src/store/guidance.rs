use super::steps::WizardStep;
use crate::schema::{AnswerSet, Constraint, Tool, Unspecified};

/// Hints shown on a step whose answer is still "I don't know"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guidance {
    pub title: &'static str,
    pub suggestions: [&'static str; 3],
    /// What the "use default" action will pick
    pub default_label: &'static str,
}

const TASK: Guidance = Guidance {
    title: "Not sure where to start?",
    suggestions: [
        "Clarify what a successful outcome looks like (new feature, fix, deep dive).",
        "Ask the user for any artifacts they can provide (logs, snippets, specs).",
        "Start by outlining the approach before writing code to ensure alignment.",
    ],
    default_label: "Write Code",
};

const LANGUAGE: Guidance = Guidance {
    title: "Language unclear?",
    suggestions: [
        "Default to TypeScript for front-end or full-stack work unless the project says otherwise.",
        "If the repo uses a specific language, align with it to reduce friction.",
        "Ask the user whether static typing or scripting speed matters most.",
    ],
    default_label: "TypeScript",
};

const FRAMEWORK: Guidance = Guidance {
    title: "Not sure which runtime?",
    suggestions: [
        "Match the runtime to the project's existing stack when possible.",
        "If you're building a front-end feature, React or Next.js are safe defaults.",
        "When in doubt, start with Node.js to keep things portable.",
    ],
    default_label: "Language default",
};

const CONSTRAINTS: Guidance = Guidance {
    title: "Need help defining constraints?",
    suggestions: [
        "Mention code style guides, testing requirements, or deployment timelines.",
        "Call out performance targets or compatibility requirements.",
        "If unsure, ask the AI to propose sensible constraints before coding.",
    ],
    default_label: "Follow project conventions",
};

const STYLE: Guidance = Guidance {
    title: "Unsure about tone or structure?",
    suggestions: [
        "Detailed + balanced responses work well for most engineering tasks.",
        "Include example tests when shipping code changes.",
        "Ask for a step-by-step plan when dealing with complex debugging.",
    ],
    default_label: "Detailed & balanced with tests",
};

const TOOLS: Guidance = Guidance {
    title: "Unsure which tools are okay?",
    suggestions: [
        "Mention if unit tests or linters can run automatically.",
        "Clarify whether package installation is allowed.",
        "If tooling access is limited, ask the assistant to propose manual validation steps.",
    ],
    default_label: "Unit tests",
};

const TARGET: Guidance = Guidance {
    title: "Target unclear?",
    suggestions: [
        "If you plan to paste into multiple tools, choose General compatibility.",
        "OpenAI models prefer explicit instructions about reasoning/detail level.",
        "Local agents benefit from concise prompts with explicit validation steps.",
    ],
    default_label: "General compatibility",
};

/// Guidance for `step`, if its answer is currently unspecified
pub fn guidance_for(step: WizardStep, answers: &AnswerSet) -> Option<&'static Guidance> {
    let unsure = match step {
        WizardStep::Task => answers.task.is_unknown(),
        WizardStep::Language => answers.language.is_unknown(),
        WizardStep::Framework => answers.framework.is_unknown(),
        WizardStep::Context => false,
        WizardStep::Constraints => answers.constraints.selections.contains(&Constraint::Unknown),
        WizardStep::Style => answers.style.any_unknown(),
        WizardStep::Tools => answers.tools.selections.contains(&Tool::Unknown),
        WizardStep::Target => answers.target.is_unknown(),
    };
    if !unsure {
        return None;
    }

    Some(match step {
        WizardStep::Task => &TASK,
        WizardStep::Language => &LANGUAGE,
        WizardStep::Framework => &FRAMEWORK,
        WizardStep::Constraints => &CONSTRAINTS,
        WizardStep::Style => &STYLE,
        WizardStep::Tools => &TOOLS,
        WizardStep::Target => &TARGET,
        WizardStep::Context => return None,
    })
}
