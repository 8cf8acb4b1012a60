//! Observable wizard session state.
//!
//! The store owns the current [`AnswerSet`] behind an `Arc` and replaces it
//! wholesale on every mutation, so snapshots handed to listeners never change
//! underneath them.

mod guidance;
mod steps;

pub use guidance::{guidance_for, Guidance};
pub use steps::{clamp_step, progress_percent, WizardStep};

use crate::schema::{
    clamp_framework, clamp_frontend_frameworks, clip_text, default_framework, default_frontend,
    is_framework_allowed, is_frontend_allowed, merge_answers, normalize_selection,
    toggle_with_unknown, AnswerSet, Constraint, ContextPatch, Framework, FrontendFramework,
    Language, PartialAnswerSet, StyleAnswers, StylePatch, Target, Task, Tool,
    Unspecified, MAX_CONSTRAINT_CUSTOM, MAX_CONTEXT_DETAILS, MAX_CONTEXT_SNIPPET, MAX_TOOL_CUSTOM,
};
use crate::templates::TemplateId;
use std::sync::Arc;

/// Everything a listener needs to re-render
#[derive(Debug, Clone, PartialEq)]
pub struct WizardSnapshot {
    pub data: Arc<AnswerSet>,
    pub current_step: usize,
    pub applied_template: Option<TemplateId>,
}

/// Receives a snapshot after each mutation that changed the state
#[cfg_attr(test, mockall::automock)]
pub trait StoreListener {
    fn on_change(&self, snapshot: &WizardSnapshot);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub struct WizardStore {
    data: Arc<AnswerSet>,
    current_step: usize,
    applied_template: Option<TemplateId>,
    listeners: Vec<(SubscriptionId, Box<dyn StoreListener>)>,
    next_id: u64,
}

impl Default for WizardStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for WizardStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WizardStore")
            .field("data", &self.data)
            .field("current_step", &self.current_step)
            .field("applied_template", &self.applied_template)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl WizardStore {
    pub fn new() -> Self {
        Self::with_answers(AnswerSet::default())
    }

    pub fn with_answers(answers: AnswerSet) -> Self {
        Self {
            data: Arc::new(answers),
            current_step: 0,
            applied_template: None,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    pub fn snapshot(&self) -> WizardSnapshot {
        WizardSnapshot {
            data: Arc::clone(&self.data),
            current_step: self.current_step,
            applied_template: self.applied_template,
        }
    }

    pub fn data(&self) -> &AnswerSet {
        &self.data
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn applied_template(&self) -> Option<TemplateId> {
        self.applied_template
    }

    pub fn subscribe(&mut self, listener: Box<dyn StoreListener>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    /// Returns false if `id` was not subscribed
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    fn notify(&self) {
        let snapshot = self.snapshot();
        for (_, listener) in &self.listeners {
            listener.on_change(&snapshot);
        }
    }

    /// Swap in a new AnswerSet built from the current one
    fn update(&mut self, f: impl FnOnce(&AnswerSet) -> AnswerSet) {
        let next = f(&self.data);
        if next == *self.data {
            return;
        }
        self.data = Arc::new(next);
        self.notify();
    }

    // Navigation

    pub fn set_current_step(&mut self, index: usize) {
        let step = clamp_step(index.min(isize::MAX as usize) as isize);
        if step != self.current_step {
            self.current_step = step;
            self.notify();
        }
    }

    pub fn next(&mut self) {
        self.set_current_step(self.current_step + 1);
    }

    pub fn previous(&mut self) {
        self.set_current_step(self.current_step.saturating_sub(1));
    }

    pub fn step_key(&self) -> WizardStep {
        WizardStep::from_index(self.current_step)
    }

    pub fn progress(&self) -> u16 {
        progress_percent(self.current_step)
    }

    // Field setters

    pub fn set_task(&mut self, task: Task) {
        self.update(|d| AnswerSet { task, ..d.clone() });
    }

    /// Change language and clamp both framework fields to what it permits
    pub fn set_language(&mut self, language: Language) {
        self.update(|d| AnswerSet {
            language,
            framework: clamp_framework(language, d.framework),
            frontend_frameworks: clamp_frontend_frameworks(language, &d.frontend_frameworks),
            ..d.clone()
        });
    }

    pub fn set_frontend_frameworks(&mut self, frontends: Vec<FrontendFramework>) {
        let language = self.data.language;
        if let Some(rejected) = frontends
            .iter()
            .find(|f| !is_frontend_allowed(language, **f))
        {
            tracing::debug!("Ignoring front-end {} for language {}", rejected, language);
            return;
        }
        let frontend_frameworks = normalize_selection(&frontends);
        self.update(|d| AnswerSet {
            frontend_frameworks,
            ..d.clone()
        });
    }

    pub fn toggle_frontend_framework(&mut self, frontend: FrontendFramework) {
        if !is_frontend_allowed(self.data.language, frontend) {
            tracing::debug!(
                "Ignoring front-end {} for language {}",
                frontend,
                self.data.language
            );
            return;
        }
        self.update(|d| AnswerSet {
            frontend_frameworks: toggle_with_unknown(&d.frontend_frameworks, frontend),
            ..d.clone()
        });
    }

    pub fn set_framework(&mut self, framework: Framework) {
        if !is_framework_allowed(self.data.language, framework) {
            tracing::debug!(
                "Ignoring framework {} for language {}",
                framework,
                self.data.language
            );
            return;
        }
        self.update(|d| AnswerSet {
            framework,
            ..d.clone()
        });
    }

    /// Write the given context fields, truncated to their limits
    pub fn update_context(&mut self, patch: ContextPatch) {
        self.update(|d| {
            let mut next = d.clone();
            if let Some(details) = patch.details {
                next.context.details = clip_text(&details, MAX_CONTEXT_DETAILS);
            }
            if let Some(snippet) = patch.snippet {
                next.context.snippet = clip_text(&snippet, MAX_CONTEXT_SNIPPET);
            }
            next
        });
    }

    pub fn toggle_constraint(&mut self, constraint: Constraint) {
        self.update(|d| {
            let mut next = d.clone();
            next.constraints.selections =
                toggle_with_unknown(&d.constraints.selections, constraint);
            next
        });
    }

    pub fn set_constraint_custom(&mut self, custom: &str) {
        self.update(|d| {
            let mut next = d.clone();
            next.constraints.custom = clip_text(custom, MAX_CONSTRAINT_CUSTOM);
            next
        });
    }

    pub fn set_style(&mut self, patch: StylePatch) {
        self.update(|d| {
            let mut next = d.clone();
            let style = &mut next.style;
            if let Some(v) = patch.detail_level {
                style.detail_level = v;
            }
            if let Some(v) = patch.delivery_order {
                style.delivery_order = v;
            }
            if let Some(v) = patch.example_tests {
                style.example_tests = v;
            }
            if let Some(v) = patch.complexity_analysis {
                style.complexity_analysis = v;
            }
            next
        });
    }

    pub fn toggle_tool(&mut self, tool: Tool) {
        self.update(|d| {
            let mut next = d.clone();
            next.tools.selections = toggle_with_unknown(&d.tools.selections, tool);
            next
        });
    }

    pub fn set_tool_custom(&mut self, custom: &str) {
        self.update(|d| {
            let mut next = d.clone();
            next.tools.custom = clip_text(custom, MAX_TOOL_CUSTOM);
            next
        });
    }

    pub fn set_target(&mut self, target: Target) {
        self.update(|d| AnswerSet { target, ..d.clone() });
    }

    // Whole-state operations

    /// Restore the default answers, step 0 and no template
    pub fn reset(&mut self) {
        let default = AnswerSet::default();
        let changed = *self.data != default
            || self.current_step != 0
            || self.applied_template.is_some();
        self.data = Arc::new(default);
        self.current_step = 0;
        self.applied_template = None;
        if changed {
            self.notify();
        }
    }

    /// Merge `preset` over the default answers (not the current ones)
    pub fn apply_template(&mut self, preset: &PartialAnswerSet, id: TemplateId) {
        tracing::info!("Applying template: {}", id);
        let answers = merge_answers(&AnswerSet::default(), Some(preset)).normalized();
        self.data = Arc::new(answers);
        self.current_step = 0;
        self.applied_template = Some(id);
        self.notify();
    }

    /// Merge a decoded snapshot over the current answers; the step is untouched
    pub fn hydrate(&mut self, snapshot: Option<&PartialAnswerSet>) {
        let Some(patch) = snapshot else {
            return;
        };
        self.update(|d| merge_answers(d, Some(patch)).normalized());
    }

    /// Replace the step's "don't know" answer with the suggested default
    pub fn use_step_default(&mut self, step: WizardStep) {
        match step {
            WizardStep::Task => self.set_task(Task::WriteCode),
            WizardStep::Language => self.set_language(Language::JavascriptTypescript),
            WizardStep::Framework => self.update(|d| {
                // an unknown language permits everything, so take the JS/TS picks
                let language = if d.language.is_unknown() {
                    Language::JavascriptTypescript
                } else {
                    d.language
                };
                AnswerSet {
                    framework: default_framework(language),
                    frontend_frameworks: default_frontend(language).into_iter().collect(),
                    ..d.clone()
                }
            }),
            WizardStep::Context => {}
            WizardStep::Constraints => {
                if !self
                    .data
                    .constraints
                    .selections
                    .contains(&Constraint::ProjectConventions)
                {
                    self.toggle_constraint(Constraint::ProjectConventions);
                }
            }
            WizardStep::Style => self.set_style(StyleAnswers::default().into()),
            WizardStep::Tools => {
                if !self.data.tools.selections.contains(&Tool::UnitTests) {
                    self.toggle_tool(Tool::UnitTests);
                }
            }
            WizardStep::Target => self.set_target(Target::General),
        }
    }
}
