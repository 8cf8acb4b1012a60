use crate::schema::{
    allowed_frameworks, allowed_frontend_frameworks, AnswerSet, Constraint, ContextPatch,
    DeliveryOrder, DetailLevel, Framework, FrontendFramework, Inclusion, Language, StylePatch,
    Target, Task, Tool, MAX_CONSTRAINT_CUSTOM, MAX_CONTEXT_DETAILS, MAX_CONTEXT_SNIPPET,
    MAX_TOOL_CUSTOM,
};
use crate::store::{WizardStep, WizardStore};

/// Free-text answers the wizard can edit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    ContextDetails,
    ContextSnippet,
    ConstraintCustom,
    ToolCustom,
}

impl TextField {
    pub fn label(self) -> &'static str {
        match self {
            TextField::ContextDetails => "Details",
            TextField::ContextSnippet => "Code snippet",
            TextField::ConstraintCustom => "Custom constraints",
            TextField::ToolCustom => "Custom tool notes",
        }
    }

    pub fn max_chars(self) -> usize {
        match self {
            TextField::ContextDetails => MAX_CONTEXT_DETAILS,
            TextField::ContextSnippet => MAX_CONTEXT_SNIPPET,
            TextField::ConstraintCustom => MAX_CONSTRAINT_CUSTOM,
            TextField::ToolCustom => MAX_TOOL_CUSTOM,
        }
    }

    /// Enter inserts a newline instead of finishing the edit
    pub fn multiline(self) -> bool {
        matches!(self, TextField::ContextDetails | TextField::ContextSnippet)
    }

    pub fn value(self, answers: &AnswerSet) -> &str {
        match self {
            TextField::ContextDetails => &answers.context.details,
            TextField::ContextSnippet => &answers.context.snippet,
            TextField::ConstraintCustom => &answers.constraints.custom,
            TextField::ToolCustom => &answers.tools.custom,
        }
    }

    pub fn write(self, store: &mut WizardStore, value: &str) {
        match self {
            TextField::ContextDetails => store.update_context(ContextPatch {
                details: Some(value.to_string()),
                snippet: None,
            }),
            TextField::ContextSnippet => store.update_context(ContextPatch {
                details: None,
                snippet: Some(value.to_string()),
            }),
            TextField::ConstraintCustom => store.set_constraint_custom(value),
            TextField::ToolCustom => store.set_tool_custom(value),
        }
    }
}

/// Style answers that cycle through their values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleField {
    DetailLevel,
    DeliveryOrder,
    ExampleTests,
    ComplexityAnalysis,
}

impl StyleField {
    pub const ALL: &'static [StyleField] = &[
        StyleField::DetailLevel,
        StyleField::DeliveryOrder,
        StyleField::ExampleTests,
        StyleField::ComplexityAnalysis,
    ];

    pub fn label(self) -> &'static str {
        match self {
            StyleField::DetailLevel => "Detail level",
            StyleField::DeliveryOrder => "Delivery order",
            StyleField::ExampleTests => "Example tests",
            StyleField::ComplexityAnalysis => "Complexity analysis",
        }
    }

    pub fn value_label(self, answers: &AnswerSet) -> &'static str {
        let style = &answers.style;
        match self {
            StyleField::DetailLevel => style.detail_level.label(),
            StyleField::DeliveryOrder => style.delivery_order.label(),
            StyleField::ExampleTests => style.example_tests.label(),
            StyleField::ComplexityAnalysis => style.complexity_analysis.label(),
        }
    }

    /// Patch that advances this field to its next value
    pub fn next_patch(self, answers: &AnswerSet) -> StylePatch {
        let style = &answers.style;
        match self {
            StyleField::DetailLevel => StylePatch {
                detail_level: Some(cycle(DetailLevel::ALL, style.detail_level)),
                ..StylePatch::default()
            },
            StyleField::DeliveryOrder => StylePatch {
                delivery_order: Some(cycle(DeliveryOrder::ALL, style.delivery_order)),
                ..StylePatch::default()
            },
            StyleField::ExampleTests => StylePatch {
                example_tests: Some(cycle(Inclusion::ALL, style.example_tests)),
                ..StylePatch::default()
            },
            StyleField::ComplexityAnalysis => StylePatch {
                complexity_analysis: Some(cycle(Inclusion::ALL, style.complexity_analysis)),
                ..StylePatch::default()
            },
        }
    }
}

fn cycle<T: Copy + PartialEq>(values: &[T], current: T) -> T {
    let index = values.iter().position(|v| *v == current).unwrap_or(0);
    values[(index + 1) % values.len()]
}

/// What activating a row does to the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    SetTask(Task),
    SetLanguage(Language),
    ToggleFrontend(FrontendFramework),
    SetFramework(Framework),
    Edit(TextField),
    ToggleConstraint(Constraint),
    CycleStyle(StyleField),
    ToggleTool(Tool),
    SetTarget(Target),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowKind {
    /// Radio button or checkbox
    Choice { checked: bool, multi: bool },
    Text { value: String },
    Cycle { value: &'static str },
    /// Non-selectable group title
    Heading,
}

/// One line in a step's option list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRow {
    pub label: String,
    pub kind: RowKind,
    pub action: Option<RowAction>,
}

impl StepRow {
    fn choice(label: &str, checked: bool, multi: bool, action: RowAction) -> Self {
        Self {
            label: label.to_string(),
            kind: RowKind::Choice { checked, multi },
            action: Some(action),
        }
    }

    fn heading(label: &str) -> Self {
        Self {
            label: label.to_string(),
            kind: RowKind::Heading,
            action: None,
        }
    }

    fn text(field: TextField, answers: &AnswerSet) -> Self {
        Self {
            label: field.label().to_string(),
            kind: RowKind::Text {
                value: field.value(answers).to_string(),
            },
            action: Some(RowAction::Edit(field)),
        }
    }

    pub fn selectable(&self) -> bool {
        self.action.is_some()
    }

    /// Text shown in the option list
    pub fn display(&self) -> String {
        match &self.kind {
            RowKind::Choice { checked, multi } => {
                let mark = match (*multi, *checked) {
                    (true, true) => "[x]",
                    (true, false) => "[ ]",
                    (false, true) => "(•)",
                    (false, false) => "( )",
                };
                format!("{} {}", mark, self.label)
            }
            RowKind::Text { value } => {
                let first_line = value.lines().next().unwrap_or("");
                let more = if value.lines().count() > 1 { " …" } else { "" };
                format!("{}: {}{}", self.label, first_line, more)
            }
            RowKind::Cycle { value } => format!("{}: ‹{}›", self.label, value),
            RowKind::Heading => self.label.clone(),
        }
    }
}

/// The option rows for `step` given the current answers
pub fn step_rows(step: WizardStep, answers: &AnswerSet) -> Vec<StepRow> {
    match step {
        WizardStep::Task => Task::ALL
            .iter()
            .map(|t| StepRow::choice(t.label(), answers.task == *t, false, RowAction::SetTask(*t)))
            .collect(),
        WizardStep::Language => Language::ALL
            .iter()
            .map(|l| {
                StepRow::choice(
                    l.label(),
                    answers.language == *l,
                    false,
                    RowAction::SetLanguage(*l),
                )
            })
            .collect(),
        WizardStep::Framework => {
            let mut rows = Vec::new();
            let frontends = allowed_frontend_frameworks(answers.language);
            // A lone "unknown" front-end is not worth a group of its own
            if frontends.len() > 1 {
                rows.push(StepRow::heading("Front-end"));
                rows.extend(frontends.iter().map(|f| {
                    StepRow::choice(
                        f.label(),
                        answers.frontend_frameworks.contains(f),
                        true,
                        RowAction::ToggleFrontend(*f),
                    )
                }));
            }
            rows.push(StepRow::heading("Back-end / runtime"));
            rows.extend(allowed_frameworks(answers.language).iter().map(|f| {
                StepRow::choice(
                    f.label(),
                    answers.framework == *f,
                    false,
                    RowAction::SetFramework(*f),
                )
            }));
            rows
        }
        WizardStep::Context => vec![
            StepRow::text(TextField::ContextDetails, answers),
            StepRow::text(TextField::ContextSnippet, answers),
        ],
        WizardStep::Constraints => {
            let mut rows: Vec<StepRow> = Constraint::ALL
                .iter()
                .map(|c| {
                    StepRow::choice(
                        c.label(),
                        answers.constraints.selections.contains(c),
                        true,
                        RowAction::ToggleConstraint(*c),
                    )
                })
                .collect();
            rows.push(StepRow::text(TextField::ConstraintCustom, answers));
            rows
        }
        WizardStep::Style => StyleField::ALL
            .iter()
            .map(|field| StepRow {
                label: field.label().to_string(),
                kind: RowKind::Cycle {
                    value: field.value_label(answers),
                },
                action: Some(RowAction::CycleStyle(*field)),
            })
            .collect(),
        WizardStep::Tools => {
            let mut rows: Vec<StepRow> = Tool::ALL
                .iter()
                .map(|t| {
                    StepRow::choice(
                        t.label(),
                        answers.tools.selections.contains(t),
                        true,
                        RowAction::ToggleTool(*t),
                    )
                })
                .collect();
            rows.push(StepRow::text(TextField::ToolCustom, answers));
            rows
        }
        WizardStep::Target => Target::ALL
            .iter()
            .map(|t| {
                StepRow::choice(
                    t.label(),
                    answers.target == *t,
                    false,
                    RowAction::SetTarget(*t),
                )
            })
            .collect(),
    }
}

/// Cursor and edit-buffer state for the wizard screen
#[derive(Debug, Default)]
pub struct WizardState {
    pub selected: usize,
    pub editing: Option<TextField>,
    pub buffer: String,
    pub cursor_pos: usize,
    pub preview_scroll: u16,
    pub status: Option<String>,
}

impl WizardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put the cursor on the first selectable row of a freshly shown step
    pub fn reset_selection(&mut self, rows: &[StepRow]) {
        self.selected = rows.iter().position(|r| r.selectable()).unwrap_or(0);
        self.preview_scroll = 0;
    }

    pub fn move_up(&mut self, rows: &[StepRow]) {
        if let Some(prev) = (0..self.selected.min(rows.len()))
            .rev()
            .find(|i| rows[*i].selectable())
        {
            self.selected = prev;
        }
    }

    pub fn move_down(&mut self, rows: &[StepRow]) {
        if let Some(next) = (self.selected + 1..rows.len()).find(|i| rows[*i].selectable()) {
            self.selected = next;
        }
    }

    /// Keep the cursor inside `rows` after the list changed shape
    pub fn clamp(&mut self, rows: &[StepRow]) {
        if self.selected >= rows.len() || !rows[self.selected].selectable() {
            self.reset_selection(rows);
        }
    }

    /// Activate the selected row; text rows switch into edit mode
    pub fn activate(&mut self, rows: &[StepRow], store: &mut WizardStore) {
        let Some(action) = rows.get(self.selected).and_then(|r| r.action) else {
            return;
        };
        match action {
            RowAction::SetTask(task) => store.set_task(task),
            RowAction::SetLanguage(language) => store.set_language(language),
            RowAction::ToggleFrontend(frontend) => store.toggle_frontend_framework(frontend),
            RowAction::SetFramework(framework) => store.set_framework(framework),
            RowAction::Edit(field) => self.start_editing(field, store.data()),
            RowAction::ToggleConstraint(constraint) => store.toggle_constraint(constraint),
            RowAction::CycleStyle(field) => store.set_style(field.next_patch(store.data())),
            RowAction::ToggleTool(tool) => store.toggle_tool(tool),
            RowAction::SetTarget(target) => store.set_target(target),
        }
    }

    pub fn start_editing(&mut self, field: TextField, answers: &AnswerSet) {
        self.buffer = field.value(answers).to_string();
        self.cursor_pos = self.buffer.chars().count();
        self.editing = Some(field);
    }

    pub fn stop_editing(&mut self) {
        self.editing = None;
        self.buffer.clear();
        self.cursor_pos = 0;
    }

    /// Insert at the cursor and write through to the store
    pub fn insert_char(&mut self, c: char, store: &mut WizardStore) {
        let Some(field) = self.editing else {
            return;
        };
        if self.buffer.chars().count() >= field.max_chars() {
            return;
        }
        let byte_pos = byte_index(&self.buffer, self.cursor_pos);
        self.buffer.insert(byte_pos, c);
        self.cursor_pos += 1;
        field.write(store, &self.buffer);
    }

    pub fn delete_char(&mut self, store: &mut WizardStore) {
        let Some(field) = self.editing else {
            return;
        };
        if self.cursor_pos == 0 {
            return;
        }
        let byte_pos = byte_index(&self.buffer, self.cursor_pos - 1);
        self.buffer.remove(byte_pos);
        self.cursor_pos -= 1;
        field.write(store, &self.buffer);
    }

    pub fn cursor_left(&mut self) {
        self.cursor_pos = self.cursor_pos.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        self.cursor_pos = (self.cursor_pos + 1).min(self.buffer.chars().count());
    }

    pub fn scroll_preview_up(&mut self) {
        self.preview_scroll = self.preview_scroll.saturating_sub(1);
    }

    pub fn scroll_preview_down(&mut self, max_scroll: u16) {
        if self.preview_scroll < max_scroll {
            self.preview_scroll += 1;
        }
    }
}

fn byte_index(value: &str, char_pos: usize) -> usize {
    value
        .char_indices()
        .nth(char_pos)
        .map(|(i, _)| i)
        .unwrap_or(value.len())
}
