use crate::config::Config;
use crate::prompt::{badge_text, build_prompt, compute_checklist, score_level};
use crate::schema::AnswerSet;
use crate::store::{guidance_for, WizardStep, WizardStore};
use crate::templates::{find_template, TemplateId};
use crate::tui::theme::Theme;
use crate::tui::widgets::{step_rows, RowKind, StepRow, WizardState};
use crate::tui::QuerySync;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph, Wrap},
    Frame, Terminal,
};
use std::cell::RefCell;
use std::io;
use std::rc::Rc;

/// Result of feeding one key to the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Continue,
    Quit,
    Finish,
}

/// Run the interactive wizard; `None` when the user quits without finishing
pub fn run_wizard(config: &Config, mut store: WizardStore) -> Result<Option<AnswerSet>> {
    let theme = Theme::from_name(&config.ui.theme);
    let (sync, query) = QuerySync::new(store.data());
    store.subscribe(Box::new(sync));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_wizard_loop(&mut terminal, &mut store, &query, &theme, config);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    result
}

fn run_wizard_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    store: &mut WizardStore,
    query: &Rc<RefCell<String>>,
    theme: &Theme,
    config: &Config,
) -> Result<Option<AnswerSet>> {
    let mut state = WizardState::new();
    state.reset_selection(&step_rows(store.step_key(), store.data()));

    loop {
        terminal.draw(|f| draw_wizard(f, &state, store, &query.borrow(), theme, config))?;

        if let Event::Key(key) = event::read()? {
            match handle_key(key, &mut state, store, config) {
                KeyOutcome::Continue => {}
                KeyOutcome::Quit => return Ok(None),
                KeyOutcome::Finish => return Ok(Some(store.data().clone())),
            }
        }
    }
}

/// Apply a key press to the wizard state and the store
pub fn handle_key(
    key: KeyEvent,
    state: &mut WizardState,
    store: &mut WizardStore,
    config: &Config,
) -> KeyOutcome {
    let step_before = store.step_key();
    let rows = step_rows(step_before, store.data());

    if let Some(field) = state.editing {
        let control = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if control => return KeyOutcome::Quit,
            KeyCode::Char(_) if control => {}
            KeyCode::Esc => state.stop_editing(),
            KeyCode::Enter if field.multiline() => state.insert_char('\n', store),
            KeyCode::Enter => state.stop_editing(),
            KeyCode::Backspace => state.delete_char(store),
            KeyCode::Left => state.cursor_left(),
            KeyCode::Right => state.cursor_right(),
            KeyCode::Char(c) => state.insert_char(c, store),
            _ => {}
        }
        return KeyOutcome::Continue;
    }

    state.status = None;
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return KeyOutcome::Quit
        }
        KeyCode::Char('e') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return KeyOutcome::Finish
        }
        KeyCode::Char('q') | KeyCode::Esc => return KeyOutcome::Quit,
        KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => store.previous(),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => store.next(),
        KeyCode::Up | KeyCode::Char('k') => state.move_up(&rows),
        KeyCode::Down | KeyCode::Char('j') => state.move_down(&rows),
        KeyCode::Enter | KeyCode::Char(' ') => state.activate(&rows, store),
        KeyCode::Char('e') => {
            if matches!(rows.get(state.selected).map(|r| &r.kind), Some(RowKind::Text { .. })) {
                state.activate(&rows, store);
            }
        }
        KeyCode::Char('r') => {
            store.reset();
            state.status = Some("Answers reset to defaults".to_string());
        }
        KeyCode::Char('d') => {
            if config.ui.show_guidance && guidance_for(step_before, store.data()).is_some() {
                let before = store.snapshot();
                store.use_step_default(step_before);
                if store.snapshot() != before {
                    state.status = Some("Applied suggested default".to_string());
                }
            }
        }
        KeyCode::Char(c @ '1'..='4') => {
            let index = c as usize - '1' as usize;
            if let Some(template) = TemplateId::ALL.get(index).and_then(|id| find_template(*id)) {
                store.apply_template(&template.preset, template.id);
                state.status = Some(format!("Applied template: {}", template.name));
            }
        }
        KeyCode::PageUp => state.scroll_preview_up(),
        KeyCode::PageDown => {
            let lines = build_prompt(store.data()).lines().count() as u16;
            state.scroll_preview_down(lines);
        }
        _ => {}
    }

    let rows = step_rows(store.step_key(), store.data());
    if store.step_key() != step_before {
        state.reset_selection(&rows);
    } else {
        state.clamp(&rows);
    }
    KeyOutcome::Continue
}

fn draw_wizard(
    f: &mut Frame,
    state: &WizardState,
    store: &WizardStore,
    query: &str,
    theme: &Theme,
    config: &Config,
) {
    let answers = store.data();
    let step = store.step_key();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Length(1), // Progress
            Constraint::Min(10),   // Options + preview
            Constraint::Length(1), // Checklist
            Constraint::Length(1), // Share query
            Constraint::Length(1), // Help
        ])
        .split(f.area());

    draw_header(f, chunks[0], store, state, theme);

    let progress = Gauge::default()
        .gauge_style(theme.selected)
        .percent(store.progress())
        .label(format!("{}%", store.progress()));
    f.render_widget(progress, chunks[1]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[2]);

    draw_step(f, body[0], step, answers, state, theme, config);

    let preview = Paragraph::new(build_prompt(answers))
        .style(theme.preview)
        .block(Block::default().title("Prompt Preview").borders(Borders::ALL))
        .wrap(Wrap { trim: false })
        .scroll((state.preview_scroll, 0));
    f.render_widget(preview, body[1]);

    if config.ui.show_checklist {
        let scores = compute_checklist(answers);
        let mut spans = Vec::new();
        for (key, raw) in scores.entries() {
            if !spans.is_empty() {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(badge_text(key, raw), theme.score(score_level(raw))));
        }
        f.render_widget(Paragraph::new(Line::from(spans)), chunks[3]);
    }

    let share = Paragraph::new(format!("?{}", query)).style(theme.help);
    f.render_widget(share, chunks[4]);

    let help_text = match state.editing {
        Some(field) if field.multiline() => "Esc: finish editing | Enter: new line | Backspace: delete",
        Some(_) => "Esc/Enter: finish editing | Backspace: delete",
        None => "←/→: step | ↑/↓: select | Enter: choose | d: use default | 1-4: template | r: reset | Ctrl+E: finish | q: quit",
    };
    f.render_widget(Paragraph::new(help_text).style(theme.help), chunks[5]);
}

fn draw_header(
    f: &mut Frame,
    area: Rect,
    store: &WizardStore,
    state: &WizardState,
    theme: &Theme,
) {
    let step = store.step_key();
    let mut title = vec![
        Span::styled("Prompt Refinery", theme.header),
        Span::raw(format!(
            " - Step {}/{}: {}",
            store.current_step() + 1,
            WizardStep::COUNT,
            step.label()
        )),
    ];
    if let Some(template) = store.applied_template().and_then(find_template) {
        title.push(Span::styled(format!("  [{}]", template.name), theme.checked));
    }

    let status = state.status.clone().unwrap_or_default();
    let header = Paragraph::new(vec![
        Line::from(title),
        Line::from(Span::styled(status, theme.help)),
    ]);
    f.render_widget(header, area);
}

fn draw_step(
    f: &mut Frame,
    area: Rect,
    step: WizardStep,
    answers: &AnswerSet,
    state: &WizardState,
    theme: &Theme,
    config: &Config,
) {
    let guidance = if config.ui.show_guidance {
        guidance_for(step, answers)
    } else {
        None
    };

    let mut constraints = vec![Constraint::Min(5)];
    if state.editing.is_some() {
        constraints.push(Constraint::Length(8));
    }
    if guidance.is_some() {
        constraints.push(Constraint::Length(7));
    }
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let rows = step_rows(step, answers);
    let items: Vec<ListItem> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let style = row_style(row, i == state.selected, theme);
            ListItem::new(Line::from(Span::styled(row.display(), style)))
        })
        .collect();
    let list = List::new(items)
        .block(Block::default().title(step.label()).borders(Borders::ALL));
    f.render_widget(list, chunks[0]);

    let mut next_chunk = 1;
    if let Some(field) = state.editing {
        let mut text = state.buffer.clone();
        let byte_pos = text
            .char_indices()
            .nth(state.cursor_pos)
            .map(|(i, _)| i)
            .unwrap_or(text.len());
        text.insert(byte_pos, '▏');
        let editor = Paragraph::new(text)
            .style(theme.selected)
            .block(
                Block::default()
                    .title(format!(
                        "{} ({}/{})",
                        field.label(),
                        state.buffer.chars().count(),
                        field.max_chars()
                    ))
                    .borders(Borders::ALL),
            )
            .wrap(Wrap { trim: false });
        f.render_widget(editor, chunks[next_chunk]);
        next_chunk += 1;
    }

    if let Some(guidance) = guidance {
        let mut lines: Vec<Line> = guidance
            .suggestions
            .iter()
            .map(|s| Line::from(format!("• {}", s)))
            .collect();
        lines.push(Line::from(Span::styled(
            format!("d: use default ({})", guidance.default_label),
            theme.help,
        )));
        let card = Paragraph::new(lines)
            .style(theme.guidance)
            .block(Block::default().title(guidance.title).borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(card, chunks[next_chunk]);
    }
}

fn row_style(row: &StepRow, selected: bool, theme: &Theme) -> ratatui::style::Style {
    if selected {
        return theme.selected;
    }
    match row.kind {
        RowKind::Heading => theme.header,
        RowKind::Choice { checked: true, .. } => theme.checked,
        _ => theme.normal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{DetailLevel, Task, Tool};
    use crate::tui::widgets::TextField;
    use ratatui::backend::TestBackend;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn feed(keys: &[KeyCode], state: &mut WizardState, store: &mut WizardStore) -> KeyOutcome {
        let config = Config::default();
        let mut outcome = KeyOutcome::Continue;
        for code in keys {
            outcome = handle_key(press(*code), state, store, &config);
        }
        outcome
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_step_navigation_and_selection() {
        let mut store = WizardStore::new();
        let mut state = WizardState::new();

        feed(&[KeyCode::Down, KeyCode::Down, KeyCode::Enter], &mut state, &mut store);
        assert_eq!(store.data().task, Task::ExplainCode);

        feed(&[KeyCode::Right, KeyCode::Right], &mut state, &mut store);
        assert_eq!(store.step_key(), WizardStep::Framework);
        assert_eq!(state.selected, 1);

        feed(&[KeyCode::Left, KeyCode::Left, KeyCode::Left], &mut state, &mut store);
        assert_eq!(store.current_step(), 0);
    }

    #[test]
    fn test_quit_and_finish() {
        let mut store = WizardStore::new();
        let mut state = WizardState::new();
        let config = Config::default();
        assert_eq!(feed(&[KeyCode::Char('q')], &mut state, &mut store), KeyOutcome::Quit);
        let finish = KeyEvent::new(KeyCode::Char('e'), KeyModifiers::CONTROL);
        assert_eq!(handle_key(finish, &mut state, &mut store, &config), KeyOutcome::Finish);
    }

    #[test]
    fn test_editing_context_swallows_shortcuts() {
        let mut store = WizardStore::new();
        let mut state = WizardState::new();
        store.set_current_step(3);
        state.selected = 0;

        feed(&[KeyCode::Char('e')], &mut state, &mut store);
        assert_eq!(state.editing, Some(TextField::ContextDetails));
        let outcome = feed(
            &[KeyCode::Char('q'), KeyCode::Enter, KeyCode::Char('r'), KeyCode::Esc],
            &mut state,
            &mut store,
        );
        assert_eq!(outcome, KeyOutcome::Continue);
        assert_eq!(store.data().context.details, "q\nr");
        assert!(state.editing.is_none());
    }

    #[test]
    fn test_ctrl_c_quits_while_editing() {
        let mut store = WizardStore::new();
        let mut state = WizardState::new();
        let config = Config::default();
        store.set_current_step(3);
        feed(&[KeyCode::Char('e'), KeyCode::Char('x')], &mut state, &mut store);
        assert_eq!(state.editing, Some(TextField::ContextDetails));

        let ctrl_u = KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL);
        assert_eq!(handle_key(ctrl_u, &mut state, &mut store, &config), KeyOutcome::Continue);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key(ctrl_c, &mut state, &mut store, &config), KeyOutcome::Quit);
        assert_eq!(store.data().context.details, "x");
    }

    #[test]
    fn test_framework_default_with_unknown_language() {
        let mut store = WizardStore::new();
        let mut state = WizardState::new();
        store.set_language(crate::schema::Language::Unknown);
        store.set_framework(crate::schema::Framework::Unknown);
        store.set_current_step(2);

        feed(&[KeyCode::Char('d')], &mut state, &mut store);
        assert_eq!(store.data().framework, crate::schema::Framework::Node);
        assert_eq!(state.status.as_deref(), Some("Applied suggested default"));
        assert!(guidance_for(WizardStep::Framework, store.data()).is_none());

        feed(&[KeyCode::Char('d')], &mut state, &mut store);
        assert!(state.status.is_none());
    }

    #[test]
    fn test_use_default_and_templates() {
        let mut store = WizardStore::new();
        let mut state = WizardState::new();

        store.set_current_step(6);
        store.toggle_tool(Tool::Unknown);
        feed(&[KeyCode::Char('d')], &mut state, &mut store);
        assert_eq!(store.data().tools.selections, vec![Tool::UnitTests]);

        feed(&[KeyCode::Char('1')], &mut state, &mut store);
        assert_eq!(store.applied_template(), Some(TemplateId::BugFix));
        assert_eq!(store.data().style.detail_level, DetailLevel::StepByStep);
        assert_eq!(store.current_step(), 0);
        assert_eq!(state.status.as_deref(), Some("Applied template: Bug Fix"));

        feed(&[KeyCode::Char('r')], &mut state, &mut store);
        assert_eq!(*store.data(), AnswerSet::default());
    }

    #[test]
    fn test_draw_shows_preview_and_checklist() {
        let store = WizardStore::new();
        let state = WizardState::new();
        let theme = Theme::dark();
        let config = Config::default();
        let mut terminal = Terminal::new(TestBackend::new(160, 48)).unwrap();

        terminal
            .draw(|f| draw_wizard(f, &state, &store, "t=write-code", &theme, &config))
            .unwrap();
        let text = screen_text(&terminal);
        assert!(text.contains("Step 1/8: Task Type"));
        assert!(text.contains("Prompt Preview"));
        assert!(text.contains("## Role"));
        assert!(text.contains("Specificity: 3/5"));
        assert!(text.contains("?t=write-code"));
    }

    #[test]
    fn test_draw_guidance_card() {
        let mut store = WizardStore::new();
        store.set_target(crate::schema::Target::Unknown);
        store.set_current_step(7);
        let state = WizardState::new();
        let mut terminal = Terminal::new(TestBackend::new(160, 48)).unwrap();

        terminal
            .draw(|f| draw_wizard(f, &state, &store, "", &Theme::light(), &Config::default()))
            .unwrap();
        assert!(screen_text(&terminal).contains("Target unclear?"));
    }
}
