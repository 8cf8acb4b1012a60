use crate::prompt::ScoreLevel;
use ratatui::style::{Color, Modifier, Style};

pub struct Theme {
    pub normal: Style,
    pub selected: Style,
    pub checked: Style,
    pub header: Style,
    pub preview: Style,
    pub guidance: Style,
    pub help: Style,
    pub good: Style,
    pub fair: Style,
    pub missing: Style,
}

impl Theme {
    /// `light` or anything else for dark
    pub fn from_name(name: &str) -> Self {
        if name == "light" {
            Self::light()
        } else {
            Self::dark()
        }
    }

    pub fn dark() -> Self {
        Self {
            normal: Style::default().fg(Color::White),
            selected: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            checked: Style::default().fg(Color::Yellow),
            header: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            preview: Style::default().fg(Color::Green),
            guidance: Style::default().fg(Color::Magenta),
            help: Style::default().fg(Color::DarkGray),
            good: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            fair: Style::default().fg(Color::Yellow),
            missing: Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        }
    }

    pub fn light() -> Self {
        Self {
            normal: Style::default().fg(Color::Black),
            selected: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            checked: Style::default().fg(Color::Red),
            header: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            preview: Style::default().fg(Color::DarkGray),
            guidance: Style::default().fg(Color::Magenta),
            help: Style::default().fg(Color::Gray),
            good: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            fair: Style::default().fg(Color::Rgb(180, 120, 0)),
            missing: Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        }
    }

    pub fn score(&self, level: ScoreLevel) -> Style {
        match level {
            ScoreLevel::Good => self.good,
            ScoreLevel::Fair => self.fair,
            ScoreLevel::Missing => self.missing,
        }
    }
}
