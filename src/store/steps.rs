use serde::Serialize;
use std::fmt;

/// The wizard's pages, in the order they are visited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WizardStep {
    Task,
    Language,
    Framework,
    Context,
    Constraints,
    Style,
    Tools,
    Target,
}

impl WizardStep {
    pub const ALL: &'static [WizardStep] = &[
        WizardStep::Task,
        WizardStep::Language,
        WizardStep::Framework,
        WizardStep::Context,
        WizardStep::Constraints,
        WizardStep::Style,
        WizardStep::Tools,
        WizardStep::Target,
    ];

    pub const COUNT: usize = WizardStep::ALL.len();

    /// Step at `index`, or the first step when out of range
    pub fn from_index(index: usize) -> WizardStep {
        WizardStep::ALL
            .get(index)
            .copied()
            .unwrap_or(WizardStep::Task)
    }

    pub fn index(self) -> usize {
        WizardStep::ALL
            .iter()
            .position(|s| *s == self)
            .unwrap_or_default()
    }

    pub fn label(self) -> &'static str {
        match self {
            WizardStep::Task => "Task Type",
            WizardStep::Language => "Language",
            WizardStep::Framework => "Framework",
            WizardStep::Context => "Context",
            WizardStep::Constraints => "Constraints",
            WizardStep::Style => "Style & Output",
            WizardStep::Tools => "Tools",
            WizardStep::Target => "Target Model",
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Clamp a requested step index into the valid range
pub fn clamp_step(index: isize) -> usize {
    index.clamp(0, WizardStep::COUNT as isize - 1) as usize
}

/// Position of `current` along the wizard as a 0-100 percentage
pub fn progress_percent(current: usize) -> u16 {
    if WizardStep::COUNT <= 1 {
        return 0;
    }
    let ratio = current.min(WizardStep::COUNT - 1) as f64 / (WizardStep::COUNT - 1) as f64;
    (ratio * 100.0).round() as u16
}
