mod builder;
mod checklist;
pub mod copy;

pub use builder::{build_prompt, build_sections, Section};
pub use checklist::{
    badge_text, compute_checklist, display_score, score_level, ChecklistKey, ChecklistScores,
    ScoreLevel, MAX_DISPLAY_SCORE,
};
