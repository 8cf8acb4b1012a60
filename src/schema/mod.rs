mod answers;
mod compat;
mod merge;
mod partial;
mod validate;
mod values;

pub use answers::{
    clip_text, normalize_selection, toggle_with_unknown, AnswerSet, ConstraintAnswers,
    ContextAnswers, StyleAnswers, ToolAnswers, MAX_CONSTRAINT_CUSTOM, MAX_CONTEXT_DETAILS,
    MAX_CONTEXT_SNIPPET, MAX_SELECTIONS, MAX_TOOL_CUSTOM,
};
pub use compat::{
    allowed_frameworks, allowed_frontend_frameworks, clamp_framework, clamp_frontend_frameworks,
    default_framework, default_frontend, is_framework_allowed, is_frontend_allowed,
};
pub use merge::merge_answers;
pub use partial::{ConstraintsPatch, ContextPatch, PartialAnswerSet, StylePatch, ToolsPatch};
pub use validate::{FieldViolation, ValidationError, Validator, Violation};
pub use values::{
    Constraint, DeliveryOrder, DetailLevel, Framework, FrontendFramework, Inclusion, Language,
    Target, Task, Tool, UnknownValue, Unspecified,
};
