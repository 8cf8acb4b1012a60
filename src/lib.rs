pub mod codec;
pub mod config;
pub mod export;
pub mod prompt;
pub mod schema;
pub mod store;
pub mod templates;
pub mod tui;

pub use config::Config;
pub use schema::{AnswerSet, PartialAnswerSet};
pub use store::WizardStore;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RefineryError {
    #[error(transparent)]
    Validation(#[from] schema::ValidationError),

    #[error("Unknown template '{0}' (expected one of: {ids})", ids = templates::TemplateId::id_list())]
    UnknownTemplate(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid share URL: {0}")]
    Url(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, RefineryError>;
