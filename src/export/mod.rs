//! Markdown and JSON export of the current answers, and JSON import.

mod import;

pub use import::import_json;

use crate::prompt::build_prompt;
use crate::schema::AnswerSet;
use crate::Result;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    #[value(alias = "md")]
    Markdown,
    Json,
}

impl ExportFormat {
    pub fn default_file_name(self) -> &'static str {
        match self {
            ExportFormat::Markdown => "prompt.md",
            ExportFormat::Json => "prompt.json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Markdown => f.write_str("markdown"),
            ExportFormat::Json => f.write_str("json"),
        }
    }
}

/// `{prompt, data}` as written to `prompt.json`
#[derive(Debug, Serialize)]
pub struct ExportDocument<'a> {
    pub prompt: String,
    pub data: &'a AnswerSet,
}

impl<'a> ExportDocument<'a> {
    pub fn new(answers: &'a AnswerSet) -> Self {
        Self {
            prompt: build_prompt(answers),
            data: answers,
        }
    }
}

pub fn export_markdown(answers: &AnswerSet) -> String {
    build_prompt(answers)
}

pub fn export_json(answers: &AnswerSet, pretty: bool) -> Result<String> {
    let document = ExportDocument::new(answers);
    let json = if pretty {
        serde_json::to_string_pretty(&document)?
    } else {
        serde_json::to_string(&document)?
    };
    Ok(json)
}

pub fn render(answers: &AnswerSet, format: ExportFormat, pretty: bool) -> Result<String> {
    match format {
        ExportFormat::Markdown => Ok(export_markdown(answers)),
        ExportFormat::Json => export_json(answers, pretty),
    }
}

/// Expand `~` and environment variables in a user-supplied path
pub fn expand_path(raw: &str) -> PathBuf {
    match shellexpand::full(raw) {
        Ok(expanded) => PathBuf::from(expanded.as_ref()),
        Err(_) => PathBuf::from(shellexpand::tilde(raw).as_ref()),
    }
}

/// Write an export into `directory` under the format's default file name
pub fn write_export(
    directory: &Path,
    answers: &AnswerSet,
    format: ExportFormat,
    pretty: bool,
) -> Result<PathBuf> {
    let path = directory.join(format.default_file_name());
    write_export_to(&path, answers, format, pretty)?;
    Ok(path)
}

/// Write an export to an explicit file path, creating parent directories
pub fn write_export_to(
    path: &Path,
    answers: &AnswerSet,
    format: ExportFormat,
    pretty: bool,
) -> Result<()> {
    let contents = render(answers, format, pretty)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, contents)?;
    tracing::info!("Exported {} to {:?}", format, path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Task;
    use tempfile::TempDir;

    #[test]
    fn test_markdown_is_exact_builder_output() {
        let answers = AnswerSet::default();
        assert_eq!(export_markdown(&answers), build_prompt(&answers));
    }

    #[test]
    fn test_json_document_shape() {
        let answers = AnswerSet::default();
        let json = export_json(&answers, true).unwrap();
        assert!(json.starts_with("{\n  \"prompt\": "));

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["prompt"], build_prompt(&answers));
        assert_eq!(value["data"]["task"], "write-code");
        assert_eq!(value["data"]["frontendFrameworks"][0], "react");
        assert_eq!(value["data"]["style"]["detailLevel"], "detailed");
    }

    #[test]
    fn test_compact_json() {
        let json = export_json(&AnswerSet::default(), false).unwrap();
        assert!(!json.contains('\n'));
    }

    #[test]
    fn test_write_export_uses_default_names() {
        let dir = TempDir::new().unwrap();
        let mut answers = AnswerSet::default();
        answers.task = Task::Refactor;

        let md = write_export(dir.path(), &answers, ExportFormat::Markdown, true).unwrap();
        assert_eq!(md.file_name().unwrap(), "prompt.md");
        assert_eq!(std::fs::read_to_string(&md).unwrap(), build_prompt(&answers));

        let json = write_export(dir.path(), &answers, ExportFormat::Json, true).unwrap();
        assert_eq!(json.file_name().unwrap(), "prompt.json");
        let imported = import_json(&std::fs::read_to_string(&json).unwrap()).unwrap();
        assert_eq!(imported, answers);
    }

    #[test]
    fn test_write_export_to_creates_parents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out").join("refined.md");
        write_export_to(&path, &AnswerSet::default(), ExportFormat::Markdown, true).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_export_format_parsing() {
        use clap::ValueEnum;
        assert_eq!(ExportFormat::from_str("md", false), Ok(ExportFormat::Markdown));
        assert_eq!(ExportFormat::from_str("json", false), Ok(ExportFormat::Json));
        assert!(ExportFormat::from_str("yaml", false).is_err());
    }

    #[test]
    fn test_expand_path_plain() {
        assert_eq!(expand_path("out/prompts"), PathBuf::from("out/prompts"));
    }
}
