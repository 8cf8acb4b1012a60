use anyhow::{Context, Result};
use clap::{Args as ClapArgs, Parser, Subcommand};
use prompt_refinery::codec::{encode_state, query_from_link, share_link, try_decode_state};
use prompt_refinery::export::{self, ExportFormat};
use prompt_refinery::prompt::{badge_text, build_prompt, compute_checklist};
use prompt_refinery::store::WizardStore;
use prompt_refinery::templates::{catalog, find_template, TemplateId};
use prompt_refinery::{config, tui, AnswerSet};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "prompt-refinery")]
#[command(about = "Build structured prompts for AI coding assistants")]
#[command(version)]
struct Args {
    /// Use this config file instead of the default location
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Answer the questions interactively with a live prompt preview
    Wizard {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Print the generated Markdown prompt
    Prompt {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Print the prompt quality checklist
    Score {
        #[command(flatten)]
        source: SourceArgs,

        /// Print raw scores as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print a shareable link that restores the answers
    Share {
        #[command(flatten)]
        source: SourceArgs,

        /// Override the configured base URL
        #[arg(long)]
        base_url: Option<String>,
    },
    /// Write the prompt to a file
    Export {
        #[command(flatten)]
        source: SourceArgs,

        #[arg(long, value_enum, default_value_t = ExportFormat::Markdown)]
        format: ExportFormat,

        /// Output file (defaults to prompt.md / prompt.json in the export directory)
        #[arg(long, short)]
        output: Option<String>,

        /// Write single-line JSON
        #[arg(long)]
        compact: bool,
    },
    /// List the bundled templates
    Templates,
}

/// Where the starting answers come from
#[derive(ClapArgs, Debug, Default)]
struct SourceArgs {
    /// Start from a bundled template
    #[arg(long, short)]
    template: Option<TemplateId>,

    /// Query string or full share link to restore
    #[arg(long, short)]
    query: Option<String>,

    /// Start from an exported JSON document or answer set
    #[arg(long, conflicts_with = "template")]
    from_json: Option<String>,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "prompt_refinery=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    // Load configuration
    let config = match &args.config {
        Some(path) => config::load_config_from(&export::expand_path(path))?,
        None => config::load_config()?,
    };

    match args.command {
        Command::Wizard { source } => {
            let store = build_store(&source)?;
            if let Some(answers) = tui::run_wizard(&config, store)? {
                println!("{}", build_prompt(&answers));
                let link = share_link(&config.share.base_url, &answers)?;
                eprintln!("Share link: {}", link);
            }
        }
        Command::Prompt { source } => {
            let store = build_store(&source)?;
            println!("{}", build_prompt(store.data()));
        }
        Command::Score { source, json } => {
            let store = build_store(&source)?;
            let scores = compute_checklist(store.data());
            if json {
                println!("{}", serde_json::to_string_pretty(&scores)?);
            } else {
                for (key, raw) in scores.entries() {
                    println!("{}", badge_text(key, raw));
                }
            }
        }
        Command::Share { source, base_url } => {
            let store = build_store(&source)?;
            let base = base_url.as_deref().unwrap_or(&config.share.base_url);
            let link = share_link(base, store.data())
                .with_context(|| format!("Invalid base URL: {}", base))?;
            println!("{}", link);
        }
        Command::Export {
            source,
            format,
            output,
            compact,
        } => {
            let store = build_store(&source)?;
            let pretty = config.export.pretty_json && !compact;
            let path = match output {
                Some(path) => {
                    let path = export::expand_path(&path);
                    export::write_export_to(&path, store.data(), format, pretty)?;
                    path
                }
                None => {
                    let directory = config.export.directory.to_string_lossy();
                    let directory = export::expand_path(&directory);
                    export::write_export(&directory, store.data(), format, pretty)?
                }
            };
            println!("Wrote {}", path.display());
        }
        Command::Templates => {
            for template in catalog() {
                println!(
                    "{:<18} {:<18} {}",
                    template.id.as_str(),
                    template.name,
                    template.description
                );
            }
        }
    }

    Ok(())
}

/// Assemble the starting state: JSON or template first, then the query on top
fn build_store(source: &SourceArgs) -> Result<WizardStore> {
    let mut store = match &source.from_json {
        Some(path) => {
            let path = export::expand_path(path);
            let contents = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let answers = export::import_json(&contents)
                .with_context(|| format!("Failed to import {}", path.display()))?;
            WizardStore::with_answers(answers)
        }
        None => WizardStore::new(),
    };

    if let Some(id) = source.template {
        let template =
            find_template(id).with_context(|| format!("Template not bundled: {}", id))?;
        store.apply_template(&template.preset, template.id);
    }

    if let Some(raw) = &source.query {
        let query = query_from_link(raw);
        match try_decode_state(&query) {
            Ok(snapshot) => store.hydrate(snapshot.as_ref()),
            Err(err) => tracing::warn!("Ignoring query: {}", err),
        }
    }

    tracing::debug!("Starting state: {}", encode_state(store.data()));
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use prompt_refinery::schema::{Framework, Language, Task};

    #[test]
    fn test_cli_parses_source_flags() {
        let args = Args::try_parse_from([
            "prompt-refinery",
            "prompt",
            "--template",
            "code-review",
            "--query",
            "?t=refactor",
        ])
        .unwrap();
        match args.command {
            Command::Prompt { source } => {
                assert_eq!(source.template, Some(TemplateId::CodeReview));
                assert_eq!(source.query.as_deref(), Some("?t=refactor"));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_template() {
        let parsed = Args::try_parse_from(["prompt-refinery", "prompt", "--template", "haiku"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_template_then_query() {
        let source = SourceArgs {
            template: Some(TemplateId::AlgorithmDesign),
            query: Some("https://example.dev/?t=refactor&l=rust&zz=1".to_string()),
            from_json: None,
        };
        let store = build_store(&source).unwrap();
        let data: &AnswerSet = store.data();
        assert_eq!(data.task, Task::Refactor);
        assert_eq!(data.language, Language::Rust);
        // the template left the runtime open and rust permits that
        assert_eq!(data.framework, Framework::Unknown);
        assert_eq!(store.applied_template(), Some(TemplateId::AlgorithmDesign));
    }

    #[test]
    fn test_bad_query_falls_back() {
        let source = SourceArgs {
            query: Some("t=launch-rockets".to_string()),
            ..SourceArgs::default()
        };
        let store = build_store(&source).unwrap();
        assert_eq!(*store.data(), AnswerSet::default());
    }

    #[test]
    fn test_from_json_source() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut answers = AnswerSet::default();
        answers.task = Task::AddTests;
        let path = export::write_export(dir.path(), &answers, ExportFormat::Json, true).unwrap();

        let source = SourceArgs {
            from_json: Some(path.to_string_lossy().into_owned()),
            ..SourceArgs::default()
        };
        assert_eq!(build_store(&source).unwrap().data().task, Task::AddTests);
    }
}
