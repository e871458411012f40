use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;

use magic_editor::cli::{CliArgs, CliCommand};
use magic_editor::document::{decode, encode, extract_messages, FlatDocument};
use magic_editor::editable::{Attachment, StyledTextBuffer};
use magic_editor::error::EditorError;
use magic_editor::EditorConfig;

/// Text to print and whether the command succeeded
#[derive(Debug)]
struct Outcome {
    output: String,
    success: bool,
}

impl Outcome {
    fn ok(output: String) -> Self {
        Self {
            output,
            success: true,
        }
    }
}

fn read_document(path: &Path) -> Result<FlatDocument> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    FlatDocument::from_json(&json)
        .with_context(|| format!("{} is not a valid document", path.display()))
}

fn run(command: &CliCommand, config: &EditorConfig) -> Result<Outcome> {
    match command {
        CliCommand::Messages { file } => {
            let document = read_document(file)?;
            for error in document.validate() {
                tracing::warn!("{}: {}", file.display(), error);
            }
            let messages = extract_messages(&document);
            Ok(Outcome::ok(serde_json::to_string_pretty(&messages)?))
        }

        CliCommand::Normalize { file } => {
            let document = read_document(file)?;
            let normalized = encode(&decode(&document))?;
            Ok(Outcome::ok(normalized.to_json_pretty()?))
        }

        CliCommand::Check { file } => {
            let document = read_document(file)?;
            let errors = document.validate();
            if errors.is_empty() {
                return Ok(Outcome::ok(format!(
                    "{}: ok ({} chars, {} attributes)",
                    file.display(),
                    document.len_chars(),
                    document.attributes.len()
                )));
            }
            let output = errors
                .iter()
                .map(|e| format!("{}: {}", file.display(), e))
                .collect::<Vec<_>>()
                .join("\n");
            Ok(Outcome {
                output,
                success: false,
            })
        }

        CliCommand::Import { file, role } => {
            if !config.roles.iter().any(|r| r == role) {
                return Err(EditorError::UnknownRole(role.clone()).into());
            }
            let text = std::fs::read_to_string(file)
                .with_context(|| format!("Failed to read {}", file.display()))?;

            let mut buffer = StyledTextBuffer::new();
            buffer.append_attachment(Attachment::role(role.as_str()))?;
            buffer.append_plain("\n")?;
            buffer.append_plain(&text)?;
            Ok(Outcome::ok(encode(&buffer)?.to_json_pretty()?))
        }
    }
}

fn main() -> Result<()> {
    magic_editor::tracing::init();

    let args = CliArgs::parse();
    let startup = args.into_config().map_err(anyhow::Error::msg)?;
    let config = EditorConfig::load_from(&startup.config_path);

    let outcome = run(&startup.command, &config)?;
    println!("{}", outcome.output);
    if !outcome.success {
        std::process::exit(1);
    }
    Ok(())
}
