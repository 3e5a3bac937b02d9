//! Minimal CLI: AST dump(s) → document model(s)
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use rayon::prelude::*;

use crate::config::{ModelConfig, RenderStrategy};
use crate::error::ModelError;
use crate::render::SourceRenderer;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// turn resolved program trees (JSON dumps) into ordered document models
#[derive(Parser, Debug)]
pub struct CommandLineInterface {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// build the document model for every input file
    Model(ModelOut),
}

#[derive(Args, Debug, Clone)]
struct InputSettings {
    /// JSON Pointer to the file node inside each input (e.g. /result/ast)
    #[arg(long)]
    json_pointer: Option<String>,

    /// One or more inputs. May be literal paths or quoted glob patterns
    #[arg(long, short, num_args = 1.., required = true)]
    input: Vec<String>,
}

#[derive(clap::Parser, Debug)]
struct ModelOut {
    #[command(flatten)]
    input_settings: InputSettings,

    /// write `<stem>.model.json` per input into this directory (stdout if omitted)
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// keep worker and reply statements fully structured (no text forms)
    #[arg(long)]
    structured_only: bool,

    /// single-line JSON instead of pretty-printed
    #[arg(long)]
    compact: bool,

    /// one status line per processed file
    #[arg(short, long)]
    verbose: bool,

    /// debugging
    #[arg(long)]
    no_op: bool,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl ModelOut {
    fn config(&self) -> ModelConfig {
        let strategy = if self.structured_only {
            RenderStrategy::Structured
        } else {
            RenderStrategy::StructuredWithText
        };
        ModelConfig { strategy }
    }

    /// Decodes and converts one input. Each call owns its own emitter.
    fn process(&self, config: &ModelConfig, path: &Path) -> Result<String, ModelError> {
        let file = crate::input::load_file(path, self.input_settings.json_pointer.as_deref())?;
        let doc = crate::build_document(&file, config, SourceRenderer);
        let text = if self.compact {
            serde_json::to_string(&doc)?
        } else {
            serde_json::to_string_pretty(&doc)?
        };
        Ok(text)
    }

    fn write(&self, path: &Path, text: &str) -> anyhow::Result<()> {
        let Some(out_dir) = self.out_dir.as_ref() else {
            println!("{text}");
            return Ok(());
        };
        std::fs::create_dir_all(out_dir)
            .with_context(|| format!("failed to create {}", out_dir.display()))?;
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().trim_end_matches(".ast").to_string())
            .unwrap_or_else(|| "document".to_string());
        let target = out_dir.join(format!("{stem}.model.json"));
        std::fs::write(&target, text).with_context(|| format!("failed to write {}", target.display()))?;
        if self.verbose {
            eprintln!("{} {} → {}", "wrote".green(), path.display(), target.display());
        }
        Ok(())
    }

    fn run(&self) -> anyhow::Result<()> {
        let paths = crate::input::resolve_inputs(&self.input_settings.input)
            .context("failed to resolve input file paths")?;
        let config = self.config();

        let results: Vec<(PathBuf, Result<String, ModelError>)> = paths
            .into_par_iter()
            .map(|path| {
                let result = self.process(&config, &path);
                (path, result)
            })
            .collect();

        let mut failures = 0usize;
        for (path, result) in results {
            match result {
                Ok(text) => self.write(&path, &text)?,
                Err(error) => {
                    failures += 1;
                    eprintln!("{} {}", "failed:".red().bold(), error);
                }
            }
        }
        if failures > 0 {
            bail!("{failures} input file(s) could not be converted");
        }
        Ok(())
    }
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }
    pub fn run(&self) -> anyhow::Result<()> {
        match &self.cmd {
            Command::Model(target) => {
                // debug path
                if target.no_op {
                    eprintln!("{}", format!("{self:#?}").as_str().dimmed());
                    return Ok(());
                }
                target.run()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_map_onto_strategy() {
        let cli = CommandLineInterface::parse_from(["bal-doc-model", "model", "-i", "a.json", "--structured-only"]);
        let Command::Model(target) = &cli.cmd;
        assert_eq!(target.config().strategy, RenderStrategy::Structured);

        let cli = CommandLineInterface::parse_from(["bal-doc-model", "model", "-i", "a.json", "b.json"]);
        let Command::Model(target) = &cli.cmd;
        assert_eq!(target.config().strategy, RenderStrategy::StructuredWithText);
        assert_eq!(target.input_settings.input, vec!["a.json", "b.json"]);
    }
}
