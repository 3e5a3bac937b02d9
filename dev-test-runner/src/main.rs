//! Golden-fixture runner.
//!
//! usage: dev-test-runner [--dir FIXTURES_DIR] [--filter NAME_REGEX]
//!
//! Every `<name>.ast.json` in the directory is converted with the default
//! configuration and compared against `<name>.model.json`.
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use bal_doc_model::{ModelConfig, SourceRenderer, build_document, input};
use clap::Parser;
use colored::Colorize;
use regex::Regex;
use serde_json::Value;

/// compare built documents against golden `*.model.json` files
#[derive(Parser, Debug)]
struct Settings {
    /// directory holding `<name>.ast.json` / `<name>.model.json` pairs
    #[arg(long, default_value = "fixtures")]
    dir: PathBuf,

    /// only run fixtures whose name matches this regex
    #[arg(long)]
    filter: Option<Regex>,
}

fn fixtures(dir: &Path, filter: Option<&Regex>) -> anyhow::Result<Vec<(String, PathBuf)>> {
    let pattern = dir.join("*.ast.json");
    let pattern = pattern.to_string_lossy();
    let mut out = Vec::new();
    for entry in glob::glob(&pattern).with_context(|| format!("bad fixture pattern {pattern}"))? {
        let path = entry?;
        let Some(stem) = path
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(|n| n.strip_suffix(".ast.json"))
            .map(str::to_string)
        else {
            continue;
        };
        if filter.is_some_and(|rx| !rx.is_match(&stem)) {
            continue;
        }
        out.push((stem, path));
    }
    out.sort();
    Ok(out)
}

fn check(dir: &Path, name: &str, ast_path: &Path) -> anyhow::Result<()> {
    let file = input::load_file(ast_path, None)?;
    let actual = build_document(&file, &ModelConfig::default(), SourceRenderer).to_value();
    let expected_path = dir.join(format!("{name}.model.json"));
    let expected_src = std::fs::read_to_string(&expected_path)
        .with_context(|| format!("missing expectation {}", expected_path.display()))?;
    let expected: Value = serde_json::from_str(&expected_src)?;
    if actual != expected {
        bail!(
            "document differs from {}\n--- actual ---\n{}",
            expected_path.display(),
            serde_json::to_string_pretty(&actual)?
        );
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let Settings { dir, filter } = Settings::parse();

    let cases = fixtures(&dir, filter.as_ref())?;
    let mut failed = 0usize;
    for (name, path) in &cases {
        match check(&dir, name, path) {
            Ok(()) => eprintln!("{} {name}", "✅ pass".green()),
            Err(error) => {
                failed += 1;
                eprintln!("{} {name}: {error:#}", "❌ fail".red());
            }
        }
    }
    eprintln!("{} fixture(s), {} failed", cases.len(), failed);
    if failed > 0 {
        bail!("{failed} fixture(s) failed");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixtures_dir() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("../fixtures")
    }

    #[test]
    fn settings_default_to_fixtures_dir() {
        let settings = Settings::parse_from(["dev-test-runner"]);
        assert_eq!(settings.dir, PathBuf::from("fixtures"));
        assert!(settings.filter.is_none());

        let settings = Settings::parse_from(["dev-test-runner", "--dir", "golden", "--filter", "^echo"]);
        assert_eq!(settings.dir, PathBuf::from("golden"));
        assert!(settings.filter.unwrap().is_match("echo_service"));
    }

    #[test]
    fn discovers_ast_files_and_applies_filter() {
        let names: Vec<String> = fixtures(&fixtures_dir(), None).unwrap().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["calc_connector", "echo_service"]);

        let only_echo = Regex::new("echo").unwrap();
        let cases = fixtures(&fixtures_dir(), Some(&only_echo)).unwrap();
        assert_eq!(cases.len(), 1);
        assert!(check(&fixtures_dir(), &cases[0].0, &cases[0].1).is_ok());
    }
}
