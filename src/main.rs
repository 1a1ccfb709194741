//! pubdoc — lint documentation comments in Ruby source files.
//!
//! Supports two modes:
//!
//! - **stdin mode**: `pubdoc < app/models/admin.rb`
//! - **file mode**: `pubdoc -f json app/models 'lib/**/*.rb'`

use anyhow::{bail, Context, Result};
use clap::Parser;
use pubdoc::report::{create_reporter, FileReport};
use pubdoc::{check_source, Diagnostic};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "pubdoc",
    about = "Lint documentation comments above public Ruby classes and methods"
)]
struct Cli {
    /// Input files, directories, or glob patterns. If omitted, reads from stdin.
    files: Vec<String>,

    /// Output format: human (default), json
    #[arg(short = 'f', long, default_value = "human")]
    format: String,

    /// Run only the named checks (method-doc, class-doc).
    /// Can be specified multiple times.
    #[arg(long)]
    only: Vec<String>,
}

/// Check names accepted by --only.
const CHECKS: &[&str] = &["method-doc", "class-doc"];

fn main() -> Result<()> {
    let cli = Cli::parse();

    for check in &cli.only {
        if !CHECKS.contains(&check.as_str()) {
            bail!("unknown check: {}. Use method-doc or class-doc", check);
        }
    }
    let reporter = create_reporter(&cli.format)?;

    let reports = if cli.files.is_empty() {
        // stdin mode
        vec![stdin_report(&cli)?]
    } else {
        file_reports(&cli)?
    };

    print!("{}", reporter.render(&reports));

    if reports.iter().any(|r| !r.diagnostics.is_empty()) {
        std::process::exit(1);
    }
    Ok(())
}

/// stdin mode: lint a single source read from stdin.
fn stdin_report(cli: &Cli) -> Result<FileReport> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    Ok(FileReport {
        path: "(stdin)".to_string(),
        diagnostics: lint(&input, &cli.only),
    })
}

/// file mode: lint every file the arguments expand to.
fn file_reports(cli: &Cli) -> Result<Vec<FileReport>> {
    let input_files = expand_globs(&cli.files)?;

    let mut reports = Vec::new();
    for path in &input_files {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        reports.push(FileReport {
            path: path.to_string_lossy().to_string(),
            diagnostics: lint(&content, &cli.only),
        });
    }
    Ok(reports)
}

/// Run the checks over one source text, keeping only the selected ones.
fn lint(source: &str, only: &[String]) -> Vec<Diagnostic> {
    let mut diags = check_source(source);
    if !only.is_empty() {
        diags.retain(|d| only.iter().any(|c| c == d.check()));
    }
    diags
}

/// File extensions recognized as Ruby source.
const SUPPORTED_EXTENSIONS: &[&str] = &["rb"];

/// Expand glob patterns into a list of real file paths.
/// Also handles bare directory paths by scanning for supported file types.
fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        // If it's a directory, scan for supported extensions (non-recursive)
        if path.is_dir() {
            let entries = fs::read_dir(path)
                .with_context(|| format!("failed to read directory: {}", path.display()))?;
            for entry in entries.flatten() {
                let p = entry.path();
                if p.is_file() {
                    if let Some(ext) = p.extension().and_then(|e| e.to_str()) {
                        if SUPPORTED_EXTENSIONS.contains(&ext) {
                            files.push(p);
                        }
                    }
                }
            }
            continue;
        }
        // Try as glob
        let matches: Vec<_> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            eprintln!("warning: no files matched: {}", pattern);
        }
        files.extend(matches);
    }
    // Sort for deterministic output
    files.sort();
    files.dedup();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SRC: &str = "class Admin\n  def xxx\n  end\nend\n";

    #[test]
    fn lint_runs_all_checks_by_default() {
        let diags = lint(SRC, &[]);
        let checks: Vec<&str> = diags.iter().map(|d| d.check()).collect();
        assert_eq!(checks, vec!["class-doc", "method-doc"]);
    }

    #[test]
    fn lint_respects_only_filter() {
        let only = vec!["class-doc".to_string()];
        let diags = lint(SRC, &only);
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].check(), "class-doc");
    }
}
