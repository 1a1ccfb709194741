//! Reporter module — trait-based format dispatch.

use crate::diagnostic::Diagnostic;
use anyhow::{anyhow, Result};
use owo_colors::OwoColorize;
use serde::Serialize;

/// Diagnostics for a single linted file, in the order the checks
/// produced them.
#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: String,
    pub diagnostics: Vec<Diagnostic>,
}

/// Trait for rendering file reports into a specific output format.
pub trait Reporter {
    fn render(&self, files: &[FileReport]) -> String;
}

/// Create a reporter for the given format name.
pub fn create_reporter(format: &str) -> Result<Box<dyn Reporter>> {
    match format {
        "human" => Ok(Box::new(HumanReporter {
            color: std::env::var_os("NO_COLOR").is_none(),
        })),
        "json" => Ok(Box::new(JsonReporter)),
        _ => Err(anyhow!("unknown format: {}. Use human or json", format)),
    }
}

// -- Human ---------------------------------------------------------------------

/// Line-per-offense output with a trailing summary. Within a file the
/// offenses are ordered by location, then message.
pub struct HumanReporter {
    pub color: bool,
}

impl Reporter for HumanReporter {
    fn render(&self, files: &[FileReport]) -> String {
        let mut output = String::new();
        let mut offenses = 0usize;
        for file in files {
            let mut diags: Vec<&Diagnostic> = file.diagnostics.iter().collect();
            diags.sort_by_key(|d| (d.span.line, d.span.col, d.message()));
            offenses += diags.len();
            for d in diags {
                let tag = format!("[{}]", d.check());
                if self.color {
                    output.push_str(&format!(
                        "{}:{}:{}: {} {}\n",
                        file.path.bold(),
                        d.span.line,
                        d.span.col,
                        d.message(),
                        tag.bright_black(),
                    ));
                } else {
                    output.push_str(&format!(
                        "{}:{}:{}: {} {}\n",
                        file.path, d.span.line, d.span.col, d.message(), tag,
                    ));
                }
            }
        }
        let summary = summary_line(files.len(), offenses);
        if self.color {
            output.push_str(&format!("{}\n", summary.bold()));
        } else {
            output.push_str(&summary);
            output.push('\n');
        }
        output
    }
}

fn summary_line(files: usize, offenses: usize) -> String {
    let counted = |n: usize, word: &str| {
        if n == 1 {
            format!("{n} {word}")
        } else {
            format!("{n} {word}s")
        }
    };
    if offenses == 0 {
        format!("{} inspected, no offenses found", counted(files, "file"))
    } else {
        format!(
            "{} inspected, {} found",
            counted(files, "file"),
            counted(offenses, "offense")
        )
    }
}

// -- JSON ----------------------------------------------------------------------

/// Machine-readable output: the full document with a per-file offense
/// list and a top-level summary. Offense order is preserved as checked.
pub struct JsonReporter;

#[derive(Serialize)]
struct JsonReport {
    files: Vec<JsonFile>,
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonFile {
    path: String,
    offenses: Vec<JsonOffense>,
}

#[derive(Serialize)]
struct JsonOffense {
    check: &'static str,
    kind: &'static str,
    message: String,
    location: JsonLocation,
}

#[derive(Serialize)]
struct JsonLocation {
    line: usize,
    column: usize,
    length: usize,
}

#[derive(Serialize)]
struct JsonSummary {
    offense_count: usize,
    file_count: usize,
}

impl Reporter for JsonReporter {
    fn render(&self, files: &[FileReport]) -> String {
        let mut offense_count = 0usize;
        let json_files = files
            .iter()
            .map(|file| {
                offense_count += file.diagnostics.len();
                JsonFile {
                    path: file.path.clone(),
                    offenses: file.diagnostics.iter().map(offense).collect(),
                }
            })
            .collect();
        let report = JsonReport {
            files: json_files,
            summary: JsonSummary { offense_count, file_count: files.len() },
        };
        let mut output = serde_json::to_string_pretty(&report).unwrap();
        output.push('\n');
        output
    }
}

fn offense(d: &Diagnostic) -> JsonOffense {
    JsonOffense {
        check: d.check(),
        kind: d.kind.code(),
        message: d.message(),
        location: JsonLocation {
            line: d.span.line,
            column: d.span.col,
            length: d.span.len,
        },
    }
}
