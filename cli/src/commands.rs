use std::fmt::Write as _;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use cssls_core::{
    analysis::{self, Diagnostic, Severity},
    ast::{self, Stylesheet},
    color::{self, Color},
    format::{self, FormatOptions},
    token::{Range, Span, span_to_range},
    vars::LocalVariables,
};
use serde::Serialize;
use tracing::debug;

/// Result of a command that ran to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    Clean,
    /// Findings worth a non-zero exit (errors, warnings under `--deny-warnings`,
    /// unformatted input under `--check`).
    Findings,
}

impl Outcome {
    pub(crate) fn exit_code(self) -> ExitCode {
        match self {
            Outcome::Clean => ExitCode::SUCCESS,
            Outcome::Findings => ExitCode::from(1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FormatAction {
    Print,
    Write,
    Check,
}

fn read_source(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file '{}'", path.display()))
}

fn parse_source(source: &str) -> (Stylesheet, Vec<cssls_core::token::ParseError>) {
    let (sheet, errors) = ast::parse(source);
    if !errors.is_empty() {
        debug!("{} parse errors", errors.len());
    }
    (sheet, errors)
}

/// `path:line:col: severity: message`, with 1-based line and column.
pub(crate) fn render_diagnostic(path: &Path, diagnostic: &Diagnostic) -> String {
    format!(
        "{}:{}:{}: {}: {}",
        path.display(),
        diagnostic.range.start.line + 1,
        diagnostic.range.start.character + 1,
        diagnostic.severity.as_str(),
        diagnostic.message
    )
}

pub(crate) fn fails_check(diagnostics: &[Diagnostic], deny_warnings: bool) -> bool {
    if deny_warnings {
        !diagnostics.is_empty()
    } else {
        diagnostics.iter().any(|d| d.severity == Severity::Error)
    }
}

pub(crate) fn check_files(files: &[impl AsRef<Path>], deny_warnings: bool) -> anyhow::Result<Outcome> {
    let mut stdout = io::stdout().lock();
    let mut failed = false;
    let (mut errors, mut others) = (0usize, 0usize);
    for path in files {
        let path = path.as_ref();
        let source = read_source(path)?;
        let (sheet, parse_errors) = parse_source(&source);
        let diagnostics = analysis::analyze(&sheet, &source, &parse_errors);
        debug!("checked {} ({} diagnostics)", path.display(), diagnostics.len());

        let mut ordered: Vec<&Diagnostic> = diagnostics.iter().collect();
        ordered.sort_by_key(|d| (d.span.start, d.severity));
        for diagnostic in ordered {
            writeln!(stdout, "{}", render_diagnostic(path, diagnostic))?;
        }
        errors += diagnostics.iter().filter(|d| d.severity == Severity::Error).count();
        others += diagnostics.iter().filter(|d| d.severity != Severity::Error).count();
        failed |= fails_check(&diagnostics, deny_warnings);
    }
    if errors + others > 0 {
        eprintln!("{errors} error(s), {others} other finding(s) in {} file(s)", files.len());
    }
    Ok(if failed { Outcome::Findings } else { Outcome::Clean })
}

pub(crate) fn format_file(path: &Path, options: &FormatOptions, action: FormatAction) -> anyhow::Result<Outcome> {
    let source = read_source(path)?;
    let (sheet, _) = parse_source(&source);
    let formatted = format::format(&sheet, &source, options);
    match action {
        FormatAction::Print => {
            io::stdout().lock().write_all(formatted.as_bytes())?;
            Ok(Outcome::Clean)
        }
        FormatAction::Write => {
            if formatted != source {
                fs::write(path, &formatted).with_context(|| format!("Failed to write file '{}'", path.display()))?;
                debug!("rewrote {}", path.display());
            }
            Ok(Outcome::Clean)
        }
        FormatAction::Check => {
            if formatted == source {
                Ok(Outcome::Clean)
            } else {
                println!("{}: not formatted", path.display());
                Ok(Outcome::Findings)
            }
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ColorEntry {
    pub(crate) span: Span,
    pub(crate) range: Range,
    pub(crate) color: Color,
    pub(crate) presentations: Vec<String>,
}

/// Colors in `source`, `var()` references resolved against its own custom properties.
pub(crate) fn color_entries(source: &str) -> Vec<ColorEntry> {
    let (sheet, _) = parse_source(source);
    let locals = LocalVariables::from_sheet(&sheet, source);
    color::find_colors(&sheet, Some(&locals))
        .into_iter()
        .map(|found| ColorEntry {
            span: found.span,
            range: span_to_range(source, found.span),
            color: found.color,
            presentations: color::presentations(&found.color),
        })
        .collect()
}

/// One line per color: `line:col  text  hex  rgb  hsl`.
pub(crate) fn render_colors(source: &str, entries: &[ColorEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        let _ = write!(
            out,
            "{}:{}\t{}",
            entry.range.start.line + 1,
            entry.range.start.character + 1,
            entry.span.text(source)
        );
        for p in &entry.presentations {
            let _ = write!(out, "\t{p}");
        }
        out.push('\n');
    }
    out
}

pub(crate) fn list_colors(path: &Path, json: bool) -> anyhow::Result<Outcome> {
    let source = read_source(path)?;
    let entries = color_entries(&source);
    let mut stdout = io::stdout().lock();
    if json {
        let text = serde_json::to_string_pretty(&entries).context("Failed to serialize colors")?;
        writeln!(stdout, "{text}")?;
    } else {
        stdout.write_all(render_colors(&source, &entries).as_bytes())?;
    }
    Ok(Outcome::Clean)
}
