use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Once;

use clap::{Parser, Subcommand};
use cssls_core::format::FormatMode;

mod commands;
#[cfg(test)]
mod main_test;

use commands::Outcome;

static TRACE_INIT: Once = Once::new();
const LOG_ENV: &str = "CSSLS_LOG";
const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Parser)]
#[command(name = "cssls", author, version, about = "Check, format and inspect CSS files", long_about = None)]
struct CliArgs {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Report syntax errors and lint findings as `path:line:col: severity: message`.
    Check {
        /// Fail on any finding, not only errors
        #[arg(long)]
        deny_warnings: bool,
        #[arg(value_name = "FILE", required = true)]
        files: Vec<PathBuf>,
    },
    /// Pretty-print a stylesheet to stdout, or rewrite it in place.
    Format {
        #[arg(long, default_value_t = FormatMode::Expanded)]
        mode: FormatMode,
        #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u32).range(1..=8))]
        tab_size: u32,
        /// Indent with tabs instead of spaces
        #[arg(long)]
        use_tabs: bool,
        #[arg(long, default_value_t = 80)]
        print_width: usize,
        /// Overwrite FILE with the formatted text
        #[arg(long, conflicts_with = "check")]
        write: bool,
        /// Exit with status 1 when FILE is not already formatted
        #[arg(long)]
        check: bool,
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// List the colors used in a stylesheet with their alternative notations.
    Colors {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

fn init_tracing() {
    TRACE_INIT.call_once(|| {
        use tracing_subscriber::EnvFilter;
        use tracing_subscriber::fmt;

        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
        let _ = fmt().with_writer(std::io::stderr).with_env_filter(filter).try_init();
    });
}

fn run(args: CliArgs) -> anyhow::Result<Outcome> {
    match args.command {
        Commands::Check { deny_warnings, files } => commands::check_files(&files, deny_warnings),
        Commands::Format {
            mode,
            tab_size,
            use_tabs,
            print_width,
            write,
            check,
            file,
        } => {
            let options = cssls_core::format::FormatOptions {
                tab_size,
                insert_spaces: !use_tabs,
                mode,
                print_width,
            };
            let action = if write {
                commands::FormatAction::Write
            } else if check {
                commands::FormatAction::Check
            } else {
                commands::FormatAction::Print
            };
            commands::format_file(&file, &options, action)
        }
        Commands::Colors { json, file } => commands::list_colors(&file, json),
    }
}

fn main() -> ExitCode {
    init_tracing();
    let args = CliArgs::parse();
    match run(args) {
        Ok(outcome) => outcome.exit_code(),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(2)
        }
    }
}
