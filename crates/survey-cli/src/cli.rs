//! CLI argument definitions for the survey tools.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use survey_ingest::{DEFAULT_COLUMN_DELIMITER, DEFAULT_HEADER_SEPARATOR, ParserOptions};

#[derive(Parser)]
#[command(
    name = "survey",
    version,
    about = "Survey export tools - inspect, redact, and draw raffle winners",
    long_about = "Work with survey response exports whose headers combine question code and question text.\n\n\
                  Headers are expected as <code><separator><text>, e.g. \"G01Q02[SQ003]---Question? [Answer]\"."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow response values (which can identify participants) in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// Column delimiter of the export.
    #[arg(long = "delimiter", default_value_t = DEFAULT_COLUMN_DELIMITER, global = true)]
    pub delimiter: char,

    /// Separator between question code and question text in headers.
    #[arg(long = "header-separator", default_value = DEFAULT_HEADER_SEPARATOR, global = true)]
    pub header_separator: String,
}

impl Cli {
    pub fn parser_options(&self) -> ParserOptions {
        ParserOptions::new()
            .with_column_delimiter(self.delimiter)
            .with_header_separator(self.header_separator.clone())
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the metadata columns (everything before the first question).
    Metadata(ExportArgs),

    /// Show the question columns with decoded group, question and answer ids.
    Questions(QuestionArgs),

    /// Show how every column of the export is classified.
    Columns(ExportArgs),

    /// Remove columns whose question code contains any of the given ids.
    Redact(RedactArgs),

    /// Draw raffle winners among respondents who opted in.
    Winners(WinnerArgs),
}

#[derive(Args)]
pub struct ExportArgs {
    /// Path to the exported responses.
    #[arg(value_name = "EXPORT")]
    pub input: PathBuf,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Args)]
pub struct QuestionArgs {
    #[command(flatten)]
    pub export: ExportArgs,

    /// Only show the columns of this question group number.
    #[arg(long = "group", value_name = "GROUP")]
    pub group: Option<u32>,
}

#[derive(Args)]
pub struct RedactArgs {
    /// Path to the exported responses.
    #[arg(value_name = "EXPORT")]
    pub input: PathBuf,

    /// Question codes (or parts of them) whose columns are removed.
    #[arg(value_name = "QUESTION_ID", required = true, num_args = 1..)]
    pub question_ids: Vec<String>,

    /// Output file (default: stdout).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct WinnerArgs {
    /// Path to the unredacted responses.
    #[arg(value_name = "EXPORT")]
    pub input: PathBuf,

    /// Number of winners to draw.
    #[arg(long = "num-winners", default_value_t = 1)]
    pub num_winners: usize,

    /// Question number of the opt-in question.
    #[arg(long = "optin-question", default_value_t = 0)]
    pub optin_question: u32,

    /// Question number of the question holding the contact id.
    #[arg(long = "id-question", default_value_t = 1)]
    pub id_question: u32,

    /// Seed for a reproducible draw.
    #[arg(long = "seed")]
    pub seed: Option<u64>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
