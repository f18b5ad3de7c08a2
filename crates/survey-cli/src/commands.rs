use std::fs::File;
use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use tracing::info_span;

use survey_ingest::{ParserOptions, SurveyParser, read_export_text};
use survey_cli::redact::redact;
use survey_cli::winners::{WinnerOptions, select_winners};

use crate::cli::{ExportArgs, OutputFormatArg, QuestionArgs, RedactArgs, WinnerArgs};
use crate::summary::{columns_table, metadata_table, questions_table};

pub fn run_metadata(args: &ExportArgs, options: &ParserOptions) -> Result<()> {
    let _span = info_span!("metadata", export = %args.input.display()).entered();
    let parser = SurveyParser::new(options.clone());
    let table = parser
        .parse_metadata_file(&args.input)
        .with_context(|| format!("parse metadata: {}", args.input.display()))?;
    match args.format {
        OutputFormatArg::Table => println!("{}", metadata_table(&table)),
        OutputFormatArg::Json => println!("{}", serde_json::to_string_pretty(&table)?),
    }
    Ok(())
}

pub fn run_questions(args: &QuestionArgs, options: &ParserOptions) -> Result<()> {
    let input = &args.export.input;
    let _span = info_span!("questions", export = %input.display(), group = ?args.group).entered();
    let parser = SurveyParser::new(options.clone());
    let mut table = parser
        .parse_questions_file(input)
        .with_context(|| format!("parse questions: {}", input.display()))?;
    if let Some(group) = args.group {
        table = table.select_group(group);
        tracing::debug!(group, columns = table.width(), "selected question group");
    }
    match args.export.format {
        OutputFormatArg::Table => {
            println!("Responses: {}", table.height());
            println!("{}", questions_table(&table));
        }
        OutputFormatArg::Json => println!("{}", serde_json::to_string_pretty(&table)?),
    }
    Ok(())
}

pub fn run_columns(args: &ExportArgs, options: &ParserOptions) -> Result<()> {
    let _span = info_span!("columns", export = %args.input.display()).entered();
    let parser = SurveyParser::new(options.clone());
    let content = read_export_text(&args.input)?;
    let table = parser
        .parse(&content)
        .with_context(|| format!("parse export: {}", args.input.display()))?;
    let classification = parser.classify(&table);
    match args.format {
        OutputFormatArg::Table => println!("{}", columns_table(&table.columns, &classification)),
        OutputFormatArg::Json => {
            let value = serde_json::json!({
                "index": table.index_name,
                "columns": table.columns,
                "metadata": classification.metadata,
                "questions": classification.questions,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }
    Ok(())
}

pub fn run_redact(args: &RedactArgs, options: &ParserOptions) -> Result<()> {
    let _span = info_span!("redact", export = %args.input.display()).entered();
    let input = File::open(&args.input)
        .with_context(|| format!("open export: {}", args.input.display()))?;
    let summary = match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("create output: {}", path.display()))?;
            redact(input, BufWriter::new(file), &args.question_ids, options)?
        }
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            let summary = redact(input, &mut lock, &args.question_ids, options)?;
            lock.flush()?;
            summary
        }
    };
    if summary.removed.is_empty() {
        tracing::warn!("no column matched the given question ids");
    }
    Ok(())
}

pub fn run_winners(args: &WinnerArgs, options: &ParserOptions) -> Result<()> {
    let _span = info_span!("winners", export = %args.input.display()).entered();
    let parser = SurveyParser::new(options.clone());
    let responses = parser
        .parse_questions_file(&args.input)
        .with_context(|| format!("parse questions: {}", args.input.display()))?;
    let winner_options = WinnerOptions {
        num_winners: args.num_winners,
        optin_question: args.optin_question,
        id_question: args.id_question,
        seed: args.seed,
    };
    let winners = select_winners(&responses, &winner_options)?;
    println!("{}", winners.join("\n"));
    Ok(())
}
