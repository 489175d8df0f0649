//! Command implementations for the tongyi CLI.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use anyhow::Context;
use log::{debug, info};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::ReplacerConfig;
use crate::dictionary::SynonymDictionaryBuilder;
use crate::error::Result;
use crate::replace::SynonymReplacer;
use crate::vocabulary::expander::{SkipReason, VariantExpander};
use crate::vocabulary::table::{ColumnSelector, VocabularyTable};

/// Execute a CLI command.
pub fn execute_command(args: TongyiArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    match &args.command {
        Command::Replace(replace_args) => replace_text(replace_args, config, &args),
        Command::Expand(expand_args) => expand_template(expand_args, &config, &args),
        Command::Stats(stats_args) => show_stats(stats_args, config, &args),
    }
}

fn load_config(path: Option<&Path>) -> Result<ReplacerConfig> {
    match path {
        Some(path) => {
            info!("Loading config from: {}", path.display());
            ReplacerConfig::from_json_file(path)
        }
        None => Ok(ReplacerConfig::default()),
    }
}

/// Replace variants in the given text, input file, or stdin.
fn replace_text(args: &ReplaceArgs, config: ReplacerConfig, cli_args: &TongyiArgs) -> Result<()> {
    let start_time = Instant::now();
    let replacer = SynonymReplacer::from_path(&args.vocab, config)?;
    info!(
        "Loaded {} variant mappings from {} in {:?}",
        replacer.dictionary().len(),
        args.vocab.display(),
        start_time.elapsed()
    );

    let inputs = match (&args.text, &args.input) {
        (Some(text), _) => vec![text.clone()],
        (None, Some(input)) => {
            let file = File::open(input)
                .with_context(|| format!("Failed to open input file '{}'", input.display()))?;
            read_lines(BufReader::new(file))?
        }
        (None, None) => read_lines(io::stdin().lock())?,
    };

    let start_time = Instant::now();
    let outputs = replacer.replace_batch(&inputs);
    debug!(
        "Replaced {} texts ({} changed) in {:?}",
        inputs.len(),
        outputs.iter().filter(|o| o.is_changed()).count(),
        start_time.elapsed()
    );

    for (input, output) in inputs.into_iter().zip(outputs) {
        output_replace(&ReplaceResult { input, output }, args.annotated, cli_args)?;
    }

    Ok(())
}

fn read_lines<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        lines.push(line?);
    }
    Ok(lines)
}

/// Show the variants a raw template registers.
fn expand_template(
    args: &ExpandArgs,
    config: &ReplacerConfig,
    cli_args: &TongyiArgs,
) -> Result<()> {
    let expander = VariantExpander::new(config.max_wildcards);
    let result = match expander.expand(&args.template) {
        Ok(variants) => ExpansionResult {
            template: args.template.clone(),
            variants,
            skipped: None,
        },
        Err(reason) => ExpansionResult {
            template: args.template.clone(),
            variants: Vec::new(),
            skipped: Some(match reason {
                SkipReason::Empty => "empty template".to_string(),
                SkipReason::TooManyWildcards(n) => format!(
                    "{n} wildcards exceed the limit of {}",
                    expander.max_wildcards()
                ),
            }),
        },
    };

    output_result("Template expansion", &result, cli_args)
}

/// Show vocabulary statistics.
fn show_stats(args: &StatsArgs, config: ReplacerConfig, cli_args: &TongyiArgs) -> Result<()> {
    let table = VocabularyTable::from_path(&args.vocab)?;
    let variant_columns = ColumnSelector::new(&config)
        .select(table.columns())
        .into_iter()
        .map(|i| table.columns()[i].clone())
        .collect();
    let rows = table.rows(&config)?;

    let start_time = Instant::now();
    let mut builder = SynonymDictionaryBuilder::new(config.canonical_label())
        .with_expander(VariantExpander::new(config.max_wildcards));
    for row in &rows {
        builder.add_row(row);
    }
    let dictionary = builder.build()?;
    let build_ms = start_time.elapsed().as_millis() as u64;

    let stats = VocabularyStats {
        path: args.vocab.to_string_lossy().to_string(),
        columns: table.columns().len(),
        rows: rows.len(),
        variant_columns,
        variant_mappings: dictionary.len(),
        canonical_terms: dictionary.canonical_terms(),
        build_ms,
    };

    output_result("Vocabulary statistics", &stats, cli_args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TongyiError;
    use std::io::Cursor;

    #[test]
    fn test_read_lines() {
        let lines = read_lines(Cursor::new("做MRI检查\n\n探头\n")).unwrap();
        assert_eq!(lines, vec!["做MRI检查", "", "探头"]);
    }

    #[test]
    fn test_load_default_config() {
        let config = load_config(None).unwrap();
        assert_eq!(config, ReplacerConfig::default());
    }

    #[test]
    fn test_missing_config_file() {
        let result = load_config(Some(Path::new("/nonexistent/tongyi.json")));
        assert!(matches!(result, Err(TongyiError::Config(_))));
    }
}
