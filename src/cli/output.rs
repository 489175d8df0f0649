//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, TongyiArgs};
use crate::error::Result;
use crate::replace::ReplaceOutput;

/// Result structure for one replaced text.
#[derive(Debug, Serialize, Deserialize)]
pub struct ReplaceResult {
    pub input: String,
    #[serde(flatten)]
    pub output: ReplaceOutput,
}

/// Result structure for template expansion.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExpansionResult {
    pub template: String,
    pub variants: Vec<String>,
    pub skipped: Option<String>,
}

/// Vocabulary statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct VocabularyStats {
    pub path: String,
    pub columns: usize,
    pub rows: usize,
    pub variant_columns: Vec<String>,
    pub variant_mappings: usize,
    pub canonical_terms: usize,
    pub build_ms: u64,
}

/// Output a replace result in the specified format.
pub fn output_replace(result: &ReplaceResult, annotated: bool, args: &TongyiArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(result, args),
        OutputFormat::Human => {
            println!("{}", result.output.text);
            if annotated {
                println!("{}", result.output.annotated);
            }
            if args.verbosity() > 1 {
                for substitution in &result.output.replacements {
                    println!("  {} -> {}", substitution.original, substitution.replacement.trim());
                }
                println!(
                    "  competitor_name_appear: {}, only_competitor_product_appear: {}",
                    format_flag(result.output.flags.competitor_name_appear),
                    format_flag(result.output.flags.only_competitor_product_appear)
                );
            }
            Ok(())
        }
    }
}

/// Output any other result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &TongyiArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &TongyiArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
        println!();
    }

    let value = serde_json::to_value(result)?;
    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                println!("{key}: {}", format_value(&val));
            }
        }
        other => println!("{}", format_value(&other)),
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &TongyiArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

fn format_flag(flag: Option<bool>) -> String {
    flag.map_or_else(|| "-".to_string(), |b| b.to_string())
}

/// Format a JSON value for display.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted_values}]")
        }
        serde_json::Value::Object(_) => "[object]".to_string(),
        serde_json::Value::Null => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::replace::Substitution;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(&serde_json::json!("test")), "test");
        assert_eq!(format_value(&serde_json::json!(42)), "42");
        assert_eq!(format_value(&serde_json::json!(false)), "false");
        assert_eq!(format_value(&serde_json::json!(["a", "b"])), "[a, b]");
        assert_eq!(format_value(&serde_json::Value::Null), "-");
    }

    #[test]
    fn test_format_flag() {
        assert_eq!(format_flag(None), "-");
        assert_eq!(format_flag(Some(true)), "true");
    }

    #[test]
    fn test_replace_result_json_is_flat() {
        let mut output = ReplaceOutput::unchanged("做磁共振检查");
        output.annotated = "做MRI(磁共振)检查".to_string();
        output.replacements.push(Substitution {
            original: "MRI".to_string(),
            replacement: "磁共振".to_string(),
        });
        let result = ReplaceResult {
            input: "做MRI检查".to_string(),
            output,
        };

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["input"], "做MRI检查");
        assert_eq!(value["text"], "做磁共振检查");
        assert_eq!(value["replacements"][0]["original"], "MRI");
        assert!(value["flags"]["competitor_name_appear"].is_null());
    }
}
