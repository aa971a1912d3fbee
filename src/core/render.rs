use crate::domain::model::Classification;
use crate::utils::error::{ClassifyError, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Fixed marker the text renderer emits when no number matched, so an empty
/// result is distinguishable from a missing one.
pub const NO_RESULTS_MARKER: &str = "(no results)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}

impl OutputFormat {
    pub const VALID: [&'static str; 3] = ["text", "json", "csv"];

    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = ClassifyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(ClassifyError::UnknownFormatError {
                name: other.to_string(),
            }),
        }
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    name: &'a str,
    category: &'static str,
    label: &'static str,
    bound: i64,
    count: usize,
    values: &'a [i64],
    generated_at: chrono::DateTime<chrono::Utc>,
}

pub fn render(result: &Classification, format: OutputFormat) -> Result<Vec<u8>> {
    match format {
        OutputFormat::Text => Ok(render_text(result).into_bytes()),
        OutputFormat::Json => render_json(result),
        OutputFormat::Csv => render_csv(result),
    }
}

fn render_text(result: &Classification) -> String {
    if result.is_empty() {
        return format!("{}\n", NO_RESULTS_MARKER);
    }

    let mut out = String::new();
    for value in &result.values {
        out.push_str(&value.to_string());
        out.push('\n');
    }
    out
}

fn render_json(result: &Classification) -> Result<Vec<u8>> {
    let report = JsonReport {
        name: &result.name,
        category: result.category.token(),
        label: result.category.label(),
        bound: result.bound,
        count: result.values.len(),
        values: &result.values,
        generated_at: chrono::Utc::now(),
    };

    let mut bytes = serde_json::to_vec_pretty(&report)?;
    bytes.push(b'\n');
    Ok(bytes)
}

fn render_csv(result: &Classification) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    {
        let mut writer = csv::Writer::from_writer(&mut buffer);
        writer.write_record(["category", "bound", "value"])?;

        let category = result.category.token();
        let bound = result.bound.to_string();
        for value in &result.values {
            writer.write_record([category, bound.as_str(), value.to_string().as_str()])?;
        }

        writer.flush()?;
    }
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Category;

    fn sample(values: Vec<i64>) -> Classification {
        Classification {
            name: "sample".to_string(),
            category: Category::Prime,
            bound: 20,
            values,
        }
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!(" JSON ".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_text_renders_one_value_per_line() {
        let data = render(&sample(vec![2, 3, 5]), OutputFormat::Text).unwrap();
        assert_eq!(String::from_utf8(data).unwrap(), "2\n3\n5\n");
    }

    #[test]
    fn test_text_renders_marker_when_empty() {
        let data = render(&sample(vec![]), OutputFormat::Text).unwrap();
        assert_eq!(String::from_utf8(data).unwrap(), "(no results)\n");
    }

    #[test]
    fn test_json_report_shape() {
        let data = render(&sample(vec![2, 3, 5, 7]), OutputFormat::Json).unwrap();
        let report: serde_json::Value = serde_json::from_slice(&data).unwrap();

        assert_eq!(report["category"], "prime");
        assert_eq!(report["label"], "prime numbers");
        assert_eq!(report["bound"], 20);
        assert_eq!(report["count"], 4);
        assert_eq!(report["values"], serde_json::json!([2, 3, 5, 7]));
        assert!(report["generated_at"].is_string());
    }

    #[test]
    fn test_json_report_empty_result() {
        let data = render(&sample(vec![]), OutputFormat::Json).unwrap();
        let report: serde_json::Value = serde_json::from_slice(&data).unwrap();
        assert_eq!(report["count"], 0);
        assert_eq!(report["values"], serde_json::json!([]));
    }

    #[test]
    fn test_csv_rows() {
        let data = render(&sample(vec![2, 3]), OutputFormat::Csv).unwrap();
        let text = String::from_utf8(data).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["category,bound,value", "prime,20,2", "prime,20,3"]);
    }

    #[test]
    fn test_csv_header_only_when_empty() {
        let data = render(&sample(vec![]), OutputFormat::Csv).unwrap();
        let text = String::from_utf8(data).unwrap();
        assert_eq!(text.lines().collect::<Vec<_>>(), vec!["category,bound,value"]);
    }
}
