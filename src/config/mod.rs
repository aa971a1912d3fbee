pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::domain::model::ClassifyJob;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{
    validate_category, validate_output_formats, validate_path, Validate,
};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "numlist")]
#[command(about = "List the numbers in [1, N) matching a category")]
pub struct CliConfig {
    /// Exclusive upper bound. Non-numeric input counts as 0 and yields an
    /// empty result.
    #[arg(default_value = "100", allow_negative_numbers = true)]
    pub bound: String,

    /// Number category: odd, even, prime, perfect, square, fibonacci
    #[arg(default_value = "odd")]
    pub category: String,

    #[arg(long, value_delimiter = ',', default_value = "text")]
    pub formats: Vec<String>,

    /// Directory to write report files into; omit to print to stdout
    #[arg(long)]
    pub output_path: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Enable system monitoring")]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// The app-level contract: the bound arrives as raw text and anything
    /// that does not parse as an integer behaves as 0.
    pub fn resolved_bound(&self) -> i64 {
        match self.bound.trim().parse::<i64>() {
            Ok(value) => value,
            Err(_) => {
                tracing::debug!("Bound '{}' is not numeric, treating as 0", self.bound);
                0
            }
        }
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn jobs(&self) -> Result<Vec<ClassifyJob>> {
        let category = validate_category("category", &self.category)?;
        let bound = self.resolved_bound();
        Ok(vec![ClassifyJob::new(
            ClassifyJob::derived_name(bound, category),
            bound,
            category,
        )])
    }

    fn output_formats(&self) -> &[String] {
        &self.formats
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_category("category", &self.category)?;
        validate_output_formats("formats", &self.formats)?;

        if let Some(path) = &self.output_path {
            validate_path("output-path", path)?;
        }

        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use crate::domain::model::Category;

    fn config(bound: &str, category: &str) -> CliConfig {
        CliConfig {
            bound: bound.to_string(),
            category: category.to_string(),
            formats: vec!["text".to_string()],
            output_path: None,
            verbose: false,
            monitor: false,
        }
    }

    #[test]
    fn test_bound_normalization() {
        assert_eq!(config("100", "odd").resolved_bound(), 100);
        assert_eq!(config("  42  ", "odd").resolved_bound(), 42);
        assert_eq!(config("-7", "odd").resolved_bound(), -7);
        assert_eq!(config("abc", "odd").resolved_bound(), 0);
        assert_eq!(config("", "odd").resolved_bound(), 0);
        assert_eq!(config("12.5", "odd").resolved_bound(), 0);
    }

    #[test]
    fn test_jobs_from_cli_arguments() {
        let jobs = config("20", "prime").jobs().unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].name, "prime_20");
        assert_eq!(jobs[0].bound, 20);
        assert_eq!(jobs[0].category, Category::Prime);
    }

    #[test]
    fn test_unknown_category_fails_validation() {
        assert!(config("10", "triangular").validate().is_err());
        assert!(config("10", "triangular").jobs().is_err());
    }

    #[test]
    fn test_unknown_format_fails_validation() {
        let mut cfg = config("10", "odd");
        cfg.formats = vec!["xml".to_string()];
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_empty_output_path_fails_validation() {
        let mut cfg = config("10", "odd");
        cfg.output_path = Some(String::new());
        assert!(cfg.validate().is_err());
    }
}
