use crate::utils::error::ClassifyError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of number categories the classifier understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Odd,
    Even,
    Prime,
    Perfect,
    Square,
    Fibonacci,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Odd,
        Category::Even,
        Category::Prime,
        Category::Perfect,
        Category::Square,
        Category::Fibonacci,
    ];

    /// Stable lowercase token used on the CLI and in configuration files.
    pub fn token(&self) -> &'static str {
        match self {
            Category::Odd => "odd",
            Category::Even => "even",
            Category::Prime => "prime",
            Category::Perfect => "perfect",
            Category::Square => "square",
            Category::Fibonacci => "fibonacci",
        }
    }

    /// Human-readable label for report output.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Odd => "odd numbers",
            Category::Even => "even numbers",
            Category::Prime => "prime numbers",
            Category::Perfect => "perfect numbers",
            Category::Square => "perfect squares",
            Category::Fibonacci => "Fibonacci numbers",
        }
    }

    pub fn token_list() -> String {
        Category::ALL
            .iter()
            .map(|c| c.token())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Category {
    type Err = ClassifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "odd" => Ok(Category::Odd),
            "even" => Ok(Category::Even),
            "prime" => Ok(Category::Prime),
            "perfect" => Ok(Category::Perfect),
            "square" => Ok(Category::Square),
            "fibonacci" => Ok(Category::Fibonacci),
            other => Err(ClassifyError::UnknownCategoryError {
                name: other.to_string(),
            }),
        }
    }
}

/// One unit of work: list every number in `[1, bound)` matching `category`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyJob {
    pub name: String,
    pub bound: i64,
    pub category: Category,
}

impl ClassifyJob {
    pub fn new(name: impl Into<String>, bound: i64, category: Category) -> Self {
        Self {
            name: name.into(),
            bound,
            category,
        }
    }

    /// Default job name when the configuration does not supply one.
    pub fn derived_name(bound: i64, category: Category) -> String {
        format!("{}_{}", category.token(), bound)
    }
}

/// Result of classifying one job. Values are strictly increasing, distinct,
/// all within `[1, bound)`. Empty is a valid terminal outcome, not an error.
#[derive(Debug, Clone, Serialize)]
pub struct Classification {
    pub name: String,
    pub category: Category,
    pub bound: i64,
    pub values: Vec<i64>,
}

impl Classification {
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trip_through_tokens() {
        for category in Category::ALL {
            assert_eq!(category.token().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn test_category_parse_is_case_insensitive() {
        assert_eq!("PRIME".parse::<Category>().unwrap(), Category::Prime);
        assert_eq!("  Even ".parse::<Category>().unwrap(), Category::Even);
    }

    #[test]
    fn test_unknown_category_fails_fast() {
        let err = "triangular".parse::<Category>().unwrap_err();
        assert!(matches!(
            err,
            crate::utils::error::ClassifyError::UnknownCategoryError { .. }
        ));
    }

    #[test]
    fn test_category_serializes_as_lowercase_token() {
        let json = serde_json::to_string(&Category::Fibonacci).unwrap();
        assert_eq!(json, "\"fibonacci\"");
    }

    #[test]
    fn test_derived_job_name() {
        assert_eq!(
            ClassifyJob::derived_name(20, Category::Prime),
            "prime_20"
        );
    }
}
