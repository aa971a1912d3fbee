use crate::core::ConfigProvider;
use crate::domain::model::ClassifyJob;
use crate::utils::error::{ClassifyError, Result};
use crate::utils::validation::{
    validate_category, validate_non_empty_string, validate_output_formats, validate_path, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub run: RunConfig,
    #[serde(default)]
    pub jobs: Vec<JobConfig>,
    pub output: OutputConfig,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    pub name: String,
    pub description: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobConfig {
    pub name: Option<String>,
    pub bound: i64,
    pub category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: String,
    pub formats: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
    pub log_level: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ClassifyError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ClassifyError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${MAX_BOUND})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("run.name", &self.run.name)?;
        validate_path("output.path", &self.output.path)?;
        validate_output_formats("output.formats", &self.output.formats)?;

        for (index, job) in self.jobs.iter().enumerate() {
            validate_category(&format!("jobs[{}].category", index), &job.category)?;

            if let Some(name) = &job.name {
                validate_non_empty_string(&format!("jobs[{}].name", index), name)?;
            }
        }

        Ok(())
    }

    pub fn output_path(&self) -> &str {
        &self.output.path
    }

    pub fn job_count(&self) -> usize {
        self.jobs.len()
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn jobs(&self) -> Result<Vec<ClassifyJob>> {
        let mut jobs = Vec::with_capacity(self.jobs.len());

        for (index, job) in self.jobs.iter().enumerate() {
            let category = validate_category(&format!("jobs[{}].category", index), &job.category)?;
            let name = job
                .name
                .clone()
                .unwrap_or_else(|| ClassifyJob::derived_name(job.bound, category));
            jobs.push(ClassifyJob::new(name, job.bound, category));
        }

        Ok(jobs)
    }

    fn output_formats(&self) -> &[String] {
        &self.output.formats
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
