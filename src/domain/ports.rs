use crate::domain::model::{Classification, ClassifyJob};
use crate::utils::error::Result;

/// Destination for rendered reports (local directory, stdout, test memory).
pub trait ReportSink: Send + Sync {
    fn write_report(&self, name: &str, data: &[u8]) -> Result<()>;

    /// Short description of where reports end up, for logs and summaries.
    fn describe(&self) -> String;
}

/// Source of classification jobs and output preferences.
pub trait ConfigProvider: Send + Sync {
    fn jobs(&self) -> Result<Vec<ClassifyJob>>;
    fn output_formats(&self) -> &[String];
}

/// The three run phases: gather jobs, classify them, publish the reports.
pub trait Pipeline: Send + Sync {
    fn gather(&self) -> Result<Vec<ClassifyJob>>;
    fn classify_all(&self, jobs: Vec<ClassifyJob>) -> Result<Vec<Classification>>;
    fn publish(&self, results: Vec<Classification>) -> Result<String>;
}
