use crate::core::classifier::classify;
use crate::core::render::{render, OutputFormat};
use crate::core::{Category, Classification, ClassifyJob, ConfigProvider, Pipeline, ReportSink};
use crate::utils::error::Result;

pub struct SimplePipeline<S: ReportSink, C: ConfigProvider> {
    sink: S,
    config: C,
}

impl<S: ReportSink, C: ConfigProvider> SimplePipeline<S, C> {
    pub fn new(sink: S, config: C) -> Self {
        Self { sink, config }
    }
}

impl<S: ReportSink, C: ConfigProvider> Pipeline for SimplePipeline<S, C> {
    fn gather(&self) -> Result<Vec<ClassifyJob>> {
        let mut jobs = self.config.jobs()?;

        if jobs.is_empty() {
            // Same fallback the app shipped with: bound 100, odd.
            tracing::warn!("No jobs configured, falling back to the demo job");
            jobs.push(ClassifyJob::new(
                ClassifyJob::derived_name(100, Category::Odd),
                100,
                Category::Odd,
            ));
        }

        Ok(jobs)
    }

    fn classify_all(&self, jobs: Vec<ClassifyJob>) -> Result<Vec<Classification>> {
        let mut results = Vec::with_capacity(jobs.len());

        for job in jobs {
            let values = classify(job.bound, job.category);
            tracing::debug!(
                "Job '{}': {} value(s) in [1, {}) for {}",
                job.name,
                values.len(),
                job.bound,
                job.category
            );
            results.push(Classification {
                name: job.name,
                category: job.category,
                bound: job.bound,
                values,
            });
        }

        Ok(results)
    }

    fn publish(&self, results: Vec<Classification>) -> Result<String> {
        let formats = self
            .config
            .output_formats()
            .iter()
            .map(|s| s.parse::<OutputFormat>())
            .collect::<Result<Vec<_>>>()?;

        for result in &results {
            for format in &formats {
                let data = render(result, *format)?;
                let filename = format!("{}.{}", result.name, format.extension());
                tracing::debug!("Writing {} ({} bytes)", filename, data.len());
                self.sink.write_report(&filename, &data)?;
            }
        }

        Ok(self.sink.describe())
    }
}
