use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct ClassifyEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> ClassifyEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(false),
        }
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    /// Runs the three phases and returns a description of where the reports
    /// were delivered.
    pub fn run(&self) -> Result<String> {
        tracing::info!("Starting classification run");

        // 收集任務
        let jobs = self.pipeline.gather()?;
        tracing::info!("Gathered {} job(s)", jobs.len());
        self.monitor.log_phase("gather");

        // 分類
        let results = self.pipeline.classify_all(jobs)?;
        let total: usize = results.iter().map(|r| r.len()).sum();
        tracing::info!(
            "Classified {} value(s) across {} result set(s)",
            total,
            results.len()
        );
        self.monitor.log_phase("classify");

        // 發佈報告
        let destination = self.pipeline.publish(results)?;
        tracing::info!("Reports delivered to: {}", destination);
        self.monitor.log_phase("publish");

        self.monitor.log_summary();
        Ok(destination)
    }
}
