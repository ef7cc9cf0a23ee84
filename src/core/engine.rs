use crate::domain::model::Catalog;
use crate::domain::ports::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

/// Drives the load pipeline stage by stage. Stops at the first failing
/// stage; the caller decides what to do with the error.
pub struct LoadEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> LoadEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(false),
        }
    }

    pub fn new_with_monitoring(pipeline: P, enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(enabled),
        }
    }

    pub fn run(&self) -> Result<Catalog> {
        tracing::info!("Starting catalog load");

        let lines = self.pipeline.extract()?;
        tracing::info!("Read {} lines", lines.len());
        self.monitor.log_stage("extract");

        self.pipeline.validate(&lines)?;
        tracing::info!("Validated {} records", lines.len());
        self.monitor.log_stage("validate");

        let catalog = self.pipeline.build(&lines)?;
        tracing::info!("Loaded {} courses", catalog.len());
        self.monitor.log_stage("build");

        self.monitor.log_summary();
        Ok(catalog)
    }
}
