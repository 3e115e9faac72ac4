use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub report_path: String,
    pub collected: usize,
    pub new_listings: usize,
    pub failed_sources: Vec<String>,
}

pub struct ScanEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> ScanEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor),
        }
    }

    pub async fn run(&self) -> Result<RunSummary> {
        tracing::info!("Polling marketplaces...");
        let harvest = self.pipeline.extract().await?;
        let collected = harvest.listings.len();
        tracing::info!(
            listings = collected,
            failed = harvest.failures.len(),
            "extract finished"
        );
        self.monitor.log_phase("extract");

        let result = self.pipeline.transform(harvest).await?;
        tracing::info!(
            jets = result.candidates,
            new = result.new_listings.len(),
            "dedup finished"
        );
        self.monitor.log_phase("transform");

        let summary_new = result.new_listings.len();
        let failed_sources = result.failures.iter().map(|f| f.source.clone()).collect();

        let report_path = self.pipeline.load(result).await?;
        tracing::info!(path = %report_path, "report saved");
        self.monitor.log_final();

        Ok(RunSummary {
            report_path,
            collected,
            new_listings: summary_new,
            failed_sources,
        })
    }

    pub fn into_pipeline(self) -> P {
        self.pipeline
    }
}
