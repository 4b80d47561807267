use crate::domain::model::RunSummary;
use crate::domain::ports::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

/// Drives one pipeline through its three phases in order, reporting
/// progress to the operator console.
pub struct ScrapeEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> ScrapeEngine<P> {
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

    pub async fn run(&self) -> Result<RunSummary> {
        println!("Fetching listing...");
        let items = self.pipeline.extract().await?;
        println!("Found {} items in listing", items.len());
        self.monitor.log_stats("Listing");

        println!("Visiting detail pages...");
        let rows = self.pipeline.enrich(items).await?;
        println!("Enriched {} records", rows.len());
        self.monitor.log_stats("Details");

        println!("Writing output...");
        let summary = self.pipeline.load(rows).await?;
        self.monitor.log_stats("Output");
        self.monitor.log_final_stats();

        Ok(summary)
    }
}
