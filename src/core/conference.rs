use crate::adapters::browser::BrowserSession;
use crate::core::output;
use crate::domain::model::{ConferenceListing, ConferenceRow, RunSummary};
use crate::domain::ports::{Pipeline, SourceConfig, Storage};
use crate::extract::conference;
use crate::utils::error::Result;
use reqwest::Client;
use std::time::Duration;

// 列表頁等 table 出現後再多等一秒讓渲染穩定
const LISTING_SETTLE: Duration = Duration::from_secs(1);

/// Conference pipeline: a headless-browser listing fetch, then a plain
/// HTTP fetch and markup parse per detail page.
pub struct ConferencePipeline<S: Storage, C: SourceConfig> {
    storage: S,
    config: C,
    client: Client,
}

impl<S: Storage, C: SourceConfig> ConferencePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            client: Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: SourceConfig> Pipeline for ConferencePipeline<S, C> {
    type Item = ConferenceListing;
    type Row = ConferenceRow;

    async fn extract(&self) -> Result<Vec<ConferenceListing>> {
        // 瀏覽器只需要存活到列表抓完,抓完即關閉
        let session = BrowserSession::launch()?;

        tracing::debug!("Loading listing page: {}", self.config.listing_url());
        session.goto(self.config.listing_url())?;
        session.wait_for(conference::LISTING_MARKER, self.config.marker_timeout())?;
        session.settle(LISTING_SETTLE);

        let html = session.content()?;
        drop(session);

        let listing = conference::parse_listing(
            &html,
            self.config.listing_url(),
            self.config.assumed_year(),
        );
        tracing::debug!("Parsed {} conferences from listing", listing.len());
        Ok(listing)
    }

    async fn enrich(&self, items: Vec<ConferenceListing>) -> Result<Vec<ConferenceRow>> {
        let mut rows = Vec::with_capacity(items.len());

        for item in items {
            tracing::debug!("Fetching detail page: {}", item.link);
            // 明細頁抓不到視為致命錯誤,整趟中止
            let response = self
                .client
                .get(&item.link)
                .send()
                .await?
                .error_for_status()?;
            let html = response.text().await?;

            let detail = conference::parse_detail(&html);
            rows.push(ConferenceRow::assemble(item, detail));
        }

        Ok(rows)
    }

    async fn load(&self, rows: Vec<ConferenceRow>) -> Result<RunSummary> {
        let csv_bytes = output::to_csv_bytes(&rows)?;
        let json_bytes = output::to_json_pretty_bytes(&rows)?;

        self.storage
            .write_file(self.config.csv_filename(), &csv_bytes)
            .await?;
        self.storage
            .write_file(self.config.json_filename(), &json_bytes)
            .await?;

        Ok(RunSummary {
            source: "conferences".to_string(),
            records: rows.len(),
            csv_path: format!("{}/{}", self.config.output_path(), self.config.csv_filename()),
            json_path: format!("{}/{}", self.config.output_path(), self.config.json_filename()),
        })
    }
}
