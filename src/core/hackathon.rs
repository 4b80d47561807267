use crate::adapters::browser::BrowserSession;
use crate::core::output;
use crate::domain::model::{HackathonListing, HackathonRow, RunSummary};
use crate::domain::ports::{Pipeline, SourceConfig, Storage};
use crate::extract::hackathon;
use crate::utils::error::Result;
use std::sync::Mutex;
use std::time::Duration;

// 明細頁等 #introduction 出現後再稍候,讓側欄渲染完
const DETAIL_SETTLE: Duration = Duration::from_millis(500);

/// Hackathon pipeline: both the infinite-scroll listing and every detail
/// page go through the same headless-browser session.
pub struct HackathonPipeline<S: Storage, C: SourceConfig> {
    storage: S,
    config: C,
    // 會話由 extract 建立,enrich 沿用後釋放
    session: Mutex<Option<BrowserSession>>,
}

impl<S: Storage, C: SourceConfig> HackathonPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            session: Mutex::new(None),
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: SourceConfig> Pipeline for HackathonPipeline<S, C> {
    type Item = HackathonListing;
    type Row = HackathonRow;

    async fn extract(&self) -> Result<Vec<HackathonListing>> {
        let session = BrowserSession::launch()?;

        tracing::debug!("Loading listing page: {}", self.config.listing_url());
        session.goto(self.config.listing_url())?;
        session.wait_for(hackathon::LISTING_MARKER, self.config.marker_timeout())?;

        let rounds = session.scroll_to_bottom(
            self.config.scroll_pause(),
            self.config.max_scroll_rounds(),
        )?;
        tracing::debug!("Listing height stabilized after {} scroll rounds", rounds);

        let html = session.content()?;
        let listing = hackathon::parse_listing(&html, self.config.listing_url());
        tracing::debug!("Parsed {} hackathon tiles from listing", listing.len());

        *self
            .session
            .lock()
            .expect("browser session lock poisoned") = Some(session);

        Ok(listing)
    }

    async fn enrich(&self, items: Vec<HackathonListing>) -> Result<Vec<HackathonRow>> {
        let session = match self
            .session
            .lock()
            .expect("browser session lock poisoned")
            .take()
        {
            Some(session) => session,
            // enrich 單獨被呼叫時自行啟動會話
            None => BrowserSession::launch()?,
        };

        let mut rows = Vec::with_capacity(items.len());
        for item in items {
            tracing::debug!("Rendering detail page: {}", item.link);
            session.goto(&item.link)?;
            session.wait_for(hackathon::DETAIL_MARKER, self.config.marker_timeout())?;
            session.settle(DETAIL_SETTLE);

            let detail = hackathon::parse_detail(&session.content()?);

            // 敘述第一行蓋過列表上的名稱
            let (name, description) =
                hackathon::split_name_from_description(&detail.description)
                    .unwrap_or_else(|| (item.name.clone(), detail.description.clone()));

            rows.push(HackathonRow {
                name,
                domain: self.config.domain_label().to_string(),
                deadline: detail.deadline.unwrap_or_default(),
                mode: item.mode,
                prize: detail.prize.unwrap_or_default(),
                link: item.link,
                description,
            });
        }

        // 明細全數抓完即可結束瀏覽器
        drop(session);
        Ok(rows)
    }

    async fn load(&self, rows: Vec<HackathonRow>) -> Result<RunSummary> {
        let csv_bytes = output::to_csv_bytes(&rows)?;
        let json_bytes = output::to_json_pretty_bytes(&rows)?;

        self.storage
            .write_file(self.config.csv_filename(), &csv_bytes)
            .await?;
        self.storage
            .write_file(self.config.json_filename(), &json_bytes)
            .await?;

        Ok(RunSummary {
            source: "hackathons".to_string(),
            records: rows.len(),
            csv_path: format!("{}/{}", self.config.output_path(), self.config.csv_filename()),
            json_path: format!("{}/{}", self.config.output_path(), self.config.json_filename()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::EventMode;
    use crate::utils::error::ScrapeError;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex as AsyncMutex;

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<AsyncMutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                files: Arc::new(AsyncMutex::new(HashMap::new())),
            }
        }

        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned().ok_or_else(|| {
                ScrapeError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    struct MockConfig;

    impl SourceConfig for MockConfig {
        fn listing_url(&self) -> &str {
            "https://devpost.com/hackathons"
        }

        fn output_path(&self) -> &str {
            "test_output"
        }

        fn csv_filename(&self) -> &str {
            "hackathons.csv"
        }

        fn json_filename(&self) -> &str {
            "hackathons.json"
        }

        fn marker_timeout(&self) -> Duration {
            Duration::from_secs(1)
        }

        fn scroll_pause(&self) -> Duration {
            Duration::from_millis(10)
        }

        fn max_scroll_rounds(&self) -> usize {
            3
        }

        fn assumed_year(&self) -> i32 {
            2025
        }

        fn domain_label(&self) -> &str {
            "Machine Learning/AI"
        }
    }

    fn sample_row() -> HackathonRow {
        HackathonRow {
            name: "DataQuest 2025".to_string(),
            domain: "Machine Learning/AI".to_string(),
            deadline: "May 1, 2025 @ 4:30am GMT+5:30".to_string(),
            mode: EventMode::Online,
            prize: "$140,000 in cash".to_string(),
            link: "https://devpost.com/h/dataquest".to_string(),
            description: "Build something great.".to_string(),
        }
    }

    #[tokio::test]
    async fn test_load_writes_both_files() {
        let storage = MockStorage::new();
        let pipeline = HackathonPipeline::new(storage.clone(), MockConfig);

        let summary = pipeline.load(vec![sample_row()]).await.unwrap();

        assert_eq!(summary.source, "hackathons");
        assert_eq!(summary.records, 1);
        assert_eq!(summary.csv_path, "test_output/hackathons.csv");
        assert_eq!(summary.json_path, "test_output/hackathons.json");

        assert!(storage.get_file("hackathons.csv").await.is_some());
        assert!(storage.get_file("hackathons.json").await.is_some());
    }

    #[tokio::test]
    async fn test_load_field_values_match_across_formats() {
        let storage = MockStorage::new();
        let pipeline = HackathonPipeline::new(storage.clone(), MockConfig);

        pipeline.load(vec![sample_row()]).await.unwrap();

        let csv_bytes = storage.get_file("hackathons.csv").await.unwrap();
        let json_bytes = storage.get_file("hackathons.json").await.unwrap();

        let json: Vec<serde_json::Value> = serde_json::from_slice(&json_bytes).unwrap();
        let mut reader = csv::Reader::from_reader(csv_bytes.as_slice());
        let headers = reader.headers().unwrap().clone();
        let record = reader.records().next().unwrap().unwrap();

        for (header, value) in headers.iter().zip(record.iter()) {
            assert_eq!(json[0][header].as_str().unwrap(), value, "field {}", header);
        }
    }

    #[tokio::test]
    async fn test_load_empty_dataset() {
        let storage = MockStorage::new();
        let pipeline = HackathonPipeline::new(storage.clone(), MockConfig);

        let summary = pipeline.load(Vec::new()).await.unwrap();
        assert_eq!(summary.records, 0);

        let json_bytes = storage.get_file("hackathons.json").await.unwrap();
        assert_eq!(json_bytes, b"[]");
    }
}
