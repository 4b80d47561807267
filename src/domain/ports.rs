use crate::domain::model::RunSummary;
use crate::utils::error::Result;
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Resolved per-source configuration. Not every pipeline consults every
/// accessor: the conference pipeline ignores the scroll settings and the
/// domain label, the hackathon pipeline ignores the assumed year.
pub trait SourceConfig: Send + Sync {
    fn listing_url(&self) -> &str;
    fn output_path(&self) -> &str;
    fn csv_filename(&self) -> &str;
    fn json_filename(&self) -> &str;
    fn marker_timeout(&self) -> Duration;
    fn scroll_pause(&self) -> Duration;
    fn max_scroll_rounds(&self) -> usize;
    fn assumed_year(&self) -> i32;
    fn domain_label(&self) -> &str;
}

/// 兩階段抓取流程:列表 → 逐項明細 → 輸出
#[async_trait]
pub trait Pipeline: Send + Sync {
    type Item: Send;
    type Row: Serialize + Send + Sync;

    /// Fetch the listing page and produce candidate items in page order.
    async fn extract(&self) -> Result<Vec<Self::Item>>;

    /// Visit each item's detail page, merging listing and detail fields
    /// by positional correspondence.
    async fn enrich(&self, items: Vec<Self::Item>) -> Result<Vec<Self::Row>>;

    /// Write the assembled dataset (CSV + JSON) through storage.
    async fn load(&self, rows: Vec<Self::Row>) -> Result<RunSummary>;
}
