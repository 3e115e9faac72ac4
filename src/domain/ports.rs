use crate::domain::model::{Harvest, Listing, ScanResult};
use crate::utils::error::{AdapterError, FetchError, Result};
use async_trait::async_trait;
use std::path::Path;
use std::time::Duration;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &Path,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn db_path(&self) -> std::path::PathBuf;
    fn report_path(&self) -> std::path::PathBuf;
    fn source_delay(&self) -> Duration;
    fn retry_attempts(&self) -> usize;
    fn retry_backoff(&self) -> Duration;
    fn request_timeout(&self) -> Duration;
}

/// One HTTP GET, no retries.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str) -> std::result::Result<String, FetchError>;
}

/// A marketplace that can be polled for candidate listings.
#[async_trait]
pub trait SourceAdapter: Send + Sync {
    fn name(&self) -> &str;
    async fn produce_listings(&self) -> std::result::Result<Vec<Listing>, AdapterError>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Harvest>;
    async fn transform(&self, harvest: Harvest) -> Result<ScanResult>;
    async fn load(&self, result: ScanResult) -> Result<String>;
}
