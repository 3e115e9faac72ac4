pub mod engine;
pub mod fetcher;
pub mod filter;
pub mod fingerprint;
pub mod pipeline;
pub mod report;
pub mod seen_store;

pub use crate::domain::model::{Harvest, Listing, ScanResult, SourceFailure};
pub use crate::domain::ports::{ConfigProvider, Pipeline, SourceAdapter, Storage, Transport};
pub use crate::utils::error::Result;
