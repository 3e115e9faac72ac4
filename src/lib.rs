pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::{default_adapters, HttpTransport, MarketplaceAdapter};
pub use crate::config::{cli::LocalStorage, CliConfig};
pub use crate::core::{
    engine::{RunSummary, ScanEngine},
    fetcher::{Fetcher, RetryPolicy},
    pipeline::JetPipeline,
    seen_store::SeenStore,
};
pub use crate::domain::model::{Listing, SourceFailure};
pub use crate::utils::error::{AdapterError, FetchError, JetwatchError, Result};
