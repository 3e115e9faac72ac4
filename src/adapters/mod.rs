// Adapters layer: concrete implementations for external systems (HTTP, marketplaces).

pub mod http;
pub mod marketplace;
pub mod sites;

pub use http::HttpTransport;
pub use marketplace::{dedupe_by_url, MarketplaceAdapter};
pub use sites::{default_adapters, Site, SITES};
