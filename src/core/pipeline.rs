use crate::core::filter::is_jet;
use crate::core::fingerprint::listing_fingerprint;
use crate::core::report;
use crate::core::seen_store::SeenStore;
use crate::core::{
    ConfigProvider, Harvest, Pipeline, ScanResult, SourceAdapter, SourceFailure, Storage,
};
use crate::utils::error::Result;

/// One polling run: adapters in declared order, jet filter, seen-store
/// dedup, Markdown report.
pub struct JetPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    adapters: Vec<Box<dyn SourceAdapter>>,
    seen: SeenStore,
}

impl<S: Storage, C: ConfigProvider> JetPipeline<S, C> {
    /// Opens the seen store at the configured path, creating its directory.
    pub fn new(storage: S, config: C, adapters: Vec<Box<dyn SourceAdapter>>) -> Result<Self> {
        let seen = SeenStore::open(config.db_path())?;
        let known = seen.len()?;
        tracing::info!(path = %seen.path().display(), known, "seen store ready");
        Ok(Self::with_seen_store(storage, config, adapters, seen))
    }

    pub fn with_seen_store(
        storage: S,
        config: C,
        adapters: Vec<Box<dyn SourceAdapter>>,
        seen: SeenStore,
    ) -> Self {
        Self {
            storage,
            config,
            adapters,
            seen,
        }
    }

    pub fn seen_store(&self) -> &SeenStore {
        &self.seen
    }

    pub fn close(self) -> Result<()> {
        self.seen.close()
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for JetPipeline<S, C> {
    async fn extract(&self) -> Result<Harvest> {
        let mut harvest = Harvest::default();
        let delay = self.config.source_delay();

        for (i, adapter) in self.adapters.iter().enumerate() {
            match adapter.produce_listings().await {
                Ok(mut listings) => {
                    tracing::info!(
                        source = adapter.name(),
                        count = listings.len(),
                        "source polled"
                    );
                    harvest.listings.append(&mut listings);
                }
                Err(e) => {
                    tracing::warn!(source = adapter.name(), error = %e, "source failed");
                    harvest.failures.push(SourceFailure {
                        source: adapter.name().to_string(),
                        error: e.cause.to_string(),
                    });
                }
            }

            if i + 1 < self.adapters.len() && !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
        }

        Ok(harvest)
    }

    async fn transform(&self, harvest: Harvest) -> Result<ScanResult> {
        let Harvest { listings, failures } = harvest;
        let total = listings.len();

        let candidates: Vec<_> = listings.into_iter().filter(is_jet).collect();
        tracing::debug!(total, jets = candidates.len(), "jet filter applied");

        let mut new_listings = Vec::new();
        let candidate_count = candidates.len();
        for listing in candidates {
            let fp = listing_fingerprint(&listing);
            if self.seen.is_seen(&fp)? {
                continue;
            }
            // Marked before the next lookup, so a repeat later in this run is skipped too.
            self.seen.mark(&fp)?;
            tracing::debug!(source = %listing.source, url = %listing.url, %fp, "new listing");
            new_listings.push(listing);
        }

        Ok(ScanResult {
            new_listings,
            failures,
            candidates: candidate_count,
        })
    }

    async fn load(&self, result: ScanResult) -> Result<String> {
        let text = report::build(&result.new_listings, &result.failures);
        let path = self.config.report_path();

        self.storage.write_file(&path, text.as_bytes()).await?;
        tracing::debug!(path = %path.display(), bytes = text.len(), "report written");

        Ok(path.display().to_string())
    }
}
