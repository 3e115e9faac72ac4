/// A single scraped aircraft-for-sale entry.
///
/// Identity for deduplication is `(source, url)`; the optional metadata is
/// carried through to the report but never inspected by the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub source: String,
    pub title: String,
    pub url: String,
    pub year: Option<String>,
    pub price: Option<String>,
    pub location: Option<String>,
}

impl Listing {
    pub fn new(
        source: impl Into<String>,
        title: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            title: title.into(),
            url: url.into(),
            year: None,
            price: None,
            location: None,
        }
    }

    /// Year, price and location joined with ` | `, skipping unset fields.
    pub fn metadata_line(&self) -> Option<String> {
        let parts: Vec<&str> = [&self.year, &self.price, &self.location]
            .into_iter()
            .filter_map(|f| f.as_deref())
            .filter(|s| !s.is_empty())
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" | "))
        }
    }
}

/// A source that could not be polled, with its stringified error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFailure {
    pub source: String,
    pub error: String,
}

/// Everything the adapters produced in one run, before filtering.
#[derive(Debug, Clone, Default)]
pub struct Harvest {
    pub listings: Vec<Listing>,
    pub failures: Vec<SourceFailure>,
}

/// Listings first observed in this run, plus the failures to report.
#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    pub new_listings: Vec<Listing>,
    pub failures: Vec<SourceFailure>,
    pub candidates: usize,
}
