//! Uniform link-scraping adapter shared by every marketplace.
//!
//! Each marketplace page is fetched once, every `<a href>` with visible text
//! is run through the site's listing predicate, relative links are made
//! absolute, and the result is deduplicated by URL.

use crate::adapters::sites::Site;
use crate::core::fetcher::Fetcher;
use crate::domain::model::Listing;
use crate::domain::ports::SourceAdapter;
use crate::utils::error::{AdapterError, Result};
use crate::utils::validation::validate_url;
use async_trait::async_trait;
use scraper::{Html, Selector};
use std::collections::HashSet;
use std::sync::LazyLock;

static ANCHORS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("static selector is valid"));

/// Visible text must be longer than this to count as a listing card.
pub const MIN_TITLE_CHARS: usize = 6;

pub fn has_listing_text(text: &str) -> bool {
    text.chars().count() > MIN_TITLE_CHARS
}

/// Prefixes `origin` onto root-relative hrefs; anything else is kept as is.
pub fn absolutize(href: &str, origin: &str) -> String {
    if href.starts_with('/') {
        format!("{}{}", origin.trim_end_matches('/'), href)
    } else {
        href.to_string()
    }
}

/// Keeps the first listing for each URL, preserving encounter order.
pub fn dedupe_by_url(listings: Vec<Listing>) -> Vec<Listing> {
    let mut seen = HashSet::with_capacity(listings.len());
    listings
        .into_iter()
        .filter(|l| seen.insert(l.url.clone()))
        .collect()
}

/// Whitespace-normalised visible text of an element.
fn visible_text(element: &scraper::ElementRef<'_>) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Candidate listings found in `html`, in document order, not yet deduplicated.
pub fn parse_listings(site: &Site, html: &str) -> Vec<Listing> {
    let document = Html::parse_document(html);

    let mut out = Vec::new();
    for element in document.select(&ANCHORS) {
        let href = element.value().attr("href").unwrap_or_default().trim();
        if href.is_empty() {
            continue;
        }
        let text = visible_text(&element);
        if text.is_empty() || !(site.is_listing)(href, &text) {
            continue;
        }

        let url = absolutize(href, site.origin);
        tracing::debug!(source = site.name, %url, title = %text, "candidate listing");
        out.push(Listing::new(site.name, text, url));
    }
    out
}

pub struct MarketplaceAdapter {
    site: &'static Site,
    endpoint: String,
    fetcher: Fetcher,
}

impl MarketplaceAdapter {
    pub fn new(site: &'static Site, fetcher: Fetcher) -> Self {
        Self {
            site,
            endpoint: site.endpoint.to_string(),
            fetcher,
        }
    }

    /// Polls `endpoint` instead of the site's own page, e.g. a local mirror.
    pub fn with_endpoint(site: &'static Site, endpoint: &str, fetcher: Fetcher) -> Result<Self> {
        validate_url("endpoint", endpoint)?;
        Ok(Self {
            site,
            endpoint: endpoint.to_string(),
            fetcher,
        })
    }
}

#[async_trait]
impl SourceAdapter for MarketplaceAdapter {
    fn name(&self) -> &str {
        self.site.name
    }

    async fn produce_listings(&self) -> std::result::Result<Vec<Listing>, AdapterError> {
        let body = self
            .fetcher
            .fetch(&self.endpoint)
            .await
            .map_err(|e| AdapterError::new(self.site.name, e))?;

        let candidates = parse_listings(self.site, &body);
        let found = candidates.len();
        let listings = dedupe_by_url(candidates);
        tracing::info!(
            source = self.site.name,
            found,
            unique = listings.len(),
            "parsed marketplace page"
        );
        Ok(listings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::http::HttpTransport;
    use crate::adapters::sites::CONTROLLER;
    use crate::core::fetcher::RetryPolicy;
    use crate::utils::error::FetchError;
    use httpmock::prelude::*;
    use std::sync::Arc;
    use std::time::Duration;

    fn fetcher() -> Fetcher {
        Fetcher::new(
            Arc::new(HttpTransport::new(Duration::from_secs(5)).unwrap()),
            RetryPolicy {
                attempts: 2,
                backoff: Duration::ZERO,
            },
        )
    }

    #[test]
    fn test_dedupe_by_url_keeps_first_occurrence() {
        let input = vec![
            Listing::new("S", "first", "a"),
            Listing::new("S", "second", "a"),
            Listing::new("S", "third", "b"),
        ];

        let out = dedupe_by_url(input);

        let urls: Vec<&str> = out.iter().map(|l| l.url.as_str()).collect();
        assert_eq!(urls, vec!["a", "b"]);
        assert_eq!(out[0].title, "first");
    }

    #[test]
    fn test_absolutize() {
        assert_eq!(
            absolutize("/listing/1", "https://www.controller.com"),
            "https://www.controller.com/listing/1"
        );
        assert_eq!(
            absolutize("/listing/1", "https://www.controller.com/"),
            "https://www.controller.com/listing/1"
        );
        assert_eq!(
            absolutize("https://other.test/listing/1", "https://www.controller.com"),
            "https://other.test/listing/1"
        );
    }

    #[test]
    fn test_has_listing_text() {
        assert!(!has_listing_text("View"));
        assert!(!has_listing_text("Detail"));
        assert!(has_listing_text("Details"));
        assert!(has_listing_text("Gulfstream"));
    }

    #[test]
    fn test_parse_skips_short_text_and_empty_anchors() {
        let html = r#"
            <a href="/listing/1"><img src="x.png"></a>
            <a href="/listing/2">Photos</a>
            <a href="">2019 Gulfstream G500</a>
            <a href="/listing/3">
                2018   Dassault
                <span>Falcon 8X</span>
            </a>
        "#;

        let listings = parse_listings(&CONTROLLER, html);

        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].title, "2018 Dassault Falcon 8X");
        assert_eq!(listings[0].url, "https://www.controller.com/listing/3");
        assert_eq!(listings[0].source, "Controller");
        assert!(listings[0].year.is_none());
    }

    #[test]
    fn test_consecutive_pages_parse_independently() {
        let first = parse_listings(&CONTROLLER, r#"<a href="/listing/7">2020 Pilatus PC-24</a>"#);
        let second = parse_listings(&CONTROLLER, r#"<a href="/listing/8">2017 HondaJet Elite</a>"#);

        assert_eq!(first.len(), 1);
        assert_eq!(second.len(), 1);
        assert_eq!(first[0].url, "https://www.controller.com/listing/7");
        assert_eq!(second[0].url, "https://www.controller.com/listing/8");
    }

    #[tokio::test]
    async fn test_produce_listings_fetches_parses_and_dedupes() {
        let server = MockServer::start();
        let page = server.mock(|when, then| {
            when.method(GET).path("/listings/for-sale/jet-aircraft/3");
            then.status(200).body(
                r#"<html><body>
                <a href="/listing/for-sale/1/2015-gulfstream-g450">2015 Gulfstream G450</a>
                <a href="/listing/for-sale/1/2015-gulfstream-g450">2015 Gulfstream G450</a>
                <a href="/listing/for-sale/2/2012-cessna-citation-cj4">2012 Cessna Citation CJ4</a>
                <a href="/about-us">About Controller</a>
                </body></html>"#,
            );
        });

        let adapter = MarketplaceAdapter::with_endpoint(
            &CONTROLLER,
            &server.url("/listings/for-sale/jet-aircraft/3"),
            fetcher(),
        )
        .unwrap();

        let listings = adapter.produce_listings().await.unwrap();

        page.assert();
        assert_eq!(listings.len(), 2);
        assert_eq!(
            listings[0].url,
            "https://www.controller.com/listing/for-sale/1/2015-gulfstream-g450"
        );
        assert_eq!(listings[1].title, "2012 Cessna Citation CJ4");
    }

    #[tokio::test]
    async fn test_fetch_failure_is_tagged_with_source_name() {
        let server = MockServer::start();
        let page = server.mock(|when, then| {
            when.method(GET).path("/blocked");
            then.status(403);
        });

        let url = server.url("/blocked");
        let adapter = MarketplaceAdapter::with_endpoint(&CONTROLLER, &url, fetcher()).unwrap();

        let err = adapter.produce_listings().await.unwrap_err();

        page.assert_hits(2);
        assert_eq!(err.adapter, "Controller");
        assert_eq!(err.cause, FetchError::Status { url, status: 403 });
    }

    #[test]
    fn test_with_endpoint_rejects_bad_urls() {
        assert!(MarketplaceAdapter::with_endpoint(&CONTROLLER, "not a url", fetcher()).is_err());
    }
}
