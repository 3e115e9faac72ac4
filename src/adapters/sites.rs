//! Marketplace profiles: where each listing page lives and how its listing
//! links look. These heuristics track third-party markup and will drift.

use crate::adapters::marketplace::{has_listing_text, MarketplaceAdapter};
use crate::core::fetcher::Fetcher;
use crate::domain::ports::SourceAdapter;

pub struct Site {
    pub name: &'static str,
    pub endpoint: &'static str,
    pub origin: &'static str,
    /// Decides from `(href, visible text)` whether an anchor is a listing card.
    pub is_listing: fn(&str, &str) -> bool,
}

/// Path after `fragment` in `href`, if `fragment` occurs.
fn after<'a>(href: &'a str, fragment: &str) -> Option<&'a str> {
    href.find(fragment).map(|i| &href[i + fragment.len()..])
}

fn path_segments(rest: &str) -> usize {
    rest.split(['?', '#'])
        .next()
        .unwrap_or_default()
        .split('/')
        .filter(|s| !s.is_empty())
        .count()
}

fn controller_listing(href: &str, text: &str) -> bool {
    href.contains("/listing/") && has_listing_text(text)
}

fn avbuyer_listing(href: &str, text: &str) -> bool {
    after(href, "/aircraft/private-jets/").is_some_and(|rest| path_segments(rest) > 0)
        && has_listing_text(text)
}

fn globalair_listing(href: &str, text: &str) -> bool {
    // Category pages are /aircraft-for-sale/<category>; listings sit deeper.
    after(href, "/aircraft-for-sale/").is_some_and(|rest| path_segments(rest) >= 2)
        && has_listing_text(text)
}

fn aso_listing(href: &str, text: &str) -> bool {
    href.contains("/listings/spec/") && has_listing_text(text)
}

fn jamesedition_listing(href: &str, text: &str) -> bool {
    !href.contains('?')
        && after(href, "/jets/").is_some_and(|rest| path_segments(rest) > 0)
        && has_listing_text(text)
}

pub static CONTROLLER: Site = Site {
    name: "Controller",
    endpoint: "https://www.controller.com/listings/for-sale/jet-aircraft/3",
    origin: "https://www.controller.com",
    is_listing: controller_listing,
};

pub static AVBUYER: Site = Site {
    name: "AvBuyer",
    endpoint: "https://www.avbuyer.com/aircraft/private-jets",
    origin: "https://www.avbuyer.com",
    is_listing: avbuyer_listing,
};

pub static GLOBALAIR: Site = Site {
    name: "GlobalAir",
    endpoint: "https://www.globalair.com/aircraft-for-sale/private-jet",
    origin: "https://www.globalair.com",
    is_listing: globalair_listing,
};

pub static ASO: Site = Site {
    name: "ASO",
    endpoint: "https://www.aso.com/listings/AircraftListings.aspx?act=sale&t=3",
    origin: "https://www.aso.com",
    is_listing: aso_listing,
};

pub static JAMESEDITION: Site = Site {
    name: "JamesEdition",
    endpoint: "https://www.jamesedition.com/jets",
    origin: "https://www.jamesedition.com",
    is_listing: jamesedition_listing,
};

/// Polling order for a run.
pub static SITES: [&Site; 5] = [&CONTROLLER, &AVBUYER, &GLOBALAIR, &ASO, &JAMESEDITION];

pub fn default_adapters(fetcher: &Fetcher) -> Vec<Box<dyn SourceAdapter>> {
    SITES
        .iter()
        .map(|&site| {
            Box::new(MarketplaceAdapter::new(site, fetcher.clone())) as Box<dyn SourceAdapter>
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::marketplace::parse_listings;
    use crate::utils::validation::validate_url;

    #[test]
    fn test_site_profiles_are_valid() {
        for site in SITES {
            assert!(validate_url("endpoint", site.endpoint).is_ok(), "{}", site.name);
            assert!(site.endpoint.starts_with(site.origin), "{}", site.name);
        }
    }

    #[test]
    fn test_controller_links() {
        let html = r#"
            <a href="/listing/for-sale/230001/2016-bombardier-global-6000-jet">2016 BOMBARDIER GLOBAL 6000</a>
            <a href="/listings/for-sale/jet-aircraft/3?page=2">Next page of results</a>
            <a href="https://www.controller.com/listing/for-sale/230002/x">2008 HAWKER 900XP</a>
        "#;
        let urls: Vec<String> = parse_listings(&CONTROLLER, html)
            .into_iter()
            .map(|l| l.url)
            .collect();
        assert_eq!(
            urls,
            vec![
                "https://www.controller.com/listing/for-sale/230001/2016-bombardier-global-6000-jet",
                "https://www.controller.com/listing/for-sale/230002/x",
            ]
        );
    }

    #[test]
    fn test_avbuyer_links() {
        assert!(avbuyer_listing(
            "/aircraft/private-jets/gulfstream/g650er/412345",
            "Gulfstream G650ER 2019"
        ));
        assert!(!avbuyer_listing("/aircraft/private-jets/", "All private jets"));
        assert!(!avbuyer_listing("/aircraft/private-jets", "All private jets"));
        assert!(!avbuyer_listing("/aircraft/turboprops/king-air/1", "King Air 350"));
    }

    #[test]
    fn test_globalair_links() {
        assert!(globalair_listing(
            "/aircraft-for-sale/private-jet/cessna-citation-xls/123456",
            "2010 Cessna Citation XLS+"
        ));
        assert!(!globalair_listing("/aircraft-for-sale/private-jet", "Private Jets"));
        assert!(!globalair_listing(
            "/aircraft-for-sale/private-jet?sort=price",
            "Sort by price"
        ));
    }

    #[test]
    fn test_aso_links() {
        let html = r#"
            <a href="/listings/spec/ViewAd.aspx?id=198765&amp;listingType=true">2014 Embraer Legacy 500</a>
            <a href="/listings/AircraftListings.aspx?act=sale&amp;t=3&amp;pg=2">More Jets</a>
        "#;
        let listings = parse_listings(&ASO, html);
        assert_eq!(listings.len(), 1);
        assert_eq!(
            listings[0].url,
            "https://www.aso.com/listings/spec/ViewAd.aspx?id=198765&listingType=true"
        );
    }

    #[test]
    fn test_jamesedition_links() {
        assert!(jamesedition_listing(
            "/jets/gulfstream/g550/gulfstream-g550-2011-12345678",
            "2011 Gulfstream G550"
        ));
        assert!(!jamesedition_listing("/jets/?price_min=1000000", "Over one million"));
        assert!(!jamesedition_listing("/jets/", "All jets for sale"));
    }

    #[test]
    fn test_default_adapters_follow_declared_order() {
        use crate::adapters::http::HttpTransport;
        use crate::core::fetcher::RetryPolicy;
        use std::sync::Arc;

        let fetcher = Fetcher::new(
            Arc::new(HttpTransport::new(std::time::Duration::from_secs(5)).unwrap()),
            RetryPolicy::default(),
        );
        let names: Vec<String> = default_adapters(&fetcher)
            .iter()
            .map(|a| a.name().to_string())
            .collect();
        assert_eq!(
            names,
            vec!["Controller", "AvBuyer", "GlobalAir", "ASO", "JamesEdition"]
        );
    }
}
