use crate::domain::model::Listing;
use sha2::{Digest, Sha256};

/// Hex SHA-256 of `source|url`: the persistent identity of a listing.
pub fn fingerprint(source: &str, url: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(source.as_bytes());
    hasher.update(b"|");
    hasher.update(url.as_bytes());
    hex::encode(hasher.finalize())
}

pub fn listing_fingerprint(listing: &Listing) -> String {
    fingerprint(&listing.source, &listing.url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_fingerprint_is_deterministic() {
        let a = fingerprint("Controller", "https://www.controller.com/listing/1");
        let b = fingerprint("Controller", "https://www.controller.com/listing/1");
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_distinct_pairs_do_not_collide() {
        let mut seen = HashSet::new();
        for source in ["Controller", "AvBuyer", "GlobalAir", "ASO", "JamesEdition"] {
            for i in 0..200 {
                let url = format!("https://market.test/listing/{}", i);
                assert!(seen.insert(fingerprint(source, &url)));
            }
        }
        assert_eq!(seen.len(), 1000);
    }

    #[test]
    fn test_same_url_different_source_differs() {
        assert_ne!(
            fingerprint("Controller", "https://x.test/a"),
            fingerprint("AvBuyer", "https://x.test/a")
        );
    }

    #[test]
    fn test_listing_fingerprint_uses_source_and_url_only() {
        let mut a = Listing::new("ASO", "Falcon 7X", "https://www.aso.com/listings/spec/1");
        let b = Listing::new("ASO", "Different title", "https://www.aso.com/listings/spec/1");
        a.price = Some("$20M".to_string());
        assert_eq!(listing_fingerprint(&a), listing_fingerprint(&b));
    }
}
