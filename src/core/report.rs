use crate::domain::model::{Listing, SourceFailure};

pub const REPORT_TITLE: &str = "# Daily Business Jet Listings";
pub const NO_NEW_LISTINGS: &str = "_No new listings this run._";
pub const MAX_REPORT_ENTRIES: usize = 250;
pub const MAX_ERROR_CHARS: usize = 300;

fn truncate_chars(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(max).collect();
        out.push_str("...");
        out
    }
}

/// Renders the Markdown report for one run.
///
/// Pure: the output depends only on the inputs and their order.
pub fn build(new_listings: &[Listing], failures: &[SourceFailure]) -> String {
    let mut lines = vec![
        REPORT_TITLE.to_string(),
        String::new(),
        format!("New listings: **{}**", new_listings.len()),
        String::new(),
    ];

    if !failures.is_empty() {
        lines.push("## Failed sources".to_string());
        lines.push(String::new());
        for failure in failures {
            lines.push(format!(
                "- **{}**: {}",
                failure.source,
                truncate_chars(&failure.error, MAX_ERROR_CHARS)
            ));
        }
        lines.push(String::new());
    }

    lines.push("## New listings".to_string());
    lines.push(String::new());

    if new_listings.is_empty() {
        lines.push(NO_NEW_LISTINGS.to_string());
        lines.push(String::new());
    }

    for listing in new_listings.iter().take(MAX_REPORT_ENTRIES) {
        lines.push(format!("- **{}**", listing.title));
        lines.push(format!("  - Source: {}", listing.source));
        if let Some(meta) = listing.metadata_line() {
            lines.push(format!("  - {}", meta));
        }
        lines.push(format!("  - Link: {}", listing.url));
        lines.push(String::new());
    }

    if new_listings.len() > MAX_REPORT_ENTRIES {
        lines.push(format!(
            "_{} more listings omitted._",
            new_listings.len() - MAX_REPORT_ENTRIES
        ));
        lines.push(String::new());
    }

    lines.join("\n")
}
