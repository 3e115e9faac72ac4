use crate::domain::model::Listing;

/// Manufacturer, model-family and VIP-airliner keywords, lower-case.
pub const JET_KEYWORDS: &[&str] = &[
    "gulfstream",
    "falcon",
    "dassault",
    "global",
    "challenger",
    "bombardier",
    "citation",
    "cessna",
    "legacy",
    "praetor",
    "phenom",
    "learjet",
    "hawker",
    "embraer",
    "hondajet",
    "pc-24",
    "bbj",
    "acj",
    "lineage",
    "airbus",
    "boeing",
];

/// Loose substring match of the title against [`JET_KEYWORDS`].
///
/// Not word-boundary aware: "Globalstar" matches "global".
pub fn is_jet(listing: &Listing) -> bool {
    title_is_jet(&listing.title)
}

pub fn title_is_jet(title: &str) -> bool {
    let t = title.to_lowercase();
    JET_KEYWORDS.iter().any(|k| t.contains(k))
}
