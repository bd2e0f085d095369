/// Static mapping from vendor category labels to storefront category codes.
///
/// The vendor export uses display labels ("Graphics Card"); the storefront
/// schema wants short codes ("gpu"). Lookup is exact after trimming: there is
/// deliberately no case folding or fuzzy matching, so an unmapped label means
/// the row is skipped rather than guessed at.
pub const CATEGORY_MAP: &[(&str, &str)] = &[
    ("Processor", "cpu"),
    ("Motherboard", "motherboard"),
    ("Graphics Card", "gpu"),
    ("Memory", "ram"),
    ("Storage", "storage"),
    ("Cabinet", "case"),
    ("SMPS", "psu"),
    ("CPU Cooler", "cooler"),
    ("Cooling System", "cooler"),
    ("Custom Cooling", "cooler"),
];

/// Resolve a raw vendor category label to its storefront code.
///
/// Returns `None` for any label outside the closed set above; callers treat
/// that as "skip this record".
pub fn resolve_category(raw: &str) -> Option<&'static str> {
    let label = raw.trim();
    CATEGORY_MAP
        .iter()
        .find(|(vendor, _)| *vendor == label)
        .map(|(_, code)| *code)
}
