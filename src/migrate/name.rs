/// Marker that MSI listings append to product names in the vendor export.
/// Everything from the marker onwards is promotional copy, not the name.
const PROMO_MARKER: &str = "MSI \"Anno 117";

/// Strip promotional junk from a vendor product name.
///
/// If the promo marker appears anywhere in the name, keep only the text
/// before its first occurrence. Either way the result is whitespace-trimmed.
pub fn clean_name(raw: &str) -> String {
    match raw.find(PROMO_MARKER) {
        Some(idx) => raw[..idx].trim().to_string(),
        None => raw.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_at_promo_marker() {
        let raw = "MSI GeForce RTX 4060 VentusMSI \"Anno 117: Pax Romana\" bundle offer";
        assert_eq!(clean_name(raw), "MSI GeForce RTX 4060 Ventus");
    }

    #[test]
    fn truncates_at_first_occurrence_only() {
        let raw = "X MSI \"Anno 117 first MSI \"Anno 117 second";
        assert_eq!(clean_name(raw), "X");
    }

    #[test]
    fn trims_names_without_marker() {
        assert_eq!(clean_name("  AMD Ryzen 7 5800X  "), "AMD Ryzen 7 5800X");
    }

    #[test]
    fn empty_in_empty_out() {
        assert_eq!(clean_name(""), "");
    }
}
