use indexmap::IndexMap;
use serde::Deserialize;

/// Technical spec columns copied into the output, in emission order.
pub const SPEC_KEYS: &[&str] = &[
    "socket",
    "form_factor",
    "tdp_watts",
    "memory_type",
    "clock_speed",
    "chipset",
    "vram_gb",
    "length_mm",
    "height_mm",
    "slots",
    "interface",
    "capacity_gb",
    "modules_count",
];

/// One row of the vendor product export.
///
/// Every field defaults so a sparse export (missing image or spec columns)
/// still deserializes; absence and emptiness both mean "no data".
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SourceRecord {
    pub category: String,
    pub name: String,
    pub brand: String,
    pub price: String,
    pub stock: String,

    pub image_1: Option<String>,
    pub image_2: Option<String>,
    pub image_3: Option<String>,
    pub image_4: Option<String>,
    pub image_5: Option<String>,
    pub image_6: Option<String>,

    pub socket: Option<String>,
    pub form_factor: Option<String>,
    pub tdp_watts: Option<String>,
    pub memory_type: Option<String>,
    pub clock_speed: Option<String>,
    pub chipset: Option<String>,
    pub vram_gb: Option<String>,
    pub length_mm: Option<String>,
    pub height_mm: Option<String>,
    pub slots: Option<String>,
    pub interface: Option<String>,
    pub capacity_gb: Option<String>,
    pub modules_count: Option<String>,
}

impl SourceRecord {
    fn spec_value(&self, key: &str) -> Option<&str> {
        match key {
            "socket" => self.socket.as_deref(),
            "form_factor" => self.form_factor.as_deref(),
            "tdp_watts" => self.tdp_watts.as_deref(),
            "memory_type" => self.memory_type.as_deref(),
            "clock_speed" => self.clock_speed.as_deref(),
            "chipset" => self.chipset.as_deref(),
            "vram_gb" => self.vram_gb.as_deref(),
            "length_mm" => self.length_mm.as_deref(),
            "height_mm" => self.height_mm.as_deref(),
            "slots" => self.slots.as_deref(),
            "interface" => self.interface.as_deref(),
            "capacity_gb" => self.capacity_gb.as_deref(),
            "modules_count" => self.modules_count.as_deref(),
            _ => None,
        }
    }
}

/// One normalized row of the storefront inventory file.
///
/// `images` and `specs` stay structured in memory; they are JSON-encoded
/// only when the row is written out.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetRecord {
    pub id: String,
    pub name: String,
    pub price: String,
    pub stock: u32,
    pub category: String,
    pub brand: String,
    pub image: String,
    pub images: Vec<String>,
    pub specs: IndexMap<&'static str, String>,
    pub sold: u32,
    pub available: bool,
}

/// Gather the non-empty image URLs from `image_1..image_6`, keeping the
/// numeric column order.
pub fn collect_images(row: &SourceRecord) -> Vec<String> {
    [
        &row.image_1,
        &row.image_2,
        &row.image_3,
        &row.image_4,
        &row.image_5,
        &row.image_6,
    ]
    .into_iter()
    .filter_map(|slot| slot.as_deref())
    .map(str::trim)
    .filter(|url| !url.is_empty())
    .map(str::to_string)
    .collect()
}

/// Gather the non-empty spec values under their source keys, in `SPEC_KEYS`
/// order. TDP gets a numeric-cleaning pass ("65 W" becomes "65") before the
/// emptiness check; keys left empty after cleaning are omitted entirely.
pub fn collect_specs(row: &SourceRecord) -> IndexMap<&'static str, String> {
    let mut specs = IndexMap::new();
    for &key in SPEC_KEYS {
        let Some(raw) = row.spec_value(key) else {
            continue;
        };
        let value = if key == "tdp_watts" {
            clean_tdp(raw.trim())
        } else {
            raw.trim().to_string()
        };
        if !value.is_empty() {
            specs.insert(key, value);
        }
    }
    specs
}

/// Keep only digits and decimal points, dropping unit suffixes like "W".
fn clean_tdp(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn images_keep_column_order_and_skip_blanks() {
        let row = SourceRecord {
            image_1: Some(String::new()),
            image_2: Some("http://x/b.jpg".to_string()),
            image_3: Some("   ".to_string()),
            image_5: Some("http://x/e.jpg".to_string()),
            ..SourceRecord::default()
        };
        assert_eq!(collect_images(&row), vec!["http://x/b.jpg", "http://x/e.jpg"]);
    }

    #[test]
    fn no_images_yields_empty_list() {
        assert!(collect_images(&SourceRecord::default()).is_empty());
    }

    #[test]
    fn specs_omit_missing_and_empty_keys() {
        let row = SourceRecord {
            socket: Some("AM5".to_string()),
            form_factor: Some("  ".to_string()),
            chipset: None,
            ..SourceRecord::default()
        };
        let specs = collect_specs(&row);
        assert_eq!(specs.len(), 1);
        assert_eq!(specs.get("socket").map(String::as_str), Some("AM5"));
        assert!(!specs.contains_key("form_factor"));
        assert!(!specs.contains_key("chipset"));
    }

    #[test]
    fn specs_keep_declared_key_order() {
        let row = SourceRecord {
            interface: Some("NVMe".to_string()),
            socket: Some("AM4".to_string()),
            capacity_gb: Some("1000".to_string()),
            ..SourceRecord::default()
        };
        let keys: Vec<&str> = collect_specs(&row).keys().copied().collect();
        assert_eq!(keys, vec!["socket", "interface", "capacity_gb"]);
    }

    #[test]
    fn tdp_is_reduced_to_its_number() {
        let row = SourceRecord {
            tdp_watts: Some("105 W".to_string()),
            ..SourceRecord::default()
        };
        assert_eq!(collect_specs(&row).get("tdp_watts").map(String::as_str), Some("105"));
    }

    #[test]
    fn tdp_that_cleans_to_nothing_is_omitted() {
        let row = SourceRecord {
            tdp_watts: Some("TBD".to_string()),
            ..SourceRecord::default()
        };
        assert!(!collect_specs(&row).contains_key("tdp_watts"));
    }

    #[test]
    fn tdp_keeps_decimal_points() {
        assert_eq!(clean_tdp("12.5W"), "12.5");
    }
}
