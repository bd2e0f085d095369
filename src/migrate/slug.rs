use std::collections::HashSet;

use itertools::Itertools;

/// Tokens dropped from name slugs to keep identifiers short. All lowercase.
pub const STOP_WORDS: &[&str] = &[
    "processor", "graphics", "card", "motherboard", "desktop", "gaming", "edition", "series",
    "with", "radeon", "geforce", "video", "memory", "module", "solid", "state", "drive", "ssd",
    "hdd", "internal", "external",
];

/// Issues human-legible identifiers that are unique within one migration run.
///
/// Owns the set of every identifier handed out so far; collisions get a
/// numeric suffix in arrival order, so the same ordered input always yields
/// the same id sequence.
#[derive(Debug, Default)]
pub struct IdGenerator {
    seen: HashSet<String>,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of identifiers issued so far.
    pub fn issued(&self) -> usize {
        self.seen.len()
    }

    /// Build the identifier for one accepted record and reserve it.
    ///
    /// Slug shape: `<category>[-<brand>][-<name-tokens>]`, all lowercase
    /// alphanumerics and hyphens. The brand substring is removed from the
    /// name before tokenizing; that removal is a plain substring replace, so
    /// a brand whose text appears inside an unrelated word over-strips. The
    /// storefront already carries ids produced this way, so the behavior is
    /// kept as-is.
    pub fn generate(&mut self, category: &str, brand: &str, name: &str) -> String {
        let mut parts: Vec<String> = vec![category.to_lowercase()];

        if !brand.is_empty() {
            let brand_slug: String = brand
                .to_lowercase()
                .chars()
                .filter(char::is_ascii_alphanumeric)
                .collect();
            if !brand_slug.is_empty() {
                parts.push(brand_slug);
            }
        }

        let mut name_lower = name.to_lowercase();
        if !brand.is_empty() {
            name_lower = name_lower.replace(&brand.to_lowercase(), "");
        }

        let name_slug = name_lower
            .split(|c: char| !c.is_ascii_alphanumeric())
            .filter(|token| !token.is_empty() && !STOP_WORDS.contains(token))
            .join("-");
        if !name_slug.is_empty() {
            parts.push(name_slug);
        }

        let base_id = parts.join("-");

        let mut final_id = base_id.clone();
        let mut counter = 1u32;
        while self.seen.contains(&final_id) {
            final_id = format!("{base_id}-{counter}");
            counter += 1;
        }

        self.seen.insert(final_id.clone());
        final_id
    }
}
