//! Parses the embedded wardrobe-catalog RON document.

use crate::shared::WardrobeCatalog;

const CATALOG_RON: &str = include_str!("wardrobe_catalog.ron");

/// Parse the embedded catalog. Ships inside the binary, so a parse
/// failure is a programmer error caught at startup.
pub fn load_wardrobe_catalog() -> WardrobeCatalog {
    ron::from_str(CATALOG_RON).expect("wardrobe_catalog.ron is malformed")
}
