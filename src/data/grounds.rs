//! Parses the embedded festival-grounds JSON document into a
//! GroundsLayout.

use crate::shared::GroundsLayout;

const GROUNDS_JSON: &str = include_str!("festival_grounds.json");

/// Parse the embedded grounds document. The document ships inside the
/// binary, so a parse failure is a programmer error caught at startup.
pub fn load_grounds() -> GroundsLayout {
    serde_json::from_str(GROUNDS_JSON).expect("festival_grounds.json is malformed")
}
