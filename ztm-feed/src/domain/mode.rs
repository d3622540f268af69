//! Transit mode classification.

use std::fmt;

use serde::Serialize;

/// Category labels of bus lines.
const BUS_CATEGORIES: &[&str] = &[
    "LINIA ZWYKŁA",
    "LINIA ZWYKŁA OKRESOWA",
    "LINIA EKSPRESOWA",
    "LINIA PRZYSPIESZONA",
    "LINIA PRZYSPIESZONA OKRESOWA",
    "LINIA STREFOWA",
    "LINIA STREFOWA UZUPEŁNIAJĄCA",
    "LINIA NOCNA",
    "LINIA ZASTĘPCZA",
    "LINIA SPECJALNA",
];

/// Category labels of tram lines.
const TRAM_CATEGORIES: &[&str] = &["LINIA TRAMWAJOWA", "LINIA TRAMWAJOWA UZUPEŁNIAJĄCA"];

/// Category labels of rail lines.
const TRAIN_CATEGORIES: &[&str] = &["LINIA KOLEI MIEJSKIEJ"];

/// Transit category of a line.
///
/// # Examples
///
/// ```
/// use ztm_feed::domain::TransitMode;
///
/// assert_eq!(TransitMode::classify("LINIA TRAMWAJOWA"), TransitMode::Tram);
/// assert_eq!(TransitMode::classify("LINIA KOLEI MIEJSKIEJ"), TransitMode::Train);
/// assert_eq!(TransitMode::classify("PROM"), TransitMode::Unknown);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransitMode {
    Bus,
    Tram,
    Train,
    /// The category label is not one of the known ones.
    Unknown,
}

impl TransitMode {
    /// All modes, in display order.
    pub const ALL: [TransitMode; 4] = [
        TransitMode::Bus,
        TransitMode::Tram,
        TransitMode::Train,
        TransitMode::Unknown,
    ];

    /// Classify a category label such as `"LINIA ZWYKŁA"`.
    ///
    /// Surrounding whitespace is ignored; anything else must match exactly.
    pub fn classify(category: &str) -> Self {
        let category = category.trim();
        if BUS_CATEGORIES.contains(&category) {
            TransitMode::Bus
        } else if TRAM_CATEGORIES.contains(&category) {
            TransitMode::Tram
        } else if TRAIN_CATEGORIES.contains(&category) {
            TransitMode::Train
        } else {
            TransitMode::Unknown
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TransitMode::Bus => "BUS",
            TransitMode::Tram => "TRAM",
            TransitMode::Train => "TRAIN",
            TransitMode::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for TransitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_bus_categories() {
        for category in BUS_CATEGORIES {
            assert_eq!(TransitMode::classify(category), TransitMode::Bus, "{category}");
        }
    }

    #[test]
    fn classify_tram_categories() {
        assert_eq!(TransitMode::classify("LINIA TRAMWAJOWA"), TransitMode::Tram);
        assert_eq!(
            TransitMode::classify("LINIA TRAMWAJOWA UZUPEŁNIAJĄCA"),
            TransitMode::Tram
        );
    }

    #[test]
    fn classify_rail_category() {
        assert_eq!(TransitMode::classify("LINIA KOLEI MIEJSKIEJ"), TransitMode::Train);
    }

    #[test]
    fn unknown_labels_are_not_errors() {
        assert_eq!(TransitMode::classify(""), TransitMode::Unknown);
        assert_eq!(TransitMode::classify("linia zwykła"), TransitMode::Unknown);
        assert_eq!(TransitMode::classify("LINIA METRA"), TransitMode::Unknown);
    }

    #[test]
    fn classify_ignores_surrounding_whitespace() {
        assert_eq!(TransitMode::classify("  LINIA NOCNA "), TransitMode::Bus);
    }

    #[test]
    fn display_and_serialize_match() {
        for mode in TransitMode::ALL {
            let json = serde_json::to_string(&mode).unwrap();
            assert_eq!(json, format!("\"{mode}\""));
        }
    }
}
