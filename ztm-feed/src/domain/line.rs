//! Transport lines, their variants and stop sequences.

use std::fmt;

use serde::Serialize;

use super::{StopId, TransitMode};

/// Identity of one variant of a line: `(line_number, variant)`.
///
/// Variants are numbered from 1 in the order the feed declares them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct VariantKey {
    pub line_number: String,
    pub variant: u32,
}

impl VariantKey {
    pub fn new(line_number: impl Into<String>, variant: u32) -> Self {
        Self {
            line_number: line_number.into(),
            variant,
        }
    }
}

impl fmt::Display for VariantKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.line_number, self.variant)
    }
}

/// One declared variant of a named line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransportLine {
    pub line_number: String,
    /// 1-based variant number.
    pub variant: u32,
    pub mode: TransitMode,
    /// Raw category label the mode was classified from.
    pub category: String,
}

impl TransportLine {
    pub fn key(&self) -> VariantKey {
        VariantKey::new(self.line_number.clone(), self.variant)
    }
}

/// A stop reference inside a line variant's route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StopRef {
    pub station_id: StopId,
    pub station_name: String,
}

/// The ordered stops of one `*LW` block.
///
/// `ordinal` is the block's position in the feed. `key` is the variant the
/// block was attached to; it is `None` for blocks beyond the last declared
/// variant or when joining is disabled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StopSequence {
    pub ordinal: usize,
    pub key: Option<VariantKey>,
    pub stops: Vec<StopRef>,
}

impl StopSequence {
    /// Consecutive stop pairs in travel order.
    ///
    /// ```
    /// use ztm_feed::domain::{StopId, StopRef, StopSequence};
    ///
    /// let stop = |id: &str| StopRef {
    ///     station_id: StopId::parse(id).unwrap(),
    ///     station_name: String::new(),
    /// };
    /// let seq = StopSequence {
    ///     ordinal: 0,
    ///     key: None,
    ///     stops: vec![stop("100101"), stop("100201"), stop("100301")],
    /// };
    /// let hops: Vec<_> = seq.hops().map(|(a, b)| format!("{a}-{b}")).collect();
    /// assert_eq!(hops, ["100101-100201", "100201-100301"]);
    /// ```
    pub fn hops(&self) -> impl Iterator<Item = (StopId, StopId)> + '_ {
        self.stops
            .windows(2)
            .map(|pair| (pair[0].station_id, pair[1].station_id))
    }
}
