//! Station group and stop records.

use serde::Serialize;

use super::StopId;

/// A cluster of physically co-located stops sharing a group code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationGroup {
    /// Group code (4 digits in practice, e.g. "1001").
    pub id: String,
    pub name: String,
    pub city_code: String,
    pub city_name: String,
}

/// A single physical boarding point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Station {
    pub id: StopId,
    /// Code of the owning group, derived from `id`.
    ///
    /// Downstream consumers assume a group with this code exists, but a
    /// feed is not rejected when it doesn't.
    pub group_id: String,
    pub street: String,
    pub destination: String,
    /// Latitude, when the feed carried a numeric value.
    pub y: Option<f64>,
    /// Longitude, when the feed carried a numeric value.
    pub x: Option<f64>,
}

impl Station {
    /// Create a stop record, deriving its group from the id.
    pub fn new(
        id: StopId,
        street: impl Into<String>,
        destination: impl Into<String>,
        y: Option<f64>,
        x: Option<f64>,
    ) -> Self {
        Self {
            id,
            group_id: id.group_code().to_string(),
            street: street.into(),
            destination: destination.into(),
            y,
            x,
        }
    }

    /// Returns `(x, y)` when both coordinates are present.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        Some((self.x?, self.y?))
    }
}
