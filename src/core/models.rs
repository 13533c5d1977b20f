//! Shared data models used across the endpoint modules.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A coordinate: latitude in [-90, 90], longitude in [-180, 180].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lon: f64,
}

/// A timestamped waypoint on a vessel's planned track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoutePoint {
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lon: f64,
    /// The time the vessel is expected at this waypoint.
    pub time: DateTime<Utc>,
}

/// A forecast time range.
///
/// All fields are optional at the type level; validation enforces that at
/// least one of `from`/`to` is present and that `repeat` and `to` are not
/// combined (inputs often cross a serialization boundary, so the constraints
/// are checked at runtime rather than encoded in the type).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TimeRange {
    /// Starting time to retrieve data from.
    pub from: Option<DateTime<Utc>>,
    /// Ending time to retrieve data to. Mutually exclusive with `repeat`.
    pub to: Option<DateTime<Utc>>,
    /// Spacing between data points, in hours. The server defaults to 3.
    pub interval: Option<u32>,
    /// Number of data points to retrieve. Mutually exclusive with `to`.
    pub repeat: Option<u32>,
}

/// Per-variable forecast payload: one value (or gap) per time point.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VariableData {
    /// CF standard name of the quantity.
    #[serde(rename = "standardName")]
    pub standard_name: String,
    /// Units the data is expressed in.
    pub units: String,
    /// SI units of the quantity.
    #[serde(rename = "siUnits")]
    pub si_units: String,
    /// Names of the dimensions the data is laid out over.
    pub dimensions: Vec<String>,
    /// Forecast values; `None` where the server has no data.
    pub data: Vec<Option<f64>>,
    /// One no-data reason code per entry in `data` (see [`NoDataReasons`]).
    #[serde(rename = "noData", default)]
    pub no_data: Vec<u32>,
}

/// The integer codes the server uses in `noData` arrays to explain missing
/// or invalid data points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct NoDataReasons {
    /// An internal server error prevented a value.
    pub error_internal: u32,
    /// The value was filled rather than computed.
    pub fill: u32,
    /// A gap in the source data.
    pub gap: u32,
    /// The data point is valid.
    pub good: u32,
    /// The value exceeded the valid range.
    pub invalid_high: u32,
    /// The value fell below the valid range.
    pub invalid_low: u32,
    /// The point is masked by ice.
    pub mask_ice: u32,
    /// The point is masked by land.
    pub mask_land: u32,
}

impl NoDataReasons {
    /// A human-readable label for a reason code, if it is one of the codes
    /// this response declared.
    #[must_use]
    pub fn label(&self, code: u32) -> Option<&'static str> {
        [
            (self.good, "good"),
            (self.gap, "gap"),
            (self.fill, "fill"),
            (self.mask_land, "mask_land"),
            (self.mask_ice, "mask_ice"),
            (self.invalid_high, "invalid_high"),
            (self.invalid_low, "invalid_low"),
            (self.error_internal, "error_internal"),
        ]
        .into_iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| name)
    }
}

/// The `point` dimension of a response: the coordinates data was returned
/// for, in request order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PointDimension {
    /// Dimension type as reported by the server (wire field `type`).
    #[serde(rename = "type")]
    pub kind: String,
    /// Units of the dimension values.
    pub units: String,
    /// The coordinates.
    pub data: Vec<Point>,
}
