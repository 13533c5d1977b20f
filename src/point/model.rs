use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::core::models::{NoDataReasons, PointDimension, VariableData};
use crate::variable::Variable;

/// Successful response from the point time-series endpoint, with the time
/// dimension already converted to native timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct PointTimeSeriesResponse {
    /// The point and time dimensions the data is laid out over.
    pub dimensions: PointTimeSeriesDimensions,
    /// Mapping of no-data reason names to the codes used in `noData` arrays.
    pub no_data_reasons: NoDataReasons,
    /// One payload per requested variable, keyed by variable.
    pub variables: HashMap<Variable, VariableData>,
}

/// Dimensions of a point time-series response.
#[derive(Debug, Clone, PartialEq)]
pub struct PointTimeSeriesDimensions {
    /// The coordinates data was retrieved for.
    pub point: PointDimension,
    /// The times data was retrieved for.
    pub time: TimeDimension,
}

/// The `time` dimension of a response, converted to [`DateTime`] values.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeDimension {
    /// Dimension type as reported by the server (wire field `type`).
    pub kind: String,
    /// Units of the dimension values.
    pub units: String,
    /// The timestamps.
    pub data: Vec<DateTime<Utc>>,
}

/// Successful response from the point snapshot endpoint.
///
/// This endpoint has no time dimension, so the wire shape decodes directly
/// with no timestamp conversion.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PointResponse {
    /// The point dimension the data is laid out over.
    pub dimensions: PointDimensions,
    /// Mapping of no-data reason names to the codes used in `noData` arrays.
    #[serde(rename = "noDataReasons")]
    pub no_data_reasons: NoDataReasons,
    /// One payload per requested variable, keyed by variable.
    pub variables: HashMap<Variable, VariableData>,
}

/// Dimensions of a point snapshot response: the point dimension only.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PointDimensions {
    /// The coordinates data was retrieved for.
    pub point: PointDimension,
}
