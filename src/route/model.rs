use std::collections::HashMap;

use crate::core::models::{NoDataReasons, RoutePoint, VariableData};
use crate::variable::Variable;

/// Successful response from either route endpoint, with every timepoint's
/// `time` already converted to a native timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteResponse {
    /// The combined (lat, lon, time) dimension the data is laid out over.
    pub dimensions: RouteDimensions,
    /// Mapping of no-data reason names to the codes used in `noData` arrays.
    pub no_data_reasons: NoDataReasons,
    /// One payload per requested variable, keyed by variable.
    pub variables: HashMap<Variable, VariableData>,
}

/// Dimensions of a route response: one combined per-timepoint array instead
/// of the separate point/time arrays of the point endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteDimensions {
    /// The timepoints data was retrieved for.
    pub timepoint: TimepointDimension,
}

/// The `timepoint` dimension of a route response.
#[derive(Debug, Clone, PartialEq)]
pub struct TimepointDimension {
    /// Dimension type as reported by the server (wire field `type`).
    pub kind: String,
    /// Units of the dimension values.
    pub units: String,
    /// One (lat, lon, time) entry per timepoint along the route.
    pub data: Vec<RoutePoint>,
}
