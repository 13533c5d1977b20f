//! Point endpoints: time-series and snapshot forecasts for fixed
//! coordinates.

pub(crate) mod api;
mod model;
mod wire;

pub use model::{
    PointDimensions, PointResponse, PointTimeSeriesDimensions, PointTimeSeriesResponse,
    TimeDimension,
};

use chrono::{DateTime, Utc};

use crate::core::models::{Point, TimeRange};
use crate::variable::Variable;

/// Arguments for the point time-series endpoint.
///
/// Give exactly one of `time` (a range descriptor) and `times` (an explicit
/// list of timestamps). Both are optional at the type level because the
/// constraint is enforced by runtime validation, which also reports every
/// other violation it finds in one error.
#[derive(Debug, Clone, Default)]
pub struct PointTimeSeriesArgs {
    /// Coordinates to get data for.
    pub points: Vec<Point>,
    /// A time range to retrieve data over. Mutually exclusive with `times`.
    pub time: Option<TimeRange>,
    /// Explicit timestamps to retrieve data for. Mutually exclusive with
    /// `time`.
    pub times: Option<Vec<DateTime<Utc>>>,
    /// Forecast variables to retrieve.
    pub variables: Vec<Variable>,
}

/// Arguments for the point snapshot (non-time-series) endpoint.
#[derive(Debug, Clone, Default)]
pub struct PointArgs {
    /// Coordinates to get data for.
    pub points: Vec<Point>,
    /// Forecast variables to retrieve.
    pub variables: Vec<Variable>,
}
