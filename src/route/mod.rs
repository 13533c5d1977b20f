//! Route endpoints: forecasts along a vessel's planned track, with waypoint
//! times given explicitly or derived from a start time and per-leg speeds.

pub(crate) mod api;
mod model;
mod wire;

pub use model::{RouteDimensions, RouteResponse, TimepointDimension};

use chrono::{DateTime, Utc};

use crate::core::models::{Point, RoutePoint};
use crate::variable::Variable;

/// Arguments for the route time-series endpoint: every waypoint carries its
/// own timestamp.
#[derive(Debug, Clone, Default)]
pub struct RouteTimeSeriesArgs {
    /// Ordered, timestamped waypoints of the route.
    pub route: Vec<RoutePoint>,
    /// Forecast variables to retrieve.
    pub variables: Vec<Variable>,
}

/// Arguments for the route speed endpoint: waypoint times are derived by the
/// server from `start` and the speed sailed on each leg.
#[derive(Debug, Clone)]
pub struct RouteSpeedArgs {
    /// Departure time from the first point.
    pub start: DateTime<Utc>,
    /// Speed per leg, in knots; must hold `points.len() - 1` entries.
    pub speeds: Vec<f64>,
    /// Ordered waypoints of the route.
    pub points: Vec<Point>,
    /// Forecast variables to retrieve.
    pub variables: Vec<Variable>,
}
