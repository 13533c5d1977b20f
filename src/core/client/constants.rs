//! Centralized constants for default endpoints and headers.

/// Point Forecast time-series endpoint.
pub(crate) const DEFAULT_BASE_POINT_TIME: &str = "https://forecast-v2.metoceanapi.com/point/time";

/// Point Forecast snapshot (non-time-series) endpoint.
pub(crate) const DEFAULT_BASE_POINT: &str = "https://forecast-v2.metoceanapi.com/point";

/// Route time-series endpoint (explicitly timestamped waypoints).
pub(crate) const DEFAULT_BASE_ROUTE_TIME: &str = "https://forecast-v2.metoceanapi.com/route/time";

/// Route speed endpoint (waypoint times derived from start + per-leg speeds).
pub(crate) const DEFAULT_BASE_ROUTE_SPEED: &str = "https://forecast-v2.metoceanapi.com/route/speed";

/// Credential header carried on every request.
pub(crate) const API_KEY_HEADER: &str = "x-api-key";

/// Default User-Agent.
pub(crate) const USER_AGENT: &str = concat!("metocean-rs/", env!("CARGO_PKG_VERSION"));
