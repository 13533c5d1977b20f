//! Public client surface + builder.

pub(crate) mod constants;

use std::time::Duration;

use reqwest::Client;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use url::Url;

use crate::core::MetOceanError;
use crate::point::{
    self, PointArgs, PointResponse, PointTimeSeriesArgs, PointTimeSeriesResponse,
};
use crate::route::{self, RouteResponse, RouteSpeedArgs, RouteTimeSeriesArgs};
use constants::{
    API_KEY_HEADER, DEFAULT_BASE_POINT, DEFAULT_BASE_POINT_TIME, DEFAULT_BASE_ROUTE_SPEED,
    DEFAULT_BASE_ROUTE_TIME, USER_AGENT,
};

/// Per-call request options.
///
/// These are merged into the dispatched request; the method, headers, and
/// body stay owned by the client and cannot be overridden here.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Overrides the client-wide timeout for this call only.
    pub timeout: Option<Duration>,
}

/// Client for the MetOcean Point Forecast API.
///
/// Holds the credential headers and endpoint configuration; it keeps no
/// per-call state, so a single instance can serve concurrent calls and is
/// cheap to clone.
#[derive(Debug, Clone)]
pub struct MetOceanClient {
    http: Client,
    validate_args: bool,
    base_point_time: Url,
    base_point: Url,
    base_route_time: Url,
    base_route_speed: Url,
}

impl MetOceanClient {
    /// Create a new builder.
    pub fn builder() -> MetOceanClientBuilder {
        MetOceanClientBuilder::default()
    }

    /* -------- internal getters used by the api modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn validate_args(&self) -> bool {
        self.validate_args
    }
    pub(crate) fn base_point_time(&self) -> &Url {
        &self.base_point_time
    }
    pub(crate) fn base_point(&self) -> &Url {
        &self.base_point
    }
    pub(crate) fn base_route_time(&self) -> &Url {
        &self.base_route_time
    }
    pub(crate) fn base_route_speed(&self) -> &Url {
        &self.base_route_speed
    }

    /// Retrieves time-series forecast data for one or more points.
    ///
    /// Exactly one of `args.time` (a range) and `args.times` (an explicit
    /// list) must be given. Response timestamps in `dimensions.time.data`
    /// are returned as native [`chrono::DateTime`] values.
    ///
    /// # Errors
    /// [`MetOceanError::InvalidArgument`] on bad arguments (when validation
    /// is enabled), one of the remote variants on a non-200 status, or
    /// [`MetOceanError::Http`] on transport failure.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self, args, options), err)
    )]
    pub async fn get_point_time_series(
        &self,
        args: &PointTimeSeriesArgs,
        options: Option<&RequestOptions>,
    ) -> Result<PointTimeSeriesResponse, MetOceanError> {
        point::api::fetch_point_time_series(self, args, options).await
    }

    /// Retrieves non-time-series forecast data for one or more points.
    ///
    /// This endpoint takes no time parameter and its response carries no
    /// time dimension, so no timestamp conversion happens.
    ///
    /// # Errors
    /// Same taxonomy as [`get_point_time_series`](Self::get_point_time_series).
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self, args, options), err)
    )]
    pub async fn get_point(
        &self,
        args: &PointArgs,
        options: Option<&RequestOptions>,
    ) -> Result<PointResponse, MetOceanError> {
        point::api::fetch_point(self, args, options).await
    }

    /// Retrieves forecast data along a route of explicitly timestamped
    /// waypoints.
    ///
    /// The `time` of every entry in `dimensions.timepoint.data` is returned
    /// as a native [`chrono::DateTime`]; lat/lon pass through verbatim.
    ///
    /// # Errors
    /// Same taxonomy as [`get_point_time_series`](Self::get_point_time_series).
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self, args, options), err)
    )]
    pub async fn get_route_time_series(
        &self,
        args: &RouteTimeSeriesArgs,
        options: Option<&RequestOptions>,
    ) -> Result<RouteResponse, MetOceanError> {
        route::api::fetch_route_time_series(self, args, options).await
    }

    /// Retrieves forecast data along a route whose waypoint times are
    /// derived from a start time and per-leg speeds.
    ///
    /// `args.speeds` must hold one speed per leg, i.e.
    /// `speeds.len() == points.len() - 1`.
    ///
    /// # Errors
    /// Same taxonomy as [`get_point_time_series`](Self::get_point_time_series).
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self, args, options), err)
    )]
    pub async fn get_route_speed(
        &self,
        args: &RouteSpeedArgs,
        options: Option<&RequestOptions>,
    ) -> Result<RouteResponse, MetOceanError> {
        route::api::fetch_route_speed(self, args, options).await
    }
}

/* ----------------------- Builder ----------------------- */

/// Builder for [`MetOceanClient`]. An API key is required.
#[derive(Debug, Default)]
pub struct MetOceanClientBuilder {
    api_key: Option<String>,
    validate_args: Option<bool>,
    user_agent: Option<String>,
    base_point_time: Option<Url>,
    base_point: Option<Url>,
    base_route_time: Option<Url>,
    base_route_speed: Option<Url>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl MetOceanClientBuilder {
    /// The API key sent as the `x-api-key` header on every request.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Enable or disable local argument validation. Default: enabled.
    ///
    /// With validation disabled, arguments go to the server as-is and bad
    /// input surfaces as a remote [`MetOceanError::Input`] instead.
    pub fn validate_args(mut self, validate: bool) -> Self {
        self.validate_args = Some(validate);
        self
    }

    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the point time-series endpoint.
    pub fn base_point_time(mut self, url: Url) -> Self {
        self.base_point_time = Some(url);
        self
    }

    /// Override the point snapshot endpoint.
    pub fn base_point(mut self, url: Url) -> Self {
        self.base_point = Some(url);
        self
    }

    /// Override the route time-series endpoint.
    pub fn base_route_time(mut self, url: Url) -> Self {
        self.base_route_time = Some(url);
        self
    }

    /// Override the route speed endpoint.
    pub fn base_route_speed(mut self, url: Url) -> Self {
        self.base_route_speed = Some(url);
        self
    }

    /// Set a global request timeout. Default: none.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    /// [`MetOceanError::InvalidArgument`] if the API key is missing, empty,
    /// or not a valid header value; [`MetOceanError::Url`] if a default
    /// endpoint fails to parse; [`MetOceanError::Http`] if the underlying
    /// HTTP client cannot be constructed.
    pub fn build(self) -> Result<MetOceanClient, MetOceanError> {
        let api_key = self.api_key.unwrap_or_default();
        if api_key.trim().is_empty() {
            return Err(MetOceanError::InvalidArgument(vec![
                "'api_key' must be a non-empty string".to_string(),
            ]));
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let key_value = HeaderValue::from_str(&api_key).map_err(|_| {
            MetOceanError::InvalidArgument(vec![
                "'api_key' contains characters that are not valid in an HTTP header".to_string(),
            ])
        })?;
        headers.insert(API_KEY_HEADER, key_value);

        let mut httpb = Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .default_headers(headers);
        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }
        let http = httpb.build()?;

        let base_point_time = match self.base_point_time {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_POINT_TIME)?,
        };
        let base_point = match self.base_point {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_POINT)?,
        };
        let base_route_time = match self.base_route_time {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_ROUTE_TIME)?,
        };
        let base_route_speed = match self.base_route_speed {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_ROUTE_SPEED)?,
        };

        Ok(MetOceanClient {
            http,
            validate_args: self.validate_args.unwrap_or(true),
            base_point_time,
            base_point,
            base_route_time,
            base_route_speed,
        })
    }
}
