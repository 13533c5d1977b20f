//! metocean-rs: typed client for the MetOcean Solutions Point Forecast API.
//!
//! Covers the four Point Forecast endpoints: point time-series, point
//! snapshot, route time-series, and route-with-speed. Every call validates
//! its arguments locally (unless disabled), POSTs a JSON body, and returns a
//! decoded response with wire timestamps converted to [`chrono::DateTime`].
//!
//! ```no_run
//! use metocean_rs::{MetOceanClient, Point, PointTimeSeriesArgs, Variable};
//!
//! # async fn run() -> Result<(), metocean_rs::MetOceanError> {
//! let client = MetOceanClient::builder().api_key("your-api-key").build()?;
//!
//! let args = PointTimeSeriesArgs {
//!     points: vec![Point { lat: -37.82, lon: 174.89 }],
//!     times: Some(vec![chrono::Utc::now()]),
//!     variables: vec![Variable::AirTemperatureAt2m, Variable::CloudCover],
//!     ..Default::default()
//! };
//! let data = client.get_point_time_series(&args, None).await?;
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod point;
pub mod route;
pub mod variable;

pub use crate::core::client::{MetOceanClient, MetOceanClientBuilder, RequestOptions};
pub use crate::core::error::MetOceanError;
pub use crate::core::models::{
    NoDataReasons, Point, PointDimension, RoutePoint, TimeRange, VariableData,
};
pub use point::{
    PointArgs, PointDimensions, PointResponse, PointTimeSeriesArgs, PointTimeSeriesDimensions,
    PointTimeSeriesResponse, TimeDimension,
};
pub use route::{
    RouteDimensions, RouteResponse, RouteSpeedArgs, RouteTimeSeriesArgs, TimepointDimension,
};
pub use variable::Variable;
