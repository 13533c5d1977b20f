use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::core::conversions;
use crate::core::models::{NoDataReasons, Point, VariableData};
use crate::route::{RouteSpeedArgs, RouteTimeSeriesArgs};
use crate::variable::Variable;

/* -------- request bodies -------- */

#[derive(Serialize)]
pub(crate) struct RouteTimeBody<'a> {
    route: Vec<RawRoutePoint>,
    variables: &'a [Variable],
}

#[derive(Serialize)]
pub(crate) struct RawRoutePoint {
    lat: f64,
    lon: f64,
    time: String,
}

impl<'a> RouteTimeBody<'a> {
    pub(crate) fn from_args(args: &'a RouteTimeSeriesArgs) -> Self {
        Self {
            route: args
                .route
                .iter()
                .map(|p| RawRoutePoint {
                    lat: p.lat,
                    lon: p.lon,
                    time: conversions::format_utc(&p.time),
                })
                .collect(),
            variables: &args.variables,
        }
    }
}

#[derive(Serialize)]
pub(crate) struct RouteSpeedBody<'a> {
    start: String,
    speeds: &'a [f64],
    points: &'a [Point],
    variables: &'a [Variable],
}

impl<'a> RouteSpeedBody<'a> {
    pub(crate) fn from_args(args: &'a RouteSpeedArgs) -> Self {
        Self {
            start: conversions::format_utc(&args.start),
            speeds: &args.speeds,
            points: &args.points,
            variables: &args.variables,
        }
    }
}

/* -------- response envelope (timepoint times still as strings) -------- */

#[derive(Deserialize)]
pub(crate) struct RouteEnvelope {
    pub(crate) dimensions: RawRouteDimensions,
    #[serde(rename = "noDataReasons")]
    pub(crate) no_data_reasons: NoDataReasons,
    pub(crate) variables: HashMap<Variable, VariableData>,
}

#[derive(Deserialize)]
pub(crate) struct RawRouteDimensions {
    pub(crate) timepoint: RawTimepointDimension,
}

#[derive(Deserialize)]
pub(crate) struct RawTimepointDimension {
    #[serde(rename = "type")]
    pub(crate) kind: String,
    pub(crate) units: String,
    pub(crate) data: Vec<RawTimepoint>,
}

#[derive(Deserialize)]
pub(crate) struct RawTimepoint {
    pub(crate) lat: f64,
    pub(crate) lon: f64,
    pub(crate) time: String,
}
