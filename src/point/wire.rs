use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::core::conversions;
use crate::core::models::{NoDataReasons, Point, PointDimension, VariableData};
use crate::point::{PointArgs, PointTimeSeriesArgs};
use crate::variable::Variable;

/* -------- request bodies -------- */

#[derive(Serialize)]
pub(crate) struct TimeSeriesBody<'a> {
    points: &'a [Point],
    #[serde(skip_serializing_if = "Option::is_none")]
    time: Option<TimeBody>,
    #[serde(skip_serializing_if = "Option::is_none")]
    times: Option<Vec<String>>,
    variables: &'a [Variable],
}

/// Wire shape of a time range: timestamps as RFC 3339 strings, the interval
/// with an hour suffix (`6` becomes `"6h"`).
#[derive(Serialize)]
pub(crate) struct TimeBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    interval: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    repeat: Option<u32>,
}

impl<'a> TimeSeriesBody<'a> {
    pub(crate) fn from_args(args: &'a PointTimeSeriesArgs) -> Self {
        Self {
            points: &args.points,
            time: args.time.as_ref().map(|t| TimeBody {
                from: t.from.as_ref().map(conversions::format_utc),
                to: t.to.as_ref().map(conversions::format_utc),
                interval: t.interval.map(|h| format!("{h}h")),
                repeat: t.repeat,
            }),
            times: args
                .times
                .as_ref()
                .map(|ts| ts.iter().map(conversions::format_utc).collect()),
            variables: &args.variables,
        }
    }
}

#[derive(Serialize)]
pub(crate) struct PointBody<'a> {
    points: &'a [Point],
    variables: &'a [Variable],
}

impl<'a> PointBody<'a> {
    pub(crate) fn from_args(args: &'a PointArgs) -> Self {
        Self {
            points: &args.points,
            variables: &args.variables,
        }
    }
}

/* -------- response envelope (time dimension still as strings) -------- */

#[derive(Deserialize)]
pub(crate) struct TimeSeriesEnvelope {
    pub(crate) dimensions: TimeSeriesDimensions,
    #[serde(rename = "noDataReasons")]
    pub(crate) no_data_reasons: NoDataReasons,
    pub(crate) variables: HashMap<Variable, VariableData>,
}

#[derive(Deserialize)]
pub(crate) struct TimeSeriesDimensions {
    pub(crate) point: PointDimension,
    pub(crate) time: RawTimeDimension,
}

#[derive(Deserialize)]
pub(crate) struct RawTimeDimension {
    #[serde(rename = "type")]
    pub(crate) kind: String,
    pub(crate) units: String,
    pub(crate) data: Vec<String>,
}
