//! Local argument validation.
//!
//! Each check appends every violation it can cheaply detect to a shared
//! list, so a caller that got both latitude and longitude wrong hears about
//! both at once. Checks run before any network call; a non-empty list turns
//! into a single [`MetOceanError::InvalidArgument`].

use chrono::{DateTime, Utc};

use crate::core::error::MetOceanError;
use crate::core::models::{Point, RoutePoint, TimeRange};
use crate::variable::Variable;

pub(crate) fn check_points(problems: &mut Vec<String>, points: &[Point]) {
    if points.is_empty() {
        problems.push(
            "'points' must contain at least one coordinate, \
             e.g. points: [Point { lat: -37.82, lon: 174.89 }]"
                .to_string(),
        );
    }
    for (i, p) in points.iter().enumerate() {
        check_coordinate(problems, &format!("points[{i}]"), p.lat, p.lon);
    }
}

pub(crate) fn check_route(problems: &mut Vec<String>, route: &[RoutePoint]) {
    if route.is_empty() {
        problems.push("'route' must contain at least one waypoint".to_string());
    }
    for (i, p) in route.iter().enumerate() {
        check_coordinate(problems, &format!("route[{i}]"), p.lat, p.lon);
    }
}

fn check_coordinate(problems: &mut Vec<String>, at: &str, lat: f64, lon: f64) {
    if !(lat.is_finite() && (-90.0..=90.0).contains(&lat)) {
        problems.push(format!(
            "{at}: latitude {lat} is invalid (latitudes must be between -90 and 90)"
        ));
    }
    if !(lon.is_finite() && (-180.0..=180.0).contains(&lon)) {
        problems.push(format!(
            "{at}: longitude {lon} is invalid (longitudes must be between -180 and 180)"
        ));
    }
}

/// Enforces the exactly-one-of rule on `time`/`times` plus the internal
/// rules of each: a range needs one of `from`/`to` and cannot combine
/// `repeat` with `to`; an explicit list must be non-empty.
pub(crate) fn check_time_spec(
    problems: &mut Vec<String>,
    time: Option<&TimeRange>,
    times: Option<&[DateTime<Utc>]>,
) {
    match (time, times) {
        (Some(_), Some(_)) => problems.push(
            "both 'time' and 'times' were given, but only one of the two can be; \
             remove one"
                .to_string(),
        ),
        (None, None) => {
            problems.push("neither 'time' nor 'times' was given; include one".to_string());
        }
        (Some(range), None) => {
            if range.repeat.is_some() && range.to.is_some() {
                problems.push(
                    "both 'repeat' and 'to' were given in 'time', but only one of the \
                     two can be; remove one"
                        .to_string(),
                );
            }
            if range.from.is_none() && range.to.is_none() {
                problems.push(
                    "at least one of 'from' and 'to' is required in 'time'".to_string(),
                );
            }
        }
        (None, Some(list)) => {
            if list.is_empty() {
                problems.push("'times' must contain at least one timestamp".to_string());
            }
        }
    }
}

pub(crate) fn check_variables(problems: &mut Vec<String>, variables: &[Variable]) {
    if variables.is_empty() {
        problems.push(
            "'variables' must contain at least one forecast variable, \
             e.g. [Variable::WaveHeight]"
                .to_string(),
        );
    }
    for (i, v) in variables.iter().enumerate() {
        if v.as_str().is_empty() {
            problems.push(format!("variables[{i}]: variable name is empty"));
        }
    }
}

/// One speed per leg between consecutive route points.
pub(crate) fn check_speeds(problems: &mut Vec<String>, speeds: &[f64], points: &[Point]) {
    if speeds.is_empty() {
        problems.push("'speeds' must contain at least one speed".to_string());
    }
    for (i, s) in speeds.iter().enumerate() {
        if !(s.is_finite() && *s > 0.0) {
            problems.push(format!("speeds[{i}]: speed {s} must be a positive number"));
        }
    }
    if !points.is_empty() && !speeds.is_empty() && speeds.len() != points.len() - 1 {
        problems.push(format!(
            "'speeds' must have one entry per leg of the route \
             (got {} speeds for {} points; expected {})",
            speeds.len(),
            points.len(),
            points.len() - 1,
        ));
    }
}

pub(crate) fn finish(problems: Vec<String>) -> Result<(), MetOceanError> {
    if problems.is_empty() {
        Ok(())
    } else {
        Err(MetOceanError::InvalidArgument(problems))
    }
}
