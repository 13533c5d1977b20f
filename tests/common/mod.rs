use httpmock::MockServer;
use metocean_rs::MetOceanClient;
use serde_json::{Value, json};
use url::Url;

pub const API_KEY: &str = "test-api-key";

/// A client whose four endpoints all point at the mock server, under the
/// same paths the real service uses.
pub fn test_client(server: &MockServer) -> MetOceanClient {
    MetOceanClient::builder()
        .api_key(API_KEY)
        .base_point_time(Url::parse(&server.url("/point/time")).unwrap())
        .base_point(Url::parse(&server.url("/point")).unwrap())
        .base_route_time(Url::parse(&server.url("/route/time")).unwrap())
        .base_route_speed(Url::parse(&server.url("/route/speed")).unwrap())
        .build()
        .unwrap()
}

pub fn no_data_reasons() -> Value {
    json!({
        "ERROR_INTERNAL": 6,
        "FILL": 2,
        "GAP": 1,
        "GOOD": 0,
        "INVALID_HIGH": 4,
        "INVALID_LOW": 5,
        "MASK_ICE": 8,
        "MASK_LAND": 7
    })
}

fn variable_payload(name: &str, data: Value, no_data: Value) -> Value {
    json!({
        "standardName": name,
        "units": "m",
        "siUnits": "m",
        "dimensions": ["time", "point"],
        "data": data,
        "noData": no_data
    })
}

/// A point time-series envelope with one point, the given time strings, and
/// one value per time for each named variable.
pub fn point_time_series_envelope(times: &[&str], variables: &[&str]) -> Value {
    let data: Vec<Value> = times.iter().map(|_| json!(12.5)).collect();
    let no_data: Vec<Value> = times.iter().map(|_| json!(0)).collect();
    let vars: Value = variables
        .iter()
        .map(|v| {
            (
                v.to_string(),
                variable_payload(v, json!(data.clone()), json!(no_data.clone())),
            )
        })
        .collect::<serde_json::Map<_, _>>()
        .into();
    json!({
        "dimensions": {
            "point": {
                "type": "points",
                "units": "degrees_north,degrees_east",
                "data": [{"lat": -37.82, "lon": 174.89}]
            },
            "time": {
                "type": "time",
                "units": "ISO8601 datetime",
                "data": times
            }
        },
        "noDataReasons": no_data_reasons(),
        "variables": vars
    })
}

/// A point snapshot envelope: point dimension only, no time.
pub fn point_envelope(variables: &[&str]) -> Value {
    let vars: Value = variables
        .iter()
        .map(|v| (v.to_string(), variable_payload(v, json!([12.5]), json!([0]))))
        .collect::<serde_json::Map<_, _>>()
        .into();
    json!({
        "dimensions": {
            "point": {
                "type": "points",
                "units": "degrees_north,degrees_east",
                "data": [{"lat": -37.82, "lon": 174.89}]
            }
        },
        "noDataReasons": no_data_reasons(),
        "variables": vars
    })
}

/// A route envelope with one combined (lat, lon, time) timepoint dimension.
pub fn route_envelope(timepoints: &[(f64, f64, &str)], variables: &[&str]) -> Value {
    let data: Vec<Value> = timepoints
        .iter()
        .map(|(lat, lon, time)| json!({"lat": lat, "lon": lon, "time": time}))
        .collect();
    let values: Vec<Value> = timepoints.iter().map(|_| json!(2.1)).collect();
    let no_data: Vec<Value> = timepoints.iter().map(|_| json!(0)).collect();
    let vars: Value = variables
        .iter()
        .map(|v| {
            (
                v.to_string(),
                variable_payload(v, json!(values.clone()), json!(no_data.clone())),
            )
        })
        .collect::<serde_json::Map<_, _>>()
        .into();
    json!({
        "dimensions": {
            "timepoint": {
                "type": "timepoints",
                "units": "degrees_north,degrees_east,ISO8601 datetime",
                "data": data
            }
        },
        "noDataReasons": no_data_reasons(),
        "variables": vars
    })
}
