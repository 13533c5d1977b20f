use chrono::{TimeZone, Utc};
use httpmock::{Method::POST, MockServer};
use metocean_rs::{MetOceanError, Point, PointArgs, PointTimeSeriesArgs, TimeRange, Variable};
use serde_json::json;

use crate::common;

#[tokio::test]
async fn time_series_converts_time_dimension_to_datetimes() {
    let server = MockServer::start();

    let expected_body = json!({
        "points": [{"lat": -37.82, "lon": 174.89}],
        "times": ["2024-01-01T00:00:00Z"],
        "variables": ["cloud.cover"]
    });

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/point/time")
            .header("x-api-key", common::API_KEY)
            .header("content-type", "application/json")
            .json_body(expected_body);
        then.status(200)
            .header("content-type", "application/json")
            .json_body(common::point_time_series_envelope(
                &["2024-01-01T00:00:00Z"],
                &["cloud.cover"],
            ));
    });

    let client = common::test_client(&server);
    let args = PointTimeSeriesArgs {
        points: vec![Point { lat: -37.82, lon: 174.89 }],
        times: Some(vec![Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()]),
        variables: vec![Variable::CloudCover],
        ..Default::default()
    };
    let resp = client.get_point_time_series(&args, None).await.unwrap();

    mock.assert();

    assert_eq!(
        resp.dimensions.time.data,
        vec![Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()]
    );
    assert_eq!(resp.dimensions.point.data.len(), 1);

    let cloud = resp.variables.get(&Variable::CloudCover).expect("requested variable present");
    assert_eq!(cloud.data, vec![Some(12.5)]);
    assert_eq!(cloud.no_data, vec![resp.no_data_reasons.good]);
    assert_eq!(resp.no_data_reasons.label(resp.no_data_reasons.good), Some("good"));
}

#[tokio::test]
async fn time_range_encodes_interval_with_hour_suffix() {
    let server = MockServer::start();

    let expected_body = json!({
        "points": [{"lat": -37.82, "lon": 174.89}],
        "time": {"from": "2024-01-01T00:00:00Z", "interval": "6h", "repeat": 4},
        "variables": ["wave.height"]
    });

    let mock = server.mock(|when, then| {
        when.method(POST).path("/point/time").json_body(expected_body);
        then.status(200)
            .header("content-type", "application/json")
            .json_body(common::point_time_series_envelope(
                &[
                    "2024-01-01T00:00:00Z",
                    "2024-01-01T06:00:00Z",
                    "2024-01-01T12:00:00Z",
                    "2024-01-01T18:00:00Z",
                ],
                &["wave.height"],
            ));
    });

    let client = common::test_client(&server);
    let args = PointTimeSeriesArgs {
        points: vec![Point { lat: -37.82, lon: 174.89 }],
        time: Some(TimeRange {
            from: Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
            interval: Some(6),
            repeat: Some(4),
            ..Default::default()
        }),
        variables: vec![Variable::WaveHeight],
        ..Default::default()
    };
    let resp = client.get_point_time_series(&args, None).await.unwrap();

    mock.assert();
    assert_eq!(resp.dimensions.time.data.len(), 4);
    assert_eq!(
        resp.dimensions.time.data[1],
        Utc.with_ymd_and_hms(2024, 1, 1, 6, 0, 0).unwrap()
    );
}

#[tokio::test]
async fn snapshot_carries_no_time_dimension() {
    let server = MockServer::start();

    let expected_body = json!({
        "points": [{"lat": -37.82, "lon": 174.89}],
        "variables": ["sea.temperature.at-surface"]
    });

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/point")
            .header("x-api-key", common::API_KEY)
            .json_body(expected_body);
        then.status(200)
            .header("content-type", "application/json")
            .json_body(common::point_envelope(&["sea.temperature.at-surface"]));
    });

    let client = common::test_client(&server);
    let args = PointArgs {
        points: vec![Point { lat: -37.82, lon: 174.89 }],
        variables: vec![Variable::SeaTemperatureAtSurface],
    };
    let resp = client.get_point(&args, None).await.unwrap();

    mock.assert();
    assert_eq!(resp.dimensions.point.data, vec![Point { lat: -37.82, lon: 174.89 }]);
    let sst = resp.variables.get(&Variable::SeaTemperatureAtSurface).unwrap();
    assert_eq!(sst.data, vec![Some(12.5)]);
}

#[tokio::test]
async fn snapshot_is_idempotent_against_a_stable_backend() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(POST).path("/point");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(common::point_envelope(&["sea.temperature.at-surface"]));
    });

    let client = common::test_client(&server);
    let args = PointArgs {
        points: vec![Point { lat: -37.82, lon: 174.89 }],
        variables: vec![Variable::SeaTemperatureAtSurface],
    };
    let first = client.get_point(&args, None).await.unwrap();
    let second = client.get_point(&args, None).await.unwrap();

    assert_eq!(mock.hits(), 2);
    assert_eq!(first, second);
}

#[tokio::test]
async fn unauthorized_response_maps_to_unauthorized_error() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/point");
        then.status(401)
            .header("content-type", "application/json")
            .json_body(json!(["invalid api key"]));
    });

    let client = common::test_client(&server);
    let args = PointArgs {
        points: vec![Point { lat: -37.82, lon: 174.89 }],
        variables: vec![Variable::SeaTemperatureAtSurface],
    };
    let err = client.get_point(&args, None).await.unwrap_err();

    assert!(matches!(err, MetOceanError::Unauthorized { status: 401, .. }));
    assert_eq!(err.status_code(), Some(401));
    assert_eq!(err.error_list(), ["invalid api key".to_string()]);
}

#[tokio::test]
async fn empty_variables_fails_locally_without_a_network_call() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(POST).path("/point/time");
        then.status(200).json_body(json!({}));
    });

    let client = common::test_client(&server);
    let args = PointTimeSeriesArgs {
        points: vec![Point { lat: -37.82, lon: 174.89 }],
        times: Some(vec![Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()]),
        variables: vec![],
        ..Default::default()
    };
    let err = client.get_point_time_series(&args, None).await.unwrap_err();

    assert!(matches!(err, MetOceanError::InvalidArgument(_)));
    assert_eq!(mock.hits(), 0);
}

#[tokio::test]
async fn disabling_validation_sends_arguments_as_is() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/point/time")
            .json_body(json!({"points": [], "variables": []}));
        then.status(400)
            .header("content-type", "application/json")
            .json_body(json!(["no points given", "no variables given"]));
    });

    let client = metocean_rs::MetOceanClient::builder()
        .api_key(common::API_KEY)
        .validate_args(false)
        .base_point_time(url::Url::parse(&server.url("/point/time")).unwrap())
        .build()
        .unwrap();

    let err = client
        .get_point_time_series(&PointTimeSeriesArgs::default(), None)
        .await
        .unwrap_err();

    mock.assert();
    assert!(matches!(err, MetOceanError::Input { status: 400, .. }));
    assert_eq!(err.error_list().len(), 2);
}
