use chrono::{TimeZone, Utc};
use httpmock::{Method::POST, MockServer};
use metocean_rs::{MetOceanError, Point, PointArgs, PointTimeSeriesArgs, TimeRange, Variable};

use crate::common;

/// Runs a point time-series call against a mock that must never be hit, and
/// returns the collected violation messages.
async fn expect_violations(args: PointTimeSeriesArgs) -> Vec<String> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/point/time");
        then.status(200);
    });

    let client = common::test_client(&server);
    let err = client.get_point_time_series(&args, None).await.unwrap_err();

    assert_eq!(mock.hits(), 0, "validation failure must not reach the network");
    match err {
        MetOceanError::InvalidArgument(problems) => problems,
        other => panic!("expected InvalidArgument, got {other:?}"),
    }
}

fn valid_args() -> PointTimeSeriesArgs {
    PointTimeSeriesArgs {
        points: vec![Point { lat: -37.82, lon: 174.89 }],
        times: Some(vec![Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()]),
        variables: vec![Variable::CloudCover],
        ..Default::default()
    }
}

#[tokio::test]
async fn out_of_range_latitude_and_longitude_are_both_named() {
    let problems = expect_violations(PointTimeSeriesArgs {
        points: vec![Point { lat: 95.0, lon: -200.0 }],
        ..valid_args()
    })
    .await;

    assert_eq!(problems.len(), 2);
    assert!(problems[0].contains("latitude 95"));
    assert!(problems[1].contains("longitude -200"));
}

#[tokio::test]
async fn time_and_times_together_are_rejected() {
    let problems = expect_violations(PointTimeSeriesArgs {
        time: Some(TimeRange {
            from: Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
            ..Default::default()
        }),
        ..valid_args()
    })
    .await;

    assert_eq!(problems.len(), 1);
    assert!(problems[0].contains("'time'"));
    assert!(problems[0].contains("'times'"));
}

#[tokio::test]
async fn missing_time_and_times_is_rejected() {
    let problems = expect_violations(PointTimeSeriesArgs {
        times: None,
        ..valid_args()
    })
    .await;

    assert_eq!(problems.len(), 1);
    assert!(problems[0].contains("neither"));
}

#[tokio::test]
async fn repeat_and_to_together_are_rejected() {
    let problems = expect_violations(PointTimeSeriesArgs {
        time: Some(TimeRange {
            from: Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
            to: Some(Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap()),
            repeat: Some(3),
            ..Default::default()
        }),
        times: None,
        ..valid_args()
    })
    .await;

    assert_eq!(problems.len(), 1);
    assert!(problems[0].contains("'repeat'"));
    assert!(problems[0].contains("'to'"));
}

#[tokio::test]
async fn range_without_from_or_to_is_rejected() {
    let problems = expect_violations(PointTimeSeriesArgs {
        time: Some(TimeRange { repeat: Some(3), interval: Some(3), ..Default::default() }),
        times: None,
        ..valid_args()
    })
    .await;

    assert_eq!(problems.len(), 1);
    assert!(problems[0].contains("'from'"));
}

#[tokio::test]
async fn empty_times_list_is_rejected() {
    let problems = expect_violations(PointTimeSeriesArgs {
        times: Some(vec![]),
        ..valid_args()
    })
    .await;

    assert_eq!(problems.len(), 1);
    assert!(problems[0].contains("'times'"));
}

#[tokio::test]
async fn all_violations_are_reported_at_once() {
    let problems = expect_violations(PointTimeSeriesArgs {
        points: vec![],
        time: None,
        times: None,
        variables: vec![],
    })
    .await;

    // empty points, missing time spec, empty variables
    assert_eq!(problems.len(), 3);
}

#[tokio::test]
async fn snapshot_validation_covers_points_and_variables() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/point");
        then.status(200);
    });

    let client = common::test_client(&server);
    let err = client
        .get_point(&PointArgs { points: vec![], variables: vec![] }, None)
        .await
        .unwrap_err();

    assert_eq!(mock.hits(), 0);
    assert_eq!(err.error_list().len(), 2);
}
