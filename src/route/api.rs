use crate::core::client::{MetOceanClient, RequestOptions};
use crate::core::error::MetOceanError;
use crate::core::models::RoutePoint;
use crate::core::{conversions, net, validate};
use crate::route::model::{RouteDimensions, RouteResponse, TimepointDimension};
use crate::route::wire;
use crate::route::{RouteSpeedArgs, RouteTimeSeriesArgs};

pub(crate) async fn fetch_route_time_series(
    client: &MetOceanClient,
    args: &RouteTimeSeriesArgs,
    options: Option<&RequestOptions>,
) -> Result<RouteResponse, MetOceanError> {
    if client.validate_args() {
        let mut problems = Vec::new();
        validate::check_route(&mut problems, &args.route);
        validate::check_variables(&mut problems, &args.variables);
        validate::finish(problems)?;
    }

    let body = wire::RouteTimeBody::from_args(args);
    let envelope: wire::RouteEnvelope =
        net::post_json(client, client.base_route_time(), &body, options).await?;
    into_route(envelope)
}

pub(crate) async fn fetch_route_speed(
    client: &MetOceanClient,
    args: &RouteSpeedArgs,
    options: Option<&RequestOptions>,
) -> Result<RouteResponse, MetOceanError> {
    if client.validate_args() {
        let mut problems = Vec::new();
        validate::check_points(&mut problems, &args.points);
        validate::check_speeds(&mut problems, &args.speeds, &args.points);
        validate::check_variables(&mut problems, &args.variables);
        validate::finish(problems)?;
    }

    let body = wire::RouteSpeedBody::from_args(args);
    let envelope: wire::RouteEnvelope =
        net::post_json(client, client.base_route_speed(), &body, options).await?;
    into_route(envelope)
}

/// Converts the wire envelope into the public model, turning each
/// timepoint's `time` into a native timestamp and keeping lat/lon verbatim.
fn into_route(envelope: wire::RouteEnvelope) -> Result<RouteResponse, MetOceanError> {
    let timepoints = envelope
        .dimensions
        .timepoint
        .data
        .iter()
        .map(|tp| {
            Ok(RoutePoint {
                lat: tp.lat,
                lon: tp.lon,
                time: conversions::parse_utc(&tp.time)?,
            })
        })
        .collect::<Result<Vec<_>, MetOceanError>>()?;

    Ok(RouteResponse {
        dimensions: RouteDimensions {
            timepoint: TimepointDimension {
                kind: envelope.dimensions.timepoint.kind,
                units: envelope.dimensions.timepoint.units,
                data: timepoints,
            },
        },
        no_data_reasons: envelope.no_data_reasons,
        variables: envelope.variables,
    })
}
