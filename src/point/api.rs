use crate::core::client::{MetOceanClient, RequestOptions};
use crate::core::error::MetOceanError;
use crate::core::{conversions, net, validate};
use crate::point::model::{
    PointResponse, PointTimeSeriesDimensions, PointTimeSeriesResponse, TimeDimension,
};
use crate::point::wire;
use crate::point::{PointArgs, PointTimeSeriesArgs};

pub(crate) async fn fetch_point_time_series(
    client: &MetOceanClient,
    args: &PointTimeSeriesArgs,
    options: Option<&RequestOptions>,
) -> Result<PointTimeSeriesResponse, MetOceanError> {
    if client.validate_args() {
        let mut problems = Vec::new();
        validate::check_points(&mut problems, &args.points);
        validate::check_time_spec(&mut problems, args.time.as_ref(), args.times.as_deref());
        validate::check_variables(&mut problems, &args.variables);
        validate::finish(problems)?;
    }

    let body = wire::TimeSeriesBody::from_args(args);
    let envelope: wire::TimeSeriesEnvelope =
        net::post_json(client, client.base_point_time(), &body, options).await?;
    into_time_series(envelope)
}

pub(crate) async fn fetch_point(
    client: &MetOceanClient,
    args: &PointArgs,
    options: Option<&RequestOptions>,
) -> Result<PointResponse, MetOceanError> {
    if client.validate_args() {
        let mut problems = Vec::new();
        validate::check_points(&mut problems, &args.points);
        validate::check_variables(&mut problems, &args.variables);
        validate::finish(problems)?;
    }

    let body = wire::PointBody::from_args(args);
    net::post_json(client, client.base_point(), &body, options).await
}

/// Converts the wire envelope into the public model, turning every entry of
/// the time dimension into a native timestamp.
fn into_time_series(
    envelope: wire::TimeSeriesEnvelope,
) -> Result<PointTimeSeriesResponse, MetOceanError> {
    let time_data = envelope
        .dimensions
        .time
        .data
        .iter()
        .map(|s| conversions::parse_utc(s))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(PointTimeSeriesResponse {
        dimensions: PointTimeSeriesDimensions {
            point: envelope.dimensions.point,
            time: TimeDimension {
                kind: envelope.dimensions.time.kind,
                units: envelope.dimensions.time.units,
                data: time_data,
            },
        },
        no_data_reasons: envelope.no_data_reasons,
        variables: envelope.variables,
    })
}
