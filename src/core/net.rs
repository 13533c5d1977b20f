//! Shared request dispatch: one POST per call, status-mapped to the error
//! taxonomy, body decoded into the caller's wire type.

use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::core::client::{MetOceanClient, RequestOptions};
use crate::core::error::MetOceanError;

/// POSTs `body` as JSON and decodes a 200 response into `T`.
///
/// The client's default headers carry the content type and credential;
/// `options` can only adjust transport knobs (currently the timeout), never
/// the method, headers, or body. Non-200 statuses map into the remote error
/// taxonomy with the server's error-message list attached; reqwest errors
/// propagate untouched.
pub(crate) async fn post_json<B, T>(
    client: &MetOceanClient,
    url: &Url,
    body: &B,
    options: Option<&RequestOptions>,
) -> Result<T, MetOceanError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let mut req = client.http().post(url.clone()).json(body);
    if let Some(timeout) = options.and_then(|o| o.timeout) {
        req = req.timeout(timeout);
    }

    let resp = req.send().await?;
    let status = resp.status().as_u16();
    let text = resp.text().await?;

    if status != 200 {
        return Err(MetOceanError::from_status(status, &text));
    }

    serde_json::from_str::<T>(&text).map_err(MetOceanError::Json)
}
