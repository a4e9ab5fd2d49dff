//! Transport layer: one GET per call, JSON body, failure mapping.

use crate::{Error, Json, Result};
use tracing::{debug, warn};

// XXX: the sites serve html captcha pages to clients without a User-Agent.
const USER_AGENT: &str = concat!("booru-api/", env!("CARGO_PKG_VERSION"));

pub(crate) fn create_client() -> reqwest::Client {
    reqwest::Client::new()
}

/// Issues the GET and parses the body as JSON, with no schema validation.
/// Connection errors, error statuses and malformed bodies all surface as
/// [`Error::RequestFailed`].
pub(crate) async fn fetch_json(http: &reqwest::Client, url: &str) -> Result<Json> {
    debug!(%url, "sending API request");

    let parsed = url::Url::parse(url)
        .map_err(|err| Error::request_failed(format!("invalid request URL: {err}"), None, url))?;

    let response = http
        .get(parsed)
        .header(reqwest::header::USER_AGENT, USER_AGENT)
        .send()
        .await
        .map_err(|err| {
            Error::request_failed(
                err.to_string(),
                err.status().map(|status| status.as_u16()),
                url,
            )
        })?;

    let status = response.status();
    if !status.is_success() {
        warn!(%url, %status, "API request returned an error status");
        return Err(Error::request_failed(
            "request returned an error status",
            Some(status.as_u16()),
            url,
        ));
    }

    let body = response
        .text()
        .await
        .map_err(|err| Error::request_failed(err.to_string(), Some(status.as_u16()), url))?;

    serde_json::from_str(&body).map_err(|err| {
        Error::request_failed(
            format!("malformed JSON payload: {err}"),
            Some(status.as_u16()),
            url,
        )
    })
}
