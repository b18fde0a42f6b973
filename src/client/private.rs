use async_trait::async_trait;
use log::{debug, trace, warn};
use reqwest::{Method, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

pub trait Sealed {}

/// Every backend client implements this trait.
pub trait BuildHttpRequest: Sealed {
    /// Resolves an endpoint path relative to the backend's base URL.
    fn endpoint_url(&self, path: &str) -> Result<Url>;

    /// Returns a new [RequestBuilder](reqwest::RequestBuilder) with any common information (e.g. the user agent)
    /// filled in. You probably shouldn't call this function directly; instead use
    /// [send_http_request](crate::client::private::SendHttpRequest::send_http_request).
    fn build_http_request(&self, method: Method, url: Url) -> RequestBuilder;
}

/// Every backend client implements this trait.
#[async_trait]
pub trait SendHttpRequest: BuildHttpRequest {
    /// Sends a request built with [build_http_request](BuildHttpRequest::build_http_request). Any response that isn't
    /// 2xx is turned into [UnsuccessfulResponse](crate::Error::UnsuccessfulResponse) carrying the response body.
    async fn send_http_request(&self, request: RequestBuilder) -> Result<Response>;
}

#[async_trait]
impl<C> SendHttpRequest for C
where
    C: BuildHttpRequest + Sync,
{
    async fn send_http_request(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.send().await?;
        debug!("Response from {}: {}", response.url(), response.status());

        into_successful_response(response).await
    }
}

async fn into_successful_response(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    // a body that can't be read is still an unsuccessful response, just without a description
    let body = response.text().await.unwrap_or_default();
    warn!("Unsuccessful backend response {}: {}", status, body);

    Err(unsuccessful_response(status, body))
}

pub(crate) fn unsuccessful_response(status: StatusCode, body: String) -> Error {
    Error::UnsuccessfulResponse {
        status: status.as_u16(),
        body,
    }
}

/// Reads a response body as JSON. The body is read as text first so malformed JSON surfaces as
/// [JsonError](crate::Error::JsonError) instead of a generic HTTP error.
pub(crate) async fn read_json<T>(response: Response) -> Result<T>
where
    T: DeserializeOwned,
{
    let body = response.text().await?;
    trace!("Response body: {body}");

    Ok(serde_json::from_str(&body)?)
}
