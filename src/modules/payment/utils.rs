use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;

pub struct ProviderCredentials<'a> {
    pub api_endpoint: &'a str,
    pub secret_key: &'a str,
}

pub struct SendProviderRequestPayload<'a> {
    pub route: String,
    pub form: Option<&'a [(&'a str, String)]>,
    pub expected_status_code: StatusCode,
    pub method: Method,
}

#[derive(Debug)]
pub enum Error {
    RequestNotSent,
    FailedToReadResponse,
    InvalidHttpResponseStatusCode,
    FailedToDecodeResponse,
}

pub async fn send_provider_request<'a, R: DeserializeOwned>(
    client: &reqwest::Client,
    credentials: ProviderCredentials<'a>,
    payload: SendProviderRequestPayload<'a>,
) -> Result<R, Error> {
    let url = format!("{}{}", credentials.api_endpoint, payload.route);
    let mut req = client
        .request(payload.method, url)
        .bearer_auth(credentials.secret_key);

    if let Some(form) = payload.form {
        req = req.form(form);
    }

    let res = req.send().await.map_err(|err| {
        tracing::error!("Failed to send payment provider request: {}", err);
        Error::RequestNotSent
    })?;

    let http_response_status_code = res.status();

    let data = res.text().await.map_err(|err| {
        tracing::error!("Failed to read payment provider response: {}", err);
        Error::FailedToReadResponse
    })?;

    if http_response_status_code != payload.expected_status_code {
        tracing::error!(
            "Got unexpected http response status {} from payment provider: {}",
            http_response_status_code,
            data
        );
        return Err(Error::InvalidHttpResponseStatusCode);
    }

    tracing::trace!("Response received from payment provider: {}", data);

    serde_json::de::from_str::<R>(&data).map_err(|err| {
        tracing::error!("Failed to decode payment provider response: {}", err);
        Error::FailedToDecodeResponse
    })
}
