use reqwest::blocking::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::error::FetchError;

/// One blocking client shared by both providers.
pub fn build_client(config: &Config) -> reqwest::Result<Client> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(config.timeout)
        .build()
}

/// Sends the request and decodes a successful JSON body into `T`.
pub fn get_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, FetchError> {
    let response = request.send()?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            status,
            url: response.url().to_string(),
        });
    }

    Ok(response.json::<T>()?)
}
