use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::services::{
    errors::RatesError,
    shared::constants::{HUMO_URL, REQUEST_TIMEOUT, USER_AGENT},
};

/// Where and how the rates page is requested.
#[derive(Debug, Clone)]
pub struct RatesSource {
    pub url: String,
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for RatesSource {
    fn default() -> Self {
        RatesSource {
            url: HUMO_URL.to_string(),
            user_agent: USER_AGENT.to_string(),
            timeout: REQUEST_TIMEOUT,
        }
    }
}

/// Single GET of the rates page. Any transport failure or non-2xx status is an error, no retries.
pub async fn fetch_rates_page(source: &RatesSource) -> Result<String, RatesError> {
    let client = Client::builder()
        .user_agent(source.user_agent.as_str())
        .timeout(source.timeout)
        .build()?;

    debug!(url = %source.url, "Requesting rates page");
    let res = client.get(&source.url).send().await?;

    let status = res.status();
    debug!(%status, "Rates page responded");
    if !status.is_success() {
        return Err(RatesError::Status {
            status,
            url: source.url.clone(),
        });
    }

    Ok(res.text().await?)
}
