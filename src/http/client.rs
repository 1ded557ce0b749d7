use std::time::{Duration, Instant};

use reqwest::{header, Client};

use crate::error::HttpError;

pub(crate) const CLIENT_NAME: &str = "http-load-tester";
const ACCEPTED_ENCODINGS: &str = "gzip, deflate, br";

/// Builds the shared client. The idle pool is sized to the absolute
/// concurrency cap so stages late in the ramp reuse connections that earlier
/// stages already opened.
pub(crate) fn build_client(concurrency_cap: usize) -> Result<Client, HttpError> {
    Client::builder()
        .pool_max_idle_per_host(concurrency_cap)
        .build()
        .map_err(|err| HttpError::BuildClientFailed { source: err })
}

pub(crate) struct FetchSample {
    pub(crate) status: u16,
    pub(crate) body_len: u64,
    pub(crate) latency: Duration,
}

/// Issues one GET and buffers the body, measuring wall-clock latency around
/// the whole exchange.
pub(crate) async fn fetch_url(
    client: &Client,
    url: &str,
    parallelism: usize,
) -> Result<FetchSample, reqwest::Error> {
    let user_agent = format!("{}-{}", CLIENT_NAME, parallelism);
    let started = Instant::now();
    let response = client
        .get(url)
        .header(header::USER_AGENT, user_agent)
        .header(header::ACCEPT_ENCODING, ACCEPTED_ENCODINGS)
        .send()
        .await?;
    let status = response.status().as_u16();
    let body = response.bytes().await?;
    Ok(FetchSample {
        status,
        body_len: body.len() as u64,
        latency: started.elapsed(),
    })
}
