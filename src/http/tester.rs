use std::collections::HashMap;
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use reqwest::Client;
use tracing::info;

use crate::error::{AppError, AppResult, HttpError};
use crate::metrics::{StressResult, UrlOutcome};
use crate::shutdown::StageToken;

use super::client::{build_client, fetch_url};

/// Allowed body-length drift between the baseline and later responses, in
/// bytes. Covers small dynamic fragments such as server-rendered timestamps.
const BODY_LENGTH_TOLERANCE: u64 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ExpectedResponse {
    status: u16,
    min_body_len: u64,
    max_body_len: u64,
}

impl ExpectedResponse {
    pub(crate) fn from_baseline(status: u16, body_len: u64) -> Self {
        Self {
            status,
            min_body_len: body_len.saturating_sub(BODY_LENGTH_TOLERANCE),
            max_body_len: body_len + BODY_LENGTH_TOLERANCE,
        }
    }

    pub(crate) fn matches(&self, status: u16, body_len: u64) -> bool {
        status == self.status && body_len >= self.min_body_len && body_len <= self.max_body_len
    }
}

#[derive(Debug, Default)]
struct TargetSet {
    urls: Vec<String>,
    expected: HashMap<String, ExpectedResponse>,
}

/// Stress-tests a fixed set of URLs, validating every response against the
/// baseline sample captured by [`Tester::init`].
pub struct Tester {
    client: Client,
    targets: Arc<TargetSet>,
    sampling_seed: Option<u64>,
}

impl Tester {
    /// Creates a tester whose connection pool is sized for `concurrency_cap`.
    ///
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be built.
    pub fn new(concurrency_cap: usize) -> AppResult<Self> {
        Ok(Self {
            client: build_client(concurrency_cap)?,
            targets: Arc::new(TargetSet::default()),
            sampling_seed: None,
        })
    }

    /// Fixes the URL-sampling seed so stages draw a reproducible sequence.
    /// Production runs leave this unset and sample from entropy.
    pub fn set_sampling_seed(&mut self, seed: u64) {
        self.sampling_seed = Some(seed);
    }

    /// Probes every URL once and records its expected response.
    ///
    /// Duplicate URLs stay in the sampling list (they weight selection
    /// toward themselves) but share one expected-response entry. A non-2xx
    /// baseline is accepted as long as at least one URL answered 2xx, so a
    /// test may include intentional 4xx targets.
    ///
    /// # Errors
    ///
    /// Fails on the first probe that errors at the transport level, or when
    /// no probe returned a 2xx status.
    pub async fn init(&mut self, urls: Vec<String>) -> AppResult<()> {
        let mut expected = HashMap::with_capacity(urls.len());
        let mut any_success = false;
        info!("Expected response for URLs:");
        for url in &urls {
            let sample = fetch_url(&self.client, url, 1).await.map_err(|err| {
                HttpError::InitProbe {
                    url: url.clone(),
                    source: err,
                }
            })?;
            expected.insert(
                url.clone(),
                ExpectedResponse::from_baseline(sample.status, sample.body_len),
            );
            info!("{} | {}", sample.status, url);
            if (200..300).contains(&sample.status) {
                any_success = true;
            }
        }
        if !any_success {
            return Err(AppError::http(HttpError::NoSuccessfulProbe));
        }
        self.targets = Arc::new(TargetSet { urls, expected });
        Ok(())
    }

    /// Runs one stage: `parallelism` workers fetch random URLs back to back
    /// until the token fires, then their local results are merged.
    ///
    /// # Errors
    ///
    /// Fails fast with the first worker transport error; sibling workers are
    /// cancelled through the token and partial results are discarded.
    pub async fn stress(&self, token: &StageToken, parallelism: usize) -> AppResult<StressResult> {
        if self.targets.urls.is_empty() {
            return Err(AppError::http(HttpError::UrlListEmpty));
        }

        let mut handles = Vec::with_capacity(parallelism);
        for worker_index in 0..parallelism {
            let worker = StageWorker {
                client: self.client.clone(),
                targets: Arc::clone(&self.targets),
                parallelism,
                rng: self.worker_rng(worker_index),
            };
            handles.push(tokio::spawn(worker.run(token.clone())));
        }

        let mut merged = StressResult::default();
        let mut first_error = None;
        for handle in handles {
            match handle.await {
                Ok(Ok(partial)) => merged.merge(partial),
                Ok(Err(err)) => {
                    if first_error.is_none() {
                        first_error = Some(err);
                    }
                }
                Err(join_err) => {
                    if first_error.is_none() {
                        first_error = Some(AppError::from(join_err));
                    }
                }
            }
        }
        match first_error {
            Some(err) => Err(err),
            None => Ok(merged),
        }
    }

    fn worker_rng(&self, worker_index: usize) -> StdRng {
        match self.sampling_seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(worker_index as u64)),
            None => StdRng::from_entropy(),
        }
    }
}

struct StageWorker {
    client: Client,
    targets: Arc<TargetSet>,
    parallelism: usize,
    rng: StdRng,
}

impl StageWorker {
    async fn run(mut self, token: StageToken) -> AppResult<StressResult> {
        let mut result = StressResult::default();
        while !token.is_cancelled() {
            let index = self.rng.gen_range(0..self.targets.urls.len());
            let url = self.targets.urls[index].as_str();
            match self.fetch_and_verify(url).await {
                Ok(outcome) => result.record(url, &outcome),
                Err(err) => {
                    token.cancel();
                    return Err(AppError::http(HttpError::WorkerFetch {
                        url: url.to_owned(),
                        source: err,
                    }));
                }
            }
        }
        Ok(result)
    }

    async fn fetch_and_verify(&self, url: &str) -> Result<UrlOutcome, reqwest::Error> {
        let sample = fetch_url(&self.client, url, self.parallelism).await?;
        let is_valid = self
            .targets
            .expected
            .get(url)
            .is_some_and(|expected| expected.matches(sample.status, sample.body_len));
        Ok(UrlOutcome {
            is_valid,
            bytes_received: sample.body_len,
            latency: sample.latency,
        })
    }
}
