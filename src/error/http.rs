use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("URL list was empty.")]
    UrlListEmpty,
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Failed to read paths file '{path}': {source}")]
    ReadPathsFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to build HTTP client: {source}")]
    BuildClientFailed {
        #[source]
        source: reqwest::Error,
    },
    #[error("Failed to fetch url {url}: {source}")]
    InitProbe {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("No URL returned a successful status during the baseline probes.")]
    NoSuccessfulProbe,
    #[error("Request to {url} failed: {source}")]
    WorkerFetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}
