use std::path::PathBuf;

use url::Url;

use crate::args::TesterArgs;
use crate::error::{AppResult, HttpError, ValidationError};

const PATH_SEPARATOR: char = '\\';

/// Builds the target URL list from the paths flag and the optional paths
/// file. Order and duplicates are preserved so sampling weight follows the
/// input.
pub(super) fn assemble_urls(args: &TesterArgs) -> AppResult<Vec<String>> {
    let mut urls = Vec::new();
    if !args.paths.is_empty() {
        for path in args.paths.split(PATH_SEPARATOR) {
            urls.push(construct_url(&args.host, path)?);
        }
    }
    if let Some(paths_file) = args.paths_file.as_deref() {
        urls.extend(load_urls_from_file(&args.host, paths_file)?);
    }
    if urls.is_empty() {
        return Err(ValidationError::UrlListEmpty.into());
    }
    Ok(urls)
}

fn construct_url(host: &str, path: &str) -> AppResult<String> {
    let raw = format!("{}{}", host, path);
    let parsed = Url::parse(&raw).map_err(|err| HttpError::InvalidUrl {
        url: raw.clone(),
        source: err,
    })?;
    Ok(parsed.into())
}

fn load_urls_from_file(host: &str, path: &str) -> AppResult<Vec<String>> {
    let contents = std::fs::read_to_string(path).map_err(|err| HttpError::ReadPathsFile {
        path: PathBuf::from(path),
        source: err,
    })?;
    contents
        .lines()
        .map(|line| construct_url(host, line))
        .collect()
}
