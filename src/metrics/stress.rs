use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use super::aggregate::{ResultWithValidity, UrlOutcome};

/// Per-URL results for one stress stage.
///
/// Keys are kept sorted so the rendered table lists URLs in ascending order.
#[derive(Debug, Default)]
pub struct StressResult {
    results_by_url: BTreeMap<String, ResultWithValidity>,
}

impl StressResult {
    pub fn record(&mut self, url: &str, outcome: &UrlOutcome) {
        self.results_by_url
            .entry(url.to_owned())
            .or_default()
            .record(outcome);
    }

    /// Absorbs another result; keys are unioned, never removed.
    pub fn merge(&mut self, other: StressResult) {
        for (url, other_result) in other.results_by_url {
            match self.results_by_url.entry(url) {
                Entry::Occupied(mut entry) => entry.get_mut().merge(&other_result),
                Entry::Vacant(entry) => {
                    entry.insert(other_result);
                }
            }
        }
    }

    /// Folds every per-URL result into a single aggregate pair.
    #[must_use]
    pub fn summary(&self) -> ResultWithValidity {
        let mut summary = ResultWithValidity::default();
        for url_result in self.results_by_url.values() {
            summary.merge(url_result);
        }
        summary
    }

    #[must_use]
    pub fn results_by_url(&self) -> &BTreeMap<String, ResultWithValidity> {
        &self.results_by_url
    }

    /// Aggregate statistics over all URLs, one printable line each.
    #[must_use]
    pub fn summary_lines(&self) -> Vec<String> {
        let summary = self.summary();
        vec![
            format!("Count Success: {}", summary.successes.num_calls),
            format!("Count Failure: {}", summary.failures.num_calls),
            format!(
                "Min success latency (ms): {:.3}",
                summary.successes.min_latency_millis()
            ),
            format!(
                "Avg success latency (ms): {:.3}",
                summary.successes.average_latency_millis()
            ),
            format!(
                "Max success latency (ms): {:.3}",
                summary.successes.max_latency_millis()
            ),
            format!(
                "Avg success bytes per response: {:.3}",
                summary.successes.avg_bytes_per_response()
            ),
            format!(
                "Avg success bytes per second: {:.3}",
                summary.successes.bytes_per_second()
            ),
            format!(
                "Avg error latency (ms): {:.3}",
                summary.failures.average_latency_millis()
            ),
        ]
    }
}
