use std::time::Duration;

/// Outcome of a single verified fetch.
#[derive(Clone, Copy, Debug)]
pub struct UrlOutcome {
    pub is_valid: bool,
    pub bytes_received: u64,
    pub latency: Duration,
}

/// Running aggregate over a set of fetches.
///
/// `min_latency == Duration::ZERO` means no observations yet; a real request
/// cannot complete in zero time at microsecond resolution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AggregateResult {
    pub num_calls: u64,
    pub total_bytes: u64,
    pub total_latency: Duration,
    pub min_latency: Duration,
    pub max_latency: Duration,
}

impl AggregateResult {
    pub fn add(&mut self, outcome: &UrlOutcome) {
        self.num_calls += 1;
        self.total_bytes += outcome.bytes_received;
        self.total_latency += outcome.latency;
        if outcome.latency > self.max_latency {
            self.max_latency = outcome.latency;
        }
        if self.min_latency.is_zero() || outcome.latency < self.min_latency {
            self.min_latency = outcome.latency;
        }
    }

    pub fn merge(&mut self, other: &Self) {
        self.num_calls += other.num_calls;
        self.total_bytes += other.total_bytes;
        self.total_latency += other.total_latency;
        if other.max_latency > self.max_latency {
            self.max_latency = other.max_latency;
        }
        if !other.min_latency.is_zero()
            && (self.min_latency.is_zero() || other.min_latency < self.min_latency)
        {
            self.min_latency = other.min_latency;
        }
    }

    pub(crate) fn min_latency_millis(&self) -> f64 {
        millis_at_micro_precision(self.min_latency)
    }

    pub(crate) fn max_latency_millis(&self) -> f64 {
        millis_at_micro_precision(self.max_latency)
    }

    pub(crate) fn average_latency_millis(&self) -> f64 {
        if self.num_calls == 0 {
            return 0.0;
        }
        millis_at_micro_precision(self.total_latency) / self.num_calls as f64
    }

    pub(crate) fn avg_bytes_per_response(&self) -> f64 {
        if self.num_calls == 0 {
            return 0.0;
        }
        self.total_bytes as f64 / self.num_calls as f64
    }

    pub(crate) fn bytes_per_response(&self) -> u64 {
        self.total_bytes / self.num_calls.max(1)
    }

    pub(crate) fn bytes_per_second(&self) -> f64 {
        let total_millis = millis_at_micro_precision(self.total_latency);
        if total_millis == 0.0 {
            return 0.0;
        }
        self.total_bytes as f64 / total_millis
    }
}

/// Separate aggregates for fetches that matched the baseline and those that
/// did not.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResultWithValidity {
    pub successes: AggregateResult,
    pub failures: AggregateResult,
}

impl ResultWithValidity {
    pub fn record(&mut self, outcome: &UrlOutcome) {
        if outcome.is_valid {
            self.successes.add(outcome);
        } else {
            self.failures.add(outcome);
        }
    }

    pub fn merge(&mut self, other: &Self) {
        self.successes.merge(&other.successes);
        self.failures.merge(&other.failures);
    }
}

fn millis_at_micro_precision(latency: Duration) -> f64 {
    latency.as_micros() as f64 / 1000.0
}
