use std::fmt;

use super::stress::StressResult;

const URL_HEADING: &str = "URL";
const HEADINGS: [&str; 7] = [
    "Count Success",
    "Count Failure",
    "Min Latency (ms)",
    "Avg Latency (ms)",
    "Max Latency (ms)",
    "Bytes Per Resp",
    "Avg Bytes / s",
];

fn write_row(
    f: &mut fmt::Formatter<'_>,
    url_width: usize,
    url: &str,
    cells: &[String; 7],
) -> fmt::Result {
    write!(f, "{:<width$}", url, width = url_width)?;
    for (cell, heading) in cells.iter().zip(HEADINGS) {
        write!(f, " | {:>width$}", cell, width = heading.len())?;
    }
    writeln!(f)
}

/// Pretty-prints the key per-URL data as a self-aligned table.
impl fmt::Display for StressResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let url_width = self
            .results_by_url()
            .keys()
            .map(String::len)
            .max()
            .unwrap_or(0);

        write_row(f, url_width, URL_HEADING, &HEADINGS.map(str::to_owned))?;
        write_row(
            f,
            url_width,
            &"-".repeat(url_width),
            &HEADINGS.map(|heading| "-".repeat(heading.len())),
        )?;
        for (url, url_result) in self.results_by_url() {
            let successes = &url_result.successes;
            let cells = [
                successes.num_calls.to_string(),
                url_result.failures.num_calls.to_string(),
                format!("{:.3}", successes.min_latency_millis()),
                format!("{:.3}", successes.average_latency_millis()),
                format!("{:.3}", successes.max_latency_millis()),
                successes.bytes_per_response().to_string(),
                format!("{:.3}", successes.bytes_per_second()),
            ];
            write_row(f, url_width, url, &cells)?;
        }
        Ok(())
    }
}
