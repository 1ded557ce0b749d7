use std::time::Duration;

use super::types::PositiveUsize;
use crate::error::ValidationError;

pub(super) fn parse_positive_usize(s: &str) -> Result<PositiveUsize, ValidationError> {
    s.parse::<PositiveUsize>()
}

pub(super) fn parse_err_threshold(s: &str) -> Result<f64, ValidationError> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|err| ValidationError::InvalidThreshold {
            value: s.to_owned(),
            source: err,
        })?;
    // NaN compares false against everything, so a plain range check would
    // wave it through and disable the breach check for the whole run.
    if !value.is_finite() || value <= 0.0 || value > 1.0 {
        return Err(ValidationError::ThresholdOutOfRange { value });
    }
    Ok(value)
}

/// Parses a duration flag such as `250ms`, `30s`, `2m`, or `1h`. A bare
/// number means seconds.
pub(crate) fn parse_duration_arg(s: &str) -> Result<Duration, ValidationError> {
    let value = s.trim();
    if value.is_empty() {
        return Err(ValidationError::DurationEmpty);
    }

    let unit_start = value
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(value.len());
    let (digits, unit) = value.split_at(unit_start);
    if digits.is_empty() {
        return Err(ValidationError::InvalidDurationFormat {
            value: value.to_owned(),
        });
    }
    let number: u64 = digits
        .parse()
        .map_err(|err| ValidationError::InvalidDurationNumber {
            value: value.to_owned(),
            source: err,
        })?;

    let millis_per_unit: u64 = match unit {
        "ms" => 1,
        "" | "s" => 1_000,
        "m" => 60 * 1_000,
        "h" => 60 * 60 * 1_000,
        _ => {
            return Err(ValidationError::InvalidDurationUnit {
                unit: unit.to_owned(),
            });
        }
    };
    let millis = number
        .checked_mul(millis_per_unit)
        .ok_or(ValidationError::DurationOverflow)?;
    if millis == 0 {
        return Err(ValidationError::DurationZero);
    }

    Ok(Duration::from_millis(millis))
}
