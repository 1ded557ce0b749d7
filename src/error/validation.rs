use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("A value for host must be provided.")]
    MissingHost,
    #[error("The final URL list was empty. Provide --paths and/or --paths-file.")]
    UrlListEmpty,
    #[error("err-threshold must be > 0 and <= 1.0. Received {value:.3}")]
    ThresholdOutOfRange { value: f64 },
    #[error("Invalid err-threshold '{value}': {source}")]
    InvalidThreshold {
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },
    #[error("Duration must not be empty.")]
    DurationEmpty,
    #[error("Invalid duration '{value}'.")]
    InvalidDurationFormat { value: String },
    #[error("Invalid duration '{value}': {source}")]
    InvalidDurationNumber {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Duration overflow.")]
    DurationOverflow,
    #[error("Invalid duration unit '{unit}'.")]
    InvalidDurationUnit { unit: String },
    #[error("Duration must be > 0.")]
    DurationZero,
    #[error("Value must be >= {min}.")]
    ValueTooSmall { min: u64 },
    #[error("Invalid value: {source}")]
    InvalidNumber {
        #[source]
        source: std::num::ParseIntError,
    },
}
