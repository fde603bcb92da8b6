use thiserror::Error;

pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Invalid metric {what}: {value} (must be a non-negative finite number)")]
    InvalidMetric { what: &'static str, value: f64 },

    #[error("Invalid coordinate {what}: {value}")]
    InvalidCoordinate { what: &'static str, value: f64 },
}
