use thiserror::Error;

/// Errors raised by the workload generators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkloadError {
    #[error("invalid argument: range [{low}, {high}] is empty (low > high)")]
    InvalidArgument { low: u32, high: u32 },
}

pub type Result<T> = std::result::Result<T, WorkloadError>;
