use thiserror::Error;

pub type Result<T> = std::result::Result<T, KMeansError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum KMeansError {
    /// Starting, stepping or restoring requires a generated point set.
    #[error("No points available: generate a point set first")]
    NoPoints,
    #[error("No elbow record stored for k = {k}")]
    NoElbowRecord { k: usize },
    #[error("Invalid bounds {width} x {height}: both dimensions must be finite and greater than zero")]
    InvalidBounds { width: f64, height: f64 },
    #[error("Invalid {name} range {start}..={end}: the range must not be empty and must start at 1 or above")]
    InvalidRange { name: &'static str, start: usize, end: usize },
    #[error("Unknown distribution method '{0}' (expected one of: uniform, gaussian, clusters)")]
    UnknownDistribution(String),
}
