use thiserror::Error;

/// Top-level error type for the grain regression simulator.
#[derive(Debug, Error)]
pub enum GrainError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Metric(#[from] MetricError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors related to geometric input and construction.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("malformed input geometry: {0}")]
    MalformedInput(String),

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors related to geometry engine operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Errors raised while deriving burn metrics from a shape.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MetricError {
    #[error("hydraulic diameter undefined: wetted perimeter is zero (area = {area})")]
    DegenerateMetric { area: f64 },
}

/// Errors related to loading and validating simulation configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Convenience type alias for results using [`GrainError`].
pub type Result<T> = std::result::Result<T, GrainError>;
