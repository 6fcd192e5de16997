use thiserror::Error;

/// Top-level error type for the dodecal layout engine.
#[derive(Debug, Error)]
pub enum DodecalError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Calendar(#[from] CalendarError),
}

/// Errors related to polygon computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("polygon has no vertices")]
    EmptyInput,

    #[error("polygon must have at least 3 sides, got {sides}")]
    InvalidSides { sides: usize },

    #[error("circumradius must be positive, got {radius}")]
    InvalidRadius { radius: f64 },
}

/// Errors raised while walking a net.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("edge index {index} is out of range for a {sides}-sided cell")]
    InvalidEdgeIndex { index: usize, sides: usize },

    #[error("cannot pop the root cell")]
    Underflow,
}

/// Errors related to calendar dates and highlight loading.
#[derive(Debug, Error)]
pub enum CalendarError {
    #[error("month {0} is out of range [1, 12]")]
    InvalidMonth(u32),

    #[error("{year}-{month:02}-{day:02} is not a valid date")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("line {line}: expected `day/month`, got {text:?}")]
    MalformedLine { line: usize, text: String },

    #[error("failed to read highlight dates: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for results using [`DodecalError`].
pub type Result<T> = std::result::Result<T, DodecalError>;
