use thiserror::Error;

/// A data row of a guide report that could not be interpreted.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RecordError {
    #[error("Expected at least {expected} columns, found {found}")]
    MissingColumns { expected: usize, found: usize },

    #[error("Coordinate is not of the form chr<chromosome>:<position>: {0:?}")]
    MalformedCoordinate(String),

    #[error("Position is not an integer: {0:?}")]
    InvalidPosition(String),
}
