use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtentSourceError {
    #[error("Can't read file: {0}")]
    FileReadError(String),

    #[error("Error parsing extent coordinate: {0}")]
    CoordinateParseError(String),

    #[error("Extent source ends with an unpaired coordinate: {0}")]
    UnpairedCoordinate(String),

    #[error("Error parsing query point: {0}")]
    PointParseError(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
