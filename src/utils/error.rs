use thiserror::Error;

#[derive(Debug, Error)]
pub enum AddressError {
    #[error("Segmentation error: {0}")]
    SegmentationError(String),
    #[error("Extraction error: {0}")]
    ExtractionError(String),
    #[error("Tagging error: {0}")]
    TaggingError(String),
    #[error("Formatting error: {0}")]
    FormattingError(String),
    #[error("Dataset error: {0}")]
    DatasetError(String),
    #[error("IO error: {0}")]
    IoError(String),
}

impl From<std::io::Error> for AddressError {
    fn from(err: std::io::Error) -> Self {
        AddressError::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for AddressError {
    fn from(err: serde_json::Error) -> Self {
        AddressError::DatasetError(err.to_string())
    }
}
