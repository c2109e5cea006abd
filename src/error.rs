use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DctError {
    #[error("Quality factor must be 1 or greater")]
    InvalidQualityFactor,
    #[error("Source buffer length does not match the image dimensions")]
    InvalidSourceSize,
    #[error("Component plane dimensions do not agree")]
    ComponentShapeMismatch,
}
