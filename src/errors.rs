use thiserror::Error;

/// Error type for feature vector conversion.
#[derive(Error, Debug)]
pub enum ConversionError {
    /// The supplied vector is of a variant the dispatch does not recognize.
    #[error("Unsupported feature vector variant: {0}")]
    UnsupportedVariant(String),
}

/// Result type alias for fieldmap operations.
pub type Result<T> = std::result::Result<T, ConversionError>;
