//! Error types for ROIVIZ data operations

/// Errors raised while building the foundation data structures
#[derive(Debug, Clone, thiserror::Error)]
pub enum RoiDataError {
    /// Failed to deserialize a query-response payload into data structures
    #[error("Failed to deserialize ROI data: {0}")]
    Deserialization(String),

    /// Invalid parameters provided to a constructor
    #[error("Bad parameters: {0}")]
    BadParameters(String),
}
