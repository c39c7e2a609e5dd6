use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartError {
    /// The element's chart payload could not be decoded into a series.
    #[error("malformed chart payload: {0}")]
    MalformedPayload(String),

    /// A charting collaborator failed to create, mutate or redraw an instance.
    #[error("chart backend failure: {0}")]
    Backend(String),

    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid binding config: {0}")]
    InvalidConfig(String),
}

impl ChartError {
    #[must_use]
    pub fn is_malformed_payload(&self) -> bool {
        matches!(self, Self::MalformedPayload(_))
    }
}
