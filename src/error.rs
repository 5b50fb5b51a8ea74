use thiserror::Error;

pub type ZoomResult<T> = Result<T, ZoomError>;

#[derive(Debug, Error)]
pub enum ZoomError {
    #[error("invalid scale bounds: min={min}, max={max}")]
    InvalidScaleBounds { min: f64, max: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("view host failure: {0}")]
    Host(String),
}
