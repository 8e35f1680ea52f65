use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoError {
    #[error("Invalid ring: {0}")]
    InvalidRing(String),

    #[error("Invalid polygon: {0}")]
    InvalidPolygon(String),

    #[error("Degenerate bound: {0}")]
    Degenerate(String),

    #[error("Non-finite coordinate: {0}")]
    NonFinite(String),
}

pub type Result<T> = std::result::Result<T, GeoError>;
