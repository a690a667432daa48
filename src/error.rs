use thiserror::Error;

/// Errors reported by palette lookup and value mapping.  They all
/// signal bad input from the caller and are never recovered from
/// internally.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("unknown palette “{0}”")]
    UnknownPalette(String),
    #[error("invalid domain [{min}, {max}] (bounds must be finite \
             with min <= max)")]
    InvalidDomain { min: f64, max: f64 },
    #[error("cannot map the non-finite value {0}")]
    InvalidValue(f64),
    #[error("color table has no entries")]
    EmptyTable,
}

pub type Result<T> = std::result::Result<T, Error>;
