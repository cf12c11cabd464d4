//! Errors raised while building model entities from input data.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ModelError {
    #[error("invalid country code `{0}`: expected 2 characters")]
    InvalidCountryCode(String),
    #[error("unknown launch site type `{0}`")]
    UnknownSiteKind(String),
    #[error("unknown map view `{0}`")]
    UnknownMapView(String),
    #[error("unknown simulation speed `{0}`")]
    UnknownSpeed(String),
}
