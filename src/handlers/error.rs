// src/handlers/error.rs
use std::fmt;
use warp::http::StatusCode;
use warp::reject::Reject;
use crate::services::calculations::CalcError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    InvalidInput,
    InvalidPortfolio,
    External,
}

#[derive(Debug, Clone)]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
}

impl ApiError {
    pub fn new(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        ApiError {
            kind,
            message: message.into(),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::InvalidInput, message)
    }

    pub fn external_error(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::External, message)
    }

    pub fn status(&self) -> StatusCode {
        match self.kind {
            ApiErrorKind::InvalidInput | ApiErrorKind::InvalidPortfolio => StatusCode::BAD_REQUEST,
            ApiErrorKind::External => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<CalcError> for ApiError {
    fn from(err: CalcError) -> Self {
        let kind = match err {
            CalcError::InvalidInput(_) => ApiErrorKind::InvalidInput,
            CalcError::InvalidPortfolio(_) => ApiErrorKind::InvalidPortfolio,
        };
        ApiError::new(kind, err.to_string())
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}
impl Reject for ApiError {}
