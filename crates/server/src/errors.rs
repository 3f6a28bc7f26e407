use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use models::ufo_v1::RpcErrorBody;
use models::weather_v1::GenericError;
use service::errors::StoreError;
use tracing::error;

/// HTTP status for a store outcome, shared by every HTTP-style adapter.
pub fn http_status(err: &StoreError) -> StatusCode {
    match err {
        StoreError::NotFound { .. } => StatusCode::NOT_FOUND,
        StoreError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
        StoreError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Canonical status codes of the UFO RPC service.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RpcCode {
    InvalidArgument,
    NotFound,
    Internal,
    Unimplemented,
}

impl RpcCode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InvalidArgument => "invalid_argument",
            Self::NotFound => "not_found",
            Self::Internal => "internal",
            Self::Unimplemented => "unimplemented",
        }
    }

    pub fn http_status(self) -> StatusCode {
        match self {
            Self::InvalidArgument => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Unimplemented => StatusCode::NOT_IMPLEMENTED,
        }
    }
}

/// Non-OK RPC outcome: a code plus a human readable message.
#[derive(Debug)]
pub struct RpcStatus {
    pub code: RpcCode,
    pub message: String,
}

impl RpcStatus {
    pub fn new(code: RpcCode, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }
}

impl From<StoreError> for RpcStatus {
    fn from(err: StoreError) -> Self {
        let code = match err {
            StoreError::NotFound { .. } => RpcCode::NotFound,
            StoreError::InvalidArgument(_) => RpcCode::InvalidArgument,
            StoreError::Internal(_) => RpcCode::Internal,
        };
        Self::new(code, err.to_string())
    }
}

impl From<JsonRejection> for RpcStatus {
    fn from(rej: JsonRejection) -> Self {
        Self::new(RpcCode::InvalidArgument, rej.body_text())
    }
}

impl IntoResponse for RpcStatus {
    fn into_response(self) -> Response {
        if self.code == RpcCode::Internal {
            error!(code = self.code.as_str(), error = %self.message, "rpc internal error");
        }
        let body = RpcErrorBody { code: self.code.as_str().to_string(), message: self.message };
        (self.code.http_status(), Json(body)).into_response()
    }
}

/// Plain-text error used by the hand-written weather routes.
#[derive(Debug)]
pub struct PlainError {
    pub status: StatusCode,
    pub message: String,
}

impl PlainError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }
}

impl From<StoreError> for PlainError {
    fn from(err: StoreError) -> Self {
        Self::new(http_status(&err), err.to_string())
    }
}

impl IntoResponse for PlainError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = self.status.as_u16(), error = %self.message, "request failed");
        }
        (self.status, self.message).into_response()
    }
}

/// Default error of the schema-described weather API: `GenericError` JSON body.
#[derive(Debug)]
pub struct GenericApiError {
    pub status: StatusCode,
    pub message: String,
}

impl GenericApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }
}

impl From<StoreError> for GenericApiError {
    fn from(err: StoreError) -> Self {
        Self::new(http_status(&err), err.to_string())
    }
}

impl From<JsonRejection> for GenericApiError {
    fn from(rej: JsonRejection) -> Self {
        Self::new(StatusCode::BAD_REQUEST, rej.body_text())
    }
}

impl IntoResponse for GenericApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = self.status.as_u16(), error = %self.message, "request failed");
        }
        let body = GenericError { code: Some(self.status.as_u16()), message: Some(self.message) };
        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_errors_map_to_protocol_codes() {
        let nf = StoreError::not_found("sighting", "x");
        assert_eq!(http_status(&nf), StatusCode::NOT_FOUND);
        assert_eq!(RpcStatus::from(nf).code, RpcCode::NotFound);

        let bad = StoreError::InvalidArgument("missing".into());
        assert_eq!(http_status(&bad), StatusCode::BAD_REQUEST);
        assert_eq!(RpcStatus::from(bad).code, RpcCode::InvalidArgument);

        let internal = StoreError::Internal("boom".into());
        assert_eq!(http_status(&internal), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(RpcStatus::from(internal).code.http_status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn rpc_status_renders_code_and_status() {
        let res = RpcStatus::new(RpcCode::Unimplemented, "nope").into_response();
        assert_eq!(res.status(), StatusCode::NOT_IMPLEMENTED);
    }
}
