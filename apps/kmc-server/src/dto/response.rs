use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use kmc_core::provider::signer::error::SignerError;
use kmc_core::service::error::{ErrorCode, ServiceError, ValidationError};
use kmc_crypto::CryptoError;
use serde::Serialize;

use super::error::{Cause, ErrorResponseRestDTO};
use crate::router::AppState;

pub(crate) enum ErrorResponse {
    BadRequest(ErrorResponseRestDTO),
    Unauthorized(ErrorResponseRestDTO),
    ServerError(ErrorResponseRestDTO),
}

impl ErrorResponse {
    pub fn for_panic(panic_msg: String) -> Self {
        Self::ServerError(ErrorResponseRestDTO {
            code: ErrorCode::KMC_0000.into(),
            message: panic_msg,
            cause: Some(Cause {
                message: "Panic".to_string(),
            }),
        })
    }

    fn from_service_error(error: ServiceError, hide_cause: bool) -> Self {
        let response = ErrorResponseRestDTO::from(&error).hide_cause(hide_cause);
        match error {
            ServiceError::Validation(
                ValidationError::UnknownCertNum(_)
                | ValidationError::CertNumAlreadyUsed(_)
                | ValidationError::VerificationExpired(_)
                | ValidationError::CallbackNotValidated(_)
                | ValidationError::CertNumMismatch { .. }
                | ValidationError::IntegrityCheckFailed,
            ) => Self::Unauthorized(response),
            ServiceError::Validation(_)
            | ServiceError::SignerError(
                SignerError::MissingField(_)
                | SignerError::DelimiterInField(_)
                | SignerError::InvalidField { .. }
                | SignerError::Encoding(_)
                | SignerError::Crypto(
                    CryptoError::Encoding(_)
                    | CryptoError::InvalidHex(_)
                    | CryptoError::UnalignedData(_),
                ),
            ) => Self::BadRequest(response),
            _ => Self::ServerError(response),
        }
    }

    #[track_caller]
    fn from_service_error_with_trace(
        error: ServiceError,
        state: State<AppState>,
        action_description: &str,
    ) -> Self {
        let location = std::panic::Location::caller();
        tracing::error!(%error, %location, "Error while {action_description}");
        Self::from_service_error(error, state.config.hide_error_response_cause)
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::BadRequest(error) => (StatusCode::BAD_REQUEST, Json(error)).into_response(),
            Self::Unauthorized(error) => (StatusCode::UNAUTHORIZED, Json(error)).into_response(),
            Self::ServerError(error) => {
                (StatusCode::INTERNAL_SERVER_ERROR, Json(error)).into_response()
            }
        }
    }
}

pub(crate) enum OkOrErrorResponse<T> {
    Ok(T),
    Error(ErrorResponse),
}

impl<T> OkOrErrorResponse<T> {
    pub fn ok(value: impl Into<T>) -> Self {
        Self::Ok(value.into())
    }

    #[track_caller]
    pub(crate) fn from_result(
        result: Result<impl Into<T>, ServiceError>,
        state: State<AppState>,
        action_description: &str,
    ) -> Self {
        match result {
            Ok(value) => Self::ok(value),
            Err(error) => Self::Error(ErrorResponse::from_service_error_with_trace(
                error,
                state,
                action_description,
            )),
        }
    }
}

impl<T: Serialize> IntoResponse for OkOrErrorResponse<T> {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::Ok(body) => (StatusCode::OK, Json(body)).into_response(),
            Self::Error(error) => error.into_response(),
        }
    }
}
