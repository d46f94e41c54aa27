use axum::Json;
use axum::extract::rejection::{FormRejection, JsonRejection};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use kmc_core::service::error::ServiceError;
use one_dto_mapper::From;
use serde::Serialize;

#[derive(Serialize, From)]
#[from("kmc_core::service::error::ErrorCode")]
#[allow(non_camel_case_types)]
pub enum ErrorCode {
    KMC_0000,
    KMC_0001,
    KMC_0002,
    KMC_0003,
    KMC_0004,
    KMC_0005,
    KMC_0006,
    KMC_0007,
    KMC_0008,
    KMC_0009,
    KMC_0010,
    KMC_0011,
    KMC_0012,
    KMC_0013,
    KMC_0014,
    KMC_0015,
    KMC_0016,
    KMC_0017,
    KMC_0018,
}

#[derive(Serialize)]
pub struct ErrorResponseRestDTO {
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause: Option<Cause>,
}

impl ErrorResponseRestDTO {
    pub fn hide_cause(mut self, hide: bool) -> ErrorResponseRestDTO {
        if hide {
            self.cause = None;
        }

        self
    }
}

#[derive(Serialize)]
pub struct Cause {
    pub message: String,
}

impl Cause {
    pub fn with_message_from_error(error: &impl std::error::Error) -> Cause {
        Cause {
            message: error.to_string(),
        }
    }
}

impl From<&ServiceError> for ErrorResponseRestDTO {
    fn from(error: &ServiceError) -> Self {
        let code = error.error_code();

        Self {
            code: code.into(),
            message: code.msg().to_string(),
            cause: Some(Cause::with_message_from_error(error)),
        }
    }
}

impl IntoResponse for ErrorResponseRestDTO {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::BAD_REQUEST, Json(self)).into_response()
    }
}

macro_rules! gen_from_rejection {
    ($from:ty, $rejection:ty ) => {
        impl From<$from> for $rejection {
            fn from(value: $from) -> Self {
                Self {
                    code: ErrorCode::KMC_0016,
                    message: "General input validation error".to_string(),
                    cause: Some(Cause {
                        message: value.body_text(),
                    }),
                }
            }
        }
    };
}

gen_from_rejection!(JsonRejection, ErrorResponseRestDTO);
gen_from_rejection!(FormRejection, ErrorResponseRestDTO);
