use axum::Json;
use axum::extract::{Form, State};
use axum_extra::extract::WithRejection;

use super::dto::{
    CallbackRequestRestDTO, CallbackResponseRestDTO, DecryptResultRequestRestDTO,
    RequestVerificationRequestRestDTO, RequestVerificationResponseRestDTO,
    VerificationResultResponseRestDTO,
};
use crate::dto::error::ErrorResponseRestDTO;
use crate::dto::response::OkOrErrorResponse;
use crate::router::AppState;

pub(crate) async fn request_verification(
    state: State<AppState>,
    WithRejection(Json(request), _): WithRejection<
        Json<RequestVerificationRequestRestDTO>,
        ErrorResponseRestDTO,
    >,
) -> OkOrErrorResponse<RequestVerificationResponseRestDTO> {
    let result = state
        .core
        .verification_service
        .request_verification(request.into())
        .await;
    OkOrErrorResponse::from_result(result, state, "requesting verification")
}

pub(crate) async fn validate_callback(
    state: State<AppState>,
    WithRejection(Form(request), _): WithRejection<
        Form<CallbackRequestRestDTO>,
        ErrorResponseRestDTO,
    >,
) -> OkOrErrorResponse<CallbackResponseRestDTO> {
    let result = state
        .core
        .verification_service
        .validate_callback(request.into())
        .await;
    OkOrErrorResponse::from_result(result, state, "validating callback")
}

pub(crate) async fn decrypt_result(
    state: State<AppState>,
    WithRejection(Json(request), _): WithRejection<
        Json<DecryptResultRequestRestDTO>,
        ErrorResponseRestDTO,
    >,
) -> OkOrErrorResponse<VerificationResultResponseRestDTO> {
    let result = state
        .core
        .verification_service
        .decrypt_result(request.into())
        .await;
    OkOrErrorResponse::from_result(result, state, "decrypting verification result")
}
