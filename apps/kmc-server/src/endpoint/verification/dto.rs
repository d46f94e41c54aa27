use kmc_core::model::verification::VerificationCallback;
use kmc_core::service::verification::dto::{
    DecryptResultRequestDTO, GatewayFormDTO, RequestVerificationDTO, ValidatedCallbackDTO,
    VerificationRequestResponseDTO, VerificationResultDTO,
};
use one_dto_mapper::{From, Into};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Deserialize, Into)]
#[into(RequestVerificationDTO)]
#[serde(rename_all = "camelCase")]
pub struct RequestVerificationRequestRestDTO {
    pub cert_method: Option<String>,
    pub plus_info: Option<String>,
}

#[derive(Clone, Debug, Serialize, From)]
#[from(VerificationRequestResponseDTO)]
#[serde(rename_all = "camelCase")]
pub struct RequestVerificationResponseRestDTO {
    pub auth_url: String,
    pub cert_num: String,
    pub params: GatewayFormRestDTO,
}

/// Posted as-is to the gateway page, hence the gateway's own field names.
#[derive(Clone, Debug, Serialize, From)]
#[from(GatewayFormDTO)]
pub struct GatewayFormRestDTO {
    pub tr_cert: String,
    pub tr_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tr_ver: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tr_add: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Into)]
#[into(VerificationCallback)]
#[serde(rename_all = "camelCase")]
pub struct CallbackRequestRestDTO {
    pub api_token: Option<String>,
    pub cert_num: Option<String>,
}

#[derive(Clone, Debug, Serialize, From)]
#[from(ValidatedCallbackDTO)]
#[serde(rename_all = "camelCase")]
pub struct CallbackResponseRestDTO {
    pub api_token: String,
    pub cert_num: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plus_info: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Into)]
#[into(DecryptResultRequestDTO)]
#[serde(rename_all = "camelCase")]
pub struct DecryptResultRequestRestDTO {
    /// certNum of the callback this result belongs to.
    pub cert_num: String,
    pub rec_cert: String,
    pub result_code: Option<String>,
}

#[derive(Clone, Debug, Serialize, From)]
#[from(VerificationResultDTO)]
#[serde(rename_all = "camelCase")]
pub struct VerificationResultResponseRestDTO {
    pub cert_num: String,
    pub date: String,
    pub ci: String,
    pub di: String,
    pub name: String,
    pub phone_no: String,
    pub phone_corp: String,
    pub birth_day: String,
    pub gender: String,
    pub nation: String,
    pub result: String,
    pub cert_method: String,
    pub ip: String,
    pub plus_info: String,
}
