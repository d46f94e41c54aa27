use one_dto_mapper::From;

use crate::model::verification::VerificationResult;

#[derive(Clone, Debug, Default)]
pub struct RequestVerificationDTO {
    pub cert_method: Option<String>,
    pub plus_info: Option<String>,
}

#[derive(Clone, Debug)]
pub struct VerificationRequestResponseDTO {
    pub auth_url: String,
    pub cert_num: String,
    pub params: GatewayFormDTO,
}

/// Form fields posted to the gateway's authentication page.
#[derive(Clone, Debug)]
pub struct GatewayFormDTO {
    pub tr_cert: String,
    pub tr_url: String,
    pub tr_ver: Option<String>,
    pub tr_add: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidatedCallbackDTO {
    pub api_token: String,
    pub cert_num: String,
    pub plus_info: Option<String>,
}

#[derive(Clone, Debug)]
pub struct DecryptResultRequestDTO {
    /// certNum of the callback the result is expected for.
    pub cert_num: String,
    pub result_code: Option<String>,
    pub rec_cert: String,
}

#[derive(Clone, Debug, PartialEq, Eq, From)]
#[from(VerificationResult)]
pub struct VerificationResultDTO {
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
