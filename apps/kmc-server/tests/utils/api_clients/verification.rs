use serde_json::{Value, json};

use crate::utils::api_clients::{HttpClient, Response};

pub struct VerificationApi {
    client: HttpClient,
}

impl VerificationApi {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    pub async fn request(&self, plus_info: Option<&str>) -> Response {
        self.request_raw(json!({
            "certMethod": "M",
            "plusInfo": plus_info,
        }))
        .await
    }

    pub async fn request_raw(&self, body: Value) -> Response {
        self.client.post("/api/kmc/v1/request", body).await
    }

    pub async fn callback(&self, api_token: Option<&str>, cert_num: Option<&str>) -> Response {
        let mut form = Vec::new();
        if let Some(api_token) = api_token {
            form.push(("apiToken", api_token));
        }
        if let Some(cert_num) = cert_num {
            form.push(("certNum", cert_num));
        }

        self.client.post_form("/api/kmc/v1/callback", &form).await
    }

    pub async fn result(
        &self,
        cert_num: &str,
        rec_cert: &str,
        result_code: Option<&str>,
    ) -> Response {
        self.client
            .post(
                "/api/kmc/v1/result",
                json!({
                    "certNum": cert_num,
                    "recCert": rec_cert,
                    "resultCode": result_code,
                }),
            )
            .await
    }
}
