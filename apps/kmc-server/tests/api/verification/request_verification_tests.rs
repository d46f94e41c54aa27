use serde_json::json;

use crate::utils::context::TestContext;

#[tokio::test]
async fn test_request_verification_returns_gateway_form() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context.api.verification.request(Some("extra")).await;

    // THEN
    assert_eq!(resp.status(), 200);
    let body = resp.json_value().await;

    assert_eq!(
        body["authUrl"],
        "https://www.kmcert.com/kmcis/web/kmcisReq.jsp"
    );
    let cert_num = body["certNum"].as_str().unwrap();
    assert_eq!(cert_num.len(), 20);
    assert!(cert_num.bytes().all(|b| b.is_ascii_digit()));

    let params = &body["params"];
    let tr_cert = params["tr_cert"].as_str().unwrap();
    assert!(!tr_cert.is_empty());
    assert_eq!(tr_cert.len() % 32, 0);
    assert!(tr_cert.bytes().all(|b| b.is_ascii_hexdigit() && !b.is_ascii_lowercase()));
    assert!(params["tr_url"].as_str().unwrap().ends_with("/api/kmc/v1/callback"));
    assert_eq!(params["tr_ver"], "V2");
    assert!(params.get("tr_add").is_none());
}

#[tokio::test]
async fn test_request_verification_issues_distinct_cert_nums() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let first = context.api.verification.request(None).await.json_value().await;
    let second = context.api.verification.request(None).await.json_value().await;

    // THEN
    assert_ne!(first["certNum"], second["certNum"]);
}

#[tokio::test]
async fn test_request_verification_fails_on_text_outside_euc_kr() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context.api.verification.request(Some("🎉")).await;

    // THEN
    assert_eq!(resp.status(), 400);
    assert_eq!(resp.json_value().await["code"], "KMC_0004");
}

#[tokio::test]
async fn test_request_verification_fails_on_delimiter_in_plus_info() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context.api.verification.request(Some("a/b")).await;

    // THEN
    assert_eq!(resp.status(), 400);
    assert_eq!(resp.json_value().await["code"], "KMC_0003");
}

#[tokio::test]
async fn test_request_verification_rejects_malformed_body() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context
        .api
        .verification
        .request_raw(json!({ "plusInfo": 42 }))
        .await;

    // THEN
    assert_eq!(resp.status(), 400);
    assert_eq!(resp.json_value().await["code"], "KMC_0016");
}
