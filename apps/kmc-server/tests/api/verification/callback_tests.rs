use crate::utils::context::TestContext;

async fn requested_cert_num(context: &TestContext) -> String {
    let body = context
        .api
        .verification
        .request(Some("order-42"))
        .await
        .json_value()
        .await;
    body["certNum"].as_str().unwrap().to_owned()
}

#[tokio::test]
async fn test_callback_accepts_pending_cert_num() {
    // GIVEN
    let context = TestContext::new().await;
    let cert_num = requested_cert_num(&context).await;

    // WHEN
    let resp = context
        .api
        .verification
        .callback(Some("api-token"), Some(&cert_num))
        .await;

    // THEN
    assert_eq!(resp.status(), 200);
    let body = resp.json_value().await;
    assert_eq!(body["apiToken"], "api-token");
    assert_eq!(body["certNum"], cert_num.as_str());
    assert_eq!(body["plusInfo"], "order-42");
}

#[tokio::test]
async fn test_callback_rejects_replayed_cert_num() {
    // GIVEN
    let context = TestContext::new().await;
    let cert_num = requested_cert_num(&context).await;
    let first = context
        .api
        .verification
        .callback(Some("api-token"), Some(&cert_num))
        .await;
    assert_eq!(first.status(), 200);

    // WHEN
    let resp = context
        .api
        .verification
        .callback(Some("api-token"), Some(&cert_num))
        .await;

    // THEN
    assert_eq!(resp.status(), 401);
    assert_eq!(resp.json_value().await["code"], "KMC_0008");
}

#[tokio::test]
async fn test_callback_rejects_unknown_cert_num() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context
        .api
        .verification
        .callback(Some("api-token"), Some("20251224120000000000"))
        .await;

    // THEN
    assert_eq!(resp.status(), 401);
    assert_eq!(resp.json_value().await["code"], "KMC_0007");
}

#[tokio::test]
async fn test_callback_rejects_missing_api_token() {
    // GIVEN
    let context = TestContext::new().await;
    let cert_num = requested_cert_num(&context).await;

    // WHEN
    let resp = context
        .api
        .verification
        .callback(None, Some(&cert_num))
        .await;

    // THEN
    assert_eq!(resp.status(), 400);
    let body = resp.json_value().await;
    assert_eq!(body["code"], "KMC_0006");
    assert!(body["cause"]["message"].as_str().unwrap().contains("apiToken"));
}

#[tokio::test]
async fn test_callback_rejects_missing_cert_num() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context.api.verification.callback(Some("api-token"), None).await;

    // THEN
    assert_eq!(resp.status(), 400);
    assert_eq!(resp.json_value().await["code"], "KMC_0006");
}
