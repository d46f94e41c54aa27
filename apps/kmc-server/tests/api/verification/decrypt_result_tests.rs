use kmc_crypto::hash::kmc_hash_hex;

use crate::fixtures::{encrypt, rec_cert, result_record};
use crate::utils::context::TestContext;

async fn requested_cert_num(context: &TestContext) -> String {
    let body = context
        .api
        .verification
        .request(Some("extra"))
        .await
        .json_value()
        .await;
    body["certNum"].as_str().unwrap().to_owned()
}

async fn validated_cert_num(context: &TestContext) -> String {
    let cert_num = requested_cert_num(context).await;
    let resp = context
        .api
        .verification
        .callback(Some("api-token"), Some(&cert_num))
        .await;
    assert_eq!(resp.status(), 200);
    cert_num
}

#[tokio::test]
async fn test_decrypt_result_returns_identity() {
    // GIVEN
    let context = TestContext::new().await;
    let cert_num = validated_cert_num(&context).await;
    let rec_cert = rec_cert(&result_record(&cert_num, "Y"));

    // WHEN
    let resp = context
        .api
        .verification
        .result(&cert_num, &rec_cert, Some("APR01"))
        .await;

    // THEN
    assert_eq!(resp.status(), 200);
    let body = resp.json_value().await;
    assert_eq!(body["certNum"], cert_num.as_str());
    assert_eq!(body["name"], "홍길동");
    assert_eq!(body["ci"], "CI-VALUE-0123456789");
    assert_eq!(body["di"], "DI-VALUE-0123456789");
    assert_eq!(body["phoneNo"], "01012345678");
    assert_eq!(body["phoneCorp"], "KTF");
    assert_eq!(body["result"], "Y");
    assert_eq!(body["plusInfo"], "extra");
}

#[tokio::test]
async fn test_decrypt_result_rejects_never_issued_cert_num() {
    // GIVEN
    let context = TestContext::new().await;
    let cert_num = "20251224120000123456";
    let rec_cert = rec_cert(&result_record(cert_num, "Y"));

    // WHEN
    let resp = context
        .api
        .verification
        .result(cert_num, &rec_cert, Some("APR01"))
        .await;

    // THEN
    assert_eq!(resp.status(), 401);
    assert_eq!(resp.json_value().await["code"], "KMC_0007");
}

#[tokio::test]
async fn test_decrypt_result_rejects_cert_num_without_callback() {
    // GIVEN
    let context = TestContext::new().await;
    let cert_num = requested_cert_num(&context).await;
    let rec_cert = rec_cert(&result_record(&cert_num, "Y"));

    // WHEN
    let resp = context
        .api
        .verification
        .result(&cert_num, &rec_cert, None)
        .await;

    // THEN
    assert_eq!(resp.status(), 401);
    assert_eq!(resp.json_value().await["code"], "KMC_0017");
}

#[tokio::test]
async fn test_decrypt_result_rejects_result_for_other_cert_num() {
    // GIVEN
    let context = TestContext::new().await;
    let cert_num = validated_cert_num(&context).await;
    let rec_cert = rec_cert(&result_record("20251224120000999999", "Y"));

    // WHEN
    let resp = context
        .api
        .verification
        .result(&cert_num, &rec_cert, None)
        .await;

    // THEN
    assert_eq!(resp.status(), 401);
    assert_eq!(resp.json_value().await["code"], "KMC_0018");
}

#[tokio::test]
async fn test_decrypt_result_rejects_forged_digest() {
    // GIVEN
    let context = TestContext::new().await;
    let cert_num = validated_cert_num(&context).await;
    let payload = encrypt(&result_record(&cert_num, "Y"));
    let forged = encrypt(&format!(
        "{payload}/{}/0000000000000000",
        kmc_hash_hex(b"forged")
    ));

    // WHEN
    let resp = context
        .api
        .verification
        .result(&cert_num, &forged, None)
        .await;

    // THEN
    assert_eq!(resp.status(), 401);
    assert_eq!(resp.json_value().await["code"], "KMC_0011");
}

#[tokio::test]
async fn test_decrypt_result_rejects_gateway_error_code() {
    // GIVEN
    let context = TestContext::new().await;
    let cert_num = validated_cert_num(&context).await;
    let rec_cert = rec_cert(&result_record(&cert_num, "Y"));

    // WHEN
    let resp = context
        .api
        .verification
        .result(&cert_num, &rec_cert, Some("APR03"))
        .await;

    // THEN
    assert_eq!(resp.status(), 400);
    assert_eq!(resp.json_value().await["code"], "KMC_0013");
}

#[tokio::test]
async fn test_decrypt_result_rejects_non_hex_token() {
    // GIVEN
    let context = TestContext::new().await;
    let cert_num = validated_cert_num(&context).await;

    // WHEN
    let resp = context
        .api
        .verification
        .result(&cert_num, "not-hex", None)
        .await;

    // THEN
    assert_eq!(resp.status(), 400);
    assert_eq!(resp.json_value().await["code"], "KMC_0005");
}

#[tokio::test]
async fn test_decrypt_result_rejects_unverified_identity() {
    // GIVEN
    let context = TestContext::new().await;
    let cert_num = validated_cert_num(&context).await;
    let rec_cert = rec_cert(&result_record(&cert_num, "N"));

    // WHEN
    let resp = context
        .api
        .verification
        .result(&cert_num, &rec_cert, None)
        .await;

    // THEN
    assert_eq!(resp.status(), 400);
    assert_eq!(resp.json_value().await["code"], "KMC_0014");
}
