use crate::utils::context::TestContext;

#[tokio::test]
async fn test_health_check() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context.api.other.health().await;

    // THEN
    assert_eq!(resp.status(), 204);
}
