use super::*;

/// Tests the OpenAPI document lists the JSON endpoints.
///
/// Expected: 200 with the Discord and health paths
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let (status, body) = get_json(app(Config::from_test_context(&test)), "/api/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    let paths = body["paths"].as_object().unwrap();
    for path in ["/api/discord/stats", "/api/bot/status", "/api/servers", "/health"] {
        assert!(paths.contains_key(path), "missing {}", path);
    }

    Ok(())
}
