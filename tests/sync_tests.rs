use figma_mcp::{fetch_library, sync_design_system, Config, FigmaClient, FigmaError, Operation};
use serde_json::json;
use wiremock::matchers::{any, body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(mock: &MockServer, file_keys: Option<&str>) -> FigmaClient {
    let config = Config {
        file_keys: file_keys.map(String::from),
        token: Some("figd_test_token".to_string()),
        api_base_url: mock.uri(),
        timeout: None,
    };
    FigmaClient::new(&config).unwrap()
}

async fn mount_library(mock: &MockServer, styles_status: u16) {
    Mock::given(method("GET"))
        .and(path("/files/ABC123/components"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meta": {"components": [
                {"key": "1:2", "name": "Button"},
                {"key": "1:3", "name": "Card"}
            ]}
        })))
        .mount(mock)
        .await;

    Mock::given(method("GET"))
        .and(path("/files/ABC123/variables/local"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meta": {"variables": [{"key": "g1", "name": "Spacing", "variables": []}]}
        })))
        .mount(mock)
        .await;

    let styles = if styles_status == 200 {
        ResponseTemplate::new(200).set_body_json(json!({
            "meta": {"styles": [{"key": "s1", "name": "Body", "styleType": "TEXT"}]}
        }))
    } else {
        ResponseTemplate::new(styles_status)
    };
    Mock::given(method("GET"))
        .and(path("/files/ABC123/styles"))
        .respond_with(styles)
        .mount(mock)
        .await;
}

#[tokio::test]
async fn test_fetch_library_success() {
    let mock = MockServer::start().await;
    mount_library(&mock, 200).await;

    let library = fetch_library(&client(&mock, None), "ABC123").await.unwrap();
    assert_eq!(library.components.len(), 2);
    assert_eq!(library.variable_groups[0].name, "Spacing");
    assert_eq!(library.styles[0].name, "Body");
}

#[tokio::test]
async fn test_fetch_library_fails_as_a_whole() {
    let mock = MockServer::start().await;
    mount_library(&mock, 500).await;

    let err = fetch_library(&client(&mock, None), "ABC123").await.unwrap_err();
    assert_eq!(err.operation(), Some(Operation::ListStyles));
    assert_eq!(err.status(), Some(500));
    assert!(err.to_string().contains("Internal Server Error"));
}

#[tokio::test]
async fn test_sync_design_system() {
    let mock = MockServer::start().await;
    mount_library(&mock, 200).await;

    Mock::given(method("POST"))
        .and(path("/images/ABC123"))
        .and(body_json(json!({"ids": ["1:2", "1:3"], "format": "svg", "scale": 2})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "images": {"1:2": "https://x/button.svg", "1:3": "https://x/card.svg"}
        })))
        .expect(1)
        .mount(&mock)
        .await;

    let snapshot = sync_design_system(&client(&mock, Some("ABC123")), "ABC123")
        .await
        .unwrap();

    assert_eq!(snapshot.file_key, "ABC123");
    assert_eq!(snapshot.components.len(), 2);
    assert_eq!(snapshot.variable_groups.len(), 1);
    assert_eq!(snapshot.styles.len(), 1);
    assert_eq!(snapshot.images["1:3"], "https://x/card.svg");

    let json = serde_json::to_value(&snapshot).unwrap();
    assert!(json.get("variableGroups").is_some());
}

#[tokio::test]
async fn test_sync_stops_before_images_on_failure() {
    let mock = MockServer::start().await;
    mount_library(&mock, 404).await;

    Mock::given(method("POST"))
        .and(path("/images/ABC123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"images": {}})))
        .expect(0)
        .mount(&mock)
        .await;

    let err = sync_design_system(&client(&mock, Some("ABC123")), "ABC123")
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn test_sync_requires_file_key_setting() {
    let mock = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock)
        .await;

    let err = sync_design_system(&client(&mock, None), "ABC123")
        .await
        .unwrap_err();
    assert!(matches!(err, FigmaError::MissingConfiguration("FIGMA_FILE_KEYS")));
}
