//! `/upload` 送信の統合テスト
//!
//! wiremockのモックサーバーに対してターミナル版の画面を動かし、
//! 送信内容と結果の反映を確認する

use brand_onboarding::client::{LocalFile, UploadClient};
use brand_onboarding::config::Config;
use brand_onboarding::error::OnboardError;
use brand_onboarding::session::{hidden_progress, OnboardingSession};
use brand_onboarding::upload::run_upload;
use brand_onboarding_common::{ErrorKind, OutcomeKind, UploadError, TEMPLATE_CSV};
use serde_json::json;
use std::path::Path;
use std::time::Duration;
use tempfile::{tempdir, TempDir};
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn write_file(dir: &TempDir, name: &str, contents: &str) -> LocalFile {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("テストファイル作成失敗");
    LocalFile::new(path)
}

fn client_for(server: &MockServer) -> UploadClient {
    UploadClient::new(&server.uri(), &Config::default()).expect("client build")
}

async fn submit_file(client: &UploadClient, file: LocalFile) -> OnboardingSession {
    let mut session = OnboardingSession::new();
    session.select_file(Some(file));
    session.submit(client, hidden_progress()).await;
    session
}

#[tokio::test]
async fn upload_success_renders_rows_in_server_order() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .and(body_string_contains("name=\"file\""))
        .and(body_string_contains("filename=\"brands.csv\""))
        .and(body_string_contains("Test Brand 2,Brand Pitt LLC"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"brand": "Acme", "result": {"id": 1}},
            {"brand": "Beta", "error": "bad email"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempdir().unwrap();
    let file = write_file(&dir, "brands.csv", TEMPLATE_CSV);
    let session = submit_file(&client_for(&server), file).await;
    let state = session.state();

    assert!(!state.is_loading());
    assert_eq!(state.message.as_deref(), Some("File processed successfully."));
    let rows = state.results().expect("結果がない");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].kind, OutcomeKind::Success { result: Some(json!({"id": 1})) });
    assert_eq!(rows[1].kind, OutcomeKind::Error { message: "bad email".into() });
}

#[tokio::test]
async fn upload_server_error_shows_message_without_results() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"error": "invalid CSV"})))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempdir().unwrap();
    let file = write_file(&dir, "brands.csv", "brand_name\n");
    let session = submit_file(&client_for(&server), file).await;
    let state = session.state();

    assert!(!state.is_loading());
    assert_eq!(state.error(), Some(&UploadError::Server("invalid CSV".into())));
    assert!(state.results().is_none());
}

#[tokio::test]
async fn upload_server_error_with_empty_body_uses_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempdir().unwrap();
    let file = write_file(&dir, "brands.csv", TEMPLATE_CSV);
    let session = submit_file(&client_for(&server), file).await;

    let err = session.state().error().expect("エラーがない");
    assert_eq!(err.kind(), ErrorKind::ServerReported);
    assert_eq!(err.to_string(), "Server error");
}

#[tokio::test]
async fn non_csv_file_never_reaches_server() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let dir = tempdir().unwrap();
    let file = write_file(&dir, "data.txt", TEMPLATE_CSV);
    let session = submit_file(&client_for(&server), file).await;

    let err = session.state().error().expect("エラーがない");
    assert_eq!(err.kind(), ErrorKind::UserInput);
    assert!(!session.state().is_loading());
}

#[tokio::test]
async fn submit_without_file_never_reaches_server() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut session = OnboardingSession::new();
    session.submit(&client_for(&server), hidden_progress()).await;

    assert_eq!(session.state().message.as_deref(), Some("Please select a CSV file."));
    assert!(session.state().error().is_none());
}

#[tokio::test]
async fn connection_failure_is_transport_error() {
    // 使われていないポート
    let client = UploadClient::new("http://127.0.0.1:1", &Config::default()).unwrap();

    let dir = tempdir().unwrap();
    let file = write_file(&dir, "brands.csv", TEMPLATE_CSV);
    let session = submit_file(&client, file).await;

    let err = session.state().error().expect("エラーがない");
    assert_eq!(err.kind(), ErrorKind::Transport);
    assert!(!err.to_string().is_empty());
    assert!(!session.state().is_loading());
}

#[tokio::test]
async fn configured_timeout_settles_as_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let config = Config {
        timeout_seconds: Some(1),
        ..Config::default()
    };
    let client = UploadClient::new(&server.uri(), &config).unwrap();

    let dir = tempdir().unwrap();
    let file = write_file(&dir, "brands.csv", TEMPLATE_CSV);
    let session = submit_file(&client, file).await;

    let err = session.state().error().expect("エラーがない");
    assert_eq!(err.kind(), ErrorKind::Transport);
}

#[tokio::test]
async fn missing_local_file_is_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let file = LocalFile::new(Path::new("/nonexistent/dir/brands.csv"));
    let session = submit_file(&client_for(&server), file).await;

    assert_eq!(session.state().error().map(|e| e.kind()), Some(ErrorKind::Transport));
}

#[tokio::test]
async fn upload_command_saves_raw_outcomes_as_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"brand": "Acme", "result": {"id": 1}},
            {"brand": "Beta", "error": "bad email"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempdir().unwrap();
    let file = write_file(&dir, "brands.csv", TEMPLATE_CSV);
    let output = dir.path().join("results.json");
    let mut screen = Vec::new();

    let report = run_upload(
        &client_for(&server),
        file.path(),
        Some(output.as_path()),
        hidden_progress(),
        &mut screen,
    )
    .await
    .expect("アップロード失敗");

    assert_eq!(report.saved_to.as_deref(), Some(output.as_path()));
    assert_eq!(report.state.results().map(|rows| rows.len()), Some(2));

    let saved: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(
        saved,
        json!([
            {"brand": "Acme", "result": {"id": 1}},
            {"brand": "Beta", "error": "bad email"}
        ])
    );

    let screen = String::from_utf8(screen).unwrap();
    assert!(screen.contains("File processed successfully."));
    assert!(screen.contains("Processing Results"));
}

#[tokio::test]
async fn upload_command_server_error_is_upload_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"error": "invalid CSV"})))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempdir().unwrap();
    let file = write_file(&dir, "brands.csv", TEMPLATE_CSV);
    let output = dir.path().join("results.json");
    let mut screen = Vec::new();

    let err = run_upload(
        &client_for(&server),
        file.path(),
        Some(output.as_path()),
        hidden_progress(),
        &mut screen,
    )
    .await
    .unwrap_err();

    assert!(matches!(err, OnboardError::Upload(UploadError::Server(ref m)) if m == "invalid CSV"));
    assert_ne!(err.exit_code(), 0);
    assert!(!output.exists());
    assert!(String::from_utf8(screen).unwrap().contains("✖ invalid CSV"));
}

#[tokio::test]
async fn upload_command_missing_path_is_file_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope.csv");
    let mut screen = Vec::new();

    let err = run_upload(&client_for(&server), &missing, None, hidden_progress(), &mut screen)
        .await
        .unwrap_err();

    assert!(matches!(err, OnboardError::FileNotFound(_)));
    assert!(screen.is_empty());
}
