use std::path::PathBuf;

use casedesk_client::{
    FailureKind, GenerateKind, GenerateRequest, GenerateSettings, GeneratedContent, Generator,
    HttpGenerator,
};
use pretty_assertions::assert_eq;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn write_pdf(dir: &tempfile::TempDir, name: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, b"%PDF-1.4\n").expect("write fixture");
    path
}

fn request_for(file_path: PathBuf, name: &str, kind: GenerateKind) -> GenerateRequest {
    GenerateRequest {
        request_id: 1,
        kind,
        file_path,
        file_name: name.to_owned(),
    }
}

fn settings_for(server: &MockServer) -> GenerateSettings {
    GenerateSettings {
        endpoint: format!("{}/api/generate", server.uri()),
    }
}

#[tokio::test]
async fn posts_multipart_and_decodes_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .and(body_string_contains("filename=\"doc.pdf\""))
        .and(body_string_contains("name=\"kind\""))
        .and(body_string_contains("brief"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "title": "T",
            "content": "C",
            "kind": "brief",
        })))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("tempdir");
    let file = write_pdf(&dir, "doc.pdf");
    let generator = HttpGenerator::new(settings_for(&server));

    let content = generator
        .generate(&request_for(file, "doc.pdf", GenerateKind::Brief))
        .await
        .expect("generate ok");

    assert_eq!(
        content,
        GeneratedContent {
            title: "T".to_owned(),
            content: "C".to_owned(),
        }
    );
}

#[tokio::test]
async fn surfaces_backend_detail_on_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(serde_json::json!({"detail": "bad file"})),
        )
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("tempdir");
    let file = write_pdf(&dir, "doc.pdf");
    let generator = HttpGenerator::new(settings_for(&server));

    let err = generator
        .generate(&request_for(file, "doc.pdf", GenerateKind::Outline))
        .await
        .unwrap_err();

    assert_eq!(
        err.kind,
        FailureKind::Backend {
            status: 500,
            detail: Some("bad file".to_owned()),
        }
    );
}

#[tokio::test]
async fn malformed_failure_body_yields_no_detail() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(502).set_body_string("upstream fell over"))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("tempdir");
    let file = write_pdf(&dir, "doc.pdf");
    let generator = HttpGenerator::new(settings_for(&server));

    let err = generator
        .generate(&request_for(file, "doc.pdf", GenerateKind::Brief))
        .await
        .unwrap_err();

    assert_eq!(
        err.kind,
        FailureKind::Backend {
            status: 502,
            detail: None,
        }
    );
}

#[tokio::test]
async fn malformed_success_body_is_a_typed_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("tempdir");
    let file = write_pdf(&dir, "doc.pdf");
    let generator = HttpGenerator::new(settings_for(&server));

    let err = generator
        .generate(&request_for(file, "doc.pdf", GenerateKind::Brief))
        .await
        .unwrap_err();

    assert_eq!(err.kind, FailureKind::InvalidResponse);
}

#[tokio::test]
async fn missing_file_fails_before_any_request_is_sent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let generator = HttpGenerator::new(settings_for(&server));
    let missing = PathBuf::from("/library/vanished.pdf");

    let err = generator
        .generate(&request_for(missing, "vanished.pdf", GenerateKind::Brief))
        .await
        .unwrap_err();

    assert_eq!(err.kind, FailureKind::UnreadableFile);
}

#[tokio::test]
async fn unreachable_endpoint_is_a_network_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let file = write_pdf(&dir, "doc.pdf");
    // Nothing listens on the discard port.
    let generator = HttpGenerator::new(GenerateSettings {
        endpoint: "http://127.0.0.1:9/api/generate".to_owned(),
    });

    let err = generator
        .generate(&request_for(file, "doc.pdf", GenerateKind::Brief))
        .await
        .unwrap_err();

    assert_eq!(err.kind, FailureKind::Network);
}
