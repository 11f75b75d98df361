use std::path::{Path, PathBuf};
use std::time::Duration;

use askpdf_engine::{
    FailureKind, QueryAnswer, QueryRequest, ReqwestSubmitter, SubmitSettings, Submitter,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use tempfile::TempDir;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn write_pdf(dir: &Path, name: &str, body: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, body).unwrap();
    path
}

fn submitter_for(server: &MockServer, route: &str) -> ReqwestSubmitter {
    let url = Url::parse(&format!("{}{}", server.uri(), route)).unwrap();
    ReqwestSubmitter::new(SubmitSettings::new(url)).unwrap()
}

#[tokio::test]
async fn posts_files_and_query_as_multipart() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ask"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": "## Findings\n- stage II"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let first = write_pdf(dir.path(), "first.pdf", b"%PDF-1.4 first");
    let second = write_pdf(dir.path(), "second.pdf", b"%PDF-1.4 second");

    let submitter = submitter_for(&server, "/ask");
    let answer = submitter
        .submit(&QueryRequest {
            files: vec![first, second],
            query: "What stage?".to_string(),
        })
        .await
        .expect("answer");
    assert_eq!(
        answer,
        QueryAnswer {
            result: "## Findings\n- stage II".to_string()
        }
    );

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    let content_type = request
        .headers
        .get("content-type")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("multipart/form-data"));

    let body = String::from_utf8_lossy(&request.body);
    assert_eq!(body.matches("name=\"files\"").count(), 2);
    assert_eq!(body.matches("name=\"query\"").count(), 1);
    assert_eq!(body.matches("application/pdf").count(), 2);

    let first_at = body.find("filename=\"first.pdf\"").expect("first part");
    let second_at = body.find("filename=\"second.pdf\"").expect("second part");
    let query_at = body.find("name=\"query\"").expect("query part");
    assert!(first_at < second_at && second_at < query_at);
    assert!(body.contains("%PDF-1.4 first"));
    assert!(body.contains("What stage?"));
}

#[tokio::test]
async fn non_json_body_is_decode_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let file = write_pdf(dir.path(), "a.pdf", b"%PDF");

    let err = submitter_for(&server, "/")
        .submit(&QueryRequest {
            files: vec![file],
            query: "q".to_string(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::Decode);
}

#[tokio::test]
async fn missing_or_non_string_result_is_decode_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "answer": "x" })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/number"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "result": 42 })))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let file = write_pdf(dir.path(), "a.pdf", b"%PDF");
    let request = QueryRequest {
        files: vec![file],
        query: "q".to_string(),
    };

    for route in ["/missing", "/number"] {
        let err = submitter_for(&server, route)
            .submit(&request)
            .await
            .unwrap_err();
        assert_eq!(err.kind, FailureKind::Decode, "route {route}");
    }
}

#[tokio::test]
async fn error_status_with_result_body_is_still_an_answer() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({ "result": "model overloaded" })),
        )
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let file = write_pdf(dir.path(), "a.pdf", b"%PDF");

    let answer = submitter_for(&server, "/")
        .submit(&QueryRequest {
            files: vec![file],
            query: "q".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(answer.result, "model overloaded");
}

#[tokio::test]
async fn unreadable_file_fails_before_any_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "result": "x" })))
        .expect(0)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let present = write_pdf(dir.path(), "a.pdf", b"%PDF");
    let missing = dir.path().join("missing.pdf");

    let err = submitter_for(&server, "/")
        .submit(&QueryRequest {
            files: vec![present, missing.clone()],
            query: "q".to_string(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::ReadFile { path: missing });
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn request_timeout_is_reported_when_configured() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(300))
                .set_body_json(json!({ "result": "late" })),
        )
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let file = write_pdf(dir.path(), "a.pdf", b"%PDF");

    let settings = SubmitSettings {
        request_timeout: Some(Duration::from_millis(50)),
        ..SubmitSettings::new(Url::parse(&server.uri()).unwrap())
    };
    let err = ReqwestSubmitter::new(settings)
        .unwrap()
        .submit(&QueryRequest {
            files: vec![file],
            query: "q".to_string(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn non_http_scheme_is_rejected() {
    let settings = SubmitSettings::new(Url::parse("ftp://backend.example/ask").unwrap());
    let err = ReqwestSubmitter::new(settings)
        .unwrap()
        .submit(&QueryRequest {
            files: Vec::new(),
            query: "q".to_string(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidUrl);
}

#[tokio::test]
async fn refused_connection_is_network_failure() {
    // Bind then drop a listener to get a local port nobody is serving.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let dir = TempDir::new().unwrap();
    let file = write_pdf(dir.path(), "a.pdf", b"%PDF");

    let url = Url::parse(&format!("http://127.0.0.1:{port}/ask")).unwrap();
    let err = ReqwestSubmitter::new(SubmitSettings::new(url))
        .unwrap()
        .submit(&QueryRequest {
            files: vec![file],
            query: "q".to_string(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::Network);
}
