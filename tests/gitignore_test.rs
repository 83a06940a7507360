use std::fs;
use std::net::TcpListener;
use std::path::PathBuf;

use tempfile::TempDir;
use vtes::gitignore::fetch_template;
use vtes::VtesError;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Run the blocking fetch off the runtime thread.
async fn fetch(index: String, name: &'static str, dest: PathBuf) -> vtes::Result<()> {
    tokio::task::spawn_blocking(move || fetch_template(&index, name, &dest))
        .await
        .expect("fetch task panicked")
}

#[tokio::test(flavor = "multi_thread")]
async fn test_fetch_writes_body_verbatim() {
    let server = MockServer::start().await;
    let body = "/target\n**/*.rs.bk\nCargo.lock\n";
    Mock::given(method("GET"))
        .and(path("/Rust.gitignore"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let dest = dir.path().join(".gitignore");

    fetch(server.uri(), "Rust", dest.clone()).await.unwrap();

    assert_eq!(fs::read_to_string(&dest).unwrap(), body);
    server.verify().await;
}

#[tokio::test(flavor = "multi_thread")]
async fn test_fetch_not_found_is_error_and_writes_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/NoSuchTemplate.gitignore"))
        .respond_with(ResponseTemplate::new(404).set_body_string("404: Not Found"))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let dest = dir.path().join(".gitignore");

    let err = fetch(server.uri(), "NoSuchTemplate", dest.clone())
        .await
        .unwrap_err();

    assert!(matches!(err, VtesError::TemplateFetch { ref name, .. } if name == "NoSuchTemplate"));
    assert!(!dest.exists());
    server.verify().await;
}

#[tokio::test(flavor = "multi_thread")]
async fn test_index_url_trailing_slash() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/Go.gitignore"))
        .respond_with(ResponseTemplate::new(200).set_body_string("/bin\n"))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let dest = dir.path().join(".gitignore");

    fetch(format!("{}/", server.uri()), "Go", dest.clone())
        .await
        .unwrap();

    assert_eq!(fs::read_to_string(&dest).unwrap(), "/bin\n");
}

#[test]
fn test_fetch_unreachable_host_is_error() {
    // Bind and release a port so nothing is listening on it.
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);
    let dir = TempDir::new().unwrap();

    let err = fetch_template(&url, "Go", &dir.path().join(".gitignore")).unwrap_err();
    assert!(matches!(err, VtesError::TemplateFetch { .. }));
}
