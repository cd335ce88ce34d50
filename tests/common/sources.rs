//! Helpers for serving CSV sources over HTTP and from temporary directories

use std::path::Path;
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Serve `body` as `text/csv` at `route`; requests must ask for CSV
pub async fn mount_csv(server: &MockServer, route: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .and(header("accept", "text/csv"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/csv")
                .set_body_string(body),
        )
        .mount(server)
        .await;
}

/// Answer `route` with a bare status code
pub async fn mount_status(server: &MockServer, route: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// Write `body` into `dir/name` and return its `file://` URL
pub fn write_csv(dir: &TempDir, name: &str, body: &str) -> String {
    let file_path = dir.path().join(name);
    std::fs::write(&file_path, body).unwrap_or_else(|e| panic!("cannot write fixture: {e}"));
    file_url(&file_path)
}

/// `file://` URL for an absolute path
pub fn file_url(file_path: &Path) -> String {
    url::Url::from_file_path(file_path)
        .unwrap_or_else(|()| panic!("not an absolute path: {}", file_path.display()))
        .to_string()
}
