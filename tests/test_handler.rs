//! Tests for the filesystem handler, bypassing the wire format.

mod common;

use common::scratch_dir;
use fileserve::http::request::{Method, RequestBuilder};
use fileserve::http::response::StatusCode;
use fileserve::resource::handler::ResourceHandler;

#[tokio::test]
async fn test_get_reads_file() {
    let root = scratch_dir("handler-get");
    std::fs::write(root.join("logo.png"), [0x89, b'P', b'N', b'G']).unwrap();
    let handler = ResourceHandler::new(&root);

    let request = RequestBuilder::new().method(Method::GET).path("/logo.png").build().unwrap();
    let response = handler.handle(&request, "logo.png").await;

    assert_eq!(response.status, StatusCode::Ok);
    assert_eq!(response.header("Content-Type"), Some("image/png"));
    assert_eq!(response.body, vec![0x89, b'P', b'N', b'G']);
    assert!(response.header("Last-Modified").is_some());
}

#[tokio::test]
async fn test_head_does_not_load_body() {
    let root = scratch_dir("handler-head");
    std::fs::write(root.join("big.gif"), vec![0u8; 4096]).unwrap();
    let handler = ResourceHandler::new(&root);

    let request = RequestBuilder::new().method(Method::HEAD).path("/big.gif").build().unwrap();
    let response = handler.handle(&request, "big.gif").await;

    assert_eq!(response.status, StatusCode::Ok);
    assert!(response.body.is_empty());
    assert_eq!(response.header("Content-Length"), Some("4096"));
    assert_eq!(response.header("Content-Type"), Some("image/gif"));
}

#[tokio::test]
async fn test_get_missing_is_not_found() {
    let root = scratch_dir("handler-missing");
    let handler = ResourceHandler::new(&root);

    let request = RequestBuilder::new().method(Method::GET).path("/gone.js").build().unwrap();
    let response = handler.handle(&request, "gone.js").await;

    assert_eq!(response.status, StatusCode::NotFound);
    assert_eq!(response.header("Content-Type"), Some("text/html"));
}

#[tokio::test]
async fn test_post_writes_body() {
    let root = scratch_dir("handler-post");
    let handler = ResourceHandler::new(&root);

    let request = RequestBuilder::new()
        .method(Method::POST)
        .path("/data.txt")
        .version("HTTP/1.1")
        .header("Content-Length", "4")
        .body(b"data".to_vec())
        .build()
        .unwrap();
    let response = handler.handle(&request, "data.txt").await;

    assert_eq!(response.status, StatusCode::Created);
    assert_eq!(response.version, "HTTP/1.1");
    assert_eq!(response.header("Location"), Some("/data.txt"));
    assert_eq!(std::fs::read(root.join("data.txt")).unwrap(), b"data");
}

#[tokio::test]
async fn test_post_to_directory_is_forbidden() {
    let root = scratch_dir("handler-post-dir");
    std::fs::create_dir(root.join("folder")).unwrap();
    let handler = ResourceHandler::new(&root);

    let request = RequestBuilder::new()
        .method(Method::POST)
        .path("/folder")
        .body(b"x".to_vec())
        .build()
        .unwrap();
    let response = handler.handle(&request, "folder").await;

    assert_eq!(response.status, StatusCode::Forbidden);
    assert!(root.join("folder").is_dir());
}
