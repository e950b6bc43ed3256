use fileserve::http::request::{MAX_HEADERS, Method, Request, RequestBuilder};

fn request_with(headers: Vec<(&str, &str)>) -> Request {
    Request {
        method: Method::POST,
        path: "/upload.txt".to_string(),
        version: "HTTP/1.0".to_string(),
        headers: headers
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
        body: None,
    }
}

#[test]
fn test_request_header_lookup_ignores_case() {
    let req = request_with(vec![("Host", "example.com"), ("content-type", "text/plain")]);

    assert_eq!(req.header("host"), Some("example.com"));
    assert_eq!(req.header("Content-Type"), Some("text/plain"));
    assert_eq!(req.header("Missing"), None);
}

#[test]
fn test_request_content_length_parsing() {
    let req = request_with(vec![("CONTENT-LENGTH", "42")]);

    assert_eq!(req.content_length(), Some(42));
}

#[test]
fn test_request_content_length_zero() {
    let req = request_with(vec![("Content-Length", "0")]);

    assert_eq!(req.content_length(), Some(0));
}

#[test]
fn test_request_content_length_missing() {
    let req = request_with(vec![]);

    assert_eq!(req.content_length(), None);
}

#[test]
fn test_request_content_length_invalid() {
    for value in ["not-a-number", "-5", "", "1.5"] {
        let req = request_with(vec![("Content-Length", value)]);
        assert_eq!(req.content_length(), None, "value {:?}", value);
    }
}

#[test]
fn test_request_content_length_uses_first_header() {
    let req = request_with(vec![("Content-Length", "abc"), ("Content-Length", "4")]);

    assert_eq!(req.content_length(), None);
}

#[test]
fn test_request_builder_defaults() {
    let req = RequestBuilder::new()
        .method(Method::GET)
        .path("/index.html")
        .build()
        .unwrap();

    assert_eq!(req.version, "HTTP/1.0");
    assert!(req.headers.is_empty());
    assert!(req.body.is_none());
    assert!(!req.is_head());
}

#[test]
fn test_request_builder_requires_method_and_path() {
    assert!(RequestBuilder::new().path("/").build().is_err());
    assert!(RequestBuilder::new().method(Method::GET).build().is_err());
}

#[test]
fn test_request_builder_caps_headers() {
    let mut builder = RequestBuilder::new().method(Method::GET).path("/");
    for i in 0..MAX_HEADERS + 5 {
        builder = builder.header(format!("X-{}", i), "v");
    }

    assert_eq!(builder.build().unwrap().headers.len(), MAX_HEADERS);
}

#[test]
fn test_method_round_trip() {
    for method in [Method::GET, Method::HEAD, Method::POST] {
        assert_eq!(Method::from_str(method.as_str()), Some(method));
    }
    assert_eq!(Method::from_str("PATCH"), None);
}
