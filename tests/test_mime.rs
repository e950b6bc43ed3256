use fileserve::http::mime::content_type_for;

#[test]
fn test_known_extensions() {
    let cases = [
        ("a.txt", "text/plain"),
        ("a.html", "text/html"),
        ("a.htm", "text/html"),
        ("a.css", "text/css"),
        ("a.js", "application/javascript"),
        ("a.jpg", "image/jpeg"),
        ("a.jpeg", "image/jpeg"),
        ("a.png", "image/png"),
        ("a.gif", "image/gif"),
        ("favicon.ico", "image/x-icon"),
    ];

    for (path, expected) in cases {
        assert_eq!(content_type_for(path), expected, "path {:?}", path);
    }
}

#[test]
fn test_extension_case_is_ignored() {
    assert_eq!(content_type_for("PHOTO.JPG"), "image/jpeg");
}

#[test]
fn test_unknown_or_missing_extension() {
    assert_eq!(content_type_for("test.bin"), "application/octet-stream");
    assert_eq!(content_type_for("Makefile"), "application/octet-stream");
    assert_eq!(content_type_for("file."), "application/octet-stream");
}

#[test]
fn test_dot_in_directory_name_is_not_an_extension() {
    assert_eq!(content_type_for("v1.txt/data"), "application/octet-stream");
    assert_eq!(content_type_for("site.d/index.html"), "text/html");
}
