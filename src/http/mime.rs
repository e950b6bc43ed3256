//! Content type lookup by file extension.

const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

const MIME_TYPES: &[(&str, &str)] = &[
    ("txt", "text/plain"),
    ("html", "text/html"),
    ("htm", "text/html"),
    ("css", "text/css"),
    ("js", "application/javascript"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("gif", "image/gif"),
    ("ico", "image/x-icon"),
];

/// Returns the MIME type for `path` based on the text after its last dot.
///
/// Matching ignores ASCII case; unknown or missing extensions map to
/// `application/octet-stream`.
///
/// ```
/// # use fileserve::http::mime::content_type_for;
/// assert_eq!(content_type_for("docs/index.HTML"), "text/html");
/// assert_eq!(content_type_for("archive.tar.gz"), "application/octet-stream");
/// ```
pub fn content_type_for(path: &str) -> &'static str {
    let file_name = path.rsplit(['/', '\\']).next().unwrap_or(path);

    let Some((_, ext)) = file_name.rsplit_once('.') else {
        return DEFAULT_CONTENT_TYPE;
    };

    MIME_TYPES
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(ext))
        .map(|(_, mime)| *mime)
        .unwrap_or(DEFAULT_CONTENT_TYPE)
}
