use crate::http::request::{Method, Request, RequestBuilder};
use crate::http::response::StatusCode;

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    InvalidRequest,
    UnsupportedVersion,
    UnsupportedMethod,
    Incomplete,
}

impl ParseError {
    pub fn status(&self) -> StatusCode {
        match self {
            ParseError::UnsupportedMethod => StatusCode::NotImplemented,
            ParseError::InvalidRequest
            | ParseError::UnsupportedVersion
            | ParseError::Incomplete => StatusCode::BadRequest,
        }
    }
}

/// Parses a request head terminated by `\r\n\r\n`.
///
/// Returns the request together with the number of bytes consumed, so any
/// bytes after that offset are the start of the body.
pub fn parse_http_request(buf: &[u8]) -> Result<(Request, usize), ParseError> {
    let headers_end = find_headers_end(buf).ok_or(ParseError::Incomplete)?;
    let request = parse_request_head(&buf[..headers_end])?;

    Ok((request, headers_end + 4))
}

/// Parses a request line followed by header lines, without the terminator.
pub fn parse_request_head(head: &[u8]) -> Result<Request, ParseError> {
    let mut lines = head
        .split(|&b| b == b'\n')
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line));

    // Request line
    let request_line = lines.next().ok_or(ParseError::InvalidRequest)?;
    let request_line = std::str::from_utf8(request_line)
        .map_err(|_| ParseError::InvalidRequest)?;
    let mut parts = request_line.split_ascii_whitespace();

    let method_str = parts.next().ok_or(ParseError::InvalidRequest)?;
    let path = parts.next().ok_or(ParseError::InvalidRequest)?;
    let version = parts.next().ok_or(ParseError::InvalidRequest)?;
    if parts.next().is_some() {
        return Err(ParseError::InvalidRequest);
    }

    if version != "HTTP/1.0" && version != "HTTP/1.1" {
        return Err(ParseError::UnsupportedVersion);
    }

    let method = Method::from_str(method_str).ok_or(ParseError::UnsupportedMethod)?;

    let mut builder = RequestBuilder::new()
        .method(method)
        .path(path)
        .version(version);

    // Headers
    for line in lines {
        let line = String::from_utf8_lossy(line);

        // a line without a colon ends the header section
        let Some((key, value)) = line.split_once(':') else {
            break;
        };

        builder = builder.header(key, value.trim_start_matches([' ', '\t']));
    }

    builder.build().map_err(|_| ParseError::InvalidRequest)
}

/// What can still be read off a request line that failed to parse.
#[derive(Debug, PartialEq, Eq)]
pub struct LineHint {
    /// The method token was exactly `HEAD`
    pub head_only: bool,
    /// Third token of the line, used as the response version
    pub version: Option<String>,
}

/// Recovers the method and version tokens from the first line of `buf`.
pub fn request_line_hint(buf: &[u8]) -> LineHint {
    let line = buf
        .split(|&b| b == b'\n')
        .next()
        .unwrap_or_default();
    let line = String::from_utf8_lossy(line);
    let mut parts = line.split_ascii_whitespace();

    let head_only = parts.next() == Some("HEAD");
    let version = parts.nth(1).map(str::to_string);

    LineHint { head_only, version }
}

pub fn find_headers_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4)
        .position(|w| w == b"\r\n\r\n")
}
