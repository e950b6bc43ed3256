use std::time::SystemTime;

/// Value of the `Server` header.
pub const SERVER_NAME: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Version used when the request never got far enough to name a usable one.
pub const DEFAULT_VERSION: &str = "HTTP/1.0";

/// HTTP status codes the server knows how to name.
///
/// Not every code is produced by the request pipeline; the table mirrors the
/// HTTP/1.0 status set plus 411 and 431.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 201 Created
    Created,
    /// 202 Accepted
    Accepted,
    /// 204 No Content
    NoContent,
    /// 300 Multiple Choices
    MultipleChoices,
    /// 301 Moved Permanently
    MovedPermanently,
    /// 302 Moved Temporarily
    MovedTemporarily,
    /// 303 See Other
    SeeOther,
    /// 304 Not Modified
    NotModified,
    /// 400 Bad Request
    BadRequest,
    /// 401 Unauthorized
    Unauthorized,
    /// 403 Forbidden
    Forbidden,
    /// 404 Not Found
    NotFound,
    /// 411 Length Required
    LengthRequired,
    /// 431 Request Header Fields Too Large
    RequestHeaderFieldsTooLarge,
    /// 500 Internal Server Error
    InternalServerError,
    /// 501 Not Implemented
    NotImplemented,
    /// 502 Bad Gateway
    BadGateway,
    /// 503 Service Unavailable
    ServiceUnavailable,
}

const ALL_STATUS_CODES: [StatusCode; 19] = [
    StatusCode::Ok,
    StatusCode::Created,
    StatusCode::Accepted,
    StatusCode::NoContent,
    StatusCode::MultipleChoices,
    StatusCode::MovedPermanently,
    StatusCode::MovedTemporarily,
    StatusCode::SeeOther,
    StatusCode::NotModified,
    StatusCode::BadRequest,
    StatusCode::Unauthorized,
    StatusCode::Forbidden,
    StatusCode::NotFound,
    StatusCode::LengthRequired,
    StatusCode::RequestHeaderFieldsTooLarge,
    StatusCode::InternalServerError,
    StatusCode::NotImplemented,
    StatusCode::BadGateway,
    StatusCode::ServiceUnavailable,
];

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use fileserve::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::LengthRequired.as_u16(), 411);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::Created => 201,
            StatusCode::Accepted => 202,
            StatusCode::NoContent => 204,
            StatusCode::MultipleChoices => 300,
            StatusCode::MovedPermanently => 301,
            StatusCode::MovedTemporarily => 302,
            StatusCode::SeeOther => 303,
            StatusCode::NotModified => 304,
            StatusCode::BadRequest => 400,
            StatusCode::Unauthorized => 401,
            StatusCode::Forbidden => 403,
            StatusCode::NotFound => 404,
            StatusCode::LengthRequired => 411,
            StatusCode::RequestHeaderFieldsTooLarge => 431,
            StatusCode::InternalServerError => 500,
            StatusCode::NotImplemented => 501,
            StatusCode::BadGateway => 502,
            StatusCode::ServiceUnavailable => 503,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use fileserve::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    /// assert_eq!(StatusCode::NotImplemented.reason_phrase(), "Not Implemented");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::Created => "Created",
            StatusCode::Accepted => "Accepted",
            StatusCode::NoContent => "No Content",
            StatusCode::MultipleChoices => "Multiple Choices",
            StatusCode::MovedPermanently => "Moved Permanently",
            StatusCode::MovedTemporarily => "Moved Temporarily",
            StatusCode::SeeOther => "See Other",
            StatusCode::NotModified => "Not Modified",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::Unauthorized => "Unauthorized",
            StatusCode::Forbidden => "Forbidden",
            StatusCode::NotFound => "Not Found",
            StatusCode::LengthRequired => "Length Required",
            StatusCode::RequestHeaderFieldsTooLarge => "Request Header Fields Too Large",
            StatusCode::InternalServerError => "Internal Server Error",
            StatusCode::NotImplemented => "Not Implemented",
            StatusCode::BadGateway => "Bad Gateway",
            StatusCode::ServiceUnavailable => "Service Unavailable",
        }
    }

    pub fn from_u16(code: u16) -> Option<Self> {
        ALL_STATUS_CODES.into_iter().find(|s| s.as_u16() == code)
    }
}

/// Reason phrase for an arbitrary numeric code, `"Unknown"` outside the table.
pub fn reason_for(code: u16) -> &'static str {
    StatusCode::from_u16(code)
        .map(|s| s.reason_phrase())
        .unwrap_or("Unknown")
}

/// HTML body sent with every 4xx/5xx response.
pub fn error_body(status: StatusCode) -> Vec<u8> {
    format!(
        "<html><body><h1>{} {}</h1></body></html>",
        status.as_u16(),
        status.reason_phrase()
    )
    .into_bytes()
}

pub const CREATED_BODY: &[u8] = b"<html><body><h1>Resource Created</h1></body></html>";

/// Represents a complete HTTP response ready to be sent to a client.
///
/// Headers are kept in transmission order. `Content-Length` always equals the
/// body length, except for HEAD responses, which report the size a GET would
/// have sent while carrying no body.
#[derive(Debug)]
pub struct Response {
    /// Version echoed on the status line
    pub version: String,
    /// The HTTP status code
    pub status: StatusCode,
    /// HTTP headers as name/value pairs, in order
    pub headers: Vec<(String, String)>,
    /// Response body as bytes
    pub body: Vec<u8>,
}

/// Builder for constructing HTTP responses in a fluent style.
///
/// `build` lays the standard headers out in a fixed order: `Date`, `Server`,
/// `Content-Type`, `Content-Length`, `Connection`, then `Last-Modified` and
/// `Location` when set.
///
/// # Example
///
/// ```ignore
/// let response = ResponseBuilder::new(StatusCode::Ok)
///     .content_type("text/plain")
///     .body(b"hi".to_vec())
///     .build();
/// ```
pub struct ResponseBuilder {
    version: String,
    status: StatusCode,
    content_type: &'static str,
    content_length: Option<u64>,
    last_modified: Option<SystemTime>,
    location: Option<String>,
    body: Vec<u8>,
}

impl ResponseBuilder {
    /// Creates a new response builder with the specified status code.
    pub fn new(status: StatusCode) -> Self {
        Self {
            version: DEFAULT_VERSION.to_string(),
            status,
            content_type: "text/html",
            content_length: None,
            last_modified: None,
            location: None,
            body: Vec::new(),
        }
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn content_type(mut self, content_type: &'static str) -> Self {
        self.content_type = content_type;
        self
    }

    /// Overrides the reported length; used for HEAD, where no body is loaded.
    pub fn content_length(mut self, len: u64) -> Self {
        self.content_length = Some(len);
        self
    }

    pub fn last_modified(mut self, modified: SystemTime) -> Self {
        self.last_modified = Some(modified);
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Sets the response body.
    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    /// Builds the final Response.
    pub fn build(self) -> Response {
        let content_length = self
            .content_length
            .unwrap_or(self.body.len() as u64);

        let mut headers = vec![
            ("Date".to_string(), httpdate::fmt_http_date(SystemTime::now())),
            ("Server".to_string(), SERVER_NAME.to_string()),
            ("Content-Type".to_string(), self.content_type.to_string()),
            ("Content-Length".to_string(), content_length.to_string()),
            ("Connection".to_string(), "close".to_string()),
        ];

        if let Some(modified) = self.last_modified {
            headers.push(("Last-Modified".to_string(), httpdate::fmt_http_date(modified)));
        }

        if let Some(location) = self.location {
            headers.push(("Location".to_string(), location));
        }

        Response {
            version: self.version,
            status: self.status,
            headers,
            body: self.body,
        }
    }
}

impl Response {
    /// Creates an error response with the synthesized HTML body.
    pub fn error(status: StatusCode, version: impl Into<String>) -> Self {
        ResponseBuilder::new(status)
            .version(version)
            .body(error_body(status))
            .build()
    }

    /// Looks up a header by name, ignoring ASCII case.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }
}
