use anyhow::Context;
use bytes::{Bytes, BytesMut};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::http::body::read_body;
use crate::http::parser::{
    find_headers_end, parse_http_request, parse_request_head, request_line_hint,
};
use crate::http::path::resolve_path;
use crate::http::request::{Method, Request};
use crate::http::response::{Response, StatusCode, DEFAULT_VERSION};
use crate::http::writer::ResponseWriter;
use crate::resource::handler::ResourceHandler;

/// Most bytes read while looking for the end of the request head.
pub const MAX_HEAD_BYTES: usize = 8192;

/// Bytes captured from the peer before parsing.
#[derive(Debug)]
pub enum RawRequest {
    /// Everything up to and past `\r\n\r\n`; trailing bytes start the body
    Complete(Bytes),
    /// The peer closed before sending `\r\n\r\n`
    Truncated(Bytes),
    /// The head did not fit in [`MAX_HEAD_BYTES`]
    Oversized(Bytes),
}

pub struct Connection<S> {
    stream: S,
    buffer: BytesMut,
    handler: ResourceHandler,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Processing(RawRequest),
    Writing(ResponseWriter),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, handler: ResourceHandler) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(MAX_HEAD_BYTES),
            handler,
            state: ConnectionState::Reading,
        }
    }

    /// Drives one request through to its response, then closes the stream.
    ///
    /// An `Err` means the transport failed; no response was (fully) sent.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match std::mem::replace(&mut self.state, ConnectionState::Closed) {
                ConnectionState::Reading => {
                    match self.read_request().await? {
                        Some(raw) => {
                            self.state = ConnectionState::Processing(raw);
                        }
                        None => {
                            tracing::debug!("Peer closed before sending a request");
                            self.state = ConnectionState::Closed;
                        }
                    }
                }

                ConnectionState::Processing(raw) => {
                    let (response, head_only) = self.process(raw).await;

                    let writer = ResponseWriter::new(&response, head_only);
                    self.state = ConnectionState::Writing(writer);
                }

                ConnectionState::Writing(mut writer) => {
                    writer
                        .write_to_stream(&mut self.stream)
                        .await
                        .context("Failed to write response")?;

                    // HTTP/1.0: one request per connection
                    if let Err(e) = self.stream.shutdown().await {
                        tracing::trace!(error = %e, "Shutdown after response failed");
                    }
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Reads until the head terminator, a full buffer, or end of stream.
    ///
    /// Returns `None` when the peer closed without sending anything.
    pub async fn read_request(&mut self) -> anyhow::Result<Option<RawRequest>> {
        let mut temp = [0u8; 1024];

        loop {
            if find_headers_end(&self.buffer).is_some() {
                return Ok(Some(RawRequest::Complete(self.buffer.split().freeze())));
            }

            let remaining = MAX_HEAD_BYTES - self.buffer.len();
            if remaining == 0 {
                return Ok(Some(RawRequest::Oversized(self.buffer.split().freeze())));
            }

            let want = remaining.min(temp.len());
            let n = self
                .stream
                .read(&mut temp[..want])
                .await
                .context("Failed to read request")?;

            if n == 0 {
                if self.buffer.is_empty() {
                    return Ok(None);
                }
                return Ok(Some(RawRequest::Truncated(self.buffer.split().freeze())));
            }

            tracing::trace!(bytes = n, buffered = self.buffer.len() + n, "Read request bytes");
            self.buffer.extend_from_slice(&temp[..n]);
        }
    }

    /// Produces the response for a captured request and whether to omit its body.
    async fn process(&mut self, raw: RawRequest) -> (Response, bool) {
        let (buf, parsed) = match raw {
            RawRequest::Oversized(buf) => {
                tracing::warn!(limit = MAX_HEAD_BYTES, "Request head too large");
                return rejected(&buf, StatusCode::RequestHeaderFieldsTooLarge);
            }
            RawRequest::Complete(buf) => {
                let parsed = parse_http_request(&buf);
                (buf, parsed)
            }
            RawRequest::Truncated(buf) => {
                let parsed = parse_request_head(&buf).map(|req| (req, buf.len()));
                (buf, parsed)
            }
        };

        let (mut request, consumed) = match parsed {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::info!(error = ?e, status = e.status().as_u16(), "Rejected request line");
                return rejected(&buf, e.status());
            }
        };

        let response = match self.prepare(&mut request, &buf[consumed..]).await {
            Ok(path) => self.handler.handle(&request, &path).await,
            Err(status) => Response::error(status, &request.version),
        };

        tracing::info!(
            method = request.method.as_str(),
            path = %request.path,
            status = response.status.as_u16(),
            "Request handled"
        );

        (response, request.is_head())
    }

    /// Resolves the target and, for POST, reads the body.
    ///
    /// Checks run in order and the first failure decides the status.
    async fn prepare(&mut self, request: &mut Request, buffered: &[u8]) -> Result<String, StatusCode> {
        let path = resolve_path(&request.path).map_err(|e| {
            tracing::warn!(path = %request.path, error = ?e, "Unsafe request path");
            e.status()
        })?;

        if request.method == Method::POST {
            let len = request
                .content_length()
                .ok_or(StatusCode::LengthRequired)?;

            let body = read_body(&mut self.stream, buffered, len).await.map_err(|e| {
                tracing::warn!(path = %path, error = ?e, "Rejected request body");
                e.status()
            })?;

            request.body = Some(body);
        }

        Ok(path)
    }
}

/// Error response for a head that never parsed.
///
/// The version token is echoed as sent, and a `HEAD` method still
/// suppresses the body.
fn rejected(buf: &[u8], status: StatusCode) -> (Response, bool) {
    let hint = request_line_hint(buf);
    let version = hint.version.as_deref().unwrap_or(DEFAULT_VERSION);

    (Response::error(status, version), hint.head_only)
}
