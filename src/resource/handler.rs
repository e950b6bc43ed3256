//! Executes validated requests against the filesystem.

use std::path::{Path, PathBuf};

use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::http::mime::content_type_for;
use crate::http::path::encode_location;
use crate::http::request::{Method, Request};
use crate::http::response::{Response, ResponseBuilder, StatusCode, CREATED_BODY};

/// Serves GET, HEAD and POST below a document root.
#[derive(Debug, Clone)]
pub struct ResourceHandler {
    root: PathBuf,
}

impl ResourceHandler {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Runs the request against `path`, a target already passed through
    /// [`resolve_path`](crate::http::path::resolve_path).
    pub async fn handle(&self, request: &Request, path: &str) -> Response {
        match request.method {
            Method::GET | Method::HEAD => self.read(request, path).await,
            Method::POST => self.write(request, path).await,
        }
    }

    async fn read(&self, request: &Request, path: &str) -> Response {
        let full_path = self.root.join(path);

        let metadata = match tokio::fs::metadata(&full_path).await {
            Ok(metadata) if metadata.is_file() => metadata,
            Ok(_) => {
                tracing::debug!(path = %path, "Not a regular file");
                return Response::error(StatusCode::NotFound, &request.version);
            }
            Err(e) => {
                tracing::debug!(path = %path, error = %e, "Stat failed");
                return Response::error(StatusCode::NotFound, &request.version);
            }
        };

        let mut builder = ResponseBuilder::new(StatusCode::Ok)
            .version(&request.version)
            .content_type(content_type_for(path));

        if let Ok(modified) = metadata.modified() {
            builder = builder.last_modified(modified);
        }

        if request.is_head() {
            return builder.content_length(metadata.len()).build();
        }

        match tokio::fs::read(&full_path).await {
            Ok(contents) => builder.body(contents).build(),
            Err(e) => {
                tracing::error!(path = %path, error = %e, "Failed to read file");
                Response::error(StatusCode::InternalServerError, &request.version)
            }
        }
    }

    async fn write(&self, request: &Request, path: &str) -> Response {
        let full_path = self.root.join(path);
        let body = request.body.as_deref().unwrap_or_default();

        let mut file = match File::create(&full_path).await {
            Ok(file) => file,
            Err(e) => {
                tracing::warn!(path = %path, error = %e, "Cannot open file for writing");
                return Response::error(StatusCode::Forbidden, &request.version);
            }
        };

        if let Err(e) = write_contents(&mut file, body).await {
            tracing::error!(path = %path, error = %e, "Failed to write file");
            return Response::error(StatusCode::InternalServerError, &request.version);
        }

        tracing::debug!(path = %path, bytes = body.len(), "File written");

        ResponseBuilder::new(StatusCode::Created)
            .version(&request.version)
            .location(encode_location(path))
            .body(CREATED_BODY.to_vec())
            .build()
    }
}

async fn write_contents(file: &mut File, body: &[u8]) -> std::io::Result<()> {
    file.write_all(body).await?;
    file.flush().await
}
