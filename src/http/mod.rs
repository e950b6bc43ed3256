//! HTTP/1.0 protocol implementation.
//!
//! Every connection carries exactly one request and is closed after the
//! response. HTTP/1.1 requests are accepted but answered the same way.
//!
//! # Architecture
//!
//! - **`connection`**: Reads the request head and drives the pipeline below
//! - **`parser`**: Splits the head into request line and headers
//! - **`path`**: Decodes the request target and rejects unsafe paths
//! - **`body`**: Collects a POST body of exactly `Content-Length` bytes
//! - **`request`**: HTTP request representation and header lookup
//! - **`response`**: Status table, response representation and builder
//! - **`writer`**: Serializes and writes responses to the client
//! - **`mime`**: MIME type detection based on file extensions
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Collect bytes until \r\n\r\n or 8 KiB
//!        └──────┬──────┘
//!               │ Head captured (nothing read → Closed)
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← parse → resolve path → read body → file I/O
//!        └──────┬───────────┘
//!               │ Response ready (first failure picks the status)
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Status line, headers, body unless HEAD
//!        └──────┬───────────┘
//!               ▼
//!            Closed
//! ```
//!
//! # Example
//!
//! ```ignore
//! use fileserve::http::connection::Connection;
//! use fileserve::resource::handler::ResourceHandler;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let listener = TcpListener::bind("127.0.0.1:8000").await?;
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         tokio::spawn(async move {
//!             let mut conn = Connection::new(socket, ResourceHandler::new("."));
//!             if let Err(e) = conn.run().await {
//!                 eprintln!("Connection error: {}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod request;
pub mod response;
pub mod parser;
pub mod path;
pub mod body;
pub mod connection;
pub mod writer;
pub mod mime;
