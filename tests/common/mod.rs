#![allow(dead_code)]

use std::path::{Path, PathBuf};

use fileserve::http::connection::Connection;
use fileserve::resource::handler::ResourceHandler;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

/// Fresh, empty directory for one test.
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir()
        .join(format!("fileserve-{}-{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

/// Sends `request` over an in-memory connection and returns the raw reply.
pub async fn exchange(root: &Path, request: &[u8]) -> Vec<u8> {
    exchange_parts(root, &[request], false).await
}

/// Sends each part with its own write, optionally closing the write half
/// afterwards, then reads until the server closes.
pub async fn exchange_parts(root: &Path, parts: &[&[u8]], close_write: bool) -> Vec<u8> {
    let (mut client, server) = tokio::io::duplex(64 * 1024);
    let handler = ResourceHandler::new(root);

    let task = tokio::spawn(async move {
        let mut conn = Connection::new(server, handler);
        conn.run().await
    });

    for part in parts {
        client.write_all(part).await.unwrap();
    }
    if close_write {
        client.shutdown().await.unwrap();
    }

    let mut out = Vec::new();
    client.read_to_end(&mut out).await.unwrap();
    task.await.unwrap().unwrap();
    out
}

pub struct Reply {
    pub status_line: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl Reply {
    pub fn parse(raw: &[u8]) -> Self {
        let end = raw
            .windows(4)
            .position(|w| w == b"\r\n\r\n")
            .expect("response has no header terminator");
        let head = std::str::from_utf8(&raw[..end]).unwrap();
        let mut lines = head.split("\r\n");
        let status_line = lines.next().unwrap().to_string();
        let headers = lines
            .map(|l| {
                let (k, v) = l.split_once(": ").unwrap();
                (k.to_string(), v.to_string())
            })
            .collect();

        Self {
            status_line,
            headers,
            body: raw[end + 4..].to_vec(),
        }
    }

    pub fn status(&self) -> u16 {
        self.status_line.split(' ').nth(1).unwrap().parse().unwrap()
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn header_names(&self) -> Vec<&str> {
        self.headers.iter().map(|(k, _)| k.as_str()).collect()
    }
}
