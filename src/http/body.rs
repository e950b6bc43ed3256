use tokio::io::{AsyncRead, AsyncReadExt};

use crate::http::response::StatusCode;

const READ_CHUNK: usize = 8192;

#[derive(Debug, PartialEq, Eq)]
pub enum BodyError {
    /// The peer stopped sending before `Content-Length` bytes arrived
    Incomplete { expected: usize, received: usize },
    /// The body buffer could not be reserved
    Allocation,
}

impl BodyError {
    pub fn status(&self) -> StatusCode {
        match self {
            BodyError::Incomplete { .. } => StatusCode::BadRequest,
            BodyError::Allocation => StatusCode::InternalServerError,
        }
    }
}

/// Collects exactly `len` body bytes.
///
/// `buffered` holds whatever followed the header terminator in the initial
/// read; at most `len` of it is used. The rest comes from `stream`.
pub async fn read_body<S>(stream: &mut S, buffered: &[u8], len: usize) -> Result<Vec<u8>, BodyError>
where
    S: AsyncRead + Unpin,
{
    let mut body = Vec::new();
    body.try_reserve_exact(len)
        .map_err(|_| BodyError::Allocation)?;

    let prefix = buffered.len().min(len);
    body.extend_from_slice(&buffered[..prefix]);

    let mut temp = [0u8; READ_CHUNK];
    while body.len() < len {
        let want = (len - body.len()).min(READ_CHUNK);

        let n = match stream.read(&mut temp[..want]).await {
            Ok(n) => n,
            Err(e) => {
                tracing::warn!(error = %e, received = body.len(), expected = len, "Body read failed");
                0
            }
        };

        if n == 0 {
            return Err(BodyError::Incomplete { expected: len, received: body.len() });
        }

        body.extend_from_slice(&temp[..n]);
        tracing::trace!(received = body.len(), expected = len, "Read body chunk");
    }

    Ok(body)
}
