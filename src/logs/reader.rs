//! Log-follow reader
//!
//! Presents a growing, remote, append-only log as a pull-based byte stream.
//! Each poll fetches `limit`/`offset` from the signed log URL. An empty chunk
//! means either "nothing new yet" or "done"; the parent resource's status
//! tells the two apart:
//!
//! ```text
//! collecting --(bytes)--> collecting
//! collecting --(no bytes, parent running)--> wait 500ms --> collecting
//! collecting --(parent terminal, bytes left)--> draining --(bytes)--> draining
//! draining   --(no bytes, parent terminal)--> done
//! ```
//!
//! No explicit state is stored: it is re-derived on every poll from the
//! bytes returned and the parent status.

use crate::error::{Error, Result};
use crate::http::HttpClient;
use bytes::Bytes;
use futures::future::{BoxFuture, FutureExt};
use futures::stream::{self, Stream};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};
use url::Url;

/// Wait between two polls that returned no new data
pub const POLL_INTERVAL: Duration = Duration::from_millis(500);

/// The parent status is fetched on every n-th empty poll
pub const STATUS_REFRESH_EVERY: u64 = 2;

/// Buffer size used by [`LogReader::read_to_end`]
pub const DEFAULT_CHUNK_SIZE: usize = 32 * 1024;

/// ASCII start-of-text marker that may open a log blob
const STX: u8 = 0x02;

/// ASCII end-of-text marker that may close a log blob
const ETX: u8 = 0x03;

type DoneFn = Box<dyn Fn() -> BoxFuture<'static, Result<bool>> + Send + Sync>;

/// Outcome of a single poll of the log URL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Chunk {
    /// This many bytes were written into the caller's buffer
    Data(usize),
    /// Nothing new yet; poll again after the interval
    NoProgress,
    /// The log is complete
    EndOfStream,
}

/// Streams the log of a resource whose status decides when the log is done.
///
/// A reader owns its offset and poll cadence; run several readers on
/// separate tasks to follow several logs at once.
pub struct LogReader {
    http: Arc<HttpClient>,
    resource: String,
    log_url: Url,
    done: DoneFn,
    cancel: CancellationToken,
    offset: u64,
    empty_polls: u64,
    start_of_text: bool,
    end_of_text: bool,
    finished: bool,
}

impl LogReader {
    /// Create a reader for `log_url`.
    ///
    /// `fetch_status` re-reads the parent resource's status; the log is done
    /// once it returns one of `terminal` and no more bytes are available.
    /// A missing or malformed URL fails here, before anything is polled.
    pub fn new<S, F, Fut>(
        http: Arc<HttpClient>,
        resource: impl Into<String>,
        log_url: &str,
        cancel: CancellationToken,
        terminal: &[S],
        fetch_status: F,
    ) -> Result<Self>
    where
        S: PartialEq + Clone + std::fmt::Debug + Send + Sync + 'static,
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<S>> + Send + 'static,
    {
        let resource = resource.into();
        let log_url = parse_log_url(&resource, log_url)?;

        let terminal: Arc<[S]> = terminal.into();
        let done: DoneFn = Box::new(move || {
            let terminal = Arc::clone(&terminal);
            let status = fetch_status();
            async move {
                let status = status.await?;
                debug!("Parent status refreshed: {status:?}");
                Ok::<_, Error>(terminal.contains(&status))
            }
            .boxed()
        });

        Ok(Self {
            http,
            resource,
            log_url,
            done,
            cancel,
            offset: 0,
            empty_polls: 0,
            start_of_text: false,
            end_of_text: false,
            finished: false,
        })
    }

    /// Bytes of the remote log consumed so far
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Whether end-of-stream has been reached
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Fill `buf` with the next bytes of the log.
    ///
    /// Returns the number of bytes written; `Ok(0)` means the log is complete.
    /// While the parent is still running and no bytes are available this
    /// waits and polls again. Cancelling the token during a wait returns
    /// [`Error::Cancelled`]. Transport errors are returned as-is.
    pub async fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        if self.finished || buf.is_empty() {
            return Ok(0);
        }

        loop {
            match self.poll_chunk(buf).await? {
                Chunk::Data(written) => return Ok(written),
                Chunk::EndOfStream => {
                    debug!("Log of {} complete at offset {}", self.resource, self.offset);
                    self.finished = true;
                    return Ok(0);
                }
                Chunk::NoProgress => {}
            }

            tokio::select! {
                biased;
                () = self.cancel.cancelled() => return Err(Error::Cancelled),
                () = tokio::time::sleep(POLL_INTERVAL) => {}
            }
        }
    }

    /// Read until end-of-stream, appending to `out`
    pub async fn read_to_end(&mut self, out: &mut Vec<u8>) -> Result<usize> {
        let mut buf = vec![0u8; DEFAULT_CHUNK_SIZE];
        let mut total = 0;
        loop {
            let written = self.read(&mut buf).await?;
            if written == 0 {
                return Ok(total);
            }
            out.extend_from_slice(&buf[..written]);
            total += written;
        }
    }

    /// Read until end-of-stream and decode as UTF-8
    pub async fn read_to_string(&mut self) -> Result<String> {
        let mut out = Vec::new();
        self.read_to_end(&mut out).await?;
        String::from_utf8(out)
            .map_err(|e| Error::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
    }

    /// Turn the reader into a stream of chunks of at most `chunk_size` bytes
    pub fn into_stream(self, chunk_size: usize) -> impl Stream<Item = Result<Bytes>> {
        let chunk_size = chunk_size.max(1);
        stream::try_unfold(self, move |mut reader| async move {
            let mut buf = vec![0u8; chunk_size];
            let written = reader.read(&mut buf).await?;
            if written == 0 {
                return Ok::<_, Error>(None);
            }
            buf.truncate(written);
            Ok(Some((Bytes::from(buf), reader)))
        })
    }

    /// One request against the log URL, without waiting
    async fn poll_chunk(&mut self, buf: &mut [u8]) -> Result<Chunk> {
        let url = self.chunk_url(buf.len());
        let response = self.http.get(url.as_str()).await?;
        let body = response.bytes().await?;

        let mut written = body.len().min(buf.len());
        buf[..written].copy_from_slice(&body[..written]);

        if written > 0 {
            if !self.start_of_text && self.offset == 0 && buf[0] == STX {
                self.start_of_text = true;
                buf.copy_within(1..written, 0);
                written -= 1;
                self.offset += 1;
                if written == 0 {
                    return Ok(Chunk::NoProgress);
                }
            }

            if self.start_of_text && buf[written - 1] == ETX {
                self.end_of_text = true;
                written -= 1;
                self.offset += 1;
            }
        }

        self.offset += written as u64;
        if written > 0 {
            trace!("Read {written} log bytes, offset now {}", self.offset);
            return Ok(Chunk::Data(written));
        }

        if self.end_of_text {
            return Ok(Chunk::EndOfStream);
        }

        let refresh = self.empty_polls % STATUS_REFRESH_EVERY == 0;
        self.empty_polls += 1;
        if refresh && (self.done)().await? {
            return Ok(Chunk::EndOfStream);
        }

        Ok(Chunk::NoProgress)
    }

    /// The log URL with `limit` and `offset` replacing any existing query
    pub(super) fn chunk_url(&self, limit: usize) -> Url {
        let mut url = self.log_url.clone();
        url.set_query(None);
        url.query_pairs_mut()
            .append_pair("limit", &limit.to_string())
            .append_pair("offset", &self.offset.to_string());
        url
    }
}

impl std::fmt::Debug for LogReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogReader")
            .field("resource", &self.resource)
            .field("host", &self.log_url.host_str())
            .field("offset", &self.offset)
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}

fn parse_log_url(resource: &str, raw: &str) -> Result<Url> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(Error::MissingLogUrl {
            resource: resource.to_string(),
        });
    }

    let url = Url::parse(raw).map_err(|e| Error::invalid_log_url(redact_log_url(raw), e))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::invalid_log_url(
            redact_log_url(raw),
            format!("unsupported scheme '{}'", url.scheme()),
        ));
    }
    Ok(url)
}

/// Scheme and host of a signed log URL; path and query carry the signature.
fn redact_log_url(raw: &str) -> String {
    if let Ok(url) = Url::parse(raw) {
        return format!("{}://{}", url.scheme(), url.host_str().unwrap_or_default());
    }
    let end = raw.find(['?', '#']).unwrap_or(raw.len());
    match raw[..end].split_once("://") {
        Some((scheme, rest)) => {
            let host = rest.split('/').next().unwrap_or_default();
            format!("{scheme}://{host}")
        }
        None => "<redacted>".to_string(),
    }
}
