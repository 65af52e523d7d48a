//! Log streaming
//!
//! Plans, applies and cost estimates expose their output as a signed URL to
//! a log blob that keeps growing while the resource runs. [`LogReader`]
//! follows such a blob until the owning resource reaches a terminal status.
//!
//! The reader is generic over the status type: each facade supplies a
//! closure that re-reads its resource and the set of statuses that mean the
//! log is complete.

mod reader;

pub use reader::{LogReader, DEFAULT_CHUNK_SIZE, POLL_INTERVAL, STATUS_REFRESH_EVERY};
