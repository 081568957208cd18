//! Chunk planning, positional part reads, and progress accounting.
//!
//! The planner is pure; the reader opens an independent file handle
//! per call so disjoint ranges can be read concurrently; the notifier
//! owns all mutable progress state for one upload attempt.

mod plan;
mod progress;
mod reader;

pub use plan::{PartSpec, plan};
pub use progress::{ProgressCallback, ProgressNotifier};
pub use reader::read_part;

/// Default chunk size: 5 MiB.
pub const DEFAULT_CHUNK_SIZE: u64 = 5 * 1024 * 1024;

/// Default number of parts in flight per batch.
pub const DEFAULT_PARALLELISM: usize = 3;

/// Errors produced by the transfer crate.
#[derive(Debug, thiserror::Error)]
pub enum TransferError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("short read at offset {offset}: wanted {wanted} bytes, file ends early")]
    ShortRead { offset: u64, wanted: u64 },
}
