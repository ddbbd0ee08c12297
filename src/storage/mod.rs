//! Key-value storage adapter.
//!
//! [`KeyValueBackend`] is the raw text store (a directory of files on disk,
//! or a map in memory for tests). [`JsonStorage`] sits on top of it and is
//! the only type the rest of the crate talks to: it encodes values as JSON
//! and absorbs every storage failure, so callers see `None` on a failed
//! read and a silent no-op on a failed write.

mod backend;
mod error;
mod file;
mod json;
mod memory;

pub use backend::{is_valid_key, KeyValueBackend};
pub use error::StorageError;
pub use file::FileBackend;
pub use json::JsonStorage;
pub use memory::MemoryBackend;
