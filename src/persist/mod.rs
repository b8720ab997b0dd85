//! Snapshot persistence for the configuration store.
//!
//! * [`SnapshotStorage`] — keyed string storage trait.
//! * [`FileStorage`] / [`MemoryStorage`] — on-disk and in-process backends.
//! * [`Persistence`] — encodes the record under [`STORAGE_KEY`] and restores
//!   it field by field over a seed.
//! * [`StorageError`] — backend failures.  Never surfaced to end users; the
//!   store logs them and carries on.

pub mod snapshot;
pub mod storage;

pub use snapshot::{PartialSnapshot, Persistence, STORAGE_KEY};
pub use storage::{FileStorage, MemoryStorage, SnapshotStorage, StorageError};
