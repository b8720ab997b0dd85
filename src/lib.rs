//! Runtime configuration for live avatar streaming sessions.
//!
//! * [`config`] — the [`config::Configuration`] record, field types, the
//!   environment seed and the snapshot location.
//! * [`store`] — [`store::ConfigurationStore`]: per-field mutators, derived
//!   queries, the session options payload, validation, reset and change
//!   events.
//! * [`persist`] — snapshot storage backends and the restore/save adapter.

pub mod config;
pub mod persist;
pub mod store;
