//! Configuration store for avatar streaming sessions.
//!
//! This module owns the live [`Configuration`](crate::config::Configuration)
//! and everything derived from it.
//!
//! # Architecture
//!
//! ```text
//! EnvDefaults::seed() ──▶ Persistence::restore() ──▶ ConfigurationStore
//!                                                      │
//!   set_*() ── replace field ── Persistence::save() ───┤
//!                            └─ ConfigEvent (mpsc) ────┤──▶ subscribers
//!                                                      │
//!   validate() / session_options() ◀── pure reads ─────┘
//! ```
//!
//! # Quick start
//!
//! ```rust,no_run
//! use avatar_session_config::config::StoragePaths;
//! use avatar_session_config::persist::{FileStorage, Persistence};
//! use avatar_session_config::store::ConfigurationStore;
//!
//! let storage = FileStorage::new(StoragePaths::new().config_dir);
//! let mut store = ConfigurationStore::from_env(Persistence::new(storage));
//!
//! store.set_avatar_id("av1");
//! let report = store.validate();
//! if report.is_valid {
//!     let payload = store.session_options().to_json();
//!     println!("{payload}");
//! } else {
//!     for error in &report.errors {
//!         eprintln!("{error}");
//!     }
//! }
//! ```

pub mod options;
pub mod state;
pub mod validation;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use options::SessionOptions;
pub use state::{new_shared_store, ConfigError, ConfigEvent, ConfigurationStore, SharedStore};
pub use validation::{validate, ValidationReport};
