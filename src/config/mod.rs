//! Configuration model for avatar streaming sessions.
//!
//! Provides the [`Configuration`] record and its field types, the
//! [`ConfigField`] catalogue, [`EnvDefaults`] for environment seeding, and
//! [`StoragePaths`] for the platform snapshot location.

pub mod env;
pub mod fields;
pub mod paths;
pub mod settings;

pub use env::EnvDefaults;
pub use fields::ConfigField;
pub use paths::StoragePaths;
pub use settings::{
    AuthMethod, Configuration, E2eType, ParseValueError, Quality, SceneMode, StreamProvider,
    VoiceParamValue, VoiceParams, DEFAULT_MODE_TYPE, DEFAULT_SESSION_DURATION, MODE_TYPE_RANGE,
};
