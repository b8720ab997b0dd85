//! Snapshot encoding and the [`Persistence`] adapter.
//!
//! The full [`Configuration`] is written as one flat JSON object under
//! [`STORAGE_KEY`].  On restore the stored object is read as a
//! [`PartialSnapshot`]: every key is optional and unknown keys are ignored, so
//! snapshots written by older or newer builds still load.  Fields present in
//! the snapshot override the seed; missing fields keep the seed's value.

use serde::Deserialize;

use crate::config::{
    AuthMethod, Configuration, E2eType, Quality, SceneMode, StreamProvider, VoiceParams,
};

use super::storage::{SnapshotStorage, StorageError};

/// Fixed name the configuration snapshot is stored under.
pub const STORAGE_KEY: &str = "avatar-session-config";

// ---------------------------------------------------------------------------
// PartialSnapshot
// ---------------------------------------------------------------------------

/// A stored snapshot in which any field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PartialSnapshot {
    pub stream_provider: Option<StreamProvider>,
    pub api_host: Option<String>,
    pub api_credential: Option<String>,
    pub auth_method: Option<AuthMethod>,
    pub avatar_id: Option<String>,
    pub voice_id: Option<String>,
    pub knowledge_id: Option<String>,
    pub session_duration: Option<i64>,
    pub mode_type: Option<i32>,
    pub language: Option<String>,
    pub scene_mode: Option<SceneMode>,
    pub e2e_type: Option<E2eType>,
    pub background_url: Option<String>,
    pub voice_url: Option<String>,
    pub voice_params: Option<VoiceParams>,
    pub video_enabled: Option<bool>,
    pub audio_enabled: Option<bool>,
    pub video_quality: Option<Quality>,
    pub audio_quality: Option<Quality>,
}

impl PartialSnapshot {
    /// Decode a stored snapshot.  Anything other than a JSON object, or a
    /// known key holding a value of the wrong type, is an error.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Overlay the present fields onto `base`.
    pub fn apply(self, mut base: Configuration) -> Configuration {
        macro_rules! overlay {
            ($src:ident => $dst:ident: $($field:ident),+ $(,)?) => {
                $(
                    if let Some(v) = $src.$field {
                        $dst.$field = v;
                    }
                )+
            };
        }

        let snapshot = self;
        overlay!(snapshot => base:
            stream_provider,
            api_host,
            api_credential,
            auth_method,
            avatar_id,
            voice_id,
            knowledge_id,
            session_duration,
            mode_type,
            language,
            scene_mode,
            e2e_type,
            background_url,
            voice_url,
            voice_params,
            video_enabled,
            audio_enabled,
            video_quality,
            audio_quality,
        );
        base
    }
}

// ---------------------------------------------------------------------------
// Persistence
// ---------------------------------------------------------------------------

/// Reads and writes configuration snapshots through a [`SnapshotStorage`].
pub struct Persistence {
    storage: Box<dyn SnapshotStorage>,
    key: String,
}

impl Persistence {
    /// Persist under [`STORAGE_KEY`].
    pub fn new(storage: impl SnapshotStorage + 'static) -> Self {
        Self::with_key(storage, STORAGE_KEY)
    }

    /// Persist under a caller-chosen key.
    pub fn with_key(storage: impl SnapshotStorage + 'static, key: impl Into<String>) -> Self {
        Self {
            storage: Box::new(storage),
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read and decode the stored snapshot, `Ok(None)` if there is none.
    pub fn load(&self) -> Result<Option<PartialSnapshot>, StorageError> {
        match self.storage.read(&self.key)? {
            Some(text) => Ok(Some(PartialSnapshot::from_json(&text)?)),
            None => Ok(None),
        }
    }

    /// Rehydrate `seed` from storage.
    ///
    /// Never fails: a missing snapshot returns `seed` as is, and an
    /// unreadable or corrupt one is logged and also returns `seed`.
    pub fn restore(&self, seed: Configuration) -> Configuration {
        match self.load() {
            Ok(Some(snapshot)) => {
                log::info!("Restored configuration snapshot '{}'", self.key);
                snapshot.apply(seed)
            }
            Ok(None) => {
                log::debug!("No configuration snapshot '{}'; using defaults", self.key);
                seed
            }
            Err(e) => {
                log::warn!(
                    "Discarding configuration snapshot '{}' ({e}); using defaults",
                    self.key
                );
                seed
            }
        }
    }

    /// Write the complete record.
    pub fn save(&self, config: &Configuration) -> Result<(), StorageError> {
        let text = serde_json::to_string_pretty(config)?;
        self.storage.write(&self.key, &text)
    }
}

impl std::fmt::Debug for Persistence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Persistence").field("key", &self.key).finish()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
