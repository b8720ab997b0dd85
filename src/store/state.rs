//! The configuration store and its shared handle.
//!
//! [`ConfigurationStore`] is the single owner of the [`Configuration`] record.
//! Every write goes through a `set_*` mutator, which
//!
//! 1. replaces the field (no validation at write time),
//! 2. writes a full snapshot through [`Persistence`] if one is attached, and
//! 3. sends a [`ConfigEvent`] to subscribers when the value actually changed.
//!
//! A failed snapshot write is logged and otherwise ignored; the in-memory
//! change stands.
//!
//! [`SharedStore`] is a type alias for `Arc<Mutex<ConfigurationStore>>` for
//! hosts that touch the store from more than one thread.  Holding the lock
//! across a mutator covers the whole read-modify-persist step.

use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, Mutex};

use thiserror::Error;
use tokio::sync::mpsc;

use crate::config::{
    AuthMethod, ConfigField, Configuration, E2eType, EnvDefaults, Quality, SceneMode,
    StreamProvider, VoiceParams,
};
use crate::persist::{Persistence, StorageError};

use super::options::SessionOptions;
use super::validation::{validate, ValidationReport};

// ---------------------------------------------------------------------------
// ConfigEvent
// ---------------------------------------------------------------------------

/// Change notifications delivered to subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigEvent {
    /// A single field now holds a different value.
    FieldChanged(ConfigField),
    /// Every field was replaced by its literal default.
    Reset,
}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors from the textual setter [`ConfigurationStore::set_from_str`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The text could not be parsed into the field's type.
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: ConfigField, reason: String },
}

impl ConfigError {
    fn invalid(field: ConfigField, reason: impl ToString) -> Self {
        ConfigError::InvalidValue {
            field,
            reason: reason.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// ConfigurationStore
// ---------------------------------------------------------------------------

/// Holds the session configuration and mediates every change to it.
pub struct ConfigurationStore {
    config: Configuration,
    persistence: Option<Persistence>,
    subscribers: Vec<mpsc::UnboundedSender<ConfigEvent>>,
}

impl ConfigurationStore {
    // -----------------------------------------------------------------------
    // Construction
    // -----------------------------------------------------------------------

    /// An in-memory store starting from `seed`.  Nothing is persisted.
    pub fn new(seed: Configuration) -> Self {
        Self {
            config: seed,
            persistence: None,
            subscribers: Vec::new(),
        }
    }

    /// Rehydrate from `persistence` over `seed`, then persist every change.
    ///
    /// Stored values win over the seed field by field; a missing or corrupt
    /// snapshot leaves the seed untouched.
    pub fn with_persistence(seed: Configuration, persistence: Persistence) -> Self {
        let config = persistence.restore(seed);
        Self {
            config,
            persistence: Some(persistence),
            subscribers: Vec::new(),
        }
    }

    /// Standard startup: literal defaults, then the process environment,
    /// then the stored snapshot.
    pub fn from_env(persistence: Persistence) -> Self {
        Self::with_persistence(EnvDefaults::from_env().seed(), persistence)
    }

    // -----------------------------------------------------------------------
    // Reading
    // -----------------------------------------------------------------------

    /// Borrow the current record.
    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Owned copy of the current record.
    pub fn snapshot(&self) -> Configuration {
        self.config.clone()
    }

    /// `true` when host and credential are both set.
    pub fn is_api_configured(&self) -> bool {
        !self.config.api_host.is_empty() && !self.config.api_credential.is_empty()
    }

    /// `true` when an avatar is selected.
    pub fn is_avatar_configured(&self) -> bool {
        !self.config.avatar_id.is_empty()
    }

    pub fn is_fully_configured(&self) -> bool {
        self.is_api_configured() && self.is_avatar_configured()
    }

    /// Build the payload for starting a session.
    pub fn session_options(&self) -> SessionOptions {
        SessionOptions::from_config(&self.config)
    }

    /// Evaluate the start-session rules against the current record.
    pub fn validate(&self) -> ValidationReport {
        validate(&self.config)
    }

    // -----------------------------------------------------------------------
    // Observation
    // -----------------------------------------------------------------------

    /// Register for change events.  Dropping the receiver unsubscribes.
    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<ConfigEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.push(tx);
        rx
    }

    /// Number of live subscribers as of the last notification.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    fn notify(&mut self, event: ConfigEvent) {
        self.subscribers.retain(|tx| tx.send(event).is_ok());
    }

    // -----------------------------------------------------------------------
    // Persistence
    // -----------------------------------------------------------------------

    /// `true` when a [`Persistence`] adapter is attached.
    pub fn is_persistent(&self) -> bool {
        self.persistence.is_some()
    }

    /// Write the current record now and report the outcome.
    ///
    /// Mutators already persist on their own; this is for teardown and for
    /// callers that want to see write failures.  A store without persistence
    /// returns `Ok(())`.
    pub fn flush(&self) -> Result<(), StorageError> {
        match &self.persistence {
            Some(persistence) => persistence.save(&self.config),
            None => Ok(()),
        }
    }

    fn persist(&self) {
        if let Err(e) = self.flush() {
            log::warn!("Configuration change kept in memory but not persisted: {e}");
        }
    }

    // -----------------------------------------------------------------------
    // Mutation
    // -----------------------------------------------------------------------

    /// Replace one field, persist, and notify if the value changed.
    fn update<T: PartialEq>(
        &mut self,
        field: ConfigField,
        value: T,
        slot: fn(&mut Configuration) -> &mut T,
    ) {
        let target = slot(&mut self.config);
        let changed = *target != value;
        *target = value;

        self.persist();
        if changed {
            log::debug!("Configuration field '{field}' changed");
            self.notify(ConfigEvent::FieldChanged(field));
        }
    }

    pub fn set_stream_provider(&mut self, value: StreamProvider) {
        self.update(ConfigField::StreamProvider, value, |c| &mut c.stream_provider);
    }

    pub fn set_api_host(&mut self, value: impl Into<String>) {
        self.update(ConfigField::ApiHost, value.into(), |c| &mut c.api_host);
    }

    pub fn set_api_credential(&mut self, value: impl Into<String>) {
        self.update(ConfigField::ApiCredential, value.into(), |c| {
            &mut c.api_credential
        });
    }

    pub fn set_auth_method(&mut self, value: AuthMethod) {
        self.update(ConfigField::AuthMethod, value, |c| &mut c.auth_method);
    }

    pub fn set_avatar_id(&mut self, value: impl Into<String>) {
        self.update(ConfigField::AvatarId, value.into(), |c| &mut c.avatar_id);
    }

    pub fn set_voice_id(&mut self, value: impl Into<String>) {
        self.update(ConfigField::VoiceId, value.into(), |c| &mut c.voice_id);
    }

    pub fn set_knowledge_id(&mut self, value: impl Into<String>) {
        self.update(ConfigField::KnowledgeId, value.into(), |c| &mut c.knowledge_id);
    }

    /// Minutes.  Not clamped; non-positive values fail validation.
    pub fn set_session_duration(&mut self, value: i64) {
        self.update(ConfigField::SessionDuration, value, |c| {
            &mut c.session_duration
        });
    }

    /// Not clamped; values outside `1..=3` fail validation.
    pub fn set_mode_type(&mut self, value: i32) {
        self.update(ConfigField::ModeType, value, |c| &mut c.mode_type);
    }

    pub fn set_language(&mut self, value: impl Into<String>) {
        self.update(ConfigField::Language, value.into(), |c| &mut c.language);
    }

    /// Leaves `e2e_type` alone; the two are only coupled by consumers.
    pub fn set_scene_mode(&mut self, value: SceneMode) {
        self.update(ConfigField::SceneMode, value, |c| &mut c.scene_mode);
    }

    pub fn set_e2e_type(&mut self, value: E2eType) {
        self.update(ConfigField::E2eType, value, |c| &mut c.e2e_type);
    }

    pub fn set_background_url(&mut self, value: impl Into<String>) {
        self.update(ConfigField::BackgroundUrl, value.into(), |c| {
            &mut c.background_url
        });
    }

    pub fn set_voice_url(&mut self, value: impl Into<String>) {
        self.update(ConfigField::VoiceUrl, value.into(), |c| &mut c.voice_url);
    }

    pub fn set_voice_params(&mut self, value: VoiceParams) {
        self.update(ConfigField::VoiceParams, value, |c| &mut c.voice_params);
    }

    pub fn set_video_enabled(&mut self, value: bool) {
        self.update(ConfigField::VideoEnabled, value, |c| &mut c.video_enabled);
    }

    pub fn set_audio_enabled(&mut self, value: bool) {
        self.update(ConfigField::AudioEnabled, value, |c| &mut c.audio_enabled);
    }

    pub fn set_video_quality(&mut self, value: Quality) {
        self.update(ConfigField::VideoQuality, value, |c| &mut c.video_quality);
    }

    pub fn set_audio_quality(&mut self, value: Quality) {
        self.update(ConfigField::AudioQuality, value, |c| &mut c.audio_quality);
    }

    /// Parse `raw` for `field` and route it to the matching setter.
    ///
    /// Booleans accept `true/false`, `1/0`, `yes/no` and `on/off`.  Voice
    /// params take a JSON object; an empty string clears them.  On error the
    /// store is left untouched.
    pub fn set_from_str(&mut self, field: ConfigField, raw: &str) -> Result<(), ConfigError> {
        match field {
            ConfigField::StreamProvider => self.set_stream_provider(parse_field(field, raw)?),
            ConfigField::ApiHost => self.set_api_host(raw),
            ConfigField::ApiCredential => self.set_api_credential(raw),
            ConfigField::AuthMethod => self.set_auth_method(parse_field(field, raw)?),
            ConfigField::AvatarId => self.set_avatar_id(raw),
            ConfigField::VoiceId => self.set_voice_id(raw),
            ConfigField::KnowledgeId => self.set_knowledge_id(raw),
            ConfigField::SessionDuration => self.set_session_duration(parse_field(field, raw)?),
            ConfigField::ModeType => self.set_mode_type(parse_field(field, raw)?),
            ConfigField::Language => self.set_language(raw),
            ConfigField::SceneMode => self.set_scene_mode(parse_field(field, raw)?),
            ConfigField::E2eType => self.set_e2e_type(parse_field(field, raw)?),
            ConfigField::BackgroundUrl => self.set_background_url(raw),
            ConfigField::VoiceUrl => self.set_voice_url(raw),
            ConfigField::VoiceParams => {
                let params = if raw.trim().is_empty() {
                    VoiceParams::new()
                } else {
                    serde_json::from_str(raw).map_err(|e| ConfigError::invalid(field, e))?
                };
                self.set_voice_params(params)
            }
            ConfigField::VideoEnabled => self.set_video_enabled(parse_bool(field, raw)?),
            ConfigField::AudioEnabled => self.set_audio_enabled(parse_bool(field, raw)?),
            ConfigField::VideoQuality => self.set_video_quality(parse_field(field, raw)?),
            ConfigField::AudioQuality => self.set_audio_quality(parse_field(field, raw)?),
        }
        Ok(())
    }

    /// Replace every field with its literal default in one step.
    ///
    /// Environment values are not reapplied.  Persists once and emits a
    /// single [`ConfigEvent::Reset`].
    pub fn reset_to_defaults(&mut self) {
        self.config = Configuration::default();
        self.persist();
        log::info!("Configuration reset to defaults");
        self.notify(ConfigEvent::Reset);
    }
}

impl Default for ConfigurationStore {
    fn default() -> Self {
        Self::new(Configuration::default())
    }
}

impl fmt::Debug for ConfigurationStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigurationStore")
            .field("config", &self.config)
            .field("persistence", &self.persistence)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

fn parse_field<T>(field: ConfigField, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| ConfigError::invalid(field, e))
}

fn parse_bool(field: ConfigField, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => Err(ConfigError::invalid(
            field,
            format!("'{other}' is not a boolean"),
        )),
    }
}

// ---------------------------------------------------------------------------
// SharedStore
// ---------------------------------------------------------------------------

/// Thread-safe handle to a [`ConfigurationStore`].
///
/// Cheap to clone (`Arc` clone).  Lock for the duration of one read or one
/// mutator call.
pub type SharedStore = Arc<Mutex<ConfigurationStore>>;

/// Wrap `store` in a [`SharedStore`].
pub fn new_shared_store(store: ConfigurationStore) -> SharedStore {
    Arc::new(Mutex::new(store))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::VoiceParamValue;
    use crate::persist::{MemoryStorage, PartialSnapshot, STORAGE_KEY};
    use crate::store::validation::{
        MSG_AVATAR_REQUIRED, MSG_DURATION_POSITIVE, MSG_HOST_REQUIRED, MSG_MODE_TYPE_RANGE,
        MSG_TOKEN_REQUIRED,
    };
    use serde_json::json;

    fn persistent_store() -> (ConfigurationStore, MemoryStorage) {
        let storage = MemoryStorage::new();
        let store = ConfigurationStore::with_persistence(
            Configuration::default(),
            Persistence::new(storage.clone()),
        );
        (store, storage)
    }

    fn stored(storage: &MemoryStorage) -> Configuration {
        let text = storage.get(STORAGE_KEY).expect("snapshot written");
        PartialSnapshot::from_json(&text)
            .expect("valid snapshot")
            .apply(Configuration::default())
    }

    fn drain(rx: &mut mpsc::UnboundedReceiver<ConfigEvent>) -> Vec<ConfigEvent> {
        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }
        events
    }

    // ---- Mutators ---

    #[test]
    fn each_setter_changes_only_its_field() {
        let mut store = ConfigurationStore::default();
        let before = store.snapshot();

        store.set_avatar_id("av1");
        let mut expected = before.clone();
        expected.avatar_id = "av1".into();
        assert_eq!(store.config(), &expected);

        store.set_audio_quality(Quality::Low);
        expected.audio_quality = Quality::Low;
        assert_eq!(store.config(), &expected);

        store.set_session_duration(-3);
        expected.session_duration = -3;
        assert_eq!(store.config(), &expected);
    }

    #[test]
    fn every_field_reads_back_what_was_written() {
        let mut store = ConfigurationStore::default();
        let mut params = VoiceParams::new();
        params.insert("speed".into(), VoiceParamValue::float(0.9).unwrap());

        store.set_stream_provider(StreamProvider::Webrtc);
        store.set_api_host("h");
        store.set_api_credential("c");
        store.set_auth_method(AuthMethod::ApiKey);
        store.set_avatar_id("a");
        store.set_voice_id("v");
        store.set_knowledge_id("k");
        store.set_session_duration(42);
        store.set_mode_type(5);
        store.set_language("ja");
        store.set_scene_mode(SceneMode::Meeting);
        store.set_e2e_type(E2eType::OpenAi);
        store.set_background_url("bg");
        store.set_voice_url("vu");
        store.set_voice_params(params.clone());
        store.set_video_enabled(false);
        store.set_audio_enabled(false);
        store.set_video_quality(Quality::Medium);
        store.set_audio_quality(Quality::Low);

        let cfg = store.config();
        assert_eq!(cfg.stream_provider, StreamProvider::Webrtc);
        assert_eq!(cfg.api_host, "h");
        assert_eq!(cfg.api_credential, "c");
        assert_eq!(cfg.auth_method, AuthMethod::ApiKey);
        assert_eq!(cfg.avatar_id, "a");
        assert_eq!(cfg.voice_id, "v");
        assert_eq!(cfg.knowledge_id, "k");
        assert_eq!(cfg.session_duration, 42);
        assert_eq!(cfg.mode_type, 5);
        assert_eq!(cfg.language, "ja");
        assert_eq!(cfg.scene_mode, SceneMode::Meeting);
        assert_eq!(cfg.e2e_type, E2eType::OpenAi);
        assert_eq!(cfg.background_url, "bg");
        assert_eq!(cfg.voice_url, "vu");
        assert_eq!(cfg.voice_params, params);
        assert!(!cfg.video_enabled);
        assert!(!cfg.audio_enabled);
        assert_eq!(cfg.video_quality, Quality::Medium);
        assert_eq!(cfg.audio_quality, Quality::Low);
    }

    #[test]
    fn scene_mode_change_keeps_e2e_type() {
        let mut store = ConfigurationStore::default();
        store.set_scene_mode(SceneMode::FastDialogue);
        store.set_e2e_type(E2eType::OpenAi);
        store.set_scene_mode(SceneMode::Meeting);
        assert_eq!(store.config().e2e_type, E2eType::OpenAi);
    }

    // ---- Derived queries ---

    #[test]
    fn configured_flags() {
        let mut store = ConfigurationStore::default();
        assert!(!store.is_api_configured());
        assert!(!store.is_avatar_configured());
        assert!(!store.is_fully_configured());

        store.set_api_host("h");
        assert!(!store.is_api_configured());
        store.set_api_credential("c");
        assert!(store.is_api_configured());
        assert!(!store.is_fully_configured());

        store.set_avatar_id("a");
        assert!(store.is_avatar_configured());
        assert!(store.is_fully_configured());

        store.set_api_host("");
        assert!(!store.is_fully_configured());
    }

    #[test]
    fn fresh_store_reports_three_missing_fields() {
        let store = ConfigurationStore::default();
        assert_eq!(
            store.validate().errors,
            vec![MSG_HOST_REQUIRED, MSG_TOKEN_REQUIRED, MSG_AVATAR_REQUIRED]
        );
    }

    #[test]
    fn complete_store_is_valid() {
        let mut store = ConfigurationStore::default();
        store.set_api_host("h");
        store.set_api_credential("c");
        store.set_avatar_id("a");
        store.set_session_duration(10);
        store.set_mode_type(2);

        assert!(store.is_fully_configured());
        let report = store.validate();
        assert!(report.is_valid);
        assert!(report.errors.is_empty());

        store.set_mode_type(5);
        assert_eq!(store.validate().errors, vec![MSG_MODE_TYPE_RANGE]);
    }

    #[test]
    fn duration_flag_clears_when_fixed() {
        let mut store = ConfigurationStore::default();
        store.set_api_host("h");
        store.set_api_credential("c");
        store.set_avatar_id("a");

        store.set_session_duration(0);
        assert_eq!(store.validate().errors, vec![MSG_DURATION_POSITIVE]);
        let before = store.snapshot();

        store.set_session_duration(1);
        assert!(store.validate().is_valid);

        let mut expected = before;
        expected.session_duration = 1;
        assert_eq!(store.config(), &expected);
    }

    #[test]
    fn session_options_follow_current_state() {
        let mut store = ConfigurationStore::default();
        store.set_avatar_id("av1");
        store.set_session_duration(10);
        store.set_mode_type(2);
        store.set_voice_id("");
        store.set_knowledge_id("");

        assert_eq!(
            store.session_options().to_json(),
            json!({
                "avatar_id": "av1",
                "duration": 10,
                "mode_type": 2,
                "stream_type": "agora",
            })
        );

        store.set_language("en");
        assert_eq!(store.session_options().language.as_deref(), Some("en"));
    }

    // ---- Reset ---

    #[test]
    fn reset_ignores_environment_seed_and_is_idempotent() {
        let mut seed = Configuration::default();
        seed.api_host = "from-env".into();
        let mut store = ConfigurationStore::new(seed);
        store.set_avatar_id("a");

        store.reset_to_defaults();
        let once = store.snapshot();
        store.reset_to_defaults();

        assert_eq!(once, Configuration::default());
        assert_eq!(store.snapshot(), once);
    }

    // ---- Persistence ---

    #[test]
    fn every_mutation_writes_a_snapshot() {
        let (mut store, storage) = persistent_store();
        assert!(storage.get(STORAGE_KEY).is_none());

        store.set_avatar_id("av1");
        assert_eq!(stored(&storage).avatar_id, "av1");

        store.set_mode_type(3);
        assert_eq!(stored(&storage), store.snapshot());
    }

    #[test]
    fn reset_writes_defaults() {
        let (mut store, storage) = persistent_store();
        store.set_avatar_id("av1");
        store.reset_to_defaults();
        assert_eq!(stored(&storage), Configuration::default());
    }

    #[test]
    fn store_rehydrates_from_previous_session() {
        let (mut store, storage) = persistent_store();
        store.set_api_host("h");
        store.set_voice_params(VoiceParams::from([(
            "k".to_string(),
            VoiceParamValue::Bool(true),
        )]));
        store.set_e2e_type(E2eType::OpenAi);
        let before = store.snapshot();
        drop(store);

        let mut seed = Configuration::default();
        seed.api_host = "env-host".into();
        seed.voice_id = "env-voice".into();
        let reopened = ConfigurationStore::with_persistence(seed, Persistence::new(storage));

        // Every field was written, so the snapshot wins everywhere.
        assert_eq!(reopened.snapshot(), before);
    }

    #[test]
    fn write_failure_keeps_in_memory_change() {
        let storage = MemoryStorage::failing_writes();
        let mut store = ConfigurationStore::with_persistence(
            Configuration::default(),
            Persistence::new(storage),
        );

        store.set_avatar_id("av1");

        assert_eq!(store.config().avatar_id, "av1");
        assert!(store.flush().is_err());
    }

    #[test]
    fn flush_without_persistence_is_ok() {
        let store = ConfigurationStore::default();
        assert!(!store.is_persistent());
        assert!(store.flush().is_ok());
    }

    // ---- Observation ---

    #[test]
    fn subscribers_see_changes_and_reset() {
        let mut store = ConfigurationStore::default();
        let mut rx = store.subscribe();

        store.set_avatar_id("a");
        store.set_mode_type(3);
        store.reset_to_defaults();

        assert_eq!(
            drain(&mut rx),
            vec![
                ConfigEvent::FieldChanged(ConfigField::AvatarId),
                ConfigEvent::FieldChanged(ConfigField::ModeType),
                ConfigEvent::Reset,
            ]
        );
    }

    #[test]
    fn writing_the_same_value_is_silent_but_persisted() {
        let (mut store, storage) = persistent_store();
        let mut rx = store.subscribe();

        store.set_language("en");
        storage.insert(STORAGE_KEY, "{}");
        store.set_language("en");

        assert_eq!(
            drain(&mut rx),
            vec![ConfigEvent::FieldChanged(ConfigField::Language)]
        );
        assert_eq!(stored(&storage).language, "en");
    }

    #[test]
    fn dropped_subscribers_are_pruned() {
        let mut store = ConfigurationStore::default();
        let rx = store.subscribe();
        let _kept = store.subscribe();
        assert_eq!(store.subscriber_count(), 2);

        drop(rx);
        store.set_voice_id("v");
        assert_eq!(store.subscriber_count(), 1);
    }

    // ---- Textual setter ---

    #[test]
    fn set_from_str_parses_each_kind() {
        let mut store = ConfigurationStore::default();

        store.set_from_str(ConfigField::StreamProvider, "livekit").unwrap();
        store.set_from_str(ConfigField::AuthMethod, "api_key").unwrap();
        store.set_from_str(ConfigField::SessionDuration, " 15 ").unwrap();
        store.set_from_str(ConfigField::ModeType, "1").unwrap();
        store.set_from_str(ConfigField::SceneMode, "fast_dialogue").unwrap();
        store.set_from_str(ConfigField::VideoEnabled, "off").unwrap();
        store.set_from_str(ConfigField::AudioQuality, "medium").unwrap();
        store
            .set_from_str(ConfigField::VoiceParams, r#"{"speed": 1.1, "style": "calm"}"#)
            .unwrap();
        store.set_from_str(ConfigField::ApiHost, "https://h").unwrap();

        let cfg = store.config();
        assert_eq!(cfg.stream_provider, StreamProvider::Livekit);
        assert_eq!(cfg.auth_method, AuthMethod::ApiKey);
        assert_eq!(cfg.session_duration, 15);
        assert_eq!(cfg.mode_type, 1);
        assert_eq!(cfg.scene_mode, SceneMode::FastDialogue);
        assert!(!cfg.video_enabled);
        assert_eq!(cfg.audio_quality, Quality::Medium);
        assert_eq!(cfg.voice_params["style"], VoiceParamValue::from("calm"));
        assert_eq!(cfg.api_host, "https://h");

        store.set_from_str(ConfigField::VoiceParams, "").unwrap();
        assert!(store.config().voice_params.is_empty());
    }

    #[test]
    fn set_from_str_rejects_bad_input_without_changes() {
        let mut store = ConfigurationStore::default();
        let before = store.snapshot();

        for (field, raw) in [
            (ConfigField::SessionDuration, "ten"),
            (ConfigField::VideoEnabled, "maybe"),
            (ConfigField::VideoQuality, "4k"),
            (ConfigField::VoiceParams, "[1, 2]"),
        ] {
            let err = store.set_from_str(field, raw).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidValue { field: f, .. } if f == field));
        }
        assert_eq!(store.snapshot(), before);
    }

    // ---- SharedStore ---

    #[test]
    fn shared_store_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SharedStore>();
    }

    #[test]
    fn shared_store_can_be_cloned_and_mutated() {
        let shared = new_shared_store(ConfigurationStore::default());
        let other = Arc::clone(&shared);

        shared.lock().unwrap().set_avatar_id("av1");
        assert_eq!(other.lock().unwrap().config().avatar_id, "av1");
    }
}
