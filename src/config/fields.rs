//! Catalogue of configuration fields.
//!
//! [`ConfigField`] names each field of [`Configuration`] by its snapshot key.
//! Change events carry it, and the CLI uses it to route `set <field> <value>`.

use std::fmt;
use std::str::FromStr;

use super::settings::ParseValueError;

/// One field of [`super::Configuration`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigField {
    StreamProvider,
    ApiHost,
    ApiCredential,
    AuthMethod,
    AvatarId,
    VoiceId,
    KnowledgeId,
    SessionDuration,
    ModeType,
    Language,
    SceneMode,
    E2eType,
    BackgroundUrl,
    VoiceUrl,
    VoiceParams,
    VideoEnabled,
    AudioEnabled,
    VideoQuality,
    AudioQuality,
}

impl ConfigField {
    /// Every field, in record order.
    pub const ALL: [ConfigField; 19] = [
        ConfigField::StreamProvider,
        ConfigField::ApiHost,
        ConfigField::ApiCredential,
        ConfigField::AuthMethod,
        ConfigField::AvatarId,
        ConfigField::VoiceId,
        ConfigField::KnowledgeId,
        ConfigField::SessionDuration,
        ConfigField::ModeType,
        ConfigField::Language,
        ConfigField::SceneMode,
        ConfigField::E2eType,
        ConfigField::BackgroundUrl,
        ConfigField::VoiceUrl,
        ConfigField::VoiceParams,
        ConfigField::VideoEnabled,
        ConfigField::AudioEnabled,
        ConfigField::VideoQuality,
        ConfigField::AudioQuality,
    ];

    /// Key used for this field in the persisted snapshot.
    pub fn key(&self) -> &'static str {
        match self {
            ConfigField::StreamProvider => "stream_provider",
            ConfigField::ApiHost => "api_host",
            ConfigField::ApiCredential => "api_credential",
            ConfigField::AuthMethod => "auth_method",
            ConfigField::AvatarId => "avatar_id",
            ConfigField::VoiceId => "voice_id",
            ConfigField::KnowledgeId => "knowledge_id",
            ConfigField::SessionDuration => "session_duration",
            ConfigField::ModeType => "mode_type",
            ConfigField::Language => "language",
            ConfigField::SceneMode => "scene_mode",
            ConfigField::E2eType => "e2e_type",
            ConfigField::BackgroundUrl => "background_url",
            ConfigField::VoiceUrl => "voice_url",
            ConfigField::VoiceParams => "voice_params",
            ConfigField::VideoEnabled => "video_enabled",
            ConfigField::AudioEnabled => "audio_enabled",
            ConfigField::VideoQuality => "video_quality",
            ConfigField::AudioQuality => "audio_quality",
        }
    }

    /// `true` for the credential, which displays should mask.
    pub fn is_secret(&self) -> bool {
        matches!(self, ConfigField::ApiCredential)
    }
}

impl fmt::Display for ConfigField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ConfigField {
    type Err = ParseValueError;

    /// Accepts the snapshot key; dashes are treated as underscores so
    /// `api-host` works on the command line.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('-', "_");
        ConfigField::ALL
            .iter()
            .copied()
            .find(|field| field.key() == wanted)
            .ok_or_else(|| ParseValueError {
                kind: "field",
                value: s.to_string(),
                expected: "any snapshot key, e.g. 'api_host' 'avatar_id' 'mode_type'",
            })
    }
}
