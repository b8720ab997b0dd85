//! Session configuration record, its enumerated field types and literal
//! defaults.
//!
//! Every type implements `Serialize`, `Deserialize`, `Default` and `Clone` so
//! the whole record can be round-tripped through the JSON snapshot written by
//! [`crate::persist::Persistence`].  Enumerated types serialise under their
//! wire names, which are also what [`FromStr`] accepts.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// ParseValueError
// ---------------------------------------------------------------------------

/// A textual value did not name any variant of an enumerated field type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}' (expected one of: {expected})")]
pub struct ParseValueError {
    /// Human-readable name of the type being parsed.
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
    /// Quoted list of accepted wire names.
    pub expected: &'static str,
}

/// Implements `as_str`, `Display` and `FromStr` for a fieldless enum from a
/// single table of `Variant => "wire-name"` pairs.
macro_rules! wire_names {
    ($ty:ident, $kind:literal, { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $ty {
            /// All variants, in declaration order.
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            /// Wire name, as stored in the snapshot.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($ty::$variant => $name),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = ParseValueError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim() {
                    $($name => Ok($ty::$variant),)+
                    other => Err(ParseValueError {
                        kind: $kind,
                        value: other.to_string(),
                        expected: concat!($("'", $name, "' "),+),
                    }),
                }
            }
        }
    };
}

// ---------------------------------------------------------------------------
// StreamProvider
// ---------------------------------------------------------------------------

/// Streaming transport used to carry the avatar's audio/video.
///
/// Sent to the session API as `stream_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamProvider {
    /// Agora RTC.
    #[default]
    Agora,
    /// LiveKit SFU.
    Livekit,
    /// Plain peer-to-peer WebRTC.
    Webrtc,
}

wire_names!(StreamProvider, "stream provider", {
    Agora => "agora",
    Livekit => "livekit",
    Webrtc => "webrtc",
});

// ---------------------------------------------------------------------------
// AuthMethod
// ---------------------------------------------------------------------------

/// How `api_credential` is presented to the control API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthMethod {
    /// A short-lived OpenAPI bearer token.
    #[default]
    Token,
    /// A long-lived API key.
    ApiKey,
}

wire_names!(AuthMethod, "auth method", {
    Token => "token",
    ApiKey => "api_key",
});

// ---------------------------------------------------------------------------
// SceneMode
// ---------------------------------------------------------------------------

/// Optional behavioural profile for the session.
///
/// `Default` is stored as the empty string and is left out of the session
/// options payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SceneMode {
    /// Let the service pick.
    #[default]
    #[serde(rename = "")]
    Default,
    /// Low-latency conversational profile.
    #[serde(rename = "fast_dialogue")]
    FastDialogue,
    /// Multi-party meeting profile.
    #[serde(rename = "meeting")]
    Meeting,
}

wire_names!(SceneMode, "scene mode", {
    Default => "",
    FastDialogue => "fast_dialogue",
    Meeting => "meeting",
});

impl SceneMode {
    /// `true` for the empty ("use default") value.
    pub fn is_empty(&self) -> bool {
        matches!(self, SceneMode::Default)
    }
}

// ---------------------------------------------------------------------------
// E2eType
// ---------------------------------------------------------------------------

/// Optional end-to-end integration.
///
/// Only consulted by consumers when the scene mode is
/// [`SceneMode::FastDialogue`]; the store itself never couples the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum E2eType {
    /// No end-to-end integration.
    #[default]
    #[serde(rename = "")]
    None,
    /// OpenAI realtime.
    #[serde(rename = "openai")]
    OpenAi,
}

wire_names!(E2eType, "e2e type", {
    None => "",
    OpenAi => "openai",
});

impl E2eType {
    /// `true` when no integration is selected.
    pub fn is_empty(&self) -> bool {
        matches!(self, E2eType::None)
    }
}

// ---------------------------------------------------------------------------
// Quality
// ---------------------------------------------------------------------------

/// Media quality tier, shared by the video and audio settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    Low,
    Medium,
    #[default]
    High,
}

wire_names!(Quality, "quality", {
    Low => "low",
    Medium => "medium",
    High => "high",
});

// ---------------------------------------------------------------------------
// VoiceParams
// ---------------------------------------------------------------------------

/// A single free-form voice tuning value.
///
/// Untagged so the JSON form is the plain value: `1.2`, `"warm"`, `[1, 2]`,
/// `{"pitch": 3}`.  Numbers are kept as [`serde_json::Number`], which holds
/// any `i64`, `u64` or finite `f64` exactly and cannot hold NaN or infinity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VoiceParamValue {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
    List(Vec<VoiceParamValue>),
    Map(BTreeMap<String, VoiceParamValue>),
}

impl VoiceParamValue {
    /// A float value, or `None` for NaN and infinities, which JSON cannot
    /// carry.
    pub fn float(v: f64) -> Option<Self> {
        serde_json::Number::from_f64(v).map(VoiceParamValue::Number)
    }
}

impl From<bool> for VoiceParamValue {
    fn from(v: bool) -> Self {
        VoiceParamValue::Bool(v)
    }
}

impl From<i64> for VoiceParamValue {
    fn from(v: i64) -> Self {
        VoiceParamValue::Number(v.into())
    }
}

impl From<u64> for VoiceParamValue {
    fn from(v: u64) -> Self {
        VoiceParamValue::Number(v.into())
    }
}

impl From<&str> for VoiceParamValue {
    fn from(v: &str) -> Self {
        VoiceParamValue::Text(v.to_string())
    }
}

impl From<String> for VoiceParamValue {
    fn from(v: String) -> Self {
        VoiceParamValue::Text(v)
    }
}

/// Voice tuning parameters keyed by name.  Keys are unique; ordering is
/// irrelevant but kept sorted for stable snapshots.
pub type VoiceParams = BTreeMap<String, VoiceParamValue>;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Default requested session length, in minutes.
pub const DEFAULT_SESSION_DURATION: i64 = 10;

/// Default interaction mode (dialogue).
pub const DEFAULT_MODE_TYPE: i32 = 2;

/// Inclusive range of valid interaction modes.
pub const MODE_TYPE_RANGE: std::ops::RangeInclusive<i32> = 1..=3;

/// Every user-adjustable parameter of an avatar streaming session.
///
/// Values are stored exactly as written; range checks happen in
/// [`crate::store::validate`], never on write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    /// Streaming transport.
    pub stream_provider: StreamProvider,
    /// Base address of the control API.
    pub api_host: String,
    /// Token or API key, see `auth_method`.  Stored in plain form.
    pub api_credential: String,
    /// Interpretation of `api_credential`.
    pub auth_method: AuthMethod,
    /// Selected avatar identity.
    pub avatar_id: String,
    /// Selected voice identity.
    pub voice_id: String,
    /// Optional knowledge-base binding.
    pub knowledge_id: String,
    /// Requested session length in minutes.  Must be positive to validate.
    pub session_duration: i64,
    /// Interaction mode, valid in `1..=3`.
    pub mode_type: i32,
    /// Preferred language code, empty for the service default.
    pub language: String,
    pub scene_mode: SceneMode,
    pub e2e_type: E2eType,
    /// Background asset URL.  The UI may blank this for avatar types that do
    /// not support backgrounds.
    pub background_url: String,
    /// Custom voice asset URL.
    pub voice_url: String,
    pub voice_params: VoiceParams,
    pub video_enabled: bool,
    pub audio_enabled: bool,
    pub video_quality: Quality,
    pub audio_quality: Quality,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            stream_provider: StreamProvider::default(),
            api_host: String::new(),
            api_credential: String::new(),
            auth_method: AuthMethod::default(),
            avatar_id: String::new(),
            voice_id: String::new(),
            knowledge_id: String::new(),
            session_duration: DEFAULT_SESSION_DURATION,
            mode_type: DEFAULT_MODE_TYPE,
            language: String::new(),
            scene_mode: SceneMode::default(),
            e2e_type: E2eType::default(),
            background_url: String::new(),
            voice_url: String::new(),
            voice_params: VoiceParams::new(),
            video_enabled: true,
            audio_enabled: true,
            video_quality: Quality::default(),
            audio_quality: Quality::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
