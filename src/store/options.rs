//! Session options payload handed to the streaming session start call.
//!
//! Optional fields are omitted rather than sent as empty strings so the
//! streaming API never receives an explicit empty override.

use serde::Serialize;

use crate::config::{Configuration, E2eType, SceneMode, StreamProvider, VoiceParams};

/// Payload derived from the current [`Configuration`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionOptions {
    pub avatar_id: String,
    pub duration: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub knowledge_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_url: Option<String>,
    pub mode_type: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_params: Option<VoiceParams>,
    pub stream_type: StreamProvider,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scene_mode: Option<SceneMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub e2e_type: Option<E2eType>,
}

impl SessionOptions {
    pub fn from_config(config: &Configuration) -> Self {
        Self {
            avatar_id: config.avatar_id.clone(),
            duration: config.session_duration,
            knowledge_id: non_empty(&config.knowledge_id),
            voice_id: non_empty(&config.voice_id),
            voice_url: non_empty(&config.voice_url),
            language: non_empty(&config.language),
            background_url: non_empty(&config.background_url),
            mode_type: config.mode_type,
            voice_params: (!config.voice_params.is_empty()).then(|| config.voice_params.clone()),
            stream_type: config.stream_provider,
            scene_mode: (!config.scene_mode.is_empty()).then_some(config.scene_mode),
            e2e_type: (!config.e2e_type.is_empty()).then_some(config.e2e_type),
        }
    }

    /// The payload as a JSON object.
    pub fn to_json(&self) -> serde_json::Value {
        // Plain strings, integers and maps with string keys always encode.
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

impl From<&Configuration> for SessionOptions {
    fn from(config: &Configuration) -> Self {
        Self::from_config(config)
    }
}

fn non_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_string())
}
