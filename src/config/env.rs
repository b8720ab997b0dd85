//! Environment-derived initial values.
//!
//! Each variable maps to exactly one field and only seeds it; a persisted
//! snapshot still wins.  Empty variables are treated as unset.

use std::str::FromStr;

use super::settings::{AuthMethod, Configuration, StreamProvider};

pub const ENV_STREAM_PROVIDER: &str = "AVATAR_STREAM_PROVIDER";
pub const ENV_OPENAPI_HOST: &str = "AVATAR_OPENAPI_HOST";
pub const ENV_OPENAPI_TOKEN: &str = "AVATAR_OPENAPI_TOKEN";
pub const ENV_AUTH_METHOD: &str = "AVATAR_AUTH_METHOD";
pub const ENV_AVATAR_ID: &str = "AVATAR_AVATAR_ID";
pub const ENV_VOICE_ID: &str = "AVATAR_VOICE_ID";
pub const ENV_KNOWLEDGE_ID: &str = "AVATAR_KNOWLEDGE_ID";
pub const ENV_LANGUAGE: &str = "AVATAR_LANGUAGE";

/// Values picked up from the environment.  `None` means "not provided".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnvDefaults {
    pub stream_provider: Option<StreamProvider>,
    pub api_host: Option<String>,
    pub api_credential: Option<String>,
    pub auth_method: Option<AuthMethod>,
    pub avatar_id: Option<String>,
    pub voice_id: Option<String>,
    pub knowledge_id: Option<String>,
    pub language: Option<String>,
}

impl EnvDefaults {
    /// Read from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read through an arbitrary lookup (tests pass a map).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let text = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        Self {
            stream_provider: parsed(text(ENV_STREAM_PROVIDER), ENV_STREAM_PROVIDER),
            api_host: text(ENV_OPENAPI_HOST),
            api_credential: text(ENV_OPENAPI_TOKEN),
            auth_method: parsed(text(ENV_AUTH_METHOD), ENV_AUTH_METHOD),
            avatar_id: text(ENV_AVATAR_ID),
            voice_id: text(ENV_VOICE_ID),
            knowledge_id: text(ENV_KNOWLEDGE_ID),
            language: text(ENV_LANGUAGE),
        }
    }

    /// Overlay the provided values onto `base`.
    pub fn apply(&self, mut base: Configuration) -> Configuration {
        if let Some(v) = self.stream_provider {
            base.stream_provider = v;
        }
        if let Some(v) = &self.api_host {
            base.api_host = v.clone();
        }
        if let Some(v) = &self.api_credential {
            base.api_credential = v.clone();
        }
        if let Some(v) = self.auth_method {
            base.auth_method = v;
        }
        if let Some(v) = &self.avatar_id {
            base.avatar_id = v.clone();
        }
        if let Some(v) = &self.voice_id {
            base.voice_id = v.clone();
        }
        if let Some(v) = &self.knowledge_id {
            base.knowledge_id = v.clone();
        }
        if let Some(v) = &self.language {
            base.language = v.clone();
        }
        base
    }

    /// Literal defaults with the environment applied on top.
    pub fn seed(&self) -> Configuration {
        self.apply(Configuration::default())
    }
}

fn parsed<T>(raw: Option<String>, name: &str) -> Option<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = raw?;
    match raw.parse() {
        Ok(v) => Some(v),
        Err(e) => {
            log::warn!("Ignoring {name}: {e}");
            None
        }
    }
}
