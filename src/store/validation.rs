//! Pre-flight validation of a [`Configuration`].
//!
//! Problems are reported as data, never as errors: [`validate`] always returns
//! a [`ValidationReport`] whose messages are in a fixed rule order.

use serde::Serialize;

use crate::config::{AuthMethod, Configuration, MODE_TYPE_RANGE};

pub const MSG_HOST_REQUIRED: &str = "OpenAPI host is required";
pub const MSG_TOKEN_REQUIRED: &str = "OpenAPI token is required";
pub const MSG_API_KEY_REQUIRED: &str = "API key is required";
pub const MSG_AVATAR_REQUIRED: &str = "Avatar ID is required";
pub const MSG_DURATION_POSITIVE: &str = "Session duration must be greater than 0";
pub const MSG_MODE_TYPE_RANGE: &str = "Mode type must be between 1 and 3";

/// Outcome of [`validate`].  `is_valid` is `true` exactly when `errors` is
/// empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationReport {
    fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

/// Check the fields a session start needs.
///
/// Rules, in order:
/// 1. host present
/// 2. credential present (message depends on the auth method)
/// 3. avatar present
/// 4. duration positive
/// 5. mode type within `1..=3`
pub fn validate(config: &Configuration) -> ValidationReport {
    let mut errors = Vec::new();

    if config.api_host.is_empty() {
        errors.push(MSG_HOST_REQUIRED.to_string());
    }

    if config.api_credential.is_empty() {
        let msg = match config.auth_method {
            AuthMethod::Token => MSG_TOKEN_REQUIRED,
            AuthMethod::ApiKey => MSG_API_KEY_REQUIRED,
        };
        errors.push(msg.to_string());
    }

    if config.avatar_id.is_empty() {
        errors.push(MSG_AVATAR_REQUIRED.to_string());
    }

    if config.session_duration <= 0 {
        errors.push(MSG_DURATION_POSITIVE.to_string());
    }

    if !MODE_TYPE_RANGE.contains(&config.mode_type) {
        errors.push(MSG_MODE_TYPE_RANGE.to_string());
    }

    ValidationReport::from_errors(errors)
}
