use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub const AUTHENTICATE_PATH: &str = "/authenticate";
pub const REDIR_PARAM: &str = "redir";

pub const LOGGED_IN_LABEL: &str = "Log Out";
pub const LOGGED_OUT_LABEL: &str = "Log In";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginStateError {
    #[error("authenticate endpoint returned status {status}: {status_text}")]
    Status { status: u16, status_text: String },
    #[error("failed to decode login state payload: {0}")]
    Decode(String),
    #[error("network error: {0}")]
    Network(String),
}

/// Wire payload of `GET /authenticate`. Field names follow the endpoint's
/// camelCase JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginState {
    #[serde(rename = "isLoggedIn")]
    pub is_logged_in: bool,
    #[serde(rename = "toggleLoginURL")]
    pub toggle_login_url: String,
    #[serde(rename = "autoRedir", default)]
    pub auto_redir: bool,
    #[serde(
        rename = "userProfileURL",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub user_profile_url: Option<String>,
}

impl LoginState {
    /// Display text for every `auth-button` element on the page.
    pub fn button_label(&self) -> &'static str {
        if self.is_logged_in {
            LOGGED_IN_LABEL
        } else {
            LOGGED_OUT_LABEL
        }
    }

    /// Where to send a signed-out visitor of a login-required page.
    /// `None` means the page renders normally.
    pub fn forced_redirect(&self) -> Option<&str> {
        if self.auto_redir && !self.is_logged_in {
            Some(&self.toggle_login_url)
        } else {
            None
        }
    }
}

/// Request path for the login-state lookup. The pathname must already be
/// URI-component encoded; the shell encodes with the browser's own routine.
pub fn authenticate_request_path(encoded_pathname: &str) -> String {
    format!("{AUTHENTICATE_PATH}?{REDIR_PARAM}={encoded_pathname}")
}

pub fn decode_login_state(raw: &str) -> Result<LoginState, LoginStateError> {
    serde_json::from_str(raw).map_err(|error| LoginStateError::Decode(error.to_string()))
}

/// Seam between the auth button controller and the network stack. The wasm
/// shell implements this over gloo-net; tests implement it in memory.
#[async_trait(?Send)]
pub trait LoginStateTransport {
    async fn fetch_login_state(&self, encoded_pathname: &str)
    -> Result<LoginState, LoginStateError>;
}
