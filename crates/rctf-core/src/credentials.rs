use crate::prelude::*;

/// Shown on the login form when no credential pair matched.
pub const LOGIN_ERROR: &str = "ユーザー名またはパスワードが間違っています";

/// A username/password pair, both as submitted by the login form
/// and as stored in the credential list.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Credentials {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// View model of the login form.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LoginPage {
    pub error: Option<&'static str>,
}

impl LoginPage {
    pub fn failed() -> Self {
        Self {
            error: Some(LOGIN_ERROR),
        }
    }
}
