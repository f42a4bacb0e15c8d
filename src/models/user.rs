use serde::{Deserialize, Serialize};

/// An application user. The password is only ever populated on the way in
/// (registration, credential checks); services clear it before a user leaves
/// the service boundary, and serde omits the cleared field entirely.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Store-assigned primary key. Zero on records not yet persisted.
    #[serde(default)]
    pub id: i64,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: String,
}

impl User {
    /// Copy with the password cleared. Applied to every user that crosses
    /// the service boundary outward.
    pub fn without_password(mut self) -> User {
        self.password = None;
        self
    }
}
