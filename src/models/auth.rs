use serde::{Deserialize, Serialize};

/// Profile snapshot as the backend returns it.
///
/// `country` and `city` are optional: accounts created before those
/// fields existed simply don't have them.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `token` and `user` are both optional so a malformed payload parses
/// instead of erroring; the session store rejects the login if the
/// token is missing.
#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

/// Registration draft sent to `/auth/register`.
#[derive(Clone, PartialEq, Serialize, Debug, Default)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

/// Editable profile fields sent to `PUT /auth/profile`.
#[derive(Clone, PartialEq, Serialize, Debug, Default)]
pub struct ProfileUpdate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

/// Error body the backend attaches to non-2xx responses.
#[derive(Clone, PartialEq, Deserialize, Debug, Default)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
