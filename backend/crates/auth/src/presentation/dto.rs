//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::application::{CurrentUserOutput, UserDetailsOutput};
use crate::domain::entity::user::User;
use crate::domain::value_object::user_id::UserId;

// ============================================================================
// Login
// ============================================================================

/// Login request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub authentication: Authentication,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Authentication {
    pub token: String,
    pub umail: String,
}

// ============================================================================
// Who Am I
// ============================================================================

/// `{"user": {...}}`, with absent fields omitted
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WhoAmIResponse {
    pub user: CurrentUserBody,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUserBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login_ip: Option<String>,
}

impl From<CurrentUserOutput> for WhoAmIResponse {
    fn from(output: CurrentUserOutput) -> Self {
        Self {
            user: CurrentUserBody {
                id: output.id,
                email: output.email,
                last_login_ip: output.last_login_ip,
            },
        }
    }
}

// ============================================================================
// Authentication Details
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticationDetailsResponse {
    pub status: &'static str,
    pub data: Vec<UserDetailsBody>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDetailsBody {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub password: String,
    pub last_login_ip: Option<String>,
    pub token: Option<String>,
}

impl From<UserDetailsOutput> for UserDetailsBody {
    fn from(output: UserDetailsOutput) -> Self {
        Self {
            id: output.id,
            username: output.username,
            email: output.email,
            password: output.password,
            last_login_ip: output.last_login_ip,
            token: output.token,
        }
    }
}

impl From<Vec<UserDetailsOutput>> for AuthenticationDetailsResponse {
    fn from(outputs: Vec<UserDetailsOutput>) -> Self {
        Self {
            status: "success",
            data: outputs.into_iter().map(UserDetailsBody::from).collect(),
        }
    }
}

// ============================================================================
// User (save-login-ip)
// ============================================================================

/// Directory user without the password hash
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub last_login_ip: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            last_login_ip: user.last_login_ip,
        }
    }
}
