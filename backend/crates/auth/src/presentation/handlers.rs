//! HTTP Handlers

use axum::Json;
use axum::extract::{ConnectInfo, Request, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use std::net::SocketAddr;
use std::sync::Arc;

use platform::cookie::extract_cookie;

use crate::application::config::AuthConfig;
use crate::application::{
    AuthenticationDetailsUseCase, CurrentUserUseCase, LoginInput, LoginUseCase,
    SaveLoginIpUseCase,
};
use crate::domain::registry::SessionRegistry;
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{
    Authentication, AuthenticationDetailsResponse, LoginRequest, LoginResponse, UserResponse,
    WhoAmIResponse,
};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub registry: Arc<SessionRegistry>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Login
// ============================================================================

/// POST /rest/user/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<LoginRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(
        state.repo.clone(),
        state.registry.clone(),
        state.config.clone(),
    );

    let output = use_case
        .execute(LoginInput {
            email: req.email,
            password: req.password,
        })
        .await?;

    let cookie = state
        .config
        .token_cookie
        .set_cookie_header(&output.token)
        .ok_or_else(|| AuthError::Internal("token is not a valid cookie value".to_string()))?;

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(LoginResponse {
            authentication: Authentication {
                token: output.token,
                umail: output.user.email.clone(),
            },
        }),
    ))
}

// ============================================================================
// Who Am I
// ============================================================================

/// GET /rest/user/whoami
pub async fn whoami<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
) -> Json<WhoAmIResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let token = extract_cookie(&headers, state.config.cookie_name());
    let output = CurrentUserUseCase::new(state.registry.clone()).execute(token);

    Json(WhoAmIResponse::from(output))
}

// ============================================================================
// Authentication Details
// ============================================================================

/// GET /rest/user/authentication-details
pub async fn authentication_details<R>(
    State(state): State<AuthAppState<R>>,
) -> AuthResult<Json<AuthenticationDetailsResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = AuthenticationDetailsUseCase::new(state.repo.clone(), state.registry.clone());
    let users = use_case.execute().await?;

    Ok(Json(AuthenticationDetailsResponse::from(users)))
}

// ============================================================================
// Save Login IP
// ============================================================================

/// POST /rest/user/save-login-ip
pub async fn save_login_ip<R>(
    State(state): State<AuthAppState<R>>,
    req: Request,
) -> AuthResult<Json<UserResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let (parts, _body) = req.into_parts();
    let peer_ip = parts
        .extensions
        .get::<ConnectInfo<SocketAddr>>()
        .map(|info| info.0.ip());

    let use_case = SaveLoginIpUseCase::new(state.repo.clone(), state.registry.clone());
    let user = use_case.execute(&parts.headers, peer_ip).await?;

    Ok(Json(UserResponse::from(user)))
}
