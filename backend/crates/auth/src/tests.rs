//! Crate-level tests for the auth use cases and router

#[cfg(test)]
mod use_case_tests {
    use std::sync::Arc;

    use http::{HeaderMap, HeaderValue, header};

    use crate::application::{
        AuthConfig, AuthenticationDetailsUseCase, CurrentUserOutput, CurrentUserUseCase, LoginInput,
        LoginUseCase, SaveLoginIpUseCase,
    };
    use crate::domain::registry::SessionRegistry;
    use crate::domain::repository::UserRepository;
    use crate::domain::value_object::user_id::UserId;
    use crate::error::AuthError;
    use crate::infra::memory::InMemoryUserRepository;

    fn setup() -> (Arc<InMemoryUserRepository>, Arc<SessionRegistry>) {
        (
            Arc::new(InMemoryUserRepository::demo().unwrap()),
            Arc::new(SessionRegistry::new()),
        )
    }

    async fn login(
        repo: &Arc<InMemoryUserRepository>,
        registry: &Arc<SessionRegistry>,
        email: &str,
        password: &str,
    ) -> Result<String, AuthError> {
        let use_case = LoginUseCase::new(
            repo.clone(),
            registry.clone(),
            Arc::new(AuthConfig::default()),
        );
        let output = use_case
            .execute(LoginInput {
                email: email.to_string(),
                password: password.to_string(),
            })
            .await?;
        Ok(output.token)
    }

    #[tokio::test]
    async fn test_login_registers_token() {
        let (repo, registry) = setup();

        let token = login(&repo, &registry, "admin@juice-sh.op", "admin123")
            .await
            .unwrap();

        assert_eq!(token.len(), 43);
        let user = registry.get(&token).unwrap();
        assert_eq!(user.id, UserId::new(1));
        assert_eq!(registry.token_of(&UserId::new(1)), Some(token));
    }

    #[tokio::test]
    async fn test_login_email_is_case_insensitive() {
        let (repo, registry) = setup();

        assert!(
            login(&repo, &registry, "Jim@Juice-Sh.OP", "ncc-1701")
                .await
                .is_ok()
        );
    }

    #[tokio::test]
    async fn test_login_rejects_bad_credentials() {
        let (repo, registry) = setup();

        let wrong_password = login(&repo, &registry, "admin@juice-sh.op", "admin").await;
        assert!(matches!(wrong_password, Err(AuthError::InvalidCredentials)));

        let unknown = login(&repo, &registry, "nobody@juice-sh.op", "admin123").await;
        assert!(matches!(unknown, Err(AuthError::InvalidCredentials)));

        assert!(registry.is_empty());
    }

    #[tokio::test]
    async fn test_relogin_supersedes_token() {
        let (repo, registry) = setup();

        let first = login(&repo, &registry, "admin@juice-sh.op", "admin123")
            .await
            .unwrap();
        let second = login(&repo, &registry, "admin@juice-sh.op", "admin123")
            .await
            .unwrap();

        assert_ne!(first, second);
        assert_eq!(registry.token_of(&UserId::new(1)), Some(second));
        assert!(registry.get(&first).is_some());
    }

    #[tokio::test]
    async fn test_current_user() {
        let (repo, registry) = setup();
        let token = login(&repo, &registry, "jim@juice-sh.op", "ncc-1701")
            .await
            .unwrap();

        let use_case = CurrentUserUseCase::new(registry.clone());

        let output = use_case.execute(Some(&token));
        assert_eq!(output.id, Some(UserId::new(2)));
        assert_eq!(output.email.as_deref(), Some("jim@juice-sh.op"));

        assert_eq!(use_case.execute(None), CurrentUserOutput::default());
        assert_eq!(use_case.execute(Some("unknown")), CurrentUserOutput::default());
    }

    #[tokio::test]
    async fn test_authentication_details_lists_tokens() {
        let (repo, registry) = setup();
        let token = login(&repo, &registry, "admin@juice-sh.op", "admin123")
            .await
            .unwrap();

        let use_case = AuthenticationDetailsUseCase::new(repo.clone(), registry.clone());
        let users = use_case.execute().await.unwrap();

        assert_eq!(users.len(), 4);
        assert_eq!(users[0].token.as_deref(), Some(token.as_str()));
        let admin = repo.find_by_id(UserId::new(1)).await.unwrap().unwrap();
        assert_eq!(
            users[0].password.len(),
            admin.password_hash.as_phc_string().len()
        );
        assert!(users[0].password.chars().all(|c| c == '*'));
        assert!(users[1..].iter().all(|user| user.token.is_none()));
    }

    #[tokio::test]
    async fn test_save_login_ip() {
        let (repo, registry) = setup();
        let token = login(&repo, &registry, "bender@juice-sh.op", "OhG0dPlease1nsertLiquor!")
            .await
            .unwrap();

        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
        );
        headers.insert("true-client-ip", HeaderValue::from_static("<script>"));

        let use_case = SaveLoginIpUseCase::new(repo.clone(), registry.clone());
        let user = use_case.execute(&headers, None).await.unwrap();

        assert_eq!(user.last_login_ip.as_deref(), Some("<script>"));
        // the registry snapshot is not refreshed
        assert!(registry.get(&token).unwrap().last_login_ip.is_none());
    }

    #[tokio::test]
    async fn test_save_login_ip_falls_back_to_peer() {
        let (repo, registry) = setup();
        let token = login(&repo, &registry, "admin@juice-sh.op", "admin123")
            .await
            .unwrap();

        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
        );

        let use_case = SaveLoginIpUseCase::new(repo.clone(), registry.clone());
        let user = use_case
            .execute(&headers, Some("127.0.0.1".parse().unwrap()))
            .await
            .unwrap();

        assert_eq!(user.last_login_ip.as_deref(), Some("127.0.0.1"));
    }

    #[tokio::test]
    async fn test_save_login_ip_requires_session() {
        let (repo, registry) = setup();
        let use_case = SaveLoginIpUseCase::new(repo, registry);

        let result = use_case.execute(&HeaderMap::new(), None).await;
        assert!(matches!(result, Err(AuthError::Unauthenticated)));
    }
}

#[cfg(test)]
mod router_tests {
    use std::sync::Arc;

    use axum::Router;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use axum::middleware::from_fn_with_state;
    use axum::routing::get;
    use axum::{Extension, Json};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::application::AuthConfig;
    use crate::domain::registry::SessionRegistry;
    use crate::infra::memory::InMemoryUserRepository;
    use crate::presentation::middleware::{CurrentSession, require_bearer_session};
    use crate::presentation::router::auth_router;

    fn app() -> (Router, Arc<SessionRegistry>) {
        let registry = Arc::new(SessionRegistry::new());
        let router = auth_router(
            InMemoryUserRepository::demo().unwrap(),
            registry.clone(),
            AuthConfig::development(),
        );
        (router, registry)
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn login_request(email: &str, password: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/login")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                json!({ "email": email, "password": password }).to_string(),
            ))
            .unwrap()
    }

    async fn login_token(router: &Router) -> String {
        let response = router
            .clone()
            .oneshot(login_request("admin@juice-sh.op", "admin123"))
            .await
            .unwrap();
        let body = body_json(response).await;
        body["authentication"]["token"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_login_sets_cookie_and_returns_token() {
        let (router, registry) = app();

        let response = router
            .oneshot(login_request("admin@juice-sh.op", "admin123"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(cookie.starts_with("token="));
        assert!(!cookie.contains("Secure"));

        let body = body_json(response).await;
        let token = body["authentication"]["token"].as_str().unwrap();
        assert_eq!(body["authentication"]["umail"], "admin@juice-sh.op");
        assert!(cookie.starts_with(&format!("token={token}")));
        assert!(registry.get(token).is_some());
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let (router, _) = app();

        let response = router
            .oneshot(login_request("admin@juice-sh.op", "wrong"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(response.headers().get(header::SET_COOKIE).is_none());
    }

    #[tokio::test]
    async fn test_whoami() {
        let (router, _) = app();
        let token = login_token(&router).await;

        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/whoami")
                    .header(header::COOKIE, format!("language=en; token={token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["user"]["id"], 1);
        assert_eq!(body["user"]["email"], "admin@juice-sh.op");
        assert!(body["user"].get("lastLoginIp").is_none());
    }

    #[tokio::test]
    async fn test_whoami_without_cookie() {
        let (router, _) = app();

        let response = router
            .oneshot(Request::builder().uri("/whoami").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({ "user": {} }));
    }

    #[tokio::test]
    async fn test_authentication_details() {
        let (router, _) = app();
        let token = login_token(&router).await;

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/authentication-details")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "success");
        assert_eq!(body["data"][0]["token"], token.as_str());
        assert_eq!(body["data"][1]["token"], Value::Null);
        assert!(
            body["data"][0]["password"]
                .as_str()
                .unwrap()
                .chars()
                .all(|c| c == '*')
        );
    }

    #[tokio::test]
    async fn test_save_login_ip() {
        let (router, _) = app();
        let token = login_token(&router).await;

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/save-login-ip")
                    .header(header::AUTHORIZATION, format!("Bearer {token}"))
                    .header("True-Client-IP", "10.1.2.3")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["lastLoginIp"], "10.1.2.3");
        assert!(body.get("password").is_none());
    }

    #[tokio::test]
    async fn test_save_login_ip_unauthenticated() {
        let (router, _) = app();

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/save-login-ip")
                    .header(header::AUTHORIZATION, "Bearer nope")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    fn guarded(registry: Arc<SessionRegistry>) -> Router {
        Router::new()
            .route(
                "/protected",
                get(|Extension(CurrentSession(user)): Extension<CurrentSession>| async move {
                    Json(json!({ "email": user.email }))
                }),
            )
            .layer(from_fn_with_state(registry, require_bearer_session))
    }

    #[tokio::test]
    async fn test_bearer_middleware() {
        let (router, registry) = app();
        let token = login_token(&router).await;
        let guarded = guarded(registry);

        let accepted = guarded
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/protected")
                    .header(header::AUTHORIZATION, format!("Bearer {token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(accepted.status(), StatusCode::OK);
        assert_eq!(body_json(accepted).await["email"], "admin@juice-sh.op");

        let rejected = guarded
            .oneshot(
                Request::builder()
                    .uri("/protected")
                    .header(header::AUTHORIZATION, format!("bearer {token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(rejected.status(), StatusCode::UNAUTHORIZED);
    }
}
