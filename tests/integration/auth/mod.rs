//! Authentication integration tests
//!
//! Bearer-token handling at the HTTP boundary: missing vs invalid tokens,
//! expiry, foreign secrets, and tokens whose subject no longer exists.

use axum::http::{Method, StatusCode};
use chrono::{Duration, Utc};
use devlink_auth::{AuthConfig, TokenService};

use crate::common::{
    authed_request, request_with_header, unauthed_request, TestApp, FOREIGN_USER_ID,
};

mod test_gate_rejections {
    use super::*;

    #[tokio::test]
    async fn test_missing_header_is_401_no_token() {
        let app = TestApp::new();

        let (status, body) = app
            .send(unauthed_request(Method::GET, "/api/auth", None))
            .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["msg"], "No token, authorization denied");
        assert_eq!(body["code"], "MISSING_TOKEN");
    }

    #[tokio::test]
    async fn test_wrong_scheme_is_treated_as_missing() {
        let app = TestApp::new();
        let user = app.register("Alice").await;

        for header in [
            "Token abc".to_string(),
            format!("bearer {}", user.token),
            user.token.clone(),
            "Bearer".to_string(),
        ] {
            let (status, body) = app
                .send(request_with_header(
                    Method::GET,
                    "/api/auth",
                    Some(&header),
                    None,
                ))
                .await;

            assert_eq!(status, StatusCode::UNAUTHORIZED, "header {:?}", header);
            assert_eq!(body["code"], "MISSING_TOKEN", "header {:?}", header);
        }
    }

    #[tokio::test]
    async fn test_garbage_token_is_401_not_valid() {
        let app = TestApp::new();

        let (status, body) = app
            .send(authed_request(
                Method::GET,
                "/api/auth",
                "invalid.jwt.token",
                None,
            ))
            .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["msg"], "Token not valid");
        assert_eq!(body["code"], "INVALID_TOKEN");
    }

    #[tokio::test]
    async fn test_token_from_other_secret_is_rejected() {
        let app = TestApp::new();
        let user = app.register("Alice").await;
        let other = TokenService::new(AuthConfig::with_default_lifetime("another-secret"));
        let forged = other.issue(&user.id).unwrap();

        let (status, body) = app
            .send(authed_request(Method::GET, "/api/auth", &forged, None))
            .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["code"], "INVALID_TOKEN");
    }

    #[tokio::test]
    async fn test_expired_token_is_rejected() {
        let app = TestApp::new();
        let user = app.register("Alice").await;
        let stale = app
            .tokens
            .issue_at(&user.id, Utc::now() - Duration::hours(101))
            .unwrap();

        let (status, body) = app
            .send(authed_request(Method::GET, "/api/auth", &stale, None))
            .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["msg"], "Token not valid");
    }

    #[tokio::test]
    async fn test_gate_runs_before_body_validation() {
        let app = TestApp::new();

        let (status, body) = app
            .send(unauthed_request(
                Method::POST,
                "/api/posts",
                Some(serde_json::json!({ "text": "" })),
            ))
            .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["code"], "MISSING_TOKEN");
    }
}

mod test_current_user {
    use super::*;

    #[tokio::test]
    async fn test_valid_token_returns_user_without_password() {
        let app = TestApp::new();
        let user = app.register("Alice").await;

        let (status, body) = app
            .send(authed_request(Method::GET, "/api/auth", &user.token, None))
            .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], user.id.as_str());
        assert_eq!(body["email"], user.email.as_str());
        assert!(body.get("password_hash").is_none());
        assert!(body.get("password").is_none());
    }

    #[tokio::test]
    async fn test_valid_token_for_unknown_subject_is_404() {
        let app = TestApp::new();
        let token = app.token_for(FOREIGN_USER_ID);

        let (status, body) = app
            .send(authed_request(Method::GET, "/api/auth", &token, None))
            .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["msg"], "No user found");
    }
}
