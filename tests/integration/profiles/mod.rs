//! Profiles domain integration tests
//!
//! Profile upsert, experience/education entries, GitHub lookup and account
//! deletion.

use axum::http::{Method, StatusCode};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::common::{authed_request, unauthed_request, TestApp, UserFixture};

async fn add_experience(app: &TestApp, user: &UserFixture, title: &str) -> Value {
    let (status, body) = app
        .send(authed_request(
            Method::PUT,
            "/api/profile/experience",
            &user.token,
            Some(json!({
                "title": title,
                "company": "Acme",
                "from": "2020-01-15",
                "current": true
            })),
        ))
        .await;
    assert_eq!(status, StatusCode::OK, "experience failed: {}", body);
    body
}

mod test_profile_upsert {
    use super::*;

    #[tokio::test]
    async fn test_me_without_profile_is_400() {
        let app = TestApp::new();
        let alice = app.register("Alice").await;

        let (status, body) = app
            .send(authed_request(
                Method::GET,
                "/api/profile/me",
                &alice.token,
                None,
            ))
            .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["msg"], "There is no profile for this user");
    }

    #[tokio::test]
    async fn test_create_then_update() {
        let app = TestApp::new();
        let alice = app.register("Alice").await;

        let (status, created) = app
            .send(authed_request(
                Method::POST,
                "/api/profile",
                &alice.token,
                Some(json!({
                    "status": "Developer",
                    "skills": " rust, sql ,, go ",
                    "company": "Acme",
                    "githubusername": "octocat",
                    "twitter": "https://twitter.com/alice"
                })),
            ))
            .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["skills"], json!(["rust", "sql", "go"]));
        assert_eq!(created["github_username"], "octocat");
        assert_eq!(created["social"]["twitter"], "https://twitter.com/alice");
        assert_eq!(created["user"]["name"], "Alice");

        let (status, updated) = app
            .send(authed_request(
                Method::POST,
                "/api/profile",
                &alice.token,
                Some(json!({ "status": "Senior Developer", "skills": "rust" })),
            ))
            .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["id"], created["id"]);
        assert_eq!(updated["status"], "Senior Developer");
        assert_eq!(updated["company"], "Acme");

        let (status, me) = app
            .send(authed_request(
                Method::GET,
                "/api/profile/me",
                &alice.token,
                None,
            ))
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(me["status"], "Senior Developer");
    }

    #[tokio::test]
    async fn test_status_and_skills_are_required() {
        let app = TestApp::new();
        let alice = app.register("Alice").await;

        for payload in [
            json!({ "skills": "rust" }),
            json!({ "status": "Developer" }),
            json!({ "status": "Developer", "skills": " , " }),
            json!({ "status": "   ", "skills": "rust" }),
        ] {
            let (status, body) = app
                .send(authed_request(
                    Method::POST,
                    "/api/profile",
                    &alice.token,
                    Some(payload.clone()),
                ))
                .await;

            assert_eq!(status, StatusCode::BAD_REQUEST, "payload {}", payload);
            assert_eq!(body["code"], "VALIDATION_ERROR", "payload {}", payload);
        }
    }

    #[tokio::test]
    async fn test_public_listing_and_lookup() {
        let app = TestApp::new();
        let alice = app.register("Alice").await;
        let bob = app.register("Bob").await;
        app.create_profile(&alice).await;
        app.create_profile(&bob).await;

        let (status, body) = app
            .send(unauthed_request(Method::GET, "/api/profile", None))
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 2);
        assert_eq!(body["data"].as_array().unwrap().len(), 2);

        let (status, body) = app
            .send(unauthed_request(
                Method::GET,
                &format!("/api/profile/user/{}", bob.id),
                None,
            ))
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["user"]["name"], "Bob");
        assert_eq!(body["user_id"], bob.id.as_str());
    }

    #[tokio::test]
    async fn test_lookup_of_unknown_or_malformed_user_is_400() {
        let app = TestApp::new();

        for id in [Uuid::new_v4().to_string(), "garbage".to_string()] {
            let (status, body) = app
                .send(unauthed_request(
                    Method::GET,
                    &format!("/api/profile/user/{}", id),
                    None,
                ))
                .await;

            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body["msg"], "Profile not found");
        }
    }
}

mod test_entries {
    use super::*;

    #[tokio::test]
    async fn test_experience_requires_profile() {
        let app = TestApp::new();
        let alice = app.register("Alice").await;

        let (status, body) = app
            .send(authed_request(
                Method::PUT,
                "/api/profile/experience",
                &alice.token,
                Some(json!({ "title": "Dev", "company": "Acme", "from": "2020-01-15" })),
            ))
            .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["msg"], "There is no profile for this user");
    }

    #[tokio::test]
    async fn test_experience_validation() {
        let app = TestApp::new();
        let alice = app.register("Alice").await;
        app.create_profile(&alice).await;

        for payload in [
            json!({ "company": "Acme", "from": "2020-01-15" }),
            json!({ "title": "Dev", "from": "2020-01-15" }),
            json!({ "title": "Dev", "company": "Acme" }),
            json!({ "title": "   ", "company": "Acme", "from": "2020-01-15" }),
            json!({ "title": "Dev", "company": " ", "from": "2020-01-15" }),
        ] {
            let (status, _) = app
                .send(authed_request(
                    Method::PUT,
                    "/api/profile/experience",
                    &alice.token,
                    Some(payload.clone()),
                ))
                .await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "payload {}", payload);
        }
    }

    #[tokio::test]
    async fn test_experience_prepend_and_remove() {
        let app = TestApp::new();
        let alice = app.register("Alice").await;
        app.create_profile(&alice).await;

        add_experience(&app, &alice, "Junior").await;
        let profile = add_experience(&app, &alice, "Senior").await;

        assert_eq!(profile["experience"][0]["title"], "Senior");
        assert_eq!(profile["experience"][1]["title"], "Junior");
        assert_eq!(profile["experience"][0]["from"], "2020-01-15");

        let junior_id = profile["experience"][1]["id"].as_str().unwrap();
        let (status, body) = app
            .send(authed_request(
                Method::DELETE,
                &format!("/api/profile/experience/{}", junior_id),
                &alice.token,
                None,
            ))
            .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["msg"], "Record updated");
        let remaining = body["profile"]["experience"].as_array().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0]["title"], "Senior");
    }

    #[tokio::test]
    async fn test_remove_unknown_entry_is_400() {
        let app = TestApp::new();
        let alice = app.register("Alice").await;
        app.create_profile(&alice).await;
        add_experience(&app, &alice, "Dev").await;

        for uri in [
            format!("/api/profile/experience/{}", Uuid::new_v4()),
            "/api/profile/experience/not-an-id".to_string(),
            format!("/api/profile/education/{}", Uuid::new_v4()),
        ] {
            let (status, body) = app
                .send(authed_request(Method::DELETE, &uri, &alice.token, None))
                .await;

            assert_eq!(status, StatusCode::BAD_REQUEST, "uri {}", uri);
            assert_eq!(body["msg"], "No record found");
        }
    }

    #[tokio::test]
    async fn test_education_accepts_camel_case_field_of_study() {
        let app = TestApp::new();
        let alice = app.register("Alice").await;
        app.create_profile(&alice).await;

        let (status, body) = app
            .send(authed_request(
                Method::PUT,
                "/api/profile/education",
                &alice.token,
                Some(json!({
                    "school": "State University",
                    "degree": "BSc",
                    "fieldOfStudy": "Computer Science",
                    "from": "2014-09-01",
                    "to": "2018-06-30"
                })),
            ))
            .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["education"][0]["field_of_study"], "Computer Science");
        assert_eq!(body["education"][0]["to"], "2018-06-30");
        assert_eq!(body["education"][0]["current"], false);

        let edu_id = body["education"][0]["id"].as_str().unwrap();
        let (status, body) = app
            .send(authed_request(
                Method::DELETE,
                &format!("/api/profile/education/{}", edu_id),
                &alice.token,
                None,
            ))
            .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["profile"]["education"], json!([]));
    }
}

mod test_entry_blanks {
    use super::*;

    #[tokio::test]
    async fn test_whitespace_only_education_fields_are_rejected() {
        let app = TestApp::new();
        let alice = app.register("Alice").await;
        app.create_profile(&alice).await;

        for field in ["school", "degree", "fieldOfStudy"] {
            let mut payload = json!({
                "school": "State University",
                "degree": "BSc",
                "fieldOfStudy": "Computer Science",
                "from": "2014-09-01"
            });
            payload[field] = json!("  ");

            let (status, body) = app
                .send(authed_request(
                    Method::PUT,
                    "/api/profile/education",
                    &alice.token,
                    Some(payload),
                ))
                .await;

            assert_eq!(status, StatusCode::BAD_REQUEST, "field {}", field);
            assert_eq!(body["code"], "VALIDATION_ERROR", "field {}", field);
        }

        let (_, me) = app
            .send(authed_request(
                Method::GET,
                "/api/profile/me",
                &alice.token,
                None,
            ))
            .await;
        assert_eq!(me["education"], json!([]));
    }
}

mod test_github {
    use super::*;

    #[tokio::test]
    async fn test_known_user_repos() {
        let app = TestApp::new();

        let (status, body) = app
            .send(unauthed_request(
                Method::GET,
                "/api/profile/github/octocat",
                None,
            ))
            .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["name"], "hello-world");
        assert_eq!(app.github.requests(), vec!["octocat"]);
    }

    #[tokio::test]
    async fn test_unknown_user_is_400() {
        let app = TestApp::new();

        let (status, body) = app
            .send(unauthed_request(
                Method::GET,
                "/api/profile/github/no-such-user",
                None,
            ))
            .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["msg"], "No github profile found");
    }
}

mod test_account_deletion {
    use super::*;

    #[tokio::test]
    async fn test_delete_account_removes_posts_profile_and_user() {
        let app = TestApp::new();
        let alice = app.register("Alice").await;
        let bob = app.register("Bob").await;
        app.create_profile(&alice).await;
        app.create_post(&alice, "alice's post").await;
        app.create_post(&bob, "bob's post").await;

        let (status, body) = app
            .send(authed_request(
                Method::DELETE,
                "/api/profile",
                &alice.token,
                None,
            ))
            .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "msg": "User deleted" }));

        // Posts by others survive
        let (_, posts) = app
            .send(authed_request(Method::GET, "/api/posts", &bob.token, None))
            .await;
        let texts: Vec<&str> = posts["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["text"].as_str().unwrap())
            .collect();
        assert_eq!(texts, vec!["bob's post"]);

        let (status, _) = app
            .send(unauthed_request(
                Method::GET,
                &format!("/api/profile/user/{}", alice.id),
                None,
            ))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        // The token still verifies, but its subject is gone
        let (status, body) = app
            .send(authed_request(Method::GET, "/api/auth", &alice.token, None))
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["msg"], "No user found");

        let (status, _) = app
            .send(unauthed_request(
                Method::POST,
                "/api/auth",
                Some(json!({ "email": alice.email, "password": alice.password })),
            ))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_delete_account_requires_token() {
        let app = TestApp::new();

        let (status, _) = app
            .send(unauthed_request(Method::DELETE, "/api/profile", None))
            .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}
