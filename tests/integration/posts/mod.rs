//! Posts domain integration tests
//!
//! Ownership is checked after existence and before any mutation.

use axum::http::{Method, StatusCode};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::common::{authed_request, TestApp, UserFixture, FOREIGN_USER_ID};

async fn get_post(app: &TestApp, user: &UserFixture, id: &str) -> (StatusCode, Value) {
    app.send(authed_request(
        Method::GET,
        &format!("/api/posts/{}", id),
        &user.token,
        None,
    ))
    .await
}

async fn comment(app: &TestApp, user: &UserFixture, post_id: &str, text: &str) -> Value {
    let (status, body) = app
        .send(authed_request(
            Method::POST,
            &format!("/api/posts/comment/{}", post_id),
            &user.token,
            Some(json!({ "text": text })),
        ))
        .await;
    assert_eq!(status, StatusCode::OK, "comment failed: {}", body);
    body["data"].clone()
}

mod test_post_crud {
    use super::*;

    #[tokio::test]
    async fn test_create_post_copies_author_details() {
        let app = TestApp::new();
        let alice = app.register("Alice").await;

        let post = app.create_post(&alice, "Hello devs").await;

        assert_eq!(post["text"], "Hello devs");
        assert_eq!(post["user_id"], alice.id.as_str());
        assert_eq!(post["name"], "Alice");
        assert!(post["avatar"].as_str().unwrap().contains("gravatar.com"));
        assert_eq!(post["likes"], json!([]));
        assert_eq!(post["comments"], json!([]));
    }

    #[tokio::test]
    async fn test_empty_text_is_rejected() {
        let app = TestApp::new();
        let alice = app.register("Alice").await;

        let (status, body) = app
            .send(authed_request(
                Method::POST,
                "/api/posts",
                &alice.token,
                Some(json!({ "text": "" })),
            ))
            .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["msg"].as_str().unwrap().contains("Text is required"));
    }

    #[tokio::test]
    async fn test_list_is_newest_first() {
        let app = TestApp::new();
        let alice = app.register("Alice").await;
        app.create_post(&alice, "first").await;
        app.create_post(&alice, "second").await;

        let (status, body) = app
            .send(authed_request(Method::GET, "/api/posts", &alice.token, None))
            .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        let texts: Vec<&str> = body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["text"].as_str().unwrap())
            .collect();
        assert_eq!(texts, vec!["second", "first"]);
    }

    #[tokio::test]
    async fn test_unknown_and_malformed_ids_are_404() {
        let app = TestApp::new();
        let alice = app.register("Alice").await;

        for id in [Uuid::new_v4().to_string(), "not-an-id".to_string()] {
            let (status, body) = get_post(&app, &alice, &id).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "id {}", id);
            assert_eq!(body["msg"], "Post not found");
        }
    }

    #[tokio::test]
    async fn test_owner_can_delete() {
        let app = TestApp::new();
        let alice = app.register("Alice").await;
        let post = app.create_post(&alice, "short-lived").await;
        let id = post["id"].as_str().unwrap();

        let (status, body) = app
            .send(authed_request(
                Method::DELETE,
                &format!("/api/posts/{}", id),
                &alice.token,
                None,
            ))
            .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({ "success": true, "data": {}, "msg": "Post deleted" })
        );

        let (status, _) = get_post(&app, &alice, id).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}

mod test_post_ownership {
    use super::*;

    #[tokio::test]
    async fn test_foreign_subject_cannot_delete_post() {
        let app = TestApp::new();
        let alice = app.register("Alice").await;
        let post = app.create_post(&alice, "mine").await;
        let id = post["id"].as_str().unwrap();

        let intruder_token = app.token_for(FOREIGN_USER_ID);
        let (status, body) = app
            .send(authed_request(
                Method::DELETE,
                &format!("/api/posts/{}", id),
                &intruder_token,
                None,
            ))
            .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["msg"], "User not authorized");
        assert_eq!(body["code"], "NOT_AUTHORIZED");

        let (status, body) = get_post(&app, &alice, id).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["text"], "mine");
    }

    #[tokio::test]
    async fn test_other_user_cannot_delete_post() {
        let app = TestApp::new();
        let alice = app.register("Alice").await;
        let bob = app.register("Bob").await;
        let post = app.create_post(&alice, "mine").await;
        let id = post["id"].as_str().unwrap();

        let (status, body) = app
            .send(authed_request(
                Method::DELETE,
                &format!("/api/posts/{}", id),
                &bob.token,
                None,
            ))
            .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["msg"], "User not authorized");

        let (status, _) = get_post(&app, &alice, id).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_existence_is_checked_before_ownership() {
        let app = TestApp::new();
        let bob = app.register("Bob").await;

        let (status, body) = app
            .send(authed_request(
                Method::DELETE,
                &format!("/api/posts/{}", Uuid::new_v4()),
                &bob.token,
                None,
            ))
            .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["msg"], "Post not found");
    }
}

mod test_likes {
    use super::*;

    #[tokio::test]
    async fn test_like_once_then_unlike() {
        let app = TestApp::new();
        let alice = app.register("Alice").await;
        let bob = app.register("Bob").await;
        let post = app.create_post(&alice, "likeable").await;
        let like_uri = format!("/api/posts/like/{}", post["id"].as_str().unwrap());
        let unlike_uri = format!("/api/posts/unlike/{}", post["id"].as_str().unwrap());

        let (status, body) = app
            .send(authed_request(Method::PUT, &like_uri, &bob.token, None))
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"], json!([{ "user_id": bob.id }]));

        let (status, body) = app
            .send(authed_request(Method::PUT, &like_uri, &bob.token, None))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["msg"], "Post already liked");

        let (status, body) = app
            .send(authed_request(Method::PUT, &unlike_uri, &bob.token, None))
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"], json!([]));

        let (status, body) = app
            .send(authed_request(Method::PUT, &unlike_uri, &bob.token, None))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["msg"], "Post has not yet been liked");
    }

    #[tokio::test]
    async fn test_newest_like_first() {
        let app = TestApp::new();
        let alice = app.register("Alice").await;
        let bob = app.register("Bob").await;
        let post = app.create_post(&alice, "likeable").await;
        let like_uri = format!("/api/posts/like/{}", post["id"].as_str().unwrap());

        app.send(authed_request(Method::PUT, &like_uri, &alice.token, None))
            .await;
        let (_, body) = app
            .send(authed_request(Method::PUT, &like_uri, &bob.token, None))
            .await;

        assert_eq!(
            body["data"],
            json!([{ "user_id": bob.id }, { "user_id": alice.id }])
        );
    }

    #[tokio::test]
    async fn test_like_missing_post_is_404() {
        let app = TestApp::new();
        let bob = app.register("Bob").await;

        let (status, _) = app
            .send(authed_request(
                Method::PUT,
                &format!("/api/posts/like/{}", Uuid::new_v4()),
                &bob.token,
                None,
            ))
            .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}

mod test_comments {
    use super::*;

    #[tokio::test]
    async fn test_comments_are_prepended_with_author_details() {
        let app = TestApp::new();
        let alice = app.register("Alice").await;
        let bob = app.register("Bob").await;
        let post = app.create_post(&alice, "discuss").await;
        let post_id = post["id"].as_str().unwrap();

        comment(&app, &alice, post_id, "first").await;
        let comments = comment(&app, &bob, post_id, "second").await;

        assert_eq!(comments.as_array().unwrap().len(), 2);
        assert_eq!(comments[0]["text"], "second");
        assert_eq!(comments[0]["name"], "Bob");
        assert_eq!(comments[0]["user_id"], bob.id.as_str());
        assert_eq!(comments[1]["text"], "first");
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_that_comment() {
        let app = TestApp::new();
        let alice = app.register("Alice").await;
        let post = app.create_post(&alice, "discuss").await;
        let post_id = post["id"].as_str().unwrap();

        comment(&app, &alice, post_id, "one").await;
        comment(&app, &alice, post_id, "two").await;
        let comments = comment(&app, &alice, post_id, "three").await;
        // newest first: three, two, one
        let middle_id = comments[1]["id"].as_str().unwrap();

        let (status, body) = app
            .send(authed_request(
                Method::DELETE,
                &format!("/api/posts/comment/{}/{}", post_id, middle_id),
                &alice.token,
                None,
            ))
            .await;

        assert_eq!(status, StatusCode::OK);
        let texts: Vec<&str> = body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["text"].as_str().unwrap())
            .collect();
        assert_eq!(texts, vec!["three", "one"]);
    }

    #[tokio::test]
    async fn test_only_author_can_delete_comment() {
        let app = TestApp::new();
        let alice = app.register("Alice").await;
        let bob = app.register("Bob").await;
        let post = app.create_post(&alice, "discuss").await;
        let post_id = post["id"].as_str().unwrap();
        let comments = comment(&app, &bob, post_id, "bob's comment").await;
        let comment_id = comments[0]["id"].as_str().unwrap();

        // Even the post author cannot remove someone else's comment
        let (status, body) = app
            .send(authed_request(
                Method::DELETE,
                &format!("/api/posts/comment/{}/{}", post_id, comment_id),
                &alice.token,
                None,
            ))
            .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["msg"], "User not authorized");

        let (_, body) = get_post(&app, &alice, post_id).await;
        assert_eq!(body["data"]["comments"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_comment_is_404() {
        let app = TestApp::new();
        let alice = app.register("Alice").await;
        let post = app.create_post(&alice, "discuss").await;
        let post_id = post["id"].as_str().unwrap();

        for comment_id in [Uuid::new_v4().to_string(), "nope".to_string()] {
            let (status, body) = app
                .send(authed_request(
                    Method::DELETE,
                    &format!("/api/posts/comment/{}/{}", post_id, comment_id),
                    &alice.token,
                    None,
                ))
                .await;

            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(body["msg"], "Comment does not exist");
        }
    }
}
