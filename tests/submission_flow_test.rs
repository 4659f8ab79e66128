//! End-to-end submission flow against a mock backend.
//!
//! Each test drives a `ChatPanel` with the real reqwest transport pointed
//! at a wiremock server and checks store, input, credits and notices.

mod common;

use common::*;
use quickchat::adapters::InMemorySession;
use quickchat::chat::{SubmissionState, SubmitOutcome};
use quickchat::error::{ChatError, LOGIN_REQUIRED_NOTICE};
use quickchat::models::{ChatMode, MessageRole};
use quickchat::traits::{Notice, SessionService};
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn server_replying(route: &str, body: serde_json::Value) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn test_alice_text_submission_appends_reply_and_debits_one() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/message/text"))
        .and(header("Authorization", TEST_TOKEN))
        .and(body_json(json!({"chatId": "chat-a", "prompt": "Hi", "isPublished": false})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "reply": {"role": "assistant", "content": "Hello!"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut h = Harness::new(&server.uri(), session_for(alice()), ChatMode::Text);
    h.panel.composer_mut().set_prompt("Hi");

    let outcome = h.panel.submit(&h.api).await.unwrap();
    assert_eq!(outcome, SubmitOutcome::Confirmed);

    let messages = h.panel.messages();
    let tail = &messages[messages.len() - 2..];
    assert_eq!(tail[0].role, MessageRole::User);
    assert_eq!(tail[0].content, "Hi");
    assert_eq!(tail[1].role, MessageRole::Assistant);
    assert_eq!(tail[1].content, "Hello!");

    assert_eq!(h.credits(), Some(9));
    assert_eq!(h.panel.state(), SubmissionState::Idle);
    assert_eq!(h.panel.composer().prompt(), "");
    assert!(h.notifier.notices().is_empty());
}

#[tokio::test]
async fn test_image_submission_debits_two() {
    let server = server_replying("/api/message/image", image_reply_body("https://img.test/cat.png")).await;

    let mut h = Harness::new(&server.uri(), session_for(alice()), ChatMode::Image);
    h.panel.composer_mut().set_prompt("a cat");

    let outcome = h.panel.submit(&h.api).await.unwrap();
    assert_eq!(outcome, SubmitOutcome::Confirmed);
    assert_eq!(h.credits(), Some(8));

    let reply = h.panel.store().last().unwrap();
    assert!(reply.is_image);
    assert_eq!(reply.content, "https://img.test/cat.png");
}

#[tokio::test]
async fn test_bob_logical_failure_restores_draft() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/message/image"))
        .and(body_json(json!({"chatId": "chat-a", "prompt": "draw a cat", "isPublished": true})))
        .respond_with(ResponseTemplate::new(200).set_body_json(failure_body("NSFW filter triggered")))
        .expect(1)
        .mount(&server)
        .await;

    let mut h = Harness::new(&server.uri(), session_for(bob()), ChatMode::Image);
    let before = h.panel.messages().len();
    h.panel.composer_mut().set_prompt("draw a cat");
    h.panel.composer_mut().set_published(true);

    let outcome = h.panel.submit(&h.api).await.unwrap();
    assert_eq!(outcome, SubmitOutcome::Rejected);

    assert_eq!(h.notifier.notices(), vec![Notice::error("NSFW filter triggered")]);
    assert_eq!(h.panel.composer().prompt(), "draw a cat");
    assert_eq!(h.panel.messages().len(), before + 1);
    let optimistic = h.panel.store().last().unwrap();
    assert_eq!(optimistic.role, MessageRole::User);
    assert_eq!(optimistic.content, "draw a cat");
    assert_eq!(h.credits(), Some(25));
    assert!(!h.panel.is_busy());
}

#[tokio::test]
async fn test_quota_exceeded_notice_and_exact_draft() {
    let server = server_replying("/api/message/text", failure_body("quota exceeded")).await;

    let mut h = Harness::new(&server.uri(), session_for(alice()), ChatMode::Text);
    h.panel.composer_mut().set_prompt("  keep my spacing ");
    h.panel.submit(&h.api).await.unwrap();

    assert_eq!(h.notifier.last_text().as_deref(), Some("quota exceeded"));
    assert_eq!(h.panel.composer().prompt(), "  keep my spacing ");
}

#[tokio::test]
async fn test_signed_out_submit_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_reply_body("x")))
        .expect(0)
        .mount(&server)
        .await;

    let session = InMemorySession::with_token(TEST_TOKEN);
    session.set_chats(vec![chat_a()]);
    session.select_by_id("chat-a");
    let mut h = Harness::new(&server.uri(), Arc::new(session), ChatMode::Text);
    let before = h.panel.messages().to_vec();
    h.panel.composer_mut().set_prompt("hello");

    let err = h.panel.submit(&h.api).await.unwrap_err();
    assert_eq!(err, ChatError::NotAuthenticated);
    assert_eq!(h.panel.messages(), before.as_slice());
    assert_eq!(h.credits(), None);
    assert_eq!(h.notifier.notices(), vec![Notice::info(LOGIN_REQUIRED_NOTICE)]);
    assert!(!h.panel.is_busy());
}

#[tokio::test]
async fn test_optimistic_entry_visible_before_response() {
    let server = server_replying("/api/message/text", text_reply_body("later")).await;

    let mut h = Harness::new(&server.uri(), session_for(alice()), ChatMode::Text);
    h.panel.composer_mut().set_prompt("hello");

    let pending = h.panel.begin_submit().unwrap();
    assert!(h.panel.is_busy());
    let last = h.panel.store().last().unwrap();
    assert_eq!(last.role, MessageRole::User);
    assert_eq!(last.content, "hello");
    assert!(!last.is_image);
    assert_eq!(h.panel.composer().prompt(), "");
    assert_eq!(h.credits(), Some(10));

    let result = h.api.send(&pending.request, &pending.token).await;
    h.panel.finish_submit(pending, result);
    assert!(!h.panel.is_busy());
    assert_eq!(h.credits(), Some(9));
}

#[tokio::test]
async fn test_server_error_is_transport_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/message/text"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal"))
        .mount(&server)
        .await;

    let mut h = Harness::new(&server.uri(), session_for(alice()), ChatMode::Text);
    let before = h.panel.messages().len();
    h.panel.composer_mut().set_prompt("Hi");

    let outcome = h.panel.submit(&h.api).await.unwrap();
    assert_eq!(outcome, SubmitOutcome::Failed);
    assert_eq!(h.panel.messages().len(), before + 1);
    assert_eq!(h.panel.composer().prompt(), "");
    assert_eq!(h.credits(), Some(10));
    let notice = &h.notifier.notices()[0];
    assert!(notice.is_error());
    assert!(notice.text.contains("500"), "notice was {:?}", notice.text);
}

#[tokio::test]
async fn test_busy_flag_settles_on_every_path() {
    let bodies = [
        (ResponseTemplate::new(200).set_body_json(text_reply_body("ok")), SubmitOutcome::Confirmed),
        (ResponseTemplate::new(200).set_body_json(failure_body("nope")), SubmitOutcome::Rejected),
        (ResponseTemplate::new(502).set_body_string("bad gateway"), SubmitOutcome::Failed),
        (ResponseTemplate::new(200).set_body_string("not json"), SubmitOutcome::Failed),
    ];

    for (template, expected) in bodies {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(template)
            .mount(&server)
            .await;

        let mut h = Harness::new(&server.uri(), session_for(alice()), ChatMode::Text);
        h.panel.composer_mut().set_prompt("ping");
        let pending = h.panel.begin_submit().unwrap();
        assert_eq!(h.panel.state(), SubmissionState::Submitting);

        let result = h.api.send(&pending.request, &pending.token).await;
        assert_eq!(h.panel.finish_submit(pending, result), expected);
        assert_eq!(h.panel.state(), SubmissionState::Idle);
    }
}

#[tokio::test]
async fn test_unreachable_backend_notifies() {
    // Nothing listens on port 9 (discard) in the test environment.
    let mut h = Harness::new("http://127.0.0.1:9", session_for(alice()), ChatMode::Text);
    h.panel.composer_mut().set_prompt("Hi");

    let outcome = h.panel.submit(&h.api).await.unwrap();
    assert_eq!(outcome, SubmitOutcome::Failed);
    assert!(h.notifier.notices()[0].is_error());
    assert!(!h.panel.is_busy());
    assert_eq!(h.credits(), Some(10));
}

#[tokio::test]
async fn test_session_copy_receives_confirmed_exchange() {
    let server = server_replying("/api/message/text", text_reply_body("Hello!")).await;

    let mut h = Harness::new(&server.uri(), session_for(alice()), ChatMode::Text);
    h.panel.composer_mut().set_prompt("Hi");
    h.panel.submit(&h.api).await.unwrap();

    let stored = h
        .session
        .chats()
        .into_iter()
        .find(|c| c.id == "chat-a")
        .unwrap();
    assert_eq!(stored.messages.len(), 4);
    assert_eq!(stored.messages[3].content, "Hello!");
}
