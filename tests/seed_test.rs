//! Seed orchestration against an in-memory backend that records every call.

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use reqwest::Method;
use serde_json::{json, Value};
use std::cell::RefCell;

use golf_catalog::seed::content::{JOINS, SEED_PROFILES};
use golf_catalog::seed::{seed_profiles, seed_relationships, ApiError, AuthUser, Backend, Seeder};
use golf_catalog::ui::SilentUi;

const DEV_EMAIL: &str = "dev@bottlecorp.kr";
const DEV_ID: &str = "dev-0000";

#[derive(Debug, Clone)]
struct Call {
    method: Method,
    path: String,
    body: Option<Value>,
}

/// Answers reads from canned fixtures and echoes writes back as their
/// representation; paths containing `fail_on` answer 500.
#[derive(Default)]
struct RecordingBackend {
    calls: RefCell<Vec<Call>>,
    created: RefCell<Vec<String>>,
    profiles: Vec<Value>,
    fail_on: Option<&'static str>,
    empty_patch_on: Option<&'static str>,
}

impl RecordingBackend {
    fn with_profiles(count: usize) -> Self {
        let mut profiles = vec![json!({"id": DEV_ID, "name": "개발자", "email": DEV_EMAIL})];
        profiles.extend((0..count).map(|i| {
            let handicap = if i % 2 == 0 { "80대" } else { "싱글" };
            json!({
                "id": format!("seed-{}", i),
                "name": format!("골퍼{}", i),
                "photos": [format!("https://img.example/{}.jpg", i)],
                "handicap": handicap,
            })
        }));
        Self {
            profiles,
            ..Self::default()
        }
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn posts_to(&self, resource: &str) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| c.method == Method::POST && c.path == format!("/rest/v1/{}", resource))
            .collect()
    }
}

impl Backend for RecordingBackend {
    fn rest(&self, method: Method, path: &str, body: Option<&Value>) -> Result<Value, ApiError> {
        self.calls.borrow_mut().push(Call {
            method: method.clone(),
            path: path.to_string(),
            body: body.cloned(),
        });

        if self.fail_on.is_some_and(|f| path.contains(f)) {
            return Err(ApiError::Status {
                code: 500,
                body: "boom".into(),
            });
        }

        if method == Method::GET {
            let rows = if path.starts_with("/rest/v1/profiles") {
                Value::Array(self.profiles.clone())
            } else if path.starts_with("/rest/v1/joins") {
                json!([{"id": "join-1", "title": "주말 라운딩", "host_id": "seed-0", "spots_total": 4, "spots_filled": 1}])
            } else if path.starts_with("/rest/v1/chat_rooms") {
                json!([{"id": "room-1", "type": "direct"}, {"id": "room-2", "type": "group"}])
            } else if path.starts_with("/rest/v1/chat_participants?room_id") {
                json!([{"user_id": DEV_ID}, {"user_id": "seed-1"}, {"user_id": "seed-2"}])
            } else if path.starts_with("/rest/v1/chat_participants?user_id") {
                json!([{"room_id": "room-1"}])
            } else {
                json!([])
            };
            return Ok(rows);
        }

        if method == Method::PATCH && self.empty_patch_on.is_some_and(|p| path.contains(p)) {
            return Ok(json!([]));
        }

        Ok(json!([body.cloned().unwrap_or(Value::Null)]))
    }

    fn create_user(&self, email: &str, _password: &str) -> Result<AuthUser, ApiError> {
        let mut created = self.created.borrow_mut();
        created.push(email.to_string());
        Ok(AuthUser {
            id: format!("user-{}", created.len()),
            email: Some(email.to_string()),
        })
    }

    fn list_users(&self) -> Result<Vec<AuthUser>, ApiError> {
        Ok(vec![AuthUser {
            id: DEV_ID.to_string(),
            email: Some(DEV_EMAIL.to_string()),
        }])
    }
}

fn now() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2025-03-01T09:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

fn seeder<'a>(backend: &'a RecordingBackend, ui: &'a mut SilentUi) -> Seeder<'a, RecordingBackend, SilentUi> {
    Seeder::new(backend, ui, StdRng::seed_from_u64(42), now(), "secret", DEV_EMAIL)
}

#[test]
fn test_profiles_create_accounts_postings_and_wallets() {
    let backend = RecordingBackend::default();
    let mut ui = SilentUi::new();
    let summary = seed_profiles(&mut seeder(&backend, &mut ui));

    assert!(summary.dev_updated);
    assert_eq!(summary.accounts, SEED_PROFILES.len());
    assert_eq!(summary.profiles_updated, SEED_PROFILES.len());
    assert_eq!(summary.postings, JOINS.len());
    assert_eq!(summary.wallets, SEED_PROFILES.len());

    let joins = backend.posts_to("joins");
    let hosts = backend.posts_to("join_participants");
    assert_eq!(hosts.len(), joins.len());
    for (join, host) in joins.iter().zip(&hosts) {
        let join = join.body.as_ref().unwrap();
        let host = host.body.as_ref().unwrap();
        assert_eq!(join["id"], host["join_id"]);
        assert_eq!(join["host_id"], host["user_id"]);
        assert_eq!(host["role"], "host");
        assert_eq!(join["status"], "open");
    }
    assert_eq!(joins[0].body.as_ref().unwrap()["host_id"], "user-1");

    let wallet = backend.posts_to("marker_wallets")[0].body.clone().unwrap();
    assert_eq!(wallet["balance"], 10);
}

#[test]
fn test_profile_insert_when_update_matches_nothing() {
    let backend = RecordingBackend {
        empty_patch_on: Some("profiles?id=eq.user-"),
        ..RecordingBackend::default()
    };
    let mut ui = SilentUi::new();
    let summary = seed_profiles(&mut seeder(&backend, &mut ui));

    assert_eq!(summary.profiles_updated, 0);
    assert_eq!(summary.profiles_inserted, SEED_PROFILES.len());

    let inserts = backend.posts_to("profiles");
    let first = inserts[0].body.as_ref().unwrap();
    assert_eq!(first["id"], "user-1");
    assert_eq!(first["email"], SEED_PROFILES[0].email);
}

#[test]
fn test_relationships_require_profiles() {
    let backend = RecordingBackend::with_profiles(1);
    let mut ui = SilentUi::new();
    let err = seed_relationships(&mut seeder(&backend, &mut ui)).unwrap_err();

    assert!(err.to_string().contains("seed profiles"));
    assert!(backend.posts_to("friend_requests").is_empty());
}

#[test]
fn test_accepted_requests_are_posted_pending_then_patched() {
    let backend = RecordingBackend::with_profiles(6);
    let mut ui = SilentUi::new();
    let summary = seed_relationships(&mut seeder(&backend, &mut ui)).unwrap();

    // 5 ring pairs among 6 seed users plus 2 accepted requests to the dev user
    assert_eq!(summary.friendships, 7);
    assert_eq!(summary.pending_friend_requests, 3);

    let calls = backend.calls();
    let accepted_ids: Vec<String> = calls
        .iter()
        .filter(|c| c.method == Method::POST && c.path == "/rest/v1/friend_requests")
        .filter_map(|c| c.body.as_ref()?.get("id")?.as_str().map(str::to_string))
        .collect();
    assert_eq!(accepted_ids.len(), 7);

    for id in &accepted_ids {
        let post = calls
            .iter()
            .position(|c| c.method == Method::POST && c.body.as_ref().and_then(|b| b.get("id")) == Some(&json!(id)))
            .unwrap();
        let patch = calls
            .iter()
            .position(|c| c.method == Method::PATCH && c.path.ends_with(&format!("id=eq.{}", id)))
            .unwrap();
        assert!(post < patch, "request {} accepted before it was created", id);
        assert_eq!(calls[patch].body, Some(json!({"status": "accepted"})));
    }

    let pending: Vec<Value> = backend
        .posts_to("friend_requests")
        .into_iter()
        .filter_map(|c| c.body)
        .filter(|b| b.get("id").is_none())
        .collect();
    assert!(pending.iter().all(|b| b["to_user_id"] == DEV_ID && b["status"] == "pending"));
}

#[test]
fn test_relationship_content_follows_the_rules() {
    let backend = RecordingBackend::with_profiles(6);
    let mut ui = SilentUi::new();
    let summary = seed_relationships(&mut seeder(&backend, &mut ui)).unwrap();

    // spots 4 - filled 1 leaves room for two accepted applicants; host is never one
    assert_eq!(summary.applications_accepted, 2);
    assert_eq!(summary.applications_pending, 1);
    assert!(backend
        .posts_to("join_applications")
        .iter()
        .all(|c| c.body.as_ref().unwrap()["user_id"] != "seed-0"));

    // friend request x3, join request, match, system
    assert_eq!(summary.notifications, 6);
    let notifications = backend.posts_to("notifications");
    assert_eq!(notifications[0].body.as_ref().unwrap()["is_read"], false);
    assert_eq!(notifications[1].body.as_ref().unwrap()["is_read"], true);
    let data: Value =
        serde_json::from_str(notifications[0].body.as_ref().unwrap()["data"].as_str().unwrap()).unwrap();
    assert_eq!(data["senderId"], "seed-0");

    // 5 ring pairs reviewed both ways plus 2 for the dev user
    assert_eq!(summary.reviews, 12);

    for score in backend.posts_to("scores") {
        let body = score.body.unwrap();
        let total = body["total_score"].as_i64().unwrap();
        let front = body["front_nine"].as_i64().unwrap();
        assert_eq!(body["back_nine"].as_i64().unwrap(), total - front);
        assert_eq!(body["par"], 72);
        if body["user_id"] == "seed-1" {
            assert!((74..=85).contains(&total), "single-digit band, got {}", total);
        }
    }

    assert_eq!(summary.likes, 5 + 5);
    assert!(summary.messages > 0);
    assert!(summary.dev_messages > 0);
}

#[test]
fn test_failed_calls_are_skipped() {
    let backend = RecordingBackend {
        fail_on: Some("/rest/v1/reviews"),
        ..RecordingBackend::with_profiles(4)
    };
    let mut ui = SilentUi::new();
    let summary = seed_relationships(&mut seeder(&backend, &mut ui)).unwrap();

    assert_eq!(summary.reviews, 0);
    assert!(!backend.posts_to("reviews").is_empty());
    assert!(summary.scores > 0, "later steps still run");
    assert!(summary.likes > 0);
}

#[test]
fn test_failed_messages_are_not_counted() {
    let backend = RecordingBackend {
        fail_on: Some("/rest/v1/messages"),
        ..RecordingBackend::with_profiles(4)
    };
    let mut ui = SilentUi::new();
    let summary = seed_relationships(&mut seeder(&backend, &mut ui)).unwrap();

    assert!(!backend.posts_to("messages").is_empty());
    assert_eq!(summary.messages, 0);
    assert_eq!(summary.dev_messages, 0);
    assert!(summary.notifications > 0, "later steps still run");
}
