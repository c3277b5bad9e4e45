//! Scripted population of the hosted backend with demo data.
//!
//! Steps run strictly in order and later steps depend on rows created (or
//! triggered) by earlier ones. A failed call is logged and treated as
//! absent; nothing is retried or rolled back.

pub mod backend;
pub mod client;
pub mod content;
pub mod profiles;
pub mod relationships;

pub use backend::{ApiError, AuthUser, Backend};
pub use client::RestClient;
pub use profiles::{seed_profiles, ProfileSummary};
pub use relationships::{seed_relationships, RelationshipSummary};

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::Rng;
use reqwest::Method;
use serde_json::Value;

use crate::ui::Ui;

/// Longest slice of a path or response body echoed in a failure line
const PATH_PREVIEW: usize = 60;
const BODY_PREVIEW: usize = 150;

/// Shared state of one seeding run
pub struct Seeder<'a, B: Backend, U: Ui> {
    backend: &'a B,
    pub ui: &'a mut U,
    pub rng: StdRng,
    now: DateTime<Utc>,
    password: String,
    dev_email: String,
}

impl<'a, B: Backend, U: Ui> Seeder<'a, B, U> {
    pub fn new(
        backend: &'a B,
        ui: &'a mut U,
        rng: StdRng,
        now: DateTime<Utc>,
        password: impl Into<String>,
        dev_email: impl Into<String>,
    ) -> Self {
        Self {
            backend,
            ui,
            rng,
            now,
            password: password.into(),
            dev_email: dev_email.into(),
        }
    }

    pub fn dev_email(&self) -> &str {
        &self.dev_email
    }

    /// Issue a REST call; failures and empty representations yield `None`.
    ///
    /// A 409 means the row already exists and is skipped quietly; any other
    /// failure is logged with a truncated body.
    pub fn call(&mut self, method: Method, path: &str, body: Option<Value>) -> Option<Value> {
        match self.backend.rest(method.clone(), path, body.as_ref()) {
            Ok(value) if is_present(&value) => Some(value),
            Ok(_) => None,
            Err(err) if err.is_conflict() => None,
            Err(err) => {
                let line = format!(
                    "{} {} -> {}",
                    method,
                    truncate(path, PATH_PREVIEW),
                    describe_error(&err)
                );
                tracing::warn!("{}", line);
                self.ui.log(format!("⚠ {}", line));
                None
            }
        }
    }

    pub fn get(&mut self, path: &str) -> Option<Value> {
        self.call(Method::GET, path, None)
    }

    pub fn post(&mut self, path: &str, body: Value) -> Option<Value> {
        self.call(Method::POST, path, Some(body))
    }

    pub fn patch(&mut self, path: &str, body: Value) -> Option<Value> {
        self.call(Method::PATCH, path, Some(body))
    }

    /// GET a collection and decode its rows; failures yield an empty list
    pub fn get_rows<T: serde::de::DeserializeOwned>(&mut self, path: &str) -> Vec<T> {
        let Some(value) = self.get(path) else {
            return Vec::new();
        };
        match serde_json::from_value(value) {
            Ok(rows) => rows,
            Err(err) => {
                tracing::warn!(path, error = %err, "unexpected response shape");
                Vec::new()
            }
        }
    }

    /// Account id for an email via the admin user list
    pub fn find_user_id(&mut self, email: &str) -> Option<String> {
        match self.backend.list_users() {
            Ok(users) => users
                .into_iter()
                .find(|u| u.email.as_deref() == Some(email))
                .map(|u| u.id),
            Err(err) => {
                tracing::warn!(email, error = %err, "user lookup failed");
                None
            }
        }
    }

    /// Create the account, or resolve its id if it is already registered
    pub fn ensure_user(&mut self, email: &str) -> Option<String> {
        match self.backend.create_user(email, &self.password) {
            Ok(user) => Some(user.id),
            Err(err) if err.is_already_registered() => {
                self.ui.log(format!("already registered: {}", email));
                self.find_user_id(email)
            }
            Err(err) => {
                let line = format!("auth create {} -> {}", email, describe_error(&err));
                tracing::warn!("{}", line);
                self.ui.log(format!("⚠ {}", line));
                None
            }
        }
    }

    /// Uniform pick from a non-empty pool
    pub fn pick<T: Copy>(&mut self, pool: &[T]) -> T {
        pool[self.rng.gen_range(0..pool.len())]
    }

    pub fn between(&mut self, low: i64, high: i64) -> i64 {
        self.rng.gen_range(low..=high)
    }

    /// UTC timestamp `days`/`hours`/`minutes` before the run started
    pub fn ago(&self, days: i64, hours: i64, minutes: i64) -> String {
        let at = self.now
            - Duration::days(days)
            - Duration::hours(hours)
            - Duration::minutes(minutes);
        at.format("%Y-%m-%dT%H:%M:%S+00:00").to_string()
    }

    /// Calendar date offset from the run start (negative is the past)
    pub fn date_offset(&self, days: i64) -> String {
        (self.now + Duration::days(days)).format("%Y-%m-%d").to_string()
    }
}

/// Empty arrays, objects and null count as "nothing came back"
pub fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
        _ => true,
    }
}

fn describe_error(err: &ApiError) -> String {
    match err {
        ApiError::Status { code, body } => format!("{}: {}", code, truncate(body, BODY_PREVIEW)),
        other => other.to_string(),
    }
}

/// First `max` characters, never splitting a code point
pub fn truncate(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Short form of an id for log lines
pub fn short_id(id: &str) -> &str {
    truncate(id, 8)
}
