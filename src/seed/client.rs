use anyhow::{Context, Result};
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde_json::{json, Value};
use std::time::Duration;

use super::backend::{ApiError, AuthUser, Backend};
use crate::config::BackendCredentials;

const USERS_PAGE: &str = "/auth/v1/admin/users?page=1&per_page=100";

/// Blocking REST client authenticated with the service key
pub struct RestClient {
    client: Client,
    base_url: String,
}

impl RestClient {
    pub fn new(credentials: &BackendCredentials) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let key = HeaderValue::from_str(&credentials.service_key)
            .context("Backend key is not a valid header value")?;
        let bearer = HeaderValue::from_str(&format!("Bearer {}", credentials.service_key))
            .context("Backend key is not a valid header value")?;
        headers.insert("apikey", key);
        headers.insert(AUTHORIZATION, bearer);

        let client = Client::builder()
            .user_agent("golf-catalog")
            .default_headers(headers)
            .timeout(Duration::from_secs(credentials.timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: credentials.url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn send(&self, request: RequestBuilder, context: &str) -> Result<Value, ApiError> {
        let response = request.send()?;
        let status = response.status();
        let text = response.text()?;

        if !status.is_success() {
            return Err(ApiError::Status {
                code: status.as_u16(),
                body: text,
            });
        }

        if text.trim().is_empty() {
            return Ok(Value::Array(Vec::new()));
        }

        serde_json::from_str(&text).map_err(|source| ApiError::Json {
            context: context.to_string(),
            source,
        })
    }
}

impl Backend for RestClient {
    fn rest(&self, method: Method, path: &str, body: Option<&Value>) -> Result<Value, ApiError> {
        let mut request = self
            .client
            .request(method, self.url(path))
            .header(CONTENT_TYPE, "application/json")
            .header("Prefer", "return=representation");
        if let Some(body) = body {
            request = request.json(body);
        }
        self.send(request, path)
    }

    fn create_user(&self, email: &str, password: &str) -> Result<AuthUser, ApiError> {
        let body = json!({
            "email": email,
            "password": password,
            "email_confirm": true,
        });
        let request = self.client.post(self.url("/auth/v1/admin/users")).json(&body);
        let value = self.send(request, "create user")?;

        let id = value
            .get("id")
            .and_then(Value::as_str)
            .ok_or_else(|| ApiError::MissingField("id".to_string()))?;
        Ok(AuthUser {
            id: id.to_string(),
            email: Some(email.to_string()),
        })
    }

    fn list_users(&self) -> Result<Vec<AuthUser>, ApiError> {
        let value = self.send(self.client.get(self.url(USERS_PAGE)), "list users")?;
        parse_user_page(value)
    }
}

/// The admin API answers either `{"users": [...]}` or a bare array
pub fn parse_user_page(value: Value) -> Result<Vec<AuthUser>, ApiError> {
    let users = match value {
        Value::Object(mut obj) => obj
            .remove("users")
            .ok_or_else(|| ApiError::MissingField("users".to_string()))?,
        other => other,
    };
    serde_json::from_value(users).map_err(|source| ApiError::Json {
        context: "user page".to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_user_page_shapes() {
        let wrapped = json!({"users": [{"id": "u1", "email": "a@b.c"}], "aud": "x"});
        let bare = json!([{"id": "u2"}]);

        assert_eq!(
            parse_user_page(wrapped).unwrap(),
            vec![AuthUser {
                id: "u1".into(),
                email: Some("a@b.c".into())
            }]
        );
        assert_eq!(parse_user_page(bare).unwrap()[0].email, None);
        assert!(parse_user_page(json!({"total": 0})).is_err());
    }

    #[test]
    fn test_client_trims_base_url() {
        let client = RestClient::new(&BackendCredentials {
            url: "https://example.supabase.co/".into(),
            service_key: "key".into(),
            timeout_secs: 5,
        })
        .unwrap();
        assert_eq!(client.url("/rest/v1/profiles"), "https://example.supabase.co/rest/v1/profiles");
    }
}
