//! Authenticated client for the Godspeed task API.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Method, Url};
use serde_json::Value;
use tracing::debug;

use crate::config::GodspeedConfig;
use crate::error::{GodspeedError, Result};

use super::http::{apply_bearer, build_http_client, parse_json_body, status_to_error};
use super::task::{NewTask, TaskResponse, TaskStatus, TaskUpdate};
use super::TaskApi;

/// Per-request extras for [`GodspeedClient::request`].
#[derive(Debug, Default)]
pub struct RequestOptions {
    pub query: Vec<(&'static str, String)>,
    pub json: Option<Value>,
    /// Extra headers. `Authorization` is always overwritten with the
    /// client's bearer token.
    pub headers: HeaderMap,
}

impl RequestOptions {
    pub fn query(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.query.push((key, value.into()));
        self
    }

    pub fn json(mut self, body: Value) -> Self {
        self.json = Some(body);
        self
    }

    pub fn headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }
}

/// Client for the Godspeed API.
///
/// Cheap to clone: clones share the connection pool and the credential, so a
/// rotated token is seen by every clone.
#[derive(Clone)]
pub struct GodspeedClient {
    http: reqwest::Client,
    base_url: String,
    inbox_list_id: String,
    token: Arc<RwLock<Option<Arc<str>>>>,
}

impl std::fmt::Debug for GodspeedClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GodspeedClient")
            .field("base_url", &self.base_url)
            .field("inbox_list_id", &self.inbox_list_id)
            .field("authenticated", &self.current_token().is_some())
            .finish()
    }
}

impl GodspeedClient {
    pub fn new(config: &GodspeedConfig) -> Result<Self> {
        Ok(Self::with_http_client(config, build_http_client()?))
    }

    /// Build around an existing reqwest client.
    pub fn with_http_client(config: &GodspeedConfig, http: reqwest::Client) -> Self {
        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            inbox_list_id: config.inbox_list_id.clone(),
            token: Arc::new(RwLock::new(Some(Arc::from(config.token.as_str())))),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn inbox_list_id(&self) -> &str {
        &self.inbox_list_id
    }

    /// Replace the bearer token.
    ///
    /// Requests already in flight keep the token they started with.
    pub fn set_auth_token(&self, token: impl Into<String>) {
        let token: String = token.into();
        *self.token.write().unwrap_or_else(|e| e.into_inner()) = Some(Arc::from(token));
    }

    /// Drop the bearer token. Later calls fail with
    /// [`GodspeedError::NotAuthenticated`] without touching the network.
    pub fn clear_auth_token(&self) {
        *self.token.write().unwrap_or_else(|e| e.into_inner()) = None;
    }

    fn current_token(&self) -> Option<Arc<str>> {
        self.token
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
            .filter(|token| !token.is_empty())
    }

    /// Resolve path segments against the base URL. Each segment is
    /// percent-encoded, so `/`, `?` and `#` inside an id stay inside it.
    pub fn endpoint_url(&self, segments: &[&str]) -> Result<Url> {
        if let Some(bad) = segments
            .iter()
            .find(|segment| matches!(**segment, "" | "." | ".."))
        {
            return Err(GodspeedError::InvalidPathSegment(bad.to_string()));
        }

        let mut url = Url::parse(&self.base_url)
            .map_err(|e| GodspeedError::Configuration(format!("invalid base URL: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| GodspeedError::Configuration("base URL cannot carry a path".into()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Issue an authenticated request to `segments` under the base URL and
    /// decode the JSON response.
    pub async fn request(
        &self,
        method: Method,
        segments: &[&str],
        options: RequestOptions,
    ) -> Result<Value> {
        let token = self.current_token().ok_or(GodspeedError::NotAuthenticated)?;

        let mut headers = options.headers;
        apply_bearer(&mut headers, &token)?;

        let url = self.endpoint_url(segments)?;
        let endpoint = url.path().to_string();
        debug!(%method, %endpoint, "Godspeed request");

        let mut builder = self.http.request(method.clone(), url).headers(headers);
        if !options.query.is_empty() {
            builder = builder.query(&options.query);
        }
        if let Some(body) = options.json {
            builder = builder.json(&body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let response_headers = response.headers().clone();
        let body = response.text().await?;

        if !status.is_success() {
            debug!(%method, %endpoint, status = status.as_u16(), "Godspeed request failed");
            return Err(status_to_error(status, &response_headers, &body));
        }

        parse_json_body(&body)
    }

    /// `GET /tasks` for incomplete tasks in the inbox, reduced to summaries.
    pub async fn list_tasks(&self) -> Result<TaskResponse> {
        let options = RequestOptions::default()
            .query("list_id", self.inbox_list_id.as_str())
            .query("status", TaskStatus::Incomplete.to_string());
        let raw = self.request(Method::GET, &["tasks"], options).await?;
        Ok(TaskResponse::from_list(raw))
    }

    /// `POST /tasks` with a title, scoped to the inbox list.
    pub async fn create_task(&self, title: &str) -> Result<TaskResponse> {
        let body = serde_json::to_value(NewTask {
            title,
            list_id: &self.inbox_list_id,
        })?;
        let raw = self
            .request(Method::POST, &["tasks"], RequestOptions::default().json(body))
            .await?;
        Ok(TaskResponse::from_single(raw))
    }

    /// `PATCH /tasks/{id}` with only the supplied fields.
    pub async fn update_task(&self, task_id: &str, update: TaskUpdate) -> Result<TaskResponse> {
        let body = serde_json::to_value(&update)?;
        let raw = self
            .request(
                Method::PATCH,
                &["tasks", task_id],
                RequestOptions::default().json(body),
            )
            .await?;
        Ok(TaskResponse::from_single(raw))
    }

    /// `DELETE /tasks/{id}`. No reduction.
    pub async fn delete_task(&self, task_id: &str) -> Result<Value> {
        self.request(Method::DELETE, &["tasks", task_id], RequestOptions::default())
            .await
    }
}

#[async_trait]
impl TaskApi for GodspeedClient {
    async fn list_tasks(&self) -> Result<TaskResponse> {
        GodspeedClient::list_tasks(self).await
    }

    async fn create_task(&self, title: &str) -> Result<TaskResponse> {
        GodspeedClient::create_task(self, title).await
    }

    async fn update_task(&self, task_id: &str, update: TaskUpdate) -> Result<TaskResponse> {
        GodspeedClient::update_task(self, task_id, update).await
    }

    async fn delete_task(&self, task_id: &str) -> Result<Value> {
        GodspeedClient::delete_task(self, task_id).await
    }
}
