//! This module provides a client for the task actions of the server
//!
//! Every endpoint answers a small JSON document with a `success` flag. Unlike a browser page that would silently ignore
//! failures, every call here returns an explicit `Result`, and `success: false` is turned into a [`TaskActionError::Rejected`].

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::RequestBuilder;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::TaskActionError;
use crate::task::{Priority, TaskId};
use crate::traits::TaskActions;

/// The JSON document every task action answers
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
struct ActionResponse {
    success: bool,
    /// Only sent by `toggle_task`
    completed: Option<bool>,
    /// Sometimes sent along with `success: false`
    message: Option<String>,
}

#[derive(Clone, Copy, Debug, Serialize)]
struct PriorityBody {
    priority: Priority,
}


/// A client that sends task actions to a server
#[derive(Clone, Debug)]
pub struct Client {
    base_url: Url,
    http: reqwest::Client,
}

impl Client {
    /// Create a client. This does not start a connection
    pub fn new<S: AsRef<str>>(url: S) -> Result<Self, TaskActionError> {
        let mut base_url = Url::parse(url.as_ref())?;
        // Endpoints are joined to the base URL, which must look like a directory for this to work
        if base_url.path().ends_with('/') == false {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let http = reqwest::Client::builder()
            .user_agent(crate::config::user_agent())
            .build()?;

        Ok(Self { base_url, http })
    }

    /// Create a client for the server given by [`config::server_url`](crate::config::server_url)
    pub fn from_config() -> Result<Self, TaskActionError> {
        Self::new(crate::config::server_url())
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, action: &str, id: TaskId) -> Result<Url, TaskActionError> {
        Ok(self.base_url.join(&format!("{}/{}", action, id))?)
    }

    async fn send(&self, request: RequestBuilder) -> Result<ActionResponse, TaskActionError> {
        let response = request
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if status.is_success() == false {
            log::warn!("Server answered HTTP {} to {}", status, response.url());
            return Err(TaskActionError::Status(status.as_u16()));
        }

        let text = response.text().await?;
        let parsed: ActionResponse = serde_json::from_str(&text)?;
        if parsed.success == false {
            log::warn!("Server rejected the action: {:?}", parsed.message);
            return Err(TaskActionError::Rejected { message: parsed.message });
        }
        Ok(parsed)
    }

    async fn get(&self, action: &str, id: TaskId) -> Result<ActionResponse, TaskActionError> {
        let url = self.endpoint(action, id)?;
        log::debug!("GET {}", url);
        self.send(self.http.get(url)).await
    }
}

#[async_trait]
impl TaskActions for Client {
    async fn update_task_priority(&self, id: TaskId, priority: Priority) -> Result<(), TaskActionError> {
        let url = self.endpoint("update_task_priority", id)?;
        log::debug!("POST {} (priority {})", url, priority.as_u8());
        self.send(self.http.post(url).json(&PriorityBody { priority })).await?;
        log::info!("Task {} now has priority {}", id, priority.as_u8());
        Ok(())
    }

    async fn move_task_tomorrow(&self, id: TaskId) -> Result<(), TaskActionError> {
        self.get("move_task_tomorrow", id).await?;
        log::info!("Task {} moved to tomorrow", id);
        Ok(())
    }

    async fn delete_task_completely(&self, id: TaskId) -> Result<(), TaskActionError> {
        self.get("delete_task_completely", id).await?;
        log::info!("Task {} deleted", id);
        Ok(())
    }

    async fn toggle_task(&self, id: TaskId) -> Result<bool, TaskActionError> {
        let response = self.get("toggle_task", id).await?;
        let completed = response.completed.ok_or(TaskActionError::MalformedResponse("completed"))?;
        log::info!("Task {} is now {}", id, if completed { "completed" } else { "not completed" });
        Ok(completed)
    }
}
