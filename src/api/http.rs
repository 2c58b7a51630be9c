//! HTTP implementation of the attendee endpoint.

use async_trait::async_trait;
use reqwest::{Client, Response};

use super::{ApiError, ApiResult, UsersApi};
use crate::config::AppConfig;
use crate::models::{Attendee, CreateAttendeeBody, DeleteAttendeeBody, ErrorBody, UpdateAttendeeBody};

/// `UsersApi` backed by `reqwest` (browser `fetch` on wasm32)
#[derive(Debug, Clone)]
pub struct HttpUsersApi {
    http: Client,
    endpoint: String,
}

impl HttpUsersApi {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.users_url())
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> ApiResult<Response> {
        request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))
    }
}

/// Turn a non-ok response into `Rejected`, reading the server's `error` field
async fn rejection(res: Response) -> ApiError {
    let status = res.status().as_u16();
    match res.json::<ErrorBody>().await {
        Ok(body) => ApiError::Rejected {
            status,
            message: body.into_message(),
        },
        Err(e) => ApiError::Decode(format!("status {}: {}", status, e)),
    }
}

#[async_trait(?Send)]
impl UsersApi for HttpUsersApi {
    async fn list(&self) -> ApiResult<Vec<Attendee>> {
        let res = self.send(self.http.get(&self.endpoint)).await?;
        res.json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn create(&self, name: &str) -> ApiResult<()> {
        let res = self
            .send(self.http.post(&self.endpoint).json(&CreateAttendeeBody { name }))
            .await?;
        if res.status().is_success() {
            Ok(())
        } else {
            Err(rejection(res).await)
        }
    }

    async fn update(&self, id: &str, name: &str) -> ApiResult<()> {
        let res = self
            .send(self.http.patch(&self.endpoint).json(&UpdateAttendeeBody { id, name }))
            .await?;
        if res.status().is_success() {
            Ok(())
        } else {
            Err(rejection(res).await)
        }
    }

    async fn delete(&self, id: &str) -> ApiResult<()> {
        let res = self
            .send(self.http.delete(&self.endpoint).json(&DeleteAttendeeBody { id }))
            .await?;
        let status = res.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ApiError::Rejected {
                status: status.as_u16(),
                message: String::new(),
            })
        }
    }
}
