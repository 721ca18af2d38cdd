//! REST client for the message backend.

use std::time::Duration;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tokio::runtime::{Builder, Runtime};

use crate::{
    domain::message::Message,
    infra::{config::BackendConfig, error::AppError},
    usecases::{
        load_messages::{MessagesSource, MessagesSourceError},
        send_message::{MessageSender, SendMessageSourceError},
    },
};

use super::dto::SendMessageRequest;

const HTTP_REQUEST_FAILED: &str = "API_HTTP_REQUEST_FAILED";
const HTTP_STATUS_REJECTED: &str = "API_HTTP_STATUS_REJECTED";
const HTTP_BODY_INVALID: &str = "API_HTTP_BODY_INVALID";

/// Blocking facade over an async `reqwest` client.
///
/// Owns a current-thread runtime so callers on plain threads can use it
/// without an executor of their own.
#[derive(Debug)]
pub struct HttpChatBackend {
    runtime: Runtime,
    client: Client,
    messages_url: String,
    send_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RequestFailure {
    Unavailable,
    Status(u16),
    InvalidBody,
}

impl From<RequestFailure> for MessagesSourceError {
    fn from(failure: RequestFailure) -> Self {
        match failure {
            RequestFailure::Unavailable => Self::Unavailable,
            RequestFailure::Status(status) => Self::Rejected(status),
            RequestFailure::InvalidBody => Self::InvalidData,
        }
    }
}

impl From<RequestFailure> for SendMessageSourceError {
    fn from(failure: RequestFailure) -> Self {
        match failure {
            RequestFailure::Unavailable => Self::Unavailable,
            RequestFailure::Status(status) => Self::Rejected(status),
            RequestFailure::InvalidBody => Self::InvalidData,
        }
    }
}

impl HttpChatBackend {
    pub fn new(config: &BackendConfig) -> Result<Self, AppError> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(AppError::RuntimeBuild)?;

        let client = Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(AppError::HttpClientBuild)?;

        Ok(Self {
            runtime,
            client,
            messages_url: config.messages_url(),
            send_url: config.send_url(),
        })
    }

    pub fn messages_url(&self) -> &str {
        &self.messages_url
    }

    async fn get_messages(&self) -> Result<Vec<Message>, RequestFailure> {
        let response = self
            .client
            .get(&self.messages_url)
            .send()
            .await
            .map_err(|error| transport_failure(&self.messages_url, &error))?;

        decode_json(&self.messages_url, response).await
    }

    async fn post_message(&self, text: &str) -> Result<Message, RequestFailure> {
        let response = self
            .client
            .post(&self.send_url)
            .json(&SendMessageRequest { message: text })
            .send()
            .await
            .map_err(|error| transport_failure(&self.send_url, &error))?;

        decode_json(&self.send_url, response).await
    }
}

impl MessagesSource for HttpChatBackend {
    fn fetch_messages(&self) -> Result<Vec<Message>, MessagesSourceError> {
        self.runtime
            .block_on(self.get_messages())
            .map_err(MessagesSourceError::from)
    }
}

impl MessageSender for HttpChatBackend {
    fn send_message(&self, text: &str) -> Result<Message, SendMessageSourceError> {
        self.runtime
            .block_on(self.post_message(text))
            .map_err(SendMessageSourceError::from)
    }
}

async fn decode_json<T>(url: &str, response: Response) -> Result<T, RequestFailure>
where
    T: DeserializeOwned,
{
    let status = response.status();
    if !status.is_success() {
        tracing::warn!(
            code = HTTP_STATUS_REJECTED,
            url,
            status = status.as_u16(),
            "backend rejected request"
        );
        return Err(RequestFailure::Status(status.as_u16()));
    }

    tracing::debug!(url, status = status.as_u16(), "backend responded");

    response.json::<T>().await.map_err(|error| {
        if error.is_decode() {
            tracing::warn!(code = HTTP_BODY_INVALID, url, error = %error, "response body did not decode");
            RequestFailure::InvalidBody
        } else {
            transport_failure(url, &error)
        }
    })
}

fn transport_failure(url: &str, error: &reqwest::Error) -> RequestFailure {
    tracing::warn!(
        code = HTTP_REQUEST_FAILED,
        url,
        timeout = error.is_timeout(),
        error = %error,
        "backend request failed"
    );
    RequestFailure::Unavailable
}
