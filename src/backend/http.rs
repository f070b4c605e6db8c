//! HTTP sentiment backend.

use url::Url;

use super::{BackendError, ChatBackend, ChatReply, ChatRequest};

/// Backend reached over HTTP.
///
/// Posts [`ChatRequest`] as JSON to the configured endpoint. The reply body
/// is decoded regardless of status code, since the service reports
/// application errors as `{"error": ...}` with 4xx/5xx statuses.
#[derive(Clone)]
pub struct HttpChatBackend {
    http: reqwest::Client,
    endpoint: Url,
}

impl std::fmt::Debug for HttpChatBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpChatBackend")
            .field("endpoint", &self.endpoint.as_str())
            .finish()
    }
}

impl HttpChatBackend {
    /// Create a backend posting to `chat_path` relative to `base_url`.
    pub fn new(base_url: &str, chat_path: &str) -> Result<Self, BackendError> {
        let endpoint = Url::parse(base_url)?.join(chat_path)?;
        Ok(Self {
            http: reqwest::Client::new(),
            endpoint,
        })
    }

    /// The full URL requests are posted to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl ChatBackend for HttpChatBackend {
    async fn send(&self, message: &str) -> Result<ChatReply, BackendError> {
        let body = ChatRequest {
            message: message.to_string(),
        };

        tracing::debug!(endpoint = %self.endpoint, "Posting message to backend");

        let resp = self
            .http
            .post(self.endpoint.clone())
            .json(&body)
            .send()
            .await?;
        let status = resp.status();
        let text = resp.text().await?;

        let reply = serde_json::from_str(&text).map_err(|source| BackendError::Decode {
            status: status.as_u16(),
            source,
        })?;

        tracing::debug!(status = status.as_u16(), "Backend replied");
        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_chat_path() {
        let backend = HttpChatBackend::new("http://127.0.0.1:5000", "/chat").unwrap();
        assert_eq!(backend.endpoint().as_str(), "http://127.0.0.1:5000/chat");
    }

    #[test]
    fn test_absolute_chat_path_replaces_base_path() {
        let backend = HttpChatBackend::new("http://example.com/app/", "/chat").unwrap();
        assert_eq!(backend.endpoint().as_str(), "http://example.com/chat");

        let backend = HttpChatBackend::new("http://example.com/app/", "chat").unwrap();
        assert_eq!(backend.endpoint().as_str(), "http://example.com/app/chat");
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        assert!(matches!(
            HttpChatBackend::new("not a url", "/chat"),
            Err(BackendError::Endpoint(_))
        ));
    }
}
