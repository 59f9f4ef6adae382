use async_trait::async_trait;
use jobreach_core::{
    MessageId, RemoteError, Role, RunId, RunStatus, ThreadId, ThreadMessage, ThreadService,
};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const BETA_HEADER: &str = "assistants=v2";

/// [`ThreadService`] backed by the OpenAI Assistants v2 REST API.
///
/// One method call is one HTTP round trip; retry policy lives with the
/// caller.
pub struct AssistantsClient {
    client: Client,
    api_key: String,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct ObjectRef {
    id: String,
}

#[derive(Debug, Deserialize)]
struct RunObject {
    id: String,
    status: RunStatus,
}

#[derive(Debug, Deserialize)]
struct MessageList {
    data: Vec<MessageObject>,
    #[serde(default)]
    has_more: bool,
    #[serde(default)]
    last_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MessageObject {
    role: Role,
    run_id: Option<String>,
    content: Vec<ContentPart>,
}

impl MessageObject {
    fn into_thread_message(self) -> ThreadMessage {
        ThreadMessage {
            run_id: self.run_id.map(RunId),
            role: self.role,
            content: self
                .content
                .into_iter()
                .filter(|part| part.kind == "text")
                .filter_map(|part| part.text)
                .map(|t| t.value)
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ContentPart {
    #[serde(rename = "type")]
    kind: String,
    text: Option<TextPart>,
}

#[derive(Debug, Deserialize)]
struct TextPart {
    value: String,
}

impl AssistantsClient {
    pub fn new(api_key: String) -> Self {
        info!("Creating AssistantsClient");
        Self {
            client: Client::new(),
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    fn prepare(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .bearer_auth(&self.api_key)
            .header("OpenAI-Beta", BETA_HEADER)
    }

    /// Send a prepared request and deserialize its body, classifying every
    /// failure as transient or permanent.
    async fn send<T: serde::de::DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T, RemoteError> {
        let response = self
            .prepare(builder)
            .send()
            .await
            .map_err(|e| RemoteError::Transient(e.into()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err = anyhow::anyhow!("HTTP {status}: {body}");
            return Err(if is_transient_status(status) {
                RemoteError::Transient(err)
            } else {
                RemoteError::Permanent(err)
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| RemoteError::Permanent(anyhow::anyhow!("malformed response body: {e}")))
    }
}

/// Statuses worth retrying: timeouts, rate limits, server-side failures.
fn is_transient_status(status: StatusCode) -> bool {
    status.is_server_error()
        || matches!(
            status,
            StatusCode::REQUEST_TIMEOUT | StatusCode::TOO_MANY_REQUESTS
        )
}

#[async_trait]
impl ThreadService for AssistantsClient {
    async fn create_thread(&self) -> Result<ThreadId, RemoteError> {
        let thread: ObjectRef = self
            .send(
                self.client
                    .post(format!("{}/threads", self.base_url))
                    .json(&json!({})),
            )
            .await?;
        info!("Created thread {}", thread.id);
        Ok(ThreadId(thread.id))
    }

    async fn post_message(
        &self,
        thread_id: &ThreadId,
        role: Role,
        content: &str,
    ) -> Result<MessageId, RemoteError> {
        let message: ObjectRef = self
            .send(
                self.client
                    .post(format!("{}/threads/{thread_id}/messages", self.base_url))
                    .json(&json!({ "role": role, "content": content })),
            )
            .await?;
        debug!("Posted message {} to thread {thread_id}", message.id);
        Ok(MessageId(message.id))
    }

    async fn create_run(
        &self,
        thread_id: &ThreadId,
        assistant_id: &str,
    ) -> Result<RunId, RemoteError> {
        let run: RunObject = self
            .send(
                self.client
                    .post(format!("{}/threads/{thread_id}/runs", self.base_url))
                    .json(&json!({ "assistant_id": assistant_id })),
            )
            .await?;
        info!("Created run {} on thread {thread_id} ({})", run.id, run.status);
        Ok(RunId(run.id))
    }

    async fn run_status(
        &self,
        thread_id: &ThreadId,
        run_id: &RunId,
    ) -> Result<RunStatus, RemoteError> {
        let run: RunObject = self
            .send(
                self.client
                    .get(format!("{}/threads/{thread_id}/runs/{run_id}", self.base_url)),
            )
            .await?;
        debug!("Run {run_id} status: {}", run.status);
        Ok(run.status)
    }

    async fn list_messages(&self, thread_id: &ThreadId) -> Result<Vec<ThreadMessage>, RemoteError> {
        // Ascending order so transcript appends preserve remote order. Long
        // sessions outgrow one page; follow the `after` cursor to the end.
        let mut messages = Vec::new();
        let mut after: Option<String> = None;

        loop {
            let mut request = self
                .client
                .get(format!("{}/threads/{thread_id}/messages", self.base_url))
                .query(&[("order", "asc"), ("limit", "100")]);
            if let Some(cursor) = &after {
                request = request.query(&[("after", cursor.as_str())]);
            }

            let page: MessageList = self.send(request).await?;
            let has_more = page.has_more;
            let cursor = page.last_id;
            messages.extend(page.data.into_iter().map(MessageObject::into_thread_message));

            match cursor {
                Some(cursor) if has_more => after = Some(cursor),
                _ => break,
            }
        }

        debug!(
            "Thread {thread_id} holds {} message(s) across pagination",
            messages.len()
        );
        Ok(messages)
    }
}
