//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They record calls so tests can verify behavior.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use crate::domain::ports::{CompletionClient, FeedClient};
use crate::error::{CompletionError, FeedError};

// ============================================================================
// Feed clients
// ============================================================================

/// Feed client that serves queued bodies and counts fetches.
///
/// The last queued body is repeated once the queue runs out.
pub struct CountingFeedClient {
    bodies: Mutex<VecDeque<String>>,
    calls: AtomicUsize,
    last_url: Mutex<Option<String>>,
    delay: Option<Duration>,
}

impl CountingFeedClient {
    pub fn new(body: String) -> Self {
        Self {
            bodies: Mutex::new(VecDeque::from([body])),
            calls: AtomicUsize::new(0),
            last_url: Mutex::new(None),
            delay: None,
        }
    }

    /// Queue a body for the following fetch
    pub fn then_return(self, body: String) -> Self {
        self.bodies.lock().unwrap().push_back(body);
        self
    }

    /// Sleep before answering, to widen race windows
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_url(&self) -> Option<String> {
        self.last_url.lock().unwrap().clone()
    }
}

#[async_trait]
impl FeedClient for CountingFeedClient {
    async fn fetch(&self, url: &str) -> Result<String, FeedError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_url.lock().unwrap() = Some(url.to_string());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let mut bodies = self.bodies.lock().unwrap();
        let body = if bodies.len() > 1 {
            bodies.pop_front().unwrap_or_default()
        } else {
            bodies.front().cloned().unwrap_or_default()
        };
        Ok(body)
    }
}

/// Feed client whose every fetch fails with a 502
#[derive(Default)]
pub struct FailingFeedClient {
    calls: AtomicUsize,
}

impl FailingFeedClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FeedClient for FailingFeedClient {
    async fn fetch(&self, _url: &str) -> Result<String, FeedError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(FeedError::HttpStatus(502))
    }
}

// ============================================================================
// Completion client
// ============================================================================

/// What the scripted completion client answers with
#[derive(Debug, Clone)]
pub enum ScriptedReply {
    Text(String),
    Empty,
    ApiError(u16, String),
    ContentFiltered(String),
}

/// Configured completion client with a fixed reply
pub struct ScriptedCompletionClient {
    reply: ScriptedReply,
    prompts: Mutex<Vec<(String, String)>>,
}

impl ScriptedCompletionClient {
    pub fn new(reply: ScriptedReply) -> Self {
        Self {
            reply,
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// The (system, user) prompts of the most recent call
    pub fn last_prompts(&self) -> Option<(String, String)> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl CompletionClient for ScriptedCompletionClient {
    fn is_configured(&self) -> bool {
        true
    }

    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<Option<String>, CompletionError> {
        self.prompts
            .lock()
            .unwrap()
            .push((system_prompt.to_string(), user_prompt.to_string()));

        match &self.reply {
            ScriptedReply::Text(text) => Ok(Some(text.clone())),
            ScriptedReply::Empty => Ok(None),
            ScriptedReply::ApiError(status, message) => Err(CompletionError::Api {
                status: *status,
                code: None,
                message: message.clone(),
            }),
            ScriptedReply::ContentFiltered(message) => {
                Err(CompletionError::ContentFiltered(message.clone()))
            }
        }
    }
}
