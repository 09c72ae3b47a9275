//! Stub drivers shared by the pipeline tests.

#![allow(dead_code)]

use async_trait::async_trait;
use ideablog_core::{GenerateRequest, GenerateResponse};
use ideablog_error::{GeminiError, GeminiErrorKind, IdeaBlogResult};
use ideablog_interface::IdeaBlogDriver;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// A well-formed narrative reply.
pub fn narrative_reply(narrative: &str, growth: &str, contributions: &str) -> String {
    format!(
        "<connected_narrative>{narrative}</connected_narrative>\
         <growth_points>{growth}</growth_points>\
         <ai_contributions>{contributions}</ai_contributions>"
    )
}

/// A well-formed style reply.
pub fn styled_reply(post: &str) -> String {
    format!("Here you go:\n<styled_draft>\n{post}\n</styled_draft>")
}

#[derive(Debug, Clone)]
enum Reply {
    Text(String),
    Fail(String),
}

/// Driver returning queued replies in order, then a fallback reply forever.
///
/// Every request is kept for inspection.
#[derive(Debug, Default)]
pub struct ScriptedDriver {
    queue: Mutex<VecDeque<Reply>>,
    fallback: Option<String>,
    requests: Mutex<Vec<GenerateRequest>>,
}

impl ScriptedDriver {
    /// Always reply with `text`.
    pub fn always(text: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            fallback: Some(text.into()),
            ..Default::default()
        })
    }

    /// Reply with each text in turn; calls past the end fail.
    pub fn sequence<I, S>(texts: I) -> Arc<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let driver = Self::default();
        {
            let mut queue = driver.queue.lock().unwrap();
            queue.extend(texts.into_iter().map(|t| Reply::Text(t.into())));
        }
        Arc::new(driver)
    }

    /// Make the next queued call fail with a remote error.
    pub fn push_failure(&self, message: &str) {
        self.queue
            .lock()
            .unwrap()
            .push_back(Reply::Fail(message.to_string()));
    }

    /// Queue another successful reply.
    pub fn push_reply(&self, text: impl Into<String>) {
        self.queue.lock().unwrap().push_back(Reply::Text(text.into()));
    }

    /// Requests received so far.
    pub fn requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of calls received.
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Content of the last message of the most recent request.
    pub fn last_prompt(&self) -> Option<String> {
        self.requests
            .lock()
            .unwrap()
            .last()
            .and_then(|req| req.messages.last())
            .map(|m| m.content.clone())
    }
}

#[async_trait]
impl IdeaBlogDriver for ScriptedDriver {
    async fn generate(&self, req: &GenerateRequest) -> IdeaBlogResult<GenerateResponse> {
        self.requests.lock().unwrap().push(req.clone());

        let next = self.queue.lock().unwrap().pop_front();
        let reply = match (next, &self.fallback) {
            (Some(reply), _) => reply,
            (None, Some(text)) => Reply::Text(text.clone()),
            (None, None) => Reply::Fail("script exhausted".to_string()),
        };

        match reply {
            Reply::Text(text) => Ok(GenerateResponse::new(text)),
            Reply::Fail(message) => {
                Err(GeminiError::new(GeminiErrorKind::ApiRequest(message)).into())
            }
        }
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }

    fn model_name(&self) -> &str {
        "scripted-model"
    }
}
