//! Scripted [`TextGenerator`] for tests.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::provider::{GenerationError, GenerationRequest, TextGenerator};

/// Returns a fixed reply (or a fixed failure) and records every prompt.
pub struct MockGenerator {
    reply: Option<String>,
    call_count: AtomicU32,
    prompts: Mutex<Vec<String>>,
}

impl MockGenerator {
    /// A generator that always answers with `reply`.
    pub fn replying(reply: impl Into<String>) -> Self {
        Self {
            reply: Some(reply.into()),
            call_count: AtomicU32::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// A generator that always fails with [`GenerationError::Unavailable`].
    pub fn failing() -> Self {
        Self {
            reply: None,
            call_count: AtomicU32::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Prompts received so far, oldest first.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .map(|p| p.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    fn id(&self) -> &str {
        "mock"
    }

    async fn generate(&self, request: GenerationRequest) -> Result<String, GenerationError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(request.prompt);
        }
        self.reply
            .clone()
            .ok_or_else(|| GenerationError::Unavailable("mock generator set to fail".into()))
    }
}
