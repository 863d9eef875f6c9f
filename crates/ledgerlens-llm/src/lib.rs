//! LedgerLens LLM Provider Layer
//!
//! Implementations of the `LlmProvider` trait from `ledgerlens-domain`.
//!
//! # Providers
//!
//! - `MockProvider`: scriptable oracle stand-in for tests
//! - `GeminiProvider`: Google Gemini API integration
//!
//! # Examples
//!
//! ```
//! use ledgerlens_llm::MockProvider;
//! use ledgerlens_domain::traits::LlmProvider;
//!
//! let provider = MockProvider::empty();
//! assert_eq!(provider.generate("statement text").unwrap(), "[]");
//! ```

#![warn(missing_docs)]

pub mod gemini;

use ledgerlens_domain::traits::LlmProvider as LlmProviderTrait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use gemini::{GeminiConfig, GeminiProvider};

/// Errors that can occur during LLM operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or HTTP-level failure reaching the oracle service
    #[error("Transport error: {0}")]
    Transport(String),

    /// The service answered with something that cannot be decoded
    #[error("Malformed reply: {0}")]
    MalformedReply(String),

    /// HTTP 429 from the service
    #[error("Rate limited by the oracle service")]
    RateLimited,

    /// The configured model id was rejected
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Failure inside the sync-to-async bridge
    #[error("Runtime error: {0}")]
    Runtime(String),
}

/// Wrap a JSON payload in a Markdown code fence
///
/// Hosted oracles frequently fence their JSON despite instructions not to;
/// tests use this to script that shape of reply.
pub fn fenced_json(payload: &str) -> String {
    format!("```json\n{}\n```", payload)
}

/// Failure modes a scripted prompt can exhibit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockFailure {
    /// Connection-level failure, as when the service is unreachable
    Transport,
    /// The service throttled the request
    RateLimited,
    /// The model id was rejected
    ModelMissing,
}

#[derive(Debug)]
enum MockScript {
    Reply(String),
    Fail(MockFailure),
}

/// Scriptable oracle for deterministic tests
///
/// Unscripted prompts get the default reply; individual prompts can be
/// scripted to a specific reply or a failure mode. Clones share the scripts
/// and the call counter, so a mock handed to concurrent chunk tasks still
/// reports one aggregate count.
///
/// # Examples
///
/// ```
/// use ledgerlens_llm::{MockFailure, MockProvider};
/// use ledgerlens_domain::traits::LlmProvider;
///
/// let mut oracle = MockProvider::empty();
/// oracle.script_reply("chunk one", r#"[{"merchant": "Swiggy"}]"#);
/// oracle.script_failure("chunk two", MockFailure::RateLimited);
///
/// assert!(oracle.generate("chunk one").unwrap().contains("Swiggy"));
/// assert!(oracle.generate("chunk two").is_err());
/// assert_eq!(oracle.generate("anything else").unwrap(), "[]");
/// assert_eq!(oracle.call_count(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_reply: String,
    scripts: Arc<Mutex<HashMap<String, MockScript>>>,
    calls: Arc<Mutex<usize>>,
}

impl MockProvider {
    /// Create a mock that gives `default_reply` for every unscripted prompt
    pub fn new(default_reply: impl Into<String>) -> Self {
        Self {
            default_reply: default_reply.into(),
            scripts: Arc::new(Mutex::new(HashMap::new())),
            calls: Arc::new(Mutex::new(0)),
        }
    }

    /// An oracle that finds no transactions in anything
    pub fn empty() -> Self {
        Self::new("[]")
    }

    /// Script a specific reply for one prompt
    pub fn script_reply(&mut self, prompt: impl Into<String>, reply: impl Into<String>) {
        self.scripts
            .lock()
            .unwrap()
            .insert(prompt.into(), MockScript::Reply(reply.into()));
    }

    /// Script one prompt to fail with the given mode
    pub fn script_failure(&mut self, prompt: impl Into<String>, failure: MockFailure) {
        self.scripts
            .lock()
            .unwrap()
            .insert(prompt.into(), MockScript::Fail(failure));
    }

    /// Number of generate calls across all clones of this mock
    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::empty()
    }
}

impl LlmProviderTrait for MockProvider {
    type Error = LlmError;

    fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        *self.calls.lock().unwrap() += 1;

        match self.scripts.lock().unwrap().get(prompt) {
            Some(MockScript::Reply(reply)) => Ok(reply.clone()),
            Some(MockScript::Fail(MockFailure::Transport)) => Err(LlmError::Transport(
                "scripted transport failure".to_string(),
            )),
            Some(MockScript::Fail(MockFailure::RateLimited)) => Err(LlmError::RateLimited),
            Some(MockScript::Fail(MockFailure::ModelMissing)) => {
                Err(LlmError::ModelNotAvailable("scripted-model".to_string()))
            }
            None => Ok(self.default_reply.clone()),
        }
    }
}
