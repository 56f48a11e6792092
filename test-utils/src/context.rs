use std::sync::{Arc, Mutex};

use tokio::task::JoinHandle;

/// A request received by the Discord stub.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: String,
    /// Path relative to the stub root, e.g. `/guilds/123`
    pub path: String,
    /// Raw query string, if any
    pub query: Option<String>,
    /// Value of the `Authorization` header, if sent
    pub authorization: Option<String>,
}

/// Test context containing the running Discord stub and the credentials the
/// application under test should be configured with.
///
/// The stub server is stopped when the context is dropped.
pub struct TestContext {
    /// Base URL of the stub, to be used as the Discord API URL.
    ///
    /// Points at a closed port when the builder was asked for an unreachable API.
    pub api_url: String,

    /// Bot token the stub accepts, `None` to simulate a missing credential.
    pub bot_token: Option<String>,

    /// Guild ID to configure, `None` to simulate a missing guild.
    pub guild_id: Option<String>,

    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    server: Option<JoinHandle<()>>,
}

impl TestContext {
    pub(crate) fn new(
        api_url: String,
        bot_token: Option<String>,
        guild_id: Option<String>,
        requests: Arc<Mutex<Vec<RecordedRequest>>>,
        server: Option<JoinHandle<()>>,
    ) -> Self {
        Self {
            api_url,
            bot_token,
            guild_id,
            requests,
            server,
        }
    }

    /// Returns every request the stub has received so far, in arrival order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().expect("request log poisoned").clone()
    }

    /// Number of requests the stub has received so far.
    pub fn request_count(&self) -> usize {
        self.requests.lock().expect("request log poisoned").len()
    }

    /// Returns the first recorded request for `path`, if any.
    pub fn request_to(&self, path: &str) -> Option<RecordedRequest> {
        self.requests().into_iter().find(|r| r.path == path)
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        if let Some(server) = self.server.take() {
            server.abort();
        }
    }
}
