//! Shared fixtures for the API integration tests

use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use jobboard_infra::api::{ApiClient, ApiClientConfig, JobBoardApi, TokenStore};
use wiremock::MockServer;

/// Counts how often the 401 hook fired
#[derive(Clone, Default)]
pub struct UnauthorizedCounter {
    calls: Arc<AtomicUsize>,
}

impl UnauthorizedCounter {
    pub fn count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn hook(&self) -> impl Fn() + Send + Sync + 'static {
        let calls = self.calls.clone();
        move || {
            calls.fetch_add(1, Ordering::SeqCst);
        }
    }
}

/// Client, its session and the 401 counter, pointed at `base_url`
pub struct TestApi {
    pub api: JobBoardApi,
    pub store: TokenStore,
    pub unauthorized: UnauthorizedCounter,
}

impl TestApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let store = TokenStore::in_memory();
        let unauthorized = UnauthorizedCounter::default();

        let config = ApiClientConfig { base_url: base_url.into(), ..Default::default() };
        let client = ApiClient::builder()
            .config(config)
            .token_store(store.clone())
            .on_unauthorized(unauthorized.hook())
            .build()
            .expect("client should build");

        Self { api: JobBoardApi::new(Arc::new(client)), store, unauthorized }
    }

    pub fn for_server(server: &MockServer) -> Self {
        Self::new(server.uri())
    }

    /// Start with a signed-in session
    pub async fn signed_in(self, token: &str, user_type: &str) -> Self {
        self.store.set_token(token, user_type).await.expect("session should be stored");
        self
    }
}

/// Base URL of a port nothing listens on
pub fn refused_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}/api/v1")
}
