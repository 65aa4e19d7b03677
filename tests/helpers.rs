// Shared test helpers for spawning the service on an ephemeral port.
//
// Each test file pulls this in with `mod helpers;`.

use geowoot::server::{serve, AppState};
use geowoot::ServerConfig;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

/// A running service, stopped when dropped.
pub struct TestService {
    pub base_url: String,
    pub state: AppState,
    shutdown: CancellationToken,
}

impl TestService {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestService {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

/// Starts the service on `127.0.0.1:0` with the metadata site at
/// `metadata_url`.
pub async fn spawn_service(metadata_url: &str) -> TestService {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("listener has an address");
    let base_url = format!("http://{}", addr);

    let config = ServerConfig {
        listen_addr: addr.to_string(),
        base_url: base_url.clone(),
        metadata_url: metadata_url.to_string(),
        ..Default::default()
    };
    let state = AppState::from_config(&config).expect("Failed to build state");
    let shutdown = CancellationToken::new();
    tokio::spawn(serve(listener, state.clone(), shutdown.clone()));

    TestService {
        base_url,
        state,
        shutdown,
    }
}

/// A port nothing is listening on.
#[allow(dead_code)] // Used by other test files
pub async fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind probe listener");
    let addr = listener.local_addr().expect("listener has an address");
    drop(listener);
    format!("http://{}", addr)
}
