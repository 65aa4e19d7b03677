//! Graceful shutdown handling.

use tokio_util::sync::CancellationToken;

/// Returns a token that is cancelled when the process receives Ctrl-C.
///
/// The server and the poller both stop on this token; in-flight upstream
/// requests are not interrupted.
pub fn cancel_on_ctrl_c() -> CancellationToken {
    let token = CancellationToken::new();
    let trigger = token.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => log::info!("Received Ctrl-C, shutting down"),
            Err(e) => log::error!("Failed to listen for Ctrl-C: {e}"),
        }
        trigger.cancel();
    });
    token
}
