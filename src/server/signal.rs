// Shutdown signal module
//
// Resolves when the operator asks the process to stop:
// - SIGINT  (Ctrl+C)
// - SIGTERM (kill <pid>, Unix only)

/// Wait for an operator interrupt (Unix).
#[cfg(unix)]
pub async fn shutdown() {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigint = signal(SignalKind::interrupt()).expect("Failed to register SIGINT handler");
    let mut sigterm = signal(SignalKind::terminate()).expect("Failed to register SIGTERM handler");

    tokio::select! {
        _ = sigint.recv() => println!("\n[Signal] SIGINT received (Ctrl+C)"),
        _ = sigterm.recv() => println!("\n[Signal] SIGTERM received"),
    }
}

/// Windows fallback - only Ctrl+C is supported
#[cfg(not(unix))]
pub async fn shutdown() {
    if tokio::signal::ctrl_c().await.is_ok() {
        println!("\n[Signal] Ctrl+C received");
    }
}
