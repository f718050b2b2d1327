// Server module entry point
// Listener setup, the accept loop, per-connection serving, and shutdown signals

pub mod connection;
pub mod listener;
pub mod signal;

// Rust does not allow `loop` as a module name (keyword), use server_loop
#[path = "loop.rs"]
pub mod server_loop;

// Re-export the pieces main() wires together
pub use listener::bind_listener;
pub use server_loop::run_until_shutdown;
