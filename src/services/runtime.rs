//! Tokio Runtime Bridge
//!
//! The front end owns the controller on its own thread and must never stall
//! on the network. Requests run on a shared background tokio runtime and
//! their completion is reported back over a channel.
//!
//! ## Pattern
//!
//! ```text
//! UI thread (owns ForecastController)
//!       │ dispatch()
//!       ▼
//! spawn_in_tokio(async { client.predict(payload) })
//!       │
//!       ▼
//! AppEvent::ForecastCompleted ──► handle_event() on the UI thread
//! ```

use std::future::Future;
use std::sync::OnceLock;
use tokio::runtime::Runtime;

/// Global tokio runtime instance
static TOKIO_RUNTIME: OnceLock<Runtime> = OnceLock::new();

/// Get or initialize the global tokio runtime
fn get_runtime() -> &'static Runtime {
    TOKIO_RUNTIME.get_or_init(|| Runtime::new().expect("Failed to create tokio runtime"))
}

/// Spawn a detached task in the tokio runtime
///
/// The task runs independently and its result is not awaited.
pub fn spawn_in_tokio<F>(future: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    get_runtime().spawn(future);
}

/// Block on a future synchronously (use sparingly, mainly for initialization)
///
/// **Warning**: This blocks the current thread and panics if called from
/// inside an async context.
pub fn block_on<F, T>(future: F) -> T
where
    F: Future<Output = T>,
{
    get_runtime().block_on(future)
}
