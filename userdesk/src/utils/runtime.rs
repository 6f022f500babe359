//! Global Tokio runtime for async HTTP operations
//!
//! egui runs the UI on its own thread without an async runtime, but reqwest
//! requires a tokio context. This static runtime bridges the two: handlers
//! spawn network tasks onto it, and the tasks report back to the UI thread
//! over the event channel.

use once_cell::sync::Lazy;
use tokio::runtime::Runtime;

pub static TOKIO_RT: Lazy<Runtime> = Lazy::new(|| {
    Runtime::new().expect("Failed to create Tokio runtime for async HTTP operations")
});
