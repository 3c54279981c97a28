//! Simulated Data Sources
//!
//! Async loaders used by the managers, organized by domain. There is no
//! backend; each call waits on a browser timer and then answers from a
//! static catalog.

mod movies;
mod products;
mod sections;

use gloo_timers::future::TimeoutFuture;

// Re-export all public items
pub use movies::*;
pub use products::*;
pub use sections::*;

/// Simulated network latency
async fn latency(delay_ms: u32) {
    if delay_ms > 0 {
        TimeoutFuture::new(delay_ms).await;
    }
}
