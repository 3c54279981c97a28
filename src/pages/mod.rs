//! Demo Pages
//!
//! Each page owns its state and hands presentational components read-only
//! data plus callbacks.

mod movies;
mod performance;
mod preferences;
mod products;

pub use movies::MovieManager;
pub use performance::PerformanceLab;
pub use preferences::PreferencesManager;
pub use products::ProductShowcase;
