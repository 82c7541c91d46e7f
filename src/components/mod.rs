//! UI Components
//!
//! Reusable Leptos components for the tracker.

pub mod chart;
pub mod nav;
pub mod progress;
pub mod toast;

pub use chart::CompletionChart;
pub use nav::{Nav, UserNav};
pub use progress::ProgressBar;
pub use toast::Toast;
