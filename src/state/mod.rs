//! State Management
//!
//! Shared application state, form models, and library record types.

pub mod forms;
pub mod global;
pub mod library;

pub use forms::{LoginForm, SignupForm, SignupPayload};
pub use global::{provide_app_state, AppState};
pub use library::{CompletedGame, TrackedGame};
