//! Questlog
//!
//! Video-game achievement tracker built with Leptos (WASM).
//!
//! # Features
//!
//! - Login and signup forms
//! - Per-game achievement progress bars
//! - Completion percentage chart
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All data in this revision is local to the page; there is no
//! server behind it.

use leptos::*;

mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
