//! User Area Shell
//!
//! Wraps the five user panels with the secondary navigation. The matched
//! panel renders into the outlet.

use leptos::*;
use leptos_router::Outlet;

use crate::components::UserNav;

/// User-area shell component
#[component]
pub fn UserArea() -> impl IntoView {
    view! {
        <div class="space-y-6">
            <UserNav />

            <div class="pt-2">
                <Outlet />
            </div>
        </div>
    }
}
