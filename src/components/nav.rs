//! Navigation Components
//!
//! Site header for the public pages and the secondary navigation bar shown
//! inside the user area.

use leptos::*;
use leptos_router::*;

/// Site header with logo and links
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <A href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"🏆"</span>
                        <span class="text-xl font-bold text-white">"Questlog"</span>
                    </A>

                    // Navigation links
                    <div class="flex items-center space-x-1">
                        <NavLink href="/" label="Home" />
                        <NavLink href="/user" label="My Games" />
                        <NavLink href="/login" label="Log in" />
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Secondary navigation for the user-area panels
#[component]
pub fn UserNav() -> impl IntoView {
    view! {
        <nav class="bg-gray-800 rounded-xl px-4 py-2">
            <div class="flex items-center space-x-1 overflow-x-auto">
                <UserNavLink href="/user" label="Home" exact=true />
                <UserNavLink href="/user/profile" label="Profile" />
                <UserNavLink href="/user/games" label="Games" />
                <UserNavLink href="/user/stats" label="Stats" />
                <UserNavLink href="/user/completed" label="Completed" />
            </div>
        </nav>
    }
}

/// Individual header link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            active_class="bg-gray-700 text-white"
        >
            {label}
        </A>
    }
}

/// Individual user-area link
#[component]
fn UserNavLink(
    href: &'static str,
    label: &'static str,
    #[prop(default = false)]
    exact: bool,
) -> impl IntoView {
    view! {
        <A
            href=href
            exact=exact
            class="px-4 py-2 rounded-lg text-sm font-medium text-gray-300 hover:text-white
                   hover:bg-gray-700 transition-colors whitespace-nowrap"
            active_class="bg-primary-600 text-white"
        >
            {label}
        </A>
    }
}
