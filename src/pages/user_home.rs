//! User Home Panel
//!
//! Index panel of the user area.

use leptos::*;
use leptos_router::*;

/// User home panel component
#[component]
pub fn UserHome() -> impl IntoView {
    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Welcome back"</h1>
                <p class="text-gray-400 mt-1">"Pick up the hunt where you left off"</p>
            </div>

            <div class="grid md:grid-cols-2 gap-6">
                <PanelCard
                    href="/user/games"
                    icon="🎮"
                    title="Tracked games"
                    text="Your library with per-game achievement progress."
                />
                <PanelCard
                    href="/user/stats"
                    icon="📊"
                    title="Statistics"
                    text="Completion percentage across everything you track."
                />
                <PanelCard
                    href="/user/completed"
                    icon="🏅"
                    title="Completed"
                    text="Games with every achievement unlocked."
                />
                <PanelCard
                    href="/user/profile"
                    icon="👤"
                    title="Profile"
                    text="Your account details."
                />
            </div>
        </div>
    }
}

#[component]
fn PanelCard(
    href: &'static str,
    icon: &'static str,
    title: &'static str,
    text: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="block bg-gray-800 rounded-xl p-6 hover:bg-gray-700 transition-colors
                   border border-gray-700 hover:border-gray-600"
        >
            <div class="text-3xl mb-3">{icon}</div>
            <h3 class="font-semibold text-white mb-2">{title}</h3>
            <p class="text-sm text-gray-400">{text}</p>
        </A>
    }
}
