//! Landing Page
//!
//! Marketing view shown at the root route.

use leptos::*;
use leptos_router::*;

/// Landing page component
#[component]
pub fn Landing() -> impl IntoView {
    view! {
        <div class="space-y-12">
            // Hero
            <section class="text-center py-16">
                <h1 class="text-5xl font-bold mb-4">"Track every achievement"</h1>
                <p class="text-gray-400 text-lg max-w-2xl mx-auto mb-8">
                    "Questlog keeps your trophy hunt in one place: progress bars for every "
                    "game you play and a completion chart to show how far you've come."
                </p>
                <div class="flex items-center justify-center space-x-4">
                    <A
                        href="/login"
                        class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg
                               font-medium transition-colors"
                    >
                        "Get started"
                    </A>
                    <A
                        href="/user"
                        class="px-6 py-3 bg-gray-700 hover:bg-gray-600 rounded-lg
                               font-medium transition-colors"
                    >
                        "View your games"
                    </A>
                </div>
            </section>

            // Feature cards
            <section class="grid md:grid-cols-3 gap-6">
                <FeatureCard
                    icon="🎮"
                    title="Your library"
                    text="Every game you track, with cover art and achievement counts."
                />
                <FeatureCard
                    icon="📊"
                    title="Progress at a glance"
                    text="Color-coded progress bars from first trophy to full completion."
                />
                <FeatureCard
                    icon="🏅"
                    title="Hall of fame"
                    text="A dedicated shelf for the games you've finished for good."
                />
            </section>
        </div>
    }
}

#[component]
fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    text: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl p-6">
            <div class="text-3xl mb-3">{icon}</div>
            <h3 class="font-semibold text-white mb-2">{title}</h3>
            <p class="text-sm text-gray-400">{text}</p>
        </div>
    }
}
