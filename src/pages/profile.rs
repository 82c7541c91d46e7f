//! Profile Panel
//!
//! Static account card. Placeholder values until accounts exist.

use leptos::*;

/// Profile panel component
#[component]
pub fn Profile() -> impl IntoView {
    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Profile"</h1>
                <p class="text-gray-400 mt-1">"Your account details"</p>
            </div>

            <section class="bg-gray-800 rounded-xl p-6 max-w-lg">
                <div class="flex items-center space-x-4 mb-6">
                    <img
                        src="https://upload.wikimedia.org/wikipedia/commons/7/7c/Profile_avatar_placeholder_large.png"
                        alt="Profile picture"
                        class="w-20 h-20 rounded-full object-cover"
                    />
                    <div>
                        <p class="text-xl font-semibold">"Alex Hunter"</p>
                        <p class="text-gray-400 text-sm">"@trophyhunter"</p>
                    </div>
                </div>

                <div class="space-y-3">
                    <ProfileRow label="Email" value="alex.hunter@example.com" />
                    <ProfileRow label="First name" value="Alex" />
                    <ProfileRow label="Last name" value="Hunter" />
                </div>
            </section>
        </div>
    }
}

#[component]
fn ProfileRow(
    label: &'static str,
    value: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex items-center justify-between py-2 border-b border-gray-700 last:border-0">
            <span class="text-sm text-gray-400">{label}</span>
            <span class="text-sm">{value}</span>
        </div>
    }
}
