//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::{Nav, Toast};
use crate::pages::{Completed, Games, Landing, Login, Profile, Stats, UserArea, UserHome};
use crate::state::global::provide_app_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide shared state to all components
    provide_app_state();

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                // Site header
                <Nav />

                // Main content area
                <main class="flex-1 container mx-auto px-4 py-8">
                    <Routes>
                        <Route path="/" view=Landing />
                        <Route path="/login" view=Login />
                        <Route path="/user" view=UserArea>
                            <Route path="" view=UserHome />
                            <Route path="profile" view=Profile />
                            <Route path="games" view=Games />
                            <Route path="stats" view=Stats />
                            <Route path="completed" view=Completed />
                        </Route>
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🏆"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Back to Questlog"
            </A>
        </div>
    }
}
