//! Completed Games Panel
//!
//! Shelf of games with every achievement unlocked.

use leptos::*;

use crate::state::library::CompletedGame;

/// Games finished for good. Static in this revision.
fn completed_games() -> Vec<CompletedGame> {
    vec![
        CompletedGame {
            title: "Hollow Knight",
            image_url: "https://upload.wikimedia.org/wikipedia/en/0/04/Hollow_Knight_first_cover_art.webp",
            achievements_total: 63,
        },
        CompletedGame {
            title: "Portal 2",
            image_url: "https://upload.wikimedia.org/wikipedia/en/f/f9/Portal2cover.jpg",
            achievements_total: 51,
        },
        CompletedGame {
            title: "Ori and the Blind Forest",
            image_url: "https://upload.wikimedia.org/wikipedia/en/3/3e/Ori_and_the_Blind_Forest_Logo.jpg",
            achievements_total: 57,
        },
    ]
}

/// Completed games panel component
#[component]
pub fn Completed() -> impl IntoView {
    let games = completed_games();

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"Completed games"</h1>
                <p class="text-gray-400 mt-1">"Every achievement, unlocked"</p>
            </div>

            {if games.is_empty() {
                view! {
                    <p class="text-gray-400">"Nothing here yet. Keep hunting!"</p>
                }
                .into_view()
            } else {
                view! {
                    <div class="grid md:grid-cols-3 gap-6">
                        {games
                            .into_iter()
                            .map(|game| view! { <CompletedCard game=game /> })
                            .collect_view()}
                    </div>
                }
                .into_view()
            }}
        </div>
    }
}

/// One finished game with a completion badge
#[component]
fn CompletedCard(game: CompletedGame) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl overflow-hidden">
            <img
                src=game.image_url
                alt=game.title
                class="w-full h-48 object-cover"
            />
            <div class="p-4 space-y-2">
                <div class="flex items-center justify-between">
                    <p class="font-semibold">{game.title}</p>
                    <span class="text-lg">"🏅"</span>
                </div>
                <p class="text-sm text-gray-400">
                    {format!("All {} achievements unlocked", game.achievements_total)}
                </p>
                <span class="inline-block text-xs font-semibold bg-green-600 text-white
                             rounded-full px-2 py-1">
                    "100%"
                </span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completed_shelf_is_well_formed() {
        for game in completed_games() {
            assert!(game.achievements_total > 0);
            assert!(!game.title.is_empty());
        }
    }
}
