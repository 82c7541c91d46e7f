//! Games Panel
//!
//! The tracked-games list with a progress bar per game.

use leptos::*;

use crate::components::ProgressBar;
use crate::state::library::TrackedGame;

/// The library shown on this panel. Static in this revision, re-declared on
/// every render and never mutated.
fn tracked_games() -> Vec<TrackedGame> {
    vec![
        TrackedGame {
            id: 1,
            title: "Dark Souls 3",
            image_url: "https://m.media-amazon.com/images/M/MV5BYzJhYTgzYzYtYjdjOC00ZDYyLTg0NjYtZDEwMDlkODA3OWI4XkEyXkFqcGdeQXVyMTk2OTAzNTI@._V1_.jpg",
            achievements_done: 70,
            achievements_total: 80,
        },
        TrackedGame {
            id: 2,
            title: "Bloodborne",
            image_url: "https://upload.wikimedia.org/wikipedia/en/6/68/Bloodborne_Cover_Wallpaper.jpg",
            achievements_done: 50,
            achievements_total: 60,
        },
        TrackedGame {
            id: 3,
            title: "Sekiro",
            image_url: "https://image.api.playstation.com/vulcan/img/rnd/202010/2723/knxU5uU5aKvQChKX5OvWtSGC.png",
            achievements_done: 30,
            achievements_total: 40,
        },
        TrackedGame {
            id: 4,
            title: "The Witcher 3",
            image_url: "https://upload.wikimedia.org/wikipedia/en/thumb/0/0c/Witcher_3_cover_art.jpg/220px-Witcher_3_cover_art.jpg",
            achievements_done: 20,
            achievements_total: 50,
        },
        TrackedGame {
            id: 5,
            title: "Hades",
            image_url: "https://upload.wikimedia.org/wikipedia/en/thumb/c/cc/Hades_cover_art.jpg/220px-Hades_cover_art.jpg",
            achievements_done: 80,
            achievements_total: 100,
        },
        TrackedGame {
            id: 6,
            title: "Celeste",
            image_url: "https://upload.wikimedia.org/wikipedia/commons/0/0f/Celeste_box_art_full.png",
            achievements_done: 90,
            achievements_total: 120,
        },
        TrackedGame {
            id: 7,
            title: "Stardew Valley",
            image_url: "https://upload.wikimedia.org/wikipedia/en/f/fd/Logo_of_Stardew_Valley.png",
            achievements_done: 40,
            achievements_total: 70,
        },
        TrackedGame {
            id: 8,
            title: "Minecraft",
            image_url: "https://assets.nintendo.com/image/upload/ar_16:9,c_lpad,w_1240/b_white/f_auto/q_auto/ncom/software/switch/70010000000964/a28a81253e919298beab2295e39a56b7a5140ef15abdb56135655e5c221b2a3a",
            achievements_done: 10,
            achievements_total: 30,
        },
    ]
}

/// Games panel component
#[component]
pub fn Games() -> impl IntoView {
    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"Your tracked games..."</h1>
                <p class="text-gray-400 mt-1">"Achievement progress across your library"</p>
            </div>

            <div class="space-y-4">
                {tracked_games()
                    .into_iter()
                    .map(|game| view! { <GameRow game=game /> })
                    .collect_view()}
            </div>
        </div>
    }
}

/// One tracked game with cover art and progress bar
#[component]
fn GameRow(game: TrackedGame) -> impl IntoView {
    view! {
        <div class="flex items-center space-x-4 bg-gray-800 rounded-xl p-4">
            <img
                src=game.image_url
                alt=game.title
                class="w-20 h-28 object-cover rounded-lg flex-shrink-0"
            />
            <div class="flex-1 space-y-2 min-w-0">
                <p class="font-semibold">{game.title}</p>
                <ProgressBar
                    done=game.achievements_done
                    total=game.achievements_total
                />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_is_well_formed() {
        let games = tracked_games();
        assert_eq!(games.len(), 8);
        for game in &games {
            assert!(game.achievements_done <= game.achievements_total);
            assert!(game.achievements_total > 0);
        }
    }

    #[test]
    fn test_library_ids_are_distinct() {
        let games = tracked_games();
        let mut ids: Vec<u32> = games.iter().map(|g| g.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), games.len());
    }

    #[test]
    fn test_library_is_stable_across_renders() {
        assert_eq!(tracked_games(), tracked_games());
    }
}
