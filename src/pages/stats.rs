//! Statistics Panel
//!
//! Completion charts for the user's library.

use leptos::*;

use crate::components::chart::{CompletionChart, Slice};

const DONE_COLOR: &str = "rgb(54, 162, 235)";
const REMAINING_COLOR: &str = "rgb(255, 99, 132)";

/// Share of the library considered complete. Static in this revision.
fn completion_slices() -> Vec<Slice> {
    vec![
        Slice {
            label: "Completed",
            value: 90.0,
            color: DONE_COLOR,
        },
        Slice {
            label: "Not Completed",
            value: 10.0,
            color: REMAINING_COLOR,
        },
    ]
}

/// Achievements earned vs. still locked across all tracked games.
fn achievement_slices() -> Vec<Slice> {
    vec![
        Slice {
            label: "Earned",
            value: 390.0,
            color: DONE_COLOR,
        },
        Slice {
            label: "Locked",
            value: 160.0,
            color: REMAINING_COLOR,
        },
    ]
}

/// Statistics panel component
#[component]
pub fn Stats() -> impl IntoView {
    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Statistics"</h1>
                <p class="text-gray-400 mt-1">"How the hunt is going"</p>
            </div>

            <div class="grid md:grid-cols-2 gap-8">
                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Game completion percentage"</h2>
                    <CompletionChart slices=completion_slices() />
                </section>

                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Achievements earned"</h2>
                    <CompletionChart slices=achievement_slices() />
                </section>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_slices_sum_to_hundred() {
        let total: f64 = completion_slices().iter().map(|s| s.value).sum();
        assert_eq!(total, 100.0);
    }

    #[test]
    fn test_achievement_slices_are_positive() {
        for slice in achievement_slices() {
            assert!(slice.value > 0.0);
        }
    }
}
