//! Progress Bar Component
//!
//! Labelled fill bar for a completed/total achievement pair.

use leptos::*;

use crate::state::library::progress_percent;

/// Fill color for a completion percentage, red through dark green
pub fn progress_color(percent: f64) -> &'static str {
    if percent < 10.0 {
        "#f44336" // Very Red
    } else if percent < 20.0 {
        "#e57373" // Light Red
    } else if percent < 30.0 {
        "#ff8a65" // Coral
    } else if percent < 40.0 {
        "#ffb74d" // Light Orange
    } else if percent < 50.0 {
        "#ff9800" // Orange
    } else if percent < 60.0 {
        "#ffeb3b" // Yellow
    } else if percent < 70.0 {
        "#cddc39" // Lime
    } else if percent < 80.0 {
        "#8bc34a" // Light Green
    } else if percent < 90.0 {
        "#4caf50" // Green
    } else if percent < 100.0 {
        "#388e3c" // Dark Green
    } else {
        "#2c6b2f" // Very Dark Green
    }
}

/// Achievement progress bar with an inline "done / total" label
#[component]
pub fn ProgressBar(done: u32, total: u32) -> impl IntoView {
    let percent = progress_percent(done, total);

    view! {
        <div class="w-full bg-gray-700 rounded-full h-6 overflow-hidden">
            <div
                class="h-6 rounded-full flex items-center justify-center min-w-fit px-2"
                style=format!(
                    "width: {:.1}%; background-color: {}",
                    percent,
                    progress_color(percent)
                )
            >
                <span class="text-xs font-semibold text-gray-900">
                    {format!("{} / {}", done, total)}
                </span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_buckets() {
        assert_eq!(progress_color(0.0), "#f44336");
        assert_eq!(progress_color(9.9), "#f44336");
        assert_eq!(progress_color(10.0), "#e57373");
        assert_eq!(progress_color(55.0), "#ffeb3b");
        assert_eq!(progress_color(89.9), "#4caf50");
        assert_eq!(progress_color(99.9), "#388e3c");
    }

    #[test]
    fn test_full_completion_color() {
        assert_eq!(progress_color(100.0), "#2c6b2f");
    }
}
