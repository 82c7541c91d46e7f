//! Completion Chart Component
//!
//! Doughnut chart using HTML5 Canvas.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// A labelled doughnut slice
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Slice {
    pub label: &'static str,
    pub value: f64,
    pub color: &'static str,
}

/// Doughnut chart with an HTML legend beside the canvas
#[component]
pub fn CompletionChart(slices: Vec<Slice>) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw whenever the canvas mounts
    let slices_for_draw = slices.clone();
    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            draw_doughnut(&canvas, &slices_for_draw);
        }
    });

    view! {
        <div class="flex items-center justify-center space-x-8">
            <canvas
                node_ref=canvas_ref
                width="400"
                height="400"
                class="w-56 h-56"
            />

            // Legend
            <ChartLegend slices=slices />
        </div>
    }
}

/// Legend showing slice colors and shares
#[component]
fn ChartLegend(slices: Vec<Slice>) -> impl IntoView {
    let total: f64 = slices.iter().map(|s| s.value.max(0.0)).sum();

    view! {
        <div class="space-y-2">
            {slices
                .into_iter()
                .map(|slice| {
                    let share = if total > 0.0 {
                        slice.value.max(0.0) / total * 100.0
                    } else {
                        0.0
                    };
                    view! {
                        <div class="flex items-center space-x-2">
                            <div
                                class="w-3 h-3 rounded-full"
                                style=format!("background-color: {}", slice.color)
                            />
                            <span class="text-sm text-gray-300">{slice.label}</span>
                            <span class="text-sm text-gray-500">{format!("{:.0}%", share)}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Start/end angle of each slice, proportional to value, clockwise from the top
pub fn slice_angles(values: &[f64]) -> Vec<(f64, f64)> {
    const TOP: f64 = -std::f64::consts::FRAC_PI_2;

    let total: f64 = values.iter().map(|v| v.max(0.0)).sum();
    if total <= 0.0 {
        // Nothing to draw, every slice collapses to a zero sweep
        return values.iter().map(|_| (TOP, TOP)).collect();
    }

    let mut start = TOP;
    values
        .iter()
        .map(|v| {
            let sweep = v.max(0.0) / total * std::f64::consts::TAU;
            let range = (start, start + sweep);
            start += sweep;
            range
        })
        .collect()
}

/// Draw the doughnut on canvas
fn draw_doughnut(canvas: &HtmlCanvasElement, slices: &[Slice]) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    ctx.clear_rect(0.0, 0.0, width, height);

    let cx = width / 2.0;
    let cy = height / 2.0;
    let outer = width.min(height) / 2.0 - 10.0;
    let inner = outer * 0.55;

    let values: Vec<f64> = slices.iter().map(|s| s.value).collect();
    let angles = slice_angles(&values);

    for (slice, (start, end)) in slices.iter().zip(angles) {
        if end <= start {
            continue;
        }

        ctx.set_fill_style(&slice.color.into());
        ctx.begin_path();
        let _ = ctx.arc(cx, cy, outer, start, end);
        let _ = ctx.arc_with_anticlockwise(cx, cy, inner, end, start, true);
        ctx.close_path();
        ctx.fill();
    }

    // Draw "No data" message if every slice is empty
    if values.iter().all(|v| *v <= 0.0) {
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No data", cx - 30.0, cy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOP: f64 = -std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_slice_angles_cover_full_circle() {
        let angles = slice_angles(&[90.0, 10.0]);
        assert_eq!(angles.len(), 2);
        assert!((angles[0].0 - TOP).abs() < 1e-9);
        assert!((angles[1].1 - (TOP + std::f64::consts::TAU)).abs() < 1e-9);
        // Contiguous
        assert!((angles[0].1 - angles[1].0).abs() < 1e-9);
    }

    #[test]
    fn test_slice_angles_proportional() {
        let angles = slice_angles(&[3.0, 1.0]);
        let first = angles[0].1 - angles[0].0;
        let second = angles[1].1 - angles[1].0;
        assert!((first - 3.0 * second).abs() < 1e-9);
    }

    #[test]
    fn test_slice_angles_zero_total() {
        let angles = slice_angles(&[0.0, 0.0]);
        for (start, end) in angles {
            assert_eq!(start, end);
        }
    }

    #[test]
    fn test_slice_angles_negative_clamped() {
        let angles = slice_angles(&[-5.0, 10.0]);
        assert_eq!(angles[0].0, angles[0].1);
        assert!((angles[1].1 - angles[1].0 - std::f64::consts::TAU).abs() < 1e-9);
    }
}
