//! Side-by-side ring charts comparing the earliest and latest survey years.

use std::f64::consts::TAU;

use dioxus::prelude::*;

use crate::core::format;

const SIZE: f64 = 200.0;
const OUTER_R: f64 = 80.0;
// Ring hole at 60% of the outer radius.
const INNER_R: f64 = 48.0;

/// One ring segment; slices render in the order given, starting at 12
/// o'clock and moving clockwise.
#[derive(Debug, Clone, PartialEq)]
pub struct DonutSlice {
    pub label: String,
    /// Share of the ring, 0–100.
    pub share: f64,
    pub color: &'static str,
}

fn point_at(cx: f64, cy: f64, radius: f64, turn: f64) -> (f64, f64) {
    let angle = turn * TAU - TAU / 4.0;
    (cx + radius * angle.cos(), cy + radius * angle.sin())
}

/// SVG path for an annular sector from `start` to `end`, both in turns.
pub fn arc_path(cx: f64, cy: f64, outer_r: f64, inner_r: f64, start: f64, end: f64) -> String {
    let sweep = end - start;
    if sweep >= 1.0 - 1e-6 {
        // Full ring: two half arcs per radius, or the path collapses.
        let (ox0, oy0) = point_at(cx, cy, outer_r, 0.0);
        let (ox1, oy1) = point_at(cx, cy, outer_r, 0.5);
        let (ix0, iy0) = point_at(cx, cy, inner_r, 0.0);
        let (ix1, iy1) = point_at(cx, cy, inner_r, 0.5);
        return format!(
            "M{ox0:.2},{oy0:.2} A{outer_r},{outer_r} 0 1 1 {ox1:.2},{oy1:.2} \
             A{outer_r},{outer_r} 0 1 1 {ox0:.2},{oy0:.2} \
             M{ix0:.2},{iy0:.2} A{inner_r},{inner_r} 0 1 0 {ix1:.2},{iy1:.2} \
             A{inner_r},{inner_r} 0 1 0 {ix0:.2},{iy0:.2} Z"
        );
    }

    let large_arc = if sweep > 0.5 { 1 } else { 0 };
    let (ox0, oy0) = point_at(cx, cy, outer_r, start);
    let (ox1, oy1) = point_at(cx, cy, outer_r, end);
    let (ix0, iy0) = point_at(cx, cy, inner_r, end);
    let (ix1, iy1) = point_at(cx, cy, inner_r, start);
    format!(
        "M{ox0:.2},{oy0:.2} A{outer_r},{outer_r} 0 {large_arc} 1 {ox1:.2},{oy1:.2} \
         L{ix0:.2},{iy0:.2} A{inner_r},{inner_r} 0 {large_arc} 0 {ix1:.2},{iy1:.2} Z"
    )
}

#[component]
pub fn DonutPair(
    title: String,
    left_caption: String,
    right_caption: String,
    left: Vec<DonutSlice>,
    right: Vec<DonutSlice>,
) -> Element {
    rsx! {
        figure { class: "chart-card chart-card--donut",
            h3 { class: "chart-card__title", "{title}" }
            div { class: "donut-pair",
                Donut { caption: left_caption, slices: left }
                Donut { caption: right_caption, slices: right }
            }
        }
    }
}

#[component]
fn Donut(caption: String, slices: Vec<DonutSlice>) -> Element {
    let center = SIZE / 2.0;
    let mut turn = 0.0;
    let arcs: Vec<(DonutSlice, String)> = slices
        .into_iter()
        .map(|slice| {
            let start = turn;
            turn += slice.share / 100.0;
            let path = arc_path(center, center, OUTER_R, INNER_R, start, turn.min(1.0));
            (slice, path)
        })
        .collect();

    rsx! {
        div { class: "donut-pair__ring",
            span { class: "donut-pair__caption", "{caption}" }
            svg {
                view_box: "0 0 {SIZE} {SIZE}",
                role: "img",
                "aria-label": "{caption}",
                for (slice, path) in arcs.iter() {
                    path {
                        d: "{path}",
                        fill: slice.color,
                        fill_rule: "evenodd",
                        title { "{slice.label} — {format::format_percent(slice.share)}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quarter_slice_ends_at_three_oclock() {
        let (x, y) = point_at(100.0, 100.0, 80.0, 0.25);
        assert!((x - 180.0).abs() < 1e-9);
        assert!((y - 100.0).abs() < 1e-9);
    }

    #[test]
    fn slice_path_is_a_closed_annular_sector() {
        let path = arc_path(100.0, 100.0, 80.0, 48.0, 0.0, 0.25);
        assert!(path.starts_with("M100.00,20.00"));
        assert_eq!(path.matches('A').count(), 2);
        assert!(path.ends_with('Z'));
    }

    #[test]
    fn majority_slice_uses_the_large_arc_flag() {
        let path = arc_path(100.0, 100.0, 80.0, 48.0, 0.0, 0.75);
        assert!(path.contains(" 0 1 1 "));
    }

    #[test]
    fn full_ring_renders_as_two_half_arcs() {
        let path = arc_path(100.0, 100.0, 80.0, 48.0, 0.0, 1.0);
        assert_eq!(path.matches('A').count(), 4);
        assert_eq!(path.matches('M').count(), 2);
    }
}
