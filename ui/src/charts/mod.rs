//! SVG chart components for the report.
//!
//! Each chart is a `#[component]` over plain layout helpers, so the geometry
//! can be unit-tested without rendering. Charts never touch a dataset
//! directly: sections aggregate first and hand in display-ready values.
//! Hover detail rides on SVG `<title>` elements.

mod stacked_bar;
pub use stacked_bar::{stacked_spans, BarSegment, StackedBar, StackedBarChart};

mod bubble;
pub use bubble::{bubble_radius, BubbleGrid, BubbleRow};

mod donut;
pub use donut::{arc_path, DonutPair, DonutSlice};

mod ranked_bar;
pub use ranked_bar::{RankSegment, RankedBar, RankedBarChart};

mod usage;
pub use usage::{UsageProficiencyChart, UsageRow};

mod choropleth;
pub use choropleth::ReachMap;

/// Tick positions for a 0–100 percent axis.
pub(crate) fn percent_ticks(step: u32) -> Vec<u32> {
    (0..=100).step_by(step as usize).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_ticks_cover_the_axis() {
        assert_eq!(percent_ticks(25), vec![0, 25, 50, 75, 100]);
        assert_eq!(percent_ticks(20).len(), 6);
    }
}
