//! Fixed color palettes for the report charts.
//!
//! Every chart picks from these tables; nothing is derived from the data
//! beyond pairing ordinal rank labels with a ramp in [`RankPalette`].

use super::year::SurveyYear;

/// Fill for map regions that never appeared in the survey.
pub const NEUTRAL_REGION: &str = "#D3D3D3";

/// Fallback for rank labels beyond the ramp.
pub const RANK_FALLBACK: &str = "#BFBFBF";

/// Gender chart fills, matching the canonical `[Female, Male]` order.
pub const GENDER: [&str; 2] = ["#DD7E3B", "#0E87BE"];

/// Bubble fills per survey year for the organization grid.
pub const ORG_BUBBLE: [&str; 3] = ["#DD7E3B", "#EC7825", "#D22A00"];

/// Bubble fills per survey year for the primary-role grid.
pub const ROLE_BUBBLE: [&str; 3] = ["#4CAF50", "#008000", "#006400"];

/// Usage donut fills, `[using, not using]`.
pub const USAGE_SPLIT: [&str; 2] = ["#0C4E6F", "#13C2FF"];

/// Proficiency donut fills, `[highly proficient, average or low]`.
pub const PROFICIENCY_SPLIT: [&str; 2] = ["#BD6A31", "#FF9845"];

/// Bar fill for the usage-and-proficiency chart.
pub const USAGE_BAR: &str = "#0E87BE";

/// Marker/line color for the mean-proficiency overlay.
pub const PROFICIENCY_MARKER: &str = "#3B3838";

/// Red ramp for the constraint charts, most significant rank first.
pub const CONSTRAINT_RANKS: [&str; 5] = ["#9F2A00", "#D32A00", "#F42A00", "#D9D9D9", "#F2F2F2"];

/// Blue-green ramp for the sector-challenge chart, sampled dark-to-light.
pub const CHALLENGE_RANKS: [&str; 5] = ["#084081", "#2B8CBE", "#7BCCC4", "#CCEBC5", "#F7FCF0"];

/// Map fill for the first year a region appeared in the survey.
pub const fn year_color(year: SurveyYear) -> &'static str {
    match year {
        SurveyYear::Y2020 => "#68BDE4",
        SurveyYear::Y2021 => "#0E87BE",
        SurveyYear::Y2022 => "#04425F",
    }
}

/// Pairs ordinal rank labels with a fixed ramp, in the order the labels
/// first appear in the dataset. Labels beyond the ramp get [`RANK_FALLBACK`].
#[derive(Debug, Clone, PartialEq)]
pub struct RankPalette {
    entries: Vec<(String, &'static str)>,
}

impl RankPalette {
    pub fn new<I, S>(ranks: I, ramp: &'static [&'static str]) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries = ranks
            .into_iter()
            .enumerate()
            .map(|(idx, rank)| {
                let color = ramp.get(idx).copied().unwrap_or(RANK_FALLBACK);
                (rank.into(), color)
            })
            .collect();
        Self { entries }
    }

    pub fn color_for(&self, rank: &str) -> &'static str {
        self.entries
            .iter()
            .find(|(label, _)| label == rank)
            .map(|(_, color)| *color)
            .unwrap_or(RANK_FALLBACK)
    }

    /// Rank/color pairs in ramp order, for chart legends.
    pub fn legend(&self) -> impl Iterator<Item = (&str, &'static str)> {
        self.entries.iter().map(|(label, color)| (label.as_str(), *color))
    }
}

/// Distinct rank labels in order of first appearance.
pub fn distinct_ranks<'a, I>(labels: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = Vec::new();
    for label in labels {
        if !seen.iter().any(|s: &String| s == label) {
            seen.push(label.to_string());
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_two_maps_to_second_ramp_color() {
        let palette = RankPalette::new(["1", "2", "3"], &CONSTRAINT_RANKS);
        assert_eq!(palette.color_for("2"), "#D32A00");
        assert_eq!(palette.color_for("1"), "#9F2A00");
        assert_eq!(palette.color_for("3"), "#F42A00");
    }

    #[test]
    fn unknown_rank_falls_back_to_neutral() {
        let palette = RankPalette::new(["1", "2"], &CONSTRAINT_RANKS);
        assert_eq!(palette.color_for("9"), RANK_FALLBACK);
    }

    #[test]
    fn ranks_beyond_the_ramp_are_neutral() {
        let labels: Vec<String> = (1..=7).map(|n| n.to_string()).collect();
        let palette = RankPalette::new(labels, &CONSTRAINT_RANKS);
        assert_eq!(palette.color_for("5"), "#F2F2F2");
        assert_eq!(palette.color_for("6"), RANK_FALLBACK);
    }

    #[test]
    fn distinct_ranks_keeps_first_appearance_order() {
        let ranks = distinct_ranks(["2", "1", "2", "3", "1"]);
        assert_eq!(ranks, vec!["2", "1", "3"]);
    }

    #[test]
    fn legend_follows_ramp_order() {
        let palette = RankPalette::new(["1", "2", "3"], &CHALLENGE_RANKS);
        let legend: Vec<_> = palette.legend().collect();
        assert_eq!(legend[0], ("1", "#084081"));
        assert_eq!(legend[2], ("3", "#7BCCC4"));
    }
}
