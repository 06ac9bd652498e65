//! Challenges and constraints: three ranked-bar blocks with year selectors.

use dioxus::prelude::*;

use std::sync::Arc;

use crate::charts::{RankSegment, RankedBar, RankedBarChart};
use crate::components::YearRadio;
use crate::core::data::{DataError, DataStore, RankedShareRow};
use crate::core::palette::{self, distinct_ranks, RankPalette};
use crate::core::year::SurveyYear;

use super::data_error_card;

#[component]
pub fn ConstraintsSection() -> Element {
    rsx! {
        section { class: "report-section report-section--constraints",
            h2 { "Constraints: what's preventing progress?" }
            p { class: "report-lede",
                "Small shifts were noted from year to year, but overall, "
                "conservation technologists reported fairly consistent challenges "
                "and constraints over the last three years."
            }

            ChallengesBlock {}
            UserConstraintsBlock {}
            DeveloperConstraintsBlock {}

            hr { class: "report-divider" }
        }
    }
}

#[component]
fn ChallengesBlock() -> Element {
    let store = use_context::<DataStore>();
    let challenges = store.challenges();
    let year = use_signal(SurveyYear::earliest);
    let selected = year();

    let narrative = match selected {
        SurveyYear::Y2020 => {
            "In 2020, competition for limited funding, duplication of efforts, and \
             adoption capacity were the most significant challenges."
        }
        SurveyYear::Y2021 => {
            "The 2021 survey introduced 'matching tech expertise with conservation \
             needs' based on earlier open-ended responses, and it immediately \
             became the second highest ranked challenge. Competition for limited \
             funding and duplication of efforts remained the other top two."
        }
        SurveyYear::Y2022 => {
            "The 2022 landscape is very similar to 2021; the only notable change \
             is that scaling sustainably shifted up above technology hype."
        }
    };

    rsx! {
        h3 { "Sector-wide challenges" }
        p {
            "Across the sector as a whole, competition for limited funding and "
            "duplication of efforts remained the primary challenges respondents "
            "reported in every wave. Explore how the ranks shifted by clicking "
            "through the three years:"
        }
        YearRadio { group: "challenges-year", selected: year }
        p { class: "report-note", "{narrative}" }
        {ranked_chart(
            &challenges,
            "sector challenge",
            format!("Sector-wide challenges for {selected}"),
            selected,
            &palette::CHALLENGE_RANKS,
        )}
    }
}

#[component]
fn UserConstraintsBlock() -> Element {
    let store = use_context::<DataStore>();
    let constraints = store.user_constraints();
    let year = use_signal(SurveyYear::earliest);
    let selected = year();

    let narrative = match selected {
        SurveyYear::Y2020 => {
            "In 2020, upfront costs, technical skills, and the time required to \
             engage were the most significant constraints on end-users."
        }
        SurveyYear::Y2021 => {
            "In 2021, upfront costs still led, but maintenance costs moved from \
             fourth place to second. The newly introduced category of local access \
             to technology suppliers entered third."
        }
        SurveyYear::Y2022 => {
            "In 2022, upfront costs still led, with local access to suppliers \
             shifting up to second and the time required to engage moving from \
             fifth to third."
        }
    };

    rsx! {
        h3 { "User constraints" }
        p {
            "Looking at constraints on conservation-tech end-users, a key finding "
            "reiterated from the 2021 report is that location matters: users in "
            "countries with developing economies were far more likely to report "
            "multiple significant constraints — 5× as likely for local access to "
            "technology suppliers, 2.5× for upfront costs and for access to "
            "training, advice, and mentoring, and 1.5× for maintenance costs."
        }
        p {
            "Year over year, upfront costs were the top constraint every time, "
            "while maintenance costs and time required grew more significant and "
            "building technical skills became less so."
        }
        p { class: "report-caption", "Note: likelihood figures are rounded." }
        YearRadio { group: "user-constraints-year", selected: year }
        p { class: "report-note", "{narrative}" }
        {ranked_chart(
            &constraints,
            "user constraint",
            format!("User constraints for {selected}"),
            selected,
            &palette::CONSTRAINT_RANKS,
        )}
    }
}

#[component]
fn DeveloperConstraintsBlock() -> Element {
    let store = use_context::<DataStore>();
    let constraints = store.developer_constraints();
    let year = use_signal(SurveyYear::earliest);
    let selected = year();

    let narrative = match selected {
        SurveyYear::Y2020 => {
            "In 2020, securing continued funding throughout the development cycle \
             and securing seed funding were similarly significant constraints, \
             followed by understanding the conservation tool landscape — who is \
             doing what, and where the gaps are."
        }
        SurveyYear::Y2021 => {
            "In 2021, the top two constraints held, while overcoming engineering \
             challenges moved above understanding the tool landscape. A supply \
             chain category was added this year, reflecting sourcing pressures at \
             the time."
        }
        SurveyYear::Y2022 => {
            "In 2022, the top three were stable: seed funding, continued funding, \
             and overcoming engineering challenges. The noteworthy shift is that \
             understanding the tool landscape moved down significantly."
        }
    };

    rsx! {
        h3 { "Developer constraints" }
        p {
            "Developers in countries with developing economies were likewise more "
            "likely to report significant constraints: 3.5× as likely for sourcing "
            "supplies and accessing testing sites, and 2.5× for securing seed "
            "funding."
        }
        p {
            "Female-identifying developers also reported disproportionate "
            "constraints — 3.5× as likely as male developers to cite access to "
            "testing sites, 2.5× for funding across the development cycle and for "
            "access to relevant data, and 2× for overcoming user concerns about "
            "data security and privacy."
        }
        p { class: "report-caption", "Note: likelihood figures are rounded." }
        YearRadio { group: "developer-constraints-year", selected: year }
        p { class: "report-note", "{narrative}" }
        {ranked_chart(
            &constraints,
            "developer constraint",
            format!("Developer constraints for {selected}"),
            selected,
            &palette::CONSTRAINT_RANKS,
        )}
    }
}

fn ranked_chart(
    data: &Result<Arc<Vec<RankedShareRow>>, DataError>,
    context: &str,
    title: String,
    year: SurveyYear,
    ramp: &'static [&'static str],
) -> Element {
    match data {
        Ok(rows) => {
            let (bars, legend) = ranked_bars(rows, year, ramp);
            rsx! {
                RankedBarChart { title, legend, bars }
            }
        }
        Err(err) => data_error_card(context, err),
    }
}

/// Bars for one year in the table's row order, with rank colors assigned
/// from the whole table so legends stay stable across the year selector.
fn ranked_bars(
    rows: &[RankedShareRow],
    year: SurveyYear,
    ramp: &'static [&'static str],
) -> (Vec<RankedBar>, Vec<(String, &'static str)>) {
    let palette = RankPalette::new(
        distinct_ranks(rows.iter().map(|row| row.ranking.as_str())),
        ramp,
    );

    let mut bars: Vec<RankedBar> = Vec::new();
    for row in rows.iter().filter(|row| row.year == year.as_calendar()) {
        let segment = RankSegment {
            rank: row.ranking.clone(),
            percentage: row.percentage,
            color: palette.color_for(&row.ranking),
        };
        match bars.iter_mut().find(|bar| bar.item == row.item) {
            Some(bar) => bar.segments.push(segment),
            None => bars.push(RankedBar {
                item: row.item.clone(),
                segments: vec![segment],
            }),
        }
    }

    let legend = palette
        .legend()
        .map(|(label, color)| (label.to_string(), color))
        .collect();
    (bars, legend)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn share(year: u16, item: &str, ranking: &str, percentage: f64) -> RankedShareRow {
        RankedShareRow {
            year,
            item: item.to_string(),
            ranking: ranking.to_string(),
            percentage,
        }
    }

    #[test]
    fn bars_follow_row_order_within_the_selected_year() {
        let rows = vec![
            share(2020, "Funding", "1", 40.0),
            share(2020, "Funding", "2", 60.0),
            share(2020, "Duplication", "1", 25.0),
            share(2021, "Duplication", "1", 30.0),
        ];
        let (bars, legend) = ranked_bars(&rows, SurveyYear::Y2020, &palette::CONSTRAINT_RANKS);

        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].item, "Funding");
        assert_eq!(bars[0].segments.len(), 2);
        assert_eq!(bars[1].item, "Duplication");
        assert_eq!(legend.len(), 2);
        assert_eq!(legend[0], ("1".to_string(), "#9F2A00"));
    }

    #[test]
    fn switching_years_reuses_the_same_rank_colors() {
        let rows = vec![
            share(2020, "Funding", "1", 100.0),
            share(2021, "Funding", "1", 100.0),
        ];
        let (bars_2020, _) = ranked_bars(&rows, SurveyYear::Y2020, &palette::CONSTRAINT_RANKS);
        let (bars_2021, _) = ranked_bars(&rows, SurveyYear::Y2021, &palette::CONSTRAINT_RANKS);
        assert_eq!(
            bars_2020[0].segments[0].color,
            bars_2021[0].segments[0].color
        );
    }

    #[test]
    fn other_years_do_not_leak_into_the_selection() {
        let rows = vec![
            share(2020, "Funding", "1", 100.0),
            share(2022, "Hype", "1", 100.0),
        ];
        let (bars, _) = ranked_bars(&rows, SurveyYear::Y2022, &palette::CONSTRAINT_RANKS);
        assert_eq!(bars.len(), 1);
        assert_eq!(bars[0].item, "Hype");
    }
}
