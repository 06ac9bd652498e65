//! Respondent demographics: gender split plus organization and role grids.

use dioxus::prelude::*;

use crate::charts::{BarSegment, BubbleGrid, BubbleRow, StackedBar, StackedBarChart};
use crate::core::aggregate::{count_matrix, share_table, CategoryList};
use crate::core::data::{DataStore, DemographicRow};
use crate::core::palette;
use crate::core::year::SurveyYear;

use super::data_error_card;

/// Canonical orders for the demographic charts. Answers outside these lists
/// (a handful of non-binary gender responses, free-text organization notes)
/// are dropped from the charts and logged by the aggregator.
const GENDERS: CategoryList = CategoryList::new("gender", &["Female", "Male"]);

const ORGANIZATIONS: CategoryList = CategoryList::new(
    "organization",
    &[
        "Conservation NGO",
        "University/Research Inst.",
        "Tech company",
        "Private (non-tech)",
        "Government agency",
        "Other",
    ],
);

const ROLES: CategoryList = CategoryList::new(
    "primary role",
    &[
        "Conservation practitioner",
        "Academic or researcher",
        "Technologist",
        "Investor or funder",
        "Policymaker",
    ],
);

#[component]
pub fn DemographicsSection() -> Element {
    let store = use_context::<DataStore>();
    let demographics = store.demographics();

    rsx! {
        section { class: "report-section report-section--demographics",
            h3 { "Who did we hear from?" }
            p {
                "We heard from 630 people across three years of surveys — 222 "
                "respondents in 2020, 233 in 2021, and 175 in 2022. Roughly "
                "one-third of respondents identified as female (34%), two-thirds as "
                "male (66%), and a few as third gender or non-binary (<1%)."
            }
            p { class: "report-caption",
                "Note: incomplete answers below a certain threshold were filtered out in each year."
            }

            {match &demographics {
                Ok(rows) => rsx! {
                    StackedBarChart {
                        title: "Gender distribution of respondents across the years",
                        axis_label: "Percentage of respondents",
                        legend_title: "Gender",
                        legend: gender_legend(),
                        bars: gender_bars(rows),
                    }
                },
                Err(err) => data_error_card("demographic", err),
            }}

            p {
                "Across all years, participants most frequently reported working at "
                "conservation NGOs, followed by universities and research "
                "institutes. Most identified their primary role as a conservation "
                "practitioner or a researcher, but a significant share (18%) "
                "identified primarily as technologists. Technology companies were "
                "the next most represented organization type."
            }

            {match &demographics {
                Ok(rows) => rsx! {
                    BubbleGrid {
                        title: "Organization of respondents by year (count)",
                        colors: palette::ORG_BUBBLE,
                        rows: bubble_rows(rows, |row| row.organization.as_deref(), ORGANIZATIONS),
                    }
                    BubbleGrid {
                        title: "Primary role of respondents by year (count)",
                        colors: palette::ROLE_BUBBLE,
                        rows: bubble_rows(rows, |row| row.primary_role.as_deref(), ROLES),
                    }
                },
                Err(err) => data_error_card("demographic", err),
            }}

            hr { class: "report-divider" }
        }
    }
}

fn gender_legend() -> Vec<(String, &'static str)> {
    GENDERS
        .labels
        .iter()
        .enumerate()
        .map(|(idx, label)| (label.to_string(), palette::GENDER[idx]))
        .collect()
}

fn gender_bars(rows: &[DemographicRow]) -> Vec<StackedBar> {
    let shares = share_table(
        rows.iter().filter_map(|row| {
            Some((
                SurveyYear::from_calendar(row.year)?,
                row.gender.as_deref()?,
            ))
        }),
        GENDERS,
    );

    SurveyYear::ALL
        .iter()
        .map(|year| StackedBar {
            label: year.label().to_string(),
            segments: shares
                .iter()
                .filter(|share| share.year == *year)
                .map(|share| BarSegment {
                    label: share.category.to_string(),
                    percentage: share.percentage,
                    color: GENDERS
                        .index_of(share.category)
                        .map(|idx| palette::GENDER[idx])
                        .unwrap_or(palette::RANK_FALLBACK),
                })
                .collect(),
        })
        .collect()
}

fn bubble_rows(
    rows: &[DemographicRow],
    pick: fn(&DemographicRow) -> Option<&str>,
    categories: CategoryList,
) -> Vec<BubbleRow> {
    let matrix = count_matrix(
        rows.iter()
            .filter_map(|row| Some((SurveyYear::from_calendar(row.year)?, pick(row)?))),
        categories,
    );
    matrix
        .rows()
        .map(|(label, counts)| BubbleRow {
            category: label.to_string(),
            counts,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn respondent(year: u16, gender: &str, org: &str, role: &str) -> DemographicRow {
        DemographicRow {
            year,
            gender: Some(gender.to_string()),
            organization: Some(org.to_string()),
            primary_role: Some(role.to_string()),
        }
    }

    #[test]
    fn gender_bars_cover_each_year_in_order() {
        let mut rows = Vec::new();
        for _ in 0..6 {
            rows.push(respondent(2020, "Male", "Tech company", "Technologist"));
        }
        for _ in 0..4 {
            rows.push(respondent(2020, "Female", "Tech company", "Technologist"));
        }
        rows.push(respondent(2021, "Female", "Conservation NGO", "Policymaker"));

        let bars = gender_bars(&rows);
        assert_eq!(bars.len(), SurveyYear::ALL.len());
        assert_eq!(bars[0].label, "2020");
        // Canonical order puts Female first even though Male dominates.
        assert_eq!(bars[0].segments[0].label, "Female");
        assert_eq!(bars[0].segments[0].percentage, 40.0);
        assert_eq!(bars[0].segments[1].percentage, 60.0);
        // A year with no answers renders an empty bar rather than vanishing.
        assert!(bars[2].segments.is_empty());
    }

    #[test]
    fn bubble_rows_follow_the_canonical_org_order() {
        let rows = vec![
            respondent(2022, "Male", "Government agency", "Policymaker"),
            respondent(2020, "Female", "Conservation NGO", "Technologist"),
        ];
        let bubbles = bubble_rows(&rows, |row| row.organization.as_deref(), ORGANIZATIONS);
        assert_eq!(bubbles.len(), ORGANIZATIONS.len());
        assert_eq!(bubbles[0].category, "Conservation NGO");
        assert_eq!(bubbles[0].counts, [1, 0, 0]);
        assert_eq!(bubbles[4].category, "Government agency");
        assert_eq!(bubbles[4].counts, [0, 0, 1]);
    }
}
