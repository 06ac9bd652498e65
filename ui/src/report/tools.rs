//! Current tools: usage, proficiency, and the per-technology deep dive.

use dioxus::prelude::*;
use tracing::warn;

use crate::charts::{DonutPair, DonutSlice, UsageProficiencyChart, UsageRow};
use crate::components::SelectBox;
use crate::core::aggregate::CategoryList;
use crate::core::data::{DataStore, SplitRow};
use crate::core::palette;
use crate::core::year::SurveyYear;

use super::data_error_card;

const POTENTIAL_2020: Asset = asset!("/assets/images/potential2020.jpg");
const POTENTIAL_2022: Asset = asset!("/assets/images/potential2022.jpg");

/// Canonical segment orders for the two donut pairs; the first segment of
/// each pair gets the saturated color.
const USAGE_SEGMENTS: CategoryList = CategoryList::new(
    "usage split",
    &[
        "Respondents using technology",
        "Respondents not using technology",
    ],
);

const PROFICIENCY_SEGMENTS: CategoryList = CategoryList::new(
    "proficiency split",
    &[
        "Highly proficient respondents",
        "Respondents with average or low proficiency",
    ],
);

#[component]
pub fn ToolsSection() -> Element {
    let store = use_context::<DataStore>();
    let proficiency = store.proficiency();
    let usage_split = store.usage_split();
    let proficiency_split = store.proficiency_split();

    // Dropdown options come from the usage-split table in file order; the
    // first technology is the default selection.
    let technologies: Vec<String> = usage_split
        .as_ref()
        .map(|rows| {
            let mut seen: Vec<String> = Vec::new();
            for row in rows.iter() {
                if !seen.iter().any(|tech| *tech == row.technology) {
                    seen.push(row.technology.clone());
                }
            }
            seen
        })
        .unwrap_or_default();
    let initial = technologies.first().cloned().unwrap_or_default();
    let selected = use_signal(move || initial);
    let choice = selected();

    rsx! {
        section { class: "report-section report-section--tools",
            h2 { "Current tools: how are they performing?" }
            p { class: "report-lede",
                "The tools respondents work with most haven't changed substantially "
                "since 2020, but people's views on the relative potential of these "
                "tools to advance conservation have shifted over time."
            }

            h3 { "Usage and proficiency" }
            p {
                "In every wave, most respondents said they frequently engage with "
                "one or more of eleven core conservation technology groups — almost "
                "all with more than one (92%), and the vast majority with more than "
                "two (79%). Camera traps, GIS and remote sensing, and AI tools were "
                "the most widely used. Self-reported expertise was similar across "
                "groups, with the exception of eDNA and genomics, which had the "
                "smallest sample and the lowest average proficiency."
            }

            {match &proficiency {
                Ok(rows) => {
                    let mut ordered = rows.as_ref().clone();
                    ordered.sort_by_key(|row| row.order);
                    let usage_rows: Vec<UsageRow> = ordered
                        .into_iter()
                        .map(|row| UsageRow {
                            technology: row.technology,
                            percentage: row.percentage,
                            average_proficiency: row.average_proficiency,
                        })
                        .collect();
                    rsx! {
                        UsageProficiencyChart {
                            title: "Conservation technology usage and proficiency",
                            rows: usage_rows,
                        }
                    }
                }
                Err(err) => data_error_card("technology usage", err),
            }}
            p { class: "report-caption",
                "Note: multiple technologies could be indicated. Average proficiency "
                "is the mean score on a 1–5 scale (1 = novice, 5 = expert), rescaled "
                "onto the percentage axis at 10% of its value."
            }

            p {
                "Explore what share of respondents used each technology in 2020 and "
                "2022, and the corresponding proficiency levels, using the filter "
                "below."
            }

            SelectBox {
                label: "Conservation technology",
                options: technologies.clone(),
                selected,
            }

            {match &usage_split {
                Ok(rows) => donut_pair_for(
                    rows,
                    &choice,
                    format!("Share of users, {choice} (%)"),
                    USAGE_SEGMENTS,
                    palette::USAGE_SPLIT,
                ),
                Err(err) => data_error_card("technology usage split", err),
            }}

            {match &proficiency_split {
                Ok(rows) => donut_pair_for(
                    rows,
                    &choice,
                    format!("Share of highly proficient users, {choice} (%)"),
                    PROFICIENCY_SEGMENTS,
                    palette::PROFICIENCY_SPLIT,
                ),
                Err(err) => data_error_card("technology proficiency split", err),
            }}

            h3 { "Performance versus potential" }
            p {
                "To understand how current tools are perceived more broadly, we "
                "asked people to rate the technologies they use on current "
                "performance and on potential capacity to advance conservation. In "
                "2020, GIS and remote sensing, drones, and mobile apps were rated "
                "the best performing, while AI tools, eDNA and genomics, and "
                "networked sensors were seen as having the highest potential."
            }
            img {
                class: "report-figure",
                src: POTENTIAL_2020,
                alt: "Technology performance and potential rankings for 2020",
            }
            p {
                "The landscape looks different in 2022: GIS and remote sensing still "
                "leads on performance, but protected-area management tools and "
                "bioacoustics replaced drones and mobile apps among the top-rated "
                "groups. On potential, eDNA and genomics moved from the top of the "
                "list to nearly the bottom, displaced by biologgers alongside "
                "networked sensors and AI tools."
            }
            p {
                "Swings like this in the perceived potential of emerging tools are "
                "not surprising. As the technology hype cycle describes, early "
                "excitement spikes when a tool appears, takes a hit with adoption "
                "challenges, and then settles into iterative, productive use."
            }
            img {
                class: "report-figure",
                src: POTENTIAL_2022,
                alt: "Technology performance and potential rankings for 2022",
            }
            p { class: "report-caption",
                "Note: the two graphics rank mean scores of survey responses per "
                "technology, rated on 1–5 scales where 5 is the most positive."
            }

            hr { class: "report-divider" }
        }
    }
}

/// Builds the earliest/latest donut pair for the selected technology.
fn donut_pair_for(
    rows: &[SplitRow],
    technology: &str,
    title: String,
    segments: CategoryList,
    colors: [&'static str; 2],
) -> Element {
    let earliest = SurveyYear::earliest();
    let latest = rows
        .iter()
        .filter(|row| row.technology == technology)
        .filter_map(|row| SurveyYear::from_calendar(row.year))
        .max()
        .unwrap_or(SurveyYear::latest());

    rsx! {
        DonutPair {
            title,
            left_caption: earliest.label().to_string(),
            right_caption: latest.label().to_string(),
            left: split_slices(rows, technology, earliest, segments, colors),
            right: split_slices(rows, technology, latest, segments, colors),
        }
    }
}

/// Slices for one technology and year, colored by canonical segment order.
/// Segments outside the canonical list are dropped and logged.
fn split_slices(
    rows: &[SplitRow],
    technology: &str,
    year: SurveyYear,
    segments: CategoryList,
    colors: [&'static str; 2],
) -> Vec<DonutSlice> {
    rows.iter()
        .filter(|row| row.technology == technology && row.year == year.as_calendar())
        .filter_map(|row| {
            let Some(idx) = segments.index_of(&row.segment) else {
                warn!(
                    chart = segments.name,
                    segment = row.segment.as_str(),
                    "dropping split segment outside the canonical list"
                );
                return None;
            };
            Some(DonutSlice {
                label: row.segment.clone(),
                share: row.share,
                color: colors[idx],
            })
        })
        .collect()
}
