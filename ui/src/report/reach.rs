//! Geographic reach of the survey across the three waves.

use std::collections::HashMap;

use dioxus::prelude::*;
use tracing::warn;

use crate::charts::ReachMap;
use crate::core::data::{DataStore, ReachRow};
use crate::core::year::SurveyYear;

use super::data_error_card;

#[component]
pub fn ReachSection() -> Element {
    let store = use_context::<DataStore>();
    let regions = store.regions();
    let reach = store.survey_reach();

    rsx! {
        section { class: "report-section report-section--reach",
            p {
                "Most respondents reported residing in the United States, the "
                "United Kingdom, or other European countries in every wave. The "
                "survey's reach nonetheless improved incrementally over time, with "
                "the share of respondents in North America and Europe dropping from "
                "63% in 2020 to 57% in 2022. The map below traces that expansion by "
                "highlighting the first year each country appeared in the responses."
            }

            {match (&regions, &reach) {
                (Ok(regions), Ok(reach)) => rsx! {
                    ReachMap {
                        title: "Expansion of countries from 2020 to 2022",
                        regions: regions.clone(),
                        first_seen: first_seen_by_region(reach),
                    }
                },
                (Err(err), _) => data_error_card("region boundary", err),
                (_, Err(err)) => data_error_card("survey reach", err),
            }}

            hr { class: "report-divider" }
        }
    }
}

/// Joins the reach table onto region names, keeping the earliest wave when a
/// region is listed more than once. Rows with a year outside the survey's
/// range are dropped and logged.
fn first_seen_by_region(rows: &[ReachRow]) -> HashMap<String, SurveyYear> {
    let mut first_seen: HashMap<String, SurveyYear> = HashMap::new();
    for row in rows {
        let Some(year) = SurveyYear::from_calendar(row.first_year) else {
            warn!(
                region = row.region.as_str(),
                year = row.first_year,
                "dropping reach row outside the survey years"
            );
            continue;
        };
        first_seen
            .entry(row.region.clone())
            .and_modify(|existing| {
                if year < *existing {
                    *existing = year;
                }
            })
            .or_insert(year);
    }
    first_seen
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(region: &str, first_year: u16) -> ReachRow {
        ReachRow {
            region: region.to_string(),
            first_year,
        }
    }

    #[test]
    fn join_keeps_the_earliest_wave() {
        let rows = vec![row("Kenya", 2021), row("Kenya", 2020), row("Brazil", 2022)];
        let first_seen = first_seen_by_region(&rows);
        assert_eq!(first_seen["Kenya"], SurveyYear::Y2020);
        assert_eq!(first_seen["Brazil"], SurveyYear::Y2022);
    }

    #[test]
    fn out_of_range_years_are_dropped() {
        let rows = vec![row("Atlantis", 1999)];
        assert!(first_seen_by_region(&rows).is_empty());
    }
}
