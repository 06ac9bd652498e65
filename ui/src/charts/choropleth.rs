//! World map filled by the first survey year each region appeared in.

use std::collections::HashMap;
use std::sync::Arc;

use dioxus::prelude::*;

use crate::core::geo::{region_path, MapViewport, RegionCollection};
use crate::core::palette;
use crate::core::year::SurveyYear;

const MAP_W: f64 = 760.0;
const MAP_H: f64 = 380.0;
const LEGEND_H: f64 = 34.0;

#[component]
pub fn ReachMap(
    title: String,
    regions: Arc<RegionCollection>,
    first_seen: HashMap<String, SurveyYear>,
) -> Element {
    let viewport = MapViewport::new(MAP_W, MAP_H);
    let view_h = MAP_H + LEGEND_H;

    let shapes: Vec<(String, String, &'static str, Option<SurveyYear>)> = regions
        .features
        .iter()
        .map(|feature| {
            let name = feature.properties.name.clone();
            let path = region_path(&feature.geometry, viewport);
            let first = first_seen.get(&name).copied();
            let fill = first
                .map(palette::year_color)
                .unwrap_or(palette::NEUTRAL_REGION);
            (name, path, fill, first)
        })
        .collect();

    rsx! {
        figure { class: "chart-card chart-card--map",
            h3 { class: "chart-card__title", "{title}" }
            svg {
                class: "chart-card__plot",
                view_box: "0 0 {MAP_W} {view_h}",
                role: "img",
                "aria-label": "{title}",

                for (name, path, fill, first) in shapes.iter() {
                    path {
                        d: "{path}",
                        fill: *fill,
                        fill_rule: "evenodd",
                        stroke: "#CCCCCC",
                        stroke_width: "0.4",
                        if let Some(year) = first {
                            title { "{name} — first appearance {year}" }
                        } else {
                            title { "{name} — not yet represented" }
                        }
                    }
                }

                // "First appearance" legend.
                text {
                    x: "16",
                    y: "{MAP_H + 22.0}",
                    class: "chart-legend-title",
                    "First appearance:"
                }
                for year in SurveyYear::ALL {
                    {
                        let x = 150.0 + year.index() as f64 * 90.0;
                        rsx! {
                            rect {
                                x: "{x}",
                                y: "{MAP_H + 12.0}",
                                width: "12",
                                height: "12",
                                fill: palette::year_color(year),
                            }
                            text {
                                x: "{x + 18.0}",
                                y: "{MAP_H + 22.0}",
                                class: "chart-legend-label",
                                "{year}"
                            }
                        }
                    }
                }
                rect {
                    x: "420",
                    y: "{MAP_H + 12.0}",
                    width: "12",
                    height: "12",
                    fill: palette::NEUTRAL_REGION,
                }
                text {
                    x: "438",
                    y: "{MAP_H + 22.0}",
                    class: "chart-legend-label",
                    "Other"
                }
            }
        }
    }
}
