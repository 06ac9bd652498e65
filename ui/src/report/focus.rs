//! Conservation focus areas, shown as a pre-rendered graphic.

use dioxus::prelude::*;

const FOCUS_IMAGE: Asset = asset!("/assets/images/focus_areas.jpg");

#[component]
pub fn FocusSection() -> Element {
    rsx! {
        section { class: "report-section report-section--focus",
            p {
                "The conservation issues respondents focus on in their work held "
                "steady in both years we collected opinions on them: ecological "
                "monitoring is the most widespread, followed by species protection "
                "and protected-area management and planning."
            }
            img {
                class: "report-figure",
                src: FOCUS_IMAGE,
                alt: "Ranked list of conservation focus areas reported by respondents",
            }
            p { class: "report-caption",
                "Note: order based on the number of times a focus area was indicated by respondents; 2021 and 2022 only."
            }

            hr { class: "report-divider" }
        }
    }
}
