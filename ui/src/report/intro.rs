//! Cover and framing narrative for the report.

use dioxus::prelude::*;

const COVER_IMAGE: Asset = asset!("/assets/images/cover.jpg");

#[component]
pub fn IntroSection() -> Element {
    rsx! {
        section { class: "report-section report-section--intro",
            img {
                class: "report-cover",
                src: COVER_IMAGE,
                alt: "Camera trap mounted on a tree at dusk",
            }

            h2 { "About the research" }
            p {
                "As environmental pressures mount, knowing where modern technology "
                "actually helps conservation — and where it falls short — matters more "
                "every year. The Wildscope community survey asks practitioners, "
                "researchers, and engineers around the world what they are working "
                "with, what stands in their way, and what support they need next. The "
                "goal is an evidence base the community can use: to steer programs, to "
                "communicate shared priorities to funders and policymakers, and to "
                "track how the sector is changing."
            }
            p {
                "This edition builds on the 2020 and 2021 waves to present a "
                "three-year trends analysis. By setting shifting opinions beside the "
                "trends that have stabilized — in technology usage, in user and "
                "developer challenges, and in where people see room to grow — we aim "
                "to surface the information most useful for moving the sector forward "
                "together."
            }

            hr { class: "report-divider" }

            h3 { "What is Wildscope?" }
            p {
                "Wildscope is an online hub for conservation technology, connecting "
                "thousands of conservationists, field biologists, engineers, and "
                "developers worldwide. Its research program draws on that community "
                "to inform effective tool development and capacity building, and this "
                "annual survey is its backbone."
            }

            hr { class: "report-divider" }
        }
    }
}
