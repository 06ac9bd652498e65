//! Opportunities and optimism across the community.

use dioxus::prelude::*;

const OPTIMISM_IMAGE: Asset = asset!("/assets/images/optimism.jpg");
const OPPORTUNITIES_IMAGE: Asset = asset!("/assets/images/opportunities.jpg");

#[component]
pub fn OpportunitiesSection() -> Element {
    rsx! {
        section { class: "report-section report-section--opportunities",
            h2 { "Opportunities: what's needed?" }
            p { class: "report-lede",
                "Despite these challenges, the global community maintains "
                "remarkable hope for the future that only grew over time, and "
                "largely agrees on what needs to be done."
            }
            p {
                "In 2022, almost two-thirds of respondents (63%) reported feeling "
                "more optimistic about the future of conservation technology than "
                "twelve months prior — up from about 52% in both 2021 and 2020. "
                "Asked to rank reasons for optimism, people pointed to the rate at "
                "which the field is evolving, the increasing accessibility of "
                "conservation technologies, and growing support from the "
                "conservation community and decision-makers (73%, 73%, and 43% "
                "ranking them in their top three). In earlier years, collaborative "
                "culture was typically the third top reason."
            }
            img {
                class: "report-figure",
                src: OPTIMISM_IMAGE,
                alt: "Reasons for optimism ranked by share of respondents",
            }
            p {
                "Asked about the greatest opportunities for advancing the sector, "
                "respondents ranked improving collaboration and information sharing "
                "(69%), making tools more open, accessible, and user friendly "
                "(63%), and improving the interoperability of tools and data "
                "streams (51%) as the top three. Expanding capacity for data "
                "analysis at scale, investing in local technology capacity "
                "building, and increasing capacity to share, store, and collate "
                "data globally were also seen as priorities."
            }
            p { class: "report-caption",
                "Note: percentages indicate the share of respondents who ranked an "
                "opportunity 1st, 2nd, or 3rd out of all opportunities."
            }
            img {
                class: "report-figure",
                src: OPPORTUNITIES_IMAGE,
                alt: "Opportunities for advancing the sector ranked by share of respondents",
            }

            hr { class: "report-divider" }
        }
    }
}
