//! Community impact, calls to action, and acknowledgments.

use dioxus::prelude::*;

const QUOTES_IMAGE: Asset = asset!("/assets/images/community_quotes.jpg");
const IMPACT_IMAGE: Asset = asset!("/assets/images/community_impact.jpg");

#[component]
pub fn CommunitySection() -> Element {
    rsx! {
        section { class: "report-section report-section--community",
            h2 { "The impact and future of Wildscope" }
            p {
                "Wildscope has become a central place for conservation technology "
                "online — somewhere the community connects, learns from each other, "
                "shares insights and innovations, and finds collaborators across "
                "geographic and sectoral borders. Most respondents highlighted one "
                "or all three of these benefits when asked about its value."
            }
            img {
                class: "report-figure",
                src: QUOTES_IMAGE,
                alt: "Selected community quotes about the platform",
            }
            p { "We also found a measurable impact on members in some key areas:" }
            img {
                class: "report-figure",
                src: IMPACT_IMAGE,
                alt: "Measured impact of the platform on community members",
            }
            p {
                "We have watched these trends develop anecdotally for years; seeing "
                "data support them for the first time is exciting. Results like "
                "these help us understand our impact and keep developing programs, "
                "events, and tools that respond to the community's and the sector's "
                "evolving needs."
            }

            hr { class: "report-divider" }

            h2 { "How can you get involved?" }
            p {
                "We are committed to making the community and its programs as "
                "inclusive as possible. For the research program, that means "
                "ensuring the collective voice increasingly reflects currently "
                "underrepresented user and developer communities. You can help by "
                "taking part in the annual surveys and sharing them widely with "
                "networks we may not already reach: "
                a {
                    href: "https://wildscope.org/survey",
                    target: "_blank",
                    "take this year's community survey"
                }
                "."
            }
            p {
                "Beyond this research, Wildscope delivers a growing suite of "
                "programs spanning community, research, and resourcing. Find out "
                "more in the latest "
                a {
                    href: "https://wildscope.org/annual-report",
                    target: "_blank",
                    "annual report"
                }
                " or by "
                a {
                    href: "https://wildscope.org",
                    target: "_blank",
                    "joining the community"
                }
                "."
            }

            hr { class: "report-divider" }

            h2 { "Acknowledgments" }
            p {
                "First and foremost, we thank our survey respondents for their time "
                "and thoughtful contributions. The research program is led by the "
                "Wildscope research team with support from partner universities; "
                "all analyses and graphics in this report were produced as part of "
                "the program's annual internship."
            }
        }
    }
}
