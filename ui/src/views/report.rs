use dioxus::prelude::*;

use crate::report::{
    CommunitySection, ConstraintsSection, DemographicsSection, FocusSection, IntroSection,
    OpportunitiesSection, ReachSection, ToolsSection,
};

/// The full report page: a fixed linear sequence of narrative and chart
/// sections. Only the selector widgets inside individual sections branch.
#[component]
pub fn Report() -> Element {
    rsx! {
        section { class: "page page-report",
            h1 { "State of Conservation Technology" }
            p { class: "report-lede", "Three-year trends from the global conservation technology community, 2020–2022." }

            IntroSection {}
            DemographicsSection {}
            ReachSection {}
            FocusSection {}
            ToolsSection {}
            ConstraintsSection {}
            OpportunitiesSection {}
            CommunitySection {}
        }
    }
}
