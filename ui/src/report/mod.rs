//! Report sections, in document order.
//!
//! Each section owns its narrative, its canonical category lists, and the
//! wiring from the [`DataStore`](crate::core::data::DataStore) to a chart.
//! A dataset failure degrades to an error card inside the affected section;
//! the rest of the page renders normally.

mod intro;
pub use intro::IntroSection;

mod demographics;
pub use demographics::DemographicsSection;

mod reach;
pub use reach::ReachSection;

mod focus;
pub use focus::FocusSection;

mod tools;
pub use tools::ToolsSection;

mod constraints;
pub use constraints::ConstraintsSection;

mod opportunities;
pub use opportunities::OpportunitiesSection;

mod community;
pub use community::CommunitySection;

use dioxus::prelude::*;

use crate::core::data::DataError;

/// Error card shown in place of a chart whose dataset failed to load.
pub(crate) fn data_error_card(context: &str, error: &DataError) -> Element {
    rsx! {
        div { class: "report-error",
            p { class: "report-error__lead", "Couldn't load the {context} data." }
            p { class: "report-error__detail", "{error}" }
        }
    }
}
