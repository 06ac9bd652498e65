//! Radio group over the three survey years.

use dioxus::prelude::*;

use crate::core::year::SurveyYear;

/// Exactly one year is selected at all times; the default is whatever the
/// owning section seeded the signal with (the earliest wave everywhere in
/// the report). `group` keeps independent radio groups from capturing each
/// other's keyboard focus.
#[component]
pub fn YearRadio(group: String, mut selected: Signal<SurveyYear>) -> Element {
    let current = selected();

    rsx! {
        fieldset { class: "year-radio",
            legend { class: "year-radio__legend", "Year:" }
            for year in SurveyYear::ALL {
                label {
                    class: if current == year {
                        "year-radio__option year-radio__option--active"
                    } else {
                        "year-radio__option"
                    },
                    input {
                        r#type: "radio",
                        name: "{group}",
                        value: "{year}",
                        checked: current == year,
                        onchange: move |_| selected.set(year),
                    }
                    "{year}"
                }
            }
        }
    }
}
