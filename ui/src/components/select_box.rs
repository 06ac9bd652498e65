//! Single-choice dropdown over a fixed list of options.

use dioxus::prelude::*;

#[component]
pub fn SelectBox(label: String, options: Vec<String>, mut selected: Signal<String>) -> Element {
    let current = selected();

    rsx! {
        label { class: "select-box",
            span { class: "select-box__label", "{label}" }
            select {
                class: "select-box__control",
                onchange: move |evt| selected.set(evt.value()),
                for choice in options.iter() {
                    option {
                        value: "{choice}",
                        selected: *choice == current,
                        "{choice}"
                    }
                }
            }
        }
    }
}
