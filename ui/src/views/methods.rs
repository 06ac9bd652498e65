use dioxus::prelude::*;

use crate::core::data::{DataError, DataStore, DatasetId};

/// Data notes: what each bundled dataset contains and how large it is.
#[component]
pub fn Methods() -> Element {
    let store = use_context::<DataStore>();

    rsx! {
        section { class: "page page-methods",
            h1 { "Data & methods" }
            p {
                "The report is built from small, pre-cleaned survey extracts "
                "bundled with the application. Demographics are per-respondent "
                "records; the remaining tables are pre-aggregated shares. All "
                "percentages are computed within a survey year and rounded to one "
                "decimal."
            }

            table { class: "methods-table",
                thead {
                    tr {
                        th { "Dataset" }
                        th { "File" }
                        th { "Rows" }
                        th { "Contents" }
                    }
                }
                tbody {
                    for id in DatasetId::ALL {
                        tr {
                            td { "{dataset_label(id)}" }
                            td { code { "{id.file_name()}" } }
                            td {
                                {match row_count(&store, id) {
                                    Ok(count) => rsx! { "{count}" },
                                    Err(_) => rsx! { span { class: "methods-table__error", "unavailable" } },
                                }}
                            }
                            td { "{dataset_description(id)}" }
                        }
                    }
                }
            }

            p { class: "report-caption",
                "Answers outside a chart's canonical category list are omitted "
                "from that chart; the omission is logged, never silent."
            }
        }
    }
}

fn dataset_label(id: DatasetId) -> &'static str {
    match id {
        DatasetId::Demographics => "Demographics",
        DatasetId::Proficiency => "Usage & proficiency",
        DatasetId::UsageSplit => "Usage split",
        DatasetId::ProficiencySplit => "Proficiency split",
        DatasetId::Challenges => "Sector challenges",
        DatasetId::UserConstraints => "User constraints",
        DatasetId::DeveloperConstraints => "Developer constraints",
        DatasetId::SurveyReach => "Survey reach",
        DatasetId::Regions => "Region boundaries",
    }
}

fn dataset_description(id: DatasetId) -> &'static str {
    match id {
        DatasetId::Demographics => "One row per respondent per wave: gender, organization, primary role.",
        DatasetId::Proficiency => "Usage share and mean 1–5 proficiency per technology group.",
        DatasetId::UsageSplit => "Binary using / not-using split per technology for 2020 and 2022.",
        DatasetId::ProficiencySplit => "Binary high / average-or-low proficiency split per technology.",
        DatasetId::Challenges => "Rank shares for sector-wide challenges per wave.",
        DatasetId::UserConstraints => "Rank shares for end-user constraints per wave.",
        DatasetId::DeveloperConstraints => "Rank shares for developer constraints per wave.",
        DatasetId::SurveyReach => "First wave each region appeared in the responses.",
        DatasetId::Regions => "Simplified region boundaries joined by name for the reach map.",
    }
}

fn row_count(store: &DataStore, id: DatasetId) -> Result<usize, DataError> {
    Ok(match id {
        DatasetId::Demographics => store.demographics()?.len(),
        DatasetId::Proficiency => store.proficiency()?.len(),
        DatasetId::UsageSplit => store.usage_split()?.len(),
        DatasetId::ProficiencySplit => store.proficiency_split()?.len(),
        DatasetId::Challenges => store.challenges()?.len(),
        DatasetId::UserConstraints => store.user_constraints()?.len(),
        DatasetId::DeveloperConstraints => store.developer_constraints()?.len(),
        DatasetId::SurveyReach => store.survey_reach()?.len(),
        DatasetId::Regions => store.regions()?.features.len(),
    })
}
