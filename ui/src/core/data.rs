//! Embedded survey datasets and the read-through data store.
//!
//! All report inputs ship inside the binary via `rust-embed`, so web and
//! desktop builds carry the same data. [`DataStore`] is constructed once at
//! app start, provided through Dioxus context, and memoizes each parsed
//! dataset for the life of the process; components receive cheap `Arc`
//! clones on every render. A missing or malformed file is fatal for the
//! sections that need it and is never retried.

use std::sync::{Arc, OnceLock};

use rust_embed::Embed;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

use super::geo::{self, RegionCollection};

#[derive(Embed)]
#[folder = "assets/data/"]
struct DataAssets;

/// Identifier for one bundled dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatasetId {
    Demographics,
    Proficiency,
    UsageSplit,
    ProficiencySplit,
    Challenges,
    UserConstraints,
    DeveloperConstraints,
    SurveyReach,
    Regions,
}

impl DatasetId {
    pub const ALL: [DatasetId; 9] = [
        DatasetId::Demographics,
        DatasetId::Proficiency,
        DatasetId::UsageSplit,
        DatasetId::ProficiencySplit,
        DatasetId::Challenges,
        DatasetId::UserConstraints,
        DatasetId::DeveloperConstraints,
        DatasetId::SurveyReach,
        DatasetId::Regions,
    ];

    pub const fn file_name(self) -> &'static str {
        match self {
            DatasetId::Demographics => "demographics.csv",
            DatasetId::Proficiency => "proficiency.csv",
            DatasetId::UsageSplit => "usage_split.csv",
            DatasetId::ProficiencySplit => "proficiency_split.csv",
            DatasetId::Challenges => "challenges.csv",
            DatasetId::UserConstraints => "user_constraints.csv",
            DatasetId::DeveloperConstraints => "developer_constraints.csv",
            DatasetId::SurveyReach => "survey_reach.csv",
            DatasetId::Regions => "regions.geojson",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataError {
    #[error("dataset `{0}` is missing from the embedded assets")]
    Missing(&'static str),
    #[error("dataset `{0}` is not valid UTF-8")]
    Encoding(&'static str),
    #[error("failed to parse `{file}`: {detail}")]
    Parse { file: &'static str, detail: String },
}

/// One respondent's demographic answers for one survey wave. Empty fields
/// mean the question was not answered.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DemographicRow {
    pub year: u16,
    pub gender: Option<String>,
    pub organization: Option<String>,
    pub primary_role: Option<String>,
}

/// Pre-aggregated usage share and mean proficiency for one technology.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProficiencyRow {
    pub technology: String,
    /// Share of respondents using the technology, 0–100.
    pub percentage: f64,
    /// Mean self-rated proficiency on the 1–5 survey scale.
    pub average_proficiency: f64,
    /// Display position, 1 = top of the chart.
    pub order: u32,
}

/// One slice of a binary per-technology split (usage or proficiency).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SplitRow {
    pub technology: String,
    pub year: u16,
    pub segment: String,
    /// Share of respondents in the segment, 0–100.
    pub share: f64,
}

/// Rank share for one (year, item) pair of a ranked table. Row order within
/// a year is the item display order for that year's chart.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RankedShareRow {
    pub year: u16,
    pub item: String,
    pub ranking: String,
    /// Share of respondents assigning this rank to the item, 0–100.
    pub percentage: f64,
}

/// First survey year a region appeared in the responses.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReachRow {
    pub region: String,
    pub first_year: u16,
}

type Cached<T> = OnceLock<Result<Arc<T>, DataError>>;

#[derive(Default)]
struct Caches {
    demographics: Cached<Vec<DemographicRow>>,
    proficiency: Cached<Vec<ProficiencyRow>>,
    usage_split: Cached<Vec<SplitRow>>,
    proficiency_split: Cached<Vec<SplitRow>>,
    challenges: Cached<Vec<RankedShareRow>>,
    user_constraints: Cached<Vec<RankedShareRow>>,
    developer_constraints: Cached<Vec<RankedShareRow>>,
    survey_reach: Cached<Vec<ReachRow>>,
    regions: Cached<RegionCollection>,
}

/// Injected data-access component with a read-through cache per dataset.
///
/// Cloning is cheap and every clone shares the same cache, so providing the
/// store through context and reading it on every re-render costs an `Arc`
/// bump, not a re-parse.
#[derive(Clone, Default)]
pub struct DataStore {
    inner: Arc<Caches>,
}

impl DataStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn demographics(&self) -> Result<Arc<Vec<DemographicRow>>, DataError> {
        cached(&self.inner.demographics, DatasetId::Demographics)
    }

    pub fn proficiency(&self) -> Result<Arc<Vec<ProficiencyRow>>, DataError> {
        cached(&self.inner.proficiency, DatasetId::Proficiency)
    }

    pub fn usage_split(&self) -> Result<Arc<Vec<SplitRow>>, DataError> {
        cached(&self.inner.usage_split, DatasetId::UsageSplit)
    }

    pub fn proficiency_split(&self) -> Result<Arc<Vec<SplitRow>>, DataError> {
        cached(&self.inner.proficiency_split, DatasetId::ProficiencySplit)
    }

    pub fn challenges(&self) -> Result<Arc<Vec<RankedShareRow>>, DataError> {
        cached(&self.inner.challenges, DatasetId::Challenges)
    }

    pub fn user_constraints(&self) -> Result<Arc<Vec<RankedShareRow>>, DataError> {
        cached(&self.inner.user_constraints, DatasetId::UserConstraints)
    }

    pub fn developer_constraints(&self) -> Result<Arc<Vec<RankedShareRow>>, DataError> {
        cached(&self.inner.developer_constraints, DatasetId::DeveloperConstraints)
    }

    pub fn survey_reach(&self) -> Result<Arc<Vec<ReachRow>>, DataError> {
        cached(&self.inner.survey_reach, DatasetId::SurveyReach)
    }

    pub fn regions(&self) -> Result<Arc<RegionCollection>, DataError> {
        self.inner
            .regions
            .get_or_init(|| {
                let text = raw_text(DatasetId::Regions)?;
                geo::parse_regions(&text)
                    .map(Arc::new)
                    .map_err(|err| DataError::Parse {
                        file: DatasetId::Regions.file_name(),
                        detail: err.to_string(),
                    })
            })
            .clone()
    }

    /// Forces every dataset once, returning the first failure. The desktop
    /// launcher calls this at startup so a broken bundle is logged before
    /// first paint; on the web the section error cards are the report.
    pub fn warm(&self) -> Result<(), DataError> {
        self.demographics()?;
        self.proficiency()?;
        self.usage_split()?;
        self.proficiency_split()?;
        self.challenges()?;
        self.user_constraints()?;
        self.developer_constraints()?;
        self.survey_reach()?;
        self.regions()?;
        Ok(())
    }
}

fn cached<T>(slot: &Cached<Vec<T>>, id: DatasetId) -> Result<Arc<Vec<T>>, DataError>
where
    T: DeserializeOwned,
{
    slot.get_or_init(|| parse_csv(id)).clone()
}

fn raw_text(id: DatasetId) -> Result<String, DataError> {
    let file = id.file_name();
    let asset = DataAssets::get(file).ok_or(DataError::Missing(file))?;
    String::from_utf8(asset.data.into_owned()).map_err(|_| DataError::Encoding(file))
}

fn parse_csv<T>(id: DatasetId) -> Result<Arc<Vec<T>>, DataError>
where
    T: DeserializeOwned,
{
    let text = raw_text(id)?;
    let mut reader = csv::Reader::from_reader(text.as_bytes());
    let mut rows = Vec::new();
    for record in reader.deserialize() {
        let row: T = record.map_err(|err| DataError::Parse {
            file: id.file_name(),
            detail: err.to_string(),
        })?;
        rows.push(row);
    }
    Ok(Arc::new(rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_dataset_warms() {
        let store = DataStore::new();
        store.warm().expect("all bundled datasets parse");
    }

    #[test]
    fn repeated_loads_are_value_equal_and_shared() {
        let store = DataStore::new();
        let first = store.demographics().expect("demographics load");
        let second = store.demographics().expect("demographics load");
        assert_eq!(first, second);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn clones_share_one_cache() {
        let store = DataStore::new();
        let clone = store.clone();
        let first = store.challenges().expect("challenges load");
        let second = clone.challenges().expect("challenges load");
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn unanswered_fields_deserialize_as_none() {
        let store = DataStore::new();
        let rows = store.demographics().expect("demographics load");
        // The bundle contains at least one respondent per wave who skipped a
        // demographic question.
        assert!(rows.iter().any(|row| row.organization.is_none()
            || row.primary_role.is_none()
            || row.gender.is_none()));
    }

    #[test]
    fn tables_are_handed_out_immutably() {
        let store = DataStore::new();
        let before = store.survey_reach().expect("reach load");
        let snapshot: Vec<ReachRow> = before.as_ref().clone();
        // Re-reading after another consumer held the table must observe the
        // same contents.
        let after = store.survey_reach().expect("reach load");
        assert_eq!(snapshot, *after.as_ref());
    }
}
