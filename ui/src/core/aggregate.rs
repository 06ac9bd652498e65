//! Year × category aggregation behind the demographic charts.
//!
//! Charts never infer category order from the data: each one passes an
//! explicit [`CategoryList`] and the output follows that order, keeping
//! year-over-year comparisons visually stable. Values outside the list are
//! dropped from the chart and logged.

use tracing::warn;

use super::year::SurveyYear;

/// Canonical ordered category list for one chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryList {
    /// Short name used in log messages when a value is dropped.
    pub name: &'static str,
    pub labels: &'static [&'static str],
}

impl CategoryList {
    pub const fn new(name: &'static str, labels: &'static [&'static str]) -> Self {
        Self { name, labels }
    }

    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|known| *known == label)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// One (year, category) cell of an aggregated share table.
#[derive(Debug, Clone, PartialEq)]
pub struct ShareRow {
    pub year: SurveyYear,
    pub category: &'static str,
    pub count: u32,
    /// Share of the year's total across the canonical categories, 0–100,
    /// rounded to one decimal.
    pub percentage: f64,
}

/// Counts per (year, category) pair, computed from raw observations.
///
/// Pairs absent from the input are absent from the output; categories are
/// emitted in canonical order within each year. Percentages are taken over
/// the year's total across the canonical categories only, so they sum to
/// 100 ± 0.1 after rounding.
pub fn share_table<I, S>(observations: I, categories: CategoryList) -> Vec<ShareRow>
where
    I: IntoIterator<Item = (SurveyYear, S)>,
    S: AsRef<str>,
{
    let tally = tally(observations, categories);

    let mut rows = Vec::new();
    for year in SurveyYear::ALL {
        let per_year = &tally[year.index()];
        let total: u32 = per_year.iter().sum();
        if total == 0 {
            continue;
        }
        for (idx, label) in categories.labels.iter().enumerate() {
            let count = per_year[idx];
            if count == 0 {
                continue;
            }
            let percentage = round_share(count, total);
            rows.push(ShareRow {
                year,
                category: label,
                count,
                percentage,
            });
        }
    }
    rows
}

/// Zero-filled counts on a category × year grid, for the bubble charts.
#[derive(Debug, Clone, PartialEq)]
pub struct CountMatrix {
    pub categories: CategoryList,
    counts: Vec<[u32; SurveyYear::ALL.len()]>,
}

impl CountMatrix {
    pub fn count(&self, category_index: usize, year: SurveyYear) -> u32 {
        self.counts[category_index][year.index()]
    }

    /// Largest single cell, used to scale marker areas.
    pub fn max_count(&self) -> u32 {
        self.counts
            .iter()
            .flat_map(|row| row.iter().copied())
            .max()
            .unwrap_or(0)
    }

    /// Rows in canonical category order.
    pub fn rows(&self) -> impl Iterator<Item = (&'static str, [u32; SurveyYear::ALL.len()])> + '_ {
        self.categories
            .labels
            .iter()
            .zip(self.counts.iter())
            .map(|(label, counts)| (*label, *counts))
    }
}

/// Reindexes raw observations against the canonical list; missing pairs
/// become explicit zeros.
pub fn count_matrix<I, S>(observations: I, categories: CategoryList) -> CountMatrix
where
    I: IntoIterator<Item = (SurveyYear, S)>,
    S: AsRef<str>,
{
    let tally = tally(observations, categories);
    let counts = (0..categories.len())
        .map(|idx| {
            let mut per_category = [0u32; SurveyYear::ALL.len()];
            for year in SurveyYear::ALL {
                per_category[year.index()] = tally[year.index()][idx];
            }
            per_category
        })
        .collect();
    CountMatrix { categories, counts }
}

fn tally<I, S>(observations: I, categories: CategoryList) -> Vec<Vec<u32>>
where
    I: IntoIterator<Item = (SurveyYear, S)>,
    S: AsRef<str>,
{
    let mut tally = vec![vec![0u32; categories.len()]; SurveyYear::ALL.len()];
    let mut dropped: Vec<String> = Vec::new();

    for (year, value) in observations {
        let value = value.as_ref();
        match categories.index_of(value) {
            Some(idx) => tally[year.index()][idx] += 1,
            None => {
                if !dropped.iter().any(|seen| seen == value) {
                    warn!(
                        chart = categories.name,
                        value, "dropping category value outside the canonical list"
                    );
                    dropped.push(value.to_string());
                }
            }
        }
    }
    tally
}

fn round_share(count: u32, total: u32) -> f64 {
    let raw = f64::from(count) / f64::from(total) * 100.0;
    (raw * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const GENDERS: CategoryList = CategoryList::new("gender", &["Female", "Male"]);
    const ORGS: CategoryList = CategoryList::new("org", &["NGO", "University", "Company"]);

    fn observations(
        counts: &[(SurveyYear, &'static str, u32)],
    ) -> Vec<(SurveyYear, &'static str)> {
        counts.iter()
            .flat_map(|(year, value, n)| std::iter::repeat((*year, *value)).take(*n as usize))
            .collect()
    }

    #[test]
    fn sixty_forty_split_yields_exact_percentages() {
        let obs = observations(&[
            (SurveyYear::Y2020, "Male", 60),
            (SurveyYear::Y2020, "Female", 40),
        ]);
        let rows = share_table(obs, GENDERS);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].category, "Female");
        assert_eq!(rows[0].percentage, 40.0);
        assert_eq!(rows[1].category, "Male");
        assert_eq!(rows[1].percentage, 60.0);
        assert_eq!(rows[1].count, 60);
    }

    #[test]
    fn percentages_sum_to_100_within_rounding() {
        // Three-way third split rounds each cell to 33.3.
        let obs = observations(&[
            (SurveyYear::Y2021, "NGO", 7),
            (SurveyYear::Y2021, "University", 7),
            (SurveyYear::Y2021, "Company", 7),
        ]);
        let rows = share_table(obs, ORGS);
        let sum: f64 = rows.iter().map(|row| row.percentage).sum();
        assert!((sum - 100.0).abs() <= 0.1, "sum was {sum}");
    }

    #[test]
    fn aggregation_is_idempotent() {
        let obs = observations(&[
            (SurveyYear::Y2020, "NGO", 12),
            (SurveyYear::Y2020, "Company", 5),
            (SurveyYear::Y2022, "University", 9),
        ]);
        let first = share_table(obs.clone(), ORGS);
        let second = share_table(obs, ORGS);
        assert_eq!(first, second);
    }

    #[test]
    fn unknown_categories_are_dropped_from_totals() {
        let obs = observations(&[
            (SurveyYear::Y2020, "Male", 30),
            (SurveyYear::Y2020, "Female", 30),
            (SurveyYear::Y2020, "Prefer not to say", 40),
        ]);
        let rows = share_table(obs, GENDERS);
        assert_eq!(rows.len(), 2);
        // Percentages are relative to the canonical categories only.
        assert!(rows.iter().all(|row| row.percentage == 50.0));
    }

    #[test]
    fn absent_pairs_are_absent_not_zero() {
        let obs = observations(&[(SurveyYear::Y2020, "NGO", 4)]);
        let rows = share_table(obs, ORGS);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].category, "NGO");
        assert_eq!(rows[0].percentage, 100.0);
    }

    #[test]
    fn display_order_follows_canonical_list_not_input_order() {
        let obs = observations(&[
            (SurveyYear::Y2020, "Company", 10),
            (SurveyYear::Y2020, "NGO", 1),
        ]);
        let rows = share_table(obs, ORGS);
        let order: Vec<_> = rows.iter().map(|row| row.category).collect();
        assert_eq!(order, vec!["NGO", "Company"]);
    }

    #[test]
    fn count_matrix_zero_fills_missing_pairs() {
        let obs = observations(&[
            (SurveyYear::Y2020, "NGO", 3),
            (SurveyYear::Y2022, "Company", 2),
        ]);
        let matrix = count_matrix(obs, ORGS);
        assert_eq!(matrix.count(0, SurveyYear::Y2020), 3);
        assert_eq!(matrix.count(0, SurveyYear::Y2021), 0);
        assert_eq!(matrix.count(1, SurveyYear::Y2021), 0);
        assert_eq!(matrix.count(2, SurveyYear::Y2022), 2);
        assert_eq!(matrix.max_count(), 3);
    }
}
