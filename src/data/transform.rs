use std::collections::BTreeMap;

use super::error::DataError;
use super::model::{MissionDataset, Outcome, SiteSelection};

// ---------------------------------------------------------------------------
// Chart-ready row types
// ---------------------------------------------------------------------------

/// One bar of the all-sites outcome chart: successes recorded at a site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteSuccessRow {
    pub site: String,
    pub success_count: u64,
}

/// One bar of the single-site outcome chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutcomeCountRow {
    pub outcome: Outcome,
    pub count: u64,
}

/// Output of [`summarize_outcomes`]. The two shapes are mutually exclusive:
/// the all-sites view counts successes per site, the single-site view counts
/// failures and successes at one site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutcomeSummary {
    /// One row per distinct site, in sorted site order.
    BySite(Vec<SiteSuccessRow>),
    /// Exactly two rows, in fixed order `[Failure, Success]`.
    ByOutcome([OutcomeCountRow; 2]),
}

/// One point of the payload-vs-outcome scatter chart. The booster category is
/// carried only in the all-sites view, where it is the extra color dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub payload_mass_kg: f64,
    pub outcome: Outcome,
    pub booster_version_category: Option<String>,
}

// ---------------------------------------------------------------------------
// Outcome-aggregation transform
// ---------------------------------------------------------------------------

/// Derive the outcome-distribution chart table from the current site selection.
///
/// All-sites view: group by launch site and sum the 0/1 outcome indicator,
/// yielding the success count per site (failures are not separately counted
/// in this branch). Single-site view: count failures and successes at the
/// selected site. A selection naming a site absent from the data yields two
/// zero-count rows, never an error.
pub fn summarize_outcomes(dataset: &MissionDataset, selection: &SiteSelection) -> OutcomeSummary {
    match selection {
        SiteSelection::All => {
            let mut successes_by_site: BTreeMap<&str, u64> = BTreeMap::new();
            for m in &dataset.missions {
                *successes_by_site.entry(m.launch_site.as_str()).or_insert(0) +=
                    u64::from(m.outcome.indicator());
            }
            OutcomeSummary::BySite(
                successes_by_site
                    .into_iter()
                    .map(|(site, success_count)| SiteSuccessRow {
                        site: site.to_string(),
                        success_count,
                    })
                    .collect(),
            )
        }
        SiteSelection::Site(site) => {
            let mut failures = 0;
            let mut successes = 0;
            for m in dataset.missions.iter().filter(|m| &m.launch_site == site) {
                match m.outcome {
                    Outcome::Failure => failures += 1,
                    Outcome::Success => successes += 1,
                }
            }
            OutcomeSummary::ByOutcome([
                OutcomeCountRow {
                    outcome: Outcome::Failure,
                    count: failures,
                },
                OutcomeCountRow {
                    outcome: Outcome::Success,
                    count: successes,
                },
            ])
        }
    }
}

// ---------------------------------------------------------------------------
// Payload-correlation transform
// ---------------------------------------------------------------------------

/// Derive the payload-vs-outcome scatter table from the current site
/// selection and payload range (inclusive both ends, kilograms).
///
/// Output preserves dataset order and may legitimately be empty. The caller
/// is expected to hand in `low <= high`; a reversed range is an integration
/// error and fails with [`DataError::InvalidRange`].
pub fn correlation_points(
    dataset: &MissionDataset,
    selection: &SiteSelection,
    payload_range: [f64; 2],
) -> Result<Vec<ScatterPoint>, DataError> {
    let [low, high] = payload_range;
    if low > high {
        return Err(DataError::InvalidRange { low, high });
    }

    let points = dataset
        .missions
        .iter()
        .filter(|m| low <= m.payload_mass_kg && m.payload_mass_kg <= high)
        .filter(|m| match selection {
            SiteSelection::All => true,
            SiteSelection::Site(site) => &m.launch_site == site,
        })
        .map(|m| ScatterPoint {
            payload_mass_kg: m.payload_mass_kg,
            outcome: m.outcome,
            booster_version_category: match selection {
                SiteSelection::All => Some(m.booster_version_category.clone()),
                SiteSelection::Site(_) => None,
            },
        })
        .collect();

    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Mission;

    fn mission(site: &str, kg: f64, booster: &str, success: bool) -> Mission {
        Mission {
            launch_site: site.to_string(),
            payload_mass_kg: kg,
            booster_version_category: booster.to_string(),
            outcome: Outcome::from(success),
        }
    }

    fn dataset(missions: Vec<Mission>) -> MissionDataset {
        MissionDataset::from_missions(missions).unwrap()
    }

    fn example_dataset() -> MissionDataset {
        dataset(vec![
            mission("siteA", 500.0, "v1", true),
            mission("siteA", 1200.0, "v1", false),
            mission("siteB", 800.0, "v2", true),
        ])
    }

    #[test]
    fn all_sites_one_row_per_site() {
        let ds = dataset(vec![
            mission("CCAFS LC-40", 500.0, "v1.0", true),
            mission("CCAFS LC-40", 600.0, "v1.0", true),
            mission("KSC LC-39A", 4500.0, "FT", false),
            mission("VAFB SLC-4E", 3200.0, "v1.1", true),
        ]);

        let OutcomeSummary::BySite(rows) = summarize_outcomes(&ds, &SiteSelection::All) else {
            panic!("expected per-site rows for the ALL selection");
        };

        assert_eq!(rows.len(), ds.sites.len());
        let total_successes: u64 = rows.iter().map(|r| r.success_count).sum();
        let expected: u64 = ds.missions.iter().filter(|m| m.outcome.is_success()).count() as u64;
        assert_eq!(total_successes, expected);

        // Sorted site order; a site with zero successes still gets a row.
        assert_eq!(rows[0].site, "CCAFS LC-40");
        assert_eq!(rows[0].success_count, 2);
        assert_eq!(rows[1].site, "KSC LC-39A");
        assert_eq!(rows[1].success_count, 0);
        assert_eq!(rows[2].site, "VAFB SLC-4E");
        assert_eq!(rows[2].success_count, 1);
    }

    #[test]
    fn single_site_two_rows_fixed_order() {
        let ds = dataset(vec![
            mission("siteA", 500.0, "v1", true),
            mission("siteA", 700.0, "v1", false),
            mission("siteA", 900.0, "v1", false),
            mission("siteB", 800.0, "v2", true),
        ]);

        let OutcomeSummary::ByOutcome(rows) =
            summarize_outcomes(&ds, &SiteSelection::Site("siteA".into()))
        else {
            panic!("expected outcome rows for a single-site selection");
        };

        assert_eq!(rows[0].outcome, Outcome::Failure);
        assert_eq!(rows[0].count, 2);
        assert_eq!(rows[1].outcome, Outcome::Success);
        assert_eq!(rows[1].count, 1);

        let site_total = ds
            .missions
            .iter()
            .filter(|m| m.launch_site == "siteA")
            .count() as u64;
        assert_eq!(rows[0].count + rows[1].count, site_total);
    }

    #[test]
    fn absent_site_yields_zero_counts() {
        let ds = example_dataset();

        let OutcomeSummary::ByOutcome(rows) =
            summarize_outcomes(&ds, &SiteSelection::Site("siteC".into()))
        else {
            panic!("expected outcome rows for a single-site selection");
        };

        assert_eq!(rows[0].outcome, Outcome::Failure);
        assert_eq!(rows[0].count, 0);
        assert_eq!(rows[1].outcome, Outcome::Success);
        assert_eq!(rows[1].count, 0);
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let ds = dataset(vec![
            mission("siteA", 500.0, "v1", true),
            mission("siteA", 1000.0, "v1", false),
            mission("siteB", 1000.1, "v2", true),
        ]);

        let points = correlation_points(&ds, &SiteSelection::All, [500.0, 1000.0]).unwrap();

        assert_eq!(points.len(), 2);
        assert!(points
            .iter()
            .all(|p| 500.0 <= p.payload_mass_kg && p.payload_mass_kg <= 1000.0));
    }

    #[test]
    fn site_branch_is_subset_without_category() {
        let ds = example_dataset();
        let range = [0.0, 2000.0];

        let all = correlation_points(&ds, &SiteSelection::All, range).unwrap();
        let site_a =
            correlation_points(&ds, &SiteSelection::Site("siteA".into()), range).unwrap();

        assert!(all.iter().all(|p| p.booster_version_category.is_some()));
        assert!(site_a.iter().all(|p| p.booster_version_category.is_none()));

        // Every site row matches an ALL row with the category dropped.
        let all_site_a: Vec<(f64, Outcome)> = ds
            .missions
            .iter()
            .filter(|m| m.launch_site == "siteA")
            .map(|m| (m.payload_mass_kg, m.outcome))
            .collect();
        let got: Vec<(f64, Outcome)> = site_a
            .iter()
            .map(|p| (p.payload_mass_kg, p.outcome))
            .collect();
        assert_eq!(got, all_site_a);
        assert!(site_a.len() <= all.len());
    }

    #[test]
    fn empty_result_is_valid() {
        let ds = example_dataset();
        let points = correlation_points(&ds, &SiteSelection::All, [10_000.0, 20_000.0]).unwrap();
        assert!(points.is_empty());
    }

    #[test]
    fn reversed_range_is_rejected() {
        let ds = example_dataset();

        let err = correlation_points(&ds, &SiteSelection::All, [1000.0, 500.0]).unwrap_err();
        match err {
            DataError::InvalidRange { low, high } => {
                assert_eq!(low, 1000.0);
                assert_eq!(high, 500.0);
            }
            other => panic!("expected InvalidRange, got {other:?}"),
        }

        let err =
            correlation_points(&ds, &SiteSelection::Site("siteA".into()), [1.0, 0.0]).unwrap_err();
        assert!(matches!(err, DataError::InvalidRange { .. }));
    }

    #[test]
    fn worked_example() {
        let ds = example_dataset();

        let OutcomeSummary::BySite(rows) = summarize_outcomes(&ds, &SiteSelection::All) else {
            panic!("expected per-site rows");
        };
        assert_eq!(
            rows,
            vec![
                SiteSuccessRow {
                    site: "siteA".into(),
                    success_count: 1
                },
                SiteSuccessRow {
                    site: "siteB".into(),
                    success_count: 1
                },
            ]
        );

        let OutcomeSummary::ByOutcome(rows) =
            summarize_outcomes(&ds, &SiteSelection::Site("siteA".into()))
        else {
            panic!("expected outcome rows");
        };
        assert_eq!(rows[0].count, 1);
        assert_eq!(rows[1].count, 1);

        let points = correlation_points(&ds, &SiteSelection::All, [0.0, 1000.0]).unwrap();
        assert_eq!(
            points,
            vec![
                ScatterPoint {
                    payload_mass_kg: 500.0,
                    outcome: Outcome::Success,
                    booster_version_category: Some("v1".into())
                },
                ScatterPoint {
                    payload_mass_kg: 800.0,
                    outcome: Outcome::Success,
                    booster_version_category: Some("v2".into())
                },
            ]
        );

        let points =
            correlation_points(&ds, &SiteSelection::Site("siteA".into()), [0.0, 2000.0]).unwrap();
        assert_eq!(
            points,
            vec![
                ScatterPoint {
                    payload_mass_kg: 500.0,
                    outcome: Outcome::Success,
                    booster_version_category: None
                },
                ScatterPoint {
                    payload_mass_kg: 1200.0,
                    outcome: Outcome::Failure,
                    booster_version_category: None
                },
            ]
        );
    }
}
