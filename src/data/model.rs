use std::collections::BTreeSet;
use std::fmt;

use super::error::DataError;

// ---------------------------------------------------------------------------
// Outcome – binary mission result
// ---------------------------------------------------------------------------

/// Mission result. The source data encodes this as a 0/1 indicator column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// The 0/1 indicator used by the source table and the success-count sum.
    pub fn indicator(self) -> u8 {
        match self {
            Outcome::Failure => 0,
            Outcome::Success => 1,
        }
    }

    /// Parse the indicator form. Anything other than 0/1 is rejected.
    pub fn from_indicator(value: i64) -> Option<Self> {
        match value {
            0 => Some(Outcome::Failure),
            1 => Some(Outcome::Success),
            _ => None,
        }
    }

    pub fn is_success(self) -> bool {
        matches!(self, Outcome::Success)
    }
}

impl From<bool> for Outcome {
    fn from(success: bool) -> Self {
        if success {
            Outcome::Success
        } else {
            Outcome::Failure
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Failure => write!(f, "Failure"),
            Outcome::Success => write!(f, "Success"),
        }
    }
}

// ---------------------------------------------------------------------------
// Mission – one row of the loaded table
// ---------------------------------------------------------------------------

/// A single launch record (one row of the source table). Immutable once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct Mission {
    /// Categorical launch-site identifier.
    pub launch_site: String,
    /// Payload mass in kilograms. Finite and non-negative.
    pub payload_mass_kg: f64,
    /// Categorical vehicle-variant label.
    pub booster_version_category: String,
    pub outcome: Outcome,
}

// ---------------------------------------------------------------------------
// MissionDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with precomputed category indices and payload
/// bounds. Read-only for the process lifetime after construction.
#[derive(Debug, Clone)]
pub struct MissionDataset {
    /// All missions, in load order.
    pub missions: Vec<Mission>,
    /// Sorted distinct launch sites present in the data.
    pub sites: Vec<String>,
    /// Sorted distinct booster version categories present in the data.
    pub booster_categories: Vec<String>,
    /// Minimum payload mass across all missions.
    pub payload_min: f64,
    /// Maximum payload mass across all missions.
    pub payload_max: f64,
}

impl MissionDataset {
    /// Build the category indices and payload bounds from loaded missions.
    /// A table with zero rows has undefined bounds and is rejected.
    pub fn from_missions(missions: Vec<Mission>) -> Result<Self, DataError> {
        if missions.is_empty() {
            return Err(DataError::EmptyDataset);
        }

        let mut sites: BTreeSet<&str> = BTreeSet::new();
        let mut categories: BTreeSet<&str> = BTreeSet::new();
        let mut payload_min = f64::INFINITY;
        let mut payload_max = f64::NEG_INFINITY;

        for m in &missions {
            sites.insert(m.launch_site.as_str());
            categories.insert(m.booster_version_category.as_str());
            payload_min = payload_min.min(m.payload_mass_kg);
            payload_max = payload_max.max(m.payload_mass_kg);
        }

        let sites = sites.into_iter().map(str::to_string).collect();
        let booster_categories = categories.into_iter().map(str::to_string).collect();

        Ok(MissionDataset {
            missions,
            sites,
            booster_categories,
            payload_min,
            payload_max,
        })
    }

    /// Number of missions.
    pub fn len(&self) -> usize {
        self.missions.len()
    }

    /// Whether the dataset is empty (never true for a constructed dataset).
    pub fn is_empty(&self) -> bool {
        self.missions.is_empty()
    }
}

// ---------------------------------------------------------------------------
// SiteSelection – the launch-site control value
// ---------------------------------------------------------------------------

/// Current value of the launch-site selector: every site, or exactly one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteSelection {
    All,
    Site(String),
}

impl SiteSelection {
    /// Sentinel label shown in the dropdown for the all-sites view.
    pub const ALL_LABEL: &'static str = "ALL";

    pub fn label(&self) -> &str {
        match self {
            SiteSelection::All => Self::ALL_LABEL,
            SiteSelection::Site(site) => site,
        }
    }
}
