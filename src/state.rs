use crate::color::ColorMap;
use crate::data::model::{MissionDataset, SiteSelection};
use crate::data::transform::{correlation_points, summarize_outcomes, OutcomeSummary, ScatterPoint};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering: the two control values and
/// the chart tables freshly derived from them.
pub struct AppState {
    /// Loaded dataset (None until a file is loaded).
    pub dataset: Option<MissionDataset>,

    /// Launch-site selector value.
    pub selected_site: SiteSelection,

    /// Payload-mass range [low, high], kilograms. The controls keep
    /// low <= high within the dataset's payload bounds.
    pub payload_range: [f64; 2],

    /// Outcome-distribution chart table for the current controls.
    pub outcome_summary: Option<OutcomeSummary>,

    /// Payload-correlation chart table for the current controls.
    pub scatter_points: Vec<ScatterPoint>,

    /// Colours for the per-site bars in the all-sites view.
    pub site_colors: Option<ColorMap>,

    /// Colours for the booster-category scatter series in the all-sites view.
    pub booster_colors: Option<ColorMap>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether a file loading operation is in progress.
    pub loading: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            selected_site: SiteSelection::All,
            payload_range: [0.0, 0.0],
            outcome_summary: None,
            scatter_points: Vec::new(),
            site_colors: None,
            booster_colors: None,
            status_message: None,
            loading: false,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset: reset the controls to their defaults
    /// (all sites, full payload range), rebuild colour maps, derive charts.
    pub fn set_dataset(&mut self, dataset: MissionDataset) {
        self.selected_site = SiteSelection::All;
        self.payload_range = [dataset.payload_min, dataset.payload_max];
        self.site_colors = Some(ColorMap::new(dataset.sites.iter().cloned()));
        self.booster_colors = Some(ColorMap::new(dataset.booster_categories.iter().cloned()));

        self.dataset = Some(dataset);
        self.status_message = None;
        self.loading = false;
        self.recompute_charts();
    }

    /// Change the launch-site selection and re-derive both charts.
    pub fn select_site(&mut self, selection: SiteSelection) {
        if self.selected_site != selection {
            self.selected_site = selection;
            self.recompute_charts();
        }
    }

    /// Change the payload range and re-derive the correlation chart. The
    /// outcome summary does not depend on the range but is recomputed with
    /// it; both transforms are cheap and pure.
    pub fn set_payload_range(&mut self, range: [f64; 2]) {
        if self.payload_range != range {
            self.payload_range = range;
            self.recompute_charts();
        }
    }

    /// Re-run both transforms against the current control values.
    pub fn recompute_charts(&mut self) {
        let Some(dataset) = &self.dataset else {
            return;
        };

        self.outcome_summary = Some(summarize_outcomes(dataset, &self.selected_site));

        match correlation_points(dataset, &self.selected_site, self.payload_range) {
            Ok(points) => self.scatter_points = points,
            Err(e) => {
                // The range controls enforce low <= high, so this indicates
                // a wiring bug rather than user input.
                log::error!("correlation transform failed: {e}");
                self.status_message = Some(format!("Error: {e}"));
                self.scatter_points.clear();
            }
        }
    }
}
