use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::model::SiteSelection;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – launch-site and payload-range controls
// ---------------------------------------------------------------------------

/// Render the left control panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Controls");
    ui.separator();

    let Some(dataset) = &state.dataset else {
        ui.label("No dataset loaded.");
        return;
    };

    // Clone what we need so we can mutate state below.
    let sites = dataset.sites.clone();
    let (payload_min, payload_max) = (dataset.payload_min, dataset.payload_max);
    let n_missions = dataset.len();

    // ---- Launch-site selector ----
    ui.strong("Launch site");
    let current_label = state.selected_site.label().to_string();
    egui::ComboBox::from_id_salt("site_select")
        .selected_text(&current_label)
        .show_ui(ui, |ui: &mut Ui| {
            if ui
                .selectable_label(
                    state.selected_site == SiteSelection::All,
                    SiteSelection::ALL_LABEL,
                )
                .clicked()
            {
                state.select_site(SiteSelection::All);
            }
            for site in &sites {
                if ui
                    .selectable_label(current_label == *site, site)
                    .clicked()
                {
                    state.select_site(SiteSelection::Site(site.clone()));
                }
            }
        });

    ui.separator();

    // ---- Payload range ----
    // Each slider is clamped by the other's current value, so low <= high
    // holds structurally and the transform never sees a reversed range.
    ui.strong("Payload range (kg)");
    let [mut low, mut high] = state.payload_range;
    let mut changed = false;

    let high_cap = high;
    changed |= ui
        .add(egui::Slider::new(&mut low, payload_min..=high_cap).text("low"))
        .changed();
    let low_floor = low;
    changed |= ui
        .add(egui::Slider::new(&mut high, low_floor..=payload_max).text("high"))
        .changed();

    if changed {
        state.set_payload_range([low, high]);
    }

    ui.separator();
    ui.label(format!(
        "{n_missions} missions across {} sites",
        sites.len()
    ));
    ui.label(format!(
        "{} in current payload window",
        state.scatter_points.len()
    ));
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!("{} launch records loaded", ds.len()));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open launch records")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        state.loading = true;
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} missions from {} sites",
                    dataset.len(),
                    dataset.sites.len()
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e}");
                state.status_message = Some(format!("Error: {e}"));
                state.loading = false;
            }
        }
    }
}
