use std::collections::BTreeMap;

use eframe::egui::{Color32, RichText, Ui};
use egui_plot::{Bar, BarChart, Legend, Plot, Points};

use crate::data::model::Outcome;
use crate::data::transform::OutcomeSummary;
use crate::state::AppState;

// Fixed outcome colours matching the original dashboard.
const FAILURE_COLOR: Color32 = Color32::from_rgb(220, 50, 50);
const SUCCESS_COLOR: Color32 = Color32::from_rgb(60, 110, 220);

fn outcome_color(outcome: Outcome) -> Color32 {
    match outcome {
        Outcome::Failure => FAILURE_COLOR,
        Outcome::Success => SUCCESS_COLOR,
    }
}

// ---------------------------------------------------------------------------
// Outcome-distribution chart (upper half of the central panel)
// ---------------------------------------------------------------------------

/// Render the outcome-distribution bar chart for the current site selection.
pub fn outcome_chart(ui: &mut Ui, state: &AppState, height: f32) {
    let Some(summary) = &state.outcome_summary else {
        return;
    };

    let (title, labels, bars): (String, Vec<String>, Vec<Bar>) = match summary {
        OutcomeSummary::BySite(rows) => {
            let labels: Vec<String> = rows.iter().map(|r| r.site.clone()).collect();
            let bars = rows
                .iter()
                .enumerate()
                .map(|(i, r)| {
                    let color = state
                        .site_colors
                        .as_ref()
                        .map(|cm| cm.color_for(&r.site))
                        .unwrap_or(Color32::LIGHT_BLUE);
                    Bar::new(i as f64, r.success_count as f64)
                        .name(&r.site)
                        .fill(color)
                })
                .collect();
            ("Successful launches by site".to_string(), labels, bars)
        }
        OutcomeSummary::ByOutcome(rows) => {
            let labels: Vec<String> = rows.iter().map(|r| r.outcome.to_string()).collect();
            let bars = rows
                .iter()
                .enumerate()
                .map(|(i, r)| {
                    Bar::new(i as f64, r.count as f64)
                        .name(r.outcome.to_string())
                        .fill(outcome_color(r.outcome))
                })
                .collect();
            let title = format!("Outcomes at {}", state.selected_site.label());
            (title, labels, bars)
        }
    };

    ui.label(RichText::new(title).strong());

    Plot::new("outcome_distribution")
        .height(height)
        .legend(Legend::default())
        .y_axis_label("Launches")
        .x_axis_formatter(move |mark, _range| {
            let i = mark.value.round();
            if i < 0.0 || (mark.value - i).abs() > 1e-6 {
                return String::new();
            }
            labels.get(i as usize).cloned().unwrap_or_default()
        })
        .allow_drag(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}

// ---------------------------------------------------------------------------
// Payload-correlation chart (lower half of the central panel)
// ---------------------------------------------------------------------------

/// Render the payload-vs-outcome scatter chart. In the all-sites view the
/// points are grouped and coloured by booster version category; the
/// single-site view is a single series.
pub fn correlation_chart(ui: &mut Ui, state: &AppState, height: f32) {
    if state.dataset.is_none() {
        return;
    }

    let title = format!(
        "Payload vs. outcome at site: {}",
        state.selected_site.label()
    );
    ui.label(RichText::new(title).strong());

    // Group points into one series per booster category; points without a
    // category (single-site view) fall into one unnamed series.
    let mut series: BTreeMap<Option<&str>, Vec<[f64; 2]>> = BTreeMap::new();
    for p in &state.scatter_points {
        series
            .entry(p.booster_version_category.as_deref())
            .or_default()
            .push([p.payload_mass_kg, f64::from(p.outcome.indicator())]);
    }

    Plot::new("payload_correlation")
        .height(height)
        .legend(Legend::default())
        .x_axis_label("Payload mass (kg)")
        .y_axis_label("Outcome")
        .y_axis_formatter(|mark, _range| {
            if mark.value == 0.0 {
                "Failure".to_string()
            } else if mark.value == 1.0 {
                "Success".to_string()
            } else {
                String::new()
            }
        })
        .include_y(-0.25)
        .include_y(1.25)
        .show(ui, |plot_ui| {
            for (category, coords) in series {
                let mut points = Points::new(coords).radius(3.5);
                points = match category {
                    Some(cat) => {
                        let color = state
                            .booster_colors
                            .as_ref()
                            .map(|cm| cm.color_for(cat))
                            .unwrap_or(Color32::LIGHT_BLUE);
                        points.name(cat).color(color)
                    }
                    None => points
                        .name(state.selected_site.label())
                        .color(Color32::LIGHT_BLUE),
                };
                plot_ui.points(points);
            }
        });
}
