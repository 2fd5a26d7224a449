use std::collections::BTreeMap;

use eframe::egui::{Color32, RichText, Ui};
use egui_plot::{Bar, BarChart, BoxElem, BoxPlot, BoxSpread, Legend, Plot, Points};

use crate::state::AppState;

/// Bin count of the price histogram.
pub const HISTOGRAM_BINS: usize = 15;

// ---------------------------------------------------------------------------
// Central panel – metrics row + four charts
// ---------------------------------------------------------------------------

/// Render the metrics row and the 2×2 chart grid over the filtered view.
pub fn dashboard(ui: &mut Ui, state: &AppState) {
    metrics_row(ui, state);
    ui.separator();

    let spacing = ui.spacing().item_spacing.y;
    let chart_height = ((ui.available_height() - 4.0 * spacing) / 2.0 - 20.0).max(140.0);

    ui.columns(2, |cols| {
        price_histogram(&mut cols[0], state, chart_height);
        price_by_company(&mut cols[1], state, chart_height);
    });
    ui.columns(2, |cols| {
        ram_vs_price(&mut cols[0], state, chart_height);
        weight_vs_price(&mut cols[1], state, chart_height);
    });
}

fn metrics_row(ui: &mut Ui, state: &AppState) {
    let metrics = &state.metrics;
    ui.columns(3, |cols| {
        stat(&mut cols[0], "Laptops", &metrics.count.to_string());
        stat(&mut cols[1], "Average price", &metrics.price_label());
        stat(&mut cols[2], "Average RAM", &metrics.ram_label());
    });
}

fn stat(ui: &mut Ui, label: &str, value: &str) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(label);
        ui.heading(RichText::new(value).strong());
    });
}

// ---------------------------------------------------------------------------
// Price histogram
// ---------------------------------------------------------------------------

fn price_histogram(ui: &mut Ui, state: &AppState, height: f32) {
    ui.strong("Price distribution");

    let prices: Vec<f64> = state
        .visible_indices
        .iter()
        .map(|&i| state.dataset.laptops[i].price)
        .collect();

    Plot::new("price_histogram")
        .height(height)
        .allow_scroll(false)
        .x_axis_label("Price")
        .y_axis_label("Laptops")
        .show(ui, |plot_ui| {
            if let Some(hist) = histogram(&prices, HISTOGRAM_BINS) {
                let bars: Vec<Bar> = hist
                    .bins
                    .iter()
                    .map(|&(center, count)| {
                        Bar::new(center, count as f64).width(hist.bin_width * 0.95)
                    })
                    .collect();
                plot_ui.bar_chart(BarChart::new(bars).color(Color32::LIGHT_BLUE).name("Price"));
            }
        });
}

// ---------------------------------------------------------------------------
// Price by company box plot
// ---------------------------------------------------------------------------

fn price_by_company(ui: &mut Ui, state: &AppState, height: f32) {
    ui.strong("Price by company");

    // Group in sorted company order so box positions are stable.
    let mut by_company: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for &i in &state.visible_indices {
        let laptop = &state.dataset.laptops[i];
        by_company
            .entry(laptop.company.as_str())
            .or_default()
            .push(laptop.price);
    }

    let companies: Vec<String> = by_company.keys().map(|s| s.to_string()).collect();
    let tick_names = companies.clone();

    Plot::new("price_by_company")
        .height(height)
        .allow_scroll(false)
        .legend(Legend::default())
        .y_axis_label("Price")
        .x_axis_formatter(move |mark, _range| {
            let i = mark.value.round();
            if (mark.value - i).abs() < 1e-6 && i >= 0.0 && (i as usize) < tick_names.len() {
                tick_names[i as usize].clone()
            } else {
                String::new()
            }
        })
        .show(ui, |plot_ui| {
            for (pos, company) in companies.iter().enumerate() {
                let mut prices = by_company[company.as_str()].clone();
                prices.sort_by(f64::total_cmp);
                let Some(summary) = five_number_summary(&prices) else {
                    continue;
                };

                let elem = BoxElem::new(
                    pos as f64,
                    BoxSpread::new(
                        summary.lower_whisker,
                        summary.q1,
                        summary.median,
                        summary.q3,
                        summary.upper_whisker,
                    ),
                )
                .box_width(0.5);

                plot_ui.box_plot(
                    BoxPlot::new(vec![elem])
                        .name(company)
                        .color(state.company_colors.color_for(company)),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Scatter plots
// ---------------------------------------------------------------------------

fn ram_vs_price(ui: &mut Ui, state: &AppState, height: f32) {
    ui.strong("RAM vs price");

    // One Points series per (company, screen size) pair: egui_plot radii are
    // per-series, and the legend merges entries with the same name.
    let mut groups: BTreeMap<(&str, u32), Vec<[f64; 2]>> = BTreeMap::new();
    for &i in &state.visible_indices {
        let laptop = &state.dataset.laptops[i];
        let inches_tenths = (laptop.inches * 10.0).round() as u32;
        groups
            .entry((laptop.company.as_str(), inches_tenths))
            .or_default()
            .push([f64::from(laptop.ram_gb), laptop.price]);
    }

    Plot::new("ram_vs_price")
        .height(height)
        .allow_scroll(false)
        .legend(Legend::default())
        .x_axis_label("RAM (GB)")
        .y_axis_label("Price")
        .show(ui, |plot_ui| {
            for ((company, inches_tenths), points) in &groups {
                plot_ui.points(
                    Points::new(points.clone())
                        .name(company)
                        .color(state.company_colors.color_for(company))
                        .radius(inches_radius(f64::from(*inches_tenths) / 10.0))
                        .filled(true),
                );
            }
        });
}

fn weight_vs_price(ui: &mut Ui, state: &AppState, height: f32) {
    ui.strong("Weight vs price");

    let mut groups: BTreeMap<&str, Vec<[f64; 2]>> = BTreeMap::new();
    for &i in &state.visible_indices {
        let laptop = &state.dataset.laptops[i];
        groups
            .entry(laptop.type_name.as_str())
            .or_default()
            .push([laptop.weight_kg, laptop.price]);
    }

    Plot::new("weight_vs_price")
        .height(height)
        .allow_scroll(false)
        .legend(Legend::default())
        .x_axis_label("Weight (kg)")
        .y_axis_label("Price")
        .show(ui, |plot_ui| {
            for (type_name, points) in &groups {
                plot_ui.points(
                    Points::new(points.clone())
                        .name(type_name)
                        .color(state.type_colors.color_for(type_name))
                        .radius(2.5)
                        .filled(true),
                );
            }
        });
}

/// Scale a screen diagonal to a point radius in plot pixels.
fn inches_radius(inches: f64) -> f32 {
    (inches as f32 * 0.35).clamp(2.0, 7.0)
}

// ---------------------------------------------------------------------------
// Chart statistics
// ---------------------------------------------------------------------------

pub(crate) struct Histogram {
    /// (bin center, count) per bin, in x order.
    pub bins: Vec<(f64, usize)>,
    pub bin_width: f64,
}

/// Equal-width binning over the value range. `None` when there is nothing to
/// bin; a single distinct value gets one unit-width bin.
pub(crate) fn histogram(values: &[f64], n_bins: usize) -> Option<Histogram> {
    if values.is_empty() || n_bins == 0 {
        return None;
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if min == max {
        return Some(Histogram {
            bins: vec![(min, values.len())],
            bin_width: 1.0,
        });
    }

    let bin_width = (max - min) / n_bins as f64;
    let mut counts = vec![0usize; n_bins];
    for &v in values {
        let idx = (((v - min) / bin_width) as usize).min(n_bins - 1);
        counts[idx] += 1;
    }

    let bins = counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| (min + (i as f64 + 0.5) * bin_width, count))
        .collect();

    Some(Histogram { bins, bin_width })
}

pub(crate) struct FiveNumber {
    pub lower_whisker: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub upper_whisker: f64,
}

/// Box-plot statistics over sorted values: quartiles by linear interpolation,
/// whiskers at the most extreme values within 1.5·IQR of the box.
pub(crate) fn five_number_summary(sorted: &[f64]) -> Option<FiveNumber> {
    if sorted.is_empty() {
        return None;
    }

    let q1 = quantile(sorted, 0.25);
    let median = quantile(sorted, 0.5);
    let q3 = quantile(sorted, 0.75);
    let iqr = q3 - q1;
    let lo_fence = q1 - 1.5 * iqr;
    let hi_fence = q3 + 1.5 * iqr;

    let lower_whisker = sorted
        .iter()
        .copied()
        .find(|&v| v >= lo_fence)
        .unwrap_or(q1);
    let upper_whisker = sorted
        .iter()
        .copied()
        .rev()
        .find(|&v| v <= hi_fence)
        .unwrap_or(q3);

    Some(FiveNumber {
        lower_whisker,
        q1,
        median,
        q3,
        upper_whisker,
    })
}

fn quantile(sorted: &[f64], p: f64) -> f64 {
    let pos = (sorted.len() - 1) as f64 * p;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn histogram_of_nothing_is_none() {
        assert!(histogram(&[], HISTOGRAM_BINS).is_none());
    }

    #[test]
    fn histogram_counts_every_value_once() {
        let values: Vec<f64> = (0..=14).map(f64::from).collect();
        let hist = histogram(&values, 15).unwrap();

        assert_eq!(hist.bins.len(), 15);
        let total: usize = hist.bins.iter().map(|&(_, c)| c).sum();
        assert_eq!(total, values.len());
        // Uniformly spread input lands one value per bin.
        assert!(hist.bins.iter().all(|&(_, c)| c == 1));
    }

    #[test]
    fn histogram_of_a_single_value_is_one_bin() {
        let hist = histogram(&[42.0, 42.0, 42.0], 15).unwrap();
        assert_eq!(hist.bins.len(), 1);
        assert_eq!(hist.bins[0], (42.0, 3));
    }

    #[test]
    fn quartiles_interpolate_linearly() {
        let summary = five_number_summary(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_eq!(summary.q1, 2.0);
        assert_eq!(summary.median, 3.0);
        assert_eq!(summary.q3, 4.0);
        assert_eq!(summary.lower_whisker, 1.0);
        assert_eq!(summary.upper_whisker, 5.0);
    }

    #[test]
    fn whiskers_exclude_outliers() {
        let summary = five_number_summary(&[1.0, 2.0, 3.0, 4.0, 100.0]).unwrap();
        // IQR fence is q3 + 1.5 * (q3 - q1) = 7.0, so 100.0 stays outside.
        assert_eq!(summary.upper_whisker, 4.0);
        assert_eq!(summary.lower_whisker, 1.0);
    }

    #[test]
    fn single_value_box_collapses() {
        let summary = five_number_summary(&[7.0]).unwrap();
        assert_eq!(summary.q1, 7.0);
        assert_eq!(summary.median, 7.0);
        assert_eq!(summary.q3, 7.0);
        assert_eq!(summary.lower_whisker, 7.0);
        assert_eq!(summary.upper_whisker, 7.0);
    }
}
