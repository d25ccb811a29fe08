//! Plotly chart builders.
//!
//! Each builder turns an ordered aggregate into a `plotly::Plot`. The
//! builders never inspect the rendered output; the report only embeds it.
use plotly::color::Rgba;
use plotly::common::{Font, Marker, TextPosition, Title};
use plotly::layout::{Axis, AxisType, Layout, Legend};
use plotly::{Bar, Pie, Plot};

use crate::aggregate::{labels_and_measures, AggregateEntry};
use crate::config::ChartTheme;

/// Per-chart options: title, size and axis/legend captions.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub title: String,
    pub width: usize,
    pub height: usize,
    pub x_title: Option<String>,
    pub y_title: Option<String>,
    pub legend_title: Option<String>,
}

impl ChartLayout {
    pub fn new(title: &str, width: usize, height: usize) -> Self {
        Self {
            title: title.to_string(),
            width,
            height,
            x_title: None,
            y_title: None,
            legend_title: None,
        }
    }

    pub fn axis_titles(mut self, x_title: &str, y_title: &str) -> Self {
        self.x_title = Some(x_title.to_string());
        self.y_title = Some(y_title.to_string());
        self
    }

    pub fn legend_title(mut self, legend_title: &str) -> Self {
        self.legend_title = Some(legend_title.to_string());
        self
    }
}

/// Proportional chart: one slice per entry, sized by its measure, with the
/// theme's hole cut out of the middle.
pub fn plot_donut<T: AggregateEntry>(
    entries: &[T],
    layout: &ChartLayout,
    theme: &ChartTheme,
) -> Plot {
    let (labels, values) = labels_and_measures(entries);

    let trace = Pie::new(values).labels(labels).hole(theme.donut_hole);

    let mut chart_layout = base_layout(layout, theme);
    if let Some(legend_title) = &layout.legend_title {
        chart_layout =
            chart_layout.legend(Legend::new().title(Title::from(legend_title.as_str())));
    }

    let mut plot = Plot::new();
    plot.add_trace(trace);
    plot.set_layout(chart_layout);
    plot
}

/// Categorical bar chart: one bar per entry in the given order. With
/// `label_bars` each bar carries its measure as text.
pub fn plot_bars<T: AggregateEntry>(
    entries: &[T],
    layout: &ChartLayout,
    theme: &ChartTheme,
    label_bars: bool,
) -> Plot {
    let (labels, values) = labels_and_measures(entries);

    let mut trace = Bar::new(labels, values.clone());
    if let Some(color) = theme.palette.first() {
        trace = trace.marker(Marker::new().color(color.clone()));
    }
    if label_bars {
        let text: Vec<String> = values.iter().map(|v| format_measure(*v)).collect();
        trace = trace.text_array(text).text_position(TextPosition::Auto);
    }

    let chart_layout = base_layout(layout, theme)
        .show_legend(false)
        .x_axis(axis(layout.x_title.as_deref(), theme).type_(AxisType::Category))
        .y_axis(axis(layout.y_title.as_deref(), theme));

    let mut plot = Plot::new();
    plot.add_trace(trace);
    plot.set_layout(chart_layout);
    plot
}

fn base_layout(layout: &ChartLayout, theme: &ChartTheme) -> Layout {
    let mut chart_layout = Layout::new()
        .title(layout.title.as_str())
        .width(layout.width)
        .height(layout.height)
        .colorway(theme.palette.clone())
        .font(Font::new().color(theme.text_color.clone()));

    if theme.transparent_background {
        chart_layout = chart_layout
            .plot_background_color(Rgba::new(0, 0, 0, 0.0))
            .paper_background_color(Rgba::new(0, 0, 0, 0.0));
    }
    chart_layout
}

fn axis(title: Option<&str>, theme: &ChartTheme) -> Axis {
    let mut axis = Axis::new()
        .show_line(true)
        .line_width(1)
        .line_color(theme.text_color.clone());
    if let Some(title) = title {
        axis = axis.title(title);
    }
    axis
}

/// Counts render without decimals, everything else with two.
fn format_measure(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::JobDemand;

    fn demand() -> Vec<JobDemand> {
        vec![
            JobDemand {
                job_title: "Driver".to_string(),
                vacancies: 12,
            },
            JobDemand {
                job_title: "Sales representative".to_string(),
                vacancies: 7,
            },
        ]
    }

    #[test]
    fn donut_carries_labels_and_hole() {
        let plot = plot_donut(
            &demand(),
            &ChartLayout::new("Top jobs", 800, 500).legend_title("Job Title"),
            &ChartTheme::default(),
        );
        let json = plot.to_json();
        assert!(json.contains("\"pie\""));
        assert!(json.contains("Driver"));
        assert!(json.contains("0.3"));
        assert!(json.contains("Job Title"));
    }

    #[test]
    fn bars_use_category_axis_and_count_text() {
        let plot = plot_bars(
            &demand(),
            &ChartLayout::new("Demand", 700, 500).axis_titles("Job", "Vacancies"),
            &ChartTheme::default(),
            true,
        );
        let json = plot.to_json();
        assert!(json.contains("\"bar\""));
        assert!(json.contains("\"category\""));
        assert!(json.contains("\"12\""));
        assert!(json.contains("Vacancies"));
    }

    #[test]
    fn measure_formatting() {
        assert_eq!(format_measure(547.0), "547");
        assert_eq!(format_measure(4676.456), "4676.46");
    }
}
