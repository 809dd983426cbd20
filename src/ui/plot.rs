use eframe::egui::{FontFamily, RichText, Ui};
use egui_plot::{Line, LineStyle, MarkerShape, Plot, PlotPoints, Points};

use crate::config::Label;
use crate::state::{ChartState, PlotLayer};
use crate::style::LineKind;

const DASH_LENGTH: f32 = 10.0;

// ---------------------------------------------------------------------------
// Line chart (central panel)
// ---------------------------------------------------------------------------

pub fn label_text(label: &Label) -> RichText {
    let text = RichText::new(&label.text)
        .size(label.size)
        .family(FontFamily::Proportional);
    if label.strong {
        text.strong()
    } else {
        text
    }
}

/// Render every layer into one plot. With no layers the axes and grid are
/// still shown.
pub fn line_chart(ui: &mut Ui, state: &ChartState) {
    let config = &state.config;

    Plot::new("line_chart")
        .x_axis_label(label_text(&config.x_label))
        .y_axis_label(label_text(&config.y_label))
        .show_grid(config.grid)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for layer in &state.layers {
                plot_ui.line(series_line(layer));
                if let Some(points) = series_markers(layer) {
                    plot_ui.points(points);
                }
            }
        });
}

fn series_line(layer: &PlotLayer) -> Line<'_> {
    let style = match layer.style.line {
        LineKind::Solid => LineStyle::Solid,
        LineKind::Dashed => LineStyle::Dashed {
            length: DASH_LENGTH,
        },
    };
    Line::new(PlotPoints::new(layer.points.clone()))
        .name(&layer.name)
        .color(layer.style.color)
        .width(layer.style.width)
        .style(style)
}

fn series_markers(layer: &PlotLayer) -> Option<Points<'_>> {
    let marker = layer.style.marker?;
    Some(
        Points::new(PlotPoints::new(layer.points.clone()))
            .name(&layer.name)
            .shape(MarkerShape::Circle)
            .filled(true)
            .radius(marker.radius)
            .color(layer.style.color),
    )
}
