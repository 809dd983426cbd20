use eframe::egui::{self, Painter, Rect, Sense, Shape, Stroke, Ui};

use crate::config::ChartConfig;
use crate::state::PlotLayer;
use crate::style::{LineKind, SeriesStyle};

use super::plot::label_text;

const SWATCH_WIDTH: f32 = 32.0;

// ---------------------------------------------------------------------------
// Title bar
// ---------------------------------------------------------------------------

pub fn title_bar(ui: &mut Ui, config: &ChartConfig) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.add_space(config.title_padding);
        ui.label(label_text(&config.title));
        ui.add_space(config.title_padding);
    });
}

// ---------------------------------------------------------------------------
// Legend (right side panel)
// ---------------------------------------------------------------------------

/// One row per layer, in draw order, centered vertically in the panel.
pub fn legend(ui: &mut Ui, layers: &[PlotLayer]) {
    let row_height = ui.spacing().interact_size.y;
    let content_height = layers.len() as f32 * (row_height + ui.spacing().item_spacing.y);
    ui.add_space(((ui.available_height() - content_height) / 2.0).max(0.0));

    for layer in layers {
        ui.horizontal(|ui: &mut Ui| {
            let (rect, _) =
                ui.allocate_exact_size(egui::vec2(SWATCH_WIDTH, row_height), Sense::hover());
            paint_swatch(ui.painter(), rect, &layer.style);
            ui.label(&layer.name);
        });
    }
}

/// Short sample of the series' line and marker.
fn paint_swatch(painter: &Painter, rect: Rect, style: &SeriesStyle) {
    let y = rect.center().y;
    let ends = [
        egui::pos2(rect.left() + 2.0, y),
        egui::pos2(rect.right() - 2.0, y),
    ];
    let stroke = Stroke::new(style.width, style.color);

    match style.line {
        LineKind::Solid => {
            painter.line_segment(ends, stroke);
        }
        LineKind::Dashed => {
            painter.extend(Shape::dashed_line(&ends, stroke, 6.0, 3.0));
        }
    }
    if let Some(marker) = style.marker {
        painter.circle_filled(rect.center(), marker.radius + 1.0, style.color);
    }
}
