use eframe::egui;

use crate::state::ChartState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct ChartApp {
    pub state: ChartState,
}

impl ChartApp {
    pub fn new(state: ChartState) -> Self {
        Self { state }
    }
}

impl eframe::App for ChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title ----
        egui::TopBottomPanel::top("title_bar")
            .show_separator_line(false)
            .show(ctx, |ui| {
                panels::title_bar(ui, &self.state.config);
            });

        // ---- Right side panel: legend, outside the plot area ----
        if !self.state.is_empty() {
            egui::SidePanel::right("legend_panel")
                .exact_width(self.state.config.legend_width)
                .resizable(false)
                .show_separator_line(false)
                .show(ctx, |ui| {
                    panels::legend(ui, &self.state.layers);
                });
        }

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::line_chart(ui, &self.state);
        });
    }
}
