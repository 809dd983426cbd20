use std::process::ExitCode;

use anyhow::Context;
use continent_chart::app::ChartApp;
use continent_chart::config::ChartConfig;
use continent_chart::data::loader;
use continent_chart::state::ChartState;
use continent_chart::style::StyleTable;
use eframe::egui;

fn main() -> ExitCode {
    env_logger::init();

    ExitCode::from(exit_status(run(ChartConfig::default())))
}

/// Log a failed run once and map it to the process exit status.
fn exit_status(result: anyhow::Result<()>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            log::error!("{e:#}");
            1
        }
    }
}

/// Load the data, then show the chart and block until the window is closed.
fn run(config: ChartConfig) -> anyhow::Result<()> {
    let styles = StyleTable::standard();

    let dataset = loader::load_file(&config.data_path)
        .with_context(|| format!("loading {}", config.data_path.display()))?;
    let state = ChartState::new(config, &dataset, &styles);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(state.config.window_size)
            .with_min_inner_size(state.config.min_window_size),
        ..Default::default()
    };
    let window_title = state.config.window_title.clone();

    eframe::run_native(
        &window_title,
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::light());
            Ok(Box::new(ChartApp::new(state)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("starting the chart window: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_input_fails_before_any_window_opens() {
        let config = ChartConfig {
            data_path: "no/such/dir/data.csv".into(),
            ..ChartConfig::default()
        };
        let err = run(config).unwrap_err();
        assert!(format!("{err:#}").contains("no/such/dir/data.csv"));
        assert_eq!(exit_status(Err(err)), 1);
    }

    #[test]
    fn successful_run_exits_cleanly() {
        assert_eq!(exit_status(Ok(())), 0);
    }
}
