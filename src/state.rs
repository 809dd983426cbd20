use crate::config::ChartConfig;
use crate::data::model::Dataset;
use crate::style::{SeriesStyle, StyleTable};

// ---------------------------------------------------------------------------
// Plot layers
// ---------------------------------------------------------------------------

/// One series, ready to draw: legend name, coordinates and style.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotLayer {
    pub name: String,
    pub points: Vec<[f64; 2]>,
    pub style: SeriesStyle,
}

/// Turn a dataset into layers in dataset order, so later layers draw on top
/// and the legend lists them in the same order.
pub fn build_layers(dataset: &Dataset, styles: &StyleTable) -> Vec<PlotLayer> {
    dataset
        .iter()
        .map(|series| {
            if !styles.is_known(series.category()) {
                log::warn!(
                    "No style for category '{}', using the default",
                    series.category()
                );
            }
            log::debug!(
                "Series '{}' with {} points",
                series.category(),
                series.len()
            );
            PlotLayer {
                name: series.category().to_string(),
                points: series.points().collect(),
                style: styles.style_for(series.category()),
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Chart state
// ---------------------------------------------------------------------------

/// What the window shows. Built once before the window opens.
pub struct ChartState {
    pub config: ChartConfig,
    pub layers: Vec<PlotLayer>,
}

impl ChartState {
    pub fn new(config: ChartConfig, dataset: &Dataset, styles: &StyleTable) -> Self {
        if dataset.is_empty() {
            log::warn!("Dataset is empty, the chart will have no series");
        }
        Self {
            config,
            layers: build_layers(dataset, styles),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}
