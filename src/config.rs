use std::path::PathBuf;

/// Text with a point size; `strong` renders it in the strong text color.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub size: f32,
    pub strong: bool,
}

impl Label {
    fn new(text: &str, size: f32) -> Self {
        Self {
            text: text.to_string(),
            size,
            strong: false,
        }
    }

    fn strong(mut self) -> Self {
        self.strong = true;
        self
    }
}

/// Everything about the chart that is fixed rather than data-driven.
///
/// Built once in `main` and handed to the app; nothing here is read from the
/// environment or the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    /// Input table, relative to the working directory.
    pub data_path: PathBuf,

    pub window_title: String,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],

    pub title: Label,
    /// Space above and below the title.
    pub title_padding: f32,
    pub x_label: Label,
    pub y_label: Label,

    /// Width of the legend panel to the right of the plot.
    pub legend_width: f32,
    /// Grid lines along x and y.
    pub grid: [bool; 2],
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data.csv"),
            window_title: "Internet Users Per Continent".to_string(),
            window_size: [1200.0, 800.0],
            min_window_size: [600.0, 400.0],
            title: Label::new("Internet Users Per Continent", 20.0).strong(),
            title_padding: 20.0,
            x_label: Label::new("Year", 14.0),
            y_label: Label::new("Internet Users (in Billions)", 14.0),
            legend_width: 160.0,
            grid: [true, true],
        }
    }
}
