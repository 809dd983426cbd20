//! Internet users per continent: load a `continent,year,population` table,
//! group it by continent and draw it as an interactive line chart.

pub mod app;
pub mod config;
pub mod data;
pub mod state;
pub mod style;
pub mod ui;
