use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{named, Srgb};

/// Category drawn as the aggregate total.
pub const WORLD: &str = "World";

// ---------------------------------------------------------------------------
// Per-series visual encoding
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Solid,
    Dashed,
}

/// Filled circle drawn at every data point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub radius: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesStyle {
    pub color: Color32,
    pub line: LineKind,
    pub marker: Option<Marker>,
    pub width: f32,
}

const LINE_WIDTH: f32 = 1.5;
const MARKER_RADIUS: f32 = 2.0;

impl SeriesStyle {
    /// Solid line with a small circle on each point.
    pub fn marked(color: Color32) -> Self {
        Self {
            color,
            line: LineKind::Solid,
            marker: Some(Marker {
                radius: MARKER_RADIUS,
            }),
            width: LINE_WIDTH,
        }
    }

    /// Dashed line, no point markers.
    pub fn dashed(color: Color32) -> Self {
        Self {
            color,
            line: LineKind::Dashed,
            marker: None,
            width: LINE_WIDTH,
        }
    }
}

pub fn to_color32(rgb: Srgb<u8>) -> Color32 {
    Color32::from_rgb(rgb.red, rgb.green, rgb.blue)
}

// ---------------------------------------------------------------------------
// Style table: category → SeriesStyle
// ---------------------------------------------------------------------------

/// Colorblind-accessible palette (IBM Design Library).
const CONTINENT_COLORS: [(&str, Srgb<u8>); 5] = [
    ("Africa", Srgb::new(0x33, 0x22, 0x88)),
    ("Asia", Srgb::new(0x78, 0x5E, 0xF0)),
    ("Europe", Srgb::new(0xDC, 0x26, 0x7F)),
    ("North America", Srgb::new(0xFE, 0x61, 0x00)),
    ("South America", Srgb::new(0xFF, 0xB0, 0x00)),
];

/// Fixed mapping from category name to style, with a fallback for names it
/// does not know.
#[derive(Debug, Clone)]
pub struct StyleTable {
    mapping: BTreeMap<String, SeriesStyle>,
    default_style: SeriesStyle,
}

impl StyleTable {
    /// Table with the five continents, `World` as a black dashed total and
    /// blue for anything else.
    pub fn standard() -> Self {
        let mut mapping: BTreeMap<String, SeriesStyle> = CONTINENT_COLORS
            .iter()
            .map(|&(name, rgb)| (name.to_string(), SeriesStyle::marked(to_color32(rgb))))
            .collect();
        mapping.insert(WORLD.to_string(), SeriesStyle::dashed(to_color32(named::BLACK)));

        StyleTable {
            mapping,
            default_style: SeriesStyle::marked(to_color32(named::BLUE)),
        }
    }

    /// Look up the style for a category, falling back to the default.
    pub fn style_for(&self, category: &str) -> SeriesStyle {
        self.mapping
            .get(category)
            .copied()
            .unwrap_or(self.default_style)
    }

    pub fn is_known(&self, category: &str) -> bool {
        self.mapping.contains_key(category)
    }

    pub fn default_style(&self) -> SeriesStyle {
        self.default_style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn world_is_black_dashed_without_markers() {
        let table = StyleTable::standard();
        let world = table.style_for(WORLD);
        assert_eq!(world.color, Color32::BLACK);
        assert_eq!(world.line, LineKind::Dashed);
        assert!(world.marker.is_none());
    }

    #[test]
    fn continents_are_solid_with_markers_and_unlike_world() {
        let table = StyleTable::standard();
        let world = table.style_for(WORLD);
        for (name, rgb) in CONTINENT_COLORS {
            let style = table.style_for(name);
            assert_eq!(style.color, Color32::from_rgb(rgb.red, rgb.green, rgb.blue));
            assert_eq!(style.line, LineKind::Solid);
            assert!(style.marker.is_some());
            assert_ne!(style, world);
        }
    }

    #[test]
    fn palette_matches_hex_codes() {
        let table = StyleTable::standard();
        assert_eq!(
            table.style_for("Africa").color,
            Color32::from_rgb(0x33, 0x22, 0x88)
        );
        assert_eq!(
            table.style_for("South America").color,
            Color32::from_rgb(0xFF, 0xB0, 0x00)
        );
    }

    #[test]
    fn unknown_category_falls_back_to_blue() {
        let table = StyleTable::standard();
        assert!(!table.is_known("Antarctica"));
        let style = table.style_for("Antarctica");
        assert_eq!(style, table.default_style());
        assert_eq!(style.color, Color32::from_rgb(0, 0, 255));
        assert!(style.marker.is_some());
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let table = StyleTable::standard();
        assert_eq!(table.style_for("world"), table.default_style());
    }
}
