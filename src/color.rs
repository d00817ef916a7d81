use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: room type → Color32
// ---------------------------------------------------------------------------

/// Maps each room type to a distinct colour, used by the sidebar swatches
/// and the bar-chart stacks.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl ColorMap {
    /// Build a colour map over the given room types (dataset order).
    pub fn new(room_types: &[String]) -> Self {
        let palette = generate_palette(room_types.len());
        let mapping: BTreeMap<String, Color32> = room_types
            .iter()
            .cloned()
            .zip(palette.into_iter())
            .collect();

        ColorMap {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a room type.
    pub fn color_for(&self, room_type: &str) -> Color32 {
        self.mapping
            .get(room_type)
            .copied()
            .unwrap_or(self.default_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_size_and_distinct_colours() {
        assert!(generate_palette(0).is_empty());
        let palette = generate_palette(3);
        assert_eq!(palette.len(), 3);
        assert_ne!(palette[0], palette[1]);
        assert_ne!(palette[1], palette[2]);
    }

    #[test]
    fn unknown_room_type_falls_back_to_gray() {
        let map = ColorMap::new(&["Entire home/apt".to_string()]);
        assert_ne!(map.color_for("Entire home/apt"), Color32::GRAY);
        assert_eq!(map.color_for("Castle"), Color32::GRAY);
    }
}
