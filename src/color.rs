use eframe::egui::Color32;
use palette::{Darken, Hsl, IntoColor, Srgb};

use crate::chart::Metric;

// ---------------------------------------------------------------------------
// Hex accent colours → Color32
// ---------------------------------------------------------------------------

/// Parse `#rrggbb` (or `rrggbb`) into an egui colour.
///
/// Falls back to grey for malformed input so a bad constant never blanks a chart.
pub fn hex_to_color32(hex: &str) -> Color32 {
    match hex.parse::<Srgb<u8>>() {
        Ok(rgb) => Color32::from_rgb(rgb.red, rgb.green, rgb.blue),
        Err(e) => {
            log::warn!("Invalid colour '{hex}': {e}");
            Color32::GRAY
        }
    }
}

/// Line colour for a metric's chart.
pub fn accent_color(metric: Metric) -> Color32 {
    hex_to_color32(metric.color())
}

/// A darker shade of the accent, used for the chart heading text.
pub fn heading_color(metric: Metric) -> Color32 {
    let Ok(rgb) = metric.color().parse::<Srgb<u8>>() else {
        return Color32::GRAY;
    };
    let hsl: Hsl = rgb.into_format::<f32>().into_color();
    let darker: Srgb = hsl.darken(0.25).into_color();
    let out: Srgb<u8> = darker.into_format();
    Color32::from_rgb(out.red, out.green, out.blue)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_accent_constants() {
        assert_eq!(accent_color(Metric::Trips), Color32::from_rgb(0x17, 0xB8, 0x97));
        assert_eq!(
            accent_color(Metric::VehicleRevenueMiles),
            Color32::from_rgb(0xE1, 0x2D, 0x39)
        );
    }

    #[test]
    fn accepts_hex_without_hash_and_rejects_garbage() {
        assert_eq!(hex_to_color32("17B897"), Color32::from_rgb(0x17, 0xB8, 0x97));
        assert_eq!(hex_to_color32("not a colour"), Color32::GRAY);
    }

    #[test]
    fn heading_is_darker_than_accent() {
        for metric in [Metric::Trips, Metric::VehicleRevenueMiles] {
            let accent = accent_color(metric);
            let heading = heading_color(metric);
            let sum = |c: Color32| c.r() as u32 + c.g() as u32 + c.b() as u32;
            assert!(sum(heading) < sum(accent));
        }
    }
}
