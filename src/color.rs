use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Card accents (matching the original dashboard styling)
// ---------------------------------------------------------------------------

/// Light Salmon – confirmed cases card.
pub const CONFIRMED_ACCENT: Color32 = Color32::from_rgb(0xFF, 0xA0, 0x7A);
/// Light Pink – deaths card.
pub const DEATHS_ACCENT: Color32 = Color32::from_rgb(0xFF, 0xB6, 0xC1);
/// Pale Green – recovered card.
pub const RECOVERED_ACCENT: Color32 = Color32::from_rgb(0x98, 0xFB, 0x98);

/// Background for the metric cards.
pub const CARD_BACKGROUND: Color32 = Color32::from_rgb(0x10, 0x10, 0x10);

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct pastel colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.65, 0.70);
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
// Color mapping: WHO region → Color32
// ---------------------------------------------------------------------------

/// Maps each WHO region to a fixed colour so the bar and pie charts stay
/// consistent with each other regardless of which rows are filtered in.
#[derive(Debug, Clone)]
pub struct RegionColors {
    mapping: Vec<(String, Color32)>,
    default_color: Color32,
}

impl RegionColors {
    /// Assign palette colours to the regions in their dataset order.
    pub fn new(regions: &[String]) -> Self {
        let palette = generate_palette(regions.len());
        let mapping = regions.iter().cloned().zip(palette).collect();

        RegionColors {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a given region.
    pub fn color_for(&self, region: &str) -> Color32 {
        self.mapping
            .iter()
            .find(|(name, _)| name == region)
            .map(|(_, c)| *c)
            .unwrap_or(self.default_color)
    }
}
