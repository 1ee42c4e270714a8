use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, LinSrgb, Mix, Srgb};

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
// Species colors: species name → Color32
// ---------------------------------------------------------------------------

/// Maps each species of the dataset to a distinct colour, stable for
/// the process lifetime (the species set never changes after load).
#[derive(Debug, Clone)]
pub struct SpeciesColors {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl SpeciesColors {
    /// Build the map from the dataset's ordered species list.
    pub fn new(species: &[String]) -> Self {
        let palette = generate_palette(species.len());
        let mapping: BTreeMap<String, Color32> = species
            .iter()
            .cloned()
            .zip(palette.into_iter())
            .collect();

        SpeciesColors {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a species.
    pub fn color_for(&self, species: &str) -> Color32 {
        self.mapping
            .get(species)
            .copied()
            .unwrap_or(self.default_color)
    }
}

// ---------------------------------------------------------------------------
// Diverging ramp for the correlation heatmap
// ---------------------------------------------------------------------------

/// Map a correlation coefficient in `[-1, 1]` onto a cool–warm ramp
/// (blue through white to red). NaN renders as neutral grey.
pub fn correlation_color(r: f64) -> Color32 {
    if r.is_nan() {
        return Color32::from_gray(120);
    }
    let t = ((r.clamp(-1.0, 1.0) + 1.0) / 2.0) as f32;

    let cool = LinSrgb::new(0.23_f32, 0.30, 0.75);
    let warm = LinSrgb::new(0.71_f32, 0.02, 0.15);
    let white = LinSrgb::new(0.86_f32, 0.86, 0.86);

    let rgb = if t < 0.5 {
        cool.mix(white, t * 2.0)
    } else {
        white.mix(warm, (t - 0.5) * 2.0)
    };
    let srgb: Srgb = Srgb::from_linear(rgb);
    Color32::from_rgb(
        (srgb.red * 255.0) as u8,
        (srgb.green * 255.0) as u8,
        (srgb.blue * 255.0) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_colors_are_distinct() {
        let colors = generate_palette(3);
        assert_eq!(colors.len(), 3);
        assert_ne!(colors[0], colors[1]);
        assert_ne!(colors[1], colors[2]);
        assert!(generate_palette(0).is_empty());
    }

    #[test]
    fn species_map_is_stable_and_total() {
        let species = vec!["setosa".to_string(), "virginica".to_string()];
        let colors = SpeciesColors::new(&species);
        assert_eq!(colors.color_for("setosa"), colors.color_for("setosa"));
        assert_ne!(colors.color_for("setosa"), colors.color_for("virginica"));
        // unknown labels fall back instead of panicking
        assert_eq!(colors.color_for("tulip"), Color32::GRAY);
    }

    #[test]
    fn correlation_ramp_endpoints_diverge() {
        let lo = correlation_color(-1.0);
        let hi = correlation_color(1.0);
        assert!(lo.b() > lo.r(), "negative end should lean blue");
        assert!(hi.r() > hi.b(), "positive end should lean red");
        assert_eq!(correlation_color(f64::NAN), Color32::from_gray(120));
    }
}
