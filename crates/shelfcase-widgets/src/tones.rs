//! The spine tone palette.
//!
//! Six named tones cycled across real items so adjacent spines differ
//! predictably; decorative filler draws from the same set at random.

use egui::Color32;

/// A named spine color scheme.
#[derive(Clone, Copy)]
pub struct Tone {
    /// Tone name (e.g., "sunrise", "forest")
    pub name: &'static str,
    /// Main spine fill.
    pub fill: Color32,
    /// Darker shade for the bound edge and outline.
    pub edge: Color32,
}

impl Tone {
    /// Create a new tone from RGB tuples.
    pub const fn new(name: &'static str, fill: (u8, u8, u8), edge: (u8, u8, u8)) -> Self {
        Self {
            name,
            fill: Color32::from_rgb(fill.0, fill.1, fill.2),
            edge: Color32::from_rgb(edge.0, edge.1, edge.2),
        }
    }

    /// Black-ish or white ink, whichever reads against the fill.
    pub fn ink(&self) -> Color32 {
        if luminance(self.fill) > 0.6 {
            Color32::from_rgb(45, 38, 30)
        } else {
            Color32::WHITE
        }
    }
}

/// The shelf palette, in cycling order.
pub const TONES: &[Tone] = &[
    Tone::new("sunrise", (236, 151, 78), (186, 106, 44)),
    Tone::new("forest", (58, 111, 84), (38, 78, 57)),
    Tone::new("berry", (142, 68, 120), (101, 44, 84)),
    Tone::new("ocean", (58, 106, 154), (37, 74, 112)),
    Tone::new("rose", (210, 110, 128), (163, 76, 93)),
    Tone::new("sand", (222, 198, 156), (179, 153, 112)),
];

/// Tone for a palette index (cyclic).
pub fn tone_for(index: usize) -> &'static Tone {
    &TONES[index % TONES.len()]
}

/// Relative luminance of a color, in `0..=1`.
fn luminance(color: Color32) -> f32 {
    let [r, g, b, _] = color.to_array();
    (0.2126 * r as f32 + 0.7152 * g as f32 + 0.0722 * b as f32) / 255.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_wraps() {
        assert_eq!(tone_for(0).name, tone_for(TONES.len()).name);
        assert_ne!(tone_for(0).name, tone_for(1).name);
    }

    #[test]
    fn test_ink_contrast() {
        // Light tones get dark ink, dark tones get white ink.
        assert_ne!(tone_for(5).ink(), Color32::WHITE); // sand
        assert_eq!(tone_for(1).ink(), Color32::WHITE); // forest
    }
}
