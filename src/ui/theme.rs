use crate::scoring::SimilarityBand;
use crossterm::style::Color;

/// Result colours
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub text: Color,
    pub accent: Color,
    pub dimmed: Color,
    pub warning: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::midnight()
    }
}

impl Theme {
    pub fn midnight() -> Self {
        Self {
            text: Color::Rgb {
                r: 169,
                g: 177,
                b: 214,
            }, // #A9B1D6 Light Blue
            accent: Color::Rgb {
                r: 122,
                g: 162,
                b: 247,
            }, // #7AA2F7 Blue
            dimmed: Color::Rgb {
                r: 100,
                g: 110,
                b: 150,
            }, // #646E96 Dimmed Blue
            warning: Color::Rgb {
                r: 224,
                g: 175,
                b: 104,
            }, // #E0AF68 Amber
        }
    }

    /// Colour for a similarity band, red through green
    pub fn band(&self, band: SimilarityBand) -> Color {
        match band {
            SimilarityBand::Poor => Color::Rgb {
                r: 247,
                g: 118,
                b: 142,
            },
            SimilarityBand::Weak => Color::Rgb {
                r: 255,
                g: 158,
                b: 100,
            },
            SimilarityBand::Fair => Color::Rgb {
                r: 224,
                g: 175,
                b: 104,
            },
            SimilarityBand::Good => Color::Rgb {
                r: 187,
                g: 201,
                b: 106,
            },
            SimilarityBand::Great => Color::Rgb {
                r: 158,
                g: 206,
                b: 106,
            },
            SimilarityBand::Excellent => Color::Rgb {
                r: 115,
                g: 218,
                b: 202,
            },
        }
    }
}
