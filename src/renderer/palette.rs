//! Colors for game elements

use serde::{Deserialize, Serialize};

use super::vertex::Rgba;

/// 24-bit sRGB color, stored as `0xRRGGBB`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u32);

impl Rgb {
    pub const fn channels(self) -> (u8, u8, u8) {
        (
            ((self.0 >> 16) & 0xff) as u8,
            ((self.0 >> 8) & 0xff) as u8,
            (self.0 & 0xff) as u8,
        )
    }

    /// Opaque color with channels in 0..=1
    pub fn to_rgba(self) -> Rgba {
        let (r, g, b) = self.channels();
        [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
    }

    /// CSS hex notation, e.g. `#6f4e37`
    pub fn css(self) -> String {
        format!("#{:06x}", self.0 & 0x00ff_ffff)
    }
}

/// Full set of colors used to draw a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb,
    pub paddle: Rgb,
    pub ball: Rgb,
    pub text: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self::classic()
    }
}

impl Palette {
    /// Coffee-brown table, cream paddles, olive ball
    pub const fn classic() -> Self {
        Self {
            background: Rgb(0x6f4e37),
            paddle: Rgb(0xeaddca),
            ball: Rgb(0x808000),
            text: Rgb(0x593e2d),
        }
    }

    pub const fn high_contrast() -> Self {
        Self {
            background: Rgb(0x000000),
            paddle: Rgb(0xffffff),
            ball: Rgb(0xffff00),
            text: Rgb(0xbbbbbb),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channels_and_css() {
        let c = Rgb(0x6f4e37);
        assert_eq!(c.channels(), (0x6f, 0x4e, 0x37));
        assert_eq!(c.css(), "#6f4e37");
        assert_eq!(Rgb(0x00000a).css(), "#00000a");
    }

    #[test]
    fn test_to_rgba_range() {
        assert_eq!(Rgb(0xffffff).to_rgba(), [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(Rgb(0x000000).to_rgba(), [0.0, 0.0, 0.0, 1.0]);
    }
}
