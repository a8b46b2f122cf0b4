//! HSV colors and their conversion to hex RGB

use std::fmt;

/// A color in hue/saturation/value form, hue measured in turns
///
/// Components may stray outside `[0, 1]` while palettes and filters are
/// applied; conversion wraps hue and clamps the rest.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Hsv {
    /// Hue in turns; wraps modulo one
    pub hue: f64,
    /// Saturation, clamped to `[0, 1]` on conversion
    pub saturation: f64,
    /// Value (brightness), clamped to `[0, 1]` on conversion
    pub value: f64,
}

impl Hsv {
    /// Create a color
    pub const fn new(hue: f64, saturation: f64, value: f64) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }

    /// Same color with the hue shifted by `turns`
    #[must_use]
    pub const fn shift_hue(self, turns: f64) -> Self {
        Self::new(self.hue + turns, self.saturation, self.value)
    }

    /// Same color with the value shifted by `amount`
    #[must_use]
    pub const fn shift_value(self, amount: f64) -> Self {
        Self::new(self.hue, self.saturation, self.value + amount)
    }

    /// Convert to 8-bit RGB
    pub fn to_rgb(self) -> Rgb {
        let hue = self.hue.rem_euclid(1.0);
        let saturation = self.saturation.clamp(0.0, 1.0);
        let value = self.value.clamp(0.0, 1.0);

        let (r, g, b) = if saturation == 0.0 {
            (value, value, value)
        } else {
            let sector = (hue * 6.0).floor();
            let fraction = hue.mul_add(6.0, -sector);
            let p = value * (1.0 - saturation);
            let q = value * saturation.mul_add(-fraction, 1.0);
            let t = value * saturation.mul_add(-(1.0 - fraction), 1.0);
            match (sector as i64).rem_euclid(6) {
                0 => (value, t, p),
                1 => (q, value, p),
                2 => (p, value, t),
                3 => (p, q, value),
                4 => (t, p, value),
                _ => (value, p, q),
            }
        };

        Rgb([channel(r), channel(g), channel(b)])
    }
}

/// Scale a `[0, 1]` component by 256 and clamp into a byte
fn channel(component: f64) -> u8 {
    (component * 256.0).clamp(0.0, 255.0) as u8
}

/// An 8-bit RGB triple
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    /// Lower-case six digit hex, without a leading `#`
    pub fn hex(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "{r:02x}{g:02x}{b:02x}")
    }
}
