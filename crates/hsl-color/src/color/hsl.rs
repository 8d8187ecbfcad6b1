//! HSL color type

use super::rgb8::Rgb8;

/// A color in HSL (hue, saturation, lightness) form.
///
/// Hue is stored in degrees, normalized into `0.0..360.0`. Saturation and
/// lightness are percentages clamped into `0.0..=100.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue in degrees (0.0..360.0)
    pub h: f64,
    /// Saturation in percent (0.0..=100.0)
    pub s: f64,
    /// Lightness in percent (0.0..=100.0)
    pub l: f64,
}

impl Hsl {
    /// Create a new HSL color, wrapping the hue and clamping s/l.
    ///
    /// # Example
    /// ```
    /// use hsl_color::Hsl;
    /// let color = Hsl::new(370.0, 120.0, 50.0);
    /// assert_eq!(color.h, 10.0);
    /// assert_eq!(color.s, 100.0);
    /// ```
    #[inline]
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self {
            h: h.rem_euclid(360.0),
            s: s.clamp(0.0, 100.0),
            l: l.clamp(0.0, 100.0),
        }
    }

    /// Compute the unit-range RGB channels (0.0..=1.0).
    ///
    /// Uses the chroma construction: `c` is the chroma, `x` the second
    /// largest component and `m` the lightness offset added to all channels.
    pub fn to_unit_rgb(self) -> [f64; 3] {
        let s = self.s / 100.0;
        let l = self.l / 100.0;

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - ((self.h / 60.0) % 2.0 - 1.0).abs());
        let m = l - c / 2.0;

        // h is already in 0..360, so exactly one sextant matches
        let (r, g, b) = match self.h {
            h if h < 60.0 => (c, x, 0.0),
            h if h < 120.0 => (x, c, 0.0),
            h if h < 180.0 => (0.0, c, x),
            h if h < 240.0 => (0.0, x, c),
            h if h < 300.0 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        [r + m, g + m, b + m]
    }
}

impl From<Hsl> for Rgb8 {
    fn from(hsl: Hsl) -> Self {
        let [r, g, b] = hsl.to_unit_rgb();
        Rgb8::from_unit(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_normalizes() {
        let color = Hsl::new(-30.0, -5.0, 150.0);
        assert_eq!(color.h, 330.0);
        assert_eq!(color.s, 0.0);
        assert_eq!(color.l, 100.0);
    }

    #[test]
    fn test_unit_rgb_red() {
        let [r, g, b] = Hsl::new(0.0, 100.0, 50.0).to_unit_rgb();
        assert!((r - 1.0).abs() < 1e-12);
        assert!(g.abs() < 1e-12);
        assert!(b.abs() < 1e-12);
    }

    #[test]
    fn test_sextant_boundaries() {
        // Each boundary hue lands on a pure primary or secondary
        let cases = [
            (0.0, Rgb8::new(255, 0, 0)),
            (60.0, Rgb8::new(255, 255, 0)),
            (120.0, Rgb8::new(0, 255, 0)),
            (180.0, Rgb8::new(0, 255, 255)),
            (240.0, Rgb8::new(0, 0, 255)),
            (300.0, Rgb8::new(255, 0, 255)),
        ];
        for (h, expected) in cases {
            assert_eq!(Rgb8::from(Hsl::new(h, 100.0, 50.0)), expected, "hue {h}");
        }
    }
}
