//! Hex parsing and RGB to HSL conversion.

/// 8-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Uppercase `#RRGGBB` form.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Hue in degrees `[0, 360)`, saturation and lightness in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

/// Parse a 6-digit hex color. The leading `#` is optional.
///
/// Returns `None` for anything else, including 3-digit shorthand.
pub fn parse_hex(hex: &str) -> Option<Rgb> {
    let digits = hex.trim().strip_prefix('#').unwrap_or(hex.trim());
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    Some(Rgb {
        r: channel(0..2)?,
        g: channel(2..4)?,
        b: channel(4..6)?,
    })
}

/// Standard RGB to HSL conversion. Achromatic input yields `h = 0, s = 0`.
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if rgb.r == rgb.g && rgb.g == rgb.b {
        return Hsl { h: 0.0, s: 0.0, l };
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let sector = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    let h = (sector / 6.0 * 360.0) % 360.0;
    Hsl { h, s, l }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn parses_with_and_without_hash() {
        assert_eq!(parse_hex("#3B82F6"), Some(Rgb::new(59, 130, 246)));
        assert_eq!(parse_hex("3b82f6"), Some(Rgb::new(59, 130, 246)));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert_eq!(parse_hex("#fff"), None);
        assert_eq!(parse_hex("#GGGGGG"), None);
        assert_eq!(parse_hex(""), None);
        assert_eq!(parse_hex("#3B82F6FF"), None);
        assert_eq!(parse_hex("#ééé"), None);
    }

    #[test]
    fn converts_known_colors() {
        let red = rgb_to_hsl(Rgb::new(255, 0, 0));
        assert!(approx(red.h, 0.0) && approx(red.s, 1.0) && approx(red.l, 0.5));

        let blue = rgb_to_hsl(Rgb::new(59, 130, 246));
        assert!(approx(blue.h, 217.219), "hue was {}", blue.h);
        assert!(approx(blue.l, 0.598), "lightness was {}", blue.l);

        let magenta = rgb_to_hsl(Rgb::new(255, 0, 128));
        assert!(magenta.h > 329.0 && magenta.h < 331.0);
    }

    #[test]
    fn achromatic_has_zero_hue_and_saturation() {
        let gray = rgb_to_hsl(Rgb::new(128, 128, 128));
        assert_eq!(gray.h, 0.0);
        assert_eq!(gray.s, 0.0);
        assert!(approx(gray.l, 0.502));
    }

    #[test]
    fn hex_output_is_uppercase() {
        assert_eq!(Rgb::new(14, 165, 233).to_hex(), "#0EA5E9");
    }
}
