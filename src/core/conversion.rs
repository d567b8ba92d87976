//! Conversions between RGB, hex strings and HSL.
//!
//! All functions are pure. `hex_to_rgb` is lenient: anything that is not a
//! 6-digit hex color becomes black, so validate user input before calling it
//! (see `utils::validation::validate_hex_color`).

use crate::domain::model::{ColorInfo, Hsl, Rgb};

/// Worst per-channel drift of `hsl_to_rgb(rgb_to_hsl(c))` over all 8-bit colors.
///
/// Integer HSL has 1° / 1% resolution, which is coarser than 8-bit RGB. The
/// unrounded pair `rgb_to_hsl_exact` / `hsl_to_rgb_exact` stays within one unit.
pub const HSL_QUANTIZATION_TOLERANCE: u8 = 5;

pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

pub fn hex_to_rgb(hex: &str) -> Rgb {
    parse_hex(hex).unwrap_or(Rgb::BLACK)
}

fn parse_hex(hex: &str) -> Option<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
}

/// HSL with fractional degrees and percentages.
pub fn rgb_to_hsl_exact(r: u8, g: u8, b: u8) -> (f64, f64, f64) {
    let r = f64::from(r) / 255.0;
    let g = f64::from(g) / 255.0;
    let b = f64::from(b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return (0.0, 0.0, l * 100.0);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    (h / 6.0 * 360.0, s * 100.0, l * 100.0)
}

pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> Hsl {
    let (h, s, l) = rgb_to_hsl_exact(r, g, b);
    // a hue just under 360 rounds up to it
    let h = (h.round() as u16) % 360;
    Hsl::new(h, s.round() as u8, l.round() as u8)
}

fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let mut t = t;
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn to_channel(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Inverse of `rgb_to_hsl_exact`; degrees and percentages may be fractional.
pub fn hsl_to_rgb_exact(h: f64, s: f64, l: f64) -> Rgb {
    let h = h / 360.0;
    let s = s / 100.0;
    let l = l / 100.0;

    if s == 0.0 {
        let gray = to_channel(l);
        return Rgb::new(gray, gray, gray);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    Rgb::new(
        to_channel(hue_to_rgb(p, q, h + 1.0 / 3.0)),
        to_channel(hue_to_rgb(p, q, h)),
        to_channel(hue_to_rgb(p, q, h - 1.0 / 3.0)),
    )
}

pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    hsl_to_rgb_exact(f64::from(hsl.h), f64::from(hsl.s), f64::from(hsl.l))
}

impl ColorInfo {
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self {
            hex: rgb_to_hex(rgb.r, rgb.g, rgb.b),
            rgb,
            hsl: rgb_to_hsl(rgb.r, rgb.g, rgb.b),
            name: None,
        }
    }

    /// Lenient like `hex_to_rgb`; the stored hex is the canonical lowercase form.
    pub fn from_hex(hex: &str) -> Self {
        Self::from_rgb(hex_to_rgb(hex))
    }

    /// Keeps `hsl` as given and derives RGB and hex from it.
    pub fn from_hsl(hsl: Hsl) -> Self {
        let rgb = hsl_to_rgb(hsl);
        Self {
            hex: rgb_to_hex(rgb.r, rgb.g, rgb.b),
            rgb,
            hsl,
            name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}
