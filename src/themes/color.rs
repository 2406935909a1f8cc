//! Color values and the darken-then-desaturate transform used to derive
//! inactive-window colors.
//!
//! Lightness and saturation are adjusted in HSL space by percentage
//! points, so `darken(20.0)` takes a color at 60% lightness to 40%.

use crate::error::{IconlineError, Result};
use std::fmt;

/// Percentage points of lightness removed when no darkness is given.
pub const DEFAULT_DARKNESS: f64 = 20.0;

/// Percentage points of saturation removed when no desaturation is given.
pub const DEFAULT_DESATURATION: f64 = 40.0;

const NAMED_COLORS: &[(&str, &str)] = &[
    ("black", "#000000"),
    ("white", "#ffffff"),
    ("red", "#ff0000"),
    ("green", "#00ff00"),
    ("blue", "#0000ff"),
    ("yellow", "#ffff00"),
    ("cyan", "#00ffff"),
    ("magenta", "#ff00ff"),
    ("orange", "#ffa500"),
    ("purple", "#a020f0"),
    ("gray", "#bebebe"),
    ("grey", "#bebebe"),
    ("dark gray", "#a9a9a9"),
    ("light gray", "#d3d3d3"),
    ("gold", "#ffd700"),
    ("tomato", "#ff6347"),
    ("salmon", "#fa8072"),
    ("orchid", "#da70d6"),
    ("steel blue", "#4682b4"),
    ("sky blue", "#87ceeb"),
    ("sea green", "#2e8b57"),
    ("forest green", "#228b22"),
    ("dark orange", "#ff8c00"),
    ("firebrick", "#b22222"),
];

/// An sRGB color with channels in `[0.0, 1.0]`.
///
/// Colors are immutable; every adjustment returns a new value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: f64::from(r) / 255.0,
            g: f64::from(g) / 255.0,
            b: f64::from(b) / 255.0,
        }
    }

    /// Parse `#RGB`, `#RRGGBB` or a color name (case and spacing insensitive).
    pub fn parse(spec: &str) -> Result<Self> {
        let trimmed = spec.trim();
        if trimmed.starts_with('#') {
            return Self::from_hex(trimmed).ok_or_else(|| IconlineError::InvalidColor(spec.to_string()));
        }

        let wanted = normalize_name(trimmed);
        NAMED_COLORS
            .iter()
            .find(|(name, _)| normalize_name(name) == wanted)
            .and_then(|(_, hex)| Self::from_hex(hex))
            .ok_or_else(|| IconlineError::InvalidColor(spec.to_string()))
    }

    fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let byte = |s: &str| u8::from_str_radix(s, 16).ok();

        match hex.len() {
            3 => {
                let nibble = |i: usize| byte(&hex[i..=i]).map(|v| v * 17);
                Some(Self::rgb8(nibble(0)?, nibble(1)?, nibble(2)?))
            }
            6 => Some(Self::rgb8(byte(&hex[0..2])?, byte(&hex[2..4])?, byte(&hex[4..6])?)),
            _ => None,
        }
    }

    pub fn to_rgb8(self) -> (u8, u8, u8) {
        let channel = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        (channel(self.r), channel(self.g), channel(self.b))
    }

    pub fn to_hex(self) -> String {
        let (r, g, b) = self.to_rgb8();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    /// Hue in `[0, 1)`, saturation and lightness in `[0, 1]`.
    pub fn to_hsl(self) -> (f64, f64, f64) {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        let delta = max - min;
        let l = (max + min) / 2.0;

        if delta < f64::EPSILON {
            return (0.0, 0.0, l);
        }

        let s = if l <= 0.5 {
            delta / (max + min)
        } else {
            delta / (2.0 - max - min)
        };

        let h = if (self.r - max).abs() < f64::EPSILON {
            (self.g - self.b) / delta
        } else if (self.g - max).abs() < f64::EPSILON {
            2.0 + (self.b - self.r) / delta
        } else {
            4.0 + (self.r - self.g) / delta
        };

        ((h / 6.0).rem_euclid(1.0), s, l)
    }

    pub fn from_hsl(h: f64, s: f64, l: f64) -> Self {
        if s <= 0.0 {
            return Self { r: l, g: l, b: l };
        }

        let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let m1 = 2.0 * l - m2;

        Self {
            r: hue_to_channel(m1, m2, h + 1.0 / 3.0),
            g: hue_to_channel(m1, m2, h),
            b: hue_to_channel(m1, m2, h - 1.0 / 3.0),
        }
    }

    pub fn lightness(self) -> f64 {
        self.to_hsl().2
    }

    pub fn saturation(self) -> f64 {
        self.to_hsl().1
    }

    /// Remove `percent` points of HSL lightness, clamped at black.
    #[must_use]
    pub fn darken(self, percent: f64) -> Self {
        let (h, s, l) = self.to_hsl();
        Self::from_hsl(h, s, (l - percent / 100.0).clamp(0.0, 1.0))
    }

    /// Remove `percent` points of HSL saturation, clamped at gray.
    #[must_use]
    pub fn desaturate(self, percent: f64) -> Self {
        let (h, s, l) = self.to_hsl();
        Self::from_hsl(h, (s - percent / 100.0).clamp(0.0, 1.0), l)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

fn hue_to_channel(m1: f64, m2: f64, h: f64) -> f64 {
    let h = h.rem_euclid(1.0);
    if h < 1.0 / 6.0 {
        m1 + (m2 - m1) * h * 6.0
    } else if h < 0.5 {
        m2
    } else if h < 2.0 / 3.0 {
        m1 + (m2 - m1) * (2.0 / 3.0 - h) * 6.0
    } else {
        m1
    }
}

/// Derives inactive colors. Holds the defaults used when a caller leaves
/// darkness or desaturation unspecified.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorTransform {
    pub darkness: f64,
    pub desaturation: f64,
}

impl Default for ColorTransform {
    fn default() -> Self {
        Self {
            darkness: DEFAULT_DARKNESS,
            desaturation: DEFAULT_DESATURATION,
        }
    }
}

impl ColorTransform {
    pub fn new(darkness: f64, desaturation: f64) -> Self {
        Self { darkness, desaturation }
    }

    /// Darken, then desaturate. The order matters and is fixed.
    pub fn adjust(&self, color: Color, darkness: Option<f64>, desaturation: Option<f64>) -> Color {
        color
            .darken(darkness.unwrap_or(self.darkness))
            .desaturate(desaturation.unwrap_or(self.desaturation))
    }

    /// Parse `spec` and adjust it. An unparseable color is an error.
    pub fn adjust_name(&self, spec: &str, darkness: Option<f64>, desaturation: Option<f64>) -> Result<Color> {
        Ok(self.adjust(Color::parse(spec)?, darkness, desaturation))
    }
}
